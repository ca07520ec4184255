//! Predicate rendering for recorded query chains.
//!
//! This module turns a [`QueryState`] into the predicate text and positional
//! value list a Realm result set's `filtered` expects. Rendering is pure: the
//! same state always renders to the same output.
//!
//! # Features
//!
//! - **Global numbering** - each action's local `$0..$n` are offset by the
//!   number of values emitted before it
//! - **Stored connectives** - the `AND`/`OR` captured when an action was
//!   appended, never recomputed
//! - **Marker placement** - `(`/`NOT` before and `)` after their anchor action,
//!   in push order
//! - **Tail clauses** - `DISTINCT(..)` and `LIMIT(..)` when present
//!
//! # Examples
//!
//! ```
//! use realm_query_builder::render::render;
//! use realm_query_builder::QueryState;
//!
//! let rendered = render(&QueryState::new());
//! assert_eq!(rendered.expression, "TRUEPREDICATE");
//! assert!(rendered.values.is_empty());
//! ```

use tracing::trace;

use crate::{
    ast::{Action, Prefix, PrefixToken, Suffix},
    config::Spacing,
    state::QueryState,
    value::Value,
};

/// Predicate text plus the values its placeholders refer to.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedQuery {
    pub expression: String,
    pub values: Vec<Value>,
}

pub struct ExpressionPrinter {
    spacing: Spacing,
}

impl ExpressionPrinter {
    pub fn new(spacing: Spacing) -> Self {
        ExpressionPrinter { spacing }
    }

    pub fn print(&self, state: &QueryState) -> RenderedQuery {
        let mut expression = self.print_filter(state);
        expression.push_str(&self.print_tail(state));

        let values: Vec<Value> = state
            .actions()
            .iter()
            .flat_map(|action| action.values().iter().cloned())
            .collect();

        trace!(%expression, values = values.len(), "rendered predicate");

        RenderedQuery { expression, values }
    }

    fn print_filter(&self, state: &QueryState) -> String {
        let actions = state.actions();
        if actions.is_empty() {
            return Action::TRUE_PREDICATE.to_string();
        }

        let mut out = String::new();
        let mut counter = 0;

        for (index, action) in actions.iter().enumerate() {
            if index > 0 {
                out.push(' ');
                out.push_str(&action.logical_operator.to_string());
                out.push(' ');
            }

            self.print_prefixes(&mut out, state.prefixes(), index);
            action.write_fragment(&mut out, counter);
            counter += action.values().len();
            self.print_suffixes(&mut out, state.suffixes(), index);
        }

        out
    }

    fn print_prefixes(&self, out: &mut String, prefixes: &[Prefix], index: usize) {
        for prefix in prefixes.iter().filter(|p| p.at == index) {
            match (self.spacing, prefix.token) {
                (Spacing::Compact, PrefixToken::OpenGroup) => out.push('('),
                (Spacing::Compact, PrefixToken::Not) => out.push_str("NOT "),
                (Spacing::Padded, token) => self.pad(out, token.as_str()),
            }
        }
    }

    fn print_suffixes(&self, out: &mut String, suffixes: &[Suffix], index: usize) {
        for _ in suffixes.iter().filter(|s| s.at == index) {
            match self.spacing {
                Spacing::Compact => out.push_str(Suffix::TOKEN),
                Spacing::Padded => self.pad(out, Suffix::TOKEN),
            }
        }
    }

    fn pad(&self, out: &mut String, token: &str) {
        out.push(' ');
        out.push_str(token);
        out.push(' ');
    }

    fn print_tail(&self, state: &QueryState) -> String {
        let mut tail = String::new();

        if !state.distinct().is_empty() {
            tail.push_str(&format!(" DISTINCT({})", state.distinct().join(",")));
        }

        if let Some(limit) = state.limit() {
            tail.push_str(&format!(" LIMIT({})", limit));
        }

        tail
    }
}

// Convenience functions

/// Renders a state with compact marker spacing.
pub fn render(state: &QueryState) -> RenderedQuery {
    ExpressionPrinter::new(Spacing::Compact).print(state)
}

/// Renders a state with the given marker spacing.
pub fn render_with(state: &QueryState, spacing: Spacing) -> RenderedQuery {
    ExpressionPrinter::new(spacing).print(state)
}
