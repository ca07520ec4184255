use std::sync::Arc;

use crate::{
    ast::{Action, ActionKind, LogicOp, Prefix, PrefixToken, Suffix},
    config::GroupPolicy,
    error::StructureError,
};

/// Snapshot of a query chain.
///
/// Sequences are shared between snapshots through `Arc` and copied only when
/// a snapshot that shares them is modified, so cloning is cheap and a clone
/// never observes changes made to another clone.
#[derive(Debug, Clone, Default)]
pub struct QueryState {
    pub(crate) actions: Arc<Vec<Action>>,
    pub(crate) prefixes: Arc<Vec<Prefix>>,
    pub(crate) suffixes: Arc<Vec<Suffix>>,
    /// Action index of every `(` not yet closed, innermost last
    pub(crate) open_groups: Arc<Vec<usize>>,
    pub(crate) distinct: Arc<Vec<String>>,
    pub(crate) limit: Option<usize>,
    /// Connective for the next appended action (`None` means the default)
    pub(crate) operator: Option<LogicOp>,
}

impl QueryState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    pub fn prefixes(&self) -> &[Prefix] {
        &self.prefixes
    }

    pub fn suffixes(&self) -> &[Suffix] {
        &self.suffixes
    }

    pub fn distinct(&self) -> &[String] {
        &self.distinct
    }

    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    /// Connective the next appended action will receive.
    pub fn pending_operator(&self) -> LogicOp {
        self.operator.unwrap_or_default()
    }

    /// Number of groups opened and not yet closed.
    pub fn open_group_depth(&self) -> usize {
        self.open_groups.len()
    }

    /// Appends an action connected by the pending operator, then resets it.
    pub(crate) fn push_action(&mut self, kind: ActionKind) {
        let operator = self.operator.take().unwrap_or_default();
        Arc::make_mut(&mut self.actions).push(Action::new(operator, kind));
    }

    pub(crate) fn set_operator(&mut self, operator: LogicOp) {
        self.operator = Some(operator);
    }

    pub(crate) fn open_group(&mut self) {
        let at = self.actions.len();
        Arc::make_mut(&mut self.prefixes).push(Prefix {
            token: PrefixToken::OpenGroup,
            at,
        });
        Arc::make_mut(&mut self.open_groups).push(at);
    }

    pub(crate) fn negate(&mut self) {
        let at = self.actions.len();
        Arc::make_mut(&mut self.prefixes).push(Prefix {
            token: PrefixToken::Not,
            at,
        });
    }

    /// Closes the innermost open group after the last appended action.
    ///
    /// Under `Lenient`, a close with nothing open or nothing inside is
    /// recorded as-is.
    pub(crate) fn close_group(&mut self, policy: GroupPolicy) -> Result<(), StructureError> {
        if policy == GroupPolicy::Strict {
            let start = *self
                .open_groups
                .last()
                .ok_or(StructureError::UnopenedGroup)?;
            if self.actions.len() <= start {
                return Err(StructureError::EmptyGroup);
            }
        }

        self.close_last_group();
        Ok(())
    }

    /// Closes the innermost open group without validation.
    ///
    /// A `)` with no action at all to follow is dropped.
    pub(crate) fn close_last_group(&mut self) {
        if !self.open_groups.is_empty() {
            Arc::make_mut(&mut self.open_groups).pop();
        }

        if let Some(at) = self.actions.len().checked_sub(1) {
            Arc::make_mut(&mut self.suffixes).push(Suffix { at });
        }
    }

    pub(crate) fn add_distinct<I, S>(&mut self, properties: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Arc::make_mut(&mut self.distinct).extend(properties.into_iter().map(Into::into));
    }

    pub(crate) fn set_limit(&mut self, limit: usize) {
        self.limit = Some(limit);
    }
}
