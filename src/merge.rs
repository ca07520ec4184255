use std::sync::Arc;

use tracing::trace;

use crate::{
    ast::{Action, Prefix, Suffix},
    state::QueryState,
};

/// Combine two recorded chains into one.
///
/// The received chain is spliced after the current one as if its calls had
/// been made directly on the current chain:
///
/// 1. The current action count is captured before anything changes.
/// 2. Received markers (and open groups) are rebased by that count.
/// 3. The first received action takes the current pending operator; every
///    later received action keeps its own connective.
/// 4. Actions, markers and distinct properties are concatenated, current first.
///
/// The received limit is discarded; the current one is kept. The pending
/// operator is consumed only when at least one action was spliced in.
///
/// # Examples
/// ```text
/// current:  a == $0                    (pending OR)
/// received: b == $0 AND (c == $0)
/// merged:   a == $0 OR b == $1 AND (c == $2)
/// ```
pub fn merge_states(current: &QueryState, received: &QueryState) -> QueryState {
    let base = current.actions().len();
    let mut merged = current.clone();

    if !received.prefixes().is_empty() {
        Arc::make_mut(&mut merged.prefixes).extend(rebase_prefixes(received.prefixes(), base));
    }
    if !received.suffixes().is_empty() {
        Arc::make_mut(&mut merged.suffixes).extend(rebase_suffixes(received.suffixes(), base));
    }
    if !received.open_groups.is_empty() {
        Arc::make_mut(&mut merged.open_groups).extend(received.open_groups.iter().map(|at| at + base));
    }

    let spliced = splice_actions(current, received.actions());
    if !spliced.is_empty() {
        Arc::make_mut(&mut merged.actions).extend(spliced);
        merged.operator = None;
    }

    if !received.distinct().is_empty() {
        Arc::make_mut(&mut merged.distinct).extend(received.distinct().iter().cloned());
    }

    trace!(
        base,
        received = received.actions().len(),
        "merged query chains"
    );

    merged
}

/// Shift every prefix anchor by `base`.
pub fn rebase_prefixes(prefixes: &[Prefix], base: usize) -> impl Iterator<Item = Prefix> + '_ {
    prefixes.iter().map(move |prefix| Prefix {
        token: prefix.token,
        at: prefix.at + base,
    })
}

/// Shift every suffix anchor by `base`.
pub fn rebase_suffixes(suffixes: &[Suffix], base: usize) -> impl Iterator<Item = Suffix> + '_ {
    suffixes.iter().map(move |suffix| Suffix {
        at: suffix.at + base,
    })
}

/// Copy received actions, attaching the first with the current pending operator.
fn splice_actions(current: &QueryState, received: &[Action]) -> Vec<Action> {
    let mut actions = received.to_vec();

    if let Some(first) = actions.first_mut() {
        first.logical_operator = current.pending_operator();
    }

    actions
}
