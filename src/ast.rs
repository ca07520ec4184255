//! # Realm Query Builder - Predicate Model
//!
//! This module defines the building blocks a query chain is recorded as before
//! it is rendered into a Realm Query Language predicate.
//!
//! ## Architecture Overview
//!
//! The model is organized into focused submodules:
//!
//! - **[operators]** - Comparison, logical and sort operators
//! - **[tokens]** - Fragment tokens (literal text and local placeholders)
//! - **[actions]** - Renderable units: comparisons, constants, raw fragments
//! - **[markers]** - Structural prefixes (`(`, `NOT`) and suffixes (`)`)
//!
//! ## Quick Start
//!
//! ```text
//! status == $0 OR (age >= $1 AND age <= $2) DISTINCT(name) LIMIT(10)
//! ```
//!
//! This predicate is what a chain like
//! `equal_to("status", ..).or().between("age", .., ..).distinct(["name"]).limit(10)`
//! renders to.
//!
//! ## Core Concepts
//!
//! ### Actions Are Flat
//!
//! Nothing is nested in the recorded form. A chain is a flat, append-only list
//! of actions; grouping and negation are markers anchored to an action index:
//!
//! ```text
//! prefixes:  [( @0] [NOT @1]
//! actions:   [a == $0] [b == $0] [c == $0]
//! suffixes:  [) @1]
//! renders:   (a == $0 AND NOT b == $1) AND c == $2
//! ```
//!
//! Flat lists make merging two chains a matter of concatenation plus an index
//! offset, with no tree surgery.
//!
//! ### Local Placeholders
//!
//! Every action numbers its own placeholders from `$0`. The renderer offsets
//! them by the number of values emitted before the action, so an action never
//! needs to know where it ends up in the final predicate.
//!
//! ### Connectives
//!
//! Each action stores the connective that joins it to the action before it.
//! The first action's connective is never rendered.
pub mod actions;
pub mod markers;
pub mod operators;
pub mod tokens;

pub use actions::{Action, ActionKind};
pub use markers::{Prefix, PrefixToken, Suffix};
pub use operators::{Comparison, LogicOp, SortOrder};
pub use tokens::{Fragment, FragmentToken};
