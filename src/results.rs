use std::error::Error;

use crate::value::Value;

/// A live collection of store objects that can be filtered, sorted and
/// aggregated by the store.
///
/// The builder never evaluates predicates itself. It renders them and hands
/// them to `filtered`; every other operation is delegated as-is.
pub trait ResultSet: Clone {
    /// Object type yielded by indexed access
    type Item;

    /// Store-specific error for malformed predicates or arity mismatches
    type Error: Error + Send + Sync + 'static;

    /// Narrow the collection with a predicate whose `$n` refer to `values[n]`.
    fn filtered(&self, expression: &str, values: &[Value]) -> Result<Self, Self::Error>;

    /// Collection ordered by `property`.
    fn sorted(&self, property: &str, descending: bool) -> Self;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn get(&self, index: usize) -> Option<Self::Item>;

    /// Smallest value of `property` (or of the objects themselves for
    /// collections of primitives), `None` when empty.
    fn min(&self, property: Option<&str>) -> Option<Value>;

    fn max(&self, property: Option<&str>) -> Option<Value>;

    fn sum(&self, property: Option<&str>) -> Option<Value>;

    fn avg(&self, property: Option<&str>) -> Option<Value>;
}
