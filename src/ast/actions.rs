use crate::{
    ast::{Comparison, Fragment, LogicOp},
    value::Value,
};

/// One renderable unit of a query chain.
#[derive(Debug, Clone, PartialEq)]
pub struct Action {
    /// Connective joining this action to the previous one.
    ///
    /// Captured when the action is appended; ignored for the first action.
    pub logical_operator: LogicOp,
    pub kind: ActionKind,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ActionKind {
    /// Single-placeholder comparison
    ///
    /// # Example
    /// ```text
    /// name ==[c] $0
    /// ```
    Comparison {
        property: String,
        operator: Comparison,
        value: Value,
    },

    /// Constant predicate
    ///
    /// `true` renders `TRUEPREDICATE`, `false` renders `FALSEPREDICATE`.
    Constant(bool),

    /// Raw predicate text with its own placeholder numbering
    ///
    /// # Example
    /// ```text
    /// tags.@count > $0 AND ANY tags.name == $1
    /// ```
    Raw { fragment: Fragment, values: Vec<Value> },
}

impl Action {
    pub const TRUE_PREDICATE: &'static str = "TRUEPREDICATE";
    pub const FALSE_PREDICATE: &'static str = "FALSEPREDICATE";

    pub fn new(logical_operator: LogicOp, kind: ActionKind) -> Self {
        Action {
            logical_operator,
            kind,
        }
    }

    /// Values this action contributes, in its own placeholder order.
    pub fn values(&self) -> &[Value] {
        match &self.kind {
            ActionKind::Comparison { value, .. } => std::slice::from_ref(value),
            ActionKind::Constant(_) => &[],
            ActionKind::Raw { values, .. } => values.as_slice(),
        }
    }

    /// Writes the fragment with local placeholders shifted by `offset`.
    pub fn write_fragment(&self, out: &mut String, offset: usize) {
        match &self.kind {
            ActionKind::Comparison {
                property, operator, ..
            } => {
                out.push_str(&format!("{} {} ${}", property, operator, offset));
            }
            ActionKind::Constant(true) => out.push_str(Self::TRUE_PREDICATE),
            ActionKind::Constant(false) => out.push_str(Self::FALSE_PREDICATE),
            ActionKind::Raw { fragment, .. } => fragment.write_offset(out, offset),
        }
    }
}
