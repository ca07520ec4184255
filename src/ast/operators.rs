use std::fmt;

/// Comparison operators.
///
/// The string operators and the equality operators have a case-insensitive
/// form, rendered with a `[c]` suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    /// Equal (`==`)
    Equal { case_insensitive: bool },
    /// Not equal (`!=`)
    NotEqual { case_insensitive: bool },
    /// Greater than (`>`)
    GreaterThan,
    /// Less than (`<`)
    LessThan,
    /// Greater than or equal (`>=`)
    GreaterEqual,
    /// Less than or equal (`<=`)
    LessEqual,

    // String
    /// Substring match (`CONTAINS`)
    Contains { case_insensitive: bool },
    /// Prefix match (`BEGINSWITH`)
    BeginsWith { case_insensitive: bool },
    /// Suffix match (`ENDSWITH`)
    EndsWith { case_insensitive: bool },
    /// Wildcard match with `?` and `*` (`LIKE`)
    Like { case_insensitive: bool },
}

impl Comparison {
    pub const EQUAL: Comparison = Comparison::Equal { case_insensitive: false };
    pub const NOT_EQUAL: Comparison = Comparison::NotEqual { case_insensitive: false };
    pub const CONTAINS: Comparison = Comparison::Contains { case_insensitive: false };
    pub const BEGINS_WITH: Comparison = Comparison::BeginsWith { case_insensitive: false };
    pub const ENDS_WITH: Comparison = Comparison::EndsWith { case_insensitive: false };
    pub const LIKE: Comparison = Comparison::Like { case_insensitive: false };

    /// Returns the same operator with the case-insensitive flag set.
    ///
    /// Ordering operators have no case-insensitive form and are returned
    /// unchanged.
    pub fn case_insensitive(self) -> Self {
        self.with_case_insensitive(true)
    }

    pub fn with_case_insensitive(self, flag: bool) -> Self {
        use Comparison::*;
        match self {
            Equal { .. } => Equal { case_insensitive: flag },
            NotEqual { .. } => NotEqual { case_insensitive: flag },
            Contains { .. } => Contains { case_insensitive: flag },
            BeginsWith { .. } => BeginsWith { case_insensitive: flag },
            EndsWith { .. } => EndsWith { case_insensitive: flag },
            Like { .. } => Like { case_insensitive: flag },
            ordering => ordering,
        }
    }

    pub fn is_case_insensitive(&self) -> bool {
        use Comparison::*;
        match self {
            Equal { case_insensitive }
            | NotEqual { case_insensitive }
            | Contains { case_insensitive }
            | BeginsWith { case_insensitive }
            | EndsWith { case_insensitive }
            | Like { case_insensitive } => *case_insensitive,
            GreaterThan | LessThan | GreaterEqual | LessEqual => false,
        }
    }

    /// The operator token without the `[c]` suffix.
    pub fn symbol(&self) -> &'static str {
        use Comparison::*;
        match self {
            Equal { .. } => "==",
            NotEqual { .. } => "!=",
            GreaterThan => ">",
            LessThan => "<",
            GreaterEqual => ">=",
            LessEqual => "<=",
            Contains { .. } => "CONTAINS",
            BeginsWith { .. } => "BEGINSWITH",
            EndsWith { .. } => "ENDSWITH",
            Like { .. } => "LIKE",
        }
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())?;
        if self.is_case_insensitive() {
            f.write_str("[c]")?;
        }
        Ok(())
    }
}

/// Logical connectives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogicOp {
    /// `AND`
    #[default]
    And,
    /// `OR`
    Or,
}

impl fmt::Display for LogicOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogicOp::And => f.write_str("AND"),
            LogicOp::Or => f.write_str("OR"),
        }
    }
}

/// Sort direction passed to the result set's `sorted`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    pub fn is_descending(&self) -> bool {
        matches!(self, SortOrder::Descending)
    }
}
