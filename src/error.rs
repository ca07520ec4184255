use std::{error::Error, fmt};

/// Raised by `end_group()` under [`GroupPolicy::Strict`](crate::config::GroupPolicy).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StructureError {
    /// `end_group()` with no open group
    UnopenedGroup,

    /// `end_group()` on a group that contains no action
    EmptyGroup,
}

impl fmt::Display for StructureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StructureError::UnopenedGroup => write!(f, "Group not started"),
            StructureError::EmptyGroup => write!(f, "Invalid group, no filter found"),
        }
    }
}

impl Error for StructureError {}

/// Errors surfaced by the fluent builder.
#[derive(Debug)]
pub enum QueryError {
    /// Unbalanced or empty group
    Structure(StructureError),

    /// The result set rejected the rendered predicate
    Delegation {
        expression: String,
        /// Bound values serialized as a JSON array
        values: String,
        source: Box<dyn Error + Send + Sync + 'static>,
    },
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryError::Structure(e) => write!(f, "Structure error: {}", e),
            QueryError::Delegation {
                expression,
                values,
                source,
            } => write!(
                f,
                "failed to get result, error: {source};\nquery: \"{expression}\";\nvalues: {values}"
            ),
        }
    }
}

impl Error for QueryError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            QueryError::Structure(e) => Some(e),
            QueryError::Delegation { source, .. } => Some(source.as_ref()),
        }
    }
}

impl From<StructureError> for QueryError {
    fn from(e: StructureError) -> Self {
        QueryError::Structure(e)
    }
}

/// Errors loading [`BuilderOptions`](crate::config::BuilderOptions).
#[derive(Debug)]
pub enum ConfigError {
    Json(serde_json::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Json(e) => write!(f, "Invalid builder options: {}", e),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ConfigError::Json(e) => Some(e),
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Json(e)
    }
}
