/// Token rendered in front of an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrefixToken {
    /// Opens a group (`(`)
    OpenGroup,
    /// Negates the following action or group (`NOT`)
    Not,
}

impl PrefixToken {
    pub fn as_str(&self) -> &'static str {
        match self {
            PrefixToken::OpenGroup => "(",
            PrefixToken::Not => "NOT",
        }
    }
}

/// Structural marker rendered immediately before the action at `at`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Prefix {
    pub token: PrefixToken,
    pub at: usize,
}

/// Closing parenthesis rendered immediately after the action at `at`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Suffix {
    pub at: usize,
}

impl Suffix {
    pub const TOKEN: &'static str = ")";
}
