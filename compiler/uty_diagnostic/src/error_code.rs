use std::fmt;

/// Codes for all checker diagnostics.
///
/// Format: X#### where the letter gives the default severity:
/// - Wxxxx: Warnings (findings about user code)
/// - Exxxx: Errors (the check itself could not run)
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    /// Value does not match any allowed type of a union
    W0001,
    /// Run configuration could not be applied
    E0001,
}

impl ErrorCode {
    /// All codes, in declaration order.
    pub const ALL: &'static [ErrorCode] = &[ErrorCode::W0001, ErrorCode::E0001];

    /// Get the code as a string (e.g., "W0001").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::W0001 => "W0001",
            ErrorCode::E0001 => "E0001",
        }
    }

    /// Short human-readable description of the code.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::W0001 => "value does not match any allowed type of a union",
            ErrorCode::E0001 => "run configuration could not be applied",
        }
    }

    /// Check if this is a warning code (Wxxxx range).
    pub fn is_warning(&self) -> bool {
        self.as_str().starts_with('W')
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
