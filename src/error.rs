use std::fmt;

/// The main error type for TOML parsing and lookup.
#[derive(Debug, Clone, PartialEq)]
pub enum TomlError {
    /// Raised when an array literal runs out of input before its brackets balance.
    UnterminatedArray {
        near: String,
        line: usize,
        hint: Option<String>,
        code: Option<u32>,
    },
    /// Raised when a dotted path does not resolve to a value.
    PathNotFound {
        path: String,
        line: usize,
        hint: Option<String>,
        code: Option<u32>,
    },
    /// Raised by typed accessors when a value has the wrong shape.
    TypeError {
        message: String,
        path: String,
        hint: Option<String>,
        code: Option<u32>,
    },
    /// Raised when a value has the right type but is not one of the accepted ones.
    ValidationError {
        message: String,
        path: String,
        hint: Option<String>,
        code: Option<u32>,
    },
}

impl TomlError {
    pub fn unterminated_array(near: impl Into<String>) -> Self {
        TomlError::UnterminatedArray {
            near: near.into(),
            line: 0,
            hint: Some("Close the array with a matching ']'".into()),
            code: Some(101),
        }
    }

    pub fn path_not_found(path: impl Into<String>) -> Self {
        TomlError::PathNotFound {
            path: path.into(),
            line: 0,
            hint: Some("Check that the path exists in your config".into()),
            code: Some(304),
        }
    }

    pub fn type_error(message: impl Into<String>, hint: &str, code: u32) -> Self {
        TomlError::TypeError {
            message: message.into(),
            path: String::new(),
            hint: Some(hint.into()),
            code: Some(code),
        }
    }

    pub fn code(&self) -> Option<u32> {
        match self {
            TomlError::UnterminatedArray { code, .. }
            | TomlError::PathNotFound { code, .. }
            | TomlError::TypeError { code, .. }
            | TomlError::ValidationError { code, .. } => *code,
        }
    }

    /// Attach the 1-based source line a statement started on.
    pub(crate) fn at_line(self, at: usize) -> Self {
        match self {
            TomlError::UnterminatedArray { near, hint, code, .. } => {
                TomlError::UnterminatedArray { near, line: at, hint, code }
            }
            TomlError::PathNotFound { path, hint, code, .. } => {
                TomlError::PathNotFound { path, line: at, hint, code }
            }
            other => other,
        }
    }
}

fn suffix(hint: &Option<String>, code: &Option<u32>) -> String {
    format!(
        "{}{}",
        hint.as_ref().map_or(String::new(), |h| format!(" Hint: {}", h)),
        code.map_or(String::new(), |c| format!(" Code: {}", c))
    )
}

impl fmt::Display for TomlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TomlError::UnterminatedArray { near, line, hint, code } => {
                if *line > 0 {
                    write!(f, "[TOML] Array not properly closed at line {} near \"{}\"{}",
                        line, near, suffix(hint, code))
                } else {
                    write!(f, "[TOML] Array not properly closed near \"{}\"{}",
                        near, suffix(hint, code))
                }
            }
            TomlError::PathNotFound { path, line, hint, code } => {
                if *line > 0 {
                    write!(f, "[TOML] Path '{}' not found (closest match on line {}){}",
                        path, line, suffix(hint, code))
                } else {
                    write!(f, "[TOML] Path '{}' not found{}", path, suffix(hint, code))
                }
            }
            TomlError::TypeError { message, path, hint, code } => {
                if path.is_empty() {
                    write!(f, "[TOML] Type Error: {}{}", message, suffix(hint, code))
                } else {
                    write!(f, "[TOML] Type Error at '{}': {}{}", path, message, suffix(hint, code))
                }
            }
            TomlError::ValidationError { message, path, hint, code } => {
                write!(f, "[TOML] Validation Error at '{}': {}{}", path, message, suffix(hint, code))
            }
        }
    }
}

impl std::error::Error for TomlError {}
