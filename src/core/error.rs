use std::error::Error;
use std::fmt;
use std::io;

/// Everything that can go wrong while loading a scene description.
///
/// Line numbers are 1-based and refer to the physical line of the scene file.
#[derive(Debug)]
pub enum SwanError {
    Io(io::Error),
    Open {
        path: String,
        source: io::Error,
    },
    Read {
        line: usize,
        source: io::Error,
    },
    Syntax {
        line: usize,
        expected: String,
        found: String,
    },
    MissingField {
        line: usize,
        expected: String,
    },
    InvalidNumber {
        line: usize,
        token: String,
    },
    InvalidValue {
        line: usize,
        message: String,
    },
    Json(String),
}

impl SwanError {
    pub fn syntax(line: usize, expected: &str, found: &str) -> Self {
        SwanError::Syntax {
            line,
            expected: String::from(expected),
            found: String::from(found),
        }
    }

    pub fn invalid_value(line: usize, message: &str) -> Self {
        SwanError::InvalidValue {
            line,
            message: String::from(message),
        }
    }

    /// Source line the error refers to, if any.
    pub fn line(&self) -> Option<usize> {
        match self {
            SwanError::Read { line, .. }
            | SwanError::Syntax { line, .. }
            | SwanError::MissingField { line, .. }
            | SwanError::InvalidNumber { line, .. }
            | SwanError::InvalidValue { line, .. } => Some(*line),
            _ => None,
        }
    }
}

impl fmt::Display for SwanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SwanError::Io(e) => write!(f, "{}", e),
            SwanError::Open { path, source } => {
                write!(f, "file {} could not be opened: {}", path, source)
            }
            SwanError::Read { line, source } => write!(f, "line: {}: {}", line, source),
            SwanError::Syntax {
                line,
                expected,
                found,
            } => write!(
                f,
                "line: {}: syntax error: expected {}, found \"{}\"",
                line, expected, found
            ),
            SwanError::MissingField { line, expected } => write!(
                f,
                "line: {}: syntax error: expected {}, found end of line",
                line, expected
            ),
            SwanError::InvalidNumber { line, token } => {
                write!(f, "line: {}: \"{}\" is not a number", line, token)
            }
            SwanError::InvalidValue { line, message } => write!(f, "line: {}: {}", line, message),
            SwanError::Json(msg) => write!(f, "{}", msg),
        }
    }
}

impl Error for SwanError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            SwanError::Io(e) => Some(e),
            SwanError::Open { source, .. } | SwanError::Read { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<io::Error> for SwanError {
    fn from(e: io::Error) -> Self {
        SwanError::Io(e)
    }
}

impl From<serde_json::Error> for SwanError {
    fn from(e: serde_json::Error) -> Self {
        SwanError::Json(e.to_string())
    }
}
