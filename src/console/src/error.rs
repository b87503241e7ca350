use std::fmt::{Display, Formatter};

/// Errors raised while talking to the user over the console
#[derive(Debug)]
pub enum ConsoleError {
    /// The input stream reached its end while a prompt was waiting
    InputClosed,
    Io(std::io::Error),
}

impl Display for ConsoleError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ConsoleError::InputClosed => write!(f, "input stream closed"),
            ConsoleError::Io(err) => write!(f, "IO error: {}", err),
        }
    }
}

impl std::error::Error for ConsoleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConsoleError::InputClosed => None,
            ConsoleError::Io(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for ConsoleError {
    fn from(err: std::io::Error) -> Self {
        ConsoleError::Io(err)
    }
}

/// Helper type for console results
pub type ConsoleResult<T> = Result<T, ConsoleError>;
