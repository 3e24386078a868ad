use std::{
    error::Error as StdError,
    result::Result as StdResult,
    io::Error as IoError,
    fmt::{Display, Formatter, Result as FmtResult},
};

/// Result type
pub type Result<T> = StdResult<T, Error>;

/// Error type
#[derive(Debug)]
pub enum Error {
    /// Compiler executable could not be located
    ExecutableNotFound(String),
    /// Diagnostics carry no include search list
    PatternNotMatched,
    Io(IoError),
}

impl Error {
    /// Process exit code reported for this error
    pub fn exit_code(&self) -> i32 {
        use Error::*;

        match self {
            ExecutableNotFound(_) => 2,
            PatternNotMatched => 3,
            Io(_) => 1,
        }
    }
}

impl StdError for Error {}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        use Error::*;

        match self {
            ExecutableNotFound(name) => write!(f, "Compiler executable not found: `{}`", name),
            PatternNotMatched => write!(f, "Include search list not found in compiler diagnostics"),
            Io(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl From<IoError> for Error {
    fn from(e: IoError) -> Self {
        Error::Io(e)
    }
}
