use std::fmt;

/// Result type for countdown-engine operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while driving a countdown
#[derive(Debug)]
pub enum Error {
    /// Render surface I/O failed
    Io(std::io::Error),

    /// Alert playback failed
    Alert(Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
    pub fn alert<E>(err: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        Error::Alert(err.into())
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Alert(err) => write!(f, "Alert playback failed: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::Alert(err) => Some(err.as_ref()),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

/// Reasons a duration string is rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DurationError {
    /// Malformed input or a value that overflows the duration range
    Invalid { input: String },

    /// A number with no unit suffix, e.g. `25`
    MissingUnit { input: String },

    /// A unit suffix that is not one of ns, us, µs, ms, s, m, h
    UnknownUnit { unit: String, input: String },
}

impl fmt::Display for DurationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DurationError::Invalid { input } => write!(f, "invalid duration {:?}", input),
            DurationError::MissingUnit { input } => {
                write!(f, "missing unit in duration {:?}", input)
            }
            DurationError::UnknownUnit { unit, input } => {
                write!(f, "unknown unit {:?} in duration {:?}", unit, input)
            }
        }
    }
}

impl std::error::Error for DurationError {}
