//! Crate-wide error type.

use thiserror::Error as ThisError;

use crate::interrupt::Trigger;

#[derive(Debug, ThisError)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },
    #[error("instance has no points")]
    EmptyInstance,
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    #[error("solve stopped before a tour was constructed: {0}")]
    Interrupted(Trigger),
    #[error("logger init failed: {0}")]
    Logger(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            line,
            message: message.into(),
        }
    }

    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_display() {
        let err = Error::parse(3, "expected 2 fields, got 1");
        assert_eq!(err.to_string(), "line 3: expected 2 fields, got 1");
    }

    #[test]
    fn test_interrupted_display() {
        let err = Error::Interrupted(Trigger::Deadline);
        assert_eq!(
            err.to_string(),
            "solve stopped before a tour was constructed: time limit reached"
        );
    }

    #[test]
    fn test_io_error_converts() {
        fn open() -> Result<()> {
            Err(std::io::Error::new(std::io::ErrorKind::NotFound, "missing"))?;
            Ok(())
        }
        assert!(matches!(open(), Err(Error::Io(_))));
    }
}
