use super::Error;

/// Error when the database rejects a statement.
///
/// The message says that the statement was invalid, not why. Callers
/// diagnose the cause by inspecting the generated SQL; the driver error, when
/// there is one, is attached as the cause.
#[derive(Debug)]
pub(super) struct InvalidStatement {
    message: Box<str>,
}

impl std::error::Error for InvalidStatement {}

impl core::fmt::Display for InvalidStatement {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid statement: {}", self.message)
    }
}

impl Error {
    /// Creates an invalid statement error.
    pub fn invalid_statement(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidStatement(InvalidStatement {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error, or any error it wraps, is an invalid statement error.
    pub fn is_invalid_statement(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::InvalidStatement(_)))
    }
}
