use super::Error;

/// Error when a connection to the database could not be established.
#[derive(Debug)]
pub(super) struct CommunicationError {
    message: Box<str>,
}

impl std::error::Error for CommunicationError {}

impl core::fmt::Display for CommunicationError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "communication error: {}", self.message)
    }
}

impl Error {
    /// Creates a communication error.
    ///
    /// Drivers return this from `connect` when the database named by the
    /// connection URL cannot be opened.
    pub fn communication(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::Communication(CommunicationError {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error, or any error it wraps, is a communication error.
    pub fn is_communication(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::Communication(_)))
    }
}
