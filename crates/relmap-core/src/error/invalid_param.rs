use super::Error;

/// Error when the caller supplies invalid configuration, such as an empty or
/// unsupported connection URL.
#[derive(Debug)]
pub(super) struct InvalidParam {
    message: Box<str>,
}

impl std::error::Error for InvalidParam {}

impl core::fmt::Display for InvalidParam {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid parameter: {}", self.message)
    }
}

impl Error {
    /// Creates an invalid parameter error.
    pub fn invalid_param(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidParam(InvalidParam {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error, or any error it wraps, is an invalid parameter error.
    pub fn is_invalid_param(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::InvalidParam(_)))
    }
}
