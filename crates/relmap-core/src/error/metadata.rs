use super::Error;

/// Error when the metadata describing a record is missing or incomplete.
///
/// This occurs when:
/// - A model declares no table name or no column bindings
/// - A primary key value is null while generating UPDATE or DELETE
/// - A bound field has no getter
/// - A relationship's reference column has no value
/// - A related model has no zero-argument construction path
/// - The relationship graph contains a cycle
#[derive(Debug)]
pub(super) struct MetadataError {
    message: Box<str>,
}

impl std::error::Error for MetadataError {}

impl core::fmt::Display for MetadataError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "metadata error: {}", self.message)
    }
}

impl Error {
    /// Creates a metadata error.
    pub fn metadata(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::Metadata(MetadataError {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error, or any error it wraps, is a metadata error.
    pub fn is_metadata(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::Metadata(_)))
    }
}
