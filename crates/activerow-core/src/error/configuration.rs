use super::Error;

/// Error when the engine cannot be configured: no usable connection
/// parameters, a malformed connection URL, or conflicting declarations.
#[derive(Debug)]
pub(super) struct ConfigurationError {
    message: Box<str>,
}

impl std::error::Error for ConfigurationError {}

impl core::fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "configuration error: {}", self.message)
    }
}

impl Error {
    pub fn configuration(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::Configuration(ConfigurationError {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error (or any error it wraps) is a configuration error.
    pub fn is_configuration(&self) -> bool {
        self.find_kind(|kind| match kind {
            super::ErrorKind::Configuration(_) => Some(()),
            _ => None,
        })
        .is_some()
    }
}
