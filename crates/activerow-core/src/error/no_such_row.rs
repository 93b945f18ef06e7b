use super::Error;

/// Error when a lookup that requires exactly one row finds none.
#[derive(Debug)]
pub(super) struct NoSuchRowError {
    message: Box<str>,
}

impl std::error::Error for NoSuchRowError {}

impl core::fmt::Display for NoSuchRowError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str(&self.message)
    }
}

impl Error {
    pub fn no_such_row(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::NoSuchRow(NoSuchRowError {
            message: message.into().into(),
        }))
    }

    pub fn is_no_such_row(&self) -> bool {
        self.find_kind(|kind| match kind {
            super::ErrorKind::NoSuchRow(_) => Some(()),
            _ => None,
        })
        .is_some()
    }
}
