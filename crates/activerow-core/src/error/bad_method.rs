use super::Error;

/// Error when an association (or other dynamically dispatched name) is not
/// declared on a model.
#[derive(Debug)]
pub(super) struct BadMethodError {
    class: Box<str>,
    name: Box<str>,
}

impl std::error::Error for BadMethodError {}

impl core::fmt::Display for BadMethodError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "Method {}::{} does not exist", self.class, self.name)
    }
}

impl Error {
    pub fn bad_method(class: impl Into<String>, name: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::BadMethod(BadMethodError {
            class: class.into().into(),
            name: name.into().into(),
        }))
    }

    pub fn is_bad_method(&self) -> bool {
        self.find_kind(|kind| match kind {
            super::ErrorKind::BadMethod(_) => Some(()),
            _ => None,
        })
        .is_some()
    }
}
