use super::Error;

/// Error when camelizing or decamelizing produces a result that contradicts
/// a previously cached inverse mapping.
#[derive(Debug)]
pub(super) struct AmbiguousInflectionError {
    function: &'static str,
    original: Box<str>,
    inflected: Box<str>,
    existing: Box<str>,
}

impl std::error::Error for AmbiguousInflectionError {}

impl core::fmt::Display for AmbiguousInflectionError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "{}(): value {} was calculated from {}, but {} was found cached",
            self.function, self.inflected, self.original, self.existing
        )
    }
}

impl Error {
    pub fn ambiguous_inflection(
        function: &'static str,
        original: impl Into<String>,
        inflected: impl Into<String>,
        existing: impl Into<String>,
    ) -> Error {
        Error::from(super::ErrorKind::AmbiguousInflection(
            AmbiguousInflectionError {
                function,
                original: original.into().into(),
                inflected: inflected.into().into(),
                existing: existing.into().into(),
            },
        ))
    }

    pub fn is_ambiguous_inflection(&self) -> bool {
        self.find_kind(|kind| match kind {
            super::ErrorKind::AmbiguousInflection(_) => Some(()),
            _ => None,
        })
        .is_some()
    }
}
