use super::Error;

/// Error when the backend fails to prepare or execute a statement.
///
/// This wraps the driver library's error so the backend's own message is
/// preserved, along with the name of the statement when one was used.
#[derive(Debug)]
pub(super) struct DatabaseError {
    pub(super) statement: Option<Box<str>>,
    pub(super) inner: Box<dyn std::error::Error + Send + Sync>,
}

impl std::error::Error for DatabaseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.inner.as_ref())
    }
}

impl core::fmt::Display for DatabaseError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str("database error")?;
        if let Some(ref name) = self.statement {
            write!(f, " in statement `{}`", name)?;
        }
        f.write_str(": ")?;

        // Display the error and walk its source chain
        core::fmt::Display::fmt(&self.inner, f)?;
        let mut source = self.inner.source();
        while let Some(err) = source {
            write!(f, ": {}", err)?;
            source = err.source();
        }
        Ok(())
    }
}

impl Error {
    /// Creates an error from a driver failure.
    pub fn database(err: impl std::error::Error + Send + Sync + 'static) -> Error {
        Error::from(super::ErrorKind::Database(DatabaseError {
            statement: None,
            inner: Box::new(err),
        }))
    }

    /// Creates an error from a driver failure while preparing or executing
    /// the named statement.
    pub fn database_in(
        statement: impl Into<String>,
        err: impl std::error::Error + Send + Sync + 'static,
    ) -> Error {
        Error::from(super::ErrorKind::Database(DatabaseError {
            statement: Some(statement.into().into()),
            inner: Box::new(err),
        }))
    }

    /// Returns `true` if this error (or any error it wraps) is a database error.
    pub fn is_database(&self) -> bool {
        self.find_kind(|kind| match kind {
            super::ErrorKind::Database(_) => Some(()),
            _ => None,
        })
        .is_some()
    }

    /// The statement name attached to a database error, if any.
    pub fn statement_name(&self) -> Option<&str> {
        self.find_kind(|kind| match kind {
            super::ErrorKind::Database(err) => err.statement.as_deref(),
            _ => None,
        })
    }
}
