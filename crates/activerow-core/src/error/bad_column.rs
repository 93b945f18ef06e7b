use super::Error;

/// Error when a column name is not part of a table's catalog, or when a
/// column given as a key is not part of the table's primary key.
#[derive(Debug)]
pub(super) struct BadColumnError {
    table: Box<str>,
    column: Box<str>,
    primary_key: bool,
    message: Option<Box<str>>,
}

impl std::error::Error for BadColumnError {}

impl core::fmt::Display for BadColumnError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        if let Some(ref message) = self.message {
            return f.write_str(message);
        }

        if self.primary_key {
            write!(
                f,
                "Column {} is not a primary key for {}.",
                self.column, self.table
            )
        } else {
            write!(f, "Column {}.{} does not exist.", self.table, self.column)
        }
    }
}

impl Error {
    pub fn bad_column(table: impl Into<String>, column: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::BadColumn(BadColumnError {
            table: table.into().into(),
            column: column.into().into(),
            primary_key: false,
            message: None,
        }))
    }

    pub fn bad_primary_key(table: impl Into<String>, column: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::BadColumn(BadColumnError {
            table: table.into().into(),
            column: column.into().into(),
            primary_key: true,
            message: None,
        }))
    }

    /// Like [`Error::bad_primary_key`], with a custom message.
    pub fn bad_primary_key_with(
        table: impl Into<String>,
        column: impl Into<String>,
        message: impl Into<String>,
    ) -> Error {
        Error::from(super::ErrorKind::BadColumn(BadColumnError {
            table: table.into().into(),
            column: column.into().into(),
            primary_key: true,
            message: Some(message.into().into()),
        }))
    }

    /// Returns `true` for both bad column and bad primary key errors.
    pub fn is_bad_column(&self) -> bool {
        self.bad_column_parts().is_some()
    }

    pub fn is_bad_primary_key(&self) -> bool {
        self.find_kind(|kind| match kind {
            super::ErrorKind::BadColumn(err) if err.primary_key => Some(()),
            _ => None,
        })
        .is_some()
    }

    /// The `(table, column)` pair of a bad column error.
    pub fn bad_column_parts(&self) -> Option<(&str, &str)> {
        self.find_kind(|kind| match kind {
            super::ErrorKind::BadColumn(err) => Some((&*err.table, &*err.column)),
            _ => None,
        })
    }
}
