use crate::{Db, Error, Related, Record, Result, Sort, Value};

use activerow_core::err;

/// A typed wrapper around a [`Record`] of one class.
///
/// Implementors supply the class name and access to the wrapped record;
/// everything else is provided.
///
/// ```ignore
/// struct User(Record);
///
/// impl Model for User {
///     const NAME: &'static str = "User";
///
///     fn from_record(record: Record) -> Self { User(record) }
///     fn record(&self) -> &Record { &self.0 }
///     fn record_mut(&mut self) -> &mut Record { &mut self.0 }
///
///     fn declare(db: &Db) -> Result<()> {
///         db.declare_one_to_many("User", "posts", "Post")
///     }
/// }
/// ```
pub trait Model: Sized {
    /// Class name, used to derive the table name
    const NAME: &'static str;

    fn from_record(record: Record) -> Self;

    fn record(&self) -> &Record;

    fn record_mut(&mut self) -> &mut Record;

    /// Declares the model's associations. Called once by
    /// [`Builder::register`](crate::db::Builder::register).
    fn declare(_db: &Db) -> Result<()> {
        Ok(())
    }

    fn new(db: &Db) -> Result<Self> {
        Record::new(db, Self::NAME).map(Self::from_record)
    }

    fn load<K, V>(db: &Db, key: impl IntoIterator<Item = (K, V)>) -> Result<Self>
    where
        K: AsRef<str>,
        V: Into<Value>,
    {
        Record::find(db, Self::NAME, key).map(Self::from_record)
    }

    fn page(db: &Db, number: u64, size: u64, sort: &Sort) -> Result<Vec<Self>> {
        let records = Record::page(db, Self::NAME, number, size, sort)?;
        Ok(records.into_iter().map(Self::from_record).collect())
    }

    fn save(&mut self, db: &Db) -> Result<()> {
        self.record_mut().save(db)
    }

    fn get(&self, name: &str) -> Result<&Value> {
        self.record().get(name)
    }

    fn set(&mut self, name: &str, value: impl Into<Value>) -> Result<()> {
        self.record_mut().set(name, value)
    }

    fn set_all<K, V>(&mut self, values: impl IntoIterator<Item = (K, V)>) -> Vec<Error>
    where
        K: Into<String>,
        V: Into<Value>,
    {
        self.record_mut().set_all(values)
    }

    fn resolve(&mut self, db: &Db, name: &str, force: bool) -> Result<&Related> {
        self.record_mut().resolve(db, name, force)
    }

    /// Resolves a one-to-many or many-to-many association as `R`.
    fn related_many<R: Model>(&mut self, db: &Db, name: &str) -> Result<Vec<R>> {
        match self.resolve(db, name, false)? {
            Related::Many(records) => Ok(records.iter().cloned().map(R::from_record).collect()),
            Related::One(_) => Err(err!(
                "association `{}.{name}` resolves to a single record",
                Self::NAME
            )),
        }
    }

    /// Resolves a many-to-one association as `R`.
    fn related_one<R: Model>(&mut self, db: &Db, name: &str) -> Result<R> {
        match self.resolve(db, name, false)? {
            Related::One(record) => Ok(R::from_record(record.clone())),
            Related::Many(_) => Err(err!(
                "association `{}.{name}` resolves to several records",
                Self::NAME
            )),
        }
    }
}
