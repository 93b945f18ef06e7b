use super::Record;
use crate::{Db, Result, Value};

use activerow_core::{driver::Row, schema::Column, Error};
use activerow_sql::stmt::{ColumnRef, Equals, Insert, Param, Select, Update};
use indexmap::IndexMap;

impl Record {
    /// Loads the `class` row identified by `key`.
    pub fn find<K, V>(db: &Db, class: &str, key: impl IntoIterator<Item = (K, V)>) -> Result<Record>
    where
        K: AsRef<str>,
        V: Into<Value>,
    {
        let mut record = Record::new(db, class)?;
        record.load(db, key)?;
        Ok(record)
    }

    /// Replaces this record's state with the row identified by `key`.
    ///
    /// `key` must give a value for every primary key column and nothing
    /// else. Exactly one row must match.
    pub fn load<K, V>(&mut self, db: &Db, key: impl IntoIterator<Item = (K, V)>) -> Result<()>
    where
        K: AsRef<str>,
        V: Into<Value>,
    {
        let table = self.table.clone();

        let mut given = IndexMap::new();
        for (name, value) in key {
            let name = name.as_ref();
            match table.get_column(name) {
                Some(column) if column.primary_key => {
                    given.insert(name.to_string(), column.coerce(value));
                }
                _ => return Err(Error::bad_primary_key(&table.name, name)),
            }
        }

        let mut filter = vec![];
        for column in table.primary_key_columns() {
            match given.get(&column.name) {
                Some(value) if !value.is_null() => filter.push(key_filter(column, value)),
                _ => return Err(Error::bad_primary_key(&table.name, &column.name)),
            }
        }

        if filter.is_empty() {
            return Err(Error::bad_primary_key_with(
                &table.name,
                "",
                format!("table {} has no primary key", table.name),
            ));
        }

        let mut select = Select::new(&table.name, all_columns(self));
        select.filter = filter;

        let name = format!("_load_{}", table.name);
        let rows = db.run(&name, &select.into())?.into_maps();

        let Some(row) = rows.into_iter().next() else {
            let key = given
                .iter()
                .map(|(name, value)| format!("{name} = {value}"))
                .collect::<Vec<_>>()
                .join(" AND ");
            return Err(Error::no_such_row(format!(
                "No row exists in {} for {key}",
                table.name
            )));
        };

        self.set_all_and_resync(row);
        self.related.clear();
        Ok(())
    }

    /// Inserts the record if it has never been saved, updates it otherwise.
    pub fn save(&mut self, db: &Db) -> Result<()> {
        if self.is_persisted() {
            self.update(db)
        } else {
            self.insert(db)
        }
    }

    /// Inserts every non primary key column. Primary keys are generated by
    /// the database; the returned row replaces both states.
    pub fn insert(&mut self, db: &Db) -> Result<()> {
        let table = self.table.clone();

        let insert = Insert {
            table: table.name.clone(),
            values: table
                .columns
                .values()
                .filter(|column| !column.primary_key)
                .map(|column| (column.name.clone(), param(column, self.dirty_value(&column.name))))
                .collect(),
            returning: returning(self),
        };

        let name = format!("_insert_{}", table.name);
        let row = single_row(db, &name, insert.into())?;

        self.set_all_and_resync(row);
        Ok(())
    }

    /// Writes the changed columns, if any. The row is identified by the
    /// current primary key values and the returned row replaces both states.
    pub fn update(&mut self, db: &Db) -> Result<()> {
        let table = self.table.clone();

        let changed = table
            .columns
            .values()
            .enumerate()
            .filter(|(_, column)| self.clean.get(&column.name) != self.dirty.get(&column.name))
            .collect::<Vec<_>>();

        if changed.is_empty() {
            return Ok(());
        }

        let filter = table
            .primary_key_columns()
            .map(|column| key_filter(column, self.dirty_value(&column.name)))
            .collect::<Vec<_>>();

        if filter.is_empty() {
            return Err(Error::bad_primary_key_with(
                &table.name,
                "",
                format!("cannot update {} without a primary key", table.name),
            ));
        }

        let positions = changed
            .iter()
            .map(|(index, _)| (index + 1).to_string())
            .collect::<Vec<_>>()
            .join(",");

        let update = Update {
            table: table.name.clone(),
            assignments: changed
                .iter()
                .map(|(_, column)| (column.name.clone(), param(column, self.dirty_value(&column.name))))
                .collect(),
            filter,
            returning: returning(self),
        };

        let name = format!("_update_{}_{positions}", table.name);
        let row = single_row(db, &name, update.into())?;

        self.set_all_and_resync(row);
        Ok(())
    }
}

fn param(column: &Column, value: &Value) -> Param {
    Param::new(column.to_storage_literal(value), &column.db_type)
}

fn key_filter(column: &Column, value: &Value) -> Equals {
    Equals::new(ColumnRef::new(&column.name), param(column, value))
}

fn all_columns(record: &Record) -> Vec<ColumnRef> {
    record.table.column_names().map(ColumnRef::new).collect()
}

fn returning(record: &Record) -> Vec<String> {
    record.table.column_names().map(str::to_string).collect()
}

/// Runs a statement that must return exactly one row.
fn single_row(db: &Db, name: &str, stmt: activerow_sql::Statement) -> Result<Row> {
    let rows = db.run(name, &stmt)?.into_maps();
    match rows.into_iter().next() {
        Some(row) => Ok(row),
        None => Err(Error::no_such_row(format!("statement `{name}` returned no row"))),
    }
}
