use super::{foreign_key, statement_name, Relation};
use crate::{Db, Record, Result};

use activerow_core::Error;
use activerow_sql::stmt::{ColumnRef, Equals, Param, Select};

/// The related row referenced by the owner's foreign key.
pub(super) fn load(db: &Db, owner: &Record, relation: &Relation) -> Result<Record> {
    let related = db.columns_for(&relation.related)?;

    let foreign_key = foreign_key(db, &related.name);
    let id = owner.get(&foreign_key)?;

    let Some(related_pk) = related.primary_key_columns().next() else {
        return Err(Error::bad_primary_key_with(
            &related.name,
            "",
            format!("table {} has no primary key", related.name),
        ));
    };

    if id.is_null() {
        return Err(Error::no_such_row(format!(
            "{}.{foreign_key} is null; no {} to resolve",
            owner.table_name(),
            relation.related
        )));
    }

    let mut select = Select::new(
        &related.name,
        related.column_names().map(ColumnRef::new).collect(),
    );
    select.filter.push(Equals::new(
        ColumnRef::new(&related_pk.name),
        Param::new(related_pk.to_storage_literal(id), &related_pk.db_type),
    ));

    let rows = db.run(&statement_name(owner, relation), &select.into())?;

    match rows.into_maps().into_iter().next() {
        Some(row) => Ok(Record::from_row(&relation.related, related.clone(), row)),
        None => Err(Error::no_such_row(format!(
            "No row exists in {} for {} = {id}",
            related.name, related_pk.name
        ))),
    }
}
