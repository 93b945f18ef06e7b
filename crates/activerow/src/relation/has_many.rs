use super::{foreign_key, statement_name, Relation};
use crate::{Db, Record, Result};

use activerow_sql::stmt::{ColumnRef, Equals, Param, Select};

/// Every related row whose foreign key references the owner.
pub(super) fn load(db: &Db, owner: &Record, relation: &Relation) -> Result<Vec<Record>> {
    let related = db.columns_for(&relation.related)?;

    let Some((owner_pk, id)) = owner.primary_key_value() else {
        return Ok(vec![]);
    };
    if id.is_null() {
        return Ok(vec![]);
    }

    let foreign_key = related.column(&foreign_key(db, owner.table_name()))?;

    let mut select = Select::new(
        &related.name,
        related.column_names().map(ColumnRef::new).collect(),
    );
    select.filter.push(Equals::new(
        ColumnRef::new(&foreign_key.name),
        Param::new(owner_pk.to_storage_literal(id), &foreign_key.db_type),
    ));

    let rows = db.run(&statement_name(owner, relation), &select.into())?;

    Ok(rows
        .into_maps()
        .into_iter()
        .map(|row| Record::from_row(&relation.related, related.clone(), row))
        .collect())
}
