use super::{foreign_key, join_table, statement_name, Relation};
use crate::{Db, Record, Result};

use activerow_core::Error;
use activerow_sql::stmt::{ColumnRef, Equals, Join, Param, Select};

/// Every related row linked to the owner through the join table.
pub(super) fn load(db: &Db, owner: &Record, relation: &Relation) -> Result<Vec<Record>> {
    let related = db.columns_for(&relation.related)?;

    let Some((owner_pk, id)) = owner.primary_key_value() else {
        return Ok(vec![]);
    };
    if id.is_null() {
        return Ok(vec![]);
    }

    let Some(related_pk) = related.primary_key_columns().next() else {
        return Err(Error::bad_primary_key_with(
            &related.name,
            "",
            format!("table {} has no primary key", related.name),
        ));
    };

    let join = join_table(owner.table_name(), &related.name);
    let owner_key = foreign_key(db, owner.table_name());
    let related_key = foreign_key(db, &related.name);

    let mut select = Select::new(
        &related.name,
        related
            .column_names()
            .map(|name| ColumnRef::qualified(&related.name, name))
            .collect(),
    );
    select.join = Some(Join {
        table: join.clone(),
        on: Equals::new(
            ColumnRef::qualified(&join, related_key),
            ColumnRef::qualified(&related.name, &related_pk.name),
        ),
    });
    select.filter.push(Equals::new(
        ColumnRef::qualified(&join, owner_key),
        Param::new(owner_pk.to_storage_literal(id), &owner_pk.db_type),
    ));

    let rows = db.run(&statement_name(owner, relation), &select.into())?;

    Ok(rows
        .into_maps()
        .into_iter()
        .map(|row| Record::from_row(&relation.related, related.clone(), row))
        .collect())
}
