mod belongs_to;
mod has_many;
mod many_to_many;

use crate::{Db, Record, Result};

use activerow_core::Error;
use indexmap::IndexMap;

use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RelationKind {
    /// Rows of the related table hold `<singular owner table>_id`.
    OneToMany,

    /// Rows are linked through a join table named after both tables.
    ManyToMany,

    /// The owner holds `<singular related table>_id`.
    ManyToOne,
}

/// A named association declared on an owner class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relation {
    pub owner: String,
    pub name: String,
    pub related: String,
    pub kind: RelationKind,
}

/// A resolved association.
#[derive(Debug, Clone)]
pub enum Related {
    One(Record),
    Many(Vec<Record>),
}

/// Association declarations, by owner class and name.
#[derive(Debug, Default)]
pub(crate) struct Relations {
    by_owner: HashMap<String, IndexMap<String, Relation>>,
}

impl Relations {
    /// Names are unique per owner across all kinds. A repeated name is
    /// rejected and the first declaration stays.
    pub(crate) fn declare(&mut self, relation: Relation) -> Result<()> {
        let declared = self.by_owner.entry(relation.owner.clone()).or_default();

        if let Some(existing) = declared.get(&relation.name) {
            return Err(Error::configuration(format!(
                "association `{}` is already declared on {} as {:?} of {}",
                relation.name, relation.owner, existing.kind, existing.related
            )));
        }

        declared.insert(relation.name.clone(), relation);
        Ok(())
    }

    pub(crate) fn get(&self, owner: &str, name: &str) -> Result<&Relation> {
        self.by_owner
            .get(owner)
            .and_then(|declared| declared.get(name))
            .ok_or_else(|| Error::bad_method(owner, name))
    }
}

impl Related {
    pub fn as_one(&self) -> Option<&Record> {
        match self {
            Related::One(record) => Some(record),
            Related::Many(_) => None,
        }
    }

    pub fn as_many(&self) -> Option<&[Record]> {
        match self {
            Related::One(_) => None,
            Related::Many(records) => Some(records),
        }
    }

    pub fn into_one(self) -> Option<Record> {
        match self {
            Related::One(record) => Some(record),
            Related::Many(_) => None,
        }
    }

    pub fn into_many(self) -> Option<Vec<Record>> {
        match self {
            Related::One(_) => None,
            Related::Many(records) => Some(records),
        }
    }
}

/// Loads `relation` for `owner` from the database.
pub(crate) fn load(db: &Db, owner: &Record, relation: &Relation) -> Result<Related> {
    match relation.kind {
        RelationKind::OneToMany => has_many::load(db, owner, relation).map(Related::Many),
        RelationKind::ManyToMany => many_to_many::load(db, owner, relation).map(Related::Many),
        RelationKind::ManyToOne => belongs_to::load(db, owner, relation).map(Related::One),
    }
}

/// One reusable statement per owner table and association name.
fn statement_name(owner: &Record, relation: &Relation) -> String {
    format!("_assoc_{}_{}", owner.table_name(), relation.name)
}

/// `<singular table>_id`
fn foreign_key(db: &Db, table: &str) -> String {
    format!("{}_id", db.singularize(table))
}

/// The join table of a many-to-many association: both table names, sorted
/// and joined with `_`.
fn join_table(lhs: &str, rhs: &str) -> String {
    let mut tables = [lhs, rhs];
    tables.sort_unstable();
    tables.join("_")
}
