pub mod db;
pub use db::Db;

mod metadata;
pub use metadata::Metadata;

mod model;
pub use model::Model;

pub mod page;
pub use page::Sort;

mod record;
pub use record::Record;

pub mod relation;
pub use relation::{Related, Relation, RelationKind};

pub use activerow_core::{
    driver::{ConnectParams, ResultSet, Row},
    err,
    schema::{Column, Datatype, Table},
    stmt::{Date, Value},
    bail, Error, Result,
};

pub mod driver {
    pub use activerow_core::driver::*;
}
