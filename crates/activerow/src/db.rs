mod builder;
pub use builder::Builder;

mod connect;
pub use connect::{default_params, set_default_params};

mod gateway;
use gateway::Gateway;

use crate::{relation::Relations, Metadata, Relation, RelationKind, Result, Value};

use activerow_core::{
    driver::{ResultSet, Row},
    err,
    schema::{Column, Table},
};
use activerow_sql as sql;
use indexmap::IndexMap;

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Name of the reusable catalog introspection statement.
const COLUMN_QUERY: &str = "_colquery";

/// Shared state between all `Db` clones.
struct Shared {
    gateway: Mutex<Gateway>,
    metadata: Mutex<Metadata>,
    relations: Mutex<Relations>,
}

/// A database handle and the caches that belong to it.
///
/// The handle owns one lazily opened connection, the registry of prepared
/// statement names, the quoted identifier cache, the table metadata cache
/// and the association declarations. None of these are ever invalidated;
/// a schema change requires a new `Db`. Cloning is cheap and every clone
/// shares the same state.
#[derive(Clone)]
pub struct Db {
    shared: Arc<Shared>,
}

impl Db {
    pub fn builder() -> Builder {
        Builder::default()
    }

    fn new(gateway: Gateway) -> Db {
        Db {
            shared: Arc::new(Shared {
                gateway: Mutex::new(gateway),
                metadata: Mutex::new(Metadata::default()),
                relations: Mutex::new(Relations::default()),
            }),
        }
    }

    fn gateway(&self) -> MutexGuard<'_, Gateway> {
        lock(&self.shared.gateway)
    }

    pub(crate) fn metadata(&self) -> MutexGuard<'_, Metadata> {
        lock(&self.shared.metadata)
    }

    /// Executes `sql` with `params`.
    ///
    /// Without a name the statement is prepared unnamed and not reused. With
    /// a name it is prepared the first time only; later calls with the same
    /// name execute the registered statement and ignore `sql` entirely.
    pub fn execute(&self, sql: &str, params: &[Value], name: Option<&str>) -> Result<ResultSet> {
        let params = params.iter().map(Value::to_literal).collect::<Vec<_>>();
        self.gateway().execute(sql, &params, name)
    }

    /// Like [`Db::execute`], returning every row as a column-name keyed map.
    pub fn fetch_all(&self, sql: &str, params: &[Value], name: Option<&str>) -> Result<Vec<Row>> {
        Ok(self.execute(sql, params, name)?.into_maps())
    }

    /// Like [`Db::execute`], returning every row as positional values.
    pub fn fetch_all_rows(
        &self,
        sql: &str,
        params: &[Value],
        name: Option<&str>,
    ) -> Result<Vec<Vec<Value>>> {
        Ok(self.execute(sql, params, name)?.into_positional())
    }

    /// Quotes an identifier using the backend's quoting function.
    pub fn quote_identifier(&self, name: &str) -> Result<String> {
        let mut quoted = self.quote_identifiers(&[name])?;
        quoted
            .swap_remove(name)
            .ok_or_else(|| err!("identifier `{name}` was not quoted"))
    }

    /// Quotes several identifiers. Identifiers not yet cached are quoted in
    /// a single round trip.
    pub fn quote_identifiers(&self, names: &[&str]) -> Result<IndexMap<String, String>> {
        self.gateway().quote_identifiers(names)
    }

    /// Returns `true` if a statement has been prepared under `name`.
    pub fn prepared(&self, name: &str) -> bool {
        self.gateway().is_prepared(name)
    }

    /// Executes a generated statement under `name`. The SQL text is only
    /// rendered the first time the name is used.
    pub(crate) fn run(&self, name: &str, stmt: &sql::Statement) -> Result<ResultSet> {
        self.gateway().run(name, stmt)
    }

    /// Maps `class` to `table`, overriding the derived table name.
    pub fn register_table(&self, class: &str, table: &str) -> Result<()> {
        self.metadata().register(class, table)
    }

    /// The table backing `class`, derived as `pluralize(decamelize(class))`
    /// unless registered.
    pub fn table_name_for(&self, class: &str) -> Result<String> {
        self.metadata().table_name_for(class)
    }

    /// The class backed by `table`, derived as `camelize(singularize(table))`
    /// unless registered.
    pub fn class_for_table(&self, table: &str) -> Result<String> {
        self.metadata().class_for_table(table)
    }

    /// The column catalog of `class`, introspected once and then cached.
    pub fn columns_for(&self, class: &str) -> Result<Arc<Table>> {
        let table_name = {
            let mut metadata = self.metadata();
            if let Some(table) = metadata.cached(class) {
                return Ok(table);
            }
            metadata.table_name_for(class)?
        };

        let stmt = sql::stmt::DescribeTable::new(&table_name).into();
        let rows = self.run(COLUMN_QUERY, &stmt)?.into_maps();

        if rows.is_empty() {
            return Err(err!(
                "table `{table_name}` does not exist or has no columns; class={class}"
            ));
        }

        let table = Table::new(&table_name, rows.iter().map(column_from_catalog));

        Ok(self.metadata().insert_table(class, table))
    }

    /// Primary key column names of `class`, in catalog order.
    pub fn primary_key_columns(&self, class: &str) -> Result<Vec<String>> {
        let table = self.columns_for(class)?;
        Ok(table.primary_key().into_iter().map(str::to_string).collect())
    }

    pub fn pluralize(&self, word: &str) -> String {
        self.metadata().inflector().pluralize(word)
    }

    pub fn singularize(&self, word: &str) -> String {
        self.metadata().inflector().singularize(word)
    }

    pub fn declare_one_to_many(&self, owner: &str, name: &str, related: &str) -> Result<()> {
        self.declare(owner, name, related, RelationKind::OneToMany)
    }

    pub fn declare_many_to_many(&self, owner: &str, name: &str, related: &str) -> Result<()> {
        self.declare(owner, name, related, RelationKind::ManyToMany)
    }

    pub fn declare_many_to_one(&self, owner: &str, name: &str, related: &str) -> Result<()> {
        self.declare(owner, name, related, RelationKind::ManyToOne)
    }

    fn declare(&self, owner: &str, name: &str, related: &str, kind: RelationKind) -> Result<()> {
        lock(&self.shared.relations).declare(Relation {
            owner: owner.to_string(),
            name: name.to_string(),
            related: related.to_string(),
            kind,
        })
    }

    /// The association `name` declared on `owner`.
    pub fn relation(&self, owner: &str, name: &str) -> Result<Relation> {
        lock(&self.shared.relations).get(owner, name).cloned()
    }
}

impl std::fmt::Debug for Db {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Db").finish_non_exhaustive()
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Builds a column descriptor from a row of the catalog query.
fn column_from_catalog(row: &Row) -> Column {
    let text = |key: &str| row.get(key).and_then(Value::as_str).unwrap_or_default();

    let column = Column::new(
        text("name"),
        text("db_type"),
        text("allow_null") == "true",
        text("primary_key") == "true",
    );

    match row.get("default") {
        Some(Value::String(default)) => column.with_default(default),
        _ => column,
    }
}
