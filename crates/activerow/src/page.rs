use crate::{Db, Record, Result};

use activerow_core::{
    schema::{Column, Table},
    Error,
};
use activerow_sql::stmt::{ColumnRef, Direction, OrderBy, Param, Select};

/// The order of a paginated fetch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Sort {
    /// Primary key columns, ascending
    #[default]
    PrimaryKey,

    /// Column names, each optionally followed by `ASC` or `DESC`. An empty
    /// list sorts like [`Sort::PrimaryKey`].
    Columns(Vec<String>),
}

impl Sort {
    pub fn by<I, S>(columns: I) -> Sort
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Sort::Columns(columns.into_iter().map(Into::into).collect())
    }
}

struct SortKey<'a> {
    position: usize,
    column: &'a Column,
    direction: Direction,
}

impl Record {
    /// Fetches page `number` (starting at 1) of `size` rows of `class`.
    ///
    /// Each distinct sort gets its own reusable statement. An unknown sort
    /// column fails the whole fetch.
    pub fn page(db: &Db, class: &str, number: u64, size: u64, sort: &Sort) -> Result<Vec<Record>> {
        let table = db.columns_for(class)?;

        let (suffix, keys) = match sort {
            Sort::Columns(columns) if columns.is_empty() => primary_key_order(&table)?,
            Sort::PrimaryKey => primary_key_order(&table)?,
            Sort::Columns(columns) => {
                let keys = columns
                    .iter()
                    .map(|raw| parse_sort_key(&table, raw))
                    .collect::<Result<Vec<_>>>()?;

                let suffix = keys
                    .iter()
                    .map(|key| {
                        let sign = if key.direction.is_desc() { '-' } else { '+' };
                        format!("{}{sign}", key.position)
                    })
                    .collect::<Vec<_>>()
                    .join(",");

                (suffix, keys)
            }
        };

        let offset = number.saturating_sub(1).saturating_mul(size);

        let mut select = Select::new(
            &table.name,
            table.column_names().map(ColumnRef::new).collect(),
        );
        select.order_by = keys
            .iter()
            .map(|key| OrderBy {
                // A bare name would resolve to the text-cast output column
                column: ColumnRef::qualified(&table.name, &key.column.name),
                direction: key.direction,
            })
            .collect();
        select.limit = Some(Param::new(Some(size.to_string()), "bigint"));
        select.offset = Some(Param::new(Some(offset.to_string()), "bigint"));

        let name = format!("_page_{}_{suffix}", table.name);
        let rows = db.run(&name, &select.into())?;

        Ok(rows
            .into_maps()
            .into_iter()
            .map(|row| Record::from_row(class, table.clone(), row))
            .collect())
    }
}

/// Every primary key column, ascending, in catalog order.
fn primary_key_order(table: &Table) -> Result<(String, Vec<SortKey<'_>>)> {
    let keys = table
        .columns
        .values()
        .enumerate()
        .filter(|(_, column)| column.primary_key)
        .map(|(position, column)| SortKey {
            position,
            column,
            direction: Direction::Asc,
        })
        .collect::<Vec<_>>();

    if keys.is_empty() {
        return Err(Error::bad_primary_key_with(
            &table.name,
            "",
            format!("cannot sort {} by primary key; it has none", table.name),
        ));
    }

    Ok(("pkeys".to_string(), keys))
}

/// Parses `name`, `name ASC` or `name DESC`, case-insensitively.
fn parse_sort_key<'a>(table: &'a Table, raw: &str) -> Result<SortKey<'a>> {
    let mut words = raw.split_whitespace();
    let name = words.next().unwrap_or_default();

    let direction = match words.next() {
        None => Some(Direction::Asc),
        Some(word) if word.eq_ignore_ascii_case("asc") => Some(Direction::Asc),
        Some(word) if word.eq_ignore_ascii_case("desc") => Some(Direction::Desc),
        Some(_) => None,
    };

    let found = table
        .columns
        .get_full(name)
        .filter(|_| words.next().is_none());

    match (found, direction) {
        (Some((position, _, column)), Some(direction)) => Ok(SortKey {
            position,
            column,
            direction,
        }),
        _ => {
            log::error!("unknown sort column; table={} sort={raw:?}", table.name);
            Err(Error::bad_column(&table.name, raw.trim()))
        }
    }
}
