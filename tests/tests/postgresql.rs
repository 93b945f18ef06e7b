//! Runs against a live server. Requires the `postgresql` feature and a
//! database reachable at `ACTIVEROW_TEST_POSTGRES_URL`.
#![cfg(feature = "postgresql")]

use pretty_assertions::assert_eq;
use tests::prelude::*;

fn connect() -> Db {
    tests::init_logging();

    let url = std::env::var("ACTIVEROW_TEST_POSTGRES_URL")
        .unwrap_or_else(|_| "postgresql://localhost:5432/activerow_test".to_string());

    assert_ok!(Db::builder().url(&url).build())
}

#[test]
fn crud_round_trip() {
    let db = connect();

    assert_ok!(db.execute("DROP TABLE IF EXISTS pg_smoke_authors CASCADE", &[], None));
    assert_ok!(db.execute(
        "CREATE TABLE pg_smoke_authors (
            id serial PRIMARY KEY,
            name text NOT NULL,
            active boolean,
            born_on date
        )",
        &[],
        None
    ));

    let mut author = assert_ok!(Record::new(&db, "PgSmokeAuthor"));
    assert_ok!(author.set("name", "Ada"));
    assert_ok!(author.set("active", "on"));
    assert_ok!(author.set("born_on", "1815-12-10"));
    assert_ok!(author.save(&db));

    let id = author.get("id").unwrap().clone();
    assert!(!id.is_null());

    let mut loaded = assert_ok!(Record::find(&db, "PgSmokeAuthor", [("id", id.clone())]));
    assert_eq!(loaded.get("name").unwrap(), &Value::from("Ada"));
    assert_eq!(loaded.get("active").unwrap(), &Value::Bool(true));
    assert_eq!(loaded.display("born_on").unwrap(), "1815-12-10");

    assert_ok!(loaded.set("name", "Ada Lovelace"));
    assert_ok!(loaded.save(&db));

    let page = assert_ok!(Record::page(&db, "PgSmokeAuthor", 1, 10, &Sort::by(["name DESC"])));
    assert_eq!(page.len(), 1);
    assert_eq!(page[0].get("name").unwrap(), &Value::from("Ada Lovelace"));

    let err = assert_err!(Record::find(&db, "PgSmokeAuthor", [("id", 0)]));
    assert!(err.is_no_such_row());

    assert_eq!(assert_ok!(db.quote_identifier("user")), "\"user\"");

    assert_ok!(db.execute("DROP TABLE pg_smoke_authors", &[], None));
}

#[test]
fn failed_statement_reports_database_error() {
    let db = connect();

    let err = assert_err!(db.execute("SELECT * FROM pg_smoke_missing", &[], Some("pg_smoke_missing")));
    assert!(err.is_database());
}

#[test]
fn pages_sort_by_column_type() {
    let db = connect();

    assert_ok!(db.execute("DROP TABLE IF EXISTS pg_smoke_items CASCADE", &[], None));
    assert_ok!(db.execute(
        "CREATE TABLE pg_smoke_items (
            id serial PRIMARY KEY,
            weight integer NOT NULL
        )",
        &[],
        None
    ));

    for weight in 1..=12 {
        let mut item = assert_ok!(Record::new(&db, "PgSmokeItem"));
        assert_ok!(item.set("weight", weight * 5));
        assert_ok!(item.save(&db));
    }

    let ids = |records: Vec<Record>| {
        records
            .iter()
            .map(|record| record.get("id").unwrap().to_string())
            .collect::<Vec<_>>()
    };

    let page = assert_ok!(Record::page(&db, "PgSmokeItem", 1, 4, &Sort::PrimaryKey));
    assert_eq!(ids(page), ["1", "2", "3", "4"]);

    let page = assert_ok!(Record::page(&db, "PgSmokeItem", 3, 4, &Sort::PrimaryKey));
    assert_eq!(ids(page), ["9", "10", "11", "12"]);

    // Weights are 5, 10, 15, ..., 60; as text "10" would come first
    let page = assert_ok!(Record::page(&db, "PgSmokeItem", 1, 3, &Sort::by(["weight"])));
    assert_eq!(ids(page), ["1", "2", "3"]);

    let page = assert_ok!(Record::page(&db, "PgSmokeItem", 1, 2, &Sort::by(["id DESC"])));
    assert_eq!(ids(page), ["12", "11"]);

    assert_ok!(db.execute("DROP TABLE pg_smoke_items", &[], None));
}

#[test]
fn caller_sql_needs_no_parameter_casts() {
    let db = connect();

    assert_ok!(db.execute("DROP TABLE IF EXISTS pg_smoke_notes CASCADE", &[], None));
    assert_ok!(db.execute(
        "CREATE TABLE pg_smoke_notes (id integer PRIMARY KEY, body text, pinned boolean)",
        &[],
        None
    ));
    assert_ok!(db.execute(
        "INSERT INTO pg_smoke_notes (id, body, pinned) VALUES ($1, $2, $3)",
        &[Value::from(1), Value::from("first"), Value::from(true)],
        None
    ));

    let rows = assert_ok!(db.fetch_all(
        "SELECT id, body FROM pg_smoke_notes WHERE id = $1",
        &[Value::from(1)],
        None
    ));
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["body"].to_string(), "first");

    let rows = assert_ok!(db.fetch_all_rows(
        "SELECT id FROM pg_smoke_notes WHERE pinned = $1 AND id > $2",
        &[Value::from(true), Value::from(0)],
        Some("pg_smoke_pinned")
    ));
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0][0].to_string(), "1");

    assert_ok!(db.execute("DROP TABLE pg_smoke_notes", &[], None));
}
