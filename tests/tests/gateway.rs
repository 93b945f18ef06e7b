use pretty_assertions::assert_eq;
use tests::prelude::*;

#[test]
fn connection_is_opened_lazily_once() {
    let driver = ScriptedDriver::new();
    let db = setup(&driver);
    let log = driver.log();

    assert_eq!(log.connects(), 0);

    assert_ok!(db.execute("SELECT 1", &[], None));
    assert_ok!(db.execute("SELECT 2", &[], None));

    assert_eq!(log.connects(), 1);
    match &log.ops()[0] {
        Op::Connect(params) => assert_eq!(params.get("dbname"), Some("activerow_test")),
        op => panic!("expected connect; actual={op:?}"),
    }
}

#[test]
fn named_statement_is_prepared_once() {
    let driver = ScriptedDriver::new();
    let db = setup(&driver);
    let log = driver.log();

    assert!(!db.prepared("probe"));

    assert_ok!(db.execute("SELECT 1", &[], Some("probe")));
    // Same name, different SQL: the registered statement still runs
    assert_ok!(db.execute("SELECT 2", &[], Some("probe")));

    assert!(db.prepared("probe"));
    assert_eq!(log.prepares(), [("probe".to_string(), "SELECT 1".to_string())]);
    assert_eq!(log.executes().len(), 2);
}

#[test]
fn unnamed_statement_is_prepared_every_time() {
    let driver = ScriptedDriver::new();
    let db = setup(&driver);
    let log = driver.log();

    let sql = "SELECT name FROM users WHERE id = $1::integer";
    assert_ok!(db.execute(sql, &[Value::from(1)], None));
    assert_ok!(db.execute(sql, &[Value::from(2)], None));

    let prepares = log.prepares();
    assert_eq!(prepares.len(), 2);
    assert!(prepares.iter().all(|(name, _)| name.is_empty()));
    assert!(!db.prepared(""));
    assert_eq!(log.params_for(""), Some(vec![Some("2".to_string())]));
}

#[test]
fn params_are_sent_as_text() {
    let driver = ScriptedDriver::new();
    let db = setup(&driver);
    let log = driver.log();

    let params = [Value::from(7), Value::Null, Value::from(true), Value::from("Ada")];
    assert_ok!(db.execute("SELECT $1, $2, $3, $4", &params, Some("mixed")));

    assert_eq!(
        log.params_for("mixed").unwrap(),
        [
            Some("7".to_string()),
            None,
            Some("t".to_string()),
            Some("Ada".to_string())
        ]
    );

    match log.ops().iter().find(|op| matches!(op, Op::Prepare { .. })) {
        Some(Op::Prepare { params, .. }) => assert_eq!(*params, 4),
        op => panic!("expected prepare; actual={op:?}"),
    }
}

#[test]
fn fetch_rows_as_maps_and_positions() {
    let driver = ScriptedDriver::new();
    let db = setup(&driver);

    let rows: &[&[Option<&str>]] = &[&[Some("1"), Some("Ada")], &[Some("2"), None]];
    driver.push_rows(&["id", "name"], rows);
    driver.push_rows(&["id", "name"], rows);

    let maps = assert_ok!(db.fetch_all("SELECT id, name FROM users", &[], None));
    assert_eq!(maps.len(), 2);
    assert_eq!(maps[0]["id"], Value::from("1"));
    assert_eq!(maps[0]["name"], Value::from("Ada"));
    assert!(maps[1]["name"].is_null());
    assert_eq!(
        maps[0].keys().map(String::as_str).collect::<Vec<_>>(),
        ["id", "name"]
    );

    let positional = assert_ok!(db.fetch_all_rows("SELECT id, name FROM users", &[], None));
    assert_eq!(
        positional,
        [
            vec![Value::from("1"), Value::from("Ada")],
            vec![Value::from("2"), Value::Null]
        ]
    );
}

#[test]
fn identifiers_are_quoted_once_in_batches() {
    let driver = ScriptedDriver::new();
    let db = setup(&driver);
    let log = driver.log();

    let quoted = assert_ok!(db.quote_identifiers(&["users", "user", "users"]));
    assert_eq!(quoted.len(), 2);
    assert_eq!(quoted["users"], "users");
    assert_eq!(quoted["user"], "\"user\"");

    assert_eq!(assert_ok!(db.quote_identifier("user")), "\"user\"");
    assert_ok!(db.quote_identifiers(&["users", "Order", "email"]));

    assert_eq!(
        log.quotes(),
        [
            vec!["users".to_string(), "user".to_string()],
            vec!["Order".to_string(), "email".to_string()],
        ]
    );
}

#[test]
fn generated_statements_quote_identifiers_before_preparing() {
    let driver = ScriptedDriver::new();
    driver.table(
        "user",
        [
            Column::new("id", "integer", false, true),
            Column::new("order", "integer", true, false),
        ],
    );
    let db = setup_with(&driver, |builder| {
        builder.table("Member", "user");
    });
    let log = driver.log();

    assert_err!(Record::find(&db, "Member", [("id", 1)]));

    assert_eq!(
        log.sql_for("_load_user").unwrap(),
        "SELECT id::text AS id, \"order\"::text AS \"order\" FROM \"user\" WHERE id = $1::integer;"
    );
    assert_eq!(
        log.quotes(),
        [vec!["id".to_string(), "order".to_string(), "user".to_string()]]
    );
}

#[test]
fn missing_connection_params_is_a_configuration_error() {
    let driver = ScriptedDriver::new();
    tests::init_logging();

    let db = assert_ok!(Db::builder().driver(driver.clone()).build());

    // Without builder params the defaults and DATABASE_URL decide; only
    // check the outcome when neither is set.
    if std::env::var("DATABASE_URL").is_err() && activerow::db::default_params().is_empty() {
        let err = assert_err!(db.execute("SELECT 1", &[], None));
        assert!(err.is_configuration());
        assert_eq!(driver.log().connects(), 0);
    }
}
