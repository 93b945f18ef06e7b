use pretty_assertions::assert_eq;
use tests::prelude::*;

/// `users (id integer primary key, name text)`
fn minimal_users(driver: &ScriptedDriver) {
    driver.table(
        "users",
        [
            Column::new("id", "integer", false, true),
            Column::new("name", "text", false, false),
        ],
    );
}

fn text(value: &str) -> Option<String> {
    Some(value.to_string())
}

#[test]
fn insert_names_only_non_key_columns() {
    let driver = ScriptedDriver::new();
    minimal_users(&driver);
    let db = setup(&driver);
    let log = driver.log();

    let mut user = assert_ok!(Record::new(&db, "User"));
    assert!(user.set_all([("name", "Ada")]).is_empty());

    driver.push_rows(&["id", "name"], &[&[Some("1"), Some("Ada")]]);
    assert_ok!(user.save(&db));

    assert_eq!(
        log.sql_for("_insert_users").unwrap(),
        "INSERT INTO users (name) VALUES ($1::text) RETURNING id::text AS id, name::text AS name;"
    );
    assert_eq!(log.params_for("_insert_users"), Some(vec![text("Ada")]));

    assert_eq!(user.get("id").unwrap(), &Value::I64(1));
    assert!(user.is_persisted());
    assert!(!user.is_modified());
    assert_eq!(user.clean_value("name").unwrap(), &Value::from("Ada"));
}

#[test]
fn update_sets_only_changed_columns() {
    let driver = ScriptedDriver::new();
    minimal_users(&driver);
    let db = setup(&driver);
    let log = driver.log();

    driver.push_rows(&["id", "name"], &[&[Some("7"), Some("Ada")]]);
    let mut user = assert_ok!(Record::find(&db, "User", [("id", 7)]));

    assert_eq!(
        log.sql_for("_load_users").unwrap(),
        "SELECT id::text AS id, name::text AS name FROM users WHERE id = $1::integer;"
    );
    assert_eq!(log.params_for("_load_users"), Some(vec![text("7")]));

    assert_ok!(user.set("name", "Grace"));
    assert_eq!(user.changed_columns(), ["name"]);

    driver.push_rows(&["id", "name"], &[&[Some("7"), Some("Grace")]]);
    assert_ok!(user.save(&db));

    assert_eq!(
        log.sql_for("_update_users_2").unwrap(),
        "UPDATE users SET name = $1::text WHERE id = $2::integer RETURNING id::text AS id, name::text AS name;"
    );
    assert_eq!(log.params_for("_update_users_2"), Some(vec![text("Grace"), text("7")]));

    assert_eq!(user.clean_value("name").unwrap(), &Value::from("Grace"));
    assert!(!user.is_modified());
}

#[test]
fn unmodified_save_issues_no_statement() {
    let driver = ScriptedDriver::new();
    minimal_users(&driver);
    let db = setup(&driver);
    let log = driver.log();

    driver.push_rows(&["id", "name"], &[&[Some("7"), Some("Ada")]]);
    let mut user = assert_ok!(Record::find(&db, "User", [("id", 7)]));

    let before = log.len();
    assert_ok!(user.save(&db));
    assert_eq!(log.len(), before);

    // Setting the same value is not a change
    assert_ok!(user.set("name", "Ada"));
    assert_ok!(user.save(&db));
    assert_eq!(log.len(), before);
}

#[test]
fn each_change_pattern_gets_its_own_statement() {
    let driver = ScriptedDriver::new();
    users_table(&driver);
    let db = setup(&driver);
    let log = driver.log();

    let columns = ["id", "name", "email", "active"];
    let row: &[Option<&str>] = &[Some("3"), Some("Ada"), None, Some("f")];

    driver.push_rows(&columns, &[row]);
    let mut user = assert_ok!(Record::find(&db, "User", [("id", 3)]));

    assert_ok!(user.set("email", "ada@example.com"));
    assert_ok!(user.set("active", true));
    driver.push_rows(&columns, &[&[Some("3"), Some("Ada"), Some("ada@example.com"), Some("t")]]);
    assert_ok!(user.save(&db));

    assert_eq!(
        log.sql_for("_update_users_3,4").unwrap(),
        "UPDATE users SET email = $1::character varying(64), active = $2::boolean \
         WHERE id = $3::integer \
         RETURNING id::text AS id, name::text AS name, email::text AS email, active::text AS active;"
    );
    assert_eq!(
        log.params_for("_update_users_3,4"),
        Some(vec![text("ada@example.com"), text("t"), text("3")])
    );
    assert_eq!(user.get("active").unwrap(), &Value::Bool(true));

    // Same pattern on another row reuses the statement
    driver.push_rows(&columns, &[&[Some("4"), Some("Bob"), None, None]]);
    let mut other = assert_ok!(Record::find(&db, "User", [("id", 4)]));
    assert_ok!(other.set("email", "bob@example.com"));
    assert_ok!(other.set("active", "0"));
    driver.push_rows(&columns, &[&[Some("4"), Some("Bob"), Some("bob@example.com"), Some("f")]]);
    assert_ok!(other.save(&db));

    let update_prepares = log
        .prepares()
        .into_iter()
        .filter(|(name, _)| name.starts_with("_update_"))
        .count();
    assert_eq!(update_prepares, 1);
    assert_eq!(
        log.params_for("_update_users_3,4"),
        Some(vec![text("bob@example.com"), text("f"), text("4")])
    );
    assert!(db.prepared("_load_users"));
}

#[test]
fn update_targets_current_primary_key() {
    let driver = ScriptedDriver::new();
    minimal_users(&driver);
    let db = setup(&driver);
    let log = driver.log();

    driver.push_rows(&["id", "name"], &[&[Some("7"), Some("Ada")]]);
    let mut user = assert_ok!(Record::find(&db, "User", [("id", 7)]));

    assert_ok!(user.set("id", 8));
    driver.push_rows(&["id", "name"], &[&[Some("8"), Some("Ada")]]);
    assert_ok!(user.save(&db));

    assert_eq!(log.params_for("_update_users_1"), Some(vec![text("8"), text("8")]));
}

#[test]
fn load_missing_row() {
    let driver = ScriptedDriver::new();
    minimal_users(&driver);
    let db = setup(&driver);

    let err = assert_err!(Record::find(&db, "User", [("id", 999)]));
    assert!(err.is_no_such_row());
    assert_eq!(err.to_string(), "No row exists in users for id = 999");
}

#[test]
fn load_requires_exactly_the_primary_key() {
    let driver = ScriptedDriver::new();
    minimal_users(&driver);
    let db = setup(&driver);
    let log = driver.log();

    let err = assert_err!(Record::find(&db, "User", [("name", "Ada")]));
    assert!(err.is_bad_primary_key());
    assert_eq!(err.bad_column_parts(), Some(("users", "name")));

    let err = assert_err!(Record::find(&db, "User", [("nmae", "Ada")]));
    assert!(err.is_bad_primary_key());

    let err = assert_err!(Record::find(&db, "User", Vec::<(&str, Value)>::new()));
    assert!(err.is_bad_primary_key());
    assert_eq!(err.bad_column_parts(), Some(("users", "id")));

    let err = assert_err!(Record::find(&db, "User", [("id", Value::Null)]));
    assert!(err.is_bad_primary_key());

    assert!(!db.prepared("_load_users"));
    assert!(log.executes().iter().all(|(name, _)| name == "_colquery"));
}

#[test]
fn reload_discards_local_changes() {
    let driver = ScriptedDriver::new();
    minimal_users(&driver);
    let db = setup(&driver);

    driver.push_rows(&["id", "name"], &[&[Some("7"), Some("Ada")]]);
    let mut user = assert_ok!(Record::find(&db, "User", [("id", 7)]));
    assert_ok!(user.set("name", "changed"));

    driver.push_rows(&["id", "name"], &[&[Some("7"), Some("Ada Lovelace")]]);
    assert_ok!(user.load(&db, [("id", 7)]));

    assert_eq!(user.get("name").unwrap(), &Value::from("Ada Lovelace"));
    assert!(!user.is_modified());
}

#[test]
fn form_submission() {
    let driver = ScriptedDriver::new();
    users_table(&driver);
    let db = setup(&driver);

    let mut user = assert_ok!(Record::new(&db, "User"));
    let errors = user.set_all([
        ("name", "Ada"),
        ("_check_active", "f"),
        ("favourite_colour", "green"),
    ]);

    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].bad_column_parts(), Some(("users", "favourite_colour")));
    assert_eq!(user.get("active").unwrap(), &Value::Bool(false));
    assert_eq!(user.changed_columns(), ["name", "active"]);
    assert_eq!(user.display("active").unwrap(), "No");
}
