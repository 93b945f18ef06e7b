use activerow::Result;
use pretty_assertions::assert_eq;
use tests::prelude::*;

#[derive(Debug)]
struct User(Record);

impl Model for User {
    const NAME: &'static str = "User";

    fn from_record(record: Record) -> Self {
        User(record)
    }

    fn record(&self) -> &Record {
        &self.0
    }

    fn record_mut(&mut self) -> &mut Record {
        &mut self.0
    }

    fn declare(db: &Db) -> Result<()> {
        db.declare_one_to_many("User", "posts", "Post")
    }
}

#[derive(Debug)]
struct Post(Record);

impl Model for Post {
    const NAME: &'static str = "Post";

    fn from_record(record: Record) -> Self {
        Post(record)
    }

    fn record(&self) -> &Record {
        &self.0
    }

    fn record_mut(&mut self) -> &mut Record {
        &mut self.0
    }

    fn declare(db: &Db) -> Result<()> {
        db.declare_many_to_many("Post", "tags", "Tag")?;
        db.declare_many_to_one("Post", "author", "User")
    }
}

#[derive(Debug)]
struct Tag(Record);

impl Model for Tag {
    const NAME: &'static str = "Tag";

    fn from_record(record: Record) -> Self {
        Tag(record)
    }

    fn record(&self) -> &Record {
        &self.0
    }

    fn record_mut(&mut self) -> &mut Record {
        &mut self.0
    }
}

fn blog() -> (ScriptedDriver, Db) {
    let driver = ScriptedDriver::new();
    driver.table(
        "users",
        [
            Column::new("id", "integer", false, true),
            Column::new("name", "text", false, false),
        ],
    );
    driver.table(
        "posts",
        [
            Column::new("id", "integer", false, true),
            Column::new("user_id", "integer", true, false),
            Column::new("title", "text", false, false),
        ],
    );
    driver.table(
        "tags",
        [
            Column::new("id", "integer", false, true),
            Column::new("label", "text", false, false),
        ],
    );

    let db = setup_with(&driver, |builder| {
        builder.register::<User>().register::<Post>().register::<Tag>();
    });

    (driver, db)
}

fn load_user(driver: &ScriptedDriver, db: &Db, id: &str) -> User {
    driver.push_rows(&["id", "name"], &[&[Some(id), Some("Ada")]]);
    assert_ok!(User::load(db, [("id", id)]))
}

fn load_post(driver: &ScriptedDriver, db: &Db, user_id: Option<&str>) -> Post {
    driver.push_rows(&["id", "user_id", "title"], &[&[Some("3"), user_id, Some("Hello")]]);
    assert_ok!(Post::load(db, [("id", 3)]))
}

#[test]
fn one_to_many_loads_once() {
    let (driver, db) = blog();
    let log = driver.log();
    let mut user = load_user(&driver, &db, "7");

    driver.push_rows(
        &["id", "user_id", "title"],
        &[
            &[Some("1"), Some("7"), Some("First")],
            &[Some("2"), Some("7"), Some("Second")],
        ],
    );

    let posts = assert_ok!(user.related_many::<Post>(&db, "posts"));
    assert_eq!(posts.len(), 2);
    assert_eq!(posts[1].get("title").unwrap(), &Value::from("Second"));
    assert_eq!(posts[0].record().class(), "Post");

    assert_eq!(
        log.sql_for("_assoc_users_posts").unwrap(),
        "SELECT id::text AS id, user_id::text AS user_id, title::text AS title FROM posts WHERE user_id = $1::integer;"
    );
    assert_eq!(log.params_for("_assoc_users_posts"), Some(vec![Some("7".to_string())]));

    let executes = log.executes().len();
    let posts = assert_ok!(user.resolve(&db, "posts", false));
    assert_eq!(posts.as_many().unwrap().len(), 2);
    assert_eq!(log.executes().len(), executes);
}

#[test]
fn force_reload_queries_again() {
    let (driver, db) = blog();
    let log = driver.log();
    let mut user = load_user(&driver, &db, "7");

    assert_eq!(assert_ok!(user.resolve(&db, "posts", false)).as_many().unwrap().len(), 0);

    driver.push_rows(&["id", "user_id", "title"], &[&[Some("1"), Some("7"), Some("First")]]);
    let posts = assert_ok!(user.resolve(&db, "posts", true));
    assert_eq!(posts.as_many().unwrap().len(), 1);

    let runs = log
        .executes()
        .iter()
        .filter(|(name, _)| name == "_assoc_users_posts")
        .count();
    assert_eq!(runs, 2);
    assert_eq!(
        log.prepares()
            .iter()
            .filter(|(name, _)| name == "_assoc_users_posts")
            .count(),
        1
    );
}

#[test]
fn unsaved_owner_has_no_related_rows() {
    let (driver, db) = blog();
    let log = driver.log();
    let mut user = assert_ok!(User::new(&db));

    let posts = assert_ok!(user.related_many::<Post>(&db, "posts"));
    assert!(posts.is_empty());
    assert!(!log.executes().iter().any(|(name, _)| name.starts_with("_assoc_")));
}

#[test]
fn many_to_many_goes_through_join_table() {
    let (driver, db) = blog();
    let log = driver.log();
    let mut post = load_post(&driver, &db, Some("7"));

    driver.push_rows(
        &["id", "label"],
        &[&[Some("10"), Some("rust")], &[Some("11"), Some("databases")]],
    );

    let tags = assert_ok!(post.related_many::<Tag>(&db, "tags"));
    assert_eq!(
        tags.iter()
            .map(|tag| tag.get("label").unwrap().to_string())
            .collect::<Vec<_>>(),
        ["rust", "databases"]
    );
    assert_eq!(tags[0].get("id").unwrap(), &Value::I64(10));

    assert_eq!(
        log.sql_for("_assoc_posts_tags").unwrap(),
        "SELECT tags.id::text AS id, tags.label::text AS label FROM tags \
         INNER JOIN posts_tags ON posts_tags.tag_id = tags.id \
         WHERE posts_tags.post_id = $1::integer;"
    );
    assert_eq!(log.params_for("_assoc_posts_tags"), Some(vec![Some("3".to_string())]));
}

#[test]
fn many_to_one_follows_foreign_key() {
    let (driver, db) = blog();
    let log = driver.log();
    let mut post = load_post(&driver, &db, Some("7"));

    driver.push_rows(&["id", "name"], &[&[Some("7"), Some("Ada")]]);
    let author = assert_ok!(post.related_one::<User>(&db, "author"));
    assert_eq!(author.get("name").unwrap(), &Value::from("Ada"));

    assert_eq!(
        log.sql_for("_assoc_posts_author").unwrap(),
        "SELECT id::text AS id, name::text AS name FROM users WHERE id = $1::integer;"
    );
    assert_eq!(log.params_for("_assoc_posts_author"), Some(vec![Some("7".to_string())]));
}

#[test]
fn many_to_one_without_a_row() {
    let (driver, db) = blog();

    let mut post = load_post(&driver, &db, None);
    let err = assert_err!(post.related_one::<User>(&db, "author"));
    assert!(err.is_no_such_row());

    let mut post = load_post(&driver, &db, Some("42"));
    let err = assert_err!(post.related_one::<User>(&db, "author"));
    assert!(err.is_no_such_row());
    assert_eq!(err.to_string(), "No row exists in users for id = 42");
}

#[test]
fn undeclared_association() {
    let (driver, db) = blog();
    let mut user = load_user(&driver, &db, "7");

    let err = assert_err!(user.resolve(&db, "comments", false));
    assert!(err.is_bad_method());

    // Associations belong to the class that declared them
    let err = assert_err!(user.resolve(&db, "tags", false));
    assert!(err.is_bad_method());
}

#[test]
fn association_names_are_unique_per_class() {
    let (_driver, db) = blog();

    let err = assert_err!(db.declare_many_to_many("User", "posts", "Post"));
    assert!(err.is_configuration());

    let relation = assert_ok!(db.relation("User", "posts"));
    assert_eq!(relation.kind, activerow::RelationKind::OneToMany);
    assert_eq!(relation.related, "Post");

    assert_ok!(db.declare_one_to_many("Tag", "posts", "Post"));
}

#[test]
fn wrong_shape_for_typed_access() {
    let (driver, db) = blog();
    let mut user = load_user(&driver, &db, "7");

    assert!(user.related_one::<Post>(&db, "posts").is_err());
}

#[test]
fn reload_clears_resolved_associations() {
    let (driver, db) = blog();
    let log = driver.log();
    let mut user = load_user(&driver, &db, "7");

    assert_ok!(user.resolve(&db, "posts", false));

    driver.push_rows(&["id", "name"], &[&[Some("7"), Some("Ada")]]);
    assert_ok!(user.record_mut().load(&db, [("id", 7)]));

    assert_ok!(user.resolve(&db, "posts", false));
    assert_eq!(
        log.executes()
            .iter()
            .filter(|(name, _)| name == "_assoc_users_posts")
            .count(),
        2
    );
}
