use relmap::{schema, Accessors, Mapper, Model, ModelRef};
use relmap_driver_sqlite::Sqlite;
use tests::{
    fixtures::{Membership, Person, Profile},
    setup, LoggingDriver,
};

#[test]
fn empty_url_is_invalid_param() {
    let err = Mapper::builder().connect("").unwrap_err();
    assert!(err.is_invalid_param());
}

#[test]
fn malformed_or_unsupported_url_is_invalid_param() {
    for url in ["no scheme here", "mysql://localhost/db"] {
        let err = Mapper::builder().connect(url).unwrap_err();
        assert!(err.is_invalid_param(), "url={url} err={err}");
    }
}

#[test]
fn sqlite_url_builds_mapper() {
    let mut mapper = Mapper::builder().connect("sqlite::memory:").unwrap();
    assert_eq!(mapper.url(), "sqlite::memory:");

    mapper
        .initialize("CREATE TABLE t (id TEXT PRIMARY KEY);")
        .unwrap();
    assert_eq!(
        mapper.execute_update("INSERT INTO t(id) VALUES('1');").unwrap(),
        1
    );
}

#[test]
fn unreachable_database_is_communication_error() {
    let dir = tempfile::tempdir().unwrap();
    let driver = Sqlite::open(dir.path().join("missing").join("db.sqlite"));
    let mut mapper = Mapper::builder().build(LoggingDriver::new(Box::new(driver)));

    let err = mapper.query_scalar("SELECT 1").unwrap_err();
    assert!(err.is_communication());
}

#[test]
fn rejected_sql_is_invalid_statement() {
    let (mut mapper, _log) = setup();

    let err = mapper
        .execute_update("INSERT INTO nowhere(a) VALUES('1');")
        .unwrap_err();
    assert!(err.is_invalid_statement());

    let err = mapper.query_list::<Person>("SELEC * FROM p_persons").unwrap_err();
    assert!(err.is_invalid_statement());
}

#[test]
fn null_primary_key_is_metadata_error() {
    let (mut mapper, log) = setup();

    let membership = Membership {
        group: "admins".into(),
        user: None,
        role: "owner".into(),
    };

    assert!(mapper.update(&membership).unwrap_err().is_metadata());
    assert!(mapper.delete(&membership).unwrap_err().is_metadata());

    // Nothing was sent to the database
    assert!(log.is_empty());
}

#[test]
fn target_without_constructor_is_metadata_error() {
    let (mut mapper, _log) = setup();

    let err = mapper
        .query_records(
            "SELECT * FROM profiles",
            ModelRef::without_constructor::<Profile>(),
        )
        .unwrap_err();
    assert!(err.is_metadata());
}

#[derive(Debug, Default)]
struct Node {
    id: String,
    next: Vec<Edge>,
}

#[derive(Debug, Default)]
struct Edge {
    id: String,
    back: Option<Box<Node>>,
}

impl Model for Node {
    fn schema() -> schema::Model {
        schema::Model::builder::<Self>()
            .table("nodes")
            .key("id", "id")
            .has_many("next", ModelRef::of::<Edge>(), "node_id", "id")
            .build()
    }

    fn accessors() -> Accessors<Self> {
        Accessors::<Self>::new()
            .field("id", |n| n.id.clone(), |n, v| n.id = v)
            .has_many("next", |n| &n.next, |n, v| n.next = v)
    }
}

impl Model for Edge {
    fn schema() -> schema::Model {
        schema::Model::builder::<Self>()
            .table("edges")
            .key("id", "id")
            .has_one("back", ModelRef::of::<Node>(), "node_id", "id")
            .build()
    }

    fn accessors() -> Accessors<Self> {
        Accessors::<Self>::new()
            .field("id", |e| e.id.clone(), |e, v| e.id = v)
            .has_one("back", |e| e.back.as_deref(), |e, v| e.back = Some(Box::new(v)))
    }
}

#[test]
fn relationship_cycle_is_rejected_before_any_sql() {
    let (mut mapper, log) = setup();

    let node = Node {
        id: "n".into(),
        next: vec![],
    };

    let err = mapper.insert(&node).unwrap_err();
    assert!(err.is_metadata());
    assert_eq!(
        err.to_string(),
        "metadata error: relationship cycle: Node -> Edge -> Node"
    );

    let err = mapper.query_list::<Node>("SELECT 1 AS id").unwrap_err();
    assert!(err.is_metadata());

    assert!(log.is_empty());
}
