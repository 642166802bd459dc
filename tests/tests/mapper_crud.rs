use pretty_assertions::assert_eq;
use relmap::{Mode, Value};
use tests::{
    fixtures::{ann, bob, Letter, Membership, Person},
    setup, setup_with,
};

#[test]
fn insert_then_query_round_trips() {
    let (mut mapper, _log) = setup();

    // One person plus two letters
    assert_eq!(mapper.insert(&ann()).unwrap(), 3);
    assert_eq!(mapper.insert(&bob()).unwrap(), 1);

    let people: Vec<Person> = mapper
        .query_list("SELECT * FROM p_persons WHERE p_name='ann'")
        .unwrap();
    assert_eq!(people, vec![ann()]);

    let people: Vec<Person> = mapper
        .query_list("SELECT * FROM p_persons ORDER BY p_name")
        .unwrap();
    assert_eq!(people, vec![ann(), bob()]);
}

#[test]
fn update_rewrites_record_and_related_rows() {
    let (mut mapper, _log) = setup();
    mapper.insert(&ann()).unwrap();

    let mut person = ann();
    person.age = 31;
    person.letters[1].text = Some("P.S.".into());
    person.letters[1].price = 7;

    assert_eq!(mapper.update(&person).unwrap(), 3);

    let people: Vec<Person> = mapper.query_list("SELECT * FROM p_persons").unwrap();
    assert_eq!(people, vec![person]);
}

#[test]
fn delete_removes_record_and_related_rows() {
    let (mut mapper, log) = setup();
    mapper.insert(&ann()).unwrap();
    mapper.insert(&bob()).unwrap();

    assert_eq!(mapper.delete(&ann()).unwrap(), 3);

    let statement = log.last().unwrap();
    assert!(statement.ends_with(";DELETE FROM p_persons WHERE p_name = 'ann';"));

    assert_eq!(
        mapper.query_scalar("SELECT COUNT(*) FROM l_letters").unwrap(),
        Value::I64(0)
    );
    let people: Vec<Person> = mapper.query_list("SELECT * FROM p_persons").unwrap();
    assert_eq!(people, vec![bob()]);
}

#[test]
fn composite_key_round_trip() {
    let (mut mapper, log) = setup();

    let mut membership = Membership {
        group: "admins".into(),
        user: Some("ann".into()),
        role: "owner".into(),
    };
    mapper.insert(&membership).unwrap();

    membership.role = "member".into();
    assert_eq!(mapper.update(&membership).unwrap(), 1);
    assert_eq!(
        log.last().unwrap(),
        "UPDATE memberships SET m_group = 'admins',m_user = 'ann',m_role = 'member' \
         WHERE m_group = 'admins' AND m_user = 'ann';"
    );

    let rows: Vec<Membership> = mapper.query_list("SELECT * FROM memberships").unwrap();
    assert_eq!(rows, vec![membership.clone()]);

    assert_eq!(mapper.delete(&membership).unwrap(), 1);
    assert_eq!(
        log.last().unwrap(),
        "DELETE FROM memberships WHERE m_group = 'admins' AND m_user = 'ann';"
    );
}

#[test]
fn duplicate_insert_depends_on_mode() {
    let (mut mapper, _log) = setup();
    mapper.insert(&ann()).unwrap();

    let err = mapper.insert(&ann()).unwrap_err();
    assert!(err.is_invalid_statement());

    let (mut mapper, log) = setup_with(Mode::IgnoreConflict);
    assert_eq!(mapper.mode(), Mode::IgnoreConflict);

    assert_eq!(mapper.insert(&ann()).unwrap(), 3);
    assert_eq!(mapper.insert(&ann()).unwrap(), 0);
    assert!(log.last().unwrap().starts_with("INSERT OR IGNORE INTO p_persons"));
}

#[test]
fn mode_can_change_after_build() {
    let (mut mapper, log) = setup();
    mapper.insert(&bob()).unwrap();

    mapper.set_mode(Mode::IgnoreConflict);
    assert_eq!(mapper.insert(&bob()).unwrap(), 0);
    assert_eq!(
        log.last().unwrap(),
        "INSERT OR IGNORE INTO p_persons(p_name,p_alter) VALUES('bob','41');;"
    );
}

#[test]
fn query_scalar_returns_first_column_of_first_row() {
    let (mut mapper, _log) = setup();
    mapper.insert(&ann()).unwrap();

    assert_eq!(
        mapper
            .query_scalar("SELECT l_price, l_lettername FROM l_letters ORDER BY l_price DESC")
            .unwrap(),
        Value::I64(5)
    );
    assert_eq!(
        mapper
            .query_scalar("SELECT p_name FROM p_persons")
            .unwrap(),
        Value::from("ann")
    );

    let err = mapper
        .query_scalar("SELECT p_name FROM p_persons WHERE p_name = 'nobody'")
        .unwrap_err();
    assert!(err.is_record_not_found());
    assert!(err.is_metadata());
}

#[test]
fn execute_update_runs_raw_statements() {
    let (mut mapper, _log) = setup();
    mapper.insert(&ann()).unwrap();

    let count = mapper
        .execute_update("UPDATE l_letters SET l_price = l_price + 1;")
        .unwrap();
    assert_eq!(count, 2);

    let letters: Vec<Letter> = mapper
        .query_list("SELECT * FROM l_letters ORDER BY l_price")
        .unwrap();
    assert_eq!(
        letters.iter().map(|l| l.price).collect::<Vec<_>>(),
        vec![4, 6]
    );
}

#[test]
fn query_list_hydrates_standalone_records() {
    let (mut mapper, _log) = setup();
    mapper.insert(&ann()).unwrap();

    let letters: Vec<Letter> = mapper
        .query_list("SELECT * FROM l_letters WHERE l_lettername = 'first'")
        .unwrap();
    assert_eq!(letters, vec![ann().letters[0].clone()]);

    let none: Vec<Letter> = mapper
        .query_list("SELECT * FROM l_letters WHERE 0")
        .unwrap();
    assert!(none.is_empty());
}
