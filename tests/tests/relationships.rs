use pretty_assertions::assert_eq;
use relmap::Value;
use tests::{
    fixtures::{ann, bob, Person, Profile, User},
    setup,
};

fn user_with_profile() -> User {
    User {
        id: "u1".into(),
        profile_id: Some("7".into()),
        profile: Some(Profile {
            id: "7".into(),
            bio: "likes letters".into(),
        }),
    }
}

#[test]
fn has_many_issues_select_per_record() {
    let (mut mapper, log) = setup();
    mapper.insert(&ann()).unwrap();
    mapper.insert(&bob()).unwrap();
    log.clear();

    let people: Vec<Person> = mapper
        .query_list("SELECT * FROM p_persons ORDER BY p_name")
        .unwrap();
    assert_eq!(people.len(), 2);

    assert_eq!(
        log.statements(),
        vec![
            "SELECT * FROM p_persons ORDER BY p_name",
            "SELECT * FROM l_letters WHERE l_p_personname='ann'",
            "SELECT * FROM l_letters WHERE l_p_personname='bob'",
        ]
    );
}

#[test]
fn has_many_without_rows_is_empty() {
    let (mut mapper, _log) = setup();
    mapper.insert(&bob()).unwrap();

    let people: Vec<Person> = mapper.query_list("SELECT * FROM p_persons").unwrap();
    assert!(people[0].letters.is_empty());
}

#[test]
fn has_one_round_trip() {
    let (mut mapper, log) = setup();

    assert_eq!(mapper.insert(&user_with_profile()).unwrap(), 2);
    log.clear();

    let users: Vec<User> = mapper.query_list("SELECT * FROM users").unwrap();
    assert_eq!(users, vec![user_with_profile()]);
    assert!(log.contains("SELECT * FROM profiles WHERE pr_id='7'"));
}

#[test]
fn has_one_without_row_fails() {
    let (mut mapper, _log) = setup();

    let user = User {
        id: "u2".into(),
        profile_id: Some("404".into()),
        profile: None,
    };
    mapper.insert(&user).unwrap();

    let err = mapper.query_list::<User>("SELECT * FROM users").unwrap_err();
    assert!(err.is_record_not_found());
    assert!(err.is_metadata());
    assert_eq!(
        err.to_string(),
        "metadata error: resolving `User::profile`: record not found: SELECT * FROM profiles WHERE pr_id='404'"
    );
}

#[test]
fn has_one_without_reference_value_fails() {
    let (mut mapper, _log) = setup();

    let user = User {
        id: "u3".into(),
        profile_id: None,
        profile: None,
    };
    mapper.insert(&user).unwrap();

    let err = mapper.query_list::<User>("SELECT * FROM users").unwrap_err();
    assert!(err.is_metadata());
}

#[test]
fn delete_cascades_into_has_one() {
    let (mut mapper, _log) = setup();
    mapper.insert(&user_with_profile()).unwrap();

    assert_eq!(mapper.delete(&user_with_profile()).unwrap(), 2);
    assert_eq!(
        mapper.query_scalar("SELECT COUNT(*) FROM profiles").unwrap(),
        Value::I64(0)
    );
}
