use pretty_assertions::assert_eq;
use relmap::{schema, Accessors, Model};
use tests::{
    fixtures::{ann, Letter, Person},
    setup,
};

/// Exposes the letter price read-only.
#[derive(Debug, Default, PartialEq)]
struct PriceTag {
    name: String,
    price: i64,
}

impl Model for PriceTag {
    fn schema() -> schema::Model {
        schema::Model::builder::<Self>()
            .table("l_letters")
            .key("l_lettername", "name")
            .column("l_price", "price")
            .build()
    }

    fn accessors() -> Accessors<Self> {
        Accessors::<Self>::new()
            .field("name", |t| t.name.clone(), |t, v| t.name = v)
            .getter("price", |t| t.price)
    }
}

#[test]
fn unbound_result_columns_are_ignored() {
    let (mut mapper, _log) = setup();
    mapper.insert(&ann()).unwrap();

    let letters: Vec<Letter> = mapper
        .query_list(
            "SELECT l_lettername, 'ignored' AS extra, l_p_personname, l_text, l_price \
             FROM l_letters WHERE l_lettername = 'first'",
        )
        .unwrap();

    assert_eq!(letters, vec![ann().letters[0].clone()]);
}

#[test]
fn missing_columns_keep_defaults() {
    let (mut mapper, _log) = setup();
    mapper.insert(&ann()).unwrap();

    let letters: Vec<Letter> = mapper
        .query_list("SELECT l_lettername FROM l_letters ORDER BY l_lettername")
        .unwrap();

    assert_eq!(
        letters,
        vec![
            Letter {
                name: "first".into(),
                ..Letter::default()
            },
            Letter {
                name: "second".into(),
                ..Letter::default()
            },
        ]
    );
}

#[test]
fn read_only_fields_are_skipped() {
    let (mut mapper, _log) = setup();
    mapper.insert(&ann()).unwrap();

    let tags: Vec<PriceTag> = mapper
        .query_list("SELECT * FROM l_letters WHERE l_lettername = 'second'")
        .unwrap();

    assert_eq!(
        tags,
        vec![PriceTag {
            name: "second".into(),
            price: 0,
        }]
    );
}

#[test]
fn column_names_match_case_insensitively() {
    let (mut mapper, _log) = setup();
    mapper.insert(&ann()).unwrap();

    let letters: Vec<Letter> = mapper
        .query_list("SELECT L_LETTERNAME, L_PRICE FROM l_letters WHERE l_lettername = 'second'")
        .unwrap();

    assert_eq!(letters[0].name, "second");
    assert_eq!(letters[0].price, 5);
}

#[test]
fn unconvertible_value_is_metadata_error() {
    let (mut mapper, _log) = setup();

    mapper
        .execute_update(
            "INSERT INTO l_letters(l_lettername,l_p_personname,l_text,l_price) \
             VALUES('odd','ann',NULL,'not a number');",
        )
        .unwrap();

    let err = mapper
        .query_list::<Letter>("SELECT * FROM l_letters")
        .unwrap_err();
    assert!(err.is_type_conversion());
    assert!(err.is_metadata());
    assert_eq!(
        err.to_string(),
        "metadata error: hydrating `Letter::price` from column `l_price`: cannot convert String to i32"
    );
}

#[test]
fn unconvertible_age_names_field() {
    let (mut mapper, _log) = setup();

    mapper
        .execute_update("INSERT INTO p_persons(p_name,p_alter) VALUES('cy','abc');")
        .unwrap();

    let err = mapper
        .query_list::<Person>("SELECT * FROM p_persons")
        .unwrap_err();
    assert!(err.is_metadata());
    assert_eq!(
        err.to_string(),
        "metadata error: hydrating `Person::age` from column `p_alter`: cannot convert String to i64"
    );
}
