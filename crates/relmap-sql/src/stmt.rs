mod delete;
pub use delete::Delete;

mod insert;
pub use insert::Insert;

mod select;
pub use select::Select;

mod update;
pub use update::Update;

/// A column paired with the string form of its value. `None` is null.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    pub column: String,
    pub value: Option<String>,
}

/// An equality test on a column. Filters never compare against null.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Condition {
    pub column: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Delete(Delete),
    Insert(Insert),
    Select(Select),
    Update(Update),
}

impl Assignment {
    pub fn new(column: impl Into<String>, value: Option<String>) -> Assignment {
        Assignment {
            column: column.into(),
            value,
        }
    }
}

impl Condition {
    pub fn new(column: impl Into<String>, value: impl Into<String>) -> Condition {
        Condition {
            column: column.into(),
            value: value.into(),
        }
    }
}
