use super::{Condition, Statement};

/// Selects every column of the rows matching a single condition. Used to load
/// the records held by a relationship.
#[derive(Debug, Clone, PartialEq)]
pub struct Select {
    pub table: String,
    pub filter: Condition,
}

impl From<Select> for Statement {
    fn from(value: Select) -> Self {
        Statement::Select(value)
    }
}
