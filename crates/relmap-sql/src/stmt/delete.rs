use super::{Condition, Statement};

#[derive(Debug, Clone, PartialEq)]
pub struct Delete {
    pub table: String,

    /// Primary key conditions, joined with `AND`
    pub filter: Vec<Condition>,
}

impl From<Delete> for Statement {
    fn from(value: Delete) -> Self {
        Statement::Delete(value)
    }
}
