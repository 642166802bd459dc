use super::{Assignment, Condition, Statement};

#[derive(Debug, Clone, PartialEq)]
pub struct Update {
    pub table: String,

    /// Every bound column, primary keys included
    pub assignments: Vec<Assignment>,

    /// Primary key conditions, joined with `AND`
    pub filter: Vec<Condition>,
}

impl From<Update> for Statement {
    fn from(value: Update) -> Self {
        Statement::Update(value)
    }
}
