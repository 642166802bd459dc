use super::{Assignment, Statement};
use crate::Mode;

#[derive(Debug, Clone, PartialEq)]
pub struct Insert {
    pub mode: Mode,

    /// Table receiving the row
    pub table: String,

    /// Column values, in binding order
    pub values: Vec<Assignment>,
}

impl From<Insert> for Statement {
    fn from(value: Insert) -> Self {
        Statement::Insert(value)
    }
}
