#[macro_use]
mod fmt;
use fmt::ToSql;

mod delim;
use delim::{And, Comma};

mod literal;
pub use literal::quote;
use literal::Literal;

// Fragment serializers
mod statement;

use crate::stmt::Statement;

/// Serialize a statement to a SQL string.
///
/// Values are written inline as quoted literals; nothing is bound as a
/// parameter. Data-modifying statements end with `;`, selects do not.
#[derive(Debug, Default, Clone, Copy)]
pub struct Serializer {
    _priv: (),
}

struct Formatter<'a> {
    /// Where to write the serialized SQL
    dst: &'a mut String,
}

impl Serializer {
    pub fn new() -> Serializer {
        Serializer { _priv: () }
    }

    pub fn serialize(&self, stmt: &Statement) -> String {
        let mut ret = String::new();
        self.serialize_into(stmt, &mut ret);
        ret
    }

    /// Appends the serialized statement to `dst`.
    pub fn serialize_into(&self, stmt: &Statement, dst: &mut String) {
        let mut fmt = Formatter { dst };
        stmt.to_sql(&mut fmt);
    }
}
