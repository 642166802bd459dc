use super::{And, Comma, Formatter, Literal, ToSql};

use crate::stmt::{self, Statement};

impl ToSql for &Statement {
    fn to_sql(self, f: &mut Formatter<'_>) {
        match self {
            Statement::Delete(stmt) => stmt.to_sql(f),
            Statement::Insert(stmt) => stmt.to_sql(f),
            Statement::Select(stmt) => stmt.to_sql(f),
            Statement::Update(stmt) => stmt.to_sql(f),
        }
    }
}

impl ToSql for &stmt::Insert {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let table = &self.table;
        let columns = Comma(self.values.iter().map(|value| value.column.as_str()));
        let values = Comma(self.values.iter().map(|value| Literal(value.value.as_deref())));

        let conflict = self.mode.clause();
        let space = if conflict.is_empty() { "" } else { " " };

        fmt!(f, "INSERT " conflict space "INTO " table "(" columns ") VALUES(" values ");");
    }
}

impl ToSql for &stmt::Update {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let table = &self.table;
        let assignments = Comma(self.assignments.iter().map(Assign));
        let filter = And(self.filter.iter().map(Equal));

        fmt!(f, "UPDATE " table " SET " assignments " WHERE " filter ";");
    }
}

impl ToSql for &stmt::Delete {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let table = &self.table;
        let filter = And(self.filter.iter().map(Equal));

        fmt!(f, "DELETE FROM " table " WHERE " filter ";");
    }
}

impl ToSql for &stmt::Select {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let table = &self.table;
        let column = &self.filter.column;
        let value = Literal(Some(self.filter.value.as_str()));

        fmt!(f, "SELECT * FROM " table " WHERE " column "=" value);
    }
}

/// `column = 'value'` within a SET clause
struct Assign<'a>(&'a stmt::Assignment);

/// `column = 'value'` within a WHERE clause
struct Equal<'a>(&'a stmt::Condition);

impl ToSql for Assign<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let column = &self.0.column;
        let value = Literal(self.0.value.as_deref());

        fmt!(f, column " = " value);
    }
}

impl ToSql for Equal<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let column = &self.0.column;
        let value = Literal(Some(self.0.value.as_str()));

        fmt!(f, column " = " value);
    }
}
