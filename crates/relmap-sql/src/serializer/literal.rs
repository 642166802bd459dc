use super::{Formatter, ToSql};

/// A value written into SQL text. Null renders as the `NULL` keyword.
pub(super) struct Literal<'a>(pub(super) Option<&'a str>);

impl ToSql for Literal<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        match self.0 {
            Some(value) => push_quoted(value, f.dst),
            None => f.dst.push_str("NULL"),
        }
    }
}

/// Wraps a value in single quotes, doubling any embedded quote. Null stays
/// null.
pub fn quote(value: Option<&str>) -> Option<String> {
    value.map(|value| {
        let mut dst = String::with_capacity(value.len() + 2);
        push_quoted(value, &mut dst);
        dst
    })
}

fn push_quoted(value: &str, dst: &mut String) {
    dst.push('\'');
    for ch in value.chars() {
        if ch == '\'' {
            dst.push('\'');
        }
        dst.push(ch);
    }
    dst.push('\'');
}
