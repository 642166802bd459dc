/// Binds a model field to a relational column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    /// Name of the column in the database
    pub name: String,

    /// Name of the field holding the column's value
    pub field: String,

    /// True if the column is part of the primary key
    pub primary_key: bool,
}

impl Column {
    pub fn new(name: impl Into<String>, field: impl Into<String>) -> Column {
        Column {
            name: name.into(),
            field: field.into(),
            primary_key: false,
        }
    }

    pub fn primary_key(name: impl Into<String>, field: impl Into<String>) -> Column {
        Column {
            primary_key: true,
            ..Column::new(name, field)
        }
    }
}
