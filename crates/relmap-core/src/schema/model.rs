use super::{Builder, Cardinality, Column, Relation, Table};
use crate::{Error, Result};

/// The resolved metadata of a mapped type.
#[derive(Debug, Clone)]
pub struct Model {
    /// Name of the Rust type, used in error messages
    pub name: &'static str,

    /// The table the model is stored in, if one is declared
    pub table: Option<Table>,

    /// Column bindings, in field declaration order
    pub columns: Vec<Column>,

    /// Relationship fields, in field declaration order
    pub relations: Vec<Relation>,
}

impl Model {
    pub fn builder<T: ?Sized>() -> Builder {
        Builder::new(super::model_ref::short_type_name::<T>())
    }

    /// Returns the name of the model's table.
    pub fn table_name(&self) -> Result<&str> {
        match &self.table {
            Some(table) => Ok(&table.name),
            None => Err(Error::metadata(format!(
                "`{}` does not declare a table",
                self.name
            ))),
        }
    }

    /// Finds the column binding with the given column name, ignoring ASCII
    /// case.
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns
            .iter()
            .find(|column| column.name.eq_ignore_ascii_case(name))
    }

    /// Iterate over the columns forming the primary key.
    pub fn primary_key(&self) -> impl Iterator<Item = &Column> + '_ {
        self.columns.iter().filter(|column| column.primary_key)
    }

    pub fn has_primary_key(&self) -> bool {
        self.primary_key().next().is_some()
    }

    /// Iterate over the relationship fields of the given cardinality.
    pub fn relations(&self, cardinality: Cardinality) -> impl Iterator<Item = &Relation> + '_ {
        self.relations
            .iter()
            .filter(move |relation| relation.cardinality == cardinality)
    }
}
