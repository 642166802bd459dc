//! Derives relational metadata from a record instance.

use crate::{
    schema::{self, Cardinality, Relation},
    Error, Record, Related, Result,
};

use indexmap::IndexMap;

/// The metadata of a record paired with the record itself, so column values
/// can be read alongside their bindings.
#[derive(Debug)]
pub struct Metadata<'a> {
    record: &'a dyn Record,
    schema: schema::Model,
}

impl<'a> Metadata<'a> {
    pub fn of(record: &'a dyn Record) -> Metadata<'a> {
        Metadata {
            record,
            schema: record.model().schema(),
        }
    }

    pub fn schema(&self) -> &schema::Model {
        &self.schema
    }

    pub fn table_name(&self) -> Result<&str> {
        self.schema.table_name()
    }

    /// Every bound column with the string form of its value, in declaration
    /// order. Null values stay `None`.
    pub fn columns(&self) -> Result<IndexMap<&str, Option<String>>> {
        self.schema
            .columns
            .iter()
            .map(|column| {
                let value = self.record.get(&column.field)?;
                Ok((column.name.as_str(), value.to_sql_string()))
            })
            .collect()
    }

    /// The primary key columns with their values. Fails if any of them is
    /// null.
    pub fn primary_keys(&self) -> Result<IndexMap<&str, String>> {
        self.schema
            .primary_key()
            .map(|column| {
                match self.record.get(&column.field)?.to_sql_string() {
                    Some(value) => Ok((column.name.as_str(), value)),
                    None => Err(Error::metadata(format!(
                        "primary key `{}.{}` may not be null",
                        self.schema.name, column.name
                    ))),
                }
            })
            .collect()
    }

    /// Like [`Metadata::primary_keys`], but also fails when the model binds
    /// no primary key at all.
    pub fn require_primary_keys(&self) -> Result<IndexMap<&str, String>> {
        if !self.schema.has_primary_key() {
            return Err(Error::metadata(format!(
                "`{}` declares no primary key",
                self.schema.name
            )));
        }

        self.primary_keys()
    }

    pub fn one_to_one(&self) -> impl Iterator<Item = &Relation> + '_ {
        self.schema.relations(Cardinality::One)
    }

    pub fn one_to_many(&self) -> impl Iterator<Item = &Relation> + '_ {
        self.schema.relations(Cardinality::Many)
    }

    /// The record(s) held by a relationship field.
    pub fn related(&self, relation: &Relation) -> Result<Related<'a>> {
        let related = self.record.related(&relation.field)?;

        match (&related, relation.cardinality) {
            (Related::One(_), Cardinality::One) | (Related::Many(_), Cardinality::Many) => {
                Ok(related)
            }
            _ => Err(Error::metadata(format!(
                "relationship `{}::{}` is declared {:?} but its accessor disagrees",
                self.schema.name, relation.field, relation.cardinality
            ))),
        }
    }
}

/// Finds the column binding, and so the field, for a result column.
pub fn field_for_column<'s>(schema: &'s schema::Model, column: &str) -> Option<&'s schema::Column> {
    schema.column(column)
}
