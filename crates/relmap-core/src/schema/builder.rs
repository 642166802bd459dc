use super::{Cardinality, Column, Model, ModelRef, Relation, Table};

/// Builds the metadata of a mapped type.
///
/// ```
/// # use relmap_core::schema;
/// # #[derive(Debug, Default)] struct Letter;
/// let model = schema::Model::builder::<Letter>()
///     .table("l_letters")
///     .key("l_lettername", "lettername")
///     .column("l_text", "text")
///     .build();
///
/// assert_eq!(model.table_name().unwrap(), "l_letters");
/// ```
#[derive(Debug)]
pub struct Builder {
    model: Model,
}

impl Builder {
    pub(super) fn new(name: &'static str) -> Builder {
        Builder {
            model: Model {
                name,
                table: None,
                columns: vec![],
                relations: vec![],
            },
        }
    }

    pub fn table(mut self, name: impl Into<String>) -> Self {
        self.model.table = Some(Table::new(name));
        self
    }

    /// Binds a primary key column to a field.
    pub fn key(mut self, column: impl Into<String>, field: impl Into<String>) -> Self {
        self.model.columns.push(Column::primary_key(column, field));
        self
    }

    /// Binds an ordinary column to a field.
    pub fn column(mut self, column: impl Into<String>, field: impl Into<String>) -> Self {
        self.model.columns.push(Column::new(column, field));
        self
    }

    /// Declares a field holding one related record. `local_column` is the
    /// owner's column referencing `referenced_column` on the target.
    pub fn has_one(
        self,
        field: impl Into<String>,
        target: ModelRef,
        local_column: impl Into<String>,
        referenced_column: impl Into<String>,
    ) -> Self {
        self.relation(Relation {
            field: field.into(),
            target,
            local_column: local_column.into(),
            referenced_column: referenced_column.into(),
            cardinality: Cardinality::One,
        })
    }

    /// Declares a field holding many related records. `local_column` is the
    /// target's column referencing `referenced_column` on the owner.
    pub fn has_many(
        self,
        field: impl Into<String>,
        target: ModelRef,
        local_column: impl Into<String>,
        referenced_column: impl Into<String>,
    ) -> Self {
        self.relation(Relation {
            field: field.into(),
            target,
            local_column: local_column.into(),
            referenced_column: referenced_column.into(),
            cardinality: Cardinality::Many,
        })
    }

    pub fn relation(mut self, relation: Relation) -> Self {
        self.model.relations.push(relation);
        self
    }

    pub fn build(self) -> Model {
        self.model
    }
}
