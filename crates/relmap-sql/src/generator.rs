use crate::{
    serializer::quote,
    stmt::{Assignment, Condition, Delete, Insert, Select, Update},
    Mode, Serializer, Statement,
};

use relmap_core::{
    schema::{Cardinality, Relation},
    Error, Metadata, Record, Result,
};

type Op = fn(&Generator, &dyn Record, &mut String) -> Result<()>;

/// Generates the SQL statements that store, change, remove and load records.
///
/// INSERT, UPDATE and DELETE cascade through relationship fields: the
/// generated script also covers every related record, recursively, in
/// relationship declaration order. DELETE scripts remove related records
/// before the record owning them.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Generator {
    mode: Mode,
}

impl Generator {
    pub fn new(mode: Mode) -> Generator {
        Generator { mode }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
    }

    /// Generates the INSERT script for a record and its related records.
    pub fn generate_insert(&self, record: &dyn Record) -> Result<String> {
        self.generate(record, Generator::insert)
    }

    /// Generates the UPDATE script for a record and its related records.
    ///
    /// Every bound column is assigned; the primary key selects the row. Fails
    /// if a primary key value is null.
    pub fn generate_update(&self, record: &dyn Record) -> Result<String> {
        self.generate(record, Generator::update)
    }

    /// Generates the DELETE script for a record and its related records.
    /// Fails if a primary key value is null.
    pub fn generate_delete(&self, record: &dyn Record) -> Result<String> {
        self.generate(record, Generator::delete)
    }

    /// Generates the SELECT loading the records held by `relation` on
    /// `reference`.
    ///
    /// A one-to-one relationship reads its local column from the reference's
    /// columns and matches it against the target's referenced column. A
    /// one-to-many relationship reads the referenced column from the
    /// reference's primary key and matches it against the target's local
    /// column.
    pub fn generate_select(&self, reference: &dyn Record, relation: &Relation) -> Result<String> {
        let target = relation.target;
        target.require_constructor()?;

        let schema = target.schema();
        let metadata = Metadata::of(reference);

        let (column, value) = match relation.cardinality {
            Cardinality::One => {
                let columns = metadata.columns()?;
                let value = columns
                    .get(relation.local_column.as_str())
                    .cloned()
                    .flatten();
                (&relation.referenced_column, value)
            }
            Cardinality::Many => {
                let keys = metadata.primary_keys()?;
                let value = keys.get(relation.referenced_column.as_str()).cloned();
                (&relation.local_column, value)
            }
        };

        let Some(value) = value else {
            let source = match relation.cardinality {
                Cardinality::One => &relation.local_column,
                Cardinality::Many => &relation.referenced_column,
            };

            return Err(Error::metadata(format!(
                "relationship `{}::{}` references column `{source}`, which has no value",
                metadata.schema().name,
                relation.field
            )));
        };

        let stmt = Select {
            table: schema.table_name()?.to_string(),
            filter: Condition::new(column.as_str(), value),
        };

        let sql = Serializer::new().serialize(&stmt.into());
        tracing::trace!(sql = %sql, relation = %relation.field, "generated relationship select");
        Ok(sql)
    }

    /// Quotes a value for use in SQL text. Null stays null.
    pub fn as_sql(&self, value: Option<&str>) -> Option<String> {
        quote(value)
    }

    fn generate(&self, record: &dyn Record, op: Op) -> Result<String> {
        record.model().verify_graph()?;

        let mut sql = String::new();
        op(self, record, &mut sql)?;

        tracing::trace!(sql = %sql, "generated script");
        Ok(sql)
    }

    fn insert(&self, record: &dyn Record, dst: &mut String) -> Result<()> {
        let metadata = Metadata::of(record);

        let stmt = Insert {
            mode: self.mode,
            table: metadata.table_name()?.to_string(),
            values: assignments(&metadata)?,
        };

        push(stmt, dst);
        self.cascade(&metadata, dst, Generator::insert)
    }

    fn update(&self, record: &dyn Record, dst: &mut String) -> Result<()> {
        let metadata = Metadata::of(record);

        let stmt = Update {
            table: metadata.table_name()?.to_string(),
            assignments: assignments(&metadata)?,
            filter: filter(&metadata)?,
        };

        push(stmt, dst);
        self.cascade(&metadata, dst, Generator::update)
    }

    fn delete(&self, record: &dyn Record, dst: &mut String) -> Result<()> {
        let metadata = Metadata::of(record);

        let stmt = Delete {
            table: metadata.table_name()?.to_string(),
            filter: filter(&metadata)?,
        };

        // Related rows go first
        self.cascade(&metadata, dst, Generator::delete)?;
        push(stmt, dst);
        Ok(())
    }

    /// Applies `op` to every related record, then terminates the block with
    /// an extra `;`. Models without relationships get no terminator.
    fn cascade(&self, metadata: &Metadata<'_>, dst: &mut String, op: Op) -> Result<()> {
        let relations = &metadata.schema().relations;

        if relations.is_empty() {
            return Ok(());
        }

        for relation in relations {
            for related in metadata.related(relation)?.records() {
                op(self, related, dst)?;
            }
        }

        dst.push(';');
        Ok(())
    }
}

fn push(stmt: impl Into<Statement>, dst: &mut String) {
    Serializer::new().serialize_into(&stmt.into(), dst);
}

fn assignments(metadata: &Metadata<'_>) -> Result<Vec<Assignment>> {
    Ok(metadata
        .columns()?
        .into_iter()
        .map(|(column, value)| Assignment::new(column, value))
        .collect())
}

fn filter(metadata: &Metadata<'_>) -> Result<Vec<Condition>> {
    Ok(metadata
        .require_primary_keys()?
        .into_iter()
        .map(|(column, value)| Condition::new(column, value))
        .collect())
}
