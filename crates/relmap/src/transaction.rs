use crate::{Generator, Record, Result};

/// Statements buffered for a single database transaction.
///
/// Created by [`Mapper::start_transaction`](crate::Mapper::start_transaction)
/// and executed by [`Mapper::save_changes`](crate::Mapper::save_changes).
/// Dropping a transaction discards its statements without touching the
/// database.
#[derive(Debug, Clone)]
#[must_use = "a transaction does nothing until passed to `Mapper::save_changes`"]
pub struct Transaction {
    generator: Generator,

    /// Pending statement text
    sql: String,
}

impl Transaction {
    pub(crate) fn new(generator: Generator) -> Transaction {
        Transaction {
            generator,
            sql: String::new(),
        }
    }

    /// Buffers the INSERT script of a record.
    pub fn insert(&mut self, record: &dyn Record) -> Result<&mut Self> {
        let sql = self.generator.generate_insert(record)?;
        Ok(self.push_sql(&sql))
    }

    /// Buffers the UPDATE script of a record.
    pub fn update(&mut self, record: &dyn Record) -> Result<&mut Self> {
        let sql = self.generator.generate_update(record)?;
        Ok(self.push_sql(&sql))
    }

    /// Buffers the DELETE script of a record.
    pub fn delete(&mut self, record: &dyn Record) -> Result<&mut Self> {
        let sql = self.generator.generate_delete(record)?;
        Ok(self.push_sql(&sql))
    }

    /// Buffers arbitrary statement text. A missing `;` terminator is added.
    pub fn push_sql(&mut self, sql: &str) -> &mut Self {
        let sql = sql.trim();

        if !sql.is_empty() {
            self.sql.push_str(sql);
            if !sql.ends_with(';') {
                self.sql.push(';');
            }
        }

        self
    }

    /// The buffered statement text.
    pub fn sql(&self) -> &str {
        &self.sql
    }

    pub fn is_empty(&self) -> bool {
        self.sql.is_empty()
    }

    pub(crate) fn into_script(self) -> String {
        format!("BEGIN TRANSACTION;{}END TRANSACTION;", self.sql)
    }
}
