mod builder;
pub use builder::Builder;

use crate::{
    driver::{Connection, Driver},
    engine, Error, Generator, Mode, Model, ModelRef, Record, Result, Transaction, Value,
};

/// Stores records in, and loads them from, a relational database.
///
/// A mapper owns one lazily opened connection. Every operation runs to
/// completion on the calling thread.
#[derive(Debug)]
pub struct Mapper {
    driver: Box<dyn Driver>,

    /// Opened on first use
    connection: Option<Box<dyn Connection>>,

    generator: Generator,

    url: String,
}

impl Mapper {
    pub fn builder() -> Builder {
        Builder::default()
    }

    pub(crate) fn new(driver: Box<dyn Driver>, generator: Generator) -> Mapper {
        Mapper {
            url: driver.url().into_owned(),
            driver,
            connection: None,
            generator,
        }
    }

    /// The URL of the database this mapper talks to.
    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn mode(&self) -> Mode {
        self.generator.mode()
    }

    pub fn set_mode(&mut self, mode: Mode) {
        self.generator.set_mode(mode);
    }

    pub fn generator(&self) -> &Generator {
        &self.generator
    }

    pub fn set_generator(&mut self, generator: Generator) {
        self.generator = generator;
    }

    /// Inserts a record and its related records. Returns the number of rows
    /// written.
    pub fn insert(&mut self, record: &dyn Record) -> Result<u64> {
        let sql = self.generator.generate_insert(record)?;
        self.execute_update(&sql)
    }

    /// Updates a record and its related records, matching rows by primary
    /// key.
    pub fn update(&mut self, record: &dyn Record) -> Result<u64> {
        let sql = self.generator.generate_update(record)?;
        self.execute_update(&sql)
    }

    /// Deletes a record and its related records.
    pub fn delete(&mut self, record: &dyn Record) -> Result<u64> {
        let sql = self.generator.generate_delete(record)?;
        self.execute_update(&sql)
    }

    /// Inserts every record within a single transaction.
    pub fn insert_all(&mut self, records: &[&dyn Record]) -> Result<u64> {
        let mut transaction = self.start_transaction();
        for record in records {
            transaction.insert(*record)?;
        }
        self.save_changes(transaction)
    }

    /// Updates every record within a single transaction.
    pub fn update_all(&mut self, records: &[&dyn Record]) -> Result<u64> {
        let mut transaction = self.start_transaction();
        for record in records {
            transaction.update(*record)?;
        }
        self.save_changes(transaction)
    }

    /// Deletes every record within a single transaction.
    pub fn delete_all(&mut self, records: &[&dyn Record]) -> Result<u64> {
        let mut transaction = self.start_transaction();
        for record in records {
            transaction.delete(*record)?;
        }
        self.save_changes(transaction)
    }

    /// Runs a query and builds one `T` per result row, resolving every
    /// relationship of each record with further queries.
    ///
    /// Result columns without a binding on `T` are ignored.
    pub fn query_list<T: Model + Default>(&mut self, sql: &str) -> Result<Vec<T>> {
        self.query_records(sql, ModelRef::of::<T>())?
            .into_iter()
            .map(crate::downcast)
            .collect()
    }

    /// Like [`Mapper::query_list`], for a model only known at runtime.
    pub fn query_records(&mut self, sql: &str, target: ModelRef) -> Result<Vec<Box<dyn Record>>> {
        let generator = self.generator;
        let connection = self.connection()?;
        engine::query_list(&mut **connection, &generator, sql, target)
    }

    /// Runs a query and returns the first column of its first row.
    pub fn query_scalar(&mut self, sql: &str) -> Result<Value> {
        tracing::debug!(sql, "query_scalar");
        let rows = self.connection()?.query(sql)?;

        match rows.get(0).and_then(|row| row.value(0)) {
            Some(value) => Ok(value.clone()),
            None => Err(Error::record_not_found(sql)
                .context(Error::metadata("scalar query returned no row"))),
        }
    }

    /// Runs data-modifying statement text and returns the number of rows it
    /// changed.
    pub fn execute_update(&mut self, sql: &str) -> Result<u64> {
        tracing::debug!(sql, "execute_update");
        self.connection()?.execute_update(sql)
    }

    /// Runs DDL or other initialization statements.
    pub fn initialize(&mut self, sql: &str) -> Result<()> {
        tracing::debug!(sql, "initialize");
        self.connection()?.execute(sql)
    }

    /// Starts buffering statements. Nothing reaches the database until the
    /// transaction is passed to [`Mapper::save_changes`].
    ///
    /// The transaction keeps a copy of the current generator. Calling
    /// [`Mapper::set_mode`] afterwards does not change the statements it
    /// generates.
    pub fn start_transaction(&self) -> Transaction {
        Transaction::new(self.generator)
    }

    /// Runs the buffered statements as one database transaction.
    ///
    /// If any statement fails, the transaction is rolled back and the error
    /// is returned.
    pub fn save_changes(&mut self, transaction: Transaction) -> Result<u64> {
        if transaction.is_empty() {
            return Ok(0);
        }

        let script = transaction.into_script();

        match self.execute_update(&script) {
            Ok(count) => Ok(count),
            Err(err) => {
                self.rollback();
                Err(err)
            }
        }
    }

    fn rollback(&mut self) {
        let Ok(connection) = self.connection() else {
            return;
        };

        // Fails when the database already ended the transaction
        if let Err(err) = connection.execute("ROLLBACK") {
            tracing::debug!(%err, "rollback skipped");
        }
    }

    fn connection(&mut self) -> Result<&mut Box<dyn Connection>> {
        let connection = match self.connection.take() {
            Some(connection) => connection,
            None => self.driver.connect()?,
        };

        Ok(self.connection.insert(connection))
    }
}
