mod rows;
pub use rows::{Row, Rows};

use crate::Result;

use std::{borrow::Cow, fmt::Debug};

/// A database the mapper can connect to.
pub trait Driver: Debug + Send + Sync + 'static {
    /// The URL identifying the database.
    fn url(&self) -> Cow<'_, str>;

    /// Opens a connection. Fails with a communication error when the
    /// database cannot be reached.
    fn connect(&self) -> Result<Box<dyn Connection>>;
}

/// An open connection to a database.
///
/// Statement failures, whether syntax errors or constraint violations, are
/// reported as invalid statement errors.
pub trait Connection: Debug + Send + 'static {
    /// Runs a query and returns its result rows.
    fn query(&mut self, sql: &str) -> Result<Rows>;

    /// Runs one or more data-modifying statements and returns the number of
    /// rows they changed.
    fn execute_update(&mut self, sql: &str) -> Result<u64>;

    /// Runs DDL or other initialization statements.
    fn execute(&mut self, sql: &str) -> Result<()>;
}
