mod value;
pub(crate) use value::Value;

use relmap_core::{
    driver::{self, Driver, Rows},
    Error, Result,
};
use rusqlite::Connection as RusqliteConnection;
use std::{
    borrow::Cow,
    path::{Path, PathBuf},
};
use url::Url;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sqlite {
    File(PathBuf),
    InMemory,
}

impl Sqlite {
    /// Create a new SQLite driver with an arbitrary connection URL.
    ///
    /// The URL has the `sqlite` scheme and names either a file
    /// (`sqlite:/path/to/db`) or an in-memory database (`sqlite::memory:`).
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let url_str = url.into();

        if url_str.trim().is_empty() {
            return Err(Error::invalid_param("connection URL may not be empty"));
        }

        let url = Url::parse(&url_str).map_err(|err| {
            Error::driver_operation_failed(err).context(Error::invalid_param(format!(
                "connection URL `{url_str}` could not be parsed"
            )))
        })?;

        if url.scheme() != "sqlite" {
            return Err(Error::invalid_param(format!(
                "connection URL does not have a `sqlite` scheme; url={url_str}"
            )));
        }

        if url.path() == ":memory:" {
            Ok(Self::InMemory)
        } else if url.path().is_empty() {
            Err(Error::invalid_param(format!(
                "connection URL names no database; url={url_str}"
            )))
        } else {
            Ok(Self::File(PathBuf::from(url.path())))
        }
    }

    /// Create an in-memory SQLite database
    pub fn in_memory() -> Self {
        Self::InMemory
    }

    /// Open a SQLite database at the specified file path
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        Self::File(path.as_ref().to_path_buf())
    }
}

impl Driver for Sqlite {
    fn url(&self) -> Cow<'_, str> {
        match self {
            Sqlite::InMemory => Cow::Borrowed("sqlite::memory:"),
            Sqlite::File(path) => Cow::Owned(format!("sqlite:{}", path.display())),
        }
    }

    fn connect(&self) -> Result<Box<dyn driver::Connection>> {
        tracing::debug!(url = %self.url(), "connecting");

        let connection = match self {
            Sqlite::File(path) => Connection::open(path),
            Sqlite::InMemory => Connection::in_memory(),
        };

        match connection {
            Ok(connection) => Ok(Box::new(connection)),
            Err(err) => Err(err.context(Error::communication(format!(
                "could not connect to {}",
                self.url()
            )))),
        }
    }
}

#[derive(Debug)]
pub struct Connection {
    connection: RusqliteConnection,
}

impl Connection {
    pub fn in_memory() -> Result<Self> {
        let connection =
            RusqliteConnection::open_in_memory().map_err(Error::driver_operation_failed)?;

        Ok(Self { connection })
    }

    /// Opens an existing database file, or creates it.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection =
            RusqliteConnection::open(path).map_err(Error::driver_operation_failed)?;

        Ok(Self { connection })
    }

    fn total_changes(&self) -> Result<i64> {
        self.connection
            .query_row("SELECT total_changes()", [], |row| row.get(0))
            .map_err(Error::driver_operation_failed)
    }
}

impl driver::Connection for Connection {
    fn query(&mut self, sql: &str) -> Result<Rows> {
        let mut stmt = self.connection.prepare(sql).map_err(rejected)?;

        let columns: Vec<String> = stmt
            .column_names()
            .into_iter()
            .map(String::from)
            .collect();
        let width = columns.len();

        let mut ret = Rows::new(columns);
        let mut rows = stmt.query([]).map_err(rejected)?;

        while let Some(row) = rows.next().map_err(rejected)? {
            let items = (0..width)
                .map(|index| Value::from_sql(row, index).map(Value::into_inner))
                .collect::<Result<Vec<_>>>()?;

            ret.push(items);
        }

        Ok(ret)
    }

    fn execute_update(&mut self, sql: &str) -> Result<u64> {
        let before = self.total_changes()?;
        self.connection.execute_batch(sql).map_err(rejected)?;
        let after = self.total_changes()?;

        Ok(u64::try_from(after - before).unwrap_or_default())
    }

    fn execute(&mut self, sql: &str) -> Result<()> {
        self.connection.execute_batch(sql).map_err(rejected)
    }
}

fn rejected(err: rusqlite::Error) -> Error {
    Error::driver_operation_failed(err).context(Error::invalid_statement(
        "the database rejected the generated SQL statement",
    ))
}
