use crate::ExecLog;
use relmap_core::{
    driver::{Connection, Driver, Rows},
    Result,
};
use std::{
    borrow::Cow,
    sync::{Arc, Mutex},
};

/// Wraps a driver and records every statement sent through its connections.
#[derive(Debug)]
pub struct LoggingDriver {
    inner: Box<dyn Driver>,

    /// Statements executed through this driver, in order
    log: Arc<Mutex<Vec<String>>>,
}

impl LoggingDriver {
    pub fn new(driver: Box<dyn Driver>) -> Self {
        Self {
            inner: driver,
            log: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Get a handle to the statement log
    pub fn exec_log(&self) -> ExecLog {
        ExecLog::new(self.log.clone())
    }
}

impl Driver for LoggingDriver {
    fn url(&self) -> Cow<'_, str> {
        self.inner.url()
    }

    fn connect(&self) -> Result<Box<dyn Connection>> {
        Ok(Box::new(LoggingConnection {
            inner: self.inner.connect()?,
            log: self.log.clone(),
        }))
    }
}

#[derive(Debug)]
struct LoggingConnection {
    /// The connection that actually runs the statements
    inner: Box<dyn Connection>,

    log: Arc<Mutex<Vec<String>>>,
}

impl LoggingConnection {
    fn record(&self, sql: &str) {
        self.log
            .lock()
            .expect("Failed to acquire exec log lock")
            .push(sql.to_string());
    }
}

impl Connection for LoggingConnection {
    fn query(&mut self, sql: &str) -> Result<Rows> {
        self.record(sql);
        self.inner.query(sql)
    }

    fn execute_update(&mut self, sql: &str) -> Result<u64> {
        self.record(sql);
        self.inner.execute_update(sql)
    }

    fn execute(&mut self, sql: &str) -> Result<()> {
        self.record(sql);
        self.inner.execute(sql)
    }
}
