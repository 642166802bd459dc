use crate::{Error, Result};

pub use relmap_core::driver::{Connection, Driver, Row, Rows};

use url::Url;

/// Selects a built-in driver from a connection URL.
pub(crate) fn connect(url: &str) -> Result<Box<dyn Driver>> {
    if url.trim().is_empty() {
        return Err(Error::invalid_param("connection URL may not be empty"));
    }

    let parsed = Url::parse(url).map_err(|err| {
        Error::driver_operation_failed(err).context(Error::invalid_param(format!(
            "connection URL `{url}` could not be parsed"
        )))
    })?;

    match parsed.scheme() {
        "sqlite" => connect_sqlite(url),
        scheme => Err(Error::invalid_param(format!(
            "unsupported database; scheme={scheme}; url={url}"
        ))),
    }
}

#[cfg(feature = "sqlite")]
fn connect_sqlite(url: &str) -> Result<Box<dyn Driver>> {
    Ok(Box::new(relmap_driver_sqlite::Sqlite::new(url)?))
}

#[cfg(not(feature = "sqlite"))]
fn connect_sqlite(_url: &str) -> Result<Box<dyn Driver>> {
    Err(Error::invalid_param("`sqlite` feature not enabled"))
}
