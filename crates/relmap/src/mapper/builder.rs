use super::Mapper;
use crate::{driver, driver::Driver, Generator, Mode, Result};

#[derive(Debug, Default)]
pub struct Builder {
    mode: Mode,
}

impl Builder {
    /// Sets how generated INSERT statements handle conflicts.
    pub fn mode(&mut self, mode: Mode) -> &mut Self {
        self.mode = mode;
        self
    }

    /// Builds a mapper for the database at `url`, choosing the driver from
    /// the URL scheme.
    ///
    /// Fails with an invalid parameter error if the URL is empty, malformed
    /// or names an unsupported database. The connection itself is opened on
    /// first use.
    pub fn connect(&mut self, url: &str) -> Result<Mapper> {
        Ok(Mapper::new(driver::connect(url)?, Generator::new(self.mode)))
    }

    pub fn build(&mut self, driver: impl Driver) -> Mapper {
        Mapper::new(Box::new(driver), Generator::new(self.mode))
    }
}
