pub use exec_log::ExecLog;


mod logging_driver;
pub use logging_driver::LoggingDriver;

use relmap::{Mapper, Mode};
use relmap_driver_sqlite::Sqlite;

/// Installs a log subscriber controlled by `RUST_LOG`. Safe to call from
/// every test.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// A mapper over a fresh in-memory database holding the fixture tables.
pub fn setup() -> (Mapper, ExecLog) {
    setup_with(Mode::Default)
}

pub fn setup_with(mode: Mode) -> (Mapper, ExecLog) {
    init_tracing();

    let driver = LoggingDriver::new(Box::new(Sqlite::in_memory()));
    let log = driver.exec_log();

    let mut mapper = Mapper::builder().mode(mode).build(driver);
    mapper
        .initialize(fixtures::SCHEMA)
        .expect("failed to create fixture tables");

    log.clear();
    (mapper, log)
}
