pub mod accessor;
pub use accessor::{Accessors, Related};

pub mod driver;
pub use driver::{Connection, Driver};

mod error;
pub use error::Error;

pub mod metadata;
pub use metadata::Metadata;

mod model;
pub use model::{Model, Record};

pub mod schema;
pub use schema::ModelRef;

pub mod value;
pub use value::{FromValue, Value};

/// A Result type alias that uses relmap's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
