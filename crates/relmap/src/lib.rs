pub mod driver;

mod engine;

pub mod mapper;
pub use mapper::Mapper;

mod transaction;
pub use transaction::Transaction;

pub use relmap_core::{
    accessor::downcast, err, metadata, schema, Accessors, Error, FromValue, Metadata, Model, ModelRef,
    Record, Related, Result, Value,
};
pub use relmap_sql::{Generator, Mode};
