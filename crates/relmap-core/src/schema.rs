mod builder;
pub use builder::Builder;

mod column;
pub use column::Column;

mod model;
pub use model::Model;

pub(crate) mod model_ref;
pub use model_ref::ModelRef;

mod relation;
pub use relation::{Cardinality, Relation};

mod table;
pub use table::Table;

mod verify;
