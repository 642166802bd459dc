use crate::{schema, Accessors, ModelRef, Related, Result, Value};

use std::{any::Any, fmt};

/// A type mapped to a database table.
///
/// Implementors describe their metadata with [`schema::Model::builder`] and
/// their fields with an [`Accessors`] table. Everything else, from statement
/// generation to hydration, works from these two descriptions.
///
/// Name the accessor table's type up front, so the closures know which model
/// they receive:
///
/// ```
/// use relmap_core::{schema, Accessors, Model, Record, Value};
///
/// #[derive(Debug, Default)]
/// struct Letter {
///     name: String,
///     price: i32,
/// }
///
/// impl Model for Letter {
///     fn schema() -> schema::Model {
///         schema::Model::builder::<Self>()
///             .table("l_letters")
///             .key("l_lettername", "name")
///             .column("l_price", "price")
///             .build()
///     }
///
///     fn accessors() -> Accessors<Self> {
///         Accessors::<Self>::new()
///             .field("name", |l| l.name.clone(), |l, v| l.name = v)
///             .field("price", |l| l.price, |l, v| l.price = v)
///     }
/// }
///
/// let mut letter = Letter::default();
/// letter.set("price", Value::I64(3)).unwrap();
/// assert_eq!(letter.get("PRICE").unwrap(), Value::I64(3));
/// ```
pub trait Model: fmt::Debug + Sized + 'static {
    /// Table, column and relationship metadata of the type.
    fn schema() -> schema::Model;

    /// Field accessors, looked up by field name.
    fn accessors() -> Accessors<Self>;
}

/// A type-erased [`Model`] instance.
///
/// Relationship fields hold records of other types; the generator and the
/// hydration engine walk them through this trait.
pub trait Record: fmt::Debug + 'static {
    /// The model type of this record.
    fn model(&self) -> ModelRef;

    /// Reads the value of a bound field.
    fn get(&self, field: &str) -> Result<Value>;

    /// Assigns the value of a bound field.
    fn set(&mut self, field: &str, value: Value) -> Result<()>;

    /// Reads the record(s) held by a relationship field.
    fn related(&self, field: &str) -> Result<Related<'_>>;

    /// Assigns the record(s) held by a relationship field.
    fn set_related(&mut self, field: &str, records: Vec<Box<dyn Record>>) -> Result<()>;

    fn into_any(self: Box<Self>) -> Box<dyn Any>;
}

impl<M: Model> Record for M {
    fn model(&self) -> ModelRef {
        ModelRef::without_constructor::<M>()
    }

    fn get(&self, field: &str) -> Result<Value> {
        M::accessors().get(self, field)
    }

    fn set(&mut self, field: &str, value: Value) -> Result<()> {
        M::accessors().set(self, field, value)
    }

    fn related(&self, field: &str) -> Result<Related<'_>> {
        M::accessors().related(self, field)
    }

    fn set_related(&mut self, field: &str, records: Vec<Box<dyn Record>>) -> Result<()> {
        M::accessors().set_related(self, field, records)
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }
}
