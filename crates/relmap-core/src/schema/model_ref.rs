use super::Model as Schema;
use crate::{Model, Record};

use std::{any::TypeId, fmt};

/// A handle on a model type: its identity, its metadata and, when it has
/// one, its zero-argument construction path.
#[derive(Clone, Copy)]
pub struct ModelRef {
    type_id: TypeId,
    name: &'static str,
    schema: fn() -> Schema,
    has_accessor: fn(&str) -> bool,
    constructor: Option<fn() -> Box<dyn Record>>,
}

impl ModelRef {
    /// References a model that can be constructed with `Default`.
    pub fn of<T: Model + Default>() -> ModelRef {
        fn construct<T: Model + Default>() -> Box<dyn Record> {
            Box::new(T::default())
        }

        ModelRef {
            constructor: Some(construct::<T>),
            ..ModelRef::without_constructor::<T>()
        }
    }

    /// References a model that has no zero-argument construction path.
    ///
    /// Such a model can be inserted, updated and deleted, but never
    /// hydrated from query results.
    pub fn without_constructor<T: Model>() -> ModelRef {
        fn has_accessor<T: Model>(field: &str) -> bool {
            T::accessors().contains(field)
        }

        ModelRef {
            type_id: TypeId::of::<T>(),
            name: short_type_name::<T>(),
            schema: T::schema,
            has_accessor: has_accessor::<T>,
            constructor: None,
        }
    }

    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Derives the model's metadata.
    pub fn schema(&self) -> Schema {
        (self.schema)()
    }

    /// True if the model declares a getter or setter for `field`.
    pub fn has_accessor(&self, field: &str) -> bool {
        (self.has_accessor)(field)
    }

    pub fn is_constructible(&self) -> bool {
        self.constructor.is_some()
    }

    /// Fails unless the model can be instantiated.
    pub fn require_constructor(&self) -> crate::Result<()> {
        self.instantiate_with().map(|_| ())
    }

    /// Creates a new, empty instance of the model.
    pub fn instantiate(&self) -> crate::Result<Box<dyn Record>> {
        self.instantiate_with().map(|construct| construct())
    }

    fn instantiate_with(&self) -> crate::Result<fn() -> Box<dyn Record>> {
        self.constructor.ok_or_else(|| {
            crate::Error::metadata(format!(
                "`{}` has no zero-argument constructor",
                self.name
            ))
        })
    }
}

impl PartialEq for ModelRef {
    fn eq(&self, other: &Self) -> bool {
        self.type_id == other.type_id
    }
}

impl Eq for ModelRef {}

impl fmt::Debug for ModelRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModelRef")
            .field("name", &self.name)
            .field("constructible", &self.is_constructible())
            .finish()
    }
}

pub(crate) fn short_type_name<T: ?Sized>() -> &'static str {
    let name = std::any::type_name::<T>();
    match name.rfind("::") {
        Some(pos) if !name.contains('<') => &name[pos + 2..],
        _ => name,
    }
}
