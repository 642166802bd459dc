//! Field accessors.
//!
//! Every mapped type declares a table of accessors, one per field, which the
//! rest of the crate uses to read and assign field values by name. Lookups
//! ignore ASCII case, so the column binding `lettername` resolves the
//! accessor declared as `letterName`.
//!
//! Reading a field without a getter is an error. Assigning a field without a
//! setter is a no-op, which lets hydration skip read-only fields.

use crate::{schema::model_ref::short_type_name, Error, FromValue, Model, Record, Result, Value};

use std::fmt;

/// The accessor table of a mapped type.
pub struct Accessors<M> {
    entries: Vec<Entry<M>>,
}

struct Entry<M> {
    field: &'static str,
    access: Access<M>,
}

type Getter<M> = Box<dyn Fn(&M) -> Value>;
type Setter<M> = Box<dyn Fn(&mut M, Value) -> Result<()>>;

enum Access<M> {
    Value {
        get: Option<Getter<M>>,
        set: Option<Setter<M>>,
    },
    Related(Box<dyn RelatedAccess<M>>),
}

/// The record(s) held by a relationship field.
#[derive(Debug)]
pub enum Related<'a> {
    /// A one-to-one field. `None` when no related record is attached.
    One(Option<&'a dyn Record>),

    /// A one-to-many field, in sequence order.
    Many(Vec<&'a dyn Record>),
}

impl<'a> Related<'a> {
    /// Iterate over the attached records.
    pub fn records(&self) -> impl Iterator<Item = &'a dyn Record> + '_ {
        let (one, many) = match self {
            Related::One(record) => (*record, &[][..]),
            Related::Many(records) => (None, &records[..]),
        };

        one.into_iter().chain(many.iter().copied())
    }
}

trait RelatedAccess<M> {
    fn get<'a>(&self, model: &'a M) -> Related<'a>;

    fn set(&self, model: &mut M, records: Vec<Box<dyn Record>>) -> Result<()>;
}

struct HasOne<M, T> {
    get: fn(&M) -> Option<&T>,
    set: fn(&mut M, T),
}

struct HasMany<M, T> {
    get: fn(&M) -> &Vec<T>,
    set: fn(&mut M, Vec<T>),
}

impl<M: 'static> Accessors<M> {
    pub fn new() -> Self {
        Accessors { entries: vec![] }
    }

    /// Declares a field with both a getter and a setter.
    pub fn field<V>(self, field: &'static str, get: fn(&M) -> V, set: fn(&mut M, V)) -> Self
    where
        V: Into<Value> + FromValue + 'static,
    {
        self.push(
            field,
            Access::Value {
                get: Some(getter(get)),
                set: Some(setter(set)),
            },
        )
    }

    /// Declares a read-only field.
    pub fn getter<V>(self, field: &'static str, get: fn(&M) -> V) -> Self
    where
        V: Into<Value> + 'static,
    {
        self.push(
            field,
            Access::Value {
                get: Some(getter(get)),
                set: None,
            },
        )
    }

    /// Declares a write-only field.
    pub fn setter<V>(self, field: &'static str, set: fn(&mut M, V)) -> Self
    where
        V: FromValue + 'static,
    {
        self.push(
            field,
            Access::Value {
                get: None,
                set: Some(setter(set)),
            },
        )
    }

    /// Declares a field holding one related record.
    pub fn has_one<T: Model>(
        self,
        field: &'static str,
        get: fn(&M) -> Option<&T>,
        set: fn(&mut M, T),
    ) -> Self {
        self.push(field, Access::Related(Box::new(HasOne { get, set })))
    }

    /// Declares a field holding a sequence of related records.
    pub fn has_many<T: Model>(
        self,
        field: &'static str,
        get: fn(&M) -> &Vec<T>,
        set: fn(&mut M, Vec<T>),
    ) -> Self {
        self.push(field, Access::Related(Box::new(HasMany { get, set })))
    }

    fn push(mut self, field: &'static str, access: Access<M>) -> Self {
        self.entries.push(Entry { field, access });
        self
    }

    fn find(&self, field: &str) -> Option<&Entry<M>> {
        self.entries
            .iter()
            .find(|entry| entry.field.eq_ignore_ascii_case(field))
    }

    /// True if `field` has a getter, a setter or both.
    pub fn contains(&self, field: &str) -> bool {
        matches!(
            self.find(field).map(|entry| &entry.access),
            Some(Access::Value { .. })
        )
    }

    /// Reads a field's value.
    pub fn get(&self, model: &M, field: &str) -> Result<Value> {
        match self.find(field).map(|entry| &entry.access) {
            Some(Access::Value { get: Some(get), .. }) => Ok(get(model)),
            _ => Err(Error::metadata(format!(
                "no getter found for field `{}::{field}`",
                short_type_name::<M>()
            ))),
        }
    }

    /// Assigns a field's value. Does nothing when the field has no setter.
    pub fn set(&self, model: &mut M, field: &str, value: Value) -> Result<()> {
        match self.find(field).map(|entry| &entry.access) {
            Some(Access::Value { set: Some(set), .. }) => set(model, value),
            _ => {
                tracing::warn!(
                    model = short_type_name::<M>(),
                    field,
                    "no setter found; value ignored"
                );
                Ok(())
            }
        }
    }

    /// Reads the record(s) held by a relationship field.
    pub fn related<'a>(&self, model: &'a M, field: &str) -> Result<Related<'a>> {
        match self.find(field).map(|entry| &entry.access) {
            Some(Access::Related(access)) => Ok(access.get(model)),
            _ => Err(Error::metadata(format!(
                "no getter found for relationship `{}::{field}`",
                short_type_name::<M>()
            ))),
        }
    }

    /// Assigns the record(s) held by a relationship field.
    pub fn set_related(
        &self,
        model: &mut M,
        field: &str,
        records: Vec<Box<dyn Record>>,
    ) -> Result<()> {
        match self.find(field).map(|entry| &entry.access) {
            Some(Access::Related(access)) => access.set(model, records),
            _ => {
                tracing::warn!(
                    model = short_type_name::<M>(),
                    field,
                    "no setter found; related records ignored"
                );
                Ok(())
            }
        }
    }
}

impl<M: 'static> Default for Accessors<M> {
    fn default() -> Self {
        Accessors::new()
    }
}

impl<M> fmt::Debug for Accessors<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.entries.iter().map(|entry| entry.field))
            .finish()
    }
}

fn getter<M: 'static, V: Into<Value> + 'static>(get: fn(&M) -> V) -> Getter<M> {
    Box::new(move |model: &M| get(model).into())
}

fn setter<M: 'static, V: FromValue + 'static>(set: fn(&mut M, V)) -> Setter<M> {
    Box::new(move |model: &mut M, value: Value| {
        set(model, V::from_value(value)?);
        Ok(())
    })
}

impl<M: 'static, T: Model> RelatedAccess<M> for HasOne<M, T> {
    fn get<'a>(&self, model: &'a M) -> Related<'a> {
        Related::One((self.get)(model).map(|record| record as &dyn Record))
    }

    fn set(&self, model: &mut M, records: Vec<Box<dyn Record>>) -> Result<()> {
        let count = records.len();
        let mut records = records.into_iter();

        match (records.next(), records.next()) {
            (Some(record), None) => {
                (self.set)(model, downcast(record)?);
                Ok(())
            }
            _ => Err(Error::metadata(format!(
                "a one-to-one relationship to `{}` takes exactly one record, got {count}",
                short_type_name::<T>()
            ))),
        }
    }
}

impl<M: 'static, T: Model> RelatedAccess<M> for HasMany<M, T> {
    fn get<'a>(&self, model: &'a M) -> Related<'a> {
        Related::Many(
            (self.get)(model)
                .iter()
                .map(|record| record as &dyn Record)
                .collect(),
        )
    }

    fn set(&self, model: &mut M, records: Vec<Box<dyn Record>>) -> Result<()> {
        let records = records
            .into_iter()
            .map(downcast)
            .collect::<Result<Vec<T>>>()?;
        (self.set)(model, records);
        Ok(())
    }
}

/// Recovers the concrete type of a type-erased record.
pub fn downcast<T: Model>(record: Box<dyn Record>) -> Result<T> {
    let found = record.model().name();

    match record.into_any().downcast::<T>() {
        Ok(record) => Ok(*record),
        Err(_) => Err(Error::metadata(format!(
            "expected a `{}` record, found `{found}`",
            short_type_name::<T>()
        ))),
    }
}
