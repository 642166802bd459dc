use crate::{Error, Result};

/// A dynamically typed scalar exchanged between records, the statement
/// generator and the database.
#[derive(Debug, Default, Clone, PartialEq)]
pub enum Value {
    /// Boolean value
    Bool(bool),

    /// 64-bit floating point number
    F64(f64),

    /// Signed 64-bit integer
    I64(i64),

    /// Null value
    #[default]
    Null,

    /// String value
    String(String),
}

impl Value {
    pub const fn null() -> Self {
        Self::Null
    }

    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::I64(v) => Some(*v),
            _ => None,
        }
    }

    /// Renders the value the way it is written into SQL text, before quoting.
    ///
    /// Null stays null. Booleans render as `1` and `0`.
    pub fn to_sql_string(&self) -> Option<String> {
        match self {
            Self::Null => None,
            Self::Bool(v) => Some(if *v { "1" } else { "0" }.to_string()),
            Self::F64(v) => Some(v.to_string()),
            Self::I64(v) => Some(v.to_string()),
            Self::String(v) => Some(v.clone()),
        }
    }

    pub(crate) fn kind_name(&self) -> &'static str {
        match self {
            Self::Bool(_) => "Bool",
            Self::F64(_) => "F64",
            Self::I64(_) => "I64",
            Self::Null => "Null",
            Self::String(_) => "String",
        }
    }
}

impl From<bool> for Value {
    fn from(src: bool) -> Self {
        Self::Bool(src)
    }
}

impl From<String> for Value {
    fn from(src: String) -> Self {
        Self::String(src)
    }
}

impl From<&String> for Value {
    fn from(src: &String) -> Self {
        Self::String(src.clone())
    }
}

impl From<&str> for Value {
    fn from(src: &str) -> Self {
        Self::String(src.to_string())
    }
}

impl From<f32> for Value {
    fn from(src: f32) -> Self {
        Self::F64(src.into())
    }
}

impl From<f64> for Value {
    fn from(src: f64) -> Self {
        Self::F64(src)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(src: Option<T>) -> Self {
        match src {
            Some(value) => value.into(),
            None => Self::Null,
        }
    }
}

macro_rules! impl_from_int {
    ( $($t:ty),+ ) => {
        $(
            impl From<$t> for Value {
                fn from(src: $t) -> Self {
                    Self::I64(src.into())
                }
            }
        )+
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

/// Converts a hydrated [`Value`] back into a field's type.
///
/// Textual numbers are parsed, so a value that was quoted on the way into the
/// database still loads into an integer field.
pub trait FromValue: Sized {
    fn from_value(value: Value) -> Result<Self>;
}

impl FromValue for Value {
    fn from_value(value: Value) -> Result<Self> {
        Ok(value)
    }
}

impl FromValue for String {
    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::String(v) => Ok(v),
            Value::I64(v) => Ok(v.to_string()),
            Value::F64(v) => Ok(v.to_string()),
            value => Err(Error::type_conversion(value, "String")),
        }
    }
}

impl FromValue for i64 {
    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::I64(v) => Ok(v),
            Value::Bool(v) => Ok(v.into()),
            Value::F64(v) if v.fract() == 0.0 => Ok(v as i64),
            Value::String(ref v) => match v.trim().parse() {
                Ok(parsed) => Ok(parsed),
                Err(_) => Err(Error::type_conversion(value, "i64")),
            },
            value => Err(Error::type_conversion(value, "i64")),
        }
    }
}

impl FromValue for f64 {
    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::F64(v) => Ok(v),
            Value::I64(v) => Ok(v as f64),
            Value::String(ref v) => match v.trim().parse() {
                Ok(parsed) => Ok(parsed),
                Err(_) => Err(Error::type_conversion(value, "f64")),
            },
            value => Err(Error::type_conversion(value, "f64")),
        }
    }
}

impl FromValue for bool {
    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Bool(v) => Ok(v),
            Value::I64(0) => Ok(false),
            Value::I64(1) => Ok(true),
            Value::String(ref v) => match v.as_str() {
                "1" | "true" => Ok(true),
                "0" | "false" => Ok(false),
                _ => Err(Error::type_conversion(value, "bool")),
            },
            value => Err(Error::type_conversion(value, "bool")),
        }
    }
}

impl<T: FromValue> FromValue for Option<T> {
    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Null => Ok(None),
            value => T::from_value(value).map(Some),
        }
    }
}

macro_rules! impl_from_value_int {
    ( $($t:ty),+ ) => {
        $(
            impl FromValue for $t {
                fn from_value(value: Value) -> Result<Self> {
                    let wide = match i64::from_value(value.clone()) {
                        Ok(wide) => wide,
                        Err(_) => return Err(Error::type_conversion(value, stringify!($t))),
                    };

                    <$t>::try_from(wide).map_err(|_| Error::type_conversion(value, stringify!($t)))
                }
            }
        )+
    };
}

impl_from_value_int!(i8, i16, i32, u8, u16, u32, u64, usize);
