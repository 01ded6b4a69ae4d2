//! The closed set of value kinds a parameter can bind.
//!
//! Every bindable field is one of five kinds. Conversion from a raw token is a
//! single `match` on [`ValueKind`]; storing into a concrete Rust field goes
//! through [`FieldValue`].

use std::fmt;

use serde::Serialize;

use crate::ValueError;

/// Kind of value a parameter binds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ValueKind {
    /// Presence-only flag.
    Bool,
    /// Signed integer.
    Int,
    /// Free text.
    String,
    /// Delimited list of integers.
    IntArray,
    /// Delimited list of strings.
    StringArray,
}

impl ValueKind {
    /// Whether values of this kind are split on a delimiter.
    #[must_use]
    pub const fn is_array(self) -> bool {
        matches!(self, Self::IntArray | Self::StringArray)
    }

    /// Name shown in help output.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::Int => "int",
            Self::String => "string",
            Self::IntArray => "int-array",
            Self::StringArray => "string-array",
        }
    }

    /// Convert `raw` into a value of this kind.
    ///
    /// Array kinds split `raw` on `delimiter`; a missing delimiter treats the
    /// whole token as a single element.
    ///
    /// # Errors
    ///
    /// Returns [`ValueError`] when `raw`, or any array element, does not
    /// convert.
    ///
    /// # Examples
    ///
    /// ```
    /// use yagclif::{Value, ValueKind};
    /// let v = ValueKind::IntArray.parse("42,43", Some(",")).unwrap();
    /// assert_eq!(v, Value::IntArray(vec![42, 43]));
    /// assert!(ValueKind::IntArray.parse("42,x", Some(",")).is_err());
    /// ```
    pub fn parse(self, raw: &str, delimiter: Option<&str>) -> Result<Value, ValueError> {
        match self {
            Self::Bool => raw
                .parse()
                .map(Value::Bool)
                .map_err(|_| ValueError::InvalidBool {
                    token: raw.to_owned(),
                }),
            Self::Int => parse_int(raw).map(Value::Int),
            Self::String => Ok(Value::String(raw.to_owned())),
            Self::IntArray => split(raw, delimiter)
                .map(parse_int)
                .collect::<Result<Vec<_>, _>>()
                .map(Value::IntArray),
            Self::StringArray => Ok(Value::StringArray(
                split(raw, delimiter).map(str::to_owned).collect(),
            )),
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn parse_int(raw: &str) -> Result<i64, ValueError> {
    raw.parse().map_err(|source| ValueError::InvalidInt {
        token: raw.to_owned(),
        source,
    })
}

fn split<'a>(raw: &'a str, delimiter: Option<&'a str>) -> Box<dyn Iterator<Item = &'a str> + 'a> {
    match delimiter {
        Some(delim) if !delim.is_empty() => Box::new(raw.split(delim)),
        _ => Box::new(std::iter::once(raw)),
    }
}

/// A converted value ready to be stored into a schema field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// See [`ValueKind::Bool`].
    Bool(bool),
    /// See [`ValueKind::Int`].
    Int(i64),
    /// See [`ValueKind::String`].
    String(String),
    /// See [`ValueKind::IntArray`].
    IntArray(Vec<i64>),
    /// See [`ValueKind::StringArray`].
    StringArray(Vec<String>),
}

impl Value {
    /// The kind of this value.
    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::Bool(_) => ValueKind::Bool,
            Self::Int(_) => ValueKind::Int,
            Self::String(_) => ValueKind::String,
            Self::IntArray(_) => ValueKind::IntArray,
            Self::StringArray(_) => ValueKind::StringArray,
        }
    }
}

/// Rust types that can be stored into from a [`Value`].
///
/// Implemented for `bool`, `String`, the primitive integers, and `Vec`s of
/// `String` or integers. `#[derive(Schema)]` relies on [`FieldValue::KIND`]
/// to describe value fields, so unsupported types fail to compile.
pub trait FieldValue: Sized {
    /// Kind of value this type stores.
    const KIND: ValueKind;

    /// Convert `value` into `Self`.
    ///
    /// # Errors
    ///
    /// Returns [`ValueError::KindMismatch`] for a value of another kind and
    /// [`ValueError::OutOfRange`] when an integer does not fit.
    fn from_value(value: Value) -> Result<Self, ValueError>;
}

const fn mismatch(expected: ValueKind, found: &Value) -> ValueError {
    ValueError::KindMismatch {
        expected,
        found: found.kind(),
    }
}

impl FieldValue for bool {
    const KIND: ValueKind = ValueKind::Bool;

    fn from_value(value: Value) -> Result<Self, ValueError> {
        match value {
            Value::Bool(flag) => Ok(flag),
            other => Err(mismatch(Self::KIND, &other)),
        }
    }
}

impl FieldValue for String {
    const KIND: ValueKind = ValueKind::String;

    fn from_value(value: Value) -> Result<Self, ValueError> {
        match value {
            Value::String(text) => Ok(text),
            other => Err(mismatch(Self::KIND, &other)),
        }
    }
}

impl FieldValue for Vec<String> {
    const KIND: ValueKind = ValueKind::StringArray;

    fn from_value(value: Value) -> Result<Self, ValueError> {
        match value {
            Value::StringArray(items) => Ok(items),
            other => Err(mismatch(Self::KIND, &other)),
        }
    }
}

macro_rules! int_field_value {
    ($($ty:ty),* $(,)?) => {$(
        impl FieldValue for $ty {
            const KIND: ValueKind = ValueKind::Int;

            fn from_value(value: Value) -> Result<Self, ValueError> {
                match value {
                    Value::Int(number) => narrow(number),
                    other => Err(mismatch(Self::KIND, &other)),
                }
            }
        }

        impl FieldValue for Vec<$ty> {
            const KIND: ValueKind = ValueKind::IntArray;

            fn from_value(value: Value) -> Result<Self, ValueError> {
                match value {
                    Value::IntArray(numbers) => numbers.into_iter().map(narrow).collect(),
                    other => Err(mismatch(Self::KIND, &other)),
                }
            }
        }
    )*};
}

int_field_value!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

fn narrow<T: TryFrom<i64>>(value: i64) -> Result<T, ValueError> {
    T::try_from(value).map_err(|_| ValueError::OutOfRange {
        value,
        target: std::any::type_name::<T>(),
    })
}
