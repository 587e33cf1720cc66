//! The polymorphic property value.
//!
//! A CloudFormation property can hold a literal, a list, an arbitrary object or an
//! intrinsic function call, and a template does not say which up front. [`Value`]
//! captures all of these and serializes each one back to the JSON shape it came from.

use crate::error::{Error, Result};
use crate::types::intrinsic::{intrinsic_from_owned_map, Intrinsic, Recognized};
use serde::de::{DeserializeOwned, Error as _};
use serde::ser::{Error as _, SerializeSeq};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Number, Value as JsonValue};
use std::fmt;
use std::str::FromStr;

/// Any value a CloudFormation property can hold.
///
/// An unset property is `Option::<Value>::None`; see [`Value::slice`].
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    String(String),
    Integer(i32),
    Long(i64),
    Double(f64),
    Boolean(bool),
    Slice(Vec<Value>),
    /// An object that is not an intrinsic function call.
    Map(Map<String, JsonValue>),
    Intrinsic(Intrinsic),
}

impl Value {
    pub fn string(v: impl Into<String>) -> Self {
        Value::String(v.into())
    }

    pub fn integer(v: i32) -> Self {
        Value::Integer(v)
    }

    pub fn long(v: i64) -> Self {
        Value::Long(v)
    }

    pub fn double(v: f64) -> Self {
        Value::Double(v)
    }

    pub fn boolean(v: bool) -> Self {
        Value::Boolean(v)
    }

    /// Builds a list value. An empty list yields `None` so that the property is
    /// omitted rather than written as `[]`.
    pub fn slice(values: Vec<Value>) -> Option<Self> {
        if values.is_empty() {
            None
        } else {
            Some(Value::Slice(values))
        }
    }

    /// Builds a list of strings, collapsing to `None` when empty.
    pub fn string_slice<I, S>(values: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::slice(values.into_iter().map(Value::string).collect())
    }

    /// Converts a decoded JSON tree.
    ///
    /// Numbers are classified from their source text: integral values become
    /// `Integer` when they fit an `i32` and `Long` otherwise, other numbers become
    /// `Double`, and text that does not parse as a finite number is kept as a
    /// `String`. Single-key objects naming an intrinsic function are parsed as
    /// such; any other object is kept as a `Map`.
    pub fn from_json(raw: JsonValue) -> Result<Self> {
        match raw {
            JsonValue::String(s) => Ok(Value::String(s)),
            JsonValue::Number(n) => Ok(Self::from_number(&n)),
            JsonValue::Bool(b) => Ok(Value::Boolean(b)),
            JsonValue::Array(items) => items
                .into_iter()
                .map(Value::from_json)
                .collect::<Result<Vec<_>>>()
                .map(Value::Slice),
            JsonValue::Object(map) => match intrinsic_from_owned_map(map)? {
                Recognized::Call(intrinsic) => Ok(Value::Intrinsic(intrinsic)),
                Recognized::Object(map) => Ok(Value::Map(map)),
            },
            JsonValue::Null => Err(Error::UnsupportedType(json_kind(&JsonValue::Null).to_owned())),
        }
    }

    /// Converts any serializable native value (`i32`, `bool`, `&str`, vectors,
    /// string-keyed maps, ...).
    pub fn from_primitive<T>(v: &T) -> Result<Self>
    where
        T: Serialize + ?Sized,
    {
        let raw = serde_json::to_value(v)
            .map_err(|_| Error::UnsupportedType(std::any::type_name::<T>().to_owned()))?;
        Self::from_json(raw)
    }

    /// Decodes a JSON document into a value.
    pub fn from_slice(b: &[u8]) -> Result<Self> {
        let raw: JsonValue = serde_json::from_slice(b)?;
        Self::from_json(raw)
    }

    fn from_number(n: &Number) -> Self {
        let text = n.to_string();
        if let Ok(i) = text.parse::<i64>() {
            return match i32::try_from(i) {
                Ok(small) => Value::Integer(small),
                Err(_) => Value::Long(i),
            };
        }
        match text.parse::<f64>() {
            Ok(f) if f.is_finite() => Value::Double(f),
            _ => Value::String(text),
        }
    }

    /// The value as a JSON tree, intrinsic calls included. Fails for doubles that
    /// JSON cannot represent (NaN and infinities).
    pub fn to_json(&self) -> Result<JsonValue> {
        Ok(serde_json::to_value(self)?)
    }

    /// Decodes the value into a typed structure.
    pub fn convert<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_value(self.to_json()?)?)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Integer(i) => Some(i64::from(*i)),
            Value::Long(l) => Some(*l),
            _ => None,
        }
    }

    #[allow(clippy::cast_precision_loss)]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Integer(i) => Some(f64::from(*i)),
            Value::Long(l) => Some(*l as f64),
            Value::Double(d) => Some(*d),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_slice(&self) -> Option<&[Value]> {
        match self {
            Value::Slice(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&Map<String, JsonValue>> {
        match self {
            Value::Map(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_intrinsic(&self) -> Option<&Intrinsic> {
        match self {
            Value::Intrinsic(intrinsic) => Some(intrinsic),
            _ => None,
        }
    }

    pub fn is_intrinsic(&self) -> bool {
        matches!(self, Value::Intrinsic(_))
    }
}

pub(crate) fn json_kind(v: &JsonValue) -> &'static str {
    match v {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "boolean",
        JsonValue::Number(_) => "number",
        JsonValue::String(_) => "string",
        JsonValue::Array(_) => "array",
        JsonValue::Object(_) => "object",
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::String(s) => serializer.serialize_str(s),
            Value::Integer(i) => serializer.serialize_i32(*i),
            Value::Long(l) => serializer.serialize_i64(*l),
            Value::Double(d) if !d.is_finite() => Err(S::Error::custom(format!(
                "cannot serialize non-finite double `{}`",
                d
            ))),
            Value::Double(d) => serializer.serialize_f64(*d),
            Value::Boolean(b) => serializer.serialize_bool(*b),
            Value::Slice(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Value::Map(map) => map.serialize(serializer),
            Value::Intrinsic(intrinsic) => intrinsic.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = JsonValue::deserialize(deserializer)?;
        Value::from_json(raw).map_err(D::Error::custom)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::String(s) => f.write_str(s),
            other => match other.to_json() {
                Ok(json) => write!(f, "{}", json),
                Err(_) => write!(f, "{:?}", other),
            },
        }
    }
}

impl FromStr for Value {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_slice(s.as_bytes())
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::string(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Integer(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Long(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Double(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Boolean(v)
    }
}

impl From<Intrinsic> for Value {
    fn from(v: Intrinsic) -> Self {
        Value::Intrinsic(v)
    }
}
