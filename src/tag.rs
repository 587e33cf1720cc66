use crate::types::Value;
use serde::{Deserialize, Serialize};

/// The key-value pair accepted by every `Tags` property.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Tag {
    #[serde(rename = "Key")]
    pub key: Value,
    #[serde(rename = "Value")]
    pub value: Value,
}

impl Tag {
    pub fn new(key: impl Into<Value>, value: impl Into<Value>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}
