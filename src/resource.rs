//! The resource envelope.
//!
//! Generated property structs only describe `Properties`. [`Resource`] adds the
//! `Type` discriminator and the resource attributes (`DependsOn`, `Metadata`,
//! policies and `Condition`) around them:
//!
//! ```json
//! {
//!     "Type": "AWS::EC2::SecurityGroup",
//!     "Properties": { "GroupDescription": "web" },
//!     "DeletionPolicy": "Retain"
//! }
//! ```

use crate::error::Result;
use crate::policies::{CreationPolicy, DeletionPolicy, UpdatePolicy, UpdateReplacePolicy};
use serde::de::{self, DeserializeOwned, Error as _, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value as JsonValue};
use std::fmt;

/// Properties of a CloudFormation resource type.
pub trait ResourceProperties: Serialize + DeserializeOwned + Default {
    /// The type name, e.g. `AWS::S3::Bucket`.
    const RESOURCE_TYPE: &'static str;
}

/// A resource together with its CloudFormation resource attributes.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Resource<P> {
    pub properties: P,
    /// Logical IDs of the resources that must be created first.
    pub depends_on: Vec<String>,
    pub metadata: Map<String, JsonValue>,
    pub deletion_policy: Option<DeletionPolicy>,
    pub update_replace_policy: Option<UpdateReplacePolicy>,
    /// Logical ID of the condition that gates creation.
    pub condition: Option<String>,
    pub creation_policy: Option<CreationPolicy>,
    pub update_policy: Option<UpdatePolicy>,
}

impl<P: ResourceProperties> Resource<P> {
    pub fn new(properties: P) -> Self {
        Self {
            properties,
            depends_on: Vec::new(),
            metadata: Map::new(),
            deletion_policy: None,
            update_replace_policy: None,
            condition: None,
            creation_policy: None,
            update_policy: None,
        }
    }

    pub fn resource_type(&self) -> &'static str {
        P::RESOURCE_TYPE
    }

    pub fn with_depends_on<I, S>(mut self, logical_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.depends_on = logical_ids.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_deletion_policy(mut self, policy: DeletionPolicy) -> Self {
        self.deletion_policy = Some(policy);
        self
    }

    pub fn with_update_replace_policy(mut self, policy: UpdateReplacePolicy) -> Self {
        self.update_replace_policy = Some(policy);
        self
    }

    pub fn with_condition(mut self, condition: impl Into<String>) -> Self {
        self.condition = Some(condition.into());
        self
    }

    pub fn from_slice(b: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(b)?)
    }
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct EnvelopeRef<'a, P> {
    r#type: &'static str,
    properties: &'a P,
    #[serde(skip_serializing_if = "Option::is_none")]
    depends_on: Option<&'a [String]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    metadata: Option<&'a Map<String, JsonValue>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    deletion_policy: Option<DeletionPolicy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    update_replace_policy: Option<UpdateReplacePolicy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    condition: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    creation_policy: Option<&'a CreationPolicy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    update_policy: Option<&'a UpdatePolicy>,
}

#[derive(Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
struct Envelope<P> {
    r#type: String,
    properties: Option<P>,
    #[serde(default, deserialize_with = "string_or_list")]
    depends_on: Vec<String>,
    #[serde(default)]
    metadata: Map<String, JsonValue>,
    deletion_policy: Option<DeletionPolicy>,
    update_replace_policy: Option<UpdateReplacePolicy>,
    condition: Option<String>,
    creation_policy: Option<CreationPolicy>,
    update_policy: Option<UpdatePolicy>,
}

impl<P: ResourceProperties> Serialize for Resource<P> {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        EnvelopeRef {
            r#type: P::RESOURCE_TYPE,
            properties: &self.properties,
            depends_on: (!self.depends_on.is_empty()).then(|| self.depends_on.as_slice()),
            metadata: (!self.metadata.is_empty()).then(|| &self.metadata),
            deletion_policy: self.deletion_policy,
            update_replace_policy: self.update_replace_policy,
            condition: self.condition.as_deref(),
            creation_policy: self.creation_policy.as_ref(),
            update_policy: self.update_policy.as_ref(),
        }
        .serialize(serializer)
    }
}

impl<'de, P: ResourceProperties> Deserialize<'de> for Resource<P> {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let envelope = Envelope::<P>::deserialize(deserializer).map_err(|err| {
            tracing::debug!(resource_type = P::RESOURCE_TYPE, error = %err, "failed to decode resource");
            err
        })?;
        if envelope.r#type != P::RESOURCE_TYPE {
            tracing::debug!(
                expected = P::RESOURCE_TYPE,
                found = %envelope.r#type,
                "resource type mismatch"
            );
            return Err(D::Error::custom(format!(
                "expected resource type `{}`, found `{}`",
                P::RESOURCE_TYPE,
                envelope.r#type
            )));
        }
        Ok(Resource {
            properties: envelope.properties.unwrap_or_default(),
            depends_on: envelope.depends_on,
            metadata: envelope.metadata,
            deletion_policy: envelope.deletion_policy,
            update_replace_policy: envelope.update_replace_policy,
            condition: envelope.condition,
            creation_policy: envelope.creation_policy,
            update_policy: envelope.update_policy,
        })
    }
}

// `DependsOn` is either a single logical ID or a list of them.
fn string_or_list<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    struct StringOrList;

    impl<'de> Visitor<'de> for StringOrList {
        type Value = Vec<String>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a logical ID or a list of logical IDs")
        }

        fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<Self::Value, E> {
            Ok(vec![v.to_owned()])
        }

        fn visit_seq<A>(self, mut seq: A) -> std::result::Result<Self::Value, A::Error>
        where
            A: SeqAccess<'de>,
        {
            let mut ids = Vec::with_capacity(seq.size_hint().unwrap_or(0));
            while let Some(id) = seq.next_element::<String>()? {
                ids.push(id);
            }
            Ok(ids)
        }
    }

    deserializer.deserialize_any(StringOrList)
}
