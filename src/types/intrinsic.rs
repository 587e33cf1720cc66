//! CloudFormation intrinsic functions.
//!
//! In JSON an intrinsic call is an object with a single key naming the function,
//! e.g. `{"Fn::Join": [",", ["a", "b"]]}`. [`intrinsic_from_map`] decides whether a
//! decoded object is such a call and parses its arguments into [`Value`] trees.

use crate::error::{Error, Result};
use crate::types::value::{json_kind, Value};
use serde::de::Error as _;
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value as JsonValue};
use std::fmt;
use std::str::FromStr;

pub const ACCOUNT_ID: &str = "AWS::AccountId";
pub const NOTIFICATION_ARNS: &str = "AWS::NotificationARNs";
pub const NO_VALUE: &str = "AWS::NoValue";
pub const PARTITION: &str = "AWS::Partition";
pub const REGION: &str = "AWS::Region";
pub const STACK_ID: &str = "AWS::StackId";
pub const STACK_NAME: &str = "AWS::StackName";

/// The intrinsic function names.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum IntrinsicFunction {
    Ref,
    Base64,
    Cidr,
    And,
    Equals,
    If,
    Not,
    Or,
    FindInMap,
    GetAtt,
    GetAZs,
    ImportValue,
    Join,
    Sub,
    Select,
    Split,
}

impl IntrinsicFunction {
    pub const ALL: [IntrinsicFunction; 16] = [
        IntrinsicFunction::Ref,
        IntrinsicFunction::Base64,
        IntrinsicFunction::Cidr,
        IntrinsicFunction::And,
        IntrinsicFunction::Equals,
        IntrinsicFunction::If,
        IntrinsicFunction::Not,
        IntrinsicFunction::Or,
        IntrinsicFunction::FindInMap,
        IntrinsicFunction::GetAtt,
        IntrinsicFunction::GetAZs,
        IntrinsicFunction::ImportValue,
        IntrinsicFunction::Join,
        IntrinsicFunction::Sub,
        IntrinsicFunction::Select,
        IntrinsicFunction::Split,
    ];

    /// The JSON key of the function.
    pub fn as_str(self) -> &'static str {
        match self {
            IntrinsicFunction::Ref => "Ref",
            IntrinsicFunction::Base64 => "Fn::Base64",
            IntrinsicFunction::Cidr => "Fn::Cidr",
            IntrinsicFunction::And => "Fn::And",
            IntrinsicFunction::Equals => "Fn::Equals",
            IntrinsicFunction::If => "Fn::If",
            IntrinsicFunction::Not => "Fn::Not",
            IntrinsicFunction::Or => "Fn::Or",
            IntrinsicFunction::FindInMap => "Fn::FindInMap",
            IntrinsicFunction::GetAtt => "Fn::GetAtt",
            IntrinsicFunction::GetAZs => "Fn::GetAZs",
            IntrinsicFunction::ImportValue => "Fn::ImportValue",
            IntrinsicFunction::Join => "Fn::Join",
            IntrinsicFunction::Sub => "Fn::Sub",
            IntrinsicFunction::Select => "Fn::Select",
            IntrinsicFunction::Split => "Fn::Split",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|f| f.as_str() == key)
    }

    /// Whether arguments of this function are checked when parsed. The others are
    /// carried through untouched.
    pub fn is_validated(self) -> bool {
        !matches!(
            self,
            IntrinsicFunction::Base64
                | IntrinsicFunction::GetAZs
                | IntrinsicFunction::And
                | IntrinsicFunction::If
                | IntrinsicFunction::Not
                | IntrinsicFunction::Or
        )
    }
}

impl fmt::Display for IntrinsicFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IntrinsicFunction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_key(s).ok_or_else(|| Error::UnknownFunction(s.to_owned()))
    }
}

/// A parsed intrinsic function call.
#[derive(Clone, Debug, PartialEq)]
pub enum Intrinsic {
    Ref(String),
    GetAtt {
        logical_name: String,
        attribute: Box<Value>,
    },
    ImportValue(Box<Value>),
    Cidr {
        ip_block: Box<Value>,
        count: Box<Value>,
        cidr_bits: Box<Value>,
    },
    Equals(Box<Value>, Box<Value>),
    FindInMap {
        map_name: Box<Value>,
        top_level_key: Box<Value>,
        second_level_key: Box<Value>,
    },
    Join {
        delimiter: String,
        values: Vec<Value>,
    },
    Select {
        index: Box<Value>,
        list: Box<Value>,
    },
    Split {
        delimiter: String,
        source: Box<Value>,
    },
    /// Either a template string or `[template, variables]`.
    Sub(JsonValue),
    /// `Fn::Base64`, `Fn::GetAZs`, `Fn::And`, `Fn::If`, `Fn::Not` and `Fn::Or`.
    Unsupported {
        function: IntrinsicFunction,
        argument: JsonValue,
    },
}

impl Intrinsic {
    pub fn function(&self) -> IntrinsicFunction {
        match self {
            Intrinsic::Ref(_) => IntrinsicFunction::Ref,
            Intrinsic::GetAtt { .. } => IntrinsicFunction::GetAtt,
            Intrinsic::ImportValue(_) => IntrinsicFunction::ImportValue,
            Intrinsic::Cidr { .. } => IntrinsicFunction::Cidr,
            Intrinsic::Equals(..) => IntrinsicFunction::Equals,
            Intrinsic::FindInMap { .. } => IntrinsicFunction::FindInMap,
            Intrinsic::Join { .. } => IntrinsicFunction::Join,
            Intrinsic::Select { .. } => IntrinsicFunction::Select,
            Intrinsic::Split { .. } => IntrinsicFunction::Split,
            Intrinsic::Sub(_) => IntrinsicFunction::Sub,
            Intrinsic::Unsupported { function, .. } => *function,
        }
    }

    /// Parses the argument of `function`.
    pub fn parse(function: IntrinsicFunction, argument: JsonValue) -> Result<Self> {
        use IntrinsicFunction::*;
        match function {
            Ref => match argument {
                JsonValue::String(name) => Ok(Intrinsic::Ref(name)),
                other => Err(Error::malformed(
                    function,
                    format!("expected a string, found {}", json_kind(&other)),
                )),
            },
            GetAtt => match argument {
                JsonValue::String(path) => {
                    let parts: Vec<&str> = path.split('.').collect();
                    match parts.as_slice() {
                        [logical_name, attribute] => Ok(Intrinsic::GetAtt {
                            logical_name: (*logical_name).to_owned(),
                            attribute: Box::new(Value::string(*attribute)),
                        }),
                        _ => Err(Error::malformed(
                            function,
                            format!("expected `LogicalName.AttributeName`, found `{}`", path),
                        )),
                    }
                }
                JsonValue::Array(_) => {
                    let [logical_name, attribute] = expect_list(function, argument)?;
                    Ok(Intrinsic::GetAtt {
                        logical_name: expect_string(function, logical_name, "logical name")?,
                        attribute: Box::new(Value::from_json(attribute)?),
                    })
                }
                other => Err(Error::malformed(
                    function,
                    format!("expected a list or a string, found {}", json_kind(&other)),
                )),
            },
            ImportValue => Ok(Intrinsic::ImportValue(Box::new(Value::from_json(argument)?))),
            Cidr => {
                let [ip_block, count, cidr_bits] = expect_list(function, argument)?;
                Ok(Intrinsic::Cidr {
                    ip_block: Box::new(Value::from_json(ip_block)?),
                    count: Box::new(Value::from_json(count)?),
                    cidr_bits: Box::new(Value::from_json(cidr_bits)?),
                })
            }
            Join => {
                let [delimiter, values] = expect_list(function, argument)?;
                let delimiter = expect_string(function, delimiter, "delimiter")?;
                let values = match values {
                    JsonValue::Array(items) => items
                        .into_iter()
                        .map(Value::from_json)
                        .collect::<Result<Vec<_>>>()?,
                    other => {
                        return Err(Error::malformed(
                            function,
                            format!("expected a list of values, found {}", json_kind(&other)),
                        ))
                    }
                };
                Ok(Intrinsic::Join { delimiter, values })
            }
            Equals => {
                let [left, right] = expect_list(function, argument)?;
                Ok(Intrinsic::Equals(
                    Box::new(Value::from_json(left)?),
                    Box::new(Value::from_json(right)?),
                ))
            }
            Select => {
                let [index, list] = expect_list(function, argument)?;
                Ok(Intrinsic::Select {
                    index: Box::new(Value::from_json(index)?),
                    list: Box::new(Value::from_json(list)?),
                })
            }
            Sub => Ok(Intrinsic::Sub(argument)),
            Split => {
                let [delimiter, source] = expect_list(function, argument)?;
                Ok(Intrinsic::Split {
                    delimiter: expect_string(function, delimiter, "delimiter")?,
                    source: Box::new(Value::from_json(source)?),
                })
            }
            FindInMap => {
                let [map_name, top_level_key, second_level_key] = expect_list(function, argument)?;
                Ok(Intrinsic::FindInMap {
                    map_name: Box::new(Value::from_json(map_name)?),
                    top_level_key: Box::new(Value::from_json(top_level_key)?),
                    second_level_key: Box::new(Value::from_json(second_level_key)?),
                })
            }
            Base64 | GetAZs | And | If | Not | Or => Ok(Intrinsic::Unsupported { function, argument }),
        }
    }

    /// The call as a single-key JSON object. Fails when a nested value holds a
    /// non-finite double.
    pub fn to_json(&self) -> Result<JsonValue> {
        Ok(serde_json::to_value(self)?)
    }
}

fn expect_list<const N: usize>(
    function: IntrinsicFunction,
    argument: JsonValue,
) -> Result<[JsonValue; N]> {
    match argument {
        JsonValue::Array(items) => {
            let found = items.len();
            <[JsonValue; N]>::try_from(items).map_err(|_| {
                Error::malformed(function, format!("expected {} elements, found {}", N, found))
            })
        }
        other => Err(Error::malformed(
            function,
            format!("expected a list, found {}", json_kind(&other)),
        )),
    }
}

fn expect_string(function: IntrinsicFunction, v: JsonValue, what: &str) -> Result<String> {
    match v {
        JsonValue::String(s) => Ok(s),
        other => Err(Error::malformed(
            function,
            format!("expected a string {}, found {}", what, json_kind(&other)),
        )),
    }
}

/// Attempts to read `raw` as an intrinsic function call.
///
/// Objects that do not have exactly one key, or whose key is not a function name,
/// fail with an error for which [`Error::is_not_intrinsic`] holds. A known function
/// with badly shaped arguments fails with [`Error::MalformedIntrinsic`].
pub fn intrinsic_from_map(raw: &Map<String, JsonValue>) -> Result<Intrinsic> {
    let function = function_key(raw)?;
    match raw.values().next() {
        Some(argument) => Intrinsic::parse(function, argument.clone()),
        None => Err(Error::KeyCount(0)),
    }
}

/// Outcome of [`intrinsic_from_owned_map`].
#[derive(Debug, PartialEq)]
pub(crate) enum Recognized {
    Call(Intrinsic),
    /// Not a function call; the object is handed back untouched.
    Object(Map<String, JsonValue>),
}

/// Same as [`intrinsic_from_map`] but takes the object by value, so the argument
/// tree is moved into the result instead of copied.
pub(crate) fn intrinsic_from_owned_map(raw: Map<String, JsonValue>) -> Result<Recognized> {
    match function_key(&raw) {
        Ok(function) => parse_entry(function, raw).map(Recognized::Call),
        Err(err) if err.is_not_intrinsic() => Ok(Recognized::Object(raw)),
        Err(err) => Err(err),
    }
}

fn function_key(raw: &Map<String, JsonValue>) -> Result<IntrinsicFunction> {
    if raw.len() != 1 {
        return Err(Error::KeyCount(raw.len()));
    }
    match raw.keys().next() {
        Some(key) => key.parse(),
        None => Err(Error::KeyCount(0)),
    }
}

fn parse_entry(function: IntrinsicFunction, raw: Map<String, JsonValue>) -> Result<Intrinsic> {
    match raw.into_iter().next() {
        Some((_, argument)) => Intrinsic::parse(function, argument),
        None => Err(Error::KeyCount(0)),
    }
}

impl Serialize for Intrinsic {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let key = self.function().as_str();
        let mut map = serializer.serialize_map(Some(1))?;
        match self {
            Intrinsic::Ref(name) => map.serialize_entry(key, name)?,
            Intrinsic::GetAtt {
                logical_name,
                attribute,
            } => map.serialize_entry(key, &(logical_name, attribute))?,
            Intrinsic::ImportValue(v) => map.serialize_entry(key, v)?,
            Intrinsic::Cidr {
                ip_block,
                count,
                cidr_bits,
            } => map.serialize_entry(key, &(ip_block, count, cidr_bits))?,
            Intrinsic::Equals(left, right) => map.serialize_entry(key, &(left, right))?,
            Intrinsic::FindInMap {
                map_name,
                top_level_key,
                second_level_key,
            } => map.serialize_entry(key, &(map_name, top_level_key, second_level_key))?,
            Intrinsic::Join { delimiter, values } => map.serialize_entry(key, &(delimiter, values))?,
            Intrinsic::Select { index, list } => map.serialize_entry(key, &(index, list))?,
            Intrinsic::Split { delimiter, source } => {
                map.serialize_entry(key, &(delimiter, source))?
            }
            Intrinsic::Sub(argument) | Intrinsic::Unsupported { argument, .. } => {
                map.serialize_entry(key, argument)?
            }
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Intrinsic {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match JsonValue::deserialize(deserializer)? {
            JsonValue::Object(map) => function_key(&map)
                .and_then(|function| parse_entry(function, map))
                .map_err(D::Error::custom),
            other => Err(D::Error::custom(format!(
                "expected an intrinsic function object, found {}",
                json_kind(&other)
            ))),
        }
    }
}

pub fn make_ref(logical_name: impl Into<String>) -> Value {
    Intrinsic::Ref(logical_name.into()).into()
}

pub fn make_fn_get_att(logical_name: impl Into<String>, attribute: Value) -> Value {
    Intrinsic::GetAtt {
        logical_name: logical_name.into(),
        attribute: Box::new(attribute),
    }
    .into()
}

pub fn make_fn_get_att_string(logical_name: impl Into<String>, attribute: &str) -> Value {
    make_fn_get_att(logical_name, Value::string(attribute))
}

pub fn make_fn_import_value(argument: Value) -> Value {
    Intrinsic::ImportValue(Box::new(argument)).into()
}

pub fn make_fn_import_value_string(export_name: &str) -> Value {
    make_fn_import_value(Value::string(export_name))
}

pub fn make_fn_cidr(ip_block: Value, count: Value, cidr_bits: Value) -> Value {
    Intrinsic::Cidr {
        ip_block: Box::new(ip_block),
        count: Box::new(count),
        cidr_bits: Box::new(cidr_bits),
    }
    .into()
}

pub fn make_fn_equals(left: Value, right: Value) -> Value {
    Intrinsic::Equals(Box::new(left), Box::new(right)).into()
}

pub fn make_fn_join(delimiter: impl Into<String>, values: Vec<Value>) -> Value {
    Intrinsic::Join {
        delimiter: delimiter.into(),
        values,
    }
    .into()
}

/// `Fn::Sub` with any argument, e.g. a `[template, variables]` list.
pub fn make_fn_sub(argument: Value) -> Result<Value> {
    Ok(Intrinsic::Sub(argument.to_json()?).into())
}

pub fn make_fn_sub_string(template: impl Into<String>) -> Value {
    Intrinsic::Sub(JsonValue::String(template.into())).into()
}

pub fn make_fn_select(index: Value, list: Value) -> Value {
    Intrinsic::Select {
        index: Box::new(index),
        list: Box::new(list),
    }
    .into()
}

pub fn make_fn_split(delimiter: impl Into<String>, source: Value) -> Value {
    Intrinsic::Split {
        delimiter: delimiter.into(),
        source: Box::new(source),
    }
    .into()
}

pub fn make_fn_split_string(delimiter: impl Into<String>, source: &str) -> Value {
    make_fn_split(delimiter, Value::string(source))
}

pub fn make_fn_find_in_map(map_name: Value, top_level_key: Value, second_level_key: Value) -> Value {
    Intrinsic::FindInMap {
        map_name: Box::new(map_name),
        top_level_key: Box::new(top_level_key),
        second_level_key: Box::new(second_level_key),
    }
    .into()
}

/// `{"Fn::Sub": "${AWS::StackName}-<suffix>"}`
pub fn make_name(suffix: &str) -> Value {
    make_fn_sub_string(format!("${{{}}}-{}", STACK_NAME, suffix))
}

pub fn ref_account_id() -> Value {
    make_ref(ACCOUNT_ID)
}

pub fn ref_notification_arns() -> Value {
    make_ref(NOTIFICATION_ARNS)
}

pub fn ref_no_value() -> Value {
    make_ref(NO_VALUE)
}

pub fn ref_partition() -> Value {
    make_ref(PARTITION)
}

pub fn ref_region() -> Value {
    make_ref(REGION)
}

pub fn ref_stack_id() -> Value {
    make_ref(STACK_ID)
}

pub fn ref_stack_name() -> Value {
    make_ref(STACK_NAME)
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::json;

    fn decode(s: &str) -> Result<Value> {
        Value::from_str(s)
    }

    fn encode(v: &Value) -> String {
        serde_json::to_string(v).unwrap()
    }

    #[test]
    fn test_function_names() {
        for function in IntrinsicFunction::ALL.iter() {
            assert_eq!(
                function.as_str().parse::<IntrinsicFunction>().unwrap(),
                *function
            );
        }
        assert_eq!(IntrinsicFunction::from_key("Fn::Foo"), None);
        assert!(!IntrinsicFunction::If.is_validated());
        assert!(IntrinsicFunction::Join.is_validated());
    }

    #[test]
    fn test_ref_round_trip() {
        let v = decode(r#"{"Ref": "MyBucket"}"#).unwrap();
        assert_eq!(v, make_ref("MyBucket"));
        assert_eq!(encode(&v), r#"{"Ref":"MyBucket"}"#);
    }

    #[test]
    fn test_ref_requires_string() {
        let err = decode(r#"{"Ref": 1}"#).unwrap_err();
        assert!(matches!(
            err,
            Error::MalformedIntrinsic {
                function: IntrinsicFunction::Ref,
                ..
            }
        ));
    }

    #[test]
    fn test_join_with_nested_intrinsics() {
        let src = r#"{"Fn::Join":[",",["a",{"Ref":"X"}]]}"#;
        let v = decode(src).unwrap();
        match v.as_intrinsic() {
            Some(Intrinsic::Join { delimiter, values }) => {
                assert_eq!(delimiter, ",");
                assert_eq!(values[0], Value::string("a"));
                assert_eq!(values[1], make_ref("X"));
            }
            other => panic!("unexpected {:?}", other),
        }
        assert_eq!(encode(&v), src);
    }

    #[test]
    fn test_malformed_join() {
        assert!(decode(r#"{"Fn::Join": ["only-one-element"]}"#).is_err());
        assert!(decode(r#"{"Fn::Join": [",", "a", "b"]}"#).is_err());
        assert!(decode(r#"{"Fn::Join": [1, ["a"]]}"#).is_err());
        assert!(decode(r#"{"Fn::Join": [",", "not-a-list"]}"#).is_err());
        assert!(decode(r#"{"Fn::Join": ","}"#).is_err());

        let err = decode(r#"{"Fn::Join": ["only-one-element"]}"#).unwrap_err();
        assert_eq!(
            err.to_string(),
            "cannot parse Fn::Join arguments: expected 2 elements, found 1"
        );
    }

    #[test]
    fn test_malformed_intrinsic_inside_list_fails_whole_value() {
        assert!(decode(r#"["a", {"Fn::Select": [0]}]"#).is_err());
    }

    #[test]
    fn test_get_att_forms_are_equivalent() {
        let list = decode(r#"{"Fn::GetAtt": ["MyResource", "Arn"]}"#).unwrap();
        let dotted = decode(r#"{"Fn::GetAtt": "MyResource.Arn"}"#).unwrap();
        assert_eq!(list, dotted);
        assert_eq!(list, make_fn_get_att_string("MyResource", "Arn"));
        assert_eq!(encode(&dotted), r#"{"Fn::GetAtt":["MyResource","Arn"]}"#);
        assert_eq!(decode(&encode(&dotted)).unwrap(), list);
    }

    #[test]
    fn test_get_att_rejects_bad_shapes() {
        assert!(decode(r#"{"Fn::GetAtt": "NoAttribute"}"#).is_err());
        assert!(decode(r#"{"Fn::GetAtt": "A.B.C"}"#).is_err());
        assert!(decode(r#"{"Fn::GetAtt": ["A"]}"#).is_err());
        assert!(decode(r#"{"Fn::GetAtt": [1, "Arn"]}"#).is_err());
        assert!(decode(r#"{"Fn::GetAtt": 3}"#).is_err());
    }

    #[test]
    fn test_get_att_attribute_may_be_intrinsic() {
        let v = decode(r#"{"Fn::GetAtt": ["Res", {"Ref": "AttrParam"}]}"#).unwrap();
        assert_eq!(v, make_fn_get_att("Res", make_ref("AttrParam")));
    }

    #[test]
    fn test_fixed_arity_functions() {
        let cidr = decode(r#"{"Fn::Cidr": ["10.0.0.0/16", 6, 5]}"#).unwrap();
        assert_eq!(
            cidr,
            make_fn_cidr(Value::string("10.0.0.0/16"), Value::integer(6), Value::integer(5))
        );
        assert!(decode(r#"{"Fn::Cidr": ["10.0.0.0/16", 6]}"#).is_err());

        let equals = decode(r#"{"Fn::Equals": [{"Ref": "Env"}, "prod"]}"#).unwrap();
        assert_eq!(equals, make_fn_equals(make_ref("Env"), Value::string("prod")));
        assert!(decode(r#"{"Fn::Equals": ["a"]}"#).is_err());

        let select = decode(r#"{"Fn::Select": [0, {"Fn::GetAZs": ""}]}"#).unwrap();
        match select.as_intrinsic() {
            Some(Intrinsic::Select { index, list }) => {
                assert_eq!(**index, Value::integer(0));
                assert_eq!(
                    list.as_intrinsic().map(Intrinsic::function),
                    Some(IntrinsicFunction::GetAZs)
                );
            }
            other => panic!("unexpected {:?}", other),
        }

        let find = decode(r#"{"Fn::FindInMap": ["RegionMap", {"Ref": "AWS::Region"}, "AMI"]}"#)
            .unwrap();
        assert_eq!(
            find,
            make_fn_find_in_map(Value::string("RegionMap"), ref_region(), Value::string("AMI"))
        );
        assert!(decode(r#"{"Fn::FindInMap": ["RegionMap", "AMI"]}"#).is_err());
    }

    #[test]
    fn test_split_and_import_value() {
        let split = decode(r#"{"Fn::Split": [",", {"Fn::ImportValue": "SubnetIds"}]}"#).unwrap();
        assert_eq!(
            split,
            make_fn_split(",", make_fn_import_value_string("SubnetIds"))
        );
        assert!(decode(r#"{"Fn::Split": [1, "a,b"]}"#).is_err());
        assert_eq!(
            encode(&make_fn_split_string("|", "a|b")),
            r#"{"Fn::Split":["|","a|b"]}"#
        );
    }

    #[test]
    fn test_sub_is_passed_through() {
        let src = r#"{"Fn::Sub":["${Name}-${Count}",{"Count":3,"Name":{"Ref":"N"}}]}"#;
        let v = decode(src).unwrap();
        assert!(matches!(v.as_intrinsic(), Some(Intrinsic::Sub(_))));
        assert_eq!(encode(&v), src);

        assert_eq!(
            encode(&make_name("vpc")),
            r#"{"Fn::Sub":"${AWS::StackName}-vpc"}"#
        );
    }

    #[test]
    fn test_unsupported_functions_round_trip() {
        for src in &[
            r#"{"Fn::Base64":{"Fn::Sub":"echo ${AWS::Region}"}}"#,
            r#"{"Fn::GetAZs":""}"#,
            r#"{"Fn::And":[{"Condition":"A"},{"Condition":"B"}]}"#,
            r#"{"Fn::If":["IsProd",1,{"Ref":"AWS::NoValue"}]}"#,
            r#"{"Fn::Not":[{"Condition":"A"}]}"#,
            r#"{"Fn::Or":[{"Condition":"A"},{"Condition":"B"}]}"#,
        ] {
            let v = decode(src).unwrap();
            assert!(matches!(
                v.as_intrinsic(),
                Some(Intrinsic::Unsupported { .. })
            ));
            assert_eq!(&encode(&v), src);
        }
    }

    #[test]
    fn test_recognizer_strictness() {
        let empty = Map::new();
        assert!(matches!(intrinsic_from_map(&empty), Err(Error::KeyCount(0))));

        let two = json!({"Ref": "X", "Extra": "Y"});
        let two = two.as_object().unwrap();
        assert!(matches!(intrinsic_from_map(two), Err(Error::KeyCount(2))));

        let unknown = json!({"SomeRandomKey": "value"});
        let err = intrinsic_from_map(unknown.as_object().unwrap()).unwrap_err();
        assert!(err.is_not_intrinsic());
        assert!(err.to_string().contains("didn't contain intrinsic function key"));
    }

    #[test]
    fn test_constructed_values_round_trip() {
        let values = vec![
            ref_account_id(),
            ref_notification_arns(),
            ref_no_value(),
            ref_partition(),
            ref_stack_id(),
            ref_stack_name(),
            make_fn_join("", vec![Value::string("arn:"), ref_partition(), Value::string(":s3:::bucket")]),
            make_fn_join(",", vec![]),
            make_fn_select(Value::integer(1), make_fn_split_string(",", "a,b")),
            make_fn_import_value(make_fn_sub_string("${AWS::StackName}-Vpc")),
            make_fn_sub(Value::Slice(vec![Value::string("${X}"), Value::from_str(r#"{"X":"y"}"#).unwrap()]))
                .unwrap(),
            make_fn_cidr(make_fn_get_att_string("Vpc", "CidrBlock"), Value::integer(3), Value::long(8)),
        ];
        for v in values {
            let encoded = encode(&v);
            let decoded = decode(&encoded).unwrap();
            assert_eq!(encode(&decoded), encoded);
            assert_eq!(decoded.to_json().unwrap(), v.to_json().unwrap());
        }
    }

    #[test]
    fn test_to_json_matches_serialization() {
        let v = make_fn_join("-", vec![Value::double(1.5), make_ref("A")]);
        assert_eq!(
            serde_json::to_string(&v.to_json().unwrap()).unwrap(),
            encode(&v)
        );
        let i = Intrinsic::Equals(Box::new(Value::integer(1)), Box::new(Value::double(f64::NAN)));
        assert!(i.to_json().is_err());
        assert!(make_fn_sub(Value::Slice(vec![Value::string("${X}"), Value::double(f64::INFINITY)])).is_err());
    }

    #[test]
    fn test_owned_recognizer_agrees_with_borrowed() {
        let call = json!({"Fn::Join": [",", [{"Ref": "A"}, "b"]]});
        let call = call.as_object().unwrap().clone();
        let borrowed = intrinsic_from_map(&call).unwrap();
        assert_eq!(
            intrinsic_from_owned_map(call).unwrap(),
            Recognized::Call(borrowed)
        );

        let object = json!({"Key": "Name", "Value": {"Ref": "A"}});
        let object = object.as_object().unwrap().clone();
        assert_eq!(
            intrinsic_from_owned_map(object.clone()).unwrap(),
            Recognized::Object(object)
        );

        let malformed = json!({"Fn::Select": "x"});
        let malformed = malformed.as_object().unwrap().clone();
        assert!(matches!(
            intrinsic_from_owned_map(malformed),
            Err(Error::MalformedIntrinsic { .. })
        ));
    }

    #[test]
    fn test_deserialize_intrinsic_directly() {
        let i: Intrinsic = serde_json::from_str(r#"{"Ref":"A"}"#).unwrap();
        assert_eq!(i, Intrinsic::Ref("A".to_owned()));
        assert!(serde_json::from_str::<Intrinsic>(r#""Ref""#).is_err());
        assert!(serde_json::from_str::<Intrinsic>(r#"{"Nope":"A"}"#).is_err());
    }
}
