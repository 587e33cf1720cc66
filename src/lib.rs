//! This crate models AWS CloudFormation resources as Serde types.
//!
//! ## Quick Start
//!
//! Every resource property holds a [`types::Value`]: a literal, a list, an opaque
//! object or an intrinsic function call such as `{"Ref": "MyVpc"}`. Generated
//! property structs use `Option<Value>` fields, and [`resource::Resource`] wraps them
//! in the resource envelope (`Type`, `Properties`, `DependsOn`, policies...).
//!
//! The following snippet decodes a security group whose `VpcId` is a reference to
//! another resource, then writes it back:
//!
//! ```
//! use cfnschema_bindgen::resource::Resource;
//! use cfnschema_bindgen::resources::ec2::SecurityGroup;
//! use cfnschema_bindgen::types::{make_ref, Intrinsic, Value};
//!
//! const SECURITY_GROUP: &str = r#"{
//!     "Type": "AWS::EC2::SecurityGroup",
//!     "Properties": {
//!         "GroupDescription": "web",
//!         "VpcId": {"Ref": "MyVpc"},
//!         "SecurityGroupIngress": [
//!             {"IpProtocol": "tcp", "FromPort": 443, "ToPort": 443, "CidrIp": "0.0.0.0/0"}
//!         ]
//!     },
//!     "DependsOn": "MyVpc"
//! }"#;
//!
//! fn main() -> Result<(), cfnschema_bindgen::error::Error> {
//!     let sg = Resource::<SecurityGroup>::from_slice(SECURITY_GROUP.as_bytes())?;
//!
//!     assert_eq!(sg.properties.vpc_id, Some(make_ref("MyVpc")));
//!     assert!(matches!(
//!         sg.properties.vpc_id.as_ref().and_then(Value::as_intrinsic),
//!         Some(Intrinsic::Ref(name)) if name == "MyVpc"
//!     ));
//!     let ingress = sg.properties.security_group_ingress.as_deref().unwrap_or_default();
//!     assert_eq!(ingress[0].from_port, Some(Value::integer(443)));
//!     assert_eq!(sg.depends_on, vec!["MyVpc".to_string()]);
//!
//!     let out = serde_json::to_value(&sg)?;
//!     assert_eq!(out["Properties"]["VpcId"], serde_json::json!({"Ref": "MyVpc"}));
//!     Ok(())
//! }
//! ```
//!
//! ## Generating bindings
//!
//! The structs under [`resources`] are generated from the AWS CloudFormation Resource
//! Specification. This crate provides a binary tool `cfnbindgen` to generate the same
//! bindings for any service from a specification saved on disk:
//!
//! ```bash
//! curl -sL https://d1uauaxba7bl26.cloudfront.net/latest/gzip/CloudFormationResourceSpecification.json \
//!     | gunzip > spec.json
//! cargo run --bin cfnbindgen -- spec.json --service S3 > s3.rs
//! ```
//!
//! Without `--service`, one module per service is written to `--out-dir` together
//! with a `mod.rs` declaring them. Generated modules import `Value`, `Tag` and
//! `ResourceProperties` from this crate; `--runtime-crate` changes that path.

pub mod error;

// property values and intrinsic functions
pub mod types;

pub mod policies;

pub mod resource;

pub mod tag;

/// Generated resource and property types.
#[rustfmt::skip]
pub mod resources;

// registry creation
pub mod binding;

// code generator
pub mod emit;

// configuration support for code generation
pub mod config;
