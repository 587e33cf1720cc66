use cfnschema_bindgen::binding::{
    export_specification_to_registry, generate_serde, read_resource_specification_from_file,
    registry_comments, write_services,
};
use cfnschema_bindgen::config::CodeGeneratorConfig;
use cfnschema_bindgen::emit::Registry;
use tempfile::tempdir;

const FIXTURE: &str = "./tests/fixtures/resource-specification.json";

fn generate(service: &str, runtime_crate: &str) -> String {
    let spec = read_resource_specification_from_file(FIXTURE).unwrap();
    let registry: Registry = export_specification_to_registry(&spec).unwrap();
    let config = CodeGeneratorConfig::new(service.to_string())
        .with_runtime_crate(runtime_crate)
        .with_comments(registry_comments(&spec));
    let mut out = Vec::new();
    generate_serde(&config, &mut out, &registry).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn test_bundled_modules_match_generator() {
    assert_eq!(generate("ec2", "crate"), include_str!("../src/resources/ec2.rs"));
    assert_eq!(generate("s3", "crate"), include_str!("../src/resources/s3.rs"));

    let spec = read_resource_specification_from_file(FIXTURE).unwrap();
    let registry = export_specification_to_registry(&spec).unwrap();
    let dir = tempdir().unwrap();
    write_services(dir.path(), &spec, &registry, "crate").unwrap();
    assert_eq!(
        std::fs::read_to_string(dir.path().join("mod.rs")).unwrap(),
        include_str!("../src/resources/mod.rs")
    );
}

#[test]
fn test_preamble_imports_runtime_crate() {
    let code = generate("s3", "cfnschema_bindgen");
    assert!(code.starts_with(
        "// Generated by cfnbindgen from the AWS CloudFormation resource specification.\n\
         #![allow(unused_imports, non_camel_case_types)]\n\
         use std::collections::BTreeMap as Map;\n\
         use serde::{Serialize, Deserialize};\n\
         use serde_json::Value as Json;\n\
         use cfnschema_bindgen::resource::{ResourceProperties};\n\
         use cfnschema_bindgen::tag::{Tag};\n\
         use cfnschema_bindgen::types::{Value};\n"
    ));
}

#[test]
fn test_emitted_field() {
    let code = generate("ec2", "crate");
    assert!(code.contains(concat!(
        "    /// Required: true\n",
        "    /// Update type: Mutable\n",
        "    /// See: http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-ec2-security-group-rule.html#cfn-ec2-security-group-rule-ipprotocol\n",
        "    #[serde(rename = \"IpProtocol\", skip_serializing_if = \"Option::is_none\")]\n",
        "    pub ip_protocol: Option<Value>,\n",
    )));
    assert!(code.contains("pub security_group_egress: Option<Vec<SecurityGroup_Egress>>,"));
    assert!(code.contains("pub tags: Option<Vec<Tag>>,"));
    assert!(!code.contains("pub struct Tag "));
}

#[test]
fn test_emitted_resource() {
    let code = generate("s3", "crate");
    assert!(code.contains(concat!(
        "/// AWS::S3::BucketPolicy\n",
        "///\n",
        "/// See: http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-s3-policy.html\n",
        "#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]\n",
        "#[serde(deny_unknown_fields)]\n",
        "pub struct BucketPolicy {\n",
    )));
    assert!(code.contains("pub policy_document: Option<Json>,"));
    assert!(code.contains(concat!(
        "impl ResourceProperties for BucketPolicy {\n",
        "    const RESOURCE_TYPE: &'static str = \"AWS::S3::BucketPolicy\";\n",
        "}\n",
    )));
    // Property types come before the resources using them.
    assert!(code.find("pub struct Bucket_ServerSideEncryptionByDefault").unwrap()
        < code.find("pub struct Bucket_ServerSideEncryptionRule").unwrap());
    assert!(code.find("pub struct Bucket_VersioningConfiguration").unwrap()
        < code.find("pub struct Bucket {").unwrap());
}
