// Copyright (c) Facebook, Inc. and its affiliates
// SPDX-License-Identifier: MIT OR Apache-2.0

//!
//! Rust code generator for CloudFormation property and resource types, derived from
//! serde reflection's generator. Containers are qualified by their service module,
//! fields keep their CloudFormation name through `#[serde(rename)]`, and resource
//! types get a `ResourceProperties` implementation.
//!
use crate::binding::field_ident;
use crate::config::CodeGeneratorConfig;
use crate::error::Result;
use serde_generate::indent::{IndentConfig, IndentedWriter};
use serde_reflection::{Format, Named};
use std::borrow::Cow;
use std::collections::{BTreeMap, HashSet};
use std::io::Write;

/// Service module and Rust type name of a container, e.g. `("ec2", "SecurityGroup_Egress")`.
pub type QualifiedName = (String, String);
pub type Registry = BTreeMap<QualifiedName, Container>;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum ContainerKind {
    PropertyType,
    ResourceType,
}

/// A struct to generate.
#[derive(Clone, Debug, PartialEq)]
pub struct Container {
    /// CloudFormation type name, e.g. `AWS::EC2::SecurityGroup.Egress`.
    pub cfn_type: String,
    pub kind: ContainerKind,
    /// Fields named after the CloudFormation property they hold.
    pub fields: Vec<Named<Format>>,
}

/// Main configuration object for code-generation in Rust.
pub struct CodeGenerator<'a> {
    /// Language-independent configuration.
    config: &'a CodeGeneratorConfig,
    /// Which derive macros should be added (independently from serialization).
    derive_macros: Vec<String>,
    /// Additional block of text added before each new container definition.
    custom_derive_block: Option<String>,
    /// Whether definitions and fields should be marked as `pub`.
    track_visibility: bool,
}

/// Shared state for the code generation of a Rust source file.
struct RustEmitter<'a, T> {
    /// Writer.
    out: IndentedWriter<T>,
    /// Generator.
    generator: &'a CodeGenerator<'a>,
    /// Track which definitions have a known size. (Used to add `Box` types.)
    known_sizes: Cow<'a, HashSet<&'a str>>,
    /// Current namespace (e.g. vec!["ec2", "SecurityGroup"])
    current_namespace: Vec<String>,
}

impl<'a> CodeGenerator<'a> {
    /// Create a Rust code generator for the given config.
    pub fn new(config: &'a CodeGeneratorConfig) -> Self {
        Self {
            config,
            derive_macros: vec!["Clone", "Debug", "Default", "PartialEq"]
                .into_iter()
                .map(String::from)
                .collect(),
            custom_derive_block: Some("#[serde(deny_unknown_fields)]".to_string()),
            track_visibility: true,
        }
    }

    /// Which derive macros should be added (independently from serialization).
    pub fn with_derive_macros(mut self, derive_macros: Vec<String>) -> Self {
        self.derive_macros = derive_macros;
        self
    }

    /// Additional block of text added after `derive_macros` (if any), before each new
    /// container definition.
    pub fn with_custom_derive_block(mut self, custom_derive_block: Option<String>) -> Self {
        self.custom_derive_block = custom_derive_block;
        self
    }

    /// Whether definitions and fields should be marked as `pub`.
    pub fn with_track_visibility(mut self, track_visibility: bool) -> Self {
        self.track_visibility = track_visibility;
        self
    }

    /// Write the containers of the configured service module: property types first,
    /// then resource types.
    pub fn output(&self, out: &mut dyn Write, registry: &Registry) -> Result<()> {
        let module = self.config.module_name.as_str();
        let mut containers: Vec<(&str, &Container)> = registry
            .iter()
            .filter(|((service, _), _)| service == module)
            .map(|((_, name), container)| (name.as_str(), container))
            .collect();
        containers.sort_by(|(a_name, a), (b_name, b)| (a.kind, a_name).cmp(&(b.kind, b_name)));

        let mut known_sizes: HashSet<&str> = self
            .config
            .external_definitions
            .values()
            .flatten()
            .map(String::as_str)
            .collect();
        known_sizes.insert("Json");

        let current_namespace = module.split('.').map(String::from).collect();
        let mut emitter = RustEmitter {
            out: IndentedWriter::new(out, IndentConfig::Space(4)),
            generator: self,
            known_sizes: Cow::Owned(known_sizes),
            current_namespace,
        };

        emitter.output_preamble()?;
        for (name, container) in containers {
            emitter.output_container(name, container)?;
            emitter.known_sizes.to_mut().insert(name);
        }
        Ok(())
    }
}

impl<'a, T> RustEmitter<'a, T>
where
    T: std::io::Write,
{
    fn output_comment(&mut self, name: &str) -> std::io::Result<()> {
        let mut path = self.current_namespace.clone();
        path.push(name.to_string());
        if let Some(doc) = self.generator.config.comments.get(&path) {
            let text = textwrap::indent(doc, "/// ").replace("\n\n", "\n///\n");
            write!(self.out, "\n{}", text)?;
        }
        Ok(())
    }

    fn output_preamble(&mut self) -> std::io::Result<()> {
        let external_names = self
            .generator
            .config
            .external_definitions
            .values()
            .cloned()
            .flatten()
            .collect::<HashSet<_>>();
        writeln!(
            self.out,
            "// Generated by cfnbindgen from the AWS CloudFormation resource specification."
        )?;
        writeln!(self.out, "#![allow(unused_imports, non_camel_case_types)]")?;
        if !external_names.contains("Map") {
            writeln!(self.out, "use std::collections::BTreeMap as Map;")?;
        }
        writeln!(self.out, "use serde::{{Serialize, Deserialize}};")?;
        if !external_names.contains("Json") {
            writeln!(self.out, "use serde_json::Value as Json;")?;
        }
        for (module, definitions) in &self.generator.config.external_definitions {
            // Skip the empty module name.
            if !module.is_empty() {
                writeln!(
                    self.out,
                    "use {}::{{{}}};",
                    module,
                    definitions.to_vec().join(", "),
                )?;
            }
        }
        writeln!(self.out)?;
        Ok(())
    }

    fn output_field_annotation(&mut self, field: &Named<Format>) -> std::io::Result<()> {
        match &field.value {
            Format::Option(_) => writeln!(
                self.out,
                "#[serde(rename = \"{}\", skip_serializing_if = \"Option::is_none\")]",
                field.name
            ),
            _ => writeln!(self.out, "#[serde(rename = \"{}\")]", field.name),
        }
    }

    fn quote_type(format: &Format, known_sizes: Option<&HashSet<&str>>) -> std::io::Result<String> {
        use Format::*;
        let quoted = match format {
            TypeName(x) => {
                if let Some(set) = known_sizes {
                    if !set.contains(x.as_str()) {
                        return Ok(format!("Box<{}>", x));
                    }
                }
                x.to_string()
            }
            Unit => "()".into(),
            Bool => "bool".into(),
            I8 => "i8".into(),
            I16 => "i16".into(),
            I32 => "i32".into(),
            I64 => "i64".into(),
            I128 => "i128".into(),
            U8 => "u8".into(),
            U16 => "u16".into(),
            U32 => "u32".into(),
            U64 => "u64".into(),
            U128 => "u128".into(),
            F32 => "f32".into(),
            F64 => "f64".into(),
            Char => "char".into(),
            Str => "String".into(),
            Bytes => "Vec<u8>".into(),

            Option(format) => format!("Option<{}>", Self::quote_type(format, known_sizes)?),
            Seq(format) => format!("Vec<{}>", Self::quote_type(format, None)?),
            Map { key, value } => format!(
                "Map<{}, {}>",
                Self::quote_type(key, None)?,
                Self::quote_type(value, None)?
            ),
            Tuple(formats) => format!("({})", Self::quote_types(formats, known_sizes)?),
            TupleArray { content, size } => {
                format!("[{}; {}]", Self::quote_type(content, known_sizes)?, *size)
            }

            Variable(_) => {
                return Err(std::io::Error::new(
                    std::io::ErrorKind::InvalidInput,
                    "unresolved format variable",
                ))
            }
        };
        Ok(quoted)
    }

    fn quote_types(
        formats: &[Format],
        known_sizes: Option<&HashSet<&str>>,
    ) -> std::io::Result<String> {
        Ok(formats
            .iter()
            .map(|x| Self::quote_type(x, known_sizes))
            .collect::<std::io::Result<Vec<_>>>()?
            .join(", "))
    }

    fn output_fields(&mut self, fields: &[Named<Format>]) -> std::io::Result<()> {
        let prefix = if self.generator.track_visibility {
            "pub "
        } else {
            ""
        };
        for field in fields {
            self.output_comment(&field.name)?;
            self.output_field_annotation(field)?;
            let quoted = Self::quote_type(&field.value, Some(&self.known_sizes))?;
            writeln!(
                self.out,
                "{}{}: {},",
                prefix,
                field_ident(&field.name),
                quoted,
            )?;
        }
        Ok(())
    }

    fn output_container(&mut self, name: &str, container: &Container) -> std::io::Result<()> {
        self.output_comment(name)?;
        let mut derive_macros = self.generator.derive_macros.clone();
        derive_macros.push("Serialize".to_string());
        derive_macros.push("Deserialize".to_string());
        let mut prefix = String::new();
        if !derive_macros.is_empty() {
            prefix.push_str(&format!("#[derive({})]\n", derive_macros.join(", ")));
        }
        if let Some(text) = &self.generator.custom_derive_block {
            prefix.push_str(text);
            prefix.push('\n');
        }
        if self.generator.track_visibility {
            prefix.push_str("pub ");
        }

        writeln!(self.out, "{}struct {} {{", prefix, name)?;
        self.current_namespace.push(name.to_string());
        self.out.indent();
        self.output_fields(&container.fields)?;
        self.out.unindent();
        self.current_namespace.pop();
        writeln!(self.out, "}}\n")?;

        if container.kind == ContainerKind::ResourceType {
            writeln!(self.out, "impl ResourceProperties for {} {{", name)?;
            self.out.indent();
            writeln!(
                self.out,
                "const RESOURCE_TYPE: &'static str = \"{}\";",
                container.cfn_type
            )?;
            self.out.unindent();
            writeln!(self.out, "}}\n")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn field(name: &str, value: Format) -> Named<Format> {
        Named {
            name: name.to_string(),
            value,
        }
    }

    fn render(registry: &Registry, module: &str) -> String {
        let config = CodeGeneratorConfig::new(module.to_string()).with_runtime_crate("crate");
        let mut out = Vec::new();
        CodeGenerator::new(&config).output(&mut out, registry).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_forward_references_are_boxed() {
        let mut registry = Registry::new();
        registry.insert(
            ("svc".to_string(), "Thing_A".to_string()),
            Container {
                cfn_type: "AWS::Svc::Thing.A".to_string(),
                kind: ContainerKind::PropertyType,
                fields: vec![field(
                    "Next",
                    Format::Option(Box::new(Format::TypeName("Thing_B".to_string()))),
                )],
            },
        );
        registry.insert(
            ("svc".to_string(), "Thing_B".to_string()),
            Container {
                cfn_type: "AWS::Svc::Thing.B".to_string(),
                kind: ContainerKind::PropertyType,
                fields: vec![field(
                    "Previous",
                    Format::Option(Box::new(Format::TypeName("Thing_A".to_string()))),
                )],
            },
        );
        let code = render(&registry, "svc");
        assert!(code.contains("pub next: Option<Box<Thing_B>>,"));
        assert!(code.contains("pub previous: Option<Thing_A>,"));
    }

    #[test]
    fn test_resources_follow_property_types() {
        let mut registry = Registry::new();
        registry.insert(
            ("svc".to_string(), "Alpha".to_string()),
            Container {
                cfn_type: "AWS::Svc::Alpha".to_string(),
                kind: ContainerKind::ResourceType,
                fields: vec![field(
                    "Settings",
                    Format::Option(Box::new(Format::TypeName("Alpha_Settings".to_string()))),
                )],
            },
        );
        registry.insert(
            ("svc".to_string(), "Alpha_Settings".to_string()),
            Container {
                cfn_type: "AWS::Svc::Alpha.Settings".to_string(),
                kind: ContainerKind::PropertyType,
                fields: vec![],
            },
        );
        registry.insert(
            ("other".to_string(), "Ignored".to_string()),
            Container {
                cfn_type: "AWS::Other::Ignored".to_string(),
                kind: ContainerKind::ResourceType,
                fields: vec![],
            },
        );
        let code = render(&registry, "svc");
        let settings = code.find("pub struct Alpha_Settings {").unwrap();
        let alpha = code.find("pub struct Alpha {").unwrap();
        assert!(settings < alpha);
        assert!(code.contains("pub settings: Option<Alpha_Settings>,"));
        assert!(code.contains("impl ResourceProperties for Alpha {"));
        assert!(code.contains("const RESOURCE_TYPE: &'static str = \"AWS::Svc::Alpha\";"));
        assert!(!code.contains("Ignored"));
        assert!(code.contains("use crate::types::{Value};"));
    }

    #[test]
    fn test_custom_derives_and_visibility() {
        let mut registry = Registry::new();
        registry.insert(
            ("svc".to_string(), "Thing".to_string()),
            Container {
                cfn_type: "AWS::Svc::Thing".to_string(),
                kind: ContainerKind::PropertyType,
                fields: vec![field("Name", Format::Str)],
            },
        );
        let config = CodeGeneratorConfig::new("svc".to_string());
        let mut out = Vec::new();
        CodeGenerator::new(&config)
            .with_derive_macros(vec!["Debug".to_string()])
            .with_custom_derive_block(None)
            .with_track_visibility(false)
            .output(&mut out, &registry)
            .unwrap();
        let code = String::from_utf8(out).unwrap();
        assert!(code.contains(
            "#[derive(Debug, Serialize, Deserialize)]\nstruct Thing {\n    #[serde(rename = \"Name\")]\n    name: String,\n}"
        ));
        assert!(code.contains("use cfnschema_bindgen::types::{Value};"));
    }

    #[test]
    fn test_field_annotations() {
        let mut registry = Registry::new();
        registry.insert(
            ("svc".to_string(), "Thing".to_string()),
            Container {
                cfn_type: "AWS::Svc::Thing".to_string(),
                kind: ContainerKind::ResourceType,
                fields: vec![
                    field(
                        "Type",
                        Format::Option(Box::new(Format::TypeName("Value".to_string()))),
                    ),
                    field(
                        "Settings",
                        Format::Map {
                            key: Box::new(Format::Str),
                            value: Box::new(Format::TypeName("Thing_Setting".to_string())),
                        },
                    ),
                ],
            },
        );
        let code = render(&registry, "svc");
        assert!(code.contains(
            "    #[serde(rename = \"Type\", skip_serializing_if = \"Option::is_none\")]\n    pub r#type: Option<Value>,"
        ));
        assert!(code.contains(
            "    #[serde(rename = \"Settings\")]\n    pub settings: Map<String, Thing_Setting>,"
        ));
        assert!(code.contains("#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]\n#[serde(deny_unknown_fields)]\npub struct Thing {"));
    }
}
