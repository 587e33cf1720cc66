//! Reading the CloudFormation Resource Specification and exporting it to a
//! [`Registry`] of containers ready for the code emitter.

use crate::config::{CodeGeneratorConfig, DocComments};
use crate::emit::{CodeGenerator, Container, ContainerKind, Registry};
use crate::error::{Error, Result};
use serde::Deserialize;
use serde_json::Value as JsonValue;
use serde_reflection::{Format, Named};
use std::collections::{BTreeMap, BTreeSet};
use std::fs::File;
use std::io::{BufReader, Write};
use std::path::{Path, PathBuf};

pub const RESERVED_WORDS: [&str; 51] = [
    "abstract", "as", "async", "await", "become", "box", "break", "const", "continue", "crate",
    "do", "dyn", "else", "enum", "extern", "false", "final", "fn", "for", "if", "impl", "in",
    "let", "loop", "macro", "match", "mod", "move", "mut", "override", "priv", "pub", "ref",
    "return", "self", "Self", "static", "struct", "super", "trait", "true", "try", "type",
    "typeof", "unsafe", "unsized", "use", "virtual", "where", "while", "yield",
];

// Keywords that cannot be used as raw identifiers.
const NON_RAW_WORDS: [&str; 4] = ["crate", "self", "Self", "super"];

const PRIMITIVE_TYPES: [&str; 5] = ["String", "Long", "Integer", "Double", "Boolean"];

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "PascalCase")]
pub struct ResourceSpecification {
    #[serde(default)]
    pub resource_specification_version: String,
    #[serde(default)]
    pub property_types: BTreeMap<String, TypeSpec>,
    #[serde(default)]
    pub resource_types: BTreeMap<String, TypeSpec>,
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "PascalCase")]
pub struct TypeSpec {
    pub documentation: Option<String>,
    #[serde(default)]
    pub properties: BTreeMap<String, Property>,
    #[serde(default)]
    pub attributes: BTreeMap<String, JsonValue>,
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "PascalCase")]
pub struct Property {
    pub documentation: Option<String>,
    pub primitive_type: Option<String>,
    pub r#type: Option<String>,
    pub item_type: Option<String>,
    pub primitive_item_type: Option<String>,
    pub required: Option<bool>,
    pub update_type: Option<String>,
    pub duplicates_allowed: Option<bool>,
    // Polymorphic properties list their alternatives instead.
    pub primitive_types: Option<Vec<String>>,
    pub primitive_item_types: Option<Vec<String>>,
    pub item_types: Option<Vec<String>>,
    pub types: Option<Vec<String>>,
}

/// Service module, Rust name and optional property part of a CloudFormation type name.
///
/// `AWS::EC2::SecurityGroup.Egress` gives `("ec2", "SecurityGroup", Some("Egress"))`.
/// Names without a `::` separated service, such as the global `Tag`, give `None`.
pub fn split_type_name(cfn_name: &str) -> Option<(String, String, Option<String>)> {
    let (resource, property) = match cfn_name.split_once('.') {
        Some((resource, property)) => (resource, Some(property.to_string())),
        None => (cfn_name, None),
    };
    let parts: Vec<&str> = resource.split("::").collect();
    if parts.len() < 3 || parts.iter().any(|p| p.is_empty()) {
        return None;
    }
    let service = parts[1].to_lowercase();
    let name = parts[2..].concat();
    Some((service, name, property))
}

/// Rust container name of a CloudFormation type: `SecurityGroup` or `SecurityGroup_Egress`.
fn rust_type_name(name: &str, property: Option<&str>) -> String {
    match property {
        Some(property) => format!("{}_{}", name, property),
        None => name.to_string(),
    }
}

/// `GroupDescription` becomes `group_description`, `SSESpecification` becomes
/// `sse_specification`.
pub fn to_snake_case(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut out = String::with_capacity(name.len() + 4);
    for (i, &c) in chars.iter().enumerate() {
        if !c.is_ascii_alphanumeric() {
            if !out.is_empty() && !out.ends_with('_') {
                out.push('_');
            }
            continue;
        }
        if c.is_ascii_uppercase() && i > 0 {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).map_or(false, |n| n.is_ascii_lowercase());
            let boundary = prev.is_ascii_lowercase()
                || prev.is_ascii_digit()
                || (prev.is_ascii_uppercase() && next_is_lower);
            if boundary && !out.is_empty() && !out.ends_with('_') {
                out.push('_');
            }
        }
        out.push(c.to_ascii_lowercase());
    }
    out
}

/// Rust field identifier for a CloudFormation property name.
pub fn field_ident(name: &str) -> String {
    let mut ident = to_snake_case(name);
    if ident.starts_with(|c: char| c.is_ascii_digit()) {
        ident.insert(0, '_');
    }
    if NON_RAW_WORDS.contains(&ident.as_str()) {
        format!("{}_", ident)
    } else if RESERVED_WORDS.contains(&ident.as_str()) {
        format!("r#{}", ident)
    } else {
        ident
    }
}

pub fn read_resource_specification_from_file<P: AsRef<Path>>(
    path: P,
) -> Result<ResourceSpecification> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    Ok(serde_json::from_reader(reader)?)
}

/// Build the registry of every property type and resource type of the specification.
pub fn export_specification_to_registry(spec: &ResourceSpecification) -> Result<Registry> {
    let mut r = Registry::new();

    for (cfn_name, ts) in &spec.property_types {
        let (service, name, property) = match split_type_name(cfn_name) {
            Some(parts) => parts,
            None => {
                // `Tag` is provided by the runtime.
                tracing::debug!(property_type = %cfn_name, "skipping global property type");
                continue;
            }
        };
        if ts.properties.is_empty() {
            tracing::debug!(property_type = %cfn_name, "skipping property type without properties");
            continue;
        }
        let owner = cfn_name.split('.').next().unwrap_or(cfn_name);
        let fields = export_properties(spec, owner, &name, &ts.properties)?;
        let rust_name = rust_type_name(&name, property.as_deref());
        tracing::debug!(property_type = %cfn_name, rust_name = %rust_name, "exported property type");
        r.insert(
            (service, rust_name),
            Container {
                cfn_type: cfn_name.clone(),
                kind: ContainerKind::PropertyType,
                fields,
            },
        );
    }

    for (cfn_name, ts) in &spec.resource_types {
        let (service, name, _) = match split_type_name(cfn_name) {
            Some(parts) => parts,
            None => {
                tracing::warn!(resource_type = %cfn_name, "skipping malformed resource type name");
                continue;
            }
        };
        let fields = export_properties(spec, cfn_name, &name, &ts.properties)?;
        tracing::debug!(resource_type = %cfn_name, rust_name = %name, "exported resource type");
        r.insert(
            (service, name),
            Container {
                cfn_type: cfn_name.clone(),
                kind: ContainerKind::ResourceType,
                fields,
            },
        );
    }
    Ok(r)
}

fn export_properties(
    spec: &ResourceSpecification,
    owner_cfn: &str,
    owner: &str,
    properties: &BTreeMap<String, Property>,
) -> Result<Vec<Named<Format>>> {
    let mut fields = Vec::with_capacity(properties.len());
    for (pn, p) in properties {
        let f = property_format(spec, owner_cfn, owner, pn, p)?;
        fields.push(Named {
            name: pn.clone(),
            value: Format::Option(Box::new(f)),
        });
    }
    Ok(fields)
}

fn primitive_format(property: &str, kind: &str) -> Result<Format> {
    match kind {
        k if PRIMITIVE_TYPES.contains(&k) => Ok(Format::TypeName("Value".to_string())),
        "Timestamp" => Ok(Format::Str),
        "Json" => Ok(Format::TypeName("Json".to_string())),
        other => Err(Error::UnsupportedPropertyType {
            property: property.to_string(),
            kind: other.to_string(),
        }),
    }
}

// A property type referenced from `owner_cfn`, falling back to the runtime `Tag`
// and to `Json` for property types the registry does not carry.
fn property_type_format(
    spec: &ResourceSpecification,
    owner_cfn: &str,
    owner: &str,
    item: &str,
) -> Format {
    let cfn_name = format!("{}.{}", owner_cfn, item);
    match spec.property_types.get(&cfn_name) {
        Some(ts) if !ts.properties.is_empty() => Format::TypeName(rust_type_name(owner, Some(item))),
        None if item == "Tag" => Format::TypeName("Tag".to_string()),
        _ => {
            tracing::debug!(property_type = %cfn_name, "no properties known, using Json");
            Format::TypeName("Json".to_string())
        }
    }
}

fn property_format(
    spec: &ResourceSpecification,
    owner_cfn: &str,
    owner: &str,
    name: &str,
    p: &Property,
) -> Result<Format> {
    let qualified = format!("{}.{}", owner_cfn, name);
    if let Some(primitive) = &p.primitive_type {
        return primitive_format(&qualified, primitive);
    }
    let f = match p.r#type.as_deref() {
        Some(container @ ("List" | "Map")) => {
            let item = match (&p.primitive_item_type, &p.item_type) {
                (Some(primitive), _) => {
                    // Lists and maps of primitives may hold intrinsic functions anywhere.
                    primitive_format(&qualified, primitive)?;
                    return Ok(Format::TypeName("Value".to_string()));
                }
                (None, Some(item)) => property_type_format(spec, owner_cfn, owner, item),
                (None, None) => Format::TypeName("Json".to_string()),
            };
            if container == "List" {
                Format::Seq(Box::new(item))
            } else {
                Format::Map {
                    key: Box::new(Format::Str),
                    value: Box::new(item),
                }
            }
        }
        Some(item) => property_type_format(spec, owner_cfn, owner, item),
        // Untyped and polymorphic properties accept any JSON.
        None => Format::TypeName("Json".to_string()),
    };
    Ok(f)
}

/// Doc comments for every exported container and field, keyed by
/// `[service, rust name]` and `[service, rust name, property name]`.
pub fn registry_comments(spec: &ResourceSpecification) -> DocComments {
    let mut comments = DocComments::new();
    let types = spec.property_types.iter().chain(spec.resource_types.iter());
    for (cfn_name, ts) in types {
        let (service, name, property) = match split_type_name(cfn_name) {
            Some(parts) => parts,
            None => continue,
        };
        let rust_name = rust_type_name(&name, property.as_deref());
        let mut doc = cfn_name.clone();
        if let Some(url) = &ts.documentation {
            doc.push_str(&format!("\n\nSee: {}", url));
        }
        comments.insert(vec![service.clone(), rust_name.clone()], doc);

        for (pn, p) in &ts.properties {
            let mut lines = vec![format!("Required: {}", p.required.unwrap_or(false))];
            if let Some(update_type) = &p.update_type {
                lines.push(format!("Update type: {}", update_type));
            }
            if let Some(url) = &p.documentation {
                lines.push(format!("See: {}", url));
            }
            comments.insert(
                vec![service.clone(), rust_name.clone(), pn.clone()],
                lines.join("\n"),
            );
        }
    }
    comments
}

/// Service modules present in the registry, in order.
pub fn services(registry: &Registry) -> Vec<String> {
    registry
        .keys()
        .map(|(service, _)| service.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

pub fn generate_serde(
    config: &CodeGeneratorConfig,
    out: &mut dyn Write,
    registry: &Registry,
) -> Result<()> {
    CodeGenerator::new(config).output(out, registry)
}

/// Write one `<service>.rs` module per service plus a `mod.rs` declaring them.
pub fn write_services(
    out_dir: &Path,
    spec: &ResourceSpecification,
    registry: &Registry,
    runtime_crate: &str,
) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(out_dir)?;
    let comments = registry_comments(spec);
    let mut written = Vec::new();
    let mut mod_rs = String::new();

    for service in services(registry) {
        let config = CodeGeneratorConfig::new(service.clone())
            .with_runtime_crate(runtime_crate)
            .with_comments(comments.clone());
        let path = out_dir.join(format!("{}.rs", service));
        let mut file = File::create(&path)?;
        generate_serde(&config, &mut file, registry)?;
        tracing::info!(service = %service, path = %path.display(), "wrote service module");
        mod_rs.push_str(&format!("pub mod {};\n", service));
        written.push(path);
    }

    let path = out_dir.join("mod.rs");
    std::fs::write(&path, mod_rs)?;
    tracing::info!(path = %path.display(), "wrote module index");
    written.push(path);
    Ok(written)
}
