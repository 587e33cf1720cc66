//! # CloudFormation Resource Specification to Serde code generator
//!
//! '''bash
//! cargo run --bin cfnbindgen -- --help
//! '''

use cfnschema_bindgen::binding::{
    export_specification_to_registry, generate_serde, read_resource_specification_from_file,
    registry_comments, services, write_services,
};
use cfnschema_bindgen::config::CodeGeneratorConfig;
use cfnschema_bindgen::error::Result;
use std::path::PathBuf;
use structopt::StructOpt;
use tracing_subscriber::EnvFilter;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "CloudFormation specification to Serde transformer",
    about = "Generate code for Serde containers from the CloudFormation Resource Specification"
)]
struct Options {
    /// Path to the JSON-encoded resource specification.
    #[structopt(parse(from_os_str))]
    input: PathBuf,

    /// Only generate the given service (e.g. `EC2`), written to stdout.
    #[structopt(long)]
    service: Option<String>,

    /// Directory receiving one module per service and a `mod.rs`.
    #[structopt(long, parse(from_os_str), default_value = "resources")]
    out_dir: PathBuf,

    /// Path generated modules import runtime types from.
    #[structopt(long, default_value = "cfnschema_bindgen")]
    runtime_crate: String,
}

fn run(options: &Options) -> Result<bool> {
    let spec = read_resource_specification_from_file(&options.input)?;
    tracing::info!(
        version = %spec.resource_specification_version,
        resource_types = spec.resource_types.len(),
        property_types = spec.property_types.len(),
        "read resource specification"
    );
    let registry = export_specification_to_registry(&spec)?;

    match &options.service {
        Some(service) => {
            let service = service.to_lowercase();
            if !services(&registry).contains(&service) {
                tracing::error!(service = %service, "service not found in specification");
                return Ok(false);
            }
            let config = CodeGeneratorConfig::new(service)
                .with_runtime_crate(&options.runtime_crate)
                .with_comments(registry_comments(&spec));
            let stdout = std::io::stdout();
            let mut out = stdout.lock();
            generate_serde(&config, &mut out, &registry)?;
        }
        None => {
            write_services(&options.out_dir, &spec, &registry, &options.runtime_crate)?;
        }
    }
    Ok(true)
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let options = Options::from_args();
    match run(&options) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(err) => {
            tracing::error!(error = %err, "error generating serde model");
            std::process::exit(1);
        }
    }
}
