//! Command-line interface for xsd-extract

#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};

#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
use xsd_extract::{ExtractConfig, RequestSpecification, SchemaIndex};

#[cfg(feature = "cli")]
#[derive(Parser, Debug)]
#[command(name = "xsd-extract")]
#[command(author, version, about = "Extract type definitions and their dependencies from a WSDL/XSD schema", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[cfg(feature = "cli")]
#[derive(Subcommand, Debug)]
enum Commands {
    /// Extract requested types plus their transitive dependencies into a
    /// copy of the base template
    Extract {
        /// Path to the full source schema (e.g. metadata.xml)
        #[arg(short, long, value_name = "SCHEMA")]
        source: PathBuf,

        /// Path to the base template schema (e.g. base.xml)
        #[arg(short, long, value_name = "TEMPLATE")]
        template: PathBuf,

        /// Output file for the emitted fragment
        #[arg(short, long, default_value = "output.xml")]
        output: PathBuf,

        /// Requested root type (repeatable; overrides the default list)
        #[arg(short = 'T', long = "type", value_name = "NAME")]
        types: Vec<String>,

        /// JSON file with the requested types (array or {"types": [...]})
        #[arg(long, value_name = "FILE", conflicts_with = "types")]
        types_file: Option<PathBuf>,
    },

    /// List every type name available in the source schema
    #[command(name = "list-types")]
    ListTypes {
        /// Path to the full source schema
        #[arg(short, long, value_name = "SCHEMA")]
        source: PathBuf,

        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },
}

#[cfg(feature = "cli")]
fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Extract {
            source,
            template,
            output,
            types,
            types_file,
        } => cmd_extract(source, template, output, types, types_file),
        Commands::ListTypes { source, json } => cmd_list_types(source, json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

#[cfg(feature = "cli")]
fn cmd_extract(
    source: PathBuf,
    template: PathBuf,
    output: PathBuf,
    types: Vec<String>,
    types_file: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    let request = if let Some(path) = types_file {
        RequestSpecification::from_json_file(path)?
    } else if !types.is_empty() {
        RequestSpecification::new(types)
    } else {
        RequestSpecification::default()
    };

    println!("Processing {} requested types:", request.len());
    for name in request.roots() {
        println!("  - {}", name);
    }

    let report = ExtractConfig::new(source, template)
        .with_output(output)
        .with_request(request)
        .run()?;

    println!();
    for root in &report.roots {
        println!("{}: {} types discovered", root.name, root.discovered);
    }

    println!();
    println!("Total unique types: {}", report.total());
    for name in &report.closure {
        println!("  - {}", name);
    }

    println!();
    println!("Output written to: {}", report.output.display());

    Ok(())
}

#[cfg(feature = "cli")]
fn cmd_list_types(source: PathBuf, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let index = SchemaIndex::from_file(&source)?;

    if json {
        let types: Vec<serde_json::Value> = index
            .definitions()
            .map(|def| {
                serde_json::json!({
                    "name": def.name(),
                    "kind": def.kind().as_str(),
                })
            })
            .collect();
        let json_str = serde_json::to_string_pretty(&serde_json::Value::Array(types))?;
        println!("{}", json_str);
    } else {
        println!("Available types in {}:", source.display());
        for def in index.definitions() {
            println!("  {} ({})", def.name(), def.kind().as_str());
        }
        println!();
        println!("Total: {} types", index.len());
    }

    Ok(())
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("CLI feature not enabled. Rebuild with --features cli");
    std::process::exit(1);
}
