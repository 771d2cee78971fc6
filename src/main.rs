//! inifile command-line entry point
//!
//! Parses an INI file and prints either an overview of its sections or a
//! single typed property value.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use inifile::options::load_options;
use inifile::{IniConfig, IniOptions, GLOBAL_SECTION};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// inifile: inspect INI files
///
/// Parses an INI file with configurable rules (comment marker, inline
/// comments, quoting, case folding, ...) and prints its structure or one
/// property interpreted as a string, bool, integer or float.
#[derive(Parser, Debug)]
#[command(name = "inifile")]
#[command(version)]
#[command(about = "Inspect INI files with typed property access", long_about = None)]
struct Cli {
    /// Path to the INI file
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// TOML file with parser options (kebab-case option names)
    #[arg(short, long, value_name = "TOML")]
    options: Option<PathBuf>,

    /// Section to list, or to read --property from
    #[arg(short, long)]
    section: Option<String>,

    /// Property to print (looked up in the global section without --section)
    #[arg(short, long)]
    property: Option<String>,

    /// How to interpret the property value
    #[arg(long = "as", value_enum, default_value_t = ValueType::String)]
    value_type: ValueType,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

/// Target types for `--as`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ValueType {
    String,
    Bool,
    Int,
    Uint,
    Float,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let options = match &cli.options {
        Some(path) => load_options(path)
            .with_context(|| format!("Failed to load options from {}", path.display()))?,
        None => IniOptions::default(),
    };

    tracing::info!("Parsing INI file: {}", cli.file.display());
    let config = IniConfig::from_path_with_options(&cli.file, options)
        .with_context(|| format!("Failed to parse {}", cli.file.display()))?;

    match (cli.section.as_deref(), cli.property.as_deref()) {
        (section, Some(property)) => print_property(
            &config,
            section.unwrap_or(GLOBAL_SECTION),
            property,
            cli.value_type,
        ),
        (Some(section), None) => print_section(&config, section),
        (None, None) => {
            print_overview(&config);
            Ok(())
        }
    }
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("inifile=info,warn"),
            1 => EnvFilter::new("inifile=debug,info"),
            2 => EnvFilter::new("inifile=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Prints one property converted to the requested type
fn print_property(
    config: &IniConfig,
    section: &str,
    property: &str,
    value_type: ValueType,
) -> Result<()> {
    let rendered = match value_type {
        ValueType::String => config.get(section, property)?.to_string(),
        ValueType::Bool => config.get_bool(section, property)?.to_string(),
        ValueType::Int => config.get_i64(section, property)?.to_string(),
        ValueType::Uint => config.get_u64(section, property)?.to_string(),
        ValueType::Float => config.get_f64(section, property)?.to_string(),
    };

    println!("{}", rendered);
    Ok(())
}

/// Prints every property of one section, sorted by name
fn print_section(config: &IniConfig, name: &str) -> Result<()> {
    let section = config.section(name)?;

    let mut properties: Vec<&str> = section.property_names().collect();
    properties.sort_unstable();

    for property in properties {
        println!("{} = {}", property, section.get(property)?);
    }

    Ok(())
}

/// Prints each section with its property count
fn print_overview(config: &IniConfig) {
    let mut sections: Vec<&str> = config.section_names().collect();
    sections.sort_unstable();

    for name in sections {
        let count = config.store().property_names(name).count();
        if name == GLOBAL_SECTION {
            println!("(global): {} properties", count);
        } else {
            println!("[{}]: {} properties", name, count);
        }
    }

    println!(
        "Total: {} sections, {} properties",
        config.store().section_count(),
        config.store().property_count()
    );
}
