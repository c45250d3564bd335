//! arconst
//!
//! Command-line front end for the AUTOSAR constant-value model: prints
//! initializer text, pre-order tag listings, C definitions, or the dictionary
//! view of constants stored as JSON.

use anyhow::{Context, Result};
use arconst_codegen::{DefinitionStyle, Generator, GeneratorConfig, initializer_string};
use arconst_ir::{Constant, SchemaVersion, constants_from_json};
use clap::{Parser, Subcommand, ValueEnum};
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Debug, Parser)]
#[command(name = "arconst", version, about = "AUTOSAR constant initializer tool")]
struct Cli {
    /// Enable debug logging on stderr (`RUST_LOG` takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the initializer text of each constant's root value
    Init {
        /// JSON document with one constant or a list (`-` for stdin)
        input: PathBuf,
    },

    /// Print the element tags of each constant in pre-order
    Tags {
        input: PathBuf,

        /// Schema version, e.g. 3.0.2 or 4.2.2
        #[arg(long, default_value = "4.0")]
        schema: SchemaVersion,
    },

    /// Render C definitions for every constant
    Generate {
        input: PathBuf,

        #[arg(long, default_value = "4.0")]
        schema: SchemaVersion,

        #[arg(long, value_enum, default_value_t = StyleArg::Const)]
        style: StyleArg,

        /// C type for constants whose root value has no type reference
        #[arg(long)]
        default_type: Option<String>,

        /// Prefix for macro names in define style
        #[arg(long, default_value = "")]
        prefix: String,

        #[arg(long)]
        no_comments: bool,
    },

    /// Print the dictionary view of each constant as JSON
    Dump { input: PathBuf },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum StyleArg {
    Const,
    Define,
}

impl From<StyleArg> for DefinitionStyle {
    fn from(style: StyleArg) -> Self {
        match style {
            StyleArg::Const => DefinitionStyle::Const,
            StyleArg::Define => DefinitionStyle::Define,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Init { input } => {
            for constant in load(&input)? {
                let text = initializer_string(constant.value())
                    .with_context(|| format!("constant '{}'", constant.name()))?;
                println!("{} {}", constant.name(), text);
            }
        }
        Command::Tags { input, schema } => {
            for constant in load(&input)? {
                constant
                    .check_schema(schema)
                    .with_context(|| format!("constant '{}'", constant.name()))?;
                for (depth, tag) in constant.tags(schema) {
                    println!("{}{}", "  ".repeat(depth), tag);
                }
            }
        }
        Command::Generate {
            input,
            schema,
            style,
            default_type,
            prefix,
            no_comments,
        } => {
            let mut config = GeneratorConfig::new()
                .with_schema_version(schema)
                .with_style(style.into())
                .with_macro_prefix(prefix);
            if let Some(type_name) = default_type {
                config = config.with_default_type(type_name);
            }
            if no_comments {
                config = config.without_comments();
            }

            let constants = load(&input)?;
            let unit = Generator::new(config)
                .generate(&constants)
                .context("generation failed")?;
            print!("{}", unit.source);
        }
        Command::Dump { input } => {
            let dicts = load(&input)?
                .iter()
                .map(Constant::asdict)
                .collect::<Result<Vec<_>, _>>()?;
            println!("{}", serde_json::to_string_pretty(&dicts)?);
        }
    }

    Ok(())
}

fn load(input: &Path) -> Result<Vec<Constant>> {
    let json = if input.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read stdin")?;
        buf
    } else {
        std::fs::read_to_string(input)
            .with_context(|| format!("failed to read {}", input.display()))?
    };
    let constants = constants_from_json(&json)
        .with_context(|| format!("invalid constant document {}", input.display()))?;
    tracing::debug!(count = constants.len(), "loaded input");
    Ok(constants)
}
