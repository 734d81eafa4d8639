//! anytone: inspect and edit Anytone codeplug (.rdt) files
//!
//! Radio IDs are numbered from 1, as printed by `anytone info`.

use anytone_rs::codeplug::{Codeplug, CodeplugError, CodeplugInfo, KNOWN_MODELS};
use anytone_rs::formats::{load_codeplug, save_codeplug};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{fmt::format::FmtSpan, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log debug output (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Display information about a codeplug
    Info {
        /// Path to the codeplug file
        codeplug_file: PathBuf,

        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show all radio IDs, or one by number
    Get {
        /// Path to the codeplug file
        codeplug_file: PathBuf,

        /// Radio ID number (starting at 1)
        number: Option<usize>,
    },

    /// Update a radio ID and write the codeplug back
    Set {
        /// Path to the codeplug file
        codeplug_file: PathBuf,

        /// Radio ID number (starting at 1)
        number: usize,

        /// New radio ID (1-16777215)
        radio_id: u32,

        /// Write to this file instead of overwriting the input
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Hex dump of the radio ID section
    Section {
        /// Path to the codeplug file
        codeplug_file: PathBuf,
    },

    /// List recognized radio models
    Models,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose)?;

    match cli.command {
        Commands::Info {
            codeplug_file,
            json,
        } => {
            let (codeplug, metadata) = load_codeplug(&codeplug_file)?;
            let info = CodeplugInfo::new(&codeplug, &metadata);
            if json {
                println!("{}", info.to_json()?);
            } else {
                println!();
                print!("{}", info);
            }
        }
        Commands::Get {
            codeplug_file,
            number,
        } => {
            let (codeplug, _) = load_codeplug(&codeplug_file)?;
            print_radio_ids(&codeplug, number)?;
        }
        Commands::Set {
            codeplug_file,
            number,
            radio_id,
            output,
        } => {
            let (codeplug, _) = load_codeplug(&codeplug_file)?;
            let updated = codeplug.with_radio_id(number, radio_id)?;
            let target = output.unwrap_or_else(|| codeplug_file.clone());
            save_codeplug(&target, &updated)?;
            println!(
                "Successfully updated radio ID at index {} to {} in {}",
                number,
                radio_id,
                target.display()
            );
        }
        Commands::Section { codeplug_file } => {
            let (codeplug, _) = load_codeplug(&codeplug_file)?;
            let bounds = codeplug.section_bounds()?;
            println!(
                "Radio ID section: 0x{:08X}..0x{:08X} ({} bytes)",
                bounds.start,
                bounds.end,
                bounds.len()
            );
            print!("{}", codeplug.section_dump()?);
        }
        Commands::Models => {
            for model in KNOWN_MODELS {
                println!("{:<22} {}", model.full_name(), model.description);
            }
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) -> anyhow::Result<()> {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter_layer =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(default_level))?;

    let format_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::NONE)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(format_layer)
        .init();
    Ok(())
}

fn print_radio_ids(codeplug: &Codeplug, number: Option<usize>) -> Result<(), CodeplugError> {
    match number {
        Some(number) => {
            let record = codeplug.radio_id(number)?;
            println!("{}: {}", number, record.value);
        }
        None => {
            for (i, record) in codeplug.radio_ids()?.iter().enumerate() {
                println!("{}: {} (offset 0x{:08X})", i + 1, record.value, record.offset);
            }
        }
    }
    Ok(())
}
