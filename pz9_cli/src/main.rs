mod batch;
mod inputs;
mod inspect;
mod output;

use std::io;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::{ArgAction, Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use pz9_core::{NoSpeciesNames, SpeciesNames};
use pz9_species::pokeapi::DEFAULT_SPECIES_URL;
use pz9_species::{table_for, SourceConfig};

use crate::batch::{run_batch, NameLoading};
use crate::inputs::gather_inputs;
use crate::inspect::run_inspect;

// ── CLI definition ─────────────────────────────────────────────────────────

#[derive(Parser)]
#[command(
    name = "pz9",
    about = "Decode .pz9/.pa9 creature records: species, nickname, OT, TID7 and SID7",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    decode: DecodeArgs,

    /// Increase log verbosity (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode records and print a summary block per record (the default)
    Decode(DecodeArgs),
    /// Hex-dump one record with its decoded field ranges
    Inspect {
        /// Record file to dump
        file: PathBuf,
        /// Also list every UTF-16LE string found in the record
        #[arg(long)]
        strings: bool,
    },
}

#[derive(Args, Clone, Debug)]
struct DecodeArgs {
    /// Record files or directories to scan (default: current directory)
    inputs: Vec<PathBuf>,
    /// Write one JSON file per record into DIR (bare flag: "outdir")
    #[arg(long, value_name = "DIR", num_args = 0..=1, default_missing_value = "outdir")]
    out: Option<PathBuf>,
    /// Skip the species-name fetch; species print as numeric ids
    #[arg(long)]
    offline: bool,
    /// Read species names from a local JSON map instead of the network
    #[arg(long, value_name = "FILE", env = "PZ9_SPECIES_MAP")]
    species_map: Option<PathBuf>,
    /// Species list endpoint (PokeAPI-compatible)
    #[arg(long, value_name = "URL", env = "PZ9_SPECIES_URL", default_value = DEFAULT_SPECIES_URL)]
    species_url: String,
    /// Upper bound on the species fetch, in seconds
    #[arg(long, value_name = "SECS", default_value_t = 5)]
    species_timeout: u64,
}

// ── Helpers ────────────────────────────────────────────────────────────────

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();
}

fn species_names(args: &DecodeArgs) -> Box<dyn SpeciesNames> {
    if args.offline {
        return Box::new(NoSpeciesNames);
    }
    let config = match &args.species_map {
        Some(path) => SourceConfig::File(path.clone()),
        None => SourceConfig::Http {
            url: args.species_url.clone(),
            timeout: Duration::from_secs(args.species_timeout),
        },
    };
    Box::new(table_for(config))
}

// ── Subcommand implementations ─────────────────────────────────────────────

fn run_decode(args: DecodeArgs) -> anyhow::Result<()> {
    let roots = if args.inputs.is_empty() {
        vec![PathBuf::from(".")]
    } else {
        args.inputs.clone()
    };

    let files = gather_inputs(&roots)?;
    if files.is_empty() {
        anyhow::bail!("no .pz9 or .pa9 files found in {:?}", roots);
    }

    if let Some(dir) = &args.out {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("creating output directory {:?}", dir))?;
    }

    let names = species_names(&args);
    let loading = if args.offline {
        NameLoading::Skip
    } else {
        NameLoading::Load
    };

    let stdout = io::stdout();
    let stderr = io::stderr();
    let report = run_batch(
        &files,
        names.as_ref(),
        loading,
        args.out.as_deref(),
        &mut stdout.lock(),
        &mut stderr.lock(),
    );

    if report.failed > 0 || report.export_failures > 0 || report.console_failures > 0 {
        tracing::warn!(
            failed = report.failed,
            export_failures = report.export_failures,
            console_failures = report.console_failures,
            "some records were not processed"
        );
    }
    Ok(())
}

// ── Entry point ────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Some(Commands::Decode(args)) => run_decode(args),
        Some(Commands::Inspect { file, strings }) => {
            run_inspect(&file, strings, &mut io::stdout().lock())
        }
        None => run_decode(cli.decode),
    }
}
