// SPDX-FileCopyrightText: 2026 Stanislaw Grams <stanislawgrams@gmail.com>
//
// SPDX-License-Identifier: BSD-2-Clause

use std::fs::File;
use std::io::{self, BufReader, BufWriter};
use std::path::{Path, PathBuf};

use clap::Parser;
use tracing::info;

mod config;
mod pipeline;

use crate::config::FramedecConfig;
use crate::pipeline::{run, DecodeSettings, OutputFormat};
use framedec_app::init_logging;
use framedec_core::{DecodePolicy, FrameKind};

pub type DynResult<T> = Result<T, Box<dyn std::error::Error + Send + Sync>>;

const PKG_DESCRIPTION: &str = concat!(env!("CARGO_PKG_NAME"), " - ", env!("CARGO_PKG_DESCRIPTION"));

#[derive(Debug, Parser)]
#[command(
    author = env!("CARGO_PKG_AUTHORS"),
    version = env!("CARGO_PKG_VERSION"),
    about = PKG_DESCRIPTION
)]
struct Cli {
    /// Path to configuration file
    #[arg(short = 'C', long = "config", value_name = "FILE")]
    config: Option<PathBuf>,
    /// Print example configuration and exit
    #[arg(long = "print-config")]
    print_config: bool,
    /// Frame kind for every record (beacon, metadata, range, extended);
    /// when omitted each record's "type" field selects the kind
    #[arg(short = 'k', long = "kind")]
    kind: Option<FrameKind>,
    /// Decode missing or mistyped fields as zero values instead of failing
    #[arg(long = "lenient")]
    lenient: bool,
    /// Log level (trace, debug, info, warn, error)
    #[arg(long = "log-level")]
    log_level: Option<String>,
    /// Output format
    #[arg(short = 'f', long = "format", value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
    /// Newline-delimited JSON records; reads stdin when omitted or "-"
    #[arg(value_name = "INPUT")]
    input: Option<PathBuf>,
}

fn main() -> DynResult<()> {
    let cli = Cli::parse();

    if cli.print_config {
        println!("{}", FramedecConfig::example_toml());
        return Ok(());
    }

    let (mut cfg, config_path) = if let Some(ref path) = cli.config {
        let cfg = FramedecConfig::load_from_file(path)?;
        (cfg, Some(path.clone()))
    } else {
        FramedecConfig::load_from_default_paths()?
    };

    if cli.log_level.is_some() {
        cfg.general.log_level = cli.log_level.clone();
    }
    if cli.kind.is_some() {
        cfg.decode.kind = cli.kind;
    }
    if cli.lenient {
        cfg.decode.policy = DecodePolicy::Lenient;
    }
    cfg.validate()
        .map_err(|e| format!("Invalid configuration: {}", e))?;

    init_logging(cfg.general.log_level.as_deref());

    if let Some(ref path) = config_path {
        info!("Loaded configuration from {}", path.display());
    }
    match cfg.decode.kind {
        Some(kind) => info!(
            "Decoding records as {} frames ({:?} policy)",
            kind, cfg.decode.policy
        ),
        None => info!(
            "Decoding records by their \"type\" field ({:?} policy)",
            cfg.decode.policy
        ),
    }

    let settings = DecodeSettings::from_config(&cfg.decode, cli.format);
    let output = BufWriter::new(io::stdout().lock());
    let summary = match cli.input.as_deref() {
        Some(path) if path != Path::new("-") => {
            let file = File::open(path)
                .map_err(|e| format!("Failed to open input {}: {}", path.display(), e))?;
            run(BufReader::new(file), output, &settings)?
        }
        _ => run(io::stdin().lock(), output, &settings)?,
    };

    info!(
        "Finished: {} decoded, {} failed",
        summary.decoded, summary.failed
    );
    Ok(())
}
