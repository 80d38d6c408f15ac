//! Command-line interface for treedump.
//!
//! Walks a directory tree and writes every file's text into one dump file.

use clap::Parser;
use std::io;
use std::path::PathBuf;
use std::process::exit;
use treedump::{DumpOptions, Overrides, dump, dump_into};

/// treedump — concatenate a directory tree into one text file
#[derive(Parser)]
#[command(name = "treedump", version, about, long_about = None)]
struct Cli {
    /// Root directory (default current dir)
    root: Option<PathBuf>,

    /// Output file, or `-` for stdout (default project_contents.txt)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Names to skip, matched exactly against file and directory names (can be repeated)
    #[arg(short, long = "skip")]
    skip: Vec<String>,

    /// Start from an empty skip list; a config file's list still applies
    #[arg(long)]
    no_default_skips: bool,

    /// JSON file with root, skip and output; command-line arguments take precedence
    #[arg(long)]
    config: Option<PathBuf>,

    /// Debug logging (needs the `logging` feature)
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn into_options(self) -> Result<DumpOptions, treedump::TreedumpError> {
        Overrides {
            config: self.config,
            no_default_skips: self.no_default_skips,
            root: self.root,
            output: self.output,
            skip: self.skip,
        }
        .resolve()
    }
}

#[cfg(feature = "logging")]
fn init_logging(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(io::stderr)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Warning: Failed to initialise logging: {}", e);
    }
}

fn main() {
    let cli = Cli::parse();
    #[cfg(feature = "logging")]
    init_logging(cli.verbose);
    #[cfg(not(feature = "logging"))]
    if cli.verbose {
        eprintln!("Warning: --verbose has no effect; built without the `logging` feature");
    }

    let options = match cli.into_options() {
        Ok(options) => options,
        Err(e) => {
            eprintln!("Error: {}", e);
            exit(1);
        }
    };

    let result = if options.output.as_os_str() == "-" {
        dump_into(&options, io::stdout().lock())
    } else {
        dump(&options)
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        exit(1);
    }
}
