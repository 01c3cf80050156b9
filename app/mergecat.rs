//! Command-line interface for mergecat.
//!
//! Collects the selected files under a root directory and merges them into a single
//! text document, or lists the files that would be merged.

use clap::{ArgAction, Parser, ValueEnum};
use mergecat::{
    DecodePolicy, MergecatBuilder, MergecatError, MergecatOptions, ReadErrorPolicy,
    collect_files, mergecat,
};
use std::path::PathBuf;
use std::process::exit;
use tracing::warn;
use tracing_subscriber::EnvFilter;

/// mergecat — merge a source tree into one text file
#[derive(Parser)]
#[command(name = "mergecat", version, about, long_about = None)]
struct Cli {
    /// Root directory (default current dir)
    root: Option<PathBuf>,

    /// Output file, created or truncated on every run (default merged.txt)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Exact file name to include (can be repeated, replaces the defaults)
    #[arg(short = 'n', long = "name")]
    names: Vec<String>,

    /// Glob pattern matched against file names (can be repeated, replaces the defaults)
    #[arg(short = 'g', long = "glob")]
    globs: Vec<String>,

    /// JSON file with options; flags given on the command line take precedence
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Handling of invalid UTF-8 in source files
    #[arg(long, value_parser = parse_decode_policy)]
    decode: Option<DecodePolicy>,

    /// Skip files that cannot be read instead of aborting
    #[arg(long)]
    skip_unreadable: bool,

    /// Operation mode
    #[arg(long, value_enum, default_value_t = Mode::Merge)]
    mode: Mode,

    /// More log output on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// Write the merged document
    Merge,
    /// Print the ordered file list, one path per line
    Paths,
    /// Print the ordered file list as a JSON array
    Json,
}

/// Parse string into DecodePolicy enum.
fn parse_decode_policy(s: &str) -> Result<DecodePolicy, String> {
    match s {
        "strict" => Ok(DecodePolicy::Strict),
        "replace" => Ok(DecodePolicy::Replace),
        "drop" => Ok(DecodePolicy::Drop),
        _ => Err(format!("invalid decode policy: {}", s)),
    }
}

impl Cli {
    fn into_options(self) -> Result<(MergecatOptions, Mode), MergecatError> {
        let base = match &self.config {
            Some(path) => MergecatOptions::from_json_file(path)?,
            None => MergecatOptions::default(),
        };
        let mut builder = MergecatBuilder::from_options(base);
        if let Some(root) = self.root {
            builder = builder.root(root);
        }
        if let Some(output) = self.output {
            builder = builder.output_path(output);
        }
        if !self.names.is_empty() {
            builder = builder.include_names(self.names);
        }
        if !self.globs.is_empty() {
            builder = builder.include_globs(self.globs);
        }
        if let Some(policy) = self.decode {
            builder = builder.decode_policy(policy);
        }
        if self.skip_unreadable {
            builder = builder.on_read_error(ReadErrorPolicy::Skip);
        }
        Ok((builder.build(), self.mode))
    }
}

fn init_logging(verbose: u8, quiet: bool) {
    let level = match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, 2) => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(level))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);
    let (options, mode) = cli.into_options().unwrap_or_else(|e| fail(e));

    match mode {
        Mode::Merge => run_merge(options),
        Mode::Paths | Mode::Json => run_list(&options, mode),
    }
}

fn run_merge(options: MergecatOptions) {
    match mergecat(options) {
        Ok(report) if report.files_written == 0 && report.skipped.is_empty() => {
            warn!("No files matched; the output document is empty");
        }
        Ok(_) => {}
        Err(e) => fail(e),
    }
}

fn run_list(options: &MergecatOptions, mode: Mode) {
    let files = collect_files(options).unwrap_or_else(|e| fail(e));
    if mode == Mode::Json {
        let json = serde_json::to_string_pretty(&files).unwrap_or_else(|e| {
            eprintln!("JSON serialization error: {}", e);
            exit(1);
        });
        println!("{}", json);
        return;
    }
    for file in &files {
        println!("{}", file);
    }
}

fn fail(e: MergecatError) -> ! {
    eprintln!("Error: {}", e);
    exit(1);
}
