// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use deepeq::document::Decoder;
use deepeq::{first_mismatch, is_deep_equal_with, Mismatch, Value, VisitCounter};
use tracing_subscriber::EnvFilter;
use walkdir::WalkDir;

const EXTENSIONS: [&str; 3] = ["json", "yaml", "yml"];

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_mismatch(m: &Mismatch) {
    println!("{m}");
    match (&m.left, &m.right) {
        (Value::String(l), Value::String(r)) => {
            println!("{}", prettydiff::diff_chars(l, r));
        }
        (l, r) => {
            println!("  left:  {l}");
            println!("  right: {r}");
        }
    }
}

fn compare(left: &Path, right: &Path, stats: bool) -> Result<ExitCode> {
    // Shared so that equally named symbols and functions match across files.
    let mut decoder = Decoder::new();
    let a = decoder.load(left)?;
    let b = decoder.load(right)?;

    let equal = match first_mismatch(&a, &b) {
        None => {
            println!("equal");
            true
        }
        Some(m) => {
            print_mismatch(&m);
            false
        }
    };

    if stats {
        let mut counter = VisitCounter::new();
        is_deep_equal_with(&a, &b, &mut counter);
        for (category, count) in counter.iter() {
            println!("{category}: {count}");
        }
        println!("total: {}", counter.total());
    }

    Ok(if equal {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn documents(root: &Path) -> Result<Vec<PathBuf>> {
    let mut files = vec![];
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry.with_context(|| format!("failed to walk {}", root.display()))?;
        let path = entry.path();
        let is_document = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| EXTENSIONS.contains(&e));
        if entry.file_type().is_file() && is_document {
            files.push(path.strip_prefix(root)?.to_path_buf());
        }
    }
    Ok(files)
}

fn compare_dirs(left: &Path, right: &Path) -> Result<ExitCode> {
    let left_files = documents(left)?;
    let right_files = documents(right)?;
    let mut differences = 0usize;

    for file in &left_files {
        let other = right.join(file);
        if !other.is_file() {
            println!("{}: missing on the right", file.display());
            differences += 1;
            continue;
        }
        let mut decoder = Decoder::new();
        let a = decoder.load(left.join(file))?;
        let b = decoder.load(&other)?;
        if let Some(m) = first_mismatch(&a, &b) {
            println!("{}: {m}", file.display());
            differences += 1;
        }
    }
    for file in right_files.iter().filter(|f| !left.join(f).is_file()) {
        println!("{}: missing on the left", file.display());
        differences += 1;
    }

    log::info!(
        "compared {} files, {differences} different",
        left_files.len()
    );
    Ok(if differences == 0 {
        println!("equal");
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn show(file: &Path) -> Result<ExitCode> {
    let value = Decoder::new().load(file)?;
    println!("{value:#?}");
    Ok(ExitCode::SUCCESS)
}

#[derive(Subcommand)]
enum DeepEqCommand {
    /// Compare two documents.
    Compare {
        /// Left document. json or yaml.
        left: PathBuf,

        /// Right document. json or yaml.
        right: PathBuf,

        /// Print the number of compared pairs per category.
        #[arg(long, short)]
        stats: bool,
    },

    /// Compare every document in two directory trees.
    CompareDirs {
        /// Left directory.
        left: PathBuf,

        /// Right directory.
        right: PathBuf,
    },

    /// Print a decoded document.
    Show {
        /// Document. json or yaml.
        file: PathBuf,
    },
}

#[derive(clap::Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase log verbosity. RUST_LOG takes precedence.
    #[arg(long, short, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: DeepEqCommand,
}

fn main() -> Result<ExitCode> {
    // Parse and dispatch command.
    let cli = Cli::parse();
    init_logging(cli.verbose);
    match cli.command {
        DeepEqCommand::Compare { left, right, stats } => compare(&left, &right, stats),
        DeepEqCommand::CompareDirs { left, right } => compare_dirs(&left, &right),
        DeepEqCommand::Show { file } => show(&file),
    }
}
