//! Bytekit CLI - FNV-1a hashing and whole-file loading
//!
//! Thin command-line front end over the bytekit library.

use bytekit::config::{CliArgs, Commands, HashWidth, OutputFormat};
use bytekit::error::Result;
use bytekit::hash::{benchmark_widths, hash_bytes, hash_files_parallel};
use bytekit::time::nanos_now;
use clap::Parser;
use humansize::{format_size, BINARY};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .init();

    let args = CliArgs::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: CliArgs) -> Result<()> {
    match &args.command {
        Commands::Hash {
            paths,
            width,
            format,
        } => cmd_hash(paths, *width, *format),
        Commands::Measure { path } => cmd_measure(path, args.verbose),
        Commands::Load { path, format } => cmd_load(path, *format),
        Commands::Bench { size } => cmd_bench(*size, args.quiet),
    }
}

fn cmd_hash(paths: &[PathBuf], width: HashWidth, format: OutputFormat) -> Result<()> {
    let path_refs: Vec<&Path> = paths.iter().map(PathBuf::as_path).collect();
    let results = hash_files_parallel(&path_refs, width);

    match format {
        OutputFormat::Json => {
            let mut reports = Vec::new();
            for (path, result) in paths.iter().zip(results) {
                let digest = result?;
                reports.push(serde_json::json!({
                    "path": path.display().to_string(),
                    "width": digest.width.name(),
                    "hash": digest.hash,
                    "size": digest.size,
                }));
            }
            println!("{}", serde_json::to_string_pretty(&reports)?);
        }
        OutputFormat::Text => {
            let mut failures = 0;
            for (path, result) in paths.iter().zip(results) {
                match result {
                    Ok(digest) => println!("{}  {}", digest, path.display()),
                    Err(e) => {
                        eprintln!("bytekit: {}", e);
                        failures += 1;
                    }
                }
            }
            if failures > 0 {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}

fn cmd_measure(path: &Path, verbose: u8) -> Result<()> {
    let needed = bytekit::fs::measure(path)?;

    if verbose > 0 {
        println!(
            "{} ({} content + 1 terminator byte)",
            needed,
            format_size((needed - 1) as u64, BINARY)
        );
    } else {
        println!("{}", needed);
    }

    Ok(())
}

fn cmd_load(path: &Path, format: OutputFormat) -> Result<()> {
    let buf = bytekit::fs::load(path)?;
    let content = &buf[..buf.len() - 1];

    let fnv32 = hash_bytes(content, HashWidth::Fnv32);
    let fnv64 = hash_bytes(content, HashWidth::Fnv64);

    match format {
        OutputFormat::Json => {
            let report = serde_json::json!({
                "path": path.display().to_string(),
                "bytes": content.len(),
                "loaded": buf.len(),
                "fnv32": fnv32.hash,
                "fnv64": fnv64.hash,
            });
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Text => {
            println!(
                "Loaded {}: {} + 1 terminator byte",
                path.display(),
                format_size(content.len() as u64, BINARY)
            );
            println!("FNV-1a/32: {}", fnv32);
            println!("FNV-1a/64: {}", fnv64);
        }
    }

    Ok(())
}

fn cmd_bench(size: usize, quiet: bool) -> Result<()> {
    if !quiet {
        println!("=== Bytekit Benchmark ===");
        println!(
            "Data size: {}\n",
            format_size(size as u64, BINARY)
        );
    }

    let started = nanos_now();
    let results = benchmark_widths(size);

    for (width, duration, throughput) in &results {
        println!("{:<10} {:>12.1?} {:>10.0} MB/s", width.name(), duration, throughput);
    }

    if !quiet {
        let elapsed_ms = nanos_now().saturating_sub(started) / 1_000_000;
        println!("\nTotal: {} ms", elapsed_ms);
    }

    Ok(())
}
