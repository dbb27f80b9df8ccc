//! abidoc — normalize smart-contract ABI documentation artifacts.
//!
//! Takes the loosely-typed JSON emitted by the contract documentation
//! generator and produces an agnostic, renderer-independent format.
//! Supports two modes:
//!
//! - **stdin mode**: `abidoc < v1.0.json`
//! - **file mode**: `abidoc -o docs/ -f markdown artifacts/*.json`

mod classify;
mod ingest;
mod menu;
mod model;
mod normalize;
mod render;

use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "abidoc",
    about = "Normalize contract ABI documentation JSON into an agnostic format"
)]
struct Cli {
    /// Input artifacts (glob patterns supported). If omitted, reads from stdin.
    files: Vec<String>,

    /// Output directory (required when files are given)
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Output format: json (default), markdown
    #[arg(short = 'f', long, default_value = "json")]
    format: String,

    /// Filter contracts by name. Prefix with ! to exclude.
    /// Can be specified multiple times. E.g. --contract '!TokenRegistry'
    #[arg(long)]
    contract: Vec<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.files.is_empty() {
        return stdin_mode(&cli);
    }

    file_mode(&cli)
}

/// stdin mode: read one artifact from stdin, write to stdout.
fn stdin_mode(cli: &Cli) -> Result<()> {
    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("failed to read stdin")?;

    let (raw, mut diagnostics) = ingest::parse(&input)?;
    let normalized = normalize::normalize(&raw);
    diagnostics.extend(normalized.diagnostics);
    report_diagnostics(&diagnostics);

    let mut docs = normalized.docs;
    filter_contracts(&mut docs, &cli.contract);

    let renderer = render::create_renderer(&cli.format)?;
    print!("{}", renderer.render(&docs)?);
    Ok(())
}

/// file mode: process multiple artifacts, one output file per input.
fn file_mode(cli: &Cli) -> Result<()> {
    let output_dir = cli
        .output
        .as_deref()
        .context("--output is required when files are given")?;

    fs::create_dir_all(output_dir)
        .with_context(|| format!("failed to create output directory: {}", output_dir.display()))?;

    let input_files = expand_globs(&cli.files)?;

    let renderer = render::create_renderer(&cli.format)?;
    let ext = renderer.file_extension();

    for path in &input_files {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;

        let (raw, mut diagnostics) = match ingest::parse(&content) {
            Ok(parsed) => parsed,
            Err(e) => {
                eprintln!("warning: skipping {}: {}", path.display(), e);
                continue;
            }
        };
        let normalized = normalize::normalize(&raw);
        diagnostics.extend(normalized.diagnostics);
        report_diagnostics(&diagnostics);

        let mut docs = normalized.docs;
        filter_contracts(&mut docs, &cli.contract);

        let name = derive_output_name(&path.to_string_lossy());
        let out_path = output_dir.join(format!("{}.{}", name, ext));
        fs::write(&out_path, renderer.render(&docs)?)
            .with_context(|| format!("failed to write {}", out_path.display()))?;
    }

    Ok(())
}

/// Data-quality problems are reported but never abort the conversion.
fn report_diagnostics(diagnostics: &[ingest::Diagnostic]) {
    for diagnostic in diagnostics {
        eprintln!("warning: {}", diagnostic);
    }
}

/// Expand glob patterns into a list of real file paths.
/// Also handles bare directory paths by scanning for .json files.
fn expand_globs(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for pattern in patterns {
        let path = Path::new(pattern);
        if path.is_file() {
            files.push(path.to_path_buf());
            continue;
        }
        // If it's a directory, scan for artifacts (non-recursive)
        if path.is_dir() {
            let entries = fs::read_dir(path)
                .with_context(|| format!("failed to read directory: {}", path.display()))?;
            for entry in entries.flatten() {
                let p = entry.path();
                if p.is_file() && p.extension().and_then(|e| e.to_str()) == Some("json") {
                    files.push(p);
                }
            }
            continue;
        }
        // Try as glob
        let matches: Vec<_> = glob::glob(pattern)
            .with_context(|| format!("invalid glob pattern: {}", pattern))?
            .filter_map(|r| r.ok())
            .filter(|p| p.is_file())
            .collect();
        if matches.is_empty() {
            eprintln!("warning: no files matched: {}", pattern);
        }
        files.extend(matches);
    }
    // Sort for deterministic output
    files.sort();
    files.dedup();
    Ok(files)
}

/// Derive the output file name (without extension) from a source path.
/// "artifacts/v1.0.json" → "v1.0"
fn derive_output_name(source: &str) -> String {
    let filename = source.rsplit('/').next().unwrap_or(source);
    filename
        .strip_suffix(".json")
        .unwrap_or(filename)
        .to_string()
}

/// Filter contracts by name. Supports inclusion ("Exchange") and exclusion
/// ("!TokenRegistry"). With only exclusions, everything else is kept.
fn filter_contracts(docs: &mut model::DocAgnosticFormat, filters: &[String]) {
    if filters.is_empty() {
        return;
    }
    let includes: Vec<&str> = filters
        .iter()
        .filter(|f| !f.starts_with('!'))
        .map(String::as_str)
        .collect();

    docs.retain(|name, _| {
        if filters
            .iter()
            .any(|f| f.strip_prefix('!') == Some(name.as_str()))
        {
            return false;
        }
        includes.is_empty() || includes.contains(&name.as_str())
    });
}
