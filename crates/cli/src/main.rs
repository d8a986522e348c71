//! CLI tool for recovering slide structure from exported deck text.

use anyhow::{Context, Result};
use clap::Parser;
use deck_core::{Deck, RawDocument};
use deck_segment::SlideExtractor;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Recover an ordered, titled slide list from a text export of a deck.
#[derive(Parser, Debug)]
#[command(name = "deck-extract")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input text file(s) exported from a slide deck
    #[arg(required = true)]
    input: Vec<PathBuf>,

    /// Output directory (default: same as input file)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print output to stdout instead of writing to file
    #[arg(short, long)]
    print: bool,

    /// Emit JSON instead of a plain-text report
    #[arg(short, long)]
    json: bool,

    /// Corruption-ratio threshold for the binary-content check
    #[arg(long, default_value = "0.1")]
    corruption_threshold: f64,

    /// Number of leading characters sampled by the corruption check
    #[arg(long, default_value = "500")]
    sample_size: usize,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    if args.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    let extractor = SlideExtractor::new()
        .with_corruption_threshold(args.corruption_threshold)
        .with_sample_size(args.sample_size);

    for input_path in &args.input {
        if args.verbose {
            eprintln!("Processing: {}", input_path.display());
        }

        match process_file(input_path, &args, &extractor) {
            Ok(output) => {
                if args.print {
                    print!("{}", output);
                } else {
                    let output_path = get_output_path(input_path, args.output.as_ref(), args.json)?;
                    write_output(&output_path, &output)?;
                    if args.verbose {
                        eprintln!("Written to: {}", output_path.display());
                    }
                }
            }
            Err(e) => {
                eprintln!("Error processing {}: {}", input_path.display(), e);
            }
        }
    }

    Ok(())
}

/// Process a single exported deck file.
fn process_file(input_path: &Path, args: &Args, extractor: &SlideExtractor) -> Result<String> {
    // Decoding bytes to text (lossily, for non-UTF-8 sources) happens
    // here; the pipeline itself only ever sees a string.
    let document = RawDocument::from_path(input_path)
        .with_context(|| format!("Failed to load {}", input_path.display()))?;

    log::debug!(
        "loaded {} ({} chars of raw text)",
        document.file_name,
        document.raw_text.chars().count()
    );

    let deck = extractor.extract(&document);

    if args.verbose {
        eprintln!("  Recovered {} slides", deck.slide_count());
    }

    if args.json {
        let json = serde_json::to_string_pretty(&deck).context("Failed to serialize deck")?;
        Ok(format!("{}\n", json))
    } else {
        Ok(render_report(&deck))
    }
}

/// Render a plain-text report: numbered title lines with content.
fn render_report(deck: &Deck) -> String {
    let mut out = String::new();

    out.push_str(&format!("{}\n", deck.title));
    out.push_str(&format!("{}\n\n", "=".repeat(deck.title.chars().count())));

    for slide in &deck.slides {
        out.push_str(&format!("{}. {}\n", slide.number, slide.title));
        out.push_str(&slide.content);
        out.push_str("\n\n");
    }

    out
}

/// Determine the output path for a processed file.
fn get_output_path(input_path: &Path, output_dir: Option<&PathBuf>, json: bool) -> Result<PathBuf> {
    let stem = input_path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("output");

    let extension = if json { "json" } else { "txt" };
    let output_filename = format!("{}.{}", stem, extension);

    let output_path = match output_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create output directory: {}", dir.display()))?;
            dir.join(output_filename)
        }
        None => {
            if let Some(parent) = input_path.parent() {
                parent.join(output_filename)
            } else {
                PathBuf::from(output_filename)
            }
        }
    };

    Ok(output_path)
}

/// Write output to a file.
fn write_output(path: &Path, content: &str) -> Result<()> {
    let mut file =
        File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;

    file.write_all(content.as_bytes())
        .with_context(|| format!("Failed to write to {}", path.display()))?;

    Ok(())
}
