use anyhow::{Context, Result};
use clap::Parser;
use contrast_visualizer::{ContrastConfig, ContrastPipeline};
use std::io::Write;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Write a grayscale PNG map of local WCAG contrast next to the input image"
)]
struct Args {
    /// Input image path; any format the decoder recognises from its contents
    input: PathBuf,
}

/// Print a progress bar to stderr (overwrites the current line)
fn print_progress(label: &str, progress: f32) {
    const BAR_WIDTH: usize = 30;
    let filled = (progress * BAR_WIDTH as f32).round() as usize;
    let empty = BAR_WIDTH.saturating_sub(filled);
    eprint!(
        "\r{}: [{}{}] {:3}%",
        label,
        "=".repeat(filled),
        " ".repeat(empty),
        (progress * 100.0).round() as u32
    );
    let _ = std::io::stderr().flush();
}

/// Clear the progress bar line
fn clear_progress() {
    eprint!("\r{}\r", " ".repeat(60));
    let _ = std::io::stderr().flush();
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let mut pipeline = ContrastPipeline::new(ContrastConfig::default());
    let mut report = |fraction: f32| print_progress("contrast", fraction);
    let result = pipeline.run(&args.input, Some(&mut report));
    clear_progress();

    let out_path = result
        .with_context(|| format!("Failed to build contrast map for {}", args.input.display()))?;
    println!("Wrote: {}", out_path.display());
    Ok(())
}
