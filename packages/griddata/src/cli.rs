//! Command-line interface for inspecting grid JSON files.

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use console::style;

use crate::context::GridContext;
use crate::error::Result;
use crate::model::GridDataModel;
use crate::outline::GridOutline;
use crate::search::WriteSearchableText;

/// Griddata - Inspect page-builder grid JSON.
#[derive(Parser)]
#[command(name = "griddata")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the searchable text of a grid, one line per control.
    Text(GridArgs),

    /// Print a YAML outline of the grid tree.
    Outline(GridArgs),

    /// Report which rows of a grid are valid.
    Validate(GridArgs),
}

/// Arguments shared by all commands.
#[derive(Args, Debug)]
pub struct GridArgs {
    /// Path to the grid JSON file
    pub file: PathBuf,

    /// Culture to parse with (default: en-US)
    #[arg(short, long)]
    pub culture: Option<String>,

    /// Do not register the converter for the built-in editors
    #[arg(long)]
    pub no_default_converter: bool,

    /// Keep whitespace in searchable text as written
    #[arg(long)]
    pub keep_whitespace: bool,
}

/// Result of a successful command run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    /// The grid parsed but contains no valid content.
    InvalidGrid,
}

/// Run the CLI.
pub fn run() -> Result<Outcome> {
    run_with(Cli::parse())
}

/// Run an already parsed command line.
pub fn run_with(cli: Cli) -> Result<Outcome> {
    match cli.command {
        Commands::Text(args) => text_command(&args),
        Commands::Outline(args) => outline_command(&args),
        Commands::Validate(args) => validate_command(&args),
    }
}

fn build_context(args: &GridArgs) -> Result<GridContext> {
    let mut builder = GridContext::builder().normalize_whitespace(!args.keep_whitespace);
    if let Some(culture) = &args.culture {
        builder = builder.culture(culture.as_str());
    }
    if args.no_default_converter {
        builder = builder.without_default_converter();
    }
    builder.build()
}

fn load_grid(path: &Path, context: &GridContext) -> Result<GridDataModel> {
    let json = fs::read_to_string(path)?;
    tracing::debug!(path = %path.display(), bytes = json.len(), "Loaded grid file");
    GridDataModel::parse(&json, context)
}

/// Execute the text command.
fn text_command(args: &GridArgs) -> Result<Outcome> {
    let context = build_context(args)?;
    let grid = load_grid(&args.file, &context)?;

    for line in grid.searchable_text(&context) {
        println!("{line}");
    }
    Ok(Outcome::Success)
}

/// Execute the outline command.
fn outline_command(args: &GridArgs) -> Result<Outcome> {
    let context = build_context(args)?;
    let grid = load_grid(&args.file, &context)?;

    print!("{}", GridOutline::new(&grid, &context).to_yaml()?);
    Ok(Outcome::Success)
}

/// Execute the validate command.
fn validate_command(args: &GridArgs) -> Result<Outcome> {
    let context = build_context(args)?;
    let grid = load_grid(&args.file, &context)?;

    for row in grid.rows() {
        let status = if row.is_valid() {
            style("valid").green()
        } else {
            style("empty").yellow()
        };
        println!(
            "  {} {} ({} areas, {} controls)",
            status,
            style(row.id()).cyan(),
            row.areas().len(),
            row.controls().count()
        );
    }

    println!();
    if grid.is_valid() {
        println!("{}", style("Grid is valid").green().bold());
        Ok(Outcome::Success)
    } else {
        println!("{}", style("Grid has no valid content").yellow().bold());
        Ok(Outcome::InvalidGrid)
    }
}
