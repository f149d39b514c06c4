//! regiosvg CLI
//!
//! Usage:
//!   regiosvg [OPTIONS] <SMILES>
//!
//! Options:
//!   -p, --predicted <IDX,...>       Predicted reactive atom indices
//!   -P, --over-predicted <IDX,...>  Loose-threshold atom indices
//!   -m, --measured <IDX,...>        Experimentally measured atom indices
//!   -s, --palette <FILE>            Highlight palette (TOML format)
//!   -o, --output <FILE>             Write SVG to a file instead of stdout
//!   -h, --help                      Print help

use std::fs;
use std::path::PathBuf;

use clap::Parser;

use regiosvg::{
    generate_structure_with_config, Palette, Predictions, RenderConfig, RenderError,
};

#[derive(Parser)]
#[command(name = "regiosvg")]
#[command(about = "Annotated molecule depictions for regioselectivity predictions")]
struct Cli {
    /// SMILES string of the molecule to draw
    smiles: String,

    /// Predicted reactive atom indices (comma-separated)
    #[arg(short, long, value_delimiter = ',')]
    predicted: Vec<usize>,

    /// Loose-threshold atom indices (comma-separated)
    #[arg(short = 'P', long, value_delimiter = ',')]
    over_predicted: Vec<usize>,

    /// Experimentally measured atom indices (comma-separated)
    #[arg(short, long, value_delimiter = ',')]
    measured: Vec<usize>,

    /// Highlight palette file (TOML format)
    #[arg(short = 's', long)]
    palette: Option<PathBuf>,

    /// Write SVG to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    let palette = match &cli.palette {
        Some(path) => match Palette::from_file(path) {
            Ok(p) => p,
            Err(e) => {
                eprintln!("Error loading palette '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => Palette::default(),
    };

    let config = RenderConfig::new().with_palette(palette);
    let predictions = Predictions::new(cli.predicted, cli.over_predicted);
    let measured = if cli.measured.is_empty() {
        None
    } else {
        Some(cli.measured.as_slice())
    };

    let svg = match generate_structure_with_config(&cli.smiles, &predictions, measured, &config) {
        Ok(svg) => svg,
        Err(RenderError::Parse(e)) => {
            eprintln!("{}", e.format(&cli.smiles, "<smiles>"));
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    match &cli.output {
        Some(path) => {
            if let Err(e) = fs::write(path, svg) {
                eprintln!("Error writing '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        }
        None => println!("{}", svg),
    }
}
