//! CLI argument parsing with clap.

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

use ascii_ramp::ascii::{is_valid_scale, validate_buckets};

/// Parse and validate a resize factor (> 0)
pub fn parse_scale(s: &str) -> Result<f64, String> {
    let scale: f64 = s.parse().map_err(|_| format!("'{}' is not a valid number", s))?;
    if !is_valid_scale(scale) {
        return Err(format!("Scale must be a positive number, got {}", scale));
    }
    Ok(scale)
}

/// Parse and validate a contrast percentage (-100 to 100)
pub fn parse_contrast(s: &str) -> Result<f64, String> {
    let contrast: f64 = s.parse().map_err(|_| format!("'{}' is not a valid number", s))?;
    if !(-100.0..=100.0).contains(&contrast) {
        return Err(format!(
            "Contrast must be between -100 and 100, got {}",
            contrast
        ));
    }
    Ok(contrast)
}

/// Parse and validate a bucket count (1 to ramp length)
pub fn parse_buckets(s: &str) -> Result<usize, String> {
    let buckets: usize = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid bucket count", s))?;
    validate_buckets(buckets).map_err(|e| e.to_string())
}

/// Convert an image into ASCII art
#[derive(Parser, Debug)]
#[command(name = "ascii-ramp")]
#[command(version, about = "Convert images into ASCII art", long_about = None)]
#[command(after_help = "EXAMPLES:
    # Print a photo to the terminal at quarter size
    ascii-ramp --file photo.jpg --scale 0.25 --print

    # Boost contrast and write text and HTML output
    ascii-ramp -f photo.png -c 40 -o art.txt --html art.html")]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Image file to convert
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Resize factor applied before conversion (default: 1.0)
    #[arg(short, long, value_parser = parse_scale)]
    pub scale: Option<f64>,

    /// Contrast adjustment percentage, -100 to 100 (default: 0)
    #[arg(short, long, value_parser = parse_contrast, allow_negative_numbers = true)]
    pub contrast: Option<f64>,

    /// Write the art to a plain-text file
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Print the art to stdout
    #[arg(short, long)]
    pub print: bool,

    /// Write the art to an HTML file
    #[arg(long)]
    pub html: Option<PathBuf>,

    /// Number of brightness buckets (default: 64)
    #[arg(short, long, value_parser = parse_buckets)]
    pub buckets: Option<usize>,

    /// Reverse the glyph ramp (for light backgrounds)
    #[arg(short, long)]
    pub invert: bool,

    /// Config file path
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigAction {
    /// Show effective configuration
    Show,
    /// Create default config file
    Init,
}
