//! Output formatting helpers for human-readable and JSON output.

use clap::ValueEnum;

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Indented text for people
    Human,
    /// One JSON document per command
    Json,
}

/// Print one JSON document on a single line.
pub fn print_json(value: &serde_json::Value) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string(value)?);
    Ok(())
}

/// Print `x y` pairs, one per line.
pub fn print_pairs(pairs: &[(f64, f64)]) {
    for (x, y) in pairs {
        println!("{x} {y}");
    }
}
