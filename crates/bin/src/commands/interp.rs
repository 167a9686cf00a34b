//! Interpolation command: resample two-column data onto a uniform grid.

use std::{fs::File, io::BufReader};

use astrosubs::interp::Table;

use crate::cli::InterpArgs;
use crate::output::{OutputFormat, print_json, print_pairs};

/// Run the `interp` command
pub fn run(args: &InterpArgs, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    let table = Table::read(BufReader::new(File::open(&args.file)?))?;
    let grid = table.resample(args.x1, args.x2, args.nx as usize)?;

    match format {
        OutputFormat::Human => print_pairs(&grid),
        OutputFormat::Json => {
            let points: Vec<_> = grid
                .iter()
                .map(|(x, y)| serde_json::json!({ "x": x, "y": y }))
                .collect();
            print_json(&serde_json::Value::Array(points))?;
        }
    }

    Ok(())
}
