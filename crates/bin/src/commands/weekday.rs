//! Day-of-week command.

use astrosubs::time::Date;

use crate::cli::WeekdayArgs;
use crate::output::{OutputFormat, print_json};

/// Run the `weekday` command
pub fn run(args: &WeekdayArgs, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    let date: Date = args.date.parse()?;

    match format {
        OutputFormat::Human => println!("{date} ---> {}", date.day_of_week()),
        OutputFormat::Json => {
            print_json(&serde_json::json!({
                "date": date.to_string(),
                "weekday": date.day_of_week(),
                "mjd": date.mjd(),
            }))?;
        }
    }

    Ok(())
}
