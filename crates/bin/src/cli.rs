//! CLI argument definitions for the astrosubs binary.

use std::path::PathBuf;

use astrosubs::Kind;
use clap::{Parser, Subcommand};

use crate::output::OutputFormat;

/// Small astronomy utilities built around hierarchical binary header files
#[derive(Parser, Debug)]
#[command(name = "astrosubs")]
#[command(about = "astrosubs: header files, dates and small data tools")]
#[command(version)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, default_value = "human", env = "ASTROSUBS_FORMAT")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print a header file, or one item or directory of it
    Print(PrintArgs),
    /// Search item names with a regular expression
    Find(FindArgs),
    /// Set an item, creating directories as needed, and write the file back
    Set(SetArgs),
    /// Remove an item, or a directory and everything in it
    Rm(RmArgs),
    /// Rename an item or directory
    Mv(MvArgs),
    /// Report the day of the week of a date
    Weekday(WeekdayArgs),
    /// Interpolate two-column monotonic data onto a uniform grid
    Interp(InterpArgs),
}

/// Arguments for the print command
#[derive(clap::Args, Debug)]
pub struct PrintArgs {
    /// Header file to read
    pub file: PathBuf,

    /// Item or directory to print (default: everything)
    #[arg(short, long)]
    pub item: Option<String>,

    /// Maximum directory depth below the printed root
    #[arg(short, long)]
    pub depth: Option<usize>,
}

/// Arguments for the find command
#[derive(clap::Args, Debug)]
pub struct FindArgs {
    /// Header file to read
    pub file: PathBuf,

    /// Regular expression matched against full item names
    pub pattern: String,
}

/// Arguments for the set command
#[derive(clap::Args, Debug)]
pub struct SetArgs {
    /// Header file to update
    pub file: PathBuf,

    /// Full item name, e.g. Position.RA
    pub name: String,

    /// Kind of value: i8, u8, i16, u16, i32, u32, i64, u64, f32, f64, str, bool, date, time,
    /// f32array, f64array or directory
    #[arg(short, long)]
    pub kind: Kind,

    /// Value text (omit for a directory)
    #[arg(default_value = "")]
    pub value: String,

    /// Comment to attach to the item
    #[arg(short, long, default_value = "")]
    pub comment: String,

    /// Start a new file if FILE does not exist
    #[arg(long)]
    pub create: bool,
}

/// Arguments for the rm command
#[derive(clap::Args, Debug)]
pub struct RmArgs {
    /// Header file to update
    pub file: PathBuf,

    /// Item or directory to remove
    pub name: String,
}

/// Arguments for the mv command
#[derive(clap::Args, Debug)]
pub struct MvArgs {
    /// Header file to update
    pub file: PathBuf,

    /// Current name
    pub old: String,

    /// New name; its parent directory must already exist
    pub new: String,
}

/// Arguments for the weekday command
#[derive(clap::Args, Debug)]
pub struct WeekdayArgs {
    /// Date such as "17 Nov 1961" or 1961-11-17
    pub date: String,
}

/// Arguments for the interp command
#[derive(clap::Args, Debug)]
pub struct InterpArgs {
    /// File of two-column (x y) data with monotonic x
    pub file: PathBuf,

    /// First X value of the output grid
    #[arg(allow_negative_numbers = true)]
    pub x1: f64,

    /// Last X value of the output grid
    #[arg(allow_negative_numbers = true)]
    pub x2: f64,

    /// Number of output points
    #[arg(value_parser = clap::value_parser!(u32).range(2..))]
    pub nx: u32,
}
