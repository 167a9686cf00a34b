//! One module per group of subcommands.

pub mod header;
pub mod interp;
pub mod weekday;
