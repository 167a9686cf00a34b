//! Header file commands: print, find, set, rm and mv.

use std::io::{self, Write};

use astrosubs::{
    Header, Item, Value, file,
    header::{RegexMatch, SEPARATOR},
};

use crate::cli::{FindArgs, MvArgs, PrintArgs, RmArgs, SetArgs};
use crate::output::{OutputFormat, print_json};

/// Run the `print` command
pub fn print(args: &PrintArgs, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    let header = file::read_file(&args.file)?;
    let root = args.item.as_deref().unwrap_or("");

    match format {
        OutputFormat::Human => {
            let mut out = io::stdout().lock();
            header.print(&mut out, root, args.depth)?;
            out.flush()?;
        }
        OutputFormat::Json => {
            print_json(&select(&header, root, args.depth)?)?;
        }
    }

    Ok(())
}

/// Entries under `root` (everything when empty) within `depth` levels, as a JSON object
fn select(
    header: &Header,
    root: &str,
    depth: Option<usize>,
) -> Result<serde_json::Value, Box<dyn std::error::Error>> {
    let levels = |name: &str| name.matches(SEPARATOR).count();
    let entries: Vec<(&str, &Item)> = if root.is_empty() {
        header.iter().collect()
    } else {
        header.get(root)?;
        header.range_in_directory(root).collect()
    };
    let base = if root.is_empty() { 0 } else { levels(root) };

    let mut map = serde_json::Map::new();
    for (name, item) in entries {
        if depth.is_none_or(|max| levels(name) - base <= max) {
            map.insert(name.to_string(), serde_json::to_value(item)?);
        }
    }
    Ok(serde_json::Value::Object(map))
}

/// Run the `find` command
pub fn find(args: &FindArgs, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    let header = file::read_file(&args.file)?;
    let found = header.regex_find(&args.pattern)?;

    let outcome = match found {
        RegexMatch::None => "none",
        RegexMatch::Unique(_) => "unique",
        RegexMatch::Ambiguous(_) => "ambiguous",
    };

    match format {
        OutputFormat::Human => match found {
            RegexMatch::None => println!("No item name matches '{}'", args.pattern),
            RegexMatch::Unique((name, item)) => println!("{}", describe(name, item)),
            RegexMatch::Ambiguous((name, item)) => {
                println!(
                    "'{}' matches more than one item; the first is {}",
                    args.pattern,
                    describe(name, item)
                );
            }
        },
        OutputFormat::Json => {
            let mut value = serde_json::json!({ "pattern": args.pattern, "outcome": outcome });
            if let Some((name, item)) = found.first() {
                value["name"] = serde_json::json!(name);
                value["item"] = serde_json::to_value(item)?;
            }
            print_json(&value)?;
        }
    }

    Ok(())
}

fn describe(name: &str, item: &Item) -> String {
    if item.is_dir() {
        format!("{name} (directory)")
    } else {
        format!("{name} = {item}")
    }
}

/// Run the `set` command
pub fn set(args: &SetArgs, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    let mut header = if args.create && !args.file.exists() {
        tracing::info!(path = %args.file.display(), "Starting a new header file");
        Header::new()
    } else {
        file::read_file(&args.file)?
    };

    let value = Value::parse(args.kind, &args.value)?;
    let item = Item::with_comment(value, args.comment.as_str());
    let replaced = header.set_auto(&args.name, item)?.is_some();
    file::write_file(&args.file, &header)?;

    match format {
        OutputFormat::Human => {
            let verb = if replaced { "Replaced" } else { "Set" };
            println!("{verb} {}", args.name);
        }
        OutputFormat::Json => {
            print_json(&serde_json::json!({ "name": args.name, "replaced": replaced }))?;
        }
    }

    Ok(())
}

/// Run the `rm` command
pub fn rm(args: &RmArgs, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    let mut header = file::read_file(&args.file)?;
    header.get(&args.name)?;
    let removed = header.erase(&args.name);
    file::write_file(&args.file, &header)?;

    match format {
        OutputFormat::Human => println!("Removed {removed} item(s) under {}", args.name),
        OutputFormat::Json => {
            print_json(&serde_json::json!({ "name": args.name, "removed": removed }))?;
        }
    }

    Ok(())
}

/// Run the `mv` command
pub fn mv(args: &MvArgs, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    let mut header = file::read_file(&args.file)?;
    header.rename(&args.old, &args.new)?;
    file::write_file(&args.file, &header)?;

    match format {
        OutputFormat::Human => println!("Renamed {} to {}", args.old, args.new),
        OutputFormat::Json => {
            print_json(&serde_json::json!({ "old": args.old, "new": args.new }))?;
        }
    }

    Ok(())
}
