//! Command-line host for the timestamp extension.
//!
//! Plays the launcher's part: builds a keyword query from the arguments,
//! prints the rendered list, and optionally activates one of the items.

pub mod logger;

use std::io::{self, Write};

use anyhow::Context;
use clap::{ArgAction, Parser};

use crate::config::Config;
use crate::core::{KeywordQueryEvent, RenderAction, UNIT_PREFERENCE};
use crate::error::{TimestampError, TimestampResult};
use crate::extension::{QueryHandler, TimestampExtension};
use crate::{executor, platform};

#[derive(Parser, Debug)]
#[command(name = "nova-timestamp")]
#[command(
    about = "Convert between Unix epoch values and readable timestamps",
    long_about = None
)]
pub struct Cli {
    /// Epoch value or date (e.g., 1700000000, 2023-01-01 12:00). Omit for now.
    pub query: Vec<String>,

    /// Epoch unit, overriding the config file
    #[arg(short, long, value_name = "UNIT", value_parser = ["s", "ms"])]
    pub unit: Option<String>,

    /// Print results as JSON
    #[arg(long)]
    pub json: bool,

    /// Copy the value of result N (1-based) to the clipboard
    #[arg(short, long, value_name = "N")]
    pub copy: Option<usize>,

    /// Write the default config file and exit
    #[arg(long)]
    pub init_config: bool,

    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Run the CLI with already-parsed arguments.
pub fn run(cli: &Cli) -> anyhow::Result<()> {
    if cli.init_config {
        let path = Config::default()
            .save()
            .context("Failed to write default config")?;
        println!("Wrote {}", path.display());
        return Ok(());
    }

    let extension = TimestampExtension::load();
    let render = query(&extension, cli);

    let stdout = io::stdout();
    write_results(&render, cli.json, &mut stdout.lock())?;

    if let Some(position) = cli.copy {
        let item = render.item(position).ok_or_else(|| {
            TimestampError::Cli(format!(
                "No result {} to copy ({} shown)",
                position,
                render.len()
            ))
        })?;
        let clipboard = platform::system_clipboard()?;
        executor::execute(&item.on_enter, clipboard.as_ref())?;
    }

    Ok(())
}

/// Dispatch the query words to the extension as a keyword query event.
pub fn query(extension: &TimestampExtension, cli: &Cli) -> RenderAction {
    let mut preferences = extension.preferences();
    if let Some(unit) = &cli.unit {
        preferences.set(UNIT_PREFERENCE, unit.as_str());
    }

    let argument = Some(cli.query.join(" ")).filter(|q| !q.trim().is_empty());
    let event = KeywordQueryEvent::new(extension.keyword(), argument);

    extension.on_event(&event, &preferences)
}

/// Print a result list, one title per line with the subtitle indented below.
pub fn write_results(render: &RenderAction, json: bool, out: &mut dyn Write) -> TimestampResult<()> {
    if json {
        writeln!(out, "{}", render.to_json()?)?;
        return Ok(());
    }

    for (i, item) in render.items.iter().enumerate() {
        writeln!(out, "{}. {}", i + 1, item.title)?;
        if let Some(subtitle) = &item.subtitle {
            writeln!(out, "   {}", subtitle)?;
        }
    }

    Ok(())
}
