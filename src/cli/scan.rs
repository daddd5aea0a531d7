use std::fmt::{self, Write as _};
use std::fs;
use std::io::IsTerminal;
use std::path::Path;

use anyhow::{bail, Context, Result};
use colored::Colorize;

use super::{load_config, Overrides};
use crate::catalog::ApiCatalog;
use crate::detector::{detect_apis, ApiPresence};

pub fn run(path: &str, config_path: Option<String>, overrides: &Overrides, json: bool) -> Result<()> {
    let file = Path::new(path);
    if !file.exists() {
        bail!("File not found: {}", path);
    }
    if !file.is_file() {
        bail!("Path is not a file: {}", path);
    }

    let config = load_config(config_path, overrides)?;
    let catalog = ApiCatalog::load(&config.resources.api_catalog)?;
    let tcl_code = fs::read_to_string(file)
        .with_context(|| format!("Failed to read TCL file {}", path))?;

    let presence = detect_apis(&tcl_code, &catalog);
    if json {
        println!("{}", serde_json::to_string_pretty(&presence)?);
    } else {
        // Plain badges when piped
        let colorize = std::io::stdout().is_terminal();
        print!("{}", format_report(&presence, colorize)?);
    }
    Ok(())
}

/// Found APIs are green, absent ones grey.
pub fn format_report(presence: &ApiPresence<'_>, colorize: bool) -> Result<String, fmt::Error> {
    let mut out = String::new();
    writeln!(
        out,
        "API presence: {}/{} found",
        presence.found.len(),
        presence.total()
    )?;

    for api in &presence.found {
        let badge = format!("[{}]", api);
        if colorize {
            writeln!(out, "  {} {}", "✓".green(), badge.green().bold())?;
        } else {
            writeln!(out, "  + {}", badge)?;
        }
    }
    for api in &presence.not_found {
        let badge = format!("[{}]", api);
        if colorize {
            writeln!(out, "  {} {}", "·".dimmed(), badge.dimmed())?;
        } else {
            writeln!(out, "  - {}", badge)?;
        }
    }
    Ok(out)
}
