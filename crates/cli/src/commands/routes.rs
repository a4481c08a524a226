use anyhow::{Context, Result};
use locale_pages_core::static_paths;
use std::io::{self, Write};

/// Print every route generated at build time
pub fn run(json: bool) -> Result<()> {
    let stdout = io::stdout();
    write_routes(&mut stdout.lock(), json)
}

fn write_routes(out: &mut impl Write, json: bool) -> Result<()> {
    let paths = static_paths();

    if json {
        let body =
            serde_json::to_string_pretty(&paths.paths).context("Failed to serialize routes")?;
        writeln!(out, "{}", body)?;
        return Ok(());
    }

    for params in &paths.paths {
        writeln!(
            out,
            "{}  ->  {}",
            params.path(),
            params.output_file().display()
        )?;
    }
    writeln!(out)?;
    writeln!(
        out,
        "{} routes, fallback {}",
        paths.len(),
        if paths.fallback { "enabled" } else { "disabled" }
    )?;

    Ok(())
}
