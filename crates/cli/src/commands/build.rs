use anyhow::{Context, Result};
use locale_pages_core::load_config;
use locale_pages_generator::generate_site;
use std::fs;
use std::path::{Component, Path, PathBuf};
use tracing::info;

/// Build static pages for every supported locale
pub async fn run(output: Option<PathBuf>, config: Option<PathBuf>, clean: bool) -> Result<()> {
    let site_config = load_config(config.as_deref()).context("Failed to load configuration")?;
    let output = output.unwrap_or(site_config.output);

    println!("🔨 Building static pages...");
    println!("   Output: {}", output.display());
    println!();

    let written = build_site(&output, clean, config.as_deref())?;

    for path in &written {
        println!("   ✓ {}", path.display());
    }

    println!();
    println!("✅ Build complete! {} pages", written.len());
    println!("   Output: {}", output.display());
    println!();

    Ok(())
}

/// Generate the site and write it under `output`.
///
/// `config` is the config file in use, if any; its directory is never
/// cleaned.
fn build_site(output: &Path, clean: bool, config: Option<&Path>) -> Result<Vec<PathBuf>> {
    if clean && output.exists() {
        check_clean_target(output, config)?;
        info!(output = %output.display(), "cleaning output directory");
        fs::remove_dir_all(output)
            .with_context(|| format!("Failed to clean {}", output.display()))?;
    }

    fs::create_dir_all(output).context("Failed to create output directory")?;

    let site = generate_site();
    info!(pages = site.pages.len(), "generated site");

    let written = site
        .write_to(output)
        .with_context(|| format!("Failed to write pages to {}", output.display()))?;

    Ok(written)
}

/// Refuse to clean a directory that holds the project rather than output.
///
/// Rejected: paths with `..`, the filesystem root, the working directory or
/// any of its ancestors, and any directory containing the config file.
fn check_clean_target(output: &Path, config: Option<&Path>) -> Result<()> {
    if output.components().any(|c| c == Component::ParentDir) {
        anyhow::bail!(
            "Refusing to clean {}: parent directory references (..) not allowed",
            output.display()
        );
    }

    let target = output
        .canonicalize()
        .with_context(|| format!("Failed to resolve {}", output.display()))?;

    if target.parent().is_none() {
        anyhow::bail!("Refusing to clean filesystem root {}", output.display());
    }

    let cwd = std::env::current_dir()
        .and_then(|dir| dir.canonicalize())
        .context("Failed to resolve working directory")?;
    if cwd.starts_with(&target) {
        anyhow::bail!(
            "Refusing to clean {}: it contains the working directory",
            output.display()
        );
    }

    if let Some(config) = config {
        let config_path = config
            .canonicalize()
            .with_context(|| format!("Failed to resolve {}", config.display()))?;
        if config_path.starts_with(&target) {
            anyhow::bail!(
                "Refusing to clean {}: it contains {}",
                output.display(),
                config.display()
            );
        }
    }

    Ok(())
}
