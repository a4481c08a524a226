use anyhow::Result;
use locale_pages_validator::validate_output;
use std::path::PathBuf;

pub async fn run(path: PathBuf) -> Result<()> {
    println!("Validating output at: {}", path.display());

    let report = validate_output(&path)?;

    for line in &report.info {
        println!("  ✓ {}", line);
    }
    for line in &report.warnings {
        println!("  ⚠ {}", line);
    }
    for line in &report.errors {
        println!("  ✗ {}", line);
    }

    if !report.is_ok() {
        anyhow::bail!("Validation failed with {} error(s)", report.errors.len());
    }

    println!("\n✅ Output matches a fresh build");
    Ok(())
}
