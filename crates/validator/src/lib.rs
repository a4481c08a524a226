// Output verification: compare a built directory against a fresh generation

use anyhow::{Context, Result};
use locale_pages_generator::generate_site;
use sha2::{Digest, Sha256};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

#[derive(Debug, Default)]
pub struct ValidationReport {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub info: Vec<String>,
}

impl ValidationReport {
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Check a built output directory.
///
/// Every enumerated route must have an artifact whose bytes match a fresh
/// render. HTML files for any other route are errors, since unknown locales
/// must not resolve to a page. Other files are reported as warnings.
pub fn validate_output(dir: &Path) -> Result<ValidationReport> {
    if !dir.is_dir() {
        anyhow::bail!("Output directory does not exist: {}", dir.display());
    }

    let mut report = ValidationReport::default();
    let site = generate_site();

    let mut found = HashSet::new();
    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = entry.with_context(|| format!("Failed to read {}", dir.display()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let relative = entry
            .path()
            .strip_prefix(dir)
            .context("Walked outside the output directory")?
            .to_path_buf();
        found.insert(relative);
    }

    let expected: HashSet<PathBuf> = site.pages.iter().map(|page| page.path.clone()).collect();

    for page in &site.pages {
        let route = page.params.path();
        if !found.contains(&page.path) {
            report
                .errors
                .push(format!("Missing page for {}: {}", route, page.path.display()));
            continue;
        }

        let bytes = fs::read(dir.join(&page.path))
            .with_context(|| format!("Failed to read {}", page.path.display()))?;
        let digest = format!("{:x}", Sha256::digest(&bytes));
        debug!(route = %route, digest = %digest, "checked page");

        if digest == page.digest() {
            report.info.push(format!("{} ok ({})", route, &digest[..12]));
        } else {
            report.errors.push(format!(
                "Page for {} differs from a fresh build: {}",
                route,
                page.path.display()
            ));
        }
    }

    let mut extras: Vec<&PathBuf> = found.difference(&expected).collect();
    extras.sort();
    for path in extras {
        let is_html = path.extension().is_some_and(|ext| ext == "html");
        if is_html {
            report
                .errors
                .push(format!("Unexpected page not in route set: {}", path.display()));
        } else {
            report
                .warnings
                .push(format!("Unrecognized file: {}", path.display()));
        }
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn built_dir() -> TempDir {
        let temp = TempDir::new().unwrap();
        generate_site().write_to(temp.path()).unwrap();
        temp
    }

    #[test]
    fn test_fresh_build_is_valid() {
        let temp = built_dir();
        let report = validate_output(temp.path()).unwrap();
        assert!(report.is_ok(), "{:?}", report.errors);
        assert_eq!(report.info.len(), 3);
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn test_missing_page_is_error() {
        let temp = built_dir();
        fs::remove_file(temp.path().join("gb/test/index.html")).unwrap();

        let report = validate_output(temp.path()).unwrap();
        assert!(!report.is_ok());
        assert_eq!(report.errors.len(), 1);
        assert!(report.errors[0].contains("/gb/test"));
    }

    #[test]
    fn test_modified_page_is_error() {
        let temp = built_dir();
        fs::write(temp.path().join("fr/test/index.html"), "<h4>Lang: en</h4>").unwrap();

        let report = validate_output(temp.path()).unwrap();
        assert_eq!(report.errors.len(), 1);
        assert!(report.errors[0].contains("differs"));
    }

    #[test]
    fn test_unknown_locale_page_is_error() {
        let temp = built_dir();
        let de = temp.path().join("de/test");
        fs::create_dir_all(&de).unwrap();
        fs::write(de.join("index.html"), "<h4>Lang: de</h4>").unwrap();

        let report = validate_output(temp.path()).unwrap();
        assert_eq!(report.errors.len(), 1);
        assert!(report.errors[0].contains("Unexpected page"));
    }

    #[test]
    fn test_stray_file_is_warning() {
        let temp = built_dir();
        fs::write(temp.path().join("robots.txt"), "").unwrap();

        let report = validate_output(temp.path()).unwrap();
        assert!(report.is_ok());
        assert_eq!(report.warnings.len(), 1);
    }

    #[test]
    fn test_missing_directory_is_error() {
        let temp = TempDir::new().unwrap();
        assert!(validate_output(&temp.path().join("nope")).is_err());
    }
}
