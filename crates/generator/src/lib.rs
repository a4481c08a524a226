// Static site generation with Leptos SSR

pub mod components;

use locale_pages_core::{Result, RouteParams, resolve_props, static_paths};
use sha2::{Digest, Sha256};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub use components::{render_document, render_page};

/// One rendered route
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPage {
    pub params: RouteParams,
    /// Location relative to the output directory
    pub path: PathBuf,
    pub html: String,
}

impl GeneratedPage {
    /// Hex SHA-256 of the rendered HTML
    pub fn digest(&self) -> String {
        format!("{:x}", Sha256::digest(self.html.as_bytes()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedSite {
    pub pages: Vec<GeneratedPage>,
}

impl GeneratedSite {
    /// Page generated for a locale code; `None` outside the enumerated set
    pub fn page(&self, lang: &str) -> Option<&GeneratedPage> {
        self.pages
            .iter()
            .find(|page| page.params.lang.as_str() == lang)
    }

    /// Write every page under `dir`, creating directories as needed.
    ///
    /// Returns the written file paths in generation order.
    pub fn write_to(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        let mut written = Vec::with_capacity(self.pages.len());
        for page in &self.pages {
            let dst = dir.join(&page.path);
            if let Some(parent) = dst.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&dst, &page.html)?;
            debug!(path = %dst.display(), "wrote page");
            written.push(dst);
        }
        Ok(written)
    }
}

/// Render one route: resolve its props, then render the document.
pub fn generate_page(params: RouteParams) -> GeneratedPage {
    let props = resolve_props(&params);
    GeneratedPage {
        params,
        path: params.output_file(),
        html: render_document(&props),
    }
}

/// Generate a page for every enumerated route
pub fn generate_site() -> GeneratedSite {
    let pages = static_paths()
        .paths
        .into_iter()
        .map(|params| {
            debug!(route = %params.path(), "rendering page");
            generate_page(params)
        })
        .collect();

    GeneratedSite { pages }
}

#[cfg(test)]
mod tests {
    use super::*;
    use locale_pages_core::SUPPORTED_LOCALES;
    use std::collections::HashSet;
    use tempfile::TempDir;

    #[test]
    fn test_one_page_per_locale() {
        let site = generate_site();
        assert_eq!(site.pages.len(), 3);

        let langs: HashSet<&str> = site.pages.iter().map(|p| p.params.lang.as_str()).collect();
        let expected: HashSet<&str> = ["en", "fr", "gb"].into_iter().collect();
        assert_eq!(langs, expected);
    }

    #[test]
    fn test_each_page_displays_its_own_locale_once() {
        let site = generate_site();
        for locale in SUPPORTED_LOCALES {
            let page = site.page(locale.as_str()).unwrap();
            let needle = format!("Lang: {}", locale);
            assert_eq!(page.html.matches(&needle).count(), 1, "{}", locale);
            assert!(page.html.contains("Test Page"));

            for other in SUPPORTED_LOCALES.iter().filter(|l| **l != locale) {
                assert!(!page.html.contains(&format!("Lang: {}", other)));
            }
        }
    }

    #[test]
    fn test_unknown_locale_has_no_page() {
        let site = generate_site();
        assert!(site.page("de").is_none());
        assert!(site.page("").is_none());
    }

    #[test]
    fn test_generation_is_idempotent() {
        let first = generate_site();
        let second = generate_site();
        assert_eq!(first, second);

        for (a, b) in first.pages.iter().zip(&second.pages) {
            assert_eq!(a.digest(), b.digest());
        }
    }

    #[test]
    fn test_digest_is_hex_sha256() {
        let site = generate_site();
        let digest = site.pages[0].digest();
        assert_eq!(digest.len(), 64);
        assert!(digest.chars().all(|c| c.is_ascii_hexdigit()));
        assert_ne!(digest, site.pages[1].digest());
    }

    #[test]
    fn test_write_to_creates_route_layout() {
        let temp = TempDir::new().unwrap();
        let site = generate_site();

        let written = site.write_to(temp.path()).unwrap();
        assert_eq!(written.len(), 3);

        for locale in ["en", "fr", "gb"] {
            let file = temp.path().join(locale).join("test").join("index.html");
            let html = fs::read_to_string(&file).unwrap();
            assert!(html.contains(&format!("Lang: {}", locale)));
        }
        assert!(!temp.path().join("de").exists());
    }

    #[test]
    fn test_rewrite_is_byte_identical() {
        let temp = TempDir::new().unwrap();
        let site = generate_site();

        site.write_to(temp.path()).unwrap();
        let first = fs::read(temp.path().join("fr/test/index.html")).unwrap();

        generate_site().write_to(temp.path()).unwrap();
        let second = fs::read(temp.path().join("fr/test/index.html")).unwrap();

        assert_eq!(first, second);
    }
}
