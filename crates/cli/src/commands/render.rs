use anyhow::{Context, Result};
use locale_pages_core::{Error, Locale, PageProps};
use locale_pages_generator::render_document;
use std::io::{self, Write};
use tracing::{info, warn};

/// Render one page to stdout.
///
/// The value is used as-is, the same way route props reach the page.
pub fn run(lang: Option<String>) -> Result<()> {
    if let Some(err) = unsupported_locale(lang.as_deref()) {
        warn!("{}; no page is generated for it at build time", err);
    }

    let stdout = io::stdout();
    write_page(&mut stdout.lock(), lang)
}

/// The error for a locale outside the route set, if `lang` is one
fn unsupported_locale(lang: Option<&str>) -> Option<Error> {
    lang.and_then(|code| code.parse::<Locale>().err())
}

fn write_page(out: &mut impl Write, lang: Option<String>) -> Result<()> {
    let props = PageProps { lang };
    info!(lang = props.lang_or_default(), "rendering page");
    out.write_all(render_document(&props).as_bytes())
        .context("Failed to write page")?;
    Ok(())
}
