use crate::locale::{Locale, SUPPORTED_LOCALES};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Name of the route parameter in the `/[lang]/test` template
pub const PARAM_NAME: &str = "lang";

/// Fixed page segment that follows the locale in every route
const PAGE_SEGMENT: &str = "test";

/// Parameters for one statically generated route
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RouteParams {
    pub lang: Locale,
}

impl RouteParams {
    pub fn new(lang: Locale) -> Self {
        Self { lang }
    }

    /// URL path this route is served under, e.g. `/fr/test`
    pub fn path(&self) -> String {
        format!("/{}/{}", self.lang, PAGE_SEGMENT)
    }

    /// Artifact location relative to the output directory
    pub fn output_file(&self) -> PathBuf {
        PathBuf::from(self.lang.as_str())
            .join(PAGE_SEGMENT)
            .join("index.html")
    }
}

/// The complete set of routes known at build time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaticPaths {
    pub paths: Vec<RouteParams>,
    /// When false, parameters outside `paths` have no page
    pub fallback: bool,
}

impl StaticPaths {
    /// Match a requested parameter value against the enumerated routes.
    ///
    /// Returns `None` for anything not enumerated; with fallback disabled
    /// there is no on-demand rendering to defer to.
    pub fn resolve(&self, lang: &str) -> Option<&RouteParams> {
        self.paths.iter().find(|params| params.lang.as_str() == lang)
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

/// Enumerate every route to generate, one per supported locale.
pub fn static_paths() -> StaticPaths {
    StaticPaths {
        paths: SUPPORTED_LOCALES.into_iter().map(RouteParams::new).collect(),
        fallback: false,
    }
}
