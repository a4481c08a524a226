use crate::routes::RouteParams;
use serde::{Deserialize, Serialize};

/// Locale rendered when the props carry none
pub const DEFAULT_LANG: &str = "en";

/// Property bag handed to the page renderer
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageProps {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,
}

impl PageProps {
    pub fn with_lang(lang: impl Into<String>) -> Self {
        Self {
            lang: Some(lang.into()),
        }
    }

    /// The locale to display, falling back to [`DEFAULT_LANG`]
    pub fn lang_or_default(&self) -> &str {
        self.lang.as_deref().unwrap_or(DEFAULT_LANG)
    }
}

/// Build page props from a matched route. Fields are copied unchanged.
pub fn resolve_props(params: &RouteParams) -> PageProps {
    PageProps::with_lang(params.lang.as_str())
}
