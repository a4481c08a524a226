use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A supported display locale.
///
/// The set is closed: there is no catalog lookup behind it, and any code
/// outside it has no generated page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    En,
    Fr,
    Gb,
}

/// Supported locales in generation order
pub const SUPPORTED_LOCALES: [Locale; 3] = [Locale::En, Locale::Fr, Locale::Gb];

impl Locale {
    /// The locale code as it appears in routes and rendered output
    pub fn as_str(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Fr => "fr",
            Locale::Gb => "gb",
        }
    }

    /// Look up a code in the supported set. Exact match only.
    pub fn from_code(code: &str) -> Option<Locale> {
        SUPPORTED_LOCALES
            .into_iter()
            .find(|locale| locale.as_str() == code)
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Locale {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Locale::from_code(s).ok_or_else(|| Error::UnknownLocale(s.to_string()))
    }
}
