use crate::error::{Error, Result};
use serde::Deserialize;
use std::fs;
use std::net::IpAddr;
use std::path::{Path, PathBuf};

/// Config file looked up in the working directory when none is given
pub const DEFAULT_CONFIG_FILE: &str = "locale-pages.toml";

const DEFAULT_OUTPUT: &str = "dist";
const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;

/// Raw TOML configuration structure.
/// Every table and key is optional; missing values take defaults.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    #[serde(default)]
    build: RawBuild,
    #[serde(default)]
    preview: RawPreview,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawBuild {
    output: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawPreview {
    host: Option<String>,
    port: Option<u16>,
}

/// Resolved site configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    /// Directory generated pages are written into
    pub output: PathBuf,
    pub host: String,
    pub port: u16,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            output: PathBuf::from(DEFAULT_OUTPUT),
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

/// Parse a config file from a path
pub fn parse_config<P: AsRef<Path>>(path: P) -> Result<SiteConfig> {
    let content = fs::read_to_string(path)?;
    parse_config_str(&content)
}

/// Parse config from a string (useful for testing)
pub fn parse_config_str(content: &str) -> Result<SiteConfig> {
    let raw: RawConfig = toml::from_str(content)?;
    let defaults = SiteConfig::default();

    let output = match raw.build.output {
        Some(output) => {
            if output.trim().is_empty() {
                return Err(Error::ConfigParse(
                    "Empty path in 'build.output' field".to_string(),
                ));
            }
            PathBuf::from(output)
        }
        None => defaults.output,
    };

    let host = match raw.preview.host {
        Some(host) => validate_host(&host)?,
        None => defaults.host,
    };

    let port = raw.preview.port.unwrap_or(defaults.port);
    if port == 0 {
        return Err(Error::ConfigParse(
            "'preview.port' must be between 1 and 65535".to_string(),
        ));
    }

    Ok(SiteConfig { output, host, port })
}

/// Check a preview host: a hostname or an IP literal, without a port.
///
/// Bracketed IPv6 literals (`[::1]`) are accepted and unwrapped.
fn validate_host(host: &str) -> Result<String> {
    let host = host.trim();
    if host.is_empty() {
        return Err(Error::ConfigParse(
            "Empty host in 'preview.host' field".to_string(),
        ));
    }

    let host = host
        .strip_prefix('[')
        .and_then(|h| h.strip_suffix(']'))
        .unwrap_or(host);

    if host.parse::<IpAddr>().is_ok() {
        return Ok(host.to_string());
    }

    let is_hostname = host.split('.').all(|label| {
        !label.is_empty() && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
    });
    if !is_hostname {
        return Err(Error::ConfigParse(format!(
            "Invalid host in 'preview.host': '{}'. Use a hostname or IP address without a port.",
            host
        )));
    }

    Ok(host.to_string())
}

/// Load configuration.
///
/// An explicit path must exist. Without one, [`DEFAULT_CONFIG_FILE`] is read
/// if present and defaults are used otherwise.
pub fn load_config(path: Option<&Path>) -> Result<SiteConfig> {
    match path {
        Some(path) => parse_config(path),
        None => {
            let default_path = Path::new(DEFAULT_CONFIG_FILE);
            if default_path.exists() {
                parse_config(default_path)
            } else {
                Ok(SiteConfig::default())
            }
        }
    }
}
