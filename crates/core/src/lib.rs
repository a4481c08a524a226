pub mod config;
pub mod error;
pub mod locale;
pub mod props;
pub mod routes;

pub use config::{SiteConfig, load_config, parse_config};
pub use error::{Error, Result};
pub use locale::{Locale, SUPPORTED_LOCALES};
pub use props::{DEFAULT_LANG, PageProps, resolve_props};
pub use routes::{PARAM_NAME, RouteParams, StaticPaths, static_paths};
