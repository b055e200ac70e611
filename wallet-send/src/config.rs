//! Locale configuration

use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Environment variable selecting the locale
pub const LOCALE_ENV_VAR: &str = "WALLET_SEND_LOCALE";
/// Environment variable pointing at a directory of `<locale>.json` catalogs
pub const CATALOG_DIR_ENV_VAR: &str = "WALLET_SEND_CATALOG_DIR";

/// Which message catalog to use
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocaleConfig {
    /// Locale code, e.g. "en"
    pub locale: String,
    /// Directory holding catalog files; the built-in English catalog is used when unset
    pub catalog_dir: Option<PathBuf>,
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self {
            locale: "en".to_string(),
            catalog_dir: None,
        }
    }
}

impl LocaleConfig {
    /// Read the configuration from the environment, falling back to defaults
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            locale: lookup(LOCALE_ENV_VAR)
                .filter(|locale| !locale.trim().is_empty())
                .unwrap_or(defaults.locale),
            catalog_dir: lookup(CATALOG_DIR_ENV_VAR)
                .filter(|dir| !dir.trim().is_empty())
                .map(PathBuf::from),
        }
    }

    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = locale.into();
        self
    }
}
