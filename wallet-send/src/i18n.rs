//! Message localization
//!
//! Catalogs map a message key (the English source sentence) to a template.
//! Templates reference substitution values as `:name`.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use regex::{Captures, Regex};

use crate::config::LocaleConfig;
use crate::error::{Error, Result};

const ENGLISH_CATALOG: &str = include_str!("../locales/en.json");

/// Localization collaborator
pub trait Translate: Send + Sync {
    /// Look up `key` and substitute the named values
    fn translate(&self, key: &str, values: &[(&str, String)]) -> String;
}

/// Message catalog for one locale
#[derive(Debug, Clone)]
pub struct Catalog {
    locale: String,
    messages: HashMap<String, String>,
    placeholder: Regex,
}

impl Catalog {
    /// Parse a catalog from a JSON object of key/template pairs
    pub fn from_json(locale: impl Into<String>, json: &str) -> Result<Self> {
        let messages: HashMap<String, String> = serde_json::from_str(json)
            .map_err(|e| Error::Localization(format!("Invalid catalog: {}", e)))?;
        Self::new(locale, messages)
    }

    pub fn new(locale: impl Into<String>, messages: HashMap<String, String>) -> Result<Self> {
        let placeholder = Regex::new(r":([A-Za-z_][A-Za-z0-9_]*)")
            .map_err(|e| Error::Localization(e.to_string()))?;
        Ok(Self {
            locale: locale.into(),
            messages,
            placeholder,
        })
    }

    /// The built-in English catalog
    pub fn english() -> Result<Self> {
        Self::from_json("en", ENGLISH_CATALOG)
    }

    /// Load `<dir>/<locale>.json`
    pub fn load(dir: &Path, locale: &str) -> Result<Self> {
        let path = dir.join(format!("{}.json", locale));
        let json = fs::read_to_string(&path)
            .map_err(|e| Error::Localization(format!("Failed to read {}: {}", path.display(), e)))?;
        tracing::debug!(locale = %locale, path = %path.display(), "loaded message catalog");
        Self::from_json(locale, &json)
    }

    /// Catalog selected by configuration
    pub fn from_config(config: &LocaleConfig) -> Result<Self> {
        match &config.catalog_dir {
            Some(dir) => Self::load(dir, &config.locale),
            None if config.locale == "en" => Self::english(),
            None => Err(Error::Localization(format!(
                "No catalog directory configured for locale {}",
                config.locale
            ))),
        }
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    pub fn contains(&self, key: &str) -> bool {
        self.messages.contains_key(key)
    }

    /// Keys from `keys` that this catalog has no template for
    pub fn missing<'a>(&self, keys: &[&'a str]) -> Vec<&'a str> {
        keys.iter().copied().filter(|key| !self.contains(key)).collect()
    }

    fn interpolate(&self, template: &str, values: &[(&str, String)]) -> String {
        self.placeholder
            .replace_all(template, |caps: &Captures| {
                let name = &caps[1];
                values
                    .iter()
                    .find(|(key, _)| *key == name)
                    .map(|(_, value)| value.clone())
                    .unwrap_or_else(|| caps[0].to_string())
            })
            .into_owned()
    }
}

impl Translate for Catalog {
    fn translate(&self, key: &str, values: &[(&str, String)]) -> String {
        let template = match self.messages.get(key) {
            Some(template) => template.as_str(),
            None => {
                tracing::warn!(locale = %self.locale, key = %key, "missing translation");
                key
            }
        };
        self.interpolate(template, values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages;

    fn catalog(pairs: &[(&str, &str)]) -> Catalog {
        let messages = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Catalog::new("test", messages).unwrap()
    }

    #[test]
    fn test_interpolation() {
        let catalog = catalog(&[("greeting", "Send more than :minReserve :denomination.")]);
        let text = catalog.translate(
            "greeting",
            &[("minReserve", "20".to_string()), ("denomination", "XRP".to_string())],
        );
        assert_eq!(text, "Send more than 20 XRP.");
    }

    #[test]
    fn test_placeholder_names_are_whole_words() {
        let catalog = catalog(&[("k", ":min / :minReserve")]);
        let text = catalog.translate(
            "k",
            &[("min", "1".to_string()), ("minReserve", "2".to_string())],
        );
        assert_eq!(text, "1 / 2");
    }

    #[test]
    fn test_missing_key_falls_back_to_key() {
        let catalog = catalog(&[]);
        assert_eq!(catalog.translate("Transaction too large", &[]), "Transaction too large");
    }

    #[test]
    fn test_unknown_placeholder_left_verbatim() {
        let catalog = catalog(&[("k", "value :unknown")]);
        assert_eq!(catalog.translate("k", &[]), "value :unknown");
    }

    #[test]
    fn test_english_catalog_is_complete() {
        let catalog = Catalog::english().unwrap();
        assert_eq!(catalog.locale(), "en");
        assert!(catalog.missing(messages::ALL).is_empty());
        // The fee message is deliberately left out of the catalogs
        assert!(!catalog.contains(messages::INVALID_FEE));
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(
            Catalog::from_json("en", "[1, 2]"),
            Err(Error::Localization(_))
        ));
    }

    #[test]
    fn test_load_from_dir() {
        let dir = std::env::temp_dir().join(format!("wallet-send-i18n-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        fs::write(
            dir.join("es.json"),
            r#"{"Transaction too large": "Transacción demasiado grande"}"#,
        )
        .unwrap();

        let config = LocaleConfig {
            locale: "es".to_string(),
            catalog_dir: Some(dir.clone()),
        };
        let catalog = Catalog::from_config(&config).unwrap();
        assert_eq!(catalog.locale(), "es");
        assert_eq!(
            catalog.translate(messages::TRANSACTION_TOO_LARGE, &[]),
            "Transacción demasiado grande"
        );
        assert_eq!(catalog.missing(messages::ALL).len(), messages::ALL.len() - 1);

        assert!(matches!(Catalog::load(&dir, "xx"), Err(Error::Localization(_))));
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_from_config_without_dir() {
        let config = LocaleConfig {
            locale: "de".to_string(),
            catalog_dir: None,
        };
        assert!(matches!(Catalog::from_config(&config), Err(Error::Localization(_))));
        assert!(Catalog::from_config(&LocaleConfig::default()).is_ok());
    }
}
