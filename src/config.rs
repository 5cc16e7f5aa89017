//! Theme configuration with page-compatible defaults.
//!
//! Every field defaults to the name the page already uses, so `initTheme()`
//! with no argument needs no configuration at all. A page that renamed its
//! storage keys or toggle button passes a JSON object with just those fields.

use std::str::FromStr;

use serde::Deserialize;

use crate::consts::*;
use crate::error::ThemeError;

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct ThemeConfig {
    pub storage_key: String,
    pub override_key: String,
    pub theme_attribute: String,
    pub media_query: String,
    pub toggler_id: String,
    pub tooltip_trigger: String,
    pub tooltip_placement: String,
    pub log_level: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
            override_key: DEFAULT_OVERRIDE_KEY.to_owned(),
            theme_attribute: DEFAULT_THEME_ATTRIBUTE.to_owned(),
            media_query: DEFAULT_MEDIA_QUERY.to_owned(),
            toggler_id: DEFAULT_TOGGLER_ID.to_owned(),
            tooltip_trigger: DEFAULT_TOOLTIP_TRIGGER.to_owned(),
            tooltip_placement: DEFAULT_TOOLTIP_PLACEMENT.to_owned(),
            log_level: DEFAULT_LOG_LEVEL.to_owned(),
        }
    }
}

impl ThemeConfig {
    /// Parse and validate a JSON object. Missing fields take their defaults.
    pub fn from_json(raw: &str) -> Result<Self, ThemeError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that would make storage or the DOM misbehave.
    pub fn validate(&self) -> Result<(), ThemeError> {
        let required = [
            ("storageKey", &self.storage_key),
            ("overrideKey", &self.override_key),
            ("themeAttribute", &self.theme_attribute),
            ("mediaQuery", &self.media_query),
            ("togglerId", &self.toggler_id),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(ThemeError::Config { field, reason: "must not be empty".into() });
            }
        }
        if self.storage_key == self.override_key {
            return Err(ThemeError::Config {
                field: "overrideKey",
                reason: format!("must differ from storageKey ({:?})", self.storage_key),
            });
        }
        self.log_level()?;
        Ok(())
    }

    /// Parsed console log level.
    pub fn log_level(&self) -> Result<log::Level, ThemeError> {
        log::Level::from_str(&self.log_level)
            .map_err(|_| ThemeError::Config { field: "logLevel", reason: format!("unknown level {:?}", self.log_level) })
    }
}
