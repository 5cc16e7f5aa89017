//! Default names shared between the browser page and this crate.
//!
//! Stylesheets key off [`DEFAULT_THEME_ATTRIBUTE`] and page scripts read the
//! two storage keys, so changing any of these is a page-facing change.

/// Storage key holding the last applied theme (`"light"` / `"dark"`).
pub const DEFAULT_STORAGE_KEY: &str = "theme";

/// Storage key holding `"true"` while the user has a manual override.
pub const DEFAULT_OVERRIDE_KEY: &str = "theme-override";

/// Value written under the override key.
pub const OVERRIDE_SET: &str = "true";

/// Attribute on the root element that mirrors the active theme.
pub const DEFAULT_THEME_ATTRIBUTE: &str = "data-theme";

/// Media condition that reports a dark system preference.
pub const DEFAULT_MEDIA_QUERY: &str = "(prefers-color-scheme: dark)";

/// Element id of the optional toggle button.
pub const DEFAULT_TOGGLER_ID: &str = "theme-toggler";

/// Value of `data-bs-toggle` on the toggle button.
pub const DEFAULT_TOOLTIP_TRIGGER: &str = "tooltip";

/// Value of `data-bs-placement` on the toggle button.
pub const DEFAULT_TOOLTIP_PLACEMENT: &str = "bottom";

/// Console log level when the config names none.
pub const DEFAULT_LOG_LEVEL: &str = "info";

// Toggler attribute names.
pub const TITLE_ATTRIBUTE: &str = "title";
pub const TOOLTIP_TRIGGER_ATTRIBUTE: &str = "data-bs-toggle";
pub const TOOLTIP_PLACEMENT_ATTRIBUTE: &str = "data-bs-placement";
