//! Theme state record and its transitions.
//!
//! DESIGN
//! ======
//! Every operation takes the current [`ThemeState`] and returns the next one.
//! Nothing here touches storage or the page; the controller persists and
//! applies whatever these functions decide. Four configurations are
//! reachable: {light, dark} x {following, overridden}.

use crate::theme::Theme;

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

/// What was found in storage at startup.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StoredTheme {
    /// Parsed `theme` value; unparseable values read as `None`.
    pub theme: Option<Theme>,
    /// `true` only when the override key held exactly `"true"`.
    pub overridden: bool,
}

impl StoredTheme {
    /// Build a snapshot from the raw storage strings.
    #[must_use]
    pub fn from_raw(theme: Option<&str>, override_flag: Option<&str>) -> Self {
        Self {
            theme: theme.and_then(Theme::parse),
            overridden: override_flag == Some(crate::consts::OVERRIDE_SET),
        }
    }
}

/// The active theme and whether it came from a manual choice.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ThemeState {
    pub theme: Theme,
    pub overridden: bool,
}

impl ThemeState {
    /// State that follows the system preference.
    #[must_use]
    pub fn following(prefers_dark: bool) -> Self {
        Self { theme: Theme::from_prefers_dark(prefers_dark), overridden: false }
    }

    /// Startup resolution: a stored override wins only when a valid theme was
    /// stored alongside it; otherwise fall back to the system preference.
    #[must_use]
    pub fn resolve(stored: StoredTheme, prefers_dark: bool) -> Self {
        match stored {
            StoredTheme { theme: Some(theme), overridden: true } => Self { theme, overridden: true },
            _ => Self::following(prefers_dark),
        }
    }

    /// Next state after the system color scheme flips. A manual override
    /// suppresses the change.
    #[must_use]
    pub fn on_system_change(self, prefers_dark: bool) -> Self {
        if self.overridden { self } else { Self::following(prefers_dark) }
    }

    /// Flip the theme and mark it as a manual choice.
    #[must_use]
    pub fn toggled(self) -> Self {
        Self { theme: self.theme.opposite(), overridden: true }
    }

    /// Tooltip for the toggle button: names the theme a click switches to and
    /// whether the current theme is manual or system-driven.
    #[must_use]
    pub fn tooltip(self) -> String {
        let next = self.theme.opposite();
        if self.overridden {
            format!("Switch to {next} theme (manual override active)")
        } else {
            format!("Switch to {next} theme (following system preference)")
        }
    }
}
