//! Theme controller: keeps storage, the root attribute and the toggle button
//! in step with [`ThemeState`].
//!
//! SYSTEM CONTEXT
//! ==============
//! The controller is host-agnostic. In the browser it is driven by
//! [`crate::session::ThemeSession`] (page load, button clicks, media-query
//! change events); in tests it runs over [`crate::memory`] backends.
//!
//! Every operation follows the same shape: compute the next state, apply it
//! to the document, persist it. Backend failures are logged and never
//! surfaced, so the page always ends up with some theme.

use crate::backend::{ColorSchemeSource, ThemeDocument, ThemeStore};
use crate::config::ThemeConfig;
use crate::consts::{OVERRIDE_SET, TITLE_ATTRIBUTE, TOOLTIP_PLACEMENT_ATTRIBUTE, TOOLTIP_TRIGGER_ATTRIBUTE};
use crate::state::{StoredTheme, ThemeState};
use crate::theme::Theme;

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

pub struct ThemeController<S, D, P> {
    config: ThemeConfig,
    store: S,
    document: D,
    scheme: P,
    state: ThemeState,
}

impl<S, D, P> ThemeController<S, D, P>
where
    S: ThemeStore,
    D: ThemeDocument,
    P: ColorSchemeSource,
{
    /// Build a controller. Nothing is read or written until [`Self::initialize`].
    pub fn new(config: ThemeConfig, store: S, document: D, scheme: P) -> Self {
        Self { config, store, document, scheme, state: ThemeState::default() }
    }

    // --- Operations ---

    /// Page-load entry point. A stored manual override with a valid theme is
    /// re-applied untouched; anything else falls back to the system
    /// preference, which is then persisted with the override cleared.
    pub fn initialize(&mut self) -> ThemeState {
        let stored = self.load_stored();
        let prefers_dark = self.scheme.prefers_dark();
        self.state = ThemeState::resolve(stored, prefers_dark);
        log::debug!(
            "theme init: stored={stored:?} prefers_dark={prefers_dark} -> {:?}",
            self.state
        );

        self.apply_theme(self.state.theme);
        if !self.state.overridden {
            self.persist_theme();
            self.clear_override();
        }
        self.state
    }

    /// The system color scheme changed. Ignored while a manual override is
    /// active.
    pub fn system_preference_changed(&mut self, prefers_dark: bool) {
        if self.state.overridden {
            log::debug!("system scheme changed (dark={prefers_dark}); manual override kept");
            return;
        }
        self.state = self.state.on_system_change(prefers_dark);
        log::debug!("system scheme changed (dark={prefers_dark}) -> {}", self.state.theme);
        self.apply_theme(self.state.theme);
        self.persist_theme();
    }

    /// Flip the theme and record it as a manual choice.
    pub fn toggle_theme(&mut self) -> Theme {
        self.state = self.state.toggled();
        log::info!("theme toggled to {} (manual override)", self.state.theme);
        self.apply_theme(self.state.theme);
        self.persist_theme();
        self.set_override();
        self.state.theme
    }

    /// Drop the manual override and go back to the system preference.
    pub fn reset_to_system_theme(&mut self) -> Theme {
        self.clear_override();
        self.state = ThemeState::following(self.scheme.prefers_dark());
        log::info!("theme reset to system preference ({})", self.state.theme);
        self.apply_theme(self.state.theme);
        self.persist_theme();
        self.state.theme
    }

    // --- Accessors ---

    #[must_use]
    pub fn state(&self) -> ThemeState {
        self.state
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        self.state.theme
    }

    #[must_use]
    pub fn is_overridden(&self) -> bool {
        self.state.overridden
    }

    /// Theme currently shown on the root element, read back from the page.
    /// `None` if the attribute is missing, unparseable or unreadable.
    #[must_use]
    pub fn displayed_theme(&self) -> Option<Theme> {
        match self.document.root_attribute(&self.config.theme_attribute) {
            Ok(raw) => raw.as_deref().and_then(Theme::parse),
            Err(err) => {
                log::warn!("could not read {}: {err}", self.config.theme_attribute);
                None
            }
        }
    }

    #[must_use]
    pub fn config(&self) -> &ThemeConfig {
        &self.config
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    #[must_use]
    pub fn document(&self) -> &D {
        &self.document
    }

    #[must_use]
    pub fn scheme(&self) -> &P {
        &self.scheme
    }

    // --- Internals ---

    /// Set the root attribute, then refresh the toggle button's tooltip if
    /// the page has one. The tooltip is built from the controller state, so
    /// callers update `self.state` first.
    fn apply_theme(&mut self, theme: Theme) {
        if let Err(err) = self.document.set_root_attribute(&self.config.theme_attribute, theme.as_str()) {
            log::warn!("could not set {}={theme}: {err}", self.config.theme_attribute);
        }

        let tooltip = self.state.tooltip();
        let attributes = [
            (TITLE_ATTRIBUTE, tooltip.as_str()),
            (TOOLTIP_TRIGGER_ATTRIBUTE, self.config.tooltip_trigger.as_str()),
            (TOOLTIP_PLACEMENT_ATTRIBUTE, self.config.tooltip_placement.as_str()),
        ];
        match self.document.set_element_attributes(&self.config.toggler_id, &attributes) {
            Ok(true) => {}
            Ok(false) => log::trace!("no #{} element; tooltip skipped", self.config.toggler_id),
            Err(err) => log::warn!("could not update #{}: {err}", self.config.toggler_id),
        }
    }

    fn load_stored(&self) -> StoredTheme {
        let theme = self.read_key(&self.config.storage_key);
        let override_flag = self.read_key(&self.config.override_key);
        StoredTheme::from_raw(theme.as_deref(), override_flag.as_deref())
    }

    fn read_key(&self, key: &str) -> Option<String> {
        match self.store.get(key) {
            Ok(value) => value,
            Err(err) => {
                log::warn!("treating {key:?} as unset: {err}");
                None
            }
        }
    }

    fn persist_theme(&mut self) {
        let key = &self.config.storage_key;
        if let Err(err) = self.store.set(key, self.state.theme.as_str()) {
            log::warn!("could not persist theme: {err}");
        }
    }

    fn set_override(&mut self) {
        if let Err(err) = self.store.set(&self.config.override_key, OVERRIDE_SET) {
            log::warn!("could not persist theme override: {err}");
        }
    }

    fn clear_override(&mut self) {
        if let Err(err) = self.store.remove(&self.config.override_key) {
            log::warn!("could not clear theme override: {err}");
        }
    }
}
