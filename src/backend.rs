//! Host seams the controller is written against.
//!
//! The browser implementations live in [`crate::browser`]; [`crate::memory`]
//! provides in-process ones. The controller only ever sees these traits.

use crate::error::ThemeError;

/// String key-value persistence (`localStorage` in the browser).
pub trait ThemeStore {
    /// Read a key. A missing key is `Ok(None)`.
    fn get(&self, key: &str) -> Result<Option<String>, ThemeError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), ThemeError>;
    /// Remove a key. Removing a missing key succeeds.
    fn remove(&mut self, key: &str) -> Result<(), ThemeError>;
}

/// The page: a root element attribute and an optional element found by id.
pub trait ThemeDocument {
    fn set_root_attribute(&mut self, name: &str, value: &str) -> Result<(), ThemeError>;
    fn root_attribute(&self, name: &str) -> Result<Option<String>, ThemeError>;
    /// Set attributes on the element with `id`. Returns `Ok(false)` when no
    /// such element exists.
    fn set_element_attributes(&mut self, id: &str, attributes: &[(&str, &str)]) -> Result<bool, ThemeError>;
}

/// Current answer of the "prefers dark" media condition.
pub trait ColorSchemeSource {
    fn prefers_dark(&self) -> bool;
}
