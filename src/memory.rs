//! In-memory backends.
//!
//! Used by the controller tests and by any host that wants the theme rules
//! without a browser. [`MemoryScheme`] uses interior mutability so a test can
//! flip the system preference while the controller owns the source.

use std::cell::Cell;
use std::collections::HashMap;

use crate::backend::{ColorSchemeSource, ThemeDocument, ThemeStore};
use crate::error::ThemeError;

#[cfg(test)]
#[path = "memory_test.rs"]
mod memory_test;

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate from `(key, value)` pairs.
    #[must_use]
    pub fn with_entries<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        Self { entries: entries.into_iter().map(|(k, v)| (k.to_owned(), v.to_owned())).collect() }
    }

    #[must_use]
    pub fn value(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

impl ThemeStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, ThemeError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), ThemeError> {
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), ThemeError> {
        self.entries.remove(key);
        Ok(())
    }
}

/// A document with a root element and a set of elements addressable by id.
#[derive(Debug, Clone, Default)]
pub struct MemoryDocument {
    root: HashMap<String, String>,
    elements: HashMap<String, HashMap<String, String>>,
}

impl MemoryDocument {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an empty element that `set_element_attributes` can find.
    #[must_use]
    pub fn with_element(mut self, id: &str) -> Self {
        self.elements.entry(id.to_owned()).or_default();
        self
    }

    #[must_use]
    pub fn element_attribute(&self, id: &str, name: &str) -> Option<&str> {
        self.elements.get(id)?.get(name).map(String::as_str)
    }
}

impl ThemeDocument for MemoryDocument {
    fn set_root_attribute(&mut self, name: &str, value: &str) -> Result<(), ThemeError> {
        self.root.insert(name.to_owned(), value.to_owned());
        Ok(())
    }

    fn root_attribute(&self, name: &str) -> Result<Option<String>, ThemeError> {
        Ok(self.root.get(name).cloned())
    }

    fn set_element_attributes(&mut self, id: &str, attributes: &[(&str, &str)]) -> Result<bool, ThemeError> {
        let Some(element) = self.elements.get_mut(id) else {
            return Ok(false);
        };
        for (name, value) in attributes {
            element.insert((*name).to_owned(), (*value).to_owned());
        }
        Ok(true)
    }
}

/// A system preference the test (or host) can flip at will.
#[derive(Debug, Default)]
pub struct MemoryScheme {
    prefers_dark: Cell<bool>,
}

impl MemoryScheme {
    #[must_use]
    pub fn new(prefers_dark: bool) -> Self {
        Self { prefers_dark: Cell::new(prefers_dark) }
    }

    pub fn set_prefers_dark(&self, prefers_dark: bool) {
        self.prefers_dark.set(prefers_dark);
    }
}

impl ColorSchemeSource for MemoryScheme {
    fn prefers_dark(&self) -> bool {
        self.prefers_dark.get()
    }
}
