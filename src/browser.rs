//! web-sys backends: `localStorage`, the document, and `matchMedia`.
//!
//! Requires a browser environment. Missing pieces degrade instead of
//! failing: no storage means nothing persists, no media query list means
//! "prefers light".

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, MediaQueryList, MediaQueryListEvent, Storage};

use crate::backend::{ColorSchemeSource, ThemeDocument, ThemeStore};
use crate::error::ThemeError;

const CHANGE_EVENT: &str = "change";

fn js_message(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

/// `window.localStorage`, if the page is allowed to use it.
pub struct LocalStore {
    storage: Option<Storage>,
}

impl LocalStore {
    #[must_use]
    pub fn open() -> Self {
        let storage = match web_sys::window().map(|w| w.local_storage()) {
            Some(Ok(storage)) => storage,
            Some(Err(err)) => {
                log::warn!("localStorage threw on access: {}", js_message(&err));
                None
            }
            None => None,
        };
        if storage.is_none() {
            log::info!("localStorage unavailable; theme choice will not persist");
        }
        Self { storage }
    }
}

impl ThemeStore for LocalStore {
    fn get(&self, key: &str) -> Result<Option<String>, ThemeError> {
        let Some(storage) = &self.storage else {
            return Ok(None);
        };
        storage
            .get_item(key)
            .map_err(|err| ThemeError::Storage { op: "get", key: key.to_owned(), message: js_message(&err) })
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), ThemeError> {
        let Some(storage) = &self.storage else {
            return Ok(());
        };
        storage
            .set_item(key, value)
            .map_err(|err| ThemeError::Storage { op: "set", key: key.to_owned(), message: js_message(&err) })
    }

    fn remove(&mut self, key: &str) -> Result<(), ThemeError> {
        let Some(storage) = &self.storage else {
            return Ok(());
        };
        storage
            .remove_item(key)
            .map_err(|err| ThemeError::Storage { op: "remove", key: key.to_owned(), message: js_message(&err) })
    }
}

/// The live page document.
pub struct DomDocument {
    document: Document,
}

impl DomDocument {
    pub fn open() -> Result<Self, ThemeError> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| ThemeError::Dom("no window.document".into()))?;
        Ok(Self { document })
    }
}

impl ThemeDocument for DomDocument {
    fn set_root_attribute(&mut self, name: &str, value: &str) -> Result<(), ThemeError> {
        let root = self
            .document
            .document_element()
            .ok_or_else(|| ThemeError::Dom("document has no root element".into()))?;
        root.set_attribute(name, value).map_err(|err| ThemeError::Dom(js_message(&err)))
    }

    fn root_attribute(&self, name: &str) -> Result<Option<String>, ThemeError> {
        let root = self
            .document
            .document_element()
            .ok_or_else(|| ThemeError::Dom("document has no root element".into()))?;
        Ok(root.get_attribute(name))
    }

    fn set_element_attributes(&mut self, id: &str, attributes: &[(&str, &str)]) -> Result<bool, ThemeError> {
        let Some(element) = self.document.get_element_by_id(id) else {
            return Ok(false);
        };
        for (name, value) in attributes {
            element.set_attribute(name, value).map_err(|err| ThemeError::Dom(js_message(&err)))?;
        }
        Ok(true)
    }
}

/// `window.matchMedia(query)`.
pub struct MediaScheme {
    list: Option<MediaQueryList>,
}

impl MediaScheme {
    #[must_use]
    pub fn open(query: &str) -> Self {
        let list = match web_sys::window().map(|w| w.match_media(query)) {
            Some(Ok(list)) => list,
            Some(Err(err)) => {
                log::warn!("matchMedia({query}) threw: {}", js_message(&err));
                None
            }
            None => None,
        };
        Self { list }
    }

    /// The underlying list, for subscribing to change events.
    #[must_use]
    pub fn list(&self) -> Option<&MediaQueryList> {
        self.list.as_ref()
    }
}

impl ColorSchemeSource for MediaScheme {
    fn prefers_dark(&self) -> bool {
        self.list.as_ref().map_or(false, MediaQueryList::matches)
    }
}

/// A `change` listener on a media query list. Dropping it removes the
/// listener.
pub struct MediaSubscription {
    list: MediaQueryList,
    callback: Closure<dyn FnMut(MediaQueryListEvent)>,
}

impl MediaSubscription {
    /// Call `on_change` with the new "matches" value on every change event.
    pub fn subscribe(list: MediaQueryList, mut on_change: impl FnMut(bool) + 'static) -> Result<Self, ThemeError> {
        let callback = Closure::<dyn FnMut(MediaQueryListEvent)>::new(move |event: MediaQueryListEvent| {
            on_change(event.matches());
        });
        list.add_event_listener_with_callback(CHANGE_EVENT, callback.as_ref().unchecked_ref())
            .map_err(|err| ThemeError::Dom(js_message(&err)))?;
        Ok(Self { list, callback })
    }

    #[must_use]
    pub fn list(&self) -> &MediaQueryList {
        &self.list
    }
}

impl Drop for MediaSubscription {
    fn drop(&mut self) {
        if let Err(err) = self
            .list
            .remove_event_listener_with_callback(CHANGE_EVENT, self.callback.as_ref().unchecked_ref())
        {
            log::warn!("could not remove color-scheme listener: {}", js_message(&err));
        }
    }
}
