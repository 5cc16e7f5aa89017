//! Page-lifetime theme session exported to JavaScript.
//!
//! ```javascript
//! import init, { initTheme } from "./theme_switch.js";
//!
//! await init();
//! const theme = initTheme();            // or initTheme('{"togglerId":"mode"}')
//! document.getElementById("theme-toggler").onclick = () => theme.toggleTheme();
//! document.getElementById("theme-reset").onclick = () => theme.resetToSystemTheme();
//! ```
//!
//! The session owns the controller and the color-scheme subscription. The
//! listener stays registered until `dispose()` is called or the session is
//! freed.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::MediaQueryList;

use crate::browser::{DomDocument, LocalStore, MediaScheme, MediaSubscription};
use crate::config::ThemeConfig;
use crate::controller::ThemeController;
use crate::error::ThemeError;

type BrowserController = ThemeController<LocalStore, DomDocument, MediaScheme>;

#[wasm_bindgen]
pub struct ThemeSession {
    controller: Rc<RefCell<BrowserController>>,
    subscription: Option<MediaSubscription>,
}

/// Install the panic hook and logging, apply the initial theme and start following the system
/// color scheme. `config` is an optional JSON object of [`ThemeConfig`]
/// fields.
#[wasm_bindgen(js_name = initTheme)]
pub fn init_theme(config: Option<String>) -> Result<ThemeSession, JsValue> {
    console_error_panic_hook::set_once();
    let config = match config.as_deref() {
        Some(raw) => ThemeConfig::from_json(raw),
        None => Ok(ThemeConfig::default()),
    }
    .map_err(to_js)?;
    install_logging(&config);
    ThemeSession::start(config).map_err(to_js)
}

fn to_js(err: ThemeError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn install_logging(config: &ThemeConfig) {
    let level = config.log_level().unwrap_or(log::Level::Info);
    if let Err(err) = console_log::init_with_level(level) {
        log::debug!("console logger already installed: {err}");
    }
}

impl ThemeSession {
    fn start(config: ThemeConfig) -> Result<Self, ThemeError> {
        let scheme = MediaScheme::open(&config.media_query);
        let list = scheme.list().cloned();
        let mut controller = ThemeController::new(config, LocalStore::open(), DomDocument::open()?, scheme);
        let state = controller.initialize();
        log::info!("theme initialized: {} (override={})", state.theme, state.overridden);

        let controller = Rc::new(RefCell::new(controller));
        let subscription = match list {
            Some(list) => {
                let listener = Rc::clone(&controller);
                Some(MediaSubscription::subscribe(list, move |prefers_dark| {
                    match listener.try_borrow_mut() {
                        Ok(mut controller) => controller.system_preference_changed(prefers_dark),
                        Err(_) => log::warn!("color-scheme change dropped: controller busy"),
                    }
                })?)
            }
            None => {
                log::info!("matchMedia unavailable; system theme changes will not be followed");
                None
            }
        };

        Ok(Self { controller, subscription })
    }

    /// The media query list the session listens on, until disposed.
    #[must_use]
    pub fn media_query_list(&self) -> Option<&MediaQueryList> {
        self.subscription.as_ref().map(MediaSubscription::list)
    }

    fn with_controller<T>(&self, op: &str, f: impl FnOnce(&mut BrowserController) -> T) -> Option<T> {
        match self.controller.try_borrow_mut() {
            Ok(mut controller) => Some(f(&mut controller)),
            Err(_) => {
                log::warn!("theme {op} skipped: controller busy");
                None
            }
        }
    }
}

#[wasm_bindgen]
impl ThemeSession {
    /// Flip the theme as a manual override. Returns the new theme name.
    #[wasm_bindgen(js_name = toggleTheme)]
    pub fn toggle_theme(&self) -> Option<String> {
        self.with_controller("toggle", |c| c.toggle_theme().as_str().to_owned())
    }

    /// Drop the manual override and follow the system again. Returns the new
    /// theme name.
    #[wasm_bindgen(js_name = resetToSystemTheme)]
    pub fn reset_to_system_theme(&self) -> Option<String> {
        self.with_controller("reset", |c| c.reset_to_system_theme().as_str().to_owned())
    }

    #[wasm_bindgen(getter)]
    pub fn theme(&self) -> Option<String> {
        self.with_controller("read", |c| c.theme().as_str().to_owned())
    }

    #[wasm_bindgen(getter)]
    pub fn overridden(&self) -> bool {
        self.with_controller("read", |c| c.is_overridden()).unwrap_or(false)
    }

    /// Stop following system color-scheme changes.
    pub fn dispose(&mut self) {
        if self.subscription.take().is_some() {
            log::debug!("color-scheme listener removed");
        }
    }
}
