//! # theme-switch
//!
//! Light/dark theme selection for a web page, compiled to WebAssembly.
//!
//! The page gets a `data-theme` attribute on its root element that follows
//! the operating system's color-scheme preference until the user toggles it
//! by hand. The manual choice survives reloads (via `localStorage`) and can be
//! dropped again to go back to following the system.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`controller`] | [`controller::ThemeController`]: initialize, toggle, reset, system change |
//! | [`state`] | [`state::ThemeState`] record and its pure transitions |
//! | [`theme`] | The [`theme::Theme`] value type |
//! | [`config`] | Storage keys, element ids and log level, loadable from JSON |
//! | [`backend`] | Traits for storage, document and color-scheme source |
//! | [`memory`] | In-memory backends (tests, non-browser hosts) |
//! | [`browser`] | web-sys backends and the media-query subscription |
//! | [`session`] | `initTheme()` and the JS-facing `ThemeSession` |
//! | [`consts`] | Default key and attribute names |
//! | [`error`] | [`error::ThemeError`] |

pub mod backend;
pub mod browser;
pub mod config;
pub mod consts;
pub mod controller;
pub mod error;
pub mod memory;
pub mod session;
pub mod state;
pub mod theme;

pub use config::ThemeConfig;
pub use controller::ThemeController;
pub use error::ThemeError;
pub use state::ThemeState;
pub use theme::Theme;
