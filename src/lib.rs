//! # theme-toggle
//!
//! Light/dark theme toggle for a web page, compiled to WebAssembly. On load
//! it reads the stored preference from `localStorage`, applies the `light`
//! class to the document root, and shows exactly one of the sun/moon
//! indicators. Clicking the toggle control flips all three and persists the
//! new choice.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`theme`] | `ThemeState` and its persisted encoding |
//! | [`config`] | Storage key, class names, and element ids |
//! | [`error`] | `ThemeError` |
//! | [`host`] | Capability traits plus in-memory implementations |
//! | [`controller`] | Initialize / toggle logic over injected collaborators |
//! | [`component`] | Leptos markup for the toggle button |
//! | `browser` | web-sys bindings and click listener (`hydrate` only) |

pub mod component;
pub mod config;
pub mod controller;
pub mod error;
pub mod host;
pub mod theme;

#[cfg(feature = "hydrate")]
pub mod browser;

pub use config::ThemeConfig;
pub use controller::{ThemeController, ThemeElements};
pub use error::ThemeError;
pub use theme::ThemeState;

/// Wasm entry point: install logging and bind to the page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Info) {
        // A logger installed by the embedding page wins.
        log::debug!("console logger not installed: {err}");
    }

    match browser::mount_from_document() {
        Ok(controller) => log::info!("theme toggle mounted ({})", controller.borrow().state()),
        Err(err) => log::error!("theme toggle not mounted ({}): {err}", err.error_code()),
    }
}
