//! Theme controller: load the stored preference, render it, toggle it.
//!
//! The page encodes the theme three times: the root style flag, which of the
//! two indicators is visible, and the persisted value. The controller is the
//! only writer of all three and keeps them equal to its in-memory state.
//!
//! TRADE-OFFS
//! ==========
//! A storage read failure at load is treated as "nothing stored" (DARK) and
//! only logged. A storage write failure on toggle still updates the
//! indicators before the error is returned, so what the user sees never
//! disagrees with the root flag.

use crate::config::ThemeConfig;
use crate::error::ThemeError;
use crate::host::{ClassTarget, PreferenceStore};
use crate::theme::ThemeState;

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

/// The three elements a controller drives.
#[derive(Clone, Debug)]
pub struct ThemeElements<E> {
    /// Document root receiving the light flag.
    pub root: E,
    /// Indicator visible under LIGHT.
    pub sun: E,
    /// Indicator visible under DARK.
    pub moon: E,
}

pub struct ThemeController<E, S> {
    elements: ThemeElements<E>,
    store: S,
    config: ThemeConfig,
    state: ThemeState,
}

impl<E: ClassTarget, S: PreferenceStore> ThemeController<E, S> {
    /// Read the stored preference and render it.
    pub fn initialize(elements: ThemeElements<E>, store: S, config: ThemeConfig) -> Result<Self, ThemeError> {
        let persisted = match store.read(&config.storage_key) {
            Ok(value) => value,
            Err(err) => {
                log::warn!("theme preference unreadable, using default ({}): {err}", err.error_code());
                None
            }
        };
        let state = ThemeState::from_persisted(persisted.as_deref());

        let controller = Self { elements, store, config, state };
        controller
            .elements
            .root
            .set_class(&controller.config.root_class, state.is_light())?;
        controller.show_indicator(state)?;

        log::debug!("theme initialized: {state}");
        Ok(controller)
    }

    #[must_use]
    pub fn state(&self) -> ThemeState {
        self.state
    }

    #[must_use]
    pub fn config(&self) -> &ThemeConfig {
        &self.config
    }

    #[must_use]
    pub fn elements(&self) -> &ThemeElements<E> {
        &self.elements
    }

    /// Flip the theme. The new state is read back from the root flag.
    pub fn toggle(&mut self) -> Result<ThemeState, ThemeError> {
        let is_light = self.elements.root.toggle_class(&self.config.root_class)?;
        let next = ThemeState::from_root_flag(is_light);
        self.state = next;

        let persisted = self.store.write(&self.config.storage_key, next.as_str());
        self.show_indicator(next)?;
        persisted?;

        log::debug!("theme toggled: {next}");
        Ok(next)
    }

    /// Whether root flag, indicators, and stored value all match the state.
    pub fn is_consistent(&self) -> Result<bool, ThemeError> {
        let hidden = &self.config.hidden_class;
        let light = self.state.is_light();
        let stored = self.store.read(&self.config.storage_key)?;

        Ok(self.elements.root.has_class(&self.config.root_class) == light
            && self.elements.sun.has_class(hidden) == !light
            && self.elements.moon.has_class(hidden) == light
            && ThemeState::from_persisted(stored.as_deref()) == self.state)
    }

    fn show_indicator(&self, state: ThemeState) -> Result<(), ThemeError> {
        let hidden = &self.config.hidden_class;
        let light = state.is_light();
        self.elements.sun.set_class(hidden, !light)?;
        self.elements.moon.set_class(hidden, light)
    }
}
