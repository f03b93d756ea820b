//! Leptos markup for the theme toggle control.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server renders this component into the page; the wasm bundle then
//! binds to the rendered ids. The `initial` state only decides which
//! indicator starts hidden, so server markup matches a first visit.

use leptos::prelude::*;

use crate::config::ThemeConfig;
use crate::theme::ThemeState;

/// Toggle button holding the sun and moon indicators.
#[component]
pub fn ThemeToggle(
    /// Element ids and class names to render.
    #[prop(optional)]
    config: ThemeConfig,
    /// State the markup starts in before the bundle mounts.
    #[prop(optional)]
    initial: ThemeState,
) -> impl IntoView {
    let (sun_class, moon_class) = indicator_classes(&config, initial);

    view! {
        <button id=config.toggle_id type="button" class="theme-toggle" title="Toggle theme">
            <span id=config.sun_id class=sun_class aria-hidden="true">"☀"</span>
            <span id=config.moon_id class=moon_class aria-hidden="true">"☾"</span>
        </button>
    }
}

/// Class attribute values for the sun and moon indicators.
fn indicator_classes(config: &ThemeConfig, state: ThemeState) -> (String, String) {
    let hidden = |is_hidden: bool| {
        if is_hidden {
            format!("theme-icon {}", config.hidden_class)
        } else {
            "theme-icon".to_owned()
        }
    };
    (hidden(!state.is_light()), hidden(state.is_light()))
}

#[cfg(test)]
#[path = "component_test.rs"]
mod component_test;
