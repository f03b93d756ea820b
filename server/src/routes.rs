//! Router assembly and the page shell.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server only hosts the page: `/` returns the HTML shell with the
//! server-rendered toggle markup, and `/pkg` serves the wasm bundle that
//! binds to it. The theme preference never reaches the server.

use std::sync::Arc;

use axum::Router;
use axum::extract::State;
use axum::response::Html;
use axum::routing::get;
use leptos::prelude::*;
use theme_toggle::ThemeConfig;
use theme_toggle::component::ThemeToggle;
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

/// Module script loading the wasm-bindgen output of the `theme-toggle` crate.
const BUNDLE_SCRIPT: &str = r#"import init from "/pkg/theme_toggle.js"; init();"#;

#[derive(Clone)]
struct AppState {
    page: Arc<str>,
}

pub fn app(config: &ServerConfig) -> Router {
    let state = AppState { page: Arc::from(render_page(&config.theme)) };

    Router::new()
        .route("/", get(index))
        .nest_service("/pkg", ServeDir::new(&config.pkg_dir))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn index(State(state): State<AppState>) -> Html<String> {
    Html(state.page.to_string())
}

/// Render the full HTML document for `theme`.
pub fn render_page(theme: &ThemeConfig) -> String {
    Owner::new().with(|| shell(theme.clone()).to_html())
}

/// HTML shell with the toggle in the header and the bundle script last.
fn shell(theme: ThemeConfig) -> impl IntoView {
    let config_attr = config_attribute(&theme);
    let css = page_css(&theme);

    view! {
        <!DOCTYPE html>
        <html lang="en" data-theme-config=config_attr>
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <title>"Theme toggle"</title>
                <style>{css}</style>
            </head>
            <body>
                <header class="page-header">
                    <ThemeToggle config=theme/>
                </header>
                <main>
                    <h1>"Theme toggle"</h1>
                    <p>"Your light or dark choice is remembered on this device."</p>
                </main>
                <script type="module">{BUNDLE_SCRIPT}</script>
            </body>
        </html>
    }
}

/// JSON override for the root element, omitted when `theme` is the default.
fn config_attribute(theme: &ThemeConfig) -> Option<String> {
    if theme.is_default() {
        return None;
    }
    match serde_json::to_string(theme) {
        Ok(json) => Some(json),
        Err(e) => {
            tracing::warn!(error = %e, "theme config not serializable, page uses defaults");
            None
        }
    }
}

/// Theme colors keyed on the root class, plus the indicator hiding rule.
fn page_css(theme: &ThemeConfig) -> String {
    format!(
        ":root{{--bg:#121212;--fg:#e8e8e8}}\
         :root.{light}{{--bg:#fafafa;--fg:#1a1a1a}}\
         body{{margin:0;font-family:system-ui,sans-serif;background:var(--bg);color:var(--fg)}}\
         .page-header{{display:flex;justify-content:flex-end;padding:1rem}}\
         .theme-toggle{{font-size:1.25rem;background:none;border:none;color:inherit;cursor:pointer}}\
         .{hidden}{{display:none}}",
        light = theme.root_class,
        hidden = theme.hidden_class,
    )
}

#[cfg(test)]
#[path = "routes_test.rs"]
mod tests;
