//! Live-page bindings: web-sys adapters, mount, and the click listener.
//!
//! SYSTEM CONTEXT
//! ==============
//! Compiled only with the `hydrate` feature. Everything here is glue between
//! `web_sys` handles and the host traits; theme logic lives in `controller`.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;

use crate::config::{CONFIG_ATTRIBUTE, ThemeConfig};
use crate::controller::{ThemeController, ThemeElements};
use crate::error::ThemeError;
use crate::host::{ClassTarget, PreferenceStore};

pub type BrowserController = ThemeController<DomElement, LocalStorage>;

fn js_message(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

/// A DOM element driven through its `classList`.
#[derive(Clone, Debug)]
pub struct DomElement(web_sys::Element);

impl DomElement {
    #[must_use]
    pub fn new(element: web_sys::Element) -> Self {
        Self(element)
    }

    fn class_error(name: &str, err: &JsValue) -> ThemeError {
        ThemeError::ClassList { class: name.to_owned(), message: js_message(err) }
    }
}

impl ClassTarget for DomElement {
    fn add_class(&self, name: &str) -> Result<(), ThemeError> {
        self.0
            .class_list()
            .add_1(name)
            .map_err(|err| Self::class_error(name, &err))
    }

    fn remove_class(&self, name: &str) -> Result<(), ThemeError> {
        self.0
            .class_list()
            .remove_1(name)
            .map_err(|err| Self::class_error(name, &err))
    }

    fn has_class(&self, name: &str) -> bool {
        self.0.class_list().contains(name)
    }

    fn toggle_class(&self, name: &str) -> Result<bool, ThemeError> {
        self.0
            .class_list()
            .toggle(name)
            .map_err(|err| Self::class_error(name, &err))
    }
}

/// `window.localStorage`, which some browsers withhold (privacy modes).
#[derive(Clone, Debug)]
pub struct LocalStorage(Option<web_sys::Storage>);

impl LocalStorage {
    #[must_use]
    pub fn from_window(window: &web_sys::Window) -> Self {
        match window.local_storage() {
            Ok(storage) => Self(storage),
            Err(err) => {
                log::warn!("localStorage unavailable: {}", js_message(&err));
                Self(None)
            }
        }
    }
}

impl PreferenceStore for LocalStorage {
    fn read(&self, key: &str) -> Result<Option<String>, ThemeError> {
        let Some(storage) = &self.0 else {
            return Ok(None);
        };
        storage
            .get_item(key)
            .map_err(|err| ThemeError::Storage(js_message(&err)))
    }

    fn write(&self, key: &str, value: &str) -> Result<(), ThemeError> {
        let Some(storage) = &self.0 else {
            return Err(ThemeError::StorageUnavailable);
        };
        storage
            .set_item(key, value)
            .map_err(|err| ThemeError::Storage(js_message(&err)))
    }
}

fn element_by_id(document: &web_sys::Document, id: &str) -> Result<web_sys::Element, ThemeError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| ThemeError::MissingElement { id: id.to_owned() })
}

/// Bind the theme toggle to the current page.
///
/// Renders the stored preference immediately and attaches a `click` listener
/// to the toggle control. The listener lives for the rest of the page.
pub fn mount(config: ThemeConfig) -> Result<Rc<RefCell<BrowserController>>, ThemeError> {
    let window = web_sys::window().ok_or(ThemeError::NoWindow)?;
    let document = window.document().ok_or(ThemeError::NoDocument)?;
    let root = document
        .document_element()
        .ok_or_else(|| ThemeError::MissingElement { id: "html".to_owned() })?;

    let elements = ThemeElements {
        root: DomElement::new(root),
        sun: DomElement::new(element_by_id(&document, &config.sun_id)?),
        moon: DomElement::new(element_by_id(&document, &config.moon_id)?),
    };
    let toggle = element_by_id(&document, &config.toggle_id)?;
    let store = LocalStorage::from_window(&window);

    let controller = Rc::new(RefCell::new(ThemeController::initialize(elements, store, config)?));

    let handle = Rc::clone(&controller);
    let on_click = Closure::<dyn FnMut(web_sys::Event)>::new(move |_event: web_sys::Event| {
        let Ok(mut controller) = handle.try_borrow_mut() else {
            log::warn!("theme toggle ignored: controller busy");
            return;
        };
        if let Err(err) = controller.toggle() {
            log::warn!("theme toggle incomplete ({}): {err}", err.error_code());
        }
    });
    toggle
        .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
        .map_err(|err| ThemeError::Listener(js_message(&err)))?;
    on_click.forget();

    Ok(controller)
}

/// Mount using the config in the root's `data-theme-config` attribute.
pub fn mount_from_document() -> Result<Rc<RefCell<BrowserController>>, ThemeError> {
    let document = web_sys::window()
        .ok_or(ThemeError::NoWindow)?
        .document()
        .ok_or(ThemeError::NoDocument)?;
    let raw = document
        .document_element()
        .and_then(|root| root.get_attribute(CONFIG_ATTRIBUTE));
    let config = ThemeConfig::from_attribute(raw.as_deref())?;
    mount(config)
}
