//! Capabilities the theme controller needs from its host page.
//!
//! SYSTEM CONTEXT
//! ==============
//! The controller never looks anything up globally. It is handed three
//! elements and a store implementing these traits, so it runs the same way
//! against the live DOM (`browser`) and against the in-memory handles below.

use std::cell::RefCell;
use std::collections::{BTreeSet, HashMap};
use std::rc::Rc;

use crate::error::ThemeError;

#[cfg(test)]
#[path = "host_test.rs"]
mod host_test;

/// An element carrying named style-class flags.
///
/// Methods take `&self`: implementors are handles to shared page nodes.
pub trait ClassTarget {
    fn add_class(&self, name: &str) -> Result<(), ThemeError>;

    fn remove_class(&self, name: &str) -> Result<(), ThemeError>;

    fn has_class(&self, name: &str) -> bool;

    /// Flip `name` and return whether it is now present.
    fn toggle_class(&self, name: &str) -> Result<bool, ThemeError> {
        if self.has_class(name) {
            self.remove_class(name)?;
            Ok(false)
        } else {
            self.add_class(name)?;
            Ok(true)
        }
    }

    fn set_class(&self, name: &str, present: bool) -> Result<(), ThemeError> {
        if present { self.add_class(name) } else { self.remove_class(name) }
    }
}

/// A persistent string key-value store.
pub trait PreferenceStore {
    fn read(&self, key: &str) -> Result<Option<String>, ThemeError>;

    fn write(&self, key: &str, value: &str) -> Result<(), ThemeError>;
}

/// In-memory element. Clones share the same class set.
#[derive(Clone, Debug, Default)]
pub struct MemoryElement {
    classes: Rc<RefCell<BTreeSet<String>>>,
}

impl MemoryElement {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_classes(classes: &[&str]) -> Self {
        let element = Self::new();
        element
            .classes
            .borrow_mut()
            .extend(classes.iter().map(|c| (*c).to_owned()));
        element
    }

    /// Current classes in sorted order.
    #[must_use]
    pub fn classes(&self) -> Vec<String> {
        self.classes.borrow().iter().cloned().collect()
    }
}

impl ClassTarget for MemoryElement {
    fn add_class(&self, name: &str) -> Result<(), ThemeError> {
        self.classes.borrow_mut().insert(name.to_owned());
        Ok(())
    }

    fn remove_class(&self, name: &str) -> Result<(), ThemeError> {
        self.classes.borrow_mut().remove(name);
        Ok(())
    }

    fn has_class(&self, name: &str) -> bool {
        self.classes.borrow().contains(name)
    }
}

/// In-memory store. Clones share the same entries.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with one entry.
    #[must_use]
    pub fn with_entry(key: &str, value: &str) -> Self {
        let storage = Self::new();
        storage.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
        storage
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl PreferenceStore for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>, ThemeError> {
        Ok(self.get(key))
    }

    fn write(&self, key: &str, value: &str) -> Result<(), ThemeError> {
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}
