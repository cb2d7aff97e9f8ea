//! String key-value storage seam.
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::convert::Infallible;
use std::rc::Rc;

/// Trait for abstracting the persistent preference store.
/// The browser layer backs it with `localStorage`.
pub trait KeyValueStore {
    type Error: std::error::Error + 'static;

    /// Read a value, `None` when the key has never been written.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be read.
    fn get_item(&self, key: &str) -> Result<Option<String>, Self::Error>;

    /// Write a value, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store rejects the write.
    fn set_item(&self, key: &str, value: &str) -> Result<(), Self::Error>;
}

/// In-memory store. Clones share the same map, so a test can keep a handle
/// and "reload the page" with a fresh controller over the same data.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    items: Rc<RefCell<BTreeMap<String, String>>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded with the given pairs.
    #[must_use]
    pub fn with_items<'a>(items: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let store = Self::new();
        store.items.borrow_mut().extend(
            items
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string())),
        );
        store
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }
}

impl KeyValueStore for MemoryStore {
    type Error = Infallible;

    fn get_item(&self, key: &str) -> Result<Option<String>, Self::Error> {
        Ok(self.get(key))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), Self::Error> {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
