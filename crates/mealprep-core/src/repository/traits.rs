//! Repository Layer - Core Traits
//!
//! The durable side of the app is a flat string key-value space
//! (browser local storage in production, a map in tests).

/// Injected key-value storage
pub trait KeyValueStore {
    /// Read the raw value stored under `key`, if any
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// Write failures are the implementation's to report; callers never
    /// retry.
    fn set(&self, key: &str, value: &str);
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) {
        (**self).set(key, value)
    }
}
