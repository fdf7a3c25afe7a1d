//! Value validators
//!
//! A validator both checks the shape of an untyped host value and narrows it
//! to `T`: it returns `Some(T)` for a valid value and `None` otherwise. A
//! `None` is never an error, it only makes the scope read as absent.

use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// Shape check and conversion for one configuration key.
pub struct Validator<T> {
    check: Arc<dyn Fn(&Value) -> Option<T> + Send + Sync>,
}

impl<T> Clone for Validator<T> {
    fn clone(&self) -> Self {
        Self {
            check: Arc::clone(&self.check),
        }
    }
}

impl<T> fmt::Debug for Validator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Validator")
            .field("output", &std::any::type_name::<T>())
            .finish()
    }
}

impl<T> Validator<T> {
    pub fn from_fn(check: impl Fn(&Value) -> Option<T> + Send + Sync + 'static) -> Self {
        Self {
            check: Arc::new(check),
        }
    }

    pub fn validate(&self, value: &Value) -> Option<T> {
        (self.check)(value)
    }
}

impl<T: DeserializeOwned + 'static> Validator<T> {
    /// Accept any value that deserializes into `T`.
    pub fn deserialize() -> Self {
        Self::from_fn(|value| serde_json::from_value(value.clone()).ok())
    }

    /// Accept values that deserialize into `T` and satisfy `predicate`.
    pub fn deserialize_where(predicate: impl Fn(&T) -> bool + Send + Sync + 'static) -> Self {
        Self::from_fn(move |value| {
            serde_json::from_value(value.clone())
                .ok()
                .filter(|typed| predicate(typed))
        })
    }
}

impl Validator<Value> {
    /// Keep the raw value when `predicate` accepts it.
    pub fn predicate(predicate: impl Fn(&Value) -> bool + Send + Sync + 'static) -> Self {
        Self::from_fn(move |value| predicate(value).then(|| value.clone()))
    }
}
