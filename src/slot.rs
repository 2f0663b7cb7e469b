//! Injection slots
//!
//! A `Slot<T>` is the field type that receives an injected dependency.

use crate::{DiError, Result};
use parking_lot::RwLock;
use std::sync::Arc;

/// A field that a container writes a resolved dependency into.
///
/// Slots are written through a shared reference, so an instance that is
/// already bound (and therefore shared behind an `Arc`) can still have its
/// dependencies filled by [`Container::inject_all_bindings`].
///
/// Re-injecting overwrites the previous value.
///
/// # Examples
///
/// ```rust
/// use fieldwire::Slot;
/// use std::sync::Arc;
///
/// let slot: Slot<String> = Slot::new();
/// assert!(!slot.is_filled());
///
/// slot.set(Arc::new("db".to_string()));
/// assert_eq!(slot.require().unwrap().as_str(), "db");
/// ```
///
/// [`Container::inject_all_bindings`]: crate::Container::inject_all_bindings
pub struct Slot<T: ?Sized> {
    value: RwLock<Option<Arc<T>>>,
}

impl<T: ?Sized + 'static> Slot<T> {
    /// Create an empty slot.
    #[inline]
    pub fn new() -> Self {
        Self {
            value: RwLock::new(None),
        }
    }

    /// Create a slot that already holds a value.
    #[inline]
    pub fn filled(value: Arc<T>) -> Self {
        Self {
            value: RwLock::new(Some(value)),
        }
    }

    /// Get the injected value, if any.
    #[inline]
    pub fn get(&self) -> Option<Arc<T>> {
        self.value.read().clone()
    }

    /// Get the injected value or fail with [`DiError::EmptySlot`].
    #[inline]
    pub fn require(&self) -> Result<Arc<T>> {
        self.get().ok_or_else(DiError::empty_slot::<T>)
    }

    /// Write a value, replacing any previous one.
    #[inline]
    pub fn set(&self, value: Arc<T>) {
        *self.value.write() = Some(value);
    }

    /// Check whether a value has been injected.
    #[inline]
    pub fn is_filled(&self) -> bool {
        self.value.read().is_some()
    }

    /// Empty the slot, returning the previous value.
    #[inline]
    pub fn clear(&self) -> Option<Arc<T>> {
        self.value.write().take()
    }
}

impl<T: ?Sized + 'static> Default for Slot<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized> std::fmt::Debug for Slot<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Slot")
            .field("type", &std::any::type_name::<T>())
            .field("filled", &self.value.read().is_some())
            .finish()
    }
}
