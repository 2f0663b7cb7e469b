//! Error types for dependency injection

use std::any::TypeId;
use thiserror::Error;

/// Errors that can occur during binding resolution and field injection
#[derive(Error, Debug)]
pub enum DiError {
    /// No binding for the type in the container or any ancestor
    #[error("Could not get {type_name} from container")]
    BindingNotFound {
        type_name: &'static str,
        type_id: TypeId,
    },

    /// A slot was read before anything was injected into it
    #[error("Slot for {type_name} has not been injected")]
    EmptySlot { type_name: &'static str },

    /// A container handle obtained by resolution outlived its container
    #[error("Container has been dropped")]
    ContainerDropped,

    /// Internal error
    #[error("Internal DI error: {0}")]
    Internal(String),
}

impl DiError {
    /// Create a BindingNotFound error for a type
    #[inline]
    pub fn not_found<T: ?Sized + 'static>() -> Self {
        Self::BindingNotFound {
            type_name: std::any::type_name::<T>(),
            type_id: TypeId::of::<T>(),
        }
    }

    /// Create an EmptySlot error
    #[inline]
    pub fn empty_slot<T: ?Sized + 'static>() -> Self {
        Self::EmptySlot {
            type_name: std::any::type_name::<T>(),
        }
    }

    /// Returns true if this is a BindingNotFound for `T`
    pub fn is_not_found_for<T: ?Sized + 'static>(&self) -> bool {
        matches!(self, Self::BindingNotFound { type_id, .. } if *type_id == TypeId::of::<T>())
    }
}

impl Clone for DiError {
    fn clone(&self) -> Self {
        match self {
            Self::BindingNotFound { type_name, type_id } => Self::BindingNotFound {
                type_name,
                type_id: *type_id,
            },
            Self::EmptySlot { type_name } => Self::EmptySlot { type_name },
            Self::ContainerDropped => Self::ContainerDropped,
            Self::Internal(s) => Self::Internal(s.clone()),
        }
    }
}

/// Result type alias for DI operations
pub type Result<T> = std::result::Result<T, DiError>;
