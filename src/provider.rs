//! Marker trait for bindable types
//!
//! Defines what may be stored in a container. The key a value is stored
//! under is always the type named at the call site, so trait objects are
//! first-class keys.

/// Marker trait for types that can be bound in and resolved from a container.
///
/// This is automatically implemented for all `Send + Sync + 'static` types,
/// including unsized trait object types such as `dyn Logger` (when the
/// trait has `Send + Sync` supertraits). You never need to implement it.
///
/// # Examples
///
/// ```rust
/// use fieldwire::{Container, Injectable};
/// use std::sync::Arc;
///
/// trait Greeter: Send + Sync {
///     fn greet(&self) -> String;
/// }
///
/// struct English;
///
/// impl Greeter for English {
///     fn greet(&self) -> String {
///         "hello".into()
///     }
/// }
///
/// fn assert_injectable<T: ?Sized + Injectable>() {}
/// assert_injectable::<English>();
/// assert_injectable::<dyn Greeter>();
///
/// let container = Container::new();
/// container.bind::<dyn Greeter>(Arc::new(English));
/// assert_eq!(container.resolve::<dyn Greeter>().unwrap().greet(), "hello");
/// ```
pub trait Injectable: Send + Sync + 'static {}

// Blanket implementation - everything that's Send + Sync + 'static is Injectable
impl<T: ?Sized + Send + Sync + 'static> Injectable for T {}
