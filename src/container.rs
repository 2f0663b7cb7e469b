//! Dependency injection container
//!
//! The `Container` binds instances to type keys, resolves them through the
//! parent chain and fills the injectable fields of target objects.

use crate::scanner::FieldScanner;
use crate::storage::{Binding, BindingStorage};
use crate::{DiError, Inject, Injectable, Result};
use std::any::TypeId;
use std::borrow::Cow;
use std::sync::{Arc, Weak};

#[cfg(feature = "logging")]
use tracing::{debug, trace, warn};

/// Type-keyed binding store with parent delegation and field injection.
///
/// `Container` is a cheap handle: clones share the same bindings. Every
/// container binds itself under the `Container` key, so it can be resolved
/// or injected like any other dependency.
///
/// A handle obtained by resolving `Container` is weak: it does not keep
/// the container alive, so an instance bound in a container may hold its
/// container without leaking it. Once every owning handle is gone, a weak
/// handle resolves nothing and fails with [`DiError::ContainerDropped`].
///
/// # Examples
///
/// ```rust
/// use fieldwire::Container;
/// use std::sync::Arc;
///
/// struct Database { url: String }
///
/// let container = Container::new();
/// let db = Arc::new(Database { url: "postgres://localhost".into() });
/// container.bind(Arc::clone(&db));
///
/// let resolved = container.resolve::<Database>().unwrap();
/// assert!(Arc::ptr_eq(&db, &resolved));
/// ```
#[derive(Clone)]
pub struct Container {
    handle: Handle,
}

#[derive(Clone)]
enum Handle {
    /// Created with `new`, `with_capacity`, `scope` or `upgrade`
    Owned(Arc<BindingStorage>),
    /// Produced by the self-binding
    Weak(Weak<BindingStorage>),
}

impl Container {
    /// Create a new root container.
    #[inline]
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Create a root container with pre-allocated capacity.
    ///
    /// Use this when you know approximately how many bindings will be made.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        #[cfg(feature = "logging")]
        debug!(
            target: "fieldwire",
            depth = 0,
            capacity = capacity,
            "Creating new root DI container"
        );

        Self::from_storage(Arc::new(BindingStorage::new(capacity)))
    }

    /// Create a child container whose parent is this container.
    ///
    /// The child sees every binding of its ancestors and may shadow them
    /// with its own. The parent is never modified by the child. Scoping a
    /// weak handle whose container is gone yields a fresh root container.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fieldwire::Container;
    /// use std::sync::Arc;
    ///
    /// struct AppConfig { debug: bool }
    /// struct RequestId(String);
    ///
    /// let root = Container::new();
    /// root.bind(Arc::new(AppConfig { debug: true }));
    ///
    /// let request = root.scope();
    /// request.bind(Arc::new(RequestId("req-123".into())));
    ///
    /// assert!(request.contains::<AppConfig>());
    /// assert!(!root.contains::<RequestId>());
    /// ```
    pub fn scope(&self) -> Self {
        let Some(storage) = self.storage() else {
            #[cfg(feature = "logging")]
            warn!(
                target: "fieldwire",
                "Scoping a dropped container, creating a new root instead"
            );
            return Self::new();
        };

        #[cfg(feature = "logging")]
        debug!(
            target: "fieldwire",
            parent_depth = storage.depth(),
            child_depth = storage.depth() + 1,
            parent_bindings = storage.len(),
            "Creating child container"
        );

        Self::from_storage(Arc::new(BindingStorage::with_parent(storage.into_owned())))
    }

    #[inline]
    fn from_storage(storage: Arc<BindingStorage>) -> Self {
        Self {
            handle: Handle::Owned(storage),
        }
    }

    #[inline]
    pub(crate) fn from_weak(storage: Weak<BindingStorage>) -> Self {
        Self {
            handle: Handle::Weak(storage),
        }
    }

    #[inline]
    fn storage(&self) -> Option<Cow<'_, Arc<BindingStorage>>> {
        match &self.handle {
            Handle::Owned(storage) => Some(Cow::Borrowed(storage)),
            Handle::Weak(storage) => storage.upgrade().map(Cow::Owned),
        }
    }

    #[inline]
    fn live_storage(&self) -> Result<Cow<'_, Arc<BindingStorage>>> {
        self.storage().ok_or(DiError::ContainerDropped)
    }

    /// Get an owning handle to this container, if it still exists.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fieldwire::Container;
    ///
    /// let container = Container::new();
    /// let weak = container.resolve::<Container>().unwrap();
    /// let owned = weak.upgrade().unwrap();
    ///
    /// drop(container);
    /// assert!(weak.is_alive());
    ///
    /// drop(owned);
    /// assert!(!weak.is_alive());
    /// assert!(weak.upgrade().is_none());
    /// ```
    #[inline]
    pub fn upgrade(&self) -> Option<Container> {
        self.storage().map(|storage| Self::from_storage(storage.into_owned()))
    }

    /// Check if the container behind this handle still exists.
    ///
    /// Always true for owning handles.
    #[inline]
    pub fn is_alive(&self) -> bool {
        match &self.handle {
            Handle::Owned(_) => true,
            Handle::Weak(storage) => storage.strong_count() > 0,
        }
    }

    // =========================================================================
    // Binding Methods
    // =========================================================================

    /// Bind an instance under the key `T`.
    ///
    /// The key is the type named at the call site, not the instance's
    /// runtime type: an instance bound as `dyn Trait` resolves only as
    /// `dyn Trait`. Replaces any previous binding of `T` in this container.
    ///
    /// [`inject_all_bindings`](Container::inject_all_bindings) skips
    /// instances bound this way. Bind types with injectable fields through
    /// [`bind_injectable`](Container::bind_injectable) to have them filled.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fieldwire::Container;
    /// use std::sync::Arc;
    ///
    /// trait Clock: Send + Sync {
    ///     fn now(&self) -> u64;
    /// }
    ///
    /// struct FixedClock;
    ///
    /// impl Clock for FixedClock {
    ///     fn now(&self) -> u64 { 42 }
    /// }
    ///
    /// let container = Container::new();
    /// container.bind::<dyn Clock>(Arc::new(FixedClock));
    ///
    /// assert_eq!(container.resolve::<dyn Clock>().unwrap().now(), 42);
    /// assert!(container.resolve::<FixedClock>().is_err());
    /// ```
    #[inline]
    pub fn bind<T: ?Sized + Injectable>(&self, instance: Arc<T>) {
        self.insert::<T>(Binding::instance(instance), false);
    }

    /// Bind an owned value under its own type.
    #[inline]
    pub fn bind_value<T: Injectable>(&self, value: T) {
        self.bind(Arc::new(value));
    }

    /// Bind an instance under `T` and have [`inject_all_bindings`] fill its
    /// injectable fields.
    ///
    /// [`inject_all_bindings`]: Container::inject_all_bindings
    #[inline]
    pub fn bind_injectable<T: Inject>(&self, instance: Arc<T>) {
        self.insert::<T>(Binding::injectable(instance), true);
    }

    #[allow(unused_variables)]
    fn insert<T: ?Sized + 'static>(&self, binding: Binding, injectable: bool) {
        let Some(storage) = self.storage() else {
            #[cfg(feature = "logging")]
            warn!(
                target: "fieldwire",
                service = std::any::type_name::<T>(),
                "Container has been dropped, binding discarded"
            );
            return;
        };

        #[cfg(feature = "logging")]
        debug!(
            target: "fieldwire",
            service = std::any::type_name::<T>(),
            injectable = injectable,
            depth = storage.depth(),
            replaces = storage.contains(&TypeId::of::<T>()),
            "Binding instance"
        );

        storage.insert(TypeId::of::<T>(), binding);
    }

    // =========================================================================
    // Resolution Methods
    // =========================================================================

    /// Resolve the instance bound under `T`.
    ///
    /// Looks in this container first, then walks the parent chain. The
    /// nearest binding wins. Fails with [`DiError::BindingNotFound`] when
    /// no container in the chain binds `T`.
    pub fn resolve<T: ?Sized + Injectable>(&self) -> Result<Arc<T>> {
        let storage = self.live_storage()?;
        let type_id = TypeId::of::<T>();

        let Some((value, found_depth)) = storage.resolve_from_chain(&type_id) else {
            #[cfg(feature = "logging")]
            debug!(
                target: "fieldwire",
                service = std::any::type_name::<T>(),
                depth = storage.depth(),
                "Binding not found in container or parent chain"
            );
            return Err(DiError::not_found::<T>());
        };

        #[cfg(feature = "logging")]
        {
            let location = if found_depth == storage.depth() { "local" } else { "ancestor" };
            trace!(
                target: "fieldwire",
                service = std::any::type_name::<T>(),
                depth = storage.depth(),
                found_depth = found_depth,
                location = location,
                "Binding resolved"
            );
        }
        #[cfg(not(feature = "logging"))]
        let _ = found_depth;

        value.downcast_ref::<Arc<T>>().cloned().ok_or_else(|| {
            DiError::Internal(format!(
                "binding for {} holds a different type",
                std::any::type_name::<T>()
            ))
        })
    }

    /// Alias for `resolve`.
    #[inline]
    pub fn get<T: ?Sized + Injectable>(&self) -> Result<Arc<T>> {
        self.resolve::<T>()
    }

    /// Try to resolve, returning None if not bound anywhere in the chain.
    #[inline]
    pub fn try_resolve<T: ?Sized + Injectable>(&self) -> Option<Arc<T>> {
        self.resolve::<T>().ok()
    }

    // =========================================================================
    // Injection Methods
    // =========================================================================

    /// Fill every injectable field of `target`.
    ///
    /// Fields are resolved by their declared type, in declaration order,
    /// and written as soon as they resolve. The first field that cannot be
    /// resolved aborts the call with [`DiError::BindingNotFound`]; fields
    /// written before it keep their new values.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fieldwire::{Container, Inject, InjectableField, Slot};
    /// use std::sync::Arc;
    ///
    /// struct Mailer;
    ///
    /// #[derive(Default)]
    /// struct SignupHandler {
    ///     mailer: Slot<Mailer>,
    /// }
    ///
    /// impl Inject for SignupHandler {
    ///     fn injectable_fields() -> Vec<InjectableField> {
    ///         vec![InjectableField::new::<Self, Mailer>("mailer", |this: &Self| &this.mailer)]
    ///     }
    /// }
    ///
    /// let container = Container::new();
    /// let handler = SignupHandler::default();
    /// assert!(container.inject_fields(&handler).is_err());
    ///
    /// container.bind(Arc::new(Mailer));
    /// container.inject_fields(&handler).unwrap();
    /// assert!(handler.mailer.is_filled());
    /// ```
    pub fn inject_fields<T: Inject>(&self, target: &T) -> Result<()> {
        if !self.is_alive() {
            return Err(DiError::ContainerDropped);
        }
        let fields = FieldScanner::injectable_fields::<T>();

        #[cfg(feature = "logging")]
        debug!(
            target: "fieldwire",
            target_type = std::any::type_name::<T>(),
            fields = fields.len(),
            depth = self.depth(),
            "Injecting fields"
        );

        for field in fields.iter() {
            #[cfg(feature = "logging")]
            trace!(
                target: "fieldwire",
                target_type = field.declaring_type(),
                field = field.name(),
                dependency = field.dependency_type(),
                "Injecting field"
            );

            field.inject(target, self)?;
        }

        Ok(())
    }

    /// Fill the injectable fields of every instance bound with
    /// [`bind_injectable`](Container::bind_injectable) in this container.
    ///
    /// Iteration order is unspecified. The first failure aborts the
    /// remaining bindings.
    pub fn inject_all_bindings(&self) -> Result<()> {
        let storage = self.live_storage()?;
        let bindings = storage.injectable_bindings();

        #[cfg(feature = "logging")]
        debug!(
            target: "fieldwire",
            bindings = bindings.len(),
            depth = storage.depth(),
            "Injecting fields of all bindings"
        );

        for (value, injector) in &bindings {
            injector(value, self)?;
        }

        Ok(())
    }

    // =========================================================================
    // Query Methods
    // =========================================================================

    /// Check if `T` is bound here or in any ancestor.
    #[inline]
    pub fn contains<T: ?Sized + Injectable>(&self) -> bool {
        self.storage()
            .is_some_and(|storage| storage.contains_in_chain(&TypeId::of::<T>()))
    }

    /// Check if `T` is bound in this container, ignoring ancestors.
    #[inline]
    pub fn contains_local<T: ?Sized + Injectable>(&self) -> bool {
        self.storage()
            .is_some_and(|storage| storage.contains(&TypeId::of::<T>()))
    }

    /// Number of bindings in this container (not including parents).
    ///
    /// The self-binding counts, so a fresh container has length 1.
    #[inline]
    pub fn len(&self) -> usize {
        self.storage().map_or(0, |storage| storage.len())
    }

    /// Check if the container holds nothing but its self-binding.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() <= 1
    }

    /// Keys bound in this container.
    #[inline]
    pub fn bound_types(&self) -> Vec<TypeId> {
        self.storage().map_or_else(Vec::new, |storage| storage.type_ids())
    }

    /// Number of ancestors (0 for a root container).
    #[inline]
    pub fn depth(&self) -> u32 {
        self.storage().map_or(0, |storage| storage.depth())
    }

    /// Check if this container delegates to a parent.
    #[inline]
    pub fn has_parent(&self) -> bool {
        self.storage().is_some_and(|storage| storage.has_parent())
    }

    /// Check if two handles refer to the same container.
    #[inline]
    pub fn ptr_eq(&self, other: &Container) -> bool {
        std::ptr::eq(self.storage_ptr(), other.storage_ptr())
    }

    #[inline]
    fn storage_ptr(&self) -> *const BindingStorage {
        match &self.handle {
            Handle::Owned(storage) => Arc::as_ptr(storage),
            Handle::Weak(storage) => storage.as_ptr(),
        }
    }
}

impl Default for Container {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Container {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Container")
            .field("binding_count", &self.len())
            .field("depth", &self.depth())
            .field("has_parent", &self.has_parent())
            .field("alive", &self.is_alive())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{InjectableField, Slot};
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Debug)]
    struct Config {
        name: String,
    }

    #[derive(Debug)]
    struct Database;

    trait Notifier: Send + Sync {
        fn channel(&self) -> &'static str;
    }

    struct EmailNotifier;

    impl Notifier for EmailNotifier {
        fn channel(&self) -> &'static str {
            "email"
        }
    }

    #[derive(Default)]
    struct Signup {
        config: Slot<Config>,
        notifier: Slot<dyn Notifier>,
    }

    impl Inject for Signup {
        fn injectable_fields() -> Vec<InjectableField> {
            vec![
                InjectableField::new::<Self, Config>("config", |this: &Self| &this.config),
                InjectableField::new::<Self, dyn Notifier>("notifier", |this: &Self| &this.notifier),
            ]
        }
    }

    #[derive(Default)]
    struct NeedsContainer {
        container: Slot<Container>,
    }

    impl Inject for NeedsContainer {
        fn injectable_fields() -> Vec<InjectableField> {
            vec![InjectableField::new::<Self, Container>("container", |this: &Self| &this.container)]
        }
    }

    static HOLDERS_DROPPED: AtomicUsize = AtomicUsize::new(0);

    #[derive(Default)]
    struct ContainerHolder {
        container: Slot<Container>,
    }

    impl Inject for ContainerHolder {
        fn injectable_fields() -> Vec<InjectableField> {
            vec![InjectableField::new::<Self, Container>("container", |this: &Self| &this.container)]
        }
    }

    impl Drop for ContainerHolder {
        fn drop(&mut self) {
            HOLDERS_DROPPED.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn signup_container() -> (Container, Arc<Config>, Arc<dyn Notifier>) {
        let container = Container::new();
        let config = Arc::new(Config { name: "app".into() });
        let notifier: Arc<dyn Notifier> = Arc::new(EmailNotifier);
        container.bind(Arc::clone(&config));
        container.bind(Arc::clone(&notifier));
        (container, config, notifier)
    }

    #[test]
    fn test_resolve_unbound_fails() {
        let container = Container::new();
        let err = container.resolve::<Config>().unwrap_err();
        assert!(err.is_not_found_for::<Config>());
    }

    #[test]
    fn test_resolve_returns_bound_instance() {
        let container = Container::new();
        let config = Arc::new(Config { name: "x1".into() });
        container.bind(Arc::clone(&config));

        let resolved = container.resolve::<Config>().unwrap();
        assert!(Arc::ptr_eq(&config, &resolved));
        assert_eq!(resolved.name, "x1");

        let err = container.resolve::<Database>().unwrap_err();
        assert!(err.is_not_found_for::<Database>());
        assert!(err.to_string().contains("Database"));
    }

    #[test]
    fn test_key_is_declared_type() {
        let container = Container::new();
        container.bind(Arc::new(EmailNotifier));

        assert!(container.resolve::<EmailNotifier>().is_ok());
        assert!(container.resolve::<dyn Notifier>().is_err());

        let other = Container::new();
        other.bind::<dyn Notifier>(Arc::new(EmailNotifier));

        assert_eq!(other.resolve::<dyn Notifier>().unwrap().channel(), "email");
        assert!(other.resolve::<EmailNotifier>().is_err());
    }

    #[test]
    fn test_rebind_replaces() {
        let container = Container::new();
        container.bind_value(Config { name: "first".into() });
        container.bind_value(Config { name: "second".into() });

        assert_eq!(container.resolve::<Config>().unwrap().name, "second");
        assert_eq!(container.len(), 2);
    }

    #[test]
    fn test_resolve_from_parent() {
        let parent = Container::new();
        let child = parent.scope();
        let config = Arc::new(Config { name: "parent".into() });
        parent.bind(Arc::clone(&config));

        assert!(Arc::ptr_eq(&child.resolve::<Config>().unwrap(), &config));
        assert!(child.has_parent());
        assert!(!child.contains_local::<Config>());
    }

    #[test]
    fn test_resolve_from_ancestor() {
        let root = Container::new();
        let config = Arc::new(Config { name: "root".into() });
        root.bind(Arc::clone(&config));

        let mut leaf = root.clone();
        for _ in 0..2 {
            leaf = leaf.scope();
        }

        assert_eq!(leaf.depth(), 2);
        assert!(Arc::ptr_eq(&leaf.resolve::<Config>().unwrap(), &config));
    }

    #[test]
    fn test_child_binding_shadows_parent() {
        let parent = Container::new();
        let child = parent.scope();
        let in_parent = Arc::new(Config { name: "parent".into() });
        let in_child = Arc::new(Config { name: "child".into() });

        parent.bind(Arc::clone(&in_parent));
        child.bind(Arc::clone(&in_child));

        assert!(Arc::ptr_eq(&child.resolve::<Config>().unwrap(), &in_child));
        assert!(Arc::ptr_eq(&parent.resolve::<Config>().unwrap(), &in_parent));
    }

    #[test]
    fn test_container_binds_itself() {
        let container = Container::new();
        assert!(container.contains_local::<Container>());
        assert!(container.is_empty());

        let resolved = container.resolve::<Container>().unwrap();
        assert!(resolved.ptr_eq(&container));

        let child = container.scope();
        let resolved_child = child.resolve::<Container>().unwrap();
        assert!(resolved_child.ptr_eq(&child));
        assert!(!resolved_child.ptr_eq(&container));
    }

    #[test]
    fn test_inject_fields() {
        let (container, config, notifier) = signup_container();
        let signup = Signup::default();

        container.inject_fields(&signup).unwrap();

        assert!(Arc::ptr_eq(&signup.config.get().unwrap(), &config));
        assert!(Arc::ptr_eq(&signup.notifier.get().unwrap(), &notifier));
    }

    #[test]
    fn test_inject_fields_from_parent() {
        let (parent, config, _) = signup_container();
        let child = parent.scope();
        let signup = Signup::default();

        child.inject_fields(&signup).unwrap();
        assert!(Arc::ptr_eq(&signup.config.get().unwrap(), &config));
    }

    #[test]
    fn test_inject_fields_stops_at_first_missing() {
        let container = Container::new();
        container.bind_value(Config { name: "only".into() });
        let signup = Signup::default();

        let err = container.inject_fields(&signup).unwrap_err();

        assert!(err.is_not_found_for::<dyn Notifier>());
        // Fields before the failing one stay written
        assert!(signup.config.is_filled());
        assert!(!signup.notifier.is_filled());
    }

    #[test]
    fn test_inject_container_into_field() {
        let container = Container::new();
        let target = NeedsContainer::default();

        container.inject_fields(&target).unwrap();
        assert!(target.container.get().unwrap().ptr_eq(&container));
    }

    #[test]
    fn test_inject_all_bindings() {
        let (container, config, notifier) = signup_container();
        let signup = Arc::new(Signup::default());
        container.bind_injectable(Arc::clone(&signup));

        container.inject_all_bindings().unwrap();

        assert!(Arc::ptr_eq(&signup.config.get().unwrap(), &config));
        assert!(Arc::ptr_eq(&signup.notifier.get().unwrap(), &notifier));
    }

    #[test]
    fn test_inject_all_bindings_matches_inject_fields() {
        let (container, _, _) = signup_container();
        let bound = Arc::new(Signup::default());
        let direct = Signup::default();
        container.bind_injectable(Arc::clone(&bound));

        container.inject_all_bindings().unwrap();
        container.inject_fields(&direct).unwrap();

        assert!(Arc::ptr_eq(&bound.config.get().unwrap(), &direct.config.get().unwrap()));
        assert!(Arc::ptr_eq(
            &bound.notifier.get().unwrap(),
            &direct.notifier.get().unwrap()
        ));
    }

    #[test]
    fn test_inject_all_bindings_fails_fast() {
        let container = Container::new();
        container.bind_injectable(Arc::new(Signup::default()));

        let err = container.inject_all_bindings().unwrap_err();
        assert!(matches!(err, DiError::BindingNotFound { .. }));
    }

    #[test]
    fn test_inject_all_bindings_ignores_parent_bindings() {
        let parent = Container::new();
        parent.bind_injectable(Arc::new(Signup::default()));
        let child = parent.scope();

        assert!(child.inject_all_bindings().is_ok());
    }

    #[test]
    fn test_try_resolve_and_contains() {
        let container = Container::new();
        assert!(container.try_resolve::<Config>().is_none());
        assert!(!container.contains::<Config>());

        container.bind_value(Config { name: "x".into() });
        assert!(container.try_resolve::<Config>().is_some());
        assert!(container.get::<Config>().is_ok());
        assert!(container.contains::<Config>());
        assert_eq!(container.bound_types().len(), 2);
    }

    #[test]
    fn test_bound_instance_holding_container_is_released() {
        let container = Container::new();
        let holder = Arc::new(ContainerHolder::default());
        let released = Arc::downgrade(&holder);
        container.bind_injectable(holder);

        container.inject_all_bindings().unwrap();
        let injected = released.upgrade().unwrap().container.require().unwrap();
        assert!(injected.ptr_eq(&container));

        drop(container);

        assert!(released.upgrade().is_none());
        assert_eq!(HOLDERS_DROPPED.load(Ordering::SeqCst), 1);
        assert!(!injected.is_alive());
    }

    #[test]
    fn test_resolved_container_outlived_by_handle() {
        let container = Container::new();
        container.bind_value(Config { name: "x".into() });
        let handle = container.resolve::<Container>().unwrap();

        assert_eq!(handle.resolve::<Config>().unwrap().name, "x");
        handle.bind_value(Database);
        assert!(container.contains_local::<Database>());

        drop(container);

        assert!(matches!(handle.resolve::<Config>(), Err(DiError::ContainerDropped)));
        assert!(matches!(handle.inject_all_bindings(), Err(DiError::ContainerDropped)));
        assert!(matches!(
            handle.inject_fields(&Signup::default()),
            Err(DiError::ContainerDropped)
        ));
        assert!(!handle.contains::<Config>());
        assert!(handle.is_empty());
        assert!(handle.upgrade().is_none());
        assert_eq!(handle.scope().depth(), 0);
    }

    #[test]
    fn test_upgraded_handle_keeps_container_alive() {
        let container = Container::new();
        let child = container.scope();
        let owned = child.resolve::<Container>().unwrap().upgrade().unwrap();

        drop(child);

        assert!(owned.is_alive());
        assert_eq!(owned.depth(), 1);
        assert!(owned.resolve::<Container>().unwrap().ptr_eq(&owned));
    }
}
