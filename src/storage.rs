//! Binding storage for the DI container
//!
//! Uses DashMap keyed by `TypeId`, with an optional parent storage for
//! hierarchical resolution.

use crate::{Container, DiError, Inject, Result};
use ahash::RandomState;
use dashmap::DashMap;
use std::any::{Any, TypeId};
use std::sync::Arc;

/// A bound value with its concrete type erased.
///
/// The inner value is always an `Arc<T>` where `T` is the binding key, so
/// unsized keys such as `dyn Trait` can be stored alongside sized ones.
pub(crate) type AnyInstance = Arc<dyn Any + Send + Sync>;

/// Fills the injectable fields of an erased binding.
pub(crate) type BindingInjector = fn(&AnyInstance, &Container) -> Result<()>;

/// One entry in a container's binding map
pub(crate) enum Binding {
    /// A caller-supplied instance
    Instance {
        value: AnyInstance,
        injector: Option<BindingInjector>,
    },
    /// The owning container itself
    ///
    /// Materialized on resolve as a weak handle, so neither the storage nor
    /// an instance holding the resolved handle keeps the container alive.
    SelfRef,
}

impl Binding {
    /// Wrap an `Arc<T>` for storage under `T`'s key.
    #[inline]
    pub(crate) fn instance<T: ?Sized + Send + Sync + 'static>(value: Arc<T>) -> Self {
        Self::Instance {
            value: Arc::new(value),
            injector: None,
        }
    }

    /// Wrap an `Arc<T>` whose injectable fields `inject_all_bindings` should fill.
    #[inline]
    pub(crate) fn injectable<T: Inject>(value: Arc<T>) -> Self {
        Self::Instance {
            value: Arc::new(value),
            injector: Some(inject_binding::<T>),
        }
    }

    #[inline]
    fn materialize(&self, owner: &Arc<BindingStorage>) -> AnyInstance {
        match self {
            Self::Instance { value, .. } => Arc::clone(value),
            Self::SelfRef => Arc::new(Arc::new(Container::from_weak(Arc::downgrade(owner)))),
        }
    }
}

fn inject_binding<T: Inject>(value: &AnyInstance, container: &Container) -> Result<()> {
    let instance = value.downcast_ref::<Arc<T>>().ok_or_else(|| {
        DiError::Internal(format!(
            "binding for {} does not hold that type",
            std::any::type_name::<T>()
        ))
    })?;
    container.inject_fields(instance.as_ref())
}

/// Storage for a single container's bindings.
///
/// Children hold an `Arc` to their parent's storage; parents never see
/// their children. The parent is fixed at construction, so the chain is
/// always finite and acyclic.
pub(crate) struct BindingStorage {
    /// Map from binding key to bound value
    bindings: DashMap<TypeId, Binding, RandomState>,
    /// Optional parent storage for hierarchical resolution
    parent: Option<Arc<BindingStorage>>,
    /// Number of ancestors
    depth: u32,
}

impl BindingStorage {
    /// Create root storage. Uses 8 shards; typical containers hold few bindings.
    #[inline]
    pub(crate) fn new(capacity: usize) -> Self {
        let storage = Self {
            bindings: DashMap::with_capacity_and_hasher_and_shard_amount(
                capacity,
                RandomState::new(),
                8,
            ),
            parent: None,
            depth: 0,
        };
        storage.insert(TypeId::of::<Container>(), Binding::SelfRef);
        storage
    }

    /// Create a child storage resolving through `parent`.
    #[inline]
    pub(crate) fn with_parent(parent: Arc<BindingStorage>) -> Self {
        let depth = parent.depth + 1;
        let storage = Self {
            bindings: DashMap::with_capacity_and_hasher_and_shard_amount(
                0,
                RandomState::new(),
                8,
            ),
            parent: Some(parent),
            depth,
        };
        storage.insert(TypeId::of::<Container>(), Binding::SelfRef);
        storage
    }

    /// Insert a binding, replacing any previous one for the key
    #[inline]
    pub(crate) fn insert(&self, type_id: TypeId, binding: Binding) {
        self.bindings.insert(type_id, binding);
    }

    /// Check if the key is bound locally
    #[inline]
    pub(crate) fn contains(&self, type_id: &TypeId) -> bool {
        self.bindings.contains_key(type_id)
    }

    /// Resolve a binding from this storage only
    #[inline]
    pub(crate) fn resolve(self: &Arc<Self>, type_id: &TypeId) -> Option<AnyInstance> {
        self.bindings.get(type_id).map(|b| b.materialize(self))
    }

    /// Resolve a binding by walking the parent chain.
    ///
    /// Returns the value from the nearest storage that binds the key,
    /// together with that storage's depth.
    pub(crate) fn resolve_from_chain(self: &Arc<Self>, type_id: &TypeId) -> Option<(AnyInstance, u32)> {
        let mut current = Some(self);
        while let Some(storage) = current {
            if let Some(value) = storage.resolve(type_id) {
                return Some((value, storage.depth));
            }
            current = storage.parent.as_ref();
        }
        None
    }

    /// Check if the key is bound here or in any ancestor.
    pub(crate) fn contains_in_chain(&self, type_id: &TypeId) -> bool {
        let mut current = Some(self);
        while let Some(storage) = current {
            if storage.contains(type_id) {
                return true;
            }
            current = storage.parent.as_deref();
        }
        false
    }

    /// Snapshot of the local bindings that carry a field injector.
    ///
    /// Collected up front so that injection, which resolves through this
    /// same map, never runs while a shard guard is held.
    pub(crate) fn injectable_bindings(&self) -> Vec<(AnyInstance, BindingInjector)> {
        self.bindings
            .iter()
            .filter_map(|entry| match entry.value() {
                Binding::Instance {
                    value,
                    injector: Some(injector),
                } => Some((Arc::clone(value), *injector)),
                _ => None,
            })
            .collect()
    }

    #[inline]
    pub(crate) fn has_parent(&self) -> bool {
        self.parent.is_some()
    }

    #[inline]
    pub(crate) fn depth(&self) -> u32 {
        self.depth
    }

    /// Number of local bindings, the self-binding included
    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Get all locally bound keys
    pub(crate) fn type_ids(&self) -> Vec<TypeId> {
        self.bindings.iter().map(|r| *r.key()).collect()
    }
}

impl std::fmt::Debug for BindingStorage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BindingStorage")
            .field("count", &self.len())
            .field("depth", &self.depth)
            .finish()
    }
}
