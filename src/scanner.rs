//! Injectable field discovery and caching
//!
//! Types declare their injectable fields through the [`Inject`] trait,
//! usually generated by `#[derive(Inject)]`. The [`FieldScanner`] runs
//! that registration table once per type and caches the result for the
//! rest of the process.

use crate::{Container, DiError, Injectable, Result, Slot};
use ahash::RandomState;
use dashmap::DashMap;
use once_cell::sync::Lazy;
use std::any::{Any, TypeId};
use std::sync::Arc;

#[cfg(feature = "logging")]
use tracing::{debug, trace};

/// Writes a resolved dependency into a field of a type-erased target.
type FieldSetter = Box<dyn Fn(&dyn Any, &Container) -> Result<()> + Send + Sync>;

/// Types whose fields can be filled by a container.
///
/// `injectable_fields` is the registration table for the type: one
/// [`InjectableField`] per `Slot` that should receive a dependency, in
/// declaration order. It is called at most once per type by the
/// [`FieldScanner`]; the result is cached.
///
/// # Examples
///
/// ```rust
/// use fieldwire::{Container, Inject, InjectableField, Slot};
/// use std::sync::Arc;
///
/// struct Database;
///
/// #[derive(Default)]
/// struct Repository {
///     db: Slot<Database>,
/// }
///
/// impl Inject for Repository {
///     fn injectable_fields() -> Vec<InjectableField> {
///         vec![InjectableField::new::<Self, Database>("db", |this: &Self| &this.db)]
///     }
/// }
///
/// let container = Container::new();
/// container.bind(Arc::new(Database));
///
/// let repo = Repository::default();
/// container.inject_fields(&repo).unwrap();
/// assert!(repo.db.is_filled());
/// ```
pub trait Inject: Injectable + Sized {
    /// Describe every injectable field of this type.
    fn injectable_fields() -> Vec<InjectableField>;
}

/// Descriptor for a single injectable field.
///
/// Records the declaring type, the field name, the declared dependency
/// type (the binding key used for resolution) and a setter that writes
/// the resolved value into a live instance.
pub struct InjectableField {
    declaring_type: &'static str,
    declaring_type_id: TypeId,
    name: &'static str,
    dependency_type: &'static str,
    dependency_type_id: TypeId,
    setter: FieldSetter,
}

impl InjectableField {
    /// Describe a `Slot<F>` field of `D`.
    ///
    /// `accessor` projects an instance of `D` onto the slot. The slot is
    /// resolved by the declared type `F`, never by the runtime type of
    /// whatever gets bound.
    pub fn new<D, F>(name: &'static str, accessor: fn(&D) -> &Slot<F>) -> Self
    where
        D: Inject,
        F: ?Sized + Injectable,
    {
        Self {
            declaring_type: std::any::type_name::<D>(),
            declaring_type_id: TypeId::of::<D>(),
            name,
            dependency_type: std::any::type_name::<F>(),
            dependency_type_id: TypeId::of::<F>(),
            setter: Box::new(move |target: &dyn Any, container: &Container| {
                let target = downcast_target::<D>(target)?;
                let value = container.resolve::<F>()?;
                accessor(target).set(value);
                Ok(())
            }),
        }
    }

    /// Lift the injectable fields of an embedded `E` into `D`.
    ///
    /// The returned descriptors keep `E` as their declaring type, the same
    /// way inherited fields keep their base class.
    pub fn flatten<D, E>(accessor: fn(&D) -> &E) -> Vec<Self>
    where
        D: Inject,
        E: Inject,
    {
        E::injectable_fields()
            .into_iter()
            .map(|field| {
                let inner = field.setter;
                Self {
                    setter: Box::new(move |target: &dyn Any, container: &Container| {
                        let outer = downcast_target::<D>(target)?;
                        inner(accessor(outer), container)
                    }),
                    ..field
                }
            })
            .collect()
    }

    /// Name of the type that declares the field.
    #[inline]
    pub fn declaring_type(&self) -> &'static str {
        self.declaring_type
    }

    /// TypeId of the type that declares the field.
    #[inline]
    pub fn declaring_type_id(&self) -> TypeId {
        self.declaring_type_id
    }

    /// Field name.
    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Name of the declared dependency type.
    #[inline]
    pub fn dependency_type(&self) -> &'static str {
        self.dependency_type
    }

    /// Binding key the field is resolved by.
    #[inline]
    pub fn dependency_type_id(&self) -> TypeId {
        self.dependency_type_id
    }

    /// Resolve this field's dependency from `container` and write it into `target`.
    #[inline]
    pub(crate) fn inject(&self, target: &dyn Any, container: &Container) -> Result<()> {
        (self.setter)(target, container)
    }
}

impl PartialEq for InjectableField {
    fn eq(&self, other: &Self) -> bool {
        self.declaring_type_id == other.declaring_type_id
            && self.name == other.name
            && self.dependency_type_id == other.dependency_type_id
    }
}

impl std::fmt::Debug for InjectableField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InjectableField")
            .field("declaring_type", &self.declaring_type)
            .field("name", &self.name)
            .field("dependency_type", &self.dependency_type)
            .finish()
    }
}

fn downcast_target<D: 'static>(target: &dyn Any) -> Result<&D> {
    target.downcast_ref::<D>().ok_or_else(|| {
        DiError::Internal(format!(
            "field setter for {} applied to a different type",
            std::any::type_name::<D>()
        ))
    })
}

/// Process-wide cache of scanned types. Grows by one entry per distinct
/// type and is never evicted.
static FIELD_CACHE: Lazy<DashMap<TypeId, Arc<[InjectableField]>, RandomState>> =
    Lazy::new(|| DashMap::with_hasher(RandomState::new()));

/// Discovers and caches the injectable fields of types.
pub struct FieldScanner;

impl FieldScanner {
    /// Get the injectable fields of `T`, scanning on first use.
    ///
    /// Repeated calls return the same shared slice without running
    /// `T::injectable_fields` again.
    pub fn injectable_fields<T: Inject>() -> Arc<[InjectableField]> {
        let type_id = TypeId::of::<T>();

        if let Some(cached) = FIELD_CACHE.get(&type_id) {
            #[cfg(feature = "logging")]
            trace!(
                target: "fieldwire",
                target_type = std::any::type_name::<T>(),
                fields = cached.len(),
                "Injectable fields served from cache"
            );
            return Arc::clone(cached.value());
        }

        let scanned: Arc<[InjectableField]> = T::injectable_fields().into();

        #[cfg(feature = "logging")]
        debug!(
            target: "fieldwire",
            target_type = std::any::type_name::<T>(),
            fields = scanned.len(),
            "Scanned injectable fields"
        );

        // Another thread may have finished the same scan first; keep its result.
        Arc::clone(FIELD_CACHE.entry(type_id).or_insert(scanned).value())
    }

    /// Check whether `T` has already been scanned.
    #[inline]
    pub fn is_cached<T: Inject>() -> bool {
        FIELD_CACHE.contains_key(&TypeId::of::<T>())
    }

    /// Number of distinct types scanned so far.
    #[inline]
    pub fn cached_type_count() -> usize {
        FIELD_CACHE.len()
    }
}
