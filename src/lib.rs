//! # fieldwire - Minimal Dependency Injection with Field Injection
//!
//! A small, type-keyed dependency injection container: bind instances to
//! types, resolve them back (falling back to parent containers), and fill
//! the dependency slots of objects that declare injectable fields.
//!
//! ## Features
//!
//! - 🔑 **Declared-type keys** - Bind under a concrete type or a trait object; resolve by the same key
//! - 🔄 **Parent chains** - Child containers see and may shadow ancestor bindings
//! - 💉 **Field injection** - `#[derive(Inject)]` marks `Slot<T>` fields to be filled
//! - 🗂️ **Cached field tables** - Each type's injectable fields are computed once per process
//! - 📊 **Observable** - Optional tracing integration with JSON or pretty output
//!
//! ## Quick Start
//!
//! ```rust
//! use fieldwire::Container;
//! use std::sync::Arc;
//!
//! struct Database {
//!     url: String,
//! }
//!
//! let container = Container::new();
//! container.bind(Arc::new(Database { url: "postgres://localhost".into() }));
//!
//! let db = container.resolve::<Database>().unwrap();
//! assert_eq!(db.url, "postgres://localhost");
//! ```
//!
//! ## Field Injection
//!
//! ```rust
//! # #[cfg(feature = "derive")]
//! # {
//! use fieldwire::{Container, Inject, Slot};
//! use std::sync::Arc;
//!
//! trait Notifier: Send + Sync {
//!     fn send(&self, to: &str) -> String;
//! }
//!
//! struct Email;
//!
//! impl Notifier for Email {
//!     fn send(&self, to: &str) -> String {
//!         format!("mail to {to}")
//!     }
//! }
//!
//! struct Templates;
//!
//! #[derive(Default, Inject)]
//! struct SignupService {
//!     #[inject]
//!     notifier: Slot<dyn Notifier>,
//!     #[inject]
//!     templates: Slot<Templates>,
//!     attempts: u32,
//! }
//!
//! let container = Container::new();
//! container.bind::<dyn Notifier>(Arc::new(Email));
//! container.bind(Arc::new(Templates));
//!
//! let service = SignupService::default();
//! container.inject_fields(&service).unwrap();
//!
//! assert_eq!(service.notifier.require().unwrap().send("ada"), "mail to ada");
//! # }
//! ```
//!
//! ## Parent Containers
//!
//! ```rust
//! use fieldwire::Container;
//! use std::sync::Arc;
//!
//! struct AppConfig { name: String }
//! struct RequestContext { id: String }
//!
//! let root = Container::new();
//! root.bind(Arc::new(AppConfig { name: "MyApp".into() }));
//!
//! let request = root.scope();
//! request.bind(Arc::new(RequestContext { id: "req-123".into() }));
//!
//! assert!(request.contains::<AppConfig>());
//! assert!(!root.contains::<RequestContext>());
//! ```

extern crate self as fieldwire;

mod container;
mod error;
#[cfg(feature = "logging")]
pub mod logging;
mod provider;
mod scanner;
mod slot;
mod storage;

pub use container::*;
pub use error::*;
pub use provider::*;
pub use scanner::*;
pub use slot::*;

#[cfg(feature = "derive")]
pub use fieldwire_derive::Inject;

// Re-export tracing macros for convenience when logging feature is enabled
#[cfg(feature = "logging")]
pub use tracing::{debug, error, info, trace, warn};

pub use std::sync::Arc;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{
        Container, DiError, FieldScanner, Inject, InjectableField, Injectable, Result, Slot,
    };
    pub use std::sync::Arc;
}

#[cfg(all(test, feature = "derive"))]
mod tests {
    use super::*;

    struct Database {
        url: String,
    }

    trait Cache: Send + Sync {
        fn capacity(&self) -> usize;
    }

    struct MemoryCache;

    impl Cache for MemoryCache {
        fn capacity(&self) -> usize {
            1024
        }
    }

    #[derive(Default, Inject)]
    struct Repository {
        #[inject]
        db: Slot<Database>,
        #[inject]
        cache: Slot<dyn Cache>,
        #[allow(dead_code)]
        queries: u64,
    }

    #[derive(Default, Inject)]
    struct UserService {
        #[inject(flatten)]
        repository: Repository,
        #[inject]
        container: Slot<Container>,
    }

    #[derive(Default, Inject)]
    struct Plain {
        #[allow(dead_code)]
        count: u32,
    }

    fn wired_container() -> (Container, Arc<Database>, Arc<dyn Cache>) {
        let container = Container::new();
        let db = Arc::new(Database { url: "postgres://test".into() });
        let cache: Arc<dyn Cache> = Arc::new(MemoryCache);
        container.bind(Arc::clone(&db));
        container.bind(Arc::clone(&cache));
        (container, db, cache)
    }

    #[test]
    fn test_derive_lists_marked_fields() {
        let fields = FieldScanner::injectable_fields::<Repository>();
        let names: Vec<_> = fields.iter().map(|f| f.name()).collect();
        assert_eq!(names, ["db", "cache"]);
    }

    #[test]
    fn test_derive_without_marked_fields() {
        assert!(FieldScanner::injectable_fields::<Plain>().is_empty());
    }

    #[test]
    fn test_derive_flatten_includes_embedded_fields() {
        let fields = FieldScanner::injectable_fields::<UserService>();
        let names: Vec<_> = fields.iter().map(|f| f.name()).collect();
        assert_eq!(names, ["db", "cache", "container"]);
    }

    #[test]
    fn test_derived_injection() {
        let (container, db, cache) = wired_container();
        let repository = Repository::default();

        container.inject_fields(&repository).unwrap();

        assert!(Arc::ptr_eq(&repository.db.get().unwrap(), &db));
        assert!(Arc::ptr_eq(&repository.cache.get().unwrap(), &cache));
        assert_eq!(repository.db.require().unwrap().url, "postgres://test");
        assert_eq!(repository.cache.require().unwrap().capacity(), 1024);
    }

    #[test]
    fn test_derived_flatten_injection_from_child() {
        let (root, db, _) = wired_container();
        let child = root.scope();
        let service = Arc::new(UserService::default());
        child.bind_injectable(Arc::clone(&service));

        child.inject_all_bindings().unwrap();

        assert!(Arc::ptr_eq(&service.repository.db.get().unwrap(), &db));
        assert!(service.container.get().unwrap().ptr_eq(&child));
        assert!(Arc::ptr_eq(&child.resolve::<UserService>().unwrap(), &service));
    }
}
