//! Example demonstrating logging output
//!
//! Run with JSON logging (production):
//! ```bash
//! cargo run --example logging --features logging-json
//! ```
//!
//! Run with pretty logging (development):
//! ```bash
//! cargo run --example logging --features logging-pretty
//! ```

use fieldwire::{Container, Inject, InjectableField, Slot};
use std::sync::Arc;

#[allow(dead_code)]
struct Database {
    url: String,
}

#[allow(dead_code)]
struct RequestContext {
    request_id: String,
}

#[derive(Default)]
struct Handler {
    db: Slot<Database>,
    ctx: Slot<RequestContext>,
}

impl Inject for Handler {
    fn injectable_fields() -> Vec<InjectableField> {
        vec![
            InjectableField::new::<Self, Database>("db", |this: &Self| &this.db),
            InjectableField::new::<Self, RequestContext>("ctx", |this: &Self| &this.ctx),
        ]
    }
}

fn main() {
    fieldwire::logging::builder().trace().fieldwire_only().init();

    println!("=== fieldwire Logging Demo ===\n");

    // logs: "Creating new root DI container"
    let root = Container::new();

    // logs: "Binding instance"
    root.bind(Arc::new(Database {
        url: "postgres://localhost/mydb".into(),
    }));

    // logs: "Creating child container"
    let request = root.scope();
    request.bind(Arc::new(RequestContext {
        request_id: "req-12345".into(),
    }));

    // logs: "Scanned injectable fields", "Injecting fields", "Binding resolved" (local / ancestor)
    let handler = Handler::default();
    if let Err(err) = request.inject_fields(&handler) {
        println!("unexpected: {err}");
    }

    // logs: "Injectable fields served from cache"
    let second = Handler::default();
    let _ = request.inject_fields(&second);

    // logs: "Binding not found in container or parent chain"
    let missing = root.inject_fields(&Handler::default());
    assert!(missing.is_err());

    println!("\n=== Demo Complete ===");
    println!("Tip: Use --features logging-json for production (JSON output)");
    println!("     Use --features logging-pretty for development (colorful output)");
}
