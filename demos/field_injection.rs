//! Example demonstrating field injection with #[derive(Inject)]
//!
//! Run with:
//!   cargo run --example field_injection

use fieldwire::{Container, Inject, Slot};
use std::sync::Arc;

// Dependencies
struct Database {
    url: String,
}

trait Mailer: Send + Sync {
    fn send(&self, to: &str, body: &str) -> String;
}

struct SmtpMailer {
    host: String,
}

impl Mailer for SmtpMailer {
    fn send(&self, to: &str, body: &str) -> String {
        format!("[{}] to={} body={}", self.host, to, body)
    }
}

// Shared persistence component, embedded into services
#[derive(Default, Inject)]
struct Repository {
    #[inject]
    db: Slot<Database>,
}

#[derive(Default, Inject)]
struct SignupService {
    #[inject(flatten)]
    repository: Repository,
    #[inject]
    mailer: Slot<dyn Mailer>,
    // Not injected
    signups: u64,
}

impl SignupService {
    fn register(&self, email: &str) -> fieldwire::Result<String> {
        let db = self.repository.db.require()?;
        let mailer = self.mailer.require()?;
        Ok(format!(
            "stored {} in {} ({} earlier); {}",
            email,
            db.url,
            self.signups,
            mailer.send(email, "welcome")
        ))
    }
}

fn main() -> fieldwire::Result<()> {
    println!("=== fieldwire Field Injection Demo ===\n");

    let root = Container::new();
    root.bind(Arc::new(Database {
        url: "postgres://localhost:5432/app".into(),
    }));
    root.bind::<dyn Mailer>(Arc::new(SmtpMailer {
        host: "smtp.internal".into(),
    }));

    // Direct injection into an unbound object
    let service = SignupService::default();
    root.inject_fields(&service)?;
    println!("direct:  {}", service.register("ada@example.com")?);

    // A request container that overrides the mailer and owns its own service
    let request = root.scope();
    request.bind::<dyn Mailer>(Arc::new(SmtpMailer {
        host: "smtp.sandbox".into(),
    }));
    request.bind_injectable(Arc::new(SignupService::default()));
    request.inject_all_bindings()?;

    let scoped = request.resolve::<SignupService>()?;
    println!("scoped:  {}", scoped.register("grace@example.com")?);

    // Missing bindings surface as errors
    let empty = Container::new();
    if let Err(err) = empty.inject_fields(&SignupService::default()) {
        println!("missing: {err}");
    }

    println!("\n=== Demo Complete ===");
    Ok(())
}
