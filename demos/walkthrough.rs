//! Walkthrough running all four variants side by side.
//!
//! This example shows how to:
//! - Run each variant with both values of the tracing flag
//! - See the shadowed variant lose the client it just built
//! - See a factory failure come back unchanged from every variant
//!
//! Run with: `cargo run --example walkthrough`

use shadowing::{factory::ScriptedFactory, flag, Client, Variant};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter("shadowing=debug")
        .init();

    let factory = ScriptedFactory::builder()
        .tracing_client(Client::with_tracing("h1"))
        .default_client(Client::default_client("h2"))
        .build();

    println!("=== Both factories succeed ===");
    for with_tracing in [true, false] {
        for variant in Variant::ALL {
            let report = variant.report(&factory, with_tracing);
            println!("{}", serde_json::to_string(&report)?);
        }
    }
    println!();

    println!("=== Default factory fails ===");
    let failing = ScriptedFactory::builder().fail_default().build();
    for variant in Variant::ALL {
        match variant.run(&failing, false) {
            Ok(client) => println!("{}: unexpected client {:?}", variant, client),
            Err(e) => println!("{}: {}", variant, e),
        }
    }
    println!();

    println!("=== Process-wide flag ===");
    flag::set_tracing(true);
    let client = Variant::Hoisted.run_global(&factory)?;
    println!("hoisted with global flag: {:?}", client);

    Ok(())
}
