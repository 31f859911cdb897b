//! # Shadowing - getting a value out of a conditional
//!
//! A common way to lose a value: declare `client` before an `if`, then build it
//! inside each branch with `let client = ...`. The `let` makes a new binding
//! that only lives until the end of the branch, so the outer `client` is still
//! empty afterwards. The compiler accepts it, nothing fails, and the value is
//! silently dropped.
//!
//! This crate has the buggy version and three fixes, all built on the same
//! pair of client factories:
//!
//! - [`variant::shadowed`] - the anti-pattern, always comes back empty
//! - [`variant::renamed`] - bind under another name, then assign
//! - [`variant::predeclared`] - declare client and outcome first, assign in the branches
//! - [`variant::hoisted`] - assign the outcome in the branch, check the error once after
//!
//! ## Quick Start
//!
//! ```
//! use shadowing::{factory::ScriptedFactory, Client, Variant};
//!
//! let factory = ScriptedFactory::builder()
//!     .tracing_client(Client::with_tracing("h1"))
//!     .build();
//!
//! // The client is built and then lost with the outer binding.
//! assert_eq!(Variant::Shadowed.run(&factory, true)?, None);
//!
//! // Any of the remedies carries it out.
//! assert_eq!(
//!     Variant::Hoisted.run(&factory, true)?,
//!     Some(Client::with_tracing("h1"))
//! );
//! # Ok::<(), shadowing::Error>(())
//! ```
//!
//! ## Errors
//!
//! A factory can fail with [`Error::ConstructionFailed`]. Every variant returns
//! that error unchanged, without touching the other factory:
//!
//! ```
//! use shadowing::{factory::ScriptedFactory, Error, Variant};
//!
//! let factory = ScriptedFactory::builder().fail_default().build();
//!
//! for variant in Variant::ALL {
//!     let err = variant.run(&factory, false).unwrap_err();
//!     assert!(err.is_construction_failure());
//! }
//! assert_eq!(factory.tracing_calls(), 0);
//! ```
//!
//! ## Logging
//!
//! Runs emit `tracing` events: the chosen factory and the resolved client at
//! `debug`, failures at `warn`, and the shadowed variant logs the inner client
//! at `info` right before losing it.

mod client;
mod error;
pub mod factory;
pub mod flag;
mod report;
pub mod variant;

pub use client::Client;
pub use error::{Error, Result};
pub use factory::ClientFactory;
pub use report::Report;
pub use variant::Variant;
