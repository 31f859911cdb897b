//! Client factories.
//!
//! A variant picks one of the two operations on [`ClientFactory`] depending on
//! the tracing flag. [`StubFactory`] always succeeds with an empty handle;
//! [`ScriptedFactory`] can be told to hand back specific clients or to fail.

use crate::{Client, Error, Result};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Name reported by [`Error::ConstructionFailed`] for the tracing factory.
pub const TRACING_FACTORY: &str = "create_client_with_tracing";

/// Name reported by [`Error::ConstructionFailed`] for the default factory.
pub const DEFAULT_FACTORY: &str = "create_default_client";

/// Builds clients for the variants.
///
/// Both operations take no input and return either a (possibly empty) client
/// handle or [`Error::ConstructionFailed`].
pub trait ClientFactory {
    /// Builds a client with tracing enabled.
    fn create_client_with_tracing(&self) -> Result<Option<Client>>;

    /// Builds a client with the default configuration.
    fn create_default_client(&self) -> Result<Option<Client>>;
}

/// A factory whose operations always succeed with an empty handle.
#[derive(Debug, Clone, Copy, Default)]
pub struct StubFactory;

impl ClientFactory for StubFactory {
    fn create_client_with_tracing(&self) -> Result<Option<Client>> {
        Ok(None)
    }

    fn create_default_client(&self) -> Result<Option<Client>> {
        Ok(None)
    }
}

/// What a scripted factory operation does when called.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Succeed with the given handle (`None` is the empty handle).
    Succeed(Option<Client>),

    /// Fail with [`Error::ConstructionFailed`].
    Fail,
}

impl Outcome {
    fn resolve(&self, factory: &'static str) -> Result<Option<Client>> {
        match self {
            Outcome::Succeed(client) => Ok(client.clone()),
            Outcome::Fail => Err(Error::ConstructionFailed { factory }),
        }
    }
}

/// A factory with configurable outcomes that counts how often it is called.
///
/// # Examples
///
/// ```
/// use shadowing::{factory::{ClientFactory, ScriptedFactory}, Client};
///
/// let factory = ScriptedFactory::builder()
///     .tracing_client(Client::with_tracing("h1"))
///     .fail_default()
///     .build();
///
/// assert_eq!(
///     factory.create_client_with_tracing().unwrap(),
///     Some(Client::with_tracing("h1"))
/// );
/// assert!(factory.create_default_client().is_err());
/// assert_eq!(factory.tracing_calls(), 1);
/// assert_eq!(factory.default_calls(), 1);
/// ```
#[derive(Debug)]
pub struct ScriptedFactory {
    tracing: Outcome,
    default: Outcome,
    tracing_calls: AtomicUsize,
    default_calls: AtomicUsize,
}

impl ScriptedFactory {
    /// Creates a new `ScriptedFactoryBuilder`.
    ///
    /// Unless configured otherwise both operations succeed with an empty handle.
    pub fn builder() -> ScriptedFactoryBuilder {
        ScriptedFactoryBuilder::new()
    }

    /// Number of times `create_client_with_tracing` has been called.
    pub fn tracing_calls(&self) -> usize {
        self.tracing_calls.load(Ordering::Relaxed)
    }

    /// Number of times `create_default_client` has been called.
    pub fn default_calls(&self) -> usize {
        self.default_calls.load(Ordering::Relaxed)
    }

    /// Total number of factory calls.
    pub fn total_calls(&self) -> usize {
        self.tracing_calls() + self.default_calls()
    }
}

impl ClientFactory for ScriptedFactory {
    fn create_client_with_tracing(&self) -> Result<Option<Client>> {
        self.tracing_calls.fetch_add(1, Ordering::Relaxed);
        self.tracing.resolve(TRACING_FACTORY)
    }

    fn create_default_client(&self) -> Result<Option<Client>> {
        self.default_calls.fetch_add(1, Ordering::Relaxed);
        self.default.resolve(DEFAULT_FACTORY)
    }
}

/// Builder for configuring a [`ScriptedFactory`].
#[derive(Debug, Clone)]
pub struct ScriptedFactoryBuilder {
    tracing: Outcome,
    default: Outcome,
}

impl ScriptedFactoryBuilder {
    /// Creates a builder where both operations succeed with an empty handle.
    pub fn new() -> Self {
        Self {
            tracing: Outcome::Succeed(None),
            default: Outcome::Succeed(None),
        }
    }

    /// Makes `create_client_with_tracing` return `client`.
    pub fn tracing_client(mut self, client: Client) -> Self {
        self.tracing = Outcome::Succeed(Some(client));
        self
    }

    /// Makes `create_default_client` return `client`.
    pub fn default_client(mut self, client: Client) -> Self {
        self.default = Outcome::Succeed(Some(client));
        self
    }

    /// Makes `create_client_with_tracing` fail.
    pub fn fail_tracing(mut self) -> Self {
        self.tracing = Outcome::Fail;
        self
    }

    /// Makes `create_default_client` fail.
    pub fn fail_default(mut self) -> Self {
        self.default = Outcome::Fail;
        self
    }

    /// Sets the tracing outcome directly.
    pub fn tracing_outcome(mut self, outcome: Outcome) -> Self {
        self.tracing = outcome;
        self
    }

    /// Sets the default outcome directly.
    pub fn default_outcome(mut self, outcome: Outcome) -> Self {
        self.default = outcome;
        self
    }

    /// Builds the configured `ScriptedFactory`.
    pub fn build(self) -> ScriptedFactory {
        ScriptedFactory {
            tracing: self.tracing,
            default: self.default,
            tracing_calls: AtomicUsize::new(0),
            default_calls: AtomicUsize::new(0),
        }
    }
}

impl Default for ScriptedFactoryBuilder {
    fn default() -> Self {
        Self::new()
    }
}
