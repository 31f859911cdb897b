//! Error types for client construction.
//!
//! Construction is the only thing that can fail in this crate, so there is a
//! single error kind. Variants never wrap or retry it: whatever the factory
//! returned is what the caller sees.

/// The error type returned by client factories and the variants that call them.
///
/// # Examples
///
/// ```
/// use shadowing::{factory::ScriptedFactory, Error, Variant};
///
/// let factory = ScriptedFactory::builder().fail_default().build();
///
/// match Variant::Hoisted.run(&factory, false) {
///     Ok(client) => println!("Built: {:?}", client),
///     Err(Error::ConstructionFailed { factory: operation }) => {
///         eprintln!("{} could not build a client", operation);
///     }
/// }
/// ```
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A factory failed to construct a client.
    ///
    /// # Fields
    ///
    /// * `factory` - Name of the factory operation that failed
    #[error("Failed to construct client ({factory})")]
    ConstructionFailed {
        /// The factory operation that failed
        factory: &'static str,
    },
}

impl Error {
    /// Returns `true` if this error came from a failed client construction.
    pub fn is_construction_failure(&self) -> bool {
        matches!(self, Error::ConstructionFailed { .. })
    }

    /// Returns the name of the factory operation that failed.
    pub fn factory(&self) -> &'static str {
        match self {
            Error::ConstructionFailed { factory } => factory,
        }
    }
}

/// A specialized `Result` type for client construction.
///
/// This is a convenience alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
