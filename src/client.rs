//! The opaque client handle produced by factories.

use serde::Serialize;
use std::fmt;

/// A constructed client.
///
/// Nothing about its contents matters to the variants: it is only carried out
/// of the conditional (or not). The label and tracing marker exist so callers
/// can tell which factory produced a given handle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Client {
    label: String,
    tracing: bool,
}

impl Client {
    /// Creates a client handle as built by the tracing factory.
    pub fn with_tracing(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            tracing: true,
        }
    }

    /// Creates a client handle as built by the default factory.
    pub fn default_client(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            tracing: false,
        }
    }

    /// Returns the label given at construction.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns `true` if this handle came from the tracing factory.
    pub fn has_tracing(&self) -> bool {
        self.tracing
    }
}

impl fmt::Display for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.tracing {
            write!(f, "{} (tracing)", self.label)
        } else {
            write!(f, "{}", self.label)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tracing_marker() {
        let traced = Client::with_tracing("h1");
        let plain = Client::default_client("h1");

        assert!(traced.has_tracing());
        assert!(!plain.has_tracing());
        assert_ne!(traced, plain);
        assert_eq!(traced.to_string(), "h1 (tracing)");
        assert_eq!(plain.to_string(), "h1");
    }
}
