//! A serializable record of a single variant run.
//!
//! [`Report`] keeps the variant, the flag it ran with and what came out of it,
//! so runs can be compared side by side or logged as JSON.

use crate::{Client, Result, Variant};
use serde::Serialize;

/// The outcome of running one variant once.
///
/// # Examples
///
/// ```
/// use shadowing::{factory::ScriptedFactory, Client, Variant};
///
/// let factory = ScriptedFactory::builder()
///     .tracing_client(Client::with_tracing("h1"))
///     .build();
///
/// let report = Variant::Renamed.report(&factory, true);
///
/// assert!(report.succeeded());
/// assert_eq!(report.client, Some(Client::with_tracing("h1")));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    /// The variant that ran.
    pub variant: Variant,

    /// The tracing flag it ran with.
    pub tracing: bool,

    /// The outer binding after the conditional, if the run succeeded.
    pub client: Option<Client>,

    /// The error message, if the factory failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Report {
    /// Creates a report from the result of a run.
    pub fn new(variant: Variant, tracing: bool, result: Result<Option<Client>>) -> Self {
        let (client, error) = match result {
            Ok(client) => (client, None),
            Err(e) => (None, Some(e.to_string())),
        };

        Self {
            variant,
            tracing,
            client,
            error,
        }
    }

    /// Returns `true` if the factory call succeeded.
    pub fn succeeded(&self) -> bool {
        self.error.is_none()
    }

    /// Returns `true` if the run succeeded but left the outer binding empty.
    pub fn is_empty(&self) -> bool {
        self.succeeded() && self.client.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn test_failed_run_has_no_client() {
        let report = Report::new(
            Variant::Predeclared,
            true,
            Err(Error::ConstructionFailed {
                factory: "create_client_with_tracing",
            }),
        );

        assert!(!report.succeeded());
        assert!(!report.is_empty());
        assert_eq!(report.client, None);
        assert_eq!(
            report.error.as_deref(),
            Some("Failed to construct client (create_client_with_tracing)")
        );
    }

    #[test]
    fn test_empty_success() {
        let report = Report::new(Variant::Shadowed, false, Ok(None));

        assert!(report.succeeded());
        assert!(report.is_empty());
    }
}
