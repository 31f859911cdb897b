//! The four ways of getting a client out of a conditional.
//!
//! Each function declares an outer `client` binding, picks a factory operation
//! based on the tracing flag and returns whatever the outer binding holds once
//! the conditional is done. Only [`shadowed`] gets it wrong.
//!
//! | Variant         | Inside the branch                      | Error check          |
//! |-----------------|----------------------------------------|----------------------|
//! | [`shadowed`]    | `let client = …?` (new binding)        | in each branch       |
//! | [`renamed`]     | `let created = …?; client = created`   | in each branch       |
//! | [`predeclared`] | `created = …; client = created?`       | in each branch       |
//! | [`hoisted`]     | `created = …`                          | once, after the `if` |

use crate::{factory::ClientFactory, flag, Client, Report, Result};
use serde::Serialize;
use std::fmt;

/// Anti-pattern: each branch declares a new `client` that shadows the outer one.
///
/// The inner bindings go away at the end of their branch, so on success this
/// always returns `Ok(None)`, whatever the factory built. Factory errors are
/// still returned from inside the branch.
///
/// # Examples
///
/// ```
/// use shadowing::{factory::ScriptedFactory, variant, Client};
///
/// let factory = ScriptedFactory::builder()
///     .tracing_client(Client::with_tracing("h1"))
///     .build();
///
/// // The client was built, then lost.
/// assert_eq!(variant::shadowed(&factory, true).unwrap(), None);
/// ```
pub fn shadowed<F>(factory: &F, with_tracing: bool) -> Result<Option<Client>>
where
    F: ClientFactory + ?Sized,
{
    let client: Option<Client> = None;
    if with_tracing {
        let client = factory.create_client_with_tracing()?;
        tracing::info!(client = ?client, "Created client with tracing");
    } else {
        let client = factory.create_default_client()?;
        tracing::info!(client = ?client, "Created default client");
    }

    Ok(client)
}

/// Remedy: bind the factory result under a different name, then assign it.
///
/// Costs an extra binding and an assignment per branch.
#[allow(unused_assignments)]
pub fn renamed<F>(factory: &F, with_tracing: bool) -> Result<Option<Client>>
where
    F: ClientFactory + ?Sized,
{
    let mut client: Option<Client> = None;
    if with_tracing {
        let created = factory.create_client_with_tracing()?;
        client = created;
    } else {
        let created = factory.create_default_client()?;
        client = created;
    }

    Ok(client)
}

/// Remedy: declare the client and the factory outcome up front and only
/// assign to them inside the branches.
///
/// Each branch checks the outcome itself before assigning the client.
#[allow(clippy::needless_late_init)]
pub fn predeclared<F>(factory: &F, with_tracing: bool) -> Result<Option<Client>>
where
    F: ClientFactory + ?Sized,
{
    let client: Option<Client>;
    let created: Result<Option<Client>>;
    if with_tracing {
        created = factory.create_client_with_tracing();
        client = created?;
    } else {
        created = factory.create_default_client();
        client = created?;
    }

    Ok(client)
}

/// Remedy: assign the factory outcome in whichever branch runs and check it
/// once after the conditional.
///
/// Same correctness as [`predeclared`] with a single error check and no
/// nesting inside the branches.
pub fn hoisted<F>(factory: &F, with_tracing: bool) -> Result<Option<Client>>
where
    F: ClientFactory + ?Sized,
{
    let created = if with_tracing {
        factory.create_client_with_tracing()
    } else {
        factory.create_default_client()
    };
    let client = created?;

    Ok(client)
}

/// One of the four procedures, as a value.
///
/// # Examples
///
/// ```
/// use shadowing::{factory::ScriptedFactory, Client, Variant};
///
/// let factory = ScriptedFactory::builder()
///     .default_client(Client::default_client("h2"))
///     .build();
///
/// for variant in Variant::ALL {
///     let client = variant.run(&factory, false).unwrap();
///     if variant.is_correct() {
///         assert_eq!(client, Some(Client::default_client("h2")));
///     } else {
///         assert_eq!(client, None);
///     }
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Variant {
    /// See [`shadowed`].
    Shadowed,
    /// See [`renamed`].
    Renamed,
    /// See [`predeclared`].
    Predeclared,
    /// See [`hoisted`].
    Hoisted,
}

impl Variant {
    /// All variants, anti-pattern first, preferred remedy last.
    pub const ALL: [Variant; 4] = [
        Variant::Shadowed,
        Variant::Renamed,
        Variant::Predeclared,
        Variant::Hoisted,
    ];

    /// Returns the kebab-case name of this variant.
    pub fn name(&self) -> &'static str {
        match self {
            Variant::Shadowed => "shadowed",
            Variant::Renamed => "renamed",
            Variant::Predeclared => "predeclared",
            Variant::Hoisted => "hoisted",
        }
    }

    /// Returns `false` for the variant that loses the client.
    pub fn is_correct(&self) -> bool {
        !matches!(self, Variant::Shadowed)
    }

    /// Runs this variant with an explicit tracing flag.
    ///
    /// Exactly one factory operation is called, once. Its error, if any, is
    /// returned unchanged.
    pub fn run<F>(&self, factory: &F, with_tracing: bool) -> Result<Option<Client>>
    where
        F: ClientFactory + ?Sized,
    {
        tracing::debug!(
            variant = %self,
            tracing = with_tracing,
            "Choosing client factory"
        );

        let result = match self {
            Variant::Shadowed => shadowed(factory, with_tracing),
            Variant::Renamed => renamed(factory, with_tracing),
            Variant::Predeclared => predeclared(factory, with_tracing),
            Variant::Hoisted => hoisted(factory, with_tracing),
        };

        match &result {
            Ok(client) => {
                tracing::debug!(
                    variant = %self,
                    client = ?client,
                    "Client resolved after conditional"
                );
            }
            Err(e) => {
                tracing::warn!(
                    variant = %self,
                    tracing = with_tracing,
                    error = %e,
                    "Client construction failed"
                );
            }
        }

        result
    }

    /// Runs this variant using the process-wide tracing flag.
    ///
    /// The flag is read once before the factory is chosen.
    pub fn run_global<F>(&self, factory: &F) -> Result<Option<Client>>
    where
        F: ClientFactory + ?Sized,
    {
        self.run(factory, flag::tracing_enabled())
    }

    /// Runs this variant and records the outcome.
    pub fn report<F>(&self, factory: &F, with_tracing: bool) -> Report
    where
        F: ClientFactory + ?Sized,
    {
        Report::new(*self, with_tracing, self.run(factory, with_tracing))
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::factory::{ScriptedFactory, StubFactory};
    use crate::Error;

    fn scripted() -> ScriptedFactory {
        ScriptedFactory::builder()
            .tracing_client(Client::with_tracing("h1"))
            .default_client(Client::default_client("h2"))
            .build()
    }

    #[test]
    fn test_shadowed_loses_client() {
        let factory = scripted();

        assert_eq!(shadowed(&factory, true), Ok(None));
        assert_eq!(shadowed(&factory, false), Ok(None));
        assert_eq!(factory.tracing_calls(), 1);
        assert_eq!(factory.default_calls(), 1);
    }

    #[test]
    fn test_remedies_keep_client() {
        let remedies: [fn(&ScriptedFactory, bool) -> Result<Option<Client>>; 3] =
            [renamed, predeclared, hoisted];

        for remedy in remedies {
            let factory = scripted();

            assert_eq!(remedy(&factory, true), Ok(Some(Client::with_tracing("h1"))));
            assert_eq!(
                remedy(&factory, false),
                Ok(Some(Client::default_client("h2")))
            );
        }
    }

    #[test]
    fn test_stub_factory_gives_empty_client_everywhere() {
        for variant in Variant::ALL {
            assert_eq!(variant.run(&StubFactory, true), Ok(None));
            assert_eq!(variant.run(&StubFactory, false), Ok(None));
        }
    }

    #[test]
    fn test_failure_propagates_unchanged() {
        let factory = ScriptedFactory::builder().fail_default().build();

        for variant in Variant::ALL {
            assert_eq!(
                variant.run(&factory, false),
                Err(Error::ConstructionFailed {
                    factory: "create_default_client"
                })
            );
        }
        assert_eq!(factory.default_calls(), 4);
        assert_eq!(factory.tracing_calls(), 0);
    }

    #[test]
    fn test_run_accepts_trait_objects() {
        let factory: Box<dyn ClientFactory> = Box::new(scripted());

        assert_eq!(
            Variant::Hoisted.run(factory.as_ref(), true),
            Ok(Some(Client::with_tracing("h1")))
        );
    }

    #[test]
    fn test_names() {
        let names: Vec<_> = Variant::ALL.iter().map(Variant::name).collect();

        assert_eq!(names, ["shadowed", "renamed", "predeclared", "hoisted"]);
        assert_eq!(Variant::Predeclared.to_string(), "predeclared");
        assert!(!Variant::Shadowed.is_correct());
        assert!(Variant::Hoisted.is_correct());
    }
}
