//! Provider resolution hooks that select the provider responsible for a requested method.
//!
//! Resolution is a pure function of its inputs: no provider or method collection is mutated and
//! "no match" is an ordinary `None`, never an error.

// self
use crate::{
	_prelude::*,
	auth::RequestedMethods,
	obs::{ResolutionKind, ResolutionOutcome, ResolutionSpan},
	provider::{MfaProvider, ProviderMap},
};

/// Strategy that maps requested method tokens onto one configured provider.
pub trait ProviderResolver: Send + Sync {
	/// Returns the provider satisfying any of the requested methods, if one exists.
	fn resolve_provider<'a>(
		&self,
		providers: &'a ProviderMap,
		requested: &RequestedMethods,
	) -> Option<&'a Arc<dyn MfaProvider>>;

	/// Single-token convenience; `None` behaves exactly like an empty collection.
	fn resolve_provider_for<'a>(
		&self,
		providers: &'a ProviderMap,
		requested: Option<&str>,
	) -> Option<&'a Arc<dyn MfaProvider>> {
		self.resolve_provider(providers, &RequestedMethods::single(requested))
	}
}

/// Default resolver returning the first provider for which any requested method matches.
///
/// Evaluation short-circuits on the first success. Over a [`ProviderMap`] the visiting order is
/// the map's, so overlapping providers resolve non-deterministically; no tie-break is invented.
#[derive(Clone, Copy, Debug, Default)]
pub struct FirstMatchResolver;
impl Display for FirstMatchResolver {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("first-match-resolver")
	}
}
impl ProviderResolver for FirstMatchResolver {
	fn resolve_provider<'a>(
		&self,
		providers: &'a ProviderMap,
		requested: &RequestedMethods,
	) -> Option<&'a Arc<dyn MfaProvider>> {
		ResolutionSpan::start(ResolutionKind::Provider, "resolve_provider").in_scope(
			|| {
				let resolved = first_match(providers.values(), requested);

				#[cfg(feature = "tracing")]
				match resolved {
					Some(provider) => tracing::debug!(
						provider = %provider.id(),
						methods = %requested,
						"Resolved multifactor provider."
					),
					None => tracing::debug!(
						methods = %requested,
						candidates = providers.len(),
						"No multifactor provider matched the requested methods."
					),
				}

				resolved
			},
			ResolutionOutcome::matched,
		)
	}
}

/// Returns the first provider, in iteration order, matching any requested method.
///
/// Pass an explicitly ordered sequence (e.g. a `Vec` sorted by caller-defined precedence) when
/// several providers may satisfy the same token.
pub fn first_match<'a, I>(
	providers: I,
	requested: &RequestedMethods,
) -> Option<&'a Arc<dyn MfaProvider>>
where
	I: IntoIterator<Item = &'a Arc<dyn MfaProvider>>,
{
	if requested.is_empty() {
		return None;
	}

	providers.into_iter().find(|provider| requested.iter().any(|method| provider.matches(method)))
}
