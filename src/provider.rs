//! Multifactor provider capabilities (behavior) and resolution over configured provider sets.
//!
//! `MfaProvider` is the single seam concrete providers implement; each decides on its own
//! whether a requested method token selects it. `resolver` picks the provider responsible for a
//! set of requested methods, and `alias` ships a configurable id/alias-matching provider.

pub mod alias;
pub mod resolver;

pub use alias::*;
pub use resolver::*;

// self
use crate::{_prelude::*, auth::ProviderId};

/// Configured providers keyed by identifier.
///
/// Iteration order of this map is unspecified and may differ between processes. Resolution
/// over it is only deterministic when at most one provider matches; callers that need a
/// precedence between overlapping providers must pass an ordered sequence to [`first_match`].
pub type ProviderMap = HashMap<ProviderId, Arc<dyn MfaProvider>>;

/// A pluggable multifactor authentication method (one-time code, hardware key, push, ...).
///
/// Implementors are required to be `Send + Sync` so a single provider set can serve many
/// concurrent authentication attempts.
pub trait MfaProvider: Send + Sync + Debug {
	/// Stable unique key of this provider.
	fn id(&self) -> &ProviderId;

	/// Returns whether this provider satisfies the requested method token.
	///
	/// Exact-id, alias, and case-sensitivity rules are owned by the implementation.
	fn matches(&self, requested_method: &str) -> bool;
}

/// Builds a [`ProviderMap`] keyed by each provider's own identifier.
///
/// Later providers replace earlier ones that share an identifier.
pub fn provider_map<I>(providers: I) -> ProviderMap
where
	I: IntoIterator<Item = Arc<dyn MfaProvider>>,
{
	providers.into_iter().map(|provider| (provider.id().clone(), provider)).collect()
}
