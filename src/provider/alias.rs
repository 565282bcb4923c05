//! Configurable provider that answers to its own identifier and a set of aliases.

// self
use crate::{_prelude::*, auth::ProviderId, provider::MfaProvider};

/// Provider matching its identifier or any configured alias.
///
/// Matching is exact by default; [`AliasProvider::case_insensitive`] switches to ASCII
/// case-insensitive comparison.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AliasProvider {
	/// Provider identifier.
	pub id: ProviderId,
	/// Additional method tokens that select this provider.
	#[serde(default)]
	pub aliases: Vec<String>,
	/// Compare tokens ignoring ASCII case.
	#[serde(default)]
	pub ignore_case: bool,
}
impl AliasProvider {
	/// Creates a provider that only answers to its own identifier.
	pub fn new(id: ProviderId) -> Self {
		Self { id, aliases: Vec::new(), ignore_case: false }
	}

	/// Adds an alias token.
	pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
		self.aliases.push(alias.into());

		self
	}

	/// Adds several alias tokens.
	pub fn with_aliases<I, S>(mut self, aliases: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.aliases.extend(aliases.into_iter().map(Into::into));

		self
	}

	/// Enables ASCII case-insensitive matching.
	pub fn case_insensitive(mut self) -> Self {
		self.ignore_case = true;

		self
	}

	fn token_eq(&self, candidate: &str, requested: &str) -> bool {
		if self.ignore_case {
			candidate.eq_ignore_ascii_case(requested)
		} else {
			candidate == requested
		}
	}
}
impl MfaProvider for AliasProvider {
	fn id(&self) -> &ProviderId {
		&self.id
	}

	fn matches(&self, requested_method: &str) -> bool {
		self.token_eq(&self.id, requested_method)
			|| self.aliases.iter().any(|alias| self.token_eq(alias, requested_method))
	}
}
