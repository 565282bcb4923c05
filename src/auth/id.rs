//! Strongly typed identifiers enforced across the resolver domain.

// std
use std::{borrow::Borrow, ops::Deref};
// self
use crate::_prelude::*;

macro_rules! def_id {
	($name:ident, $doc:literal, $kind:literal, $validate:path) => {
		#[doc = $doc]
		#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
		#[serde(try_from = "String", into = "String")]
		pub struct $name(String);
		impl $name {
			/// Creates a new identifier after validation.
			pub fn new(value: impl AsRef<str>) -> Result<Self, IdentifierError> {
				let view = value.as_ref();

				$validate($kind, view)?;

				Ok(Self(view.to_owned()))
			}
		}
		impl Deref for $name {
			type Target = str;

			fn deref(&self) -> &Self::Target {
				&self.0
			}
		}
		impl AsRef<str> for $name {
			fn as_ref(&self) -> &str {
				&self.0
			}
		}
		impl From<$name> for String {
			fn from(value: $name) -> Self {
				value.0
			}
		}
		impl TryFrom<String> for $name {
			type Error = IdentifierError;

			fn try_from(value: String) -> Result<Self, Self::Error> {
				$validate($kind, &value)?;

				Ok(Self(value))
			}
		}
		impl Borrow<str> for $name {
			fn borrow(&self) -> &str {
				&self.0
			}
		}
		impl Debug for $name {
			fn fmt(&self, f: &mut Formatter) -> FmtResult {
				write!(f, concat!($kind, "({})"), self.0)
			}
		}
		impl Display for $name {
			fn fmt(&self, f: &mut Formatter) -> FmtResult {
				f.write_str(&self.0)
			}
		}
		impl FromStr for $name {
			type Err = IdentifierError;

			fn from_str(s: &str) -> Result<Self, Self::Err> {
				Self::new(s)
			}
		}
	};
}

const IDENTIFIER_MAX_LEN: usize = 128;

/// Error returned when identifier validation fails.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, ThisError)]
pub enum IdentifierError {
	/// The identifier was empty or whitespace.
	#[error("{kind} identifier cannot be empty.")]
	Empty {
		/// Kind of identifier (provider, service, descriptor).
		kind: &'static str,
	},
	/// The identifier contains whitespace characters.
	#[error("{kind} identifier contains whitespace.")]
	ContainsWhitespace {
		/// Kind of identifier (provider, service, descriptor).
		kind: &'static str,
	},
	/// The identifier exceeded the allowed character count.
	#[error("{kind} identifier exceeds {max} characters.")]
	TooLong {
		/// Kind of identifier (provider, service, descriptor).
		kind: &'static str,
		/// Maximum permitted character count.
		max: usize,
	},
}

def_id! {
	ProviderId,
	"Identifier for a multifactor authentication provider.",
	"Provider",
	validate_strict
}
def_id! { ServiceId, "Unique identifier for a registered service.", "Service", validate_strict }
def_id! {
	ServiceDescriptor,
	"Raw target-service reference (usually a URL) extracted from an authentication request.",
	"Descriptor",
	validate_descriptor
}

fn validate_strict(kind: &'static str, view: &str) -> Result<(), IdentifierError> {
	if view.is_empty() {
		return Err(IdentifierError::Empty { kind });
	}
	if view.chars().any(char::is_whitespace) {
		return Err(IdentifierError::ContainsWhitespace { kind });
	}
	if view.len() > IDENTIFIER_MAX_LEN {
		return Err(IdentifierError::TooLong { kind, max: IDENTIFIER_MAX_LEN });
	}

	Ok(())
}

// Descriptors are matched against the registry verbatim; only blank values are absences.
fn validate_descriptor(kind: &'static str, view: &str) -> Result<(), IdentifierError> {
	if view.trim().is_empty() {
		return Err(IdentifierError::Empty { kind });
	}

	Ok(())
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn identifiers_trim_and_validate() {
		assert!(ProviderId::new(" mfa-duo").is_err(), "Leading whitespace must be rejected.");
		assert!(ProviderId::new("mfa-duo ").is_err(), "Trailing whitespace must be rejected.");

		let provider =
			ProviderId::new("mfa-duo").expect("Provider fixture should be considered valid.");

		assert_eq!(provider.as_ref(), "mfa-duo");
		assert!(ServiceId::new("").is_err());
		assert!(ServiceId::new("with space").is_err());
	}

	#[test]
	fn descriptors_only_reject_blank_values() {
		assert!(matches!(
			ServiceDescriptor::new("   "),
			Err(IdentifierError::Empty { kind: "Descriptor" })
		));

		let long = format!("https://app.example.org/{}", "a".repeat(IDENTIFIER_MAX_LEN * 2));

		ServiceDescriptor::new(&long).expect("Long service URLs should be accepted.");
	}

	#[test]
	fn serde_round_trip_enforces_validation() {
		let provider: ProviderId = serde_json::from_str("\"mfa-gauth\"")
			.expect("Provider should deserialize successfully.");

		assert_eq!(provider.as_ref(), "mfa-gauth");
		assert!(serde_json::from_str::<ProviderId>("\"with space\"").is_err());
		assert!(serde_json::from_str::<ServiceDescriptor>("\"\"").is_err());
	}

	#[test]
	fn length_limits_apply_to_strict_identifiers() {
		let exact = "a".repeat(IDENTIFIER_MAX_LEN);

		ServiceId::new(&exact).expect("Exact length should succeed.");

		let too_long = "a".repeat(IDENTIFIER_MAX_LEN + 1);

		assert!(matches!(
			ServiceId::new(&too_long),
			Err(IdentifierError::TooLong { max: IDENTIFIER_MAX_LEN, .. })
		));
	}

	#[test]
	fn borrow_supports_fast_lookup() {
		let map: HashMap<ProviderId, u8> = HashMap::from_iter([(
			ProviderId::new("mfa-duo").expect("Provider used for lookup should be valid."),
			7_u8,
		)]);

		assert_eq!(map.get("mfa-duo"), Some(&7));
	}
}
