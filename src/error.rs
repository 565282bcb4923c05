//! Resolver-level error types shared across service lookups, authorization, and configuration.

// self
use crate::_prelude::*;

/// Resolver-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Canonical resolver error exposed by public APIs.
///
/// Absent providers and requests without a target service are not errors; they surface as
/// `None` from the respective resolvers.
#[derive(Debug, ThisError)]
pub enum Error {
	/// The target service's access strategy forbids the current attempt.
	#[error(transparent)]
	AccessDenied(#[from] AccessDeniedError),
	/// Service registry failure, propagated as-is.
	#[error("{0}")]
	Registry(
		#[from]
		#[source]
		crate::service::RegistryError,
	),
	/// Local configuration problem.
	#[error(transparent)]
	Config(#[from] ConfigError),
}
impl Error {
	/// Returns `true` when the error is an access denial.
	pub fn is_access_denied(&self) -> bool {
		matches!(self, Self::AccessDenied(_))
	}
}

/// Denial raised by an access authorizer for a resolvable target service.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ThisError)]
pub enum AccessDeniedError {
	/// A service descriptor was present but no registered service matched it.
	#[error("Service `{descriptor}` is not registered.")]
	ServiceNotFound {
		/// Descriptor extracted from the request.
		descriptor: String,
	},
	/// The registered service has its access strategy disabled.
	#[error("Service `{service}` is not allowed to use SSO.")]
	AccessDisabled {
		/// Identifier of the denied service.
		service: String,
	},
	/// The current instant falls outside the service's access window.
	#[error("Service `{service}` is outside its access window.")]
	OutsideAccessWindow {
		/// Identifier of the denied service.
		service: String,
	},
	/// Authorizer-specific denial.
	#[error("Access to `{descriptor}` was denied: {reason}.")]
	Other {
		/// Descriptor extracted from the request.
		descriptor: String,
		/// Authorizer-supplied reason string.
		reason: String,
	},
}

/// Configuration and validation failures.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// Configuration document could not be parsed.
	#[error("Configuration is malformed at `{path}`.")]
	Parse {
		/// Path to the offending field.
		path: String,
		/// Structured parsing failure.
		#[source]
		source: serde_json::Error,
	},
	/// Configuration contains an invalid identifier.
	#[error(transparent)]
	InvalidIdentifier(#[from] crate::auth::IdentifierError),
	/// Two registry entries share the same service descriptor.
	#[error("Service descriptor `{descriptor}` is registered more than once.")]
	DuplicateService {
		/// Offending descriptor.
		descriptor: String,
	},
	/// A request parameter name is blank.
	#[error("The {field} parameter name cannot be blank.")]
	BlankParameter {
		/// Configuration field that failed validation.
		field: &'static str,
	},
}
impl From<serde_path_to_error::Error<serde_json::Error>> for ConfigError {
	fn from(e: serde_path_to_error::Error<serde_json::Error>) -> Self {
		let path = e.path().to_string();

		Self::Parse { path, source: e.into_inner() }
	}
}
