//! Registered target services and the collaborators that locate and authorize them.
//!
//! Services are read-only inputs here: they are looked up fresh for every request and never
//! created, mutated, or persisted by the resolver.

pub mod access;
pub mod context;
pub mod registry;
pub mod selection;

pub use access::*;
pub use context::*;
pub use registry::*;
pub use selection::*;

// self
use crate::{
	_prelude::*,
	auth::{RequestedMethods, ServiceDescriptor, ServiceId},
};

/// Downstream application an authentication attempt is performed on behalf of.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
	/// Stable service identifier.
	pub id: ServiceId,
	/// Human-readable service name.
	#[serde(default)]
	pub name: String,
	/// Descriptor (usually the service URL) requests use to reference this service.
	pub service: ServiceDescriptor,
	/// Authorization predicate governing whether attempts may proceed.
	#[serde(default)]
	pub access_strategy: AccessStrategy,
	/// Multifactor requirements attached to the service.
	#[serde(default)]
	pub mfa_policy: MfaPolicy,
}
impl Service {
	/// Creates an enabled service without multifactor requirements.
	pub fn new(id: ServiceId, service: ServiceDescriptor) -> Self {
		Self {
			name: id.to_string(),
			id,
			service,
			access_strategy: AccessStrategy::default(),
			mfa_policy: MfaPolicy::default(),
		}
	}

	/// Sets the display name.
	pub fn with_name(mut self, name: impl Into<String>) -> Self {
		self.name = name.into();

		self
	}

	/// Replaces the access strategy.
	pub fn with_access_strategy(mut self, strategy: AccessStrategy) -> Self {
		self.access_strategy = strategy;

		self
	}

	/// Replaces the multifactor policy.
	pub fn with_mfa_policy(mut self, policy: MfaPolicy) -> Self {
		self.mfa_policy = policy;

		self
	}
}

/// Access predicate attached to a service.
///
/// A service is usable when it is enabled and, if a window is configured, the evaluation
/// instant falls inside `[starting, ending]`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessStrategy {
	/// Whether the service may participate in SSO at all.
	#[serde(default = "enabled_by_default")]
	pub enabled: bool,
	/// Instant before which access is denied.
	#[serde(default, with = "time::serde::rfc3339::option")]
	pub starting: Option<OffsetDateTime>,
	/// Instant after which access is denied.
	#[serde(default, with = "time::serde::rfc3339::option")]
	pub ending: Option<OffsetDateTime>,
}
impl AccessStrategy {
	/// Strategy that rejects every attempt.
	pub fn disabled() -> Self {
		Self { enabled: false, ..Self::default() }
	}

	/// Restricts access to the provided window; either bound may be open.
	pub fn with_window(
		mut self,
		starting: Option<OffsetDateTime>,
		ending: Option<OffsetDateTime>,
	) -> Self {
		self.starting = starting;
		self.ending = ending;

		self
	}

	/// Returns true when the window (if any) contains `instant`.
	pub fn is_within_window(&self, instant: OffsetDateTime) -> bool {
		self.starting.is_none_or(|start| instant >= start)
			&& self.ending.is_none_or(|end| instant <= end)
	}

	/// Returns true when the strategy admits an attempt at `instant`.
	pub fn is_access_allowed_at(&self, instant: OffsetDateTime) -> bool {
		self.enabled && self.is_within_window(instant)
	}
}
impl Default for AccessStrategy {
	fn default() -> Self {
		Self { enabled: true, starting: None, ending: None }
	}
}

/// Multifactor requirement attached to a service.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MfaPolicy {
	/// Method tokens the service demands; an empty list means no requirement.
	#[serde(default)]
	pub methods: RequestedMethods,
}
impl MfaPolicy {
	/// Builds a policy from method tokens.
	pub fn requiring<I, S>(methods: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self { methods: methods.into_iter().collect() }
	}

	/// Returns true when the service demands at least one method.
	pub fn is_required(&self) -> bool {
		!self.methods.is_empty()
	}

	/// Returns true when every requested token is one of the policy's methods.
	///
	/// An empty request is never permitted; it cannot satisfy a requirement.
	pub fn permits(&self, requested: &RequestedMethods) -> bool {
		!requested.is_empty() && requested.iter().all(|method| self.methods.contains(method))
	}
}

fn enabled_by_default() -> bool {
	true
}
