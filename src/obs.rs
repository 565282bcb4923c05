//! Optional observability helpers for resolution steps.
//!
//! # Feature Flags
//!
//! - Enable `tracing` to emit one `mfa_resolver.resolve` span per resolution with the `kind`
//!   (resolution step), `stage` (call site), and final `outcome` fields, plus diagnostic events.
//! - Enable `metrics` to increment [`RESOLUTION_TOTAL`] for every attempt and outcome and to
//!   record finished resolutions in the [`RESOLUTION_SECONDS`] histogram, both labeled by
//!   `kind` + `outcome`.
//!
//! Resolvers only talk to [`ResolutionSpan`]: `start` counts the attempt and `in_scope` or
//! `instrument` classify the result and close the span.

mod metrics;
mod span;

pub use metrics::{RESOLUTION_SECONDS, RESOLUTION_TOTAL};
pub use span::ResolutionSpan;

// self
use crate::_prelude::*;

/// Resolution steps observed by the crate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ResolutionKind {
	/// Provider matching over a configured provider set.
	Provider,
	/// Target service lookup and access check.
	ServiceContext,
	/// Combined service + provider decision.
	Event,
}
impl ResolutionKind {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			ResolutionKind::Provider => "provider",
			ResolutionKind::ServiceContext => "service_context",
			ResolutionKind::Event => "event",
		}
	}
}
impl Display for ResolutionKind {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Outcome labels recorded for each resolution.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ResolutionOutcome {
	/// Entry to a resolver.
	Attempt,
	/// A provider or service was resolved.
	Success,
	/// Nothing applied (no provider matched or no target service).
	Empty,
	/// The target service's access strategy denied the attempt.
	Denied,
	/// A collaborator failure propagated back to the caller.
	Failure,
}
impl ResolutionOutcome {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			ResolutionOutcome::Attempt => "attempt",
			ResolutionOutcome::Success => "success",
			ResolutionOutcome::Empty => "empty",
			ResolutionOutcome::Denied => "denied",
			ResolutionOutcome::Failure => "failure",
		}
	}

	/// Classifies a lookup that either found something or came back empty.
	pub fn matched<T>(found: &Option<T>) -> Self {
		if found.is_some() { ResolutionOutcome::Success } else { ResolutionOutcome::Empty }
	}

	/// Classifies a finished fallible resolution.
	pub fn of<T>(result: &Result<Option<T>>) -> Self {
		match result {
			Ok(found) => Self::matched(found),
			Err(Error::AccessDenied(_)) => ResolutionOutcome::Denied,
			Err(_) => ResolutionOutcome::Failure,
		}
	}
}
impl Display for ResolutionOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
