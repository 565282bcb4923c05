// std
use std::time::Duration;
// self
use crate::obs::{ResolutionKind, ResolutionOutcome};

/// Counter of resolution attempts and outcomes, labeled by `kind` + `outcome`.
pub const RESOLUTION_TOTAL: &str = "mfa_resolver_resolution_total";
/// Histogram of finished resolution latencies in seconds, labeled by `kind` + `outcome`.
pub const RESOLUTION_SECONDS: &str = "mfa_resolver_resolution_seconds";

pub(super) fn record_attempt(kind: ResolutionKind) {
	count(kind, ResolutionOutcome::Attempt);
}

pub(super) fn record_outcome(kind: ResolutionKind, outcome: ResolutionOutcome, elapsed: Duration) {
	count(kind, outcome);

	#[cfg(feature = "metrics")]
	metrics::histogram!(
		RESOLUTION_SECONDS,
		"kind" => kind.as_str(),
		"outcome" => outcome.as_str()
	)
	.record(elapsed.as_secs_f64());
	#[cfg(not(feature = "metrics"))]
	let _ = elapsed;
}

fn count(kind: ResolutionKind, outcome: ResolutionOutcome) {
	#[cfg(feature = "metrics")]
	metrics::counter!(RESOLUTION_TOTAL, "kind" => kind.as_str(), "outcome" => outcome.as_str())
		.increment(1);
	#[cfg(not(feature = "metrics"))]
	let _ = (kind, outcome);
}
