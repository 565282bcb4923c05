// std
use std::time::Instant;
// self
use crate::{
	_prelude::*,
	obs::{ResolutionKind, ResolutionOutcome},
};

/// One observed resolution, opened on entry and closed with its final [`ResolutionOutcome`].
///
/// Opening counts an attempt. Closing writes the outcome into the span's `outcome` field and
/// records the outcome counter plus the latency histogram, so every resolver reports through the
/// same two calls.
#[derive(Debug)]
pub struct ResolutionSpan {
	kind: ResolutionKind,
	started: Instant,
	#[cfg(feature = "tracing")]
	span: tracing::Span,
}
impl ResolutionSpan {
	/// Opens a span for `kind` at call site `stage` and counts the attempt.
	pub fn start(kind: ResolutionKind, stage: &'static str) -> Self {
		#[cfg(not(feature = "tracing"))]
		let _ = stage;

		super::metrics::record_attempt(kind);

		Self {
			kind,
			started: Instant::now(),
			#[cfg(feature = "tracing")]
			span: tracing::info_span!(
				"mfa_resolver.resolve",
				kind = kind.as_str(),
				stage,
				outcome = tracing::field::Empty
			),
		}
	}

	/// Resolution step this span observes.
	pub fn kind(&self) -> ResolutionKind {
		self.kind
	}

	/// Closes the span with `outcome`.
	pub fn finish(self, outcome: ResolutionOutcome) {
		#[cfg(feature = "tracing")]
		self.span.record("outcome", outcome.as_str());

		super::metrics::record_outcome(self.kind, outcome, self.started.elapsed());
	}

	/// Runs a synchronous resolution inside the span and closes it with `classify(&output)`.
	pub fn in_scope<T, R, C>(self, run: R, classify: C) -> T
	where
		R: FnOnce() -> T,
		C: FnOnce(&T) -> ResolutionOutcome,
	{
		#[cfg(feature = "tracing")]
		let output = self.span.in_scope(run);
		#[cfg(not(feature = "tracing"))]
		let output = run();

		self.finish(classify(&output));

		output
	}

	/// Drives an async resolution inside the span and closes it with `classify(&output)`.
	///
	/// The span is attached to the future rather than entered, so no guard is held across
	/// `.await` points.
	pub async fn instrument<Fut, C>(self, fut: Fut, classify: C) -> Fut::Output
	where
		Fut: Future,
		C: FnOnce(&Fut::Output) -> ResolutionOutcome,
	{
		#[cfg(feature = "tracing")]
		let output = {
			use tracing::Instrument;

			fut.instrument(self.span.clone()).await
		};
		#[cfg(not(feature = "tracing"))]
		let output = fut.await;

		self.finish(classify(&output));

		output
	}
}
