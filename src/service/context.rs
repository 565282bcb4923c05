//! Target-service resolution guarded by a fail-closed access check.
//!
//! [`ServiceContextResolver::resolve_service_context`] runs a single guarded pass per request:
//! extract a descriptor, look it up once, authorize the pair, and return the service. When a
//! descriptor exists the authorizer is always consulted, even if the registry found nothing, and
//! a denial is returned as [`Error::AccessDenied`] rather than as an absent service.

// self
use crate::{
	_prelude::*,
	auth::ServiceDescriptor,
	obs::{ResolutionKind, ResolutionOutcome, ResolutionSpan},
	service::{
		AccessAuthorizer, AccessStrategyAuthorizer, AuthenticationRequest,
		ParameterSelectionStrategy, Service, ServiceRegistry, ServiceSelectionStrategy,
	},
};

/// Resolves which service the current authentication attempt acts on behalf of.
#[derive(Clone)]
pub struct ServiceContextResolver {
	/// Strategy extracting the target-service descriptor from requests.
	pub selection: Arc<dyn ServiceSelectionStrategy>,
	/// Registry used to look up descriptors.
	pub registry: Arc<dyn ServiceRegistry>,
	/// Gate enforcing the service's access strategy.
	pub authorizer: Arc<dyn AccessAuthorizer>,
}
impl ServiceContextResolver {
	/// Creates a resolver from its three collaborators.
	pub fn new(
		selection: Arc<dyn ServiceSelectionStrategy>,
		registry: Arc<dyn ServiceRegistry>,
		authorizer: Arc<dyn AccessAuthorizer>,
	) -> Self {
		Self { selection, registry, authorizer }
	}

	/// Creates a resolver reading the `service` parameter and enforcing access strategies.
	pub fn with_registry(registry: Arc<dyn ServiceRegistry>) -> Self {
		Self::new(
			Arc::new(ParameterSelectionStrategy::default()),
			registry,
			Arc::new(AccessStrategyAuthorizer::default()),
		)
	}

	/// Returns the target service for `request`.
	///
	/// `Ok(None)` means the request names no service, or the authorizer admitted a descriptor
	/// the registry does not know. Denials and registry failures are returned unchanged.
	pub async fn resolve_service_context(
		&self,
		request: &AuthenticationRequest,
	) -> Result<Option<Service>> {
		ResolutionSpan::start(ResolutionKind::ServiceContext, "resolve_service_context")
			.instrument(
				async move {
					let Some(descriptor) = self.selection.extract_service_descriptor(request) else {
						trace_event!(debug, "Authentication request names no target service.");

						return Ok(None);
					};

					self.lookup_and_authorize(&descriptor).await
				},
				ResolutionOutcome::of,
			)
			.await
	}

	async fn lookup_and_authorize(
		&self,
		descriptor: &ServiceDescriptor,
	) -> Result<Option<Service>> {
		let service = self.registry.find_service_by(descriptor).await?;

		if let Err(denied) = self.authorizer.ensure_access_allowed(descriptor, service.as_ref()) {
			trace_event!(
				warn,
				descriptor = %descriptor,
				reason = %denied,
				"Service access denied."
			);

			return Err(denied.into());
		}

		Ok(service)
	}
}
impl Debug for ServiceContextResolver {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("ServiceContextResolver").finish_non_exhaustive()
	}
}
