//! Combined multifactor decision used by the hosting flow engine.
//!
//! The engine first learns which service the attempt acts for, then derives the requested
//! methods and asks the provider resolver for the provider to activate next. The two resolvers
//! stay independent and only compose here.

// self
use crate::{
	_prelude::*,
	auth::{ProviderId, RequestedMethods},
	config::ResolverConfig,
	obs::{ResolutionKind, ResolutionOutcome, ResolutionSpan},
	provider::{FirstMatchResolver, MfaProvider, ProviderMap, ProviderResolver},
	service::{
		AccessStrategyAuthorizer, AuthenticationRequest, ParameterSelectionStrategy, Service,
		ServiceContextResolver, ServiceRegistry,
	},
};

/// Outcome of a multifactor resolution for one request.
#[derive(Clone, Debug)]
pub struct MfaDecision {
	/// Target service, when the request named an allowed one.
	pub service: Option<Service>,
	/// Methods the decision was derived from.
	pub requested: RequestedMethods,
	/// Provider that should be activated next, if any matched.
	pub provider: Option<Arc<dyn MfaProvider>>,
}
impl MfaDecision {
	/// Transition signal for the flow engine: the selected provider's identifier.
	pub fn event_id(&self) -> Option<&ProviderId> {
		self.provider.as_ref().map(|provider| provider.id())
	}

	/// Returns true when a provider must be activated.
	pub fn requires_mfa(&self) -> bool {
		self.provider.is_some()
	}
}

/// Resolves the service context and the multifactor provider for authentication requests.
#[derive(Clone)]
pub struct MfaEventResolver {
	/// Request parameter names.
	pub config: ResolverConfig,
	/// Target-service resolver.
	pub context: ServiceContextResolver,
	/// Configured providers; iteration order is unspecified.
	pub providers: Arc<ProviderMap>,
	/// Strategy mapping requested methods onto providers.
	pub resolver: Arc<dyn ProviderResolver>,
}
impl MfaEventResolver {
	/// Creates an event resolver from explicit collaborators.
	pub fn new(
		config: ResolverConfig,
		context: ServiceContextResolver,
		providers: impl Into<Arc<ProviderMap>>,
	) -> Self {
		Self {
			config,
			context,
			providers: providers.into(),
			resolver: Arc::new(FirstMatchResolver),
		}
	}

	/// Wires the default selection strategy and authorizer around `registry` using the
	/// parameter names from `config`.
	pub fn from_config(
		config: ResolverConfig,
		registry: Arc<dyn ServiceRegistry>,
		providers: impl Into<Arc<ProviderMap>>,
	) -> Self {
		let context = ServiceContextResolver::new(
			Arc::new(ParameterSelectionStrategy::new(config.service_parameter.clone())),
			registry,
			Arc::new(AccessStrategyAuthorizer::default()),
		);

		Self::new(config, context, providers)
	}

	/// Replaces the provider resolution strategy.
	pub fn with_resolver(mut self, resolver: Arc<dyn ProviderResolver>) -> Self {
		self.resolver = resolver;

		self
	}

	/// Resolves the service context, derives requested methods, and selects a provider.
	///
	/// A service's multifactor policy is never bypassed by the request; see
	/// [`requested_methods`](Self::requested_methods). Access denials abort the resolution; no
	/// decision is produced for a denied service.
	pub async fn resolve(&self, request: &AuthenticationRequest) -> Result<MfaDecision> {
		ResolutionSpan::start(ResolutionKind::Event, "resolve")
			.instrument(
				async move {
					let service = self.context.resolve_service_context(request).await?;
					let requested = self.requested_methods(request, service.as_ref());
					let provider =
						self.resolver.resolve_provider(&self.providers, &requested).cloned();

					Ok::<_, Error>(MfaDecision { service, requested, provider })
				},
				decision_outcome,
			)
			.await
	}

	/// Derives the methods demanded for `request`.
	///
	/// When `service` carries a required policy, the policy's methods apply. An explicit method
	/// parameter may only narrow the choice to one of those methods; any other token is ignored
	/// so a request can neither skip nor weaken the requirement. Without a policy, the explicit
	/// parameter is used as is.
	pub fn requested_methods(
		&self,
		request: &AuthenticationRequest,
		service: Option<&Service>,
	) -> RequestedMethods {
		let explicit = RequestedMethods::single(request.parameter(&self.config.method_parameter));
		let policy =
			service.map(|service| &service.mfa_policy).filter(|policy| policy.is_required());

		match policy {
			None => explicit,
			Some(policy) if policy.permits(&explicit) => explicit,
			Some(policy) => {
				if !explicit.is_empty() {
					trace_event!(
						warn,
						requested = %explicit,
						policy = %policy.methods,
						"Requested method is outside the service policy; enforcing the policy."
					);
				}

				policy.methods.clone()
			},
		}
	}
}
impl Debug for MfaEventResolver {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("MfaEventResolver")
			.field("config", &self.config)
			.field("context", &self.context)
			.field("providers", &self.providers.len())
			.finish_non_exhaustive()
	}
}

fn decision_outcome(result: &Result<MfaDecision>) -> ResolutionOutcome {
	match result {
		Ok(decision) if decision.requires_mfa() => ResolutionOutcome::Success,
		Ok(_) => ResolutionOutcome::Empty,
		Err(Error::AccessDenied(_)) => ResolutionOutcome::Denied,
		Err(_) => ResolutionOutcome::Failure,
	}
}
