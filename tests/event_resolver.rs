// std
use std::sync::Arc;
// crates.io
use color_eyre::Result;
use time::macros;
// self
use mfa_resolver::{
	auth::{ProviderId, ServiceDescriptor},
	config::ResolverConfig,
	error::{AccessDeniedError, Error},
	event::MfaEventResolver,
	provider::{AliasProvider, MfaProvider, ProviderMap, provider_map},
	service::{
		AccessAuthorizer, AccessStrategyAuthorizer, AuthenticationRequest, MemoryServiceRegistry,
		ParameterSelectionStrategy, Service, ServiceContextResolver,
	},
};

const REGISTRY: &str = r#"[
	{
		"id": "portal",
		"name": "Employee Portal",
		"service": "https://portal.example.org",
		"mfa_policy": { "methods": ["duo"] }
	},
	{
		"id": "wiki",
		"service": "https://wiki.example.org"
	},
	{
		"id": "vault",
		"service": "https://vault.example.org",
		"mfa_policy": { "methods": ["duo", "webauthn"] }
	},
	{
		"id": "payroll",
		"service": "https://payroll.example.org",
		"access_strategy": { "enabled": false },
		"mfa_policy": { "methods": ["webauthn"] }
	},
	{
		"id": "legacy",
		"service": "https://legacy.example.org",
		"access_strategy": { "ending": "2026-01-01T00:00:00Z" }
	}
]"#;

fn providers() -> ProviderMap {
	let id = |value: &str| ProviderId::new(value).expect("Provider fixture should be valid.");

	provider_map([
		Arc::new(AliasProvider::new(id("mfa-duo")).with_aliases(["duo", "DUO"]))
			as Arc<dyn MfaProvider>,
		Arc::new(AliasProvider::new(id("mfa-webauthn")).with_alias("webauthn").case_insensitive())
			as Arc<dyn MfaProvider>,
		Arc::new(AliasProvider::new(id("mfa-sms")).with_alias("sms")) as Arc<dyn MfaProvider>,
	])
}

fn build_resolver() -> MfaEventResolver {
	let registry = MemoryServiceRegistry::from_json(REGISTRY)
		.expect("Failed to load registry fixture for event resolver tests.");

	MfaEventResolver::from_config(ResolverConfig::default(), Arc::new(registry), providers())
}

fn request_for(service: &str) -> AuthenticationRequest {
	AuthenticationRequest::new().with_parameter("service", service)
}

#[tokio::test]
async fn service_policy_selects_provider() -> Result<()> {
	let decision = build_resolver().resolve(&request_for("https://portal.example.org")).await?;
	let service = decision.service.as_ref().expect("The portal service should be resolved.");

	assert_eq!(service.name, "Employee Portal");
	assert_eq!(decision.event_id().map(|id| id.as_ref()), Some("mfa-duo"));

	Ok(())
}

#[tokio::test]
async fn request_parameter_narrows_service_policy() -> Result<()> {
	let request =
		request_for("https://vault.example.org").with_parameter("authn_method", "webauthn");
	let decision = build_resolver().resolve(&request).await?;

	assert_eq!(decision.event_id().map(|id| id.as_ref()), Some("mfa-webauthn"));
	assert_eq!(decision.requested.as_slice(), ["webauthn"]);

	Ok(())
}

#[tokio::test]
async fn unmatched_request_parameter_cannot_skip_service_policy() -> Result<()> {
	let request =
		request_for("https://portal.example.org").with_parameter("authn_method", "no-such-method");
	let decision = build_resolver().resolve(&request).await?;

	assert!(decision.requires_mfa());
	assert_eq!(decision.event_id().map(|id| id.as_ref()), Some("mfa-duo"));
	assert_eq!(decision.requested.as_slice(), ["duo"]);

	Ok(())
}

#[tokio::test]
async fn weaker_request_parameter_cannot_replace_service_policy() -> Result<()> {
	let resolver = build_resolver();

	for token in ["sms", "webauthn"] {
		let request =
			request_for("https://portal.example.org").with_parameter("authn_method", token);
		let decision = resolver.resolve(&request).await?;

		assert_eq!(
			decision.event_id().map(|id| id.as_ref()),
			Some("mfa-duo"),
			"{token} must not replace the portal policy"
		);
	}

	Ok(())
}

#[tokio::test]
async fn request_parameter_selects_provider_without_policy() -> Result<()> {
	let request = request_for("https://wiki.example.org").with_parameter("authn_method", "sms");
	let decision = build_resolver().resolve(&request).await?;

	assert_eq!(decision.event_id().map(|id| id.as_ref()), Some("mfa-sms"));

	Ok(())
}

#[tokio::test]
async fn service_without_policy_needs_no_provider() -> Result<()> {
	let decision = build_resolver().resolve(&request_for("https://wiki.example.org")).await?;

	assert!(decision.service.is_some());
	assert!(!decision.requires_mfa());

	Ok(())
}

#[tokio::test]
async fn unknown_method_yields_no_provider() -> Result<()> {
	let request = AuthenticationRequest::new().with_parameter("authn_method", "yubikey");
	let decision = build_resolver().resolve(&request).await?;

	assert!(decision.service.is_none());
	assert!(decision.provider.is_none());

	Ok(())
}

#[tokio::test]
async fn disabled_service_is_denied_even_with_matching_method() {
	let request =
		request_for("https://payroll.example.org").with_parameter("authn_method", "duo");
	let err = build_resolver()
		.resolve(&request)
		.await
		.expect_err("Disabled services must never produce a decision.");

	assert!(matches!(err, Error::AccessDenied(AccessDeniedError::AccessDisabled { .. })));
}

#[tokio::test]
async fn unregistered_service_is_denied() {
	let err = build_resolver()
		.resolve(&request_for("https://unknown.example.org"))
		.await
		.expect_err("Unregistered services must be denied.");

	assert!(matches!(err, Error::AccessDenied(AccessDeniedError::ServiceNotFound { .. })));
}

#[tokio::test]
async fn expired_access_window_is_denied() {
	let registry = MemoryServiceRegistry::from_json(REGISTRY)
		.expect("Failed to load registry fixture for access window test.");
	let authorizer: Arc<dyn AccessAuthorizer> =
		Arc::new(AccessStrategyAuthorizer::at(macros::datetime!(2026-10-19 00:00 UTC)));
	let context = ServiceContextResolver::new(
		Arc::new(ParameterSelectionStrategy::default()),
		Arc::new(registry),
		authorizer,
	);
	let resolver = MfaEventResolver::new(ResolverConfig::default(), context, providers());
	let err = resolver
		.resolve(&request_for("https://legacy.example.org"))
		.await
		.expect_err("Services past their access window must be denied.");

	assert!(matches!(err, Error::AccessDenied(AccessDeniedError::OutsideAccessWindow { .. })));
}

#[tokio::test]
async fn custom_parameter_names_are_honored() -> Result<()> {
	let registry = MemoryServiceRegistry::from_json(REGISTRY)?;
	let config = ResolverConfig::from_json(
		r#"{ "method_parameter": "acr_values", "service_parameter": "redirect_uri" }"#,
	)?;
	let resolver = MfaEventResolver::from_config(config, Arc::new(registry), providers());
	let request = AuthenticationRequest::new()
		.with_parameter("redirect_uri", "https://wiki.example.org")
		.with_parameter("acr_values", "duo");
	let decision = resolver.resolve(&request).await?;

	assert_eq!(
		decision.service.as_ref().map(|service| service.id.to_string()).as_deref(),
		Some("wiki")
	);
	assert_eq!(decision.event_id().map(|id| id.as_ref()), Some("mfa-duo"));

	Ok(())
}

#[tokio::test]
async fn concurrent_resolutions_are_independent() {
	let resolver = Arc::new(build_resolver());
	let cases = [
		("https://portal.example.org", Some("mfa-duo")),
		("https://wiki.example.org", None),
		("https://portal.example.org", Some("mfa-duo")),
		("https://wiki.example.org", None),
	];
	let mut tasks = Vec::new();

	for _ in 0..8 {
		for (service, expected) in cases {
			let resolver = resolver.clone();

			tasks.push(tokio::spawn(async move {
				let decision = resolver
					.resolve(&request_for(service))
					.await
					.expect("Concurrent resolution should succeed.");

				(decision.event_id().map(|id| id.to_string()), expected)
			}));
		}
	}

	for task in tasks {
		let (actual, expected) = task.await.expect("Resolution task should not panic.");

		assert_eq!(actual.as_deref(), expected);
	}
}

#[tokio::test]
async fn service_context_denies_disabled_service() {
	let denied = build_resolver()
		.context
		.resolve_service_context(&request_for("https://payroll.example.org"))
		.await;

	assert!(denied.is_err_and(|err| err.is_access_denied()));
}

#[tokio::test]
async fn registry_returns_disabled_service_unfiltered() -> Result<()> {
	let resolver = build_resolver();
	let descriptor = ServiceDescriptor::new("https://payroll.example.org")?;
	let service: Option<Service> = resolver.context.registry.find_service_by(&descriptor).await?;

	assert!(service.is_some_and(|service| !service.access_strategy.enabled));

	Ok(())
}
