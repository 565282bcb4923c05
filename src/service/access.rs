//! Access-strategy authorization for resolved target services.

// self
use crate::{
	_prelude::*,
	auth::ServiceDescriptor,
	error::AccessDeniedError,
	service::Service,
};

/// Authorization gate applied to every resolved service descriptor.
///
/// The gate receives the registry result as-is, including `None`, and decides on its own
/// whether "descriptor present, service absent" is a denial.
pub trait AccessAuthorizer: Send + Sync {
	/// Succeeds when the attempt may proceed; fails with the denial reason otherwise.
	fn ensure_access_allowed(
		&self,
		descriptor: &ServiceDescriptor,
		service: Option<&Service>,
	) -> Result<(), AccessDeniedError>;
}

/// Default gate enforcing each service's [`AccessStrategy`](crate::service::AccessStrategy).
///
/// Unregistered descriptors are denied, as are disabled services and services evaluated outside
/// their access window.
#[derive(Clone, Copy, Debug, Default)]
pub struct AccessStrategyAuthorizer {
	/// Fixed evaluation instant; `None` uses the current UTC time.
	pub now: Option<OffsetDateTime>,
}
impl AccessStrategyAuthorizer {
	/// Creates an authorizer that evaluates windows against a fixed instant.
	pub fn at(instant: OffsetDateTime) -> Self {
		Self { now: Some(instant) }
	}
}
impl AccessAuthorizer for AccessStrategyAuthorizer {
	fn ensure_access_allowed(
		&self,
		descriptor: &ServiceDescriptor,
		service: Option<&Service>,
	) -> Result<(), AccessDeniedError> {
		let Some(service) = service else {
			return Err(AccessDeniedError::ServiceNotFound { descriptor: descriptor.to_string() });
		};
		let strategy = &service.access_strategy;

		if !strategy.enabled {
			return Err(AccessDeniedError::AccessDisabled { service: service.id.to_string() });
		}
		if !strategy.is_within_window(self.now.unwrap_or_else(OffsetDateTime::now_utc)) {
			return Err(AccessDeniedError::OutsideAccessWindow { service: service.id.to_string() });
		}

		Ok(())
	}
}
