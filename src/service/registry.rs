//! Service registry contract and the built-in in-memory registry.

pub mod memory;

pub use memory::MemoryServiceRegistry;

// self
use crate::{
	_prelude::*,
	auth::ServiceDescriptor,
	service::Service,
};

/// Boxed future returned by [`ServiceRegistry`] lookups.
pub type RegistryFuture<'a, T> =
	Pin<Box<dyn Future<Output = Result<T, RegistryError>> + 'a + Send>>;

/// Read path into the registered services.
///
/// Latency and timeout behavior belong to the implementation; resolvers perform exactly one
/// lookup per request and propagate failures unchanged.
pub trait ServiceRegistry
where
	Self: Send + Sync,
{
	/// Finds the service registered for `descriptor`, if any.
	fn find_service_by<'a>(
		&'a self,
		descriptor: &'a ServiceDescriptor,
	) -> RegistryFuture<'a, Option<Service>>;
}

/// Error type produced by [`ServiceRegistry`] implementations.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ThisError)]
pub enum RegistryError {
	/// Registry backend could not be reached or failed internally.
	#[error("Backend failure: {message}.")]
	Backend {
		/// Human-readable error payload.
		message: String,
	},
	/// A stored service definition could not be decoded.
	#[error("Corrupt service definition: {message}.")]
	Corrupt {
		/// Human-readable error payload.
		message: String,
	},
}
