//! Thread-safe in-memory [`ServiceRegistry`] implementation for embedding, local development, and
//! tests.

// self
use crate::{
	_prelude::*,
	auth::ServiceDescriptor,
	error::ConfigError,
	service::{RegistryFuture, Service, ServiceRegistry},
};

type ServiceMap = Arc<RwLock<HashMap<ServiceDescriptor, Service>>>;

/// Registry keeping service definitions in-process, keyed by their exact descriptor.
#[derive(Clone, Debug, Default)]
pub struct MemoryServiceRegistry(ServiceMap);
impl MemoryServiceRegistry {
	/// Loads a registry from a JSON array of service definitions.
	///
	/// Duplicate descriptors are rejected instead of silently shadowing each other.
	pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
		let mut de = serde_json::Deserializer::from_str(raw);
		let services: Vec<Service> = serde_path_to_error::deserialize(&mut de)?;

		Self::try_from_services(services)
	}

	/// Builds a registry from service definitions, rejecting duplicate descriptors.
	pub fn try_from_services<I>(services: I) -> Result<Self, ConfigError>
	where
		I: IntoIterator<Item = Service>,
	{
		let mut map = HashMap::new();

		for service in services {
			if map.contains_key(&service.service) {
				return Err(ConfigError::DuplicateService { descriptor: service.service.into() });
			}

			map.insert(service.service.clone(), service);
		}

		Ok(Self(Arc::new(RwLock::new(map))))
	}

	/// Registers or replaces a service definition.
	pub fn register(&self, service: Service) -> Option<Service> {
		self.0.write().insert(service.service.clone(), service)
	}

	/// Removes the service registered for `descriptor`.
	pub fn unregister(&self, descriptor: &str) -> Option<Service> {
		self.0.write().remove(descriptor)
	}

	/// Number of registered services.
	pub fn len(&self) -> usize {
		self.0.read().len()
	}

	/// Returns true when no service is registered.
	pub fn is_empty(&self) -> bool {
		self.0.read().is_empty()
	}

	fn find_now(map: ServiceMap, descriptor: ServiceDescriptor) -> Option<Service> {
		map.read().get(&descriptor).cloned()
	}
}
impl ServiceRegistry for MemoryServiceRegistry {
	fn find_service_by<'a>(
		&'a self,
		descriptor: &'a ServiceDescriptor,
	) -> RegistryFuture<'a, Option<Service>> {
		let map = self.0.clone();
		let descriptor = descriptor.to_owned();

		Box::pin(async move { Ok(Self::find_now(map, descriptor)) })
	}
}
