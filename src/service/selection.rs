//! Strategies that extract the target-service descriptor from an authentication request.

// self
use crate::{_prelude::*, auth::ServiceDescriptor};

/// Default request parameter carrying the target service.
pub const SERVICE_PARAMETER: &str = "service";

/// Transport-agnostic view of the authentication request being evaluated.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthenticationRequest {
	/// Request parameters (query string or form fields).
	#[serde(default)]
	pub parameters: BTreeMap<String, String>,
}
impl AuthenticationRequest {
	/// Creates a request without parameters.
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds or replaces a request parameter.
	pub fn with_parameter(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.parameters.insert(name.into(), value.into());

		self
	}

	/// Returns a parameter value when present.
	pub fn parameter(&self, name: &str) -> Option<&str> {
		self.parameters.get(name).map(String::as_str)
	}
}

/// Strategy that locates the target service referenced by a request.
///
/// Extraction is a pure lookup; returning `None` means the request has no target service.
pub trait ServiceSelectionStrategy: Send + Sync {
	/// Returns the descriptor of the target service, if the request names one.
	fn extract_service_descriptor(
		&self,
		request: &AuthenticationRequest,
	) -> Option<ServiceDescriptor>;
}

/// Reads the target service from a single request parameter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParameterSelectionStrategy {
	/// Parameter name holding the service descriptor.
	pub parameter: String,
}
impl ParameterSelectionStrategy {
	/// Creates a strategy reading the named parameter.
	pub fn new(parameter: impl Into<String>) -> Self {
		Self { parameter: parameter.into() }
	}
}
impl Default for ParameterSelectionStrategy {
	fn default() -> Self {
		Self::new(SERVICE_PARAMETER)
	}
}
impl ServiceSelectionStrategy for ParameterSelectionStrategy {
	fn extract_service_descriptor(
		&self,
		request: &AuthenticationRequest,
	) -> Option<ServiceDescriptor> {
		request.parameter(&self.parameter).and_then(|value| ServiceDescriptor::new(value).ok())
	}
}

/// Ordered chain of selection strategies; the first one yielding a descriptor wins.
#[derive(Clone, Default)]
pub struct SelectionPlan {
	strategies: Vec<Arc<dyn ServiceSelectionStrategy>>,
}
impl SelectionPlan {
	/// Creates an empty plan.
	pub fn new() -> Self {
		Self::default()
	}

	/// Appends a strategy consulted after the existing ones.
	pub fn with_strategy(mut self, strategy: Arc<dyn ServiceSelectionStrategy>) -> Self {
		self.strategies.push(strategy);

		self
	}

	/// Number of registered strategies.
	pub fn len(&self) -> usize {
		self.strategies.len()
	}

	/// Returns true if no strategy is registered.
	pub fn is_empty(&self) -> bool {
		self.strategies.is_empty()
	}
}
impl ServiceSelectionStrategy for SelectionPlan {
	fn extract_service_descriptor(
		&self,
		request: &AuthenticationRequest,
	) -> Option<ServiceDescriptor> {
		self.strategies.iter().find_map(|strategy| strategy.extract_service_descriptor(request))
	}
}
impl Debug for SelectionPlan {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("SelectionPlan").field("strategies", &self.strategies.len()).finish()
	}
}
