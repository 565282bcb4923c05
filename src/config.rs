//! Resolver configuration loaded from JSON or assembled programmatically.

// self
use crate::{_prelude::*, error::ConfigError, service::SERVICE_PARAMETER};

/// Default request parameter carrying an explicitly requested multifactor method.
pub const METHOD_PARAMETER: &str = "authn_method";

/// Request-parameter names consulted by [`MfaEventResolver`](crate::event::MfaEventResolver).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
	/// Parameter naming the requested method; it can only narrow a service's policy.
	pub method_parameter: String,
	/// Parameter naming the target service.
	pub service_parameter: String,
}
impl ResolverConfig {
	/// Parses and validates a JSON document.
	pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
		let mut de = serde_json::Deserializer::from_str(raw);
		let config: Self = serde_path_to_error::deserialize(&mut de)?;

		config.validate()?;

		Ok(config)
	}

	/// Overrides the method parameter name.
	pub fn with_method_parameter(mut self, name: impl Into<String>) -> Self {
		self.method_parameter = name.into();

		self
	}

	/// Overrides the service parameter name.
	pub fn with_service_parameter(mut self, name: impl Into<String>) -> Self {
		self.service_parameter = name.into();

		self
	}

	/// Rejects blank parameter names.
	pub fn validate(&self) -> Result<(), ConfigError> {
		if self.method_parameter.trim().is_empty() {
			return Err(ConfigError::BlankParameter { field: "method_parameter" });
		}
		if self.service_parameter.trim().is_empty() {
			return Err(ConfigError::BlankParameter { field: "service_parameter" });
		}

		Ok(())
	}
}
impl Default for ResolverConfig {
	fn default() -> Self {
		Self {
			method_parameter: METHOD_PARAMETER.into(),
			service_parameter: SERVICE_PARAMETER.into(),
		}
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn missing_fields_fall_back_to_defaults() {
		let config = ResolverConfig::from_json(r#"{ "method_parameter": "mfa" }"#)
			.expect("Partial configuration should load.");

		assert_eq!(config.method_parameter, "mfa");
		assert_eq!(config.service_parameter, SERVICE_PARAMETER);
		assert_eq!(
			ResolverConfig::from_json("{}").expect("Empty object loads."),
			ResolverConfig::default()
		);
	}

	#[test]
	fn blank_and_mistyped_fields_are_rejected() {
		assert!(matches!(
			ResolverConfig::from_json(r#"{ "service_parameter": " " }"#),
			Err(ConfigError::BlankParameter { field: "service_parameter" })
		));
		assert!(matches!(
			ResolverConfig::from_json(r#"{ "method_parameter": 7 }"#),
			Err(ConfigError::Parse { path, .. }) if path == "method_parameter"
		));
	}
}
