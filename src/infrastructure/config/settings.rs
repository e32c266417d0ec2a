use serde::Deserialize;

use crate::domain::auth::TokenRequest;

pub const PESAPAL_ENV_PREFIX: &str = "PESAPAL";

/// Gateway credentials and endpoints. Values are not checked: a missing one
/// is an empty string and the gateway itself rejects the request.
#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct PesapalSettings {
	#[serde(default)]
	pub consumer_key:    String,
	#[serde(default)]
	pub consumer_secret: String,
	#[serde(default)]
	pub base_url:        String,
	#[serde(default)]
	pub ipn_id:          String,
}

impl PesapalSettings {
	pub fn credentials(&self) -> TokenRequest {
		TokenRequest {
			consumer_key:    self.consumer_key.clone(),
			consumer_secret: self.consumer_secret.clone(),
		}
	}
}

/// Where `PesapalSettings` come from. Read once per request.
pub trait SettingsSource: Send + Sync + 'static {
	fn load(&self) -> Result<PesapalSettings, config::ConfigError>;
}

/// Reads `<PREFIX>_CONSUMER_KEY`, `<PREFIX>_CONSUMER_SECRET`,
/// `<PREFIX>_BASE_URL` and `<PREFIX>_IPN_ID` from the process environment.
#[derive(Debug, Clone)]
pub struct EnvironmentSource {
	prefix: String,
}

impl EnvironmentSource {
	pub fn new(prefix: &str) -> Self {
		Self {
			prefix: prefix.to_string(),
		}
	}
}

impl Default for EnvironmentSource {
	fn default() -> Self {
		Self::new(PESAPAL_ENV_PREFIX)
	}
}

impl SettingsSource for EnvironmentSource {
	fn load(&self) -> Result<PesapalSettings, config::ConfigError> {
		let config_builder = config::Config::builder()
			.add_source(config::Environment::with_prefix(&self.prefix))
			.build()?;

		config_builder.try_deserialize()
	}
}

impl SettingsSource for PesapalSettings {
	fn load(&self) -> Result<PesapalSettings, config::ConfigError> {
		Ok(self.clone())
	}
}
