use serde::Deserialize;

pub const PROXY_PATH: &str = "/pesapal-proxy";
/// Largest request body the proxy reads, matching the 6 MB function payload
/// limit of the hosting platform.
pub const MAX_BODY_BYTES: usize = 6 * 1024 * 1024;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
	pub server_host:      String,
	pub server_port:      u16,
	pub server_keepalive: u64,
}

impl Config {
	pub fn load() -> Result<Self, config::ConfigError> {
		let config_builder = config::Config::builder()
			.set_default("server_host", "0.0.0.0")?
			.set_default("server_port", 8888)?
			.set_default("server_keepalive", 75)?
			.add_source(config::Environment::with_prefix("APP").try_parsing(true))
			.build()?;

		config_builder.try_deserialize()
	}
}
