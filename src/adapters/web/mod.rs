pub mod cors;
pub mod errors;
pub mod pesapal_proxy_handler;
pub mod schema;

use actix_web::web;

use crate::config::PROXY_PATH;
use crate::domain::gateway::PaymentGateway;
use crate::infrastructure::config::settings::SettingsSource;

/// Mounts the proxy route. Every method reaches the handler so it can answer
/// preflights and `405`s with the CORS headers attached.
pub fn configure<G, S>(cfg: &mut web::ServiceConfig)
where
	G: PaymentGateway,
	S: SettingsSource,
{
	cfg.service(
		web::resource(PROXY_PATH)
			.route(web::route().to(pesapal_proxy_handler::pesapal_proxy::<G, S>)),
	);
}
