use std::sync::Arc;
use std::time::Duration;

use actix_web::{App, HttpServer, web};
use log::info;
use reqwest::Client;

use crate::config::Config;
use crate::infrastructure::config::settings::EnvironmentSource;
use crate::infrastructure::gateway::pesapal_gateway::PesapalGateway;
use crate::use_cases::create_order::CreateOrderUseCase;

pub mod adapters;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod use_cases;

pub async fn run(config: Arc<Config>) -> std::io::Result<()> {
	let http_client = Client::builder()
		.build()
		.map_err(std::io::Error::other)?;

	let create_order_use_case =
		CreateOrderUseCase::new(PesapalGateway::new(http_client));
	let settings_source = web::Data::new(EnvironmentSource::default());

	info!(
		"Starting Actix-Web server on {}:{}...",
		config.server_host, config.server_port
	);
	HttpServer::new(move || {
		App::new()
			.app_data(web::Data::new(create_order_use_case.clone()))
			.app_data(settings_source.clone())
			.configure(
				adapters::web::configure::<PesapalGateway, EnvironmentSource>,
			)
	})
	.keep_alive(Duration::from_secs(config.server_keepalive))
	.bind((config.server_host.as_str(), config.server_port))?
	.run()
	.await
}
