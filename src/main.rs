use std::sync::Arc;

use pesapal_proxy::run;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
	env_logger::init();

	let config = Arc::new(
		pesapal_proxy::config::Config::load().expect("Failed to load configuration"),
	);
	run(config).await
}
