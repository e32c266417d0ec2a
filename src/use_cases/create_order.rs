use log::{debug, info, warn};

use crate::domain::errors::ProcessingError;
use crate::domain::gateway::PaymentGateway;
use crate::domain::order::{OrderRequest, SubmitOrderRequest};
use crate::infrastructure::config::settings::PesapalSettings;
use crate::use_cases::dto::OrderCreated;

/// Exchanges the consumer credentials for a bearer token, then submits the
/// order with it. The two calls are never issued concurrently and nothing is
/// retried.
#[derive(Clone)]
pub struct CreateOrderUseCase<G: PaymentGateway> {
	gateway: G,
}

impl<G: PaymentGateway> CreateOrderUseCase<G> {
	pub fn new(gateway: G) -> Self {
		Self { gateway }
	}

	pub async fn execute(
		&self,
		settings: &PesapalSettings,
		request: OrderRequest,
	) -> Result<OrderCreated, ProcessingError> {
		let token = self.authenticate(settings).await?;

		let order = SubmitOrderRequest::from_request(request, settings.ipn_id.clone());
		let response = self
			.gateway
			.submit_order(&settings.base_url, &token, &order)
			.await?;

		let Some(redirect_url) = response.redirect_url() else {
			warn!(
				"Gateway did not accept order {:?}: {:?}",
				order.id,
				response.error_message()
			);
			return Err(ProcessingError::SubmissionRejected {
				message: response.error_message().map(str::to_string),
			});
		};

		info!(
			"Order {:?} submitted, tracking id {:?}",
			order.id, response.order_tracking_id
		);

		Ok(OrderCreated {
			redirect_url:      redirect_url.to_string(),
			order_tracking_id: response.order_tracking_id.clone(),
		})
	}

	async fn authenticate(
		&self,
		settings: &PesapalSettings,
	) -> Result<String, ProcessingError> {
		let response = self
			.gateway
			.request_token(&settings.base_url, &settings.credentials())
			.await?;

		match response.bearer_token() {
			Some(token) => {
				debug!("Obtained gateway token, expires {:?}", response.expiry_date);
				Ok(token.to_string())
			}
			None => {
				warn!("Gateway issued no token: {:?}", response.error);
				Err(ProcessingError::AuthenticationFailed)
			}
		}
	}
}
