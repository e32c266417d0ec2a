use async_trait::async_trait;

use crate::domain::auth::{TokenRequest, TokenResponse};
use crate::domain::errors::ProcessingError;
use crate::domain::order::{SubmitOrderRequest, SubmitOrderResponse};

/// Outbound port to the payment gateway. Implementations only move bodies
/// over the wire; deciding whether a response is usable is left to the
/// caller.
#[async_trait]
pub trait PaymentGateway: Send + Sync + 'static {
	async fn request_token(
		&self,
		base_url: &str,
		credentials: &TokenRequest,
	) -> Result<TokenResponse, ProcessingError>;

	async fn submit_order(
		&self,
		base_url: &str,
		token: &str,
		order: &SubmitOrderRequest,
	) -> Result<SubmitOrderResponse, ProcessingError>;
}
