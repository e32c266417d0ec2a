use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use pesapal_proxy::domain::auth::{TokenRequest, TokenResponse};
use pesapal_proxy::domain::errors::ProcessingError;
use pesapal_proxy::domain::gateway::PaymentGateway;
use pesapal_proxy::domain::order::{SubmitOrderRequest, SubmitOrderResponse};
use serde_json::{Value, json};

#[derive(Debug, Clone, PartialEq)]
pub enum GatewayCall {
	RequestToken {
		base_url:    String,
		credentials: TokenRequest,
	},
	SubmitOrder {
		base_url: String,
		token:    String,
		order:    SubmitOrderRequest,
	},
}

/// In-memory gateway that replays canned responses and records every call.
#[derive(Clone, Default)]
pub struct FakeGateway {
	token_response: TokenResponse,
	order_response: SubmitOrderResponse,
	unreachable:    bool,
	calls:          Arc<Mutex<Vec<GatewayCall>>>,
}

impl FakeGateway {
	pub fn accepting(token: &str, redirect_url: &str, tracking_id: &str) -> Self {
		Self {
			token_response: TokenResponse::with_token(token),
			order_response: SubmitOrderResponse {
				order_tracking_id:  Some(json!(tracking_id)),
				merchant_reference: Some(json!("ORD-1001")),
				redirect_url:       Some(json!(redirect_url)),
				error:              Some(Value::Null),
				status:             Some(json!("200")),
			},
			..Default::default()
		}
	}

	pub fn without_token() -> Self {
		Self {
			token_response: TokenResponse {
				status: Some(json!("500")),
				error: Some(json!({
					"error_type": "api_error",
					"code": "invalid_consumer_key_or_secret_provided",
					"message": ""
				})),
				..Default::default()
			},
			..Default::default()
		}
	}

	pub fn rejecting_order(message: Option<&str>) -> Self {
		Self {
			token_response: TokenResponse::with_token("token-abc"),
			order_response: SubmitOrderResponse {
				error: message.map(|message| {
					json!({
						"error_type": "api_error",
						"code": "payment_error",
						"message": message
					})
				}),
				status: Some(json!("500")),
				..Default::default()
			},
			..Default::default()
		}
	}

	pub fn unreachable() -> Self {
		Self {
			unreachable: true,
			..Default::default()
		}
	}

	pub fn calls(&self) -> Vec<GatewayCall> {
		self.calls.lock().unwrap().clone()
	}

	pub fn token_requests(&self) -> usize {
		self.calls()
			.iter()
			.filter(|call| matches!(call, GatewayCall::RequestToken { .. }))
			.count()
	}

	pub fn submitted_orders(&self) -> Vec<SubmitOrderRequest> {
		self.calls()
			.into_iter()
			.filter_map(|call| match call {
				GatewayCall::SubmitOrder { order, .. } => Some(order),
				_ => None,
			})
			.collect()
	}
}

#[async_trait]
impl PaymentGateway for FakeGateway {
	async fn request_token(
		&self,
		base_url: &str,
		credentials: &TokenRequest,
	) -> Result<TokenResponse, ProcessingError> {
		self.calls.lock().unwrap().push(GatewayCall::RequestToken {
			base_url:    base_url.to_string(),
			credentials: credentials.clone(),
		});

		if self.unreachable {
			return Err(ProcessingError::UpstreamUnreachable {
				message: "error sending request for url".to_string(),
			});
		}
		Ok(self.token_response.clone())
	}

	async fn submit_order(
		&self,
		base_url: &str,
		token: &str,
		order: &SubmitOrderRequest,
	) -> Result<SubmitOrderResponse, ProcessingError> {
		self.calls.lock().unwrap().push(GatewayCall::SubmitOrder {
			base_url: base_url.to_string(),
			token:    token.to_string(),
			order:    order.clone(),
		});

		Ok(self.order_response.clone())
	}
}
