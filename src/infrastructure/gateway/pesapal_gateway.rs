use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::domain::auth::{TokenRequest, TokenResponse};
use crate::domain::errors::ProcessingError;
use crate::domain::gateway::PaymentGateway;
use crate::domain::order::{SubmitOrderRequest, SubmitOrderResponse};

pub const REQUEST_TOKEN_PATH: &str = "/api/Auth/RequestToken";
pub const SUBMIT_ORDER_PATH: &str = "/api/Transactions/SubmitOrderRequest";

/// Pesapal API 3.0 over HTTP. Response bodies are decoded whatever the status
/// code: the gateway reports most failures as JSON `error` objects.
#[derive(Clone)]
pub struct PesapalGateway {
	http_client: Client,
}

impl PesapalGateway {
	pub fn new(http_client: Client) -> Self {
		Self { http_client }
	}

	async fn post_json<B, R>(
		&self,
		url: String,
		body: &B,
		token: Option<&str>,
	) -> Result<R, ProcessingError>
	where
		B: Serialize + ?Sized + Sync,
		R: DeserializeOwned,
	{
		let mut request = self
			.http_client
			.post(&url)
			.header(ACCEPT, "application/json")
			.header(CONTENT_TYPE, "application/json")
			.json(body);

		if let Some(token) = token {
			request = request.bearer_auth(token);
		}

		let resp = request.send().await.map_err(from_reqwest)?;
		debug!("Gateway answered {} for {url}", resp.status());

		resp.json::<R>().await.map_err(from_reqwest)
	}
}

fn endpoint(base_url: &str, path: &str) -> String {
	format!("{}{path}", base_url.trim_end_matches('/'))
}

fn from_reqwest(err: reqwest::Error) -> ProcessingError {
	if err.is_decode() {
		ProcessingError::UpstreamResponse {
			message: err.to_string(),
		}
	} else {
		ProcessingError::UpstreamUnreachable {
			message: err.to_string(),
		}
	}
}

#[async_trait]
impl PaymentGateway for PesapalGateway {
	async fn request_token(
		&self,
		base_url: &str,
		credentials: &TokenRequest,
	) -> Result<TokenResponse, ProcessingError> {
		self.post_json(endpoint(base_url, REQUEST_TOKEN_PATH), credentials, None)
			.await
	}

	async fn submit_order(
		&self,
		base_url: &str,
		token: &str,
		order: &SubmitOrderRequest,
	) -> Result<SubmitOrderResponse, ProcessingError> {
		self.post_json(endpoint(base_url, SUBMIT_ORDER_PATH), order, Some(token))
			.await
	}
}
