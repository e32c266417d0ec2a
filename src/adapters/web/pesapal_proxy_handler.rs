use actix_web::http::Method;
use actix_web::{HttpRequest, HttpResponse, ResponseError, web};
use futures::StreamExt;
use log::error;

use crate::adapters::web::cors::with_cors;
use crate::adapters::web::errors::ApiError;
use crate::adapters::web::schema::OrderResponse;
use crate::config::MAX_BODY_BYTES;
use crate::domain::errors::ProcessingError;
use crate::domain::gateway::PaymentGateway;
use crate::domain::order::OrderRequest;
use crate::infrastructure::config::settings::SettingsSource;
use crate::use_cases::create_order::CreateOrderUseCase;
use crate::use_cases::dto::OrderCreated;

/// Single entry point for the proxy route. Answers CORS preflights, rejects
/// anything but `POST`, and turns every failure past that gate into a `500`.
/// The body is read from the raw payload, capped at `MAX_BODY_BYTES`, and
/// only once the method gate has passed.
pub async fn pesapal_proxy<G, S>(
	req: HttpRequest,
	payload: web::Payload,
	create_order_use_case: web::Data<CreateOrderUseCase<G>>,
	settings_source: web::Data<S>,
) -> HttpResponse
where
	G: PaymentGateway,
	S: SettingsSource,
{
	if *req.method() == Method::OPTIONS {
		return with_cors(HttpResponse::Ok()).finish();
	}

	if *req.method() != Method::POST {
		return ApiError::MethodNotAllowed.error_response();
	}

	match create_order(
		payload,
		settings_source.get_ref(),
		create_order_use_case.get_ref(),
	)
	.await
	{
		Ok(created) => {
			with_cors(HttpResponse::Ok()).json(OrderResponse::from(created))
		}
		Err(e) => {
			error!("Payment proxy error ({}): {e}", e.kind());
			ApiError::from(e).error_response()
		}
	}
}

async fn read_body(
	mut payload: web::Payload,
	limit: usize,
) -> Result<web::BytesMut, ProcessingError> {
	let mut body = web::BytesMut::new();
	while let Some(chunk) = payload.next().await {
		let chunk = chunk.map_err(|e| ProcessingError::MalformedInput {
			message: e.to_string(),
		})?;
		if body.len() + chunk.len() > limit {
			return Err(ProcessingError::PayloadTooLarge { limit });
		}
		body.extend_from_slice(&chunk);
	}
	Ok(body)
}

async fn create_order<G, S>(
	payload: web::Payload,
	settings_source: &S,
	create_order_use_case: &CreateOrderUseCase<G>,
) -> Result<OrderCreated, ProcessingError>
where
	G: PaymentGateway,
	S: SettingsSource,
{
	let body = read_body(payload, MAX_BODY_BYTES).await?;
	let request = OrderRequest::parse(&body)?;
	let settings = settings_source.load()?;

	create_order_use_case.execute(&settings, request).await
}
