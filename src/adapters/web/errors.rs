use actix_web::http::StatusCode;
use actix_web::{HttpResponse, error};
use derive_more::derive::{Display, Error};

use crate::adapters::web::cors::with_cors;
use crate::adapters::web::schema::{FailureResponse, MethodNotAllowedResponse};
use crate::domain::errors::ProcessingError;

pub const DEFAULT_FAILURE_MESSAGE: &str = "Payment processing failed";

#[derive(Debug, Display, Error)]
pub enum ApiError {
	#[display("Method not allowed")]
	MethodNotAllowed,
	#[display("{source}")]
	PaymentFailed { source: ProcessingError },
}

impl ApiError {
	/// Text put in the `error` field of the response body.
	pub fn message(&self) -> String {
		let message = self.to_string();
		if message.is_empty() {
			DEFAULT_FAILURE_MESSAGE.to_string()
		} else {
			message
		}
	}
}

impl error::ResponseError for ApiError {
	fn error_response(&self) -> HttpResponse {
		let mut builder = with_cors(HttpResponse::build(self.status_code()));
		match self {
			ApiError::MethodNotAllowed => {
				builder.json(MethodNotAllowedResponse {
					error: self.message(),
				})
			}
			ApiError::PaymentFailed { .. } => builder.json(FailureResponse {
				success: false,
				error:   self.message(),
			}),
		}
	}

	fn status_code(&self) -> StatusCode {
		match self {
			ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
			ApiError::PaymentFailed { .. } => StatusCode::INTERNAL_SERVER_ERROR,
		}
	}
}

impl From<ProcessingError> for ApiError {
	fn from(source: ProcessingError) -> Self {
		ApiError::PaymentFailed { source }
	}
}
