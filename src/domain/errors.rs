use derive_more::derive::{Display, Error};

/// Everything that can go wrong between the method gate and the response.
///
/// Each kind renders to the message the caller sees; the web adapter flattens
/// all of them into the same failure shape.
#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
pub enum ProcessingError {
	#[display("{message}")]
	MalformedInput { message: String },
	#[display("Request body exceeds {limit} bytes")]
	PayloadTooLarge { limit: usize },
	#[display("{message}")]
	Configuration { message: String },
	#[display("Failed to get authentication token")]
	AuthenticationFailed,
	#[display("{}", message.as_deref().unwrap_or("Failed to create order"))]
	SubmissionRejected { message: Option<String> },
	#[display("{message}")]
	UpstreamUnreachable { message: String },
	#[display("{message}")]
	UpstreamResponse { message: String },
}

impl ProcessingError {
	pub fn kind(&self) -> &'static str {
		match self {
			ProcessingError::MalformedInput { .. } => "malformed-input",
			ProcessingError::PayloadTooLarge { .. } => "payload-too-large",
			ProcessingError::Configuration { .. } => "configuration",
			ProcessingError::AuthenticationFailed => "auth-failure",
			ProcessingError::SubmissionRejected { .. } => "submission-failure",
			ProcessingError::UpstreamUnreachable { .. } => "upstream-unreachable",
			ProcessingError::UpstreamResponse { .. } => "upstream-response",
		}
	}
}

impl From<serde_json::Error> for ProcessingError {
	fn from(err: serde_json::Error) -> Self {
		ProcessingError::MalformedInput {
			message: err.to_string(),
		}
	}
}

impl From<config::ConfigError> for ProcessingError {
	fn from(err: config::ConfigError) -> Self {
		ProcessingError::Configuration {
			message: err.to_string(),
		}
	}
}
