use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct TokenRequest {
	pub consumer_key:    String,
	pub consumer_secret: String,
}

/// Body returned by `/api/Auth/RequestToken`. Only `token` is read; the
/// gateway answers rejected credentials with an `error` object and a status
/// whose type varies, so everything is kept as raw JSON.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct TokenResponse {
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub token:       Option<Value>,
	#[serde(rename = "expiryDate", default, skip_serializing_if = "Option::is_none")]
	pub expiry_date: Option<Value>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub error:       Option<Value>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub status:      Option<Value>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub message:     Option<Value>,
}

impl TokenResponse {
	pub fn with_token(token: &str) -> Self {
		Self {
			token: Some(Value::String(token.to_string())),
			..Default::default()
		}
	}

	/// The bearer token, if the gateway issued a non-empty string.
	pub fn bearer_token(&self) -> Option<&str> {
		self.token
			.as_ref()
			.and_then(Value::as_str)
			.filter(|token| !token.is_empty())
	}
}
