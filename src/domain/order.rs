use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::domain::errors::ProcessingError;

pub const ORDER_CURRENCY: &str = "USD";

/// Keeps a present `null` as `Some(Value::Null)` so that only absent fields
/// are left out of the forwarded body.
pub fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
	D: Deserializer<'de>,
{
	Value::deserialize(deserializer).map(Some)
}

/// Order as posted by the browser. Fields are forwarded to the gateway
/// verbatim, so they are kept as raw JSON values and never checked here.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequest {
	#[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
	pub order_reference: Option<Value>,
	#[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
	pub amount:          Option<Value>,
	#[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
	pub description:     Option<Value>,
	#[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
	pub email:           Option<Value>,
	#[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
	pub phone:           Option<Value>,
	#[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
	pub first_name:      Option<Value>,
	#[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
	pub last_name:       Option<Value>,
	#[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
	pub callback_url:    Option<Value>,
}

impl OrderRequest {
	/// Parses a raw request body. Duplicate keys resolve to the last value.
	/// A top-level `null` has no fields to read and is rejected; any other
	/// non-object document yields an order with every field absent.
	pub fn parse(body: &[u8]) -> Result<Self, ProcessingError> {
		match serde_json::from_slice::<Value>(body)? {
			Value::Null => Err(ProcessingError::MalformedInput {
				message: "Order body is null".to_string(),
			}),
			document @ Value::Object(_) => Ok(serde_json::from_value(document)?),
			_ => Ok(Self::default()),
		}
	}
}

/// Billing block of a `SubmitOrderRequest`. Only the contact fields come from
/// the caller; the locale fields are always sent empty.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct BillingAddress {
	#[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
	pub email_address: Option<Value>,
	#[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
	pub phone_number:  Option<Value>,
	#[serde(default)]
	pub country_code:  String,
	#[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
	pub first_name:    Option<Value>,
	#[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
	pub last_name:     Option<Value>,
	#[serde(default)]
	pub line_1:        String,
	#[serde(default)]
	pub line_2:        String,
	#[serde(default)]
	pub city:          String,
	#[serde(default)]
	pub state:         String,
	#[serde(default)]
	pub postal_code:   String,
	#[serde(default)]
	pub zip_code:      String,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct SubmitOrderRequest {
	#[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
	pub id:              Option<Value>,
	pub currency:        String,
	#[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
	pub amount:          Option<Value>,
	#[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
	pub description:     Option<Value>,
	#[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
	pub callback_url:    Option<Value>,
	pub notification_id: String,
	pub billing_address: BillingAddress,
}

impl SubmitOrderRequest {
	pub fn from_request(request: OrderRequest, notification_id: String) -> Self {
		Self {
			id:              request.order_reference,
			currency:        ORDER_CURRENCY.to_string(),
			amount:          request.amount,
			description:     request.description,
			callback_url:    request.callback_url,
			notification_id,
			billing_address: BillingAddress {
				email_address: request.email,
				phone_number:  request.phone,
				first_name:    request.first_name,
				last_name:     request.last_name,
				..Default::default()
			},
		}
	}
}

/// Body returned by `/api/Transactions/SubmitOrderRequest`. Only
/// `redirect_url`, `order_tracking_id` and `error.message` are read, and the
/// gateway is loose about their types, so all fields stay raw JSON.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct SubmitOrderResponse {
	#[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
	pub order_tracking_id:  Option<Value>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub merchant_reference: Option<Value>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub redirect_url:       Option<Value>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub error:              Option<Value>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub status:             Option<Value>,
}

impl SubmitOrderResponse {
	pub fn redirect_url(&self) -> Option<&str> {
		self.redirect_url
			.as_ref()
			.and_then(Value::as_str)
			.filter(|url| !url.is_empty())
	}

	pub fn error_message(&self) -> Option<&str> {
		self.error
			.as_ref()
			.and_then(|error| error.get("message"))
			.and_then(Value::as_str)
			.filter(|message| !message.is_empty())
	}
}
