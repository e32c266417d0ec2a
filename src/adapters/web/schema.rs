use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::order::present;
use crate::use_cases::dto::OrderCreated;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderResponse {
	pub success:           bool,
	pub redirect_url:      String,
	#[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
	pub order_tracking_id: Option<Value>,
}

impl From<OrderCreated> for OrderResponse {
	fn from(created: OrderCreated) -> Self {
		Self {
			success:           true,
			redirect_url:      created.redirect_url,
			order_tracking_id: created.order_tracking_id,
		}
	}
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct FailureResponse {
	pub success: bool,
	pub error:   String,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct MethodNotAllowedResponse {
	pub error: String,
}
