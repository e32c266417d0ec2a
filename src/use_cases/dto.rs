use serde::{Deserialize, Serialize};
use serde_json::Value;

/// `order_tracking_id` is echoed as the gateway sent it: `None` when the
/// field was absent, `Some(Value::Null)` when it was an explicit `null`.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct OrderCreated {
	pub redirect_url:      String,
	pub order_tracking_id: Option<Value>,
}
