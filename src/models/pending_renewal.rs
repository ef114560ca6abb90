use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One entry of `pending_renewal_info` as returned by the verification service.
///
/// The map is kept verbatim; only the fields below are ever interpreted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PendingRenewalInfo(Map<String, Value>);

impl PendingRenewalInfo {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    fn str_field(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    pub fn auto_renew_status(&self) -> Option<&str> {
        self.str_field("auto_renew_status")
    }

    /// `"1"` is the only value that means enabled.
    pub fn is_auto_renew_enabled(&self) -> bool {
        self.auto_renew_status() == Some("1")
    }

    pub fn auto_renew_product_id(&self) -> Option<&str> {
        self.str_field("auto_renew_product_id")
    }

    pub fn product_id(&self) -> Option<&str> {
        self.str_field("product_id")
    }

    pub fn original_transaction_id(&self) -> Option<&str> {
        self.str_field("original_transaction_id")
    }

    pub fn expiration_intent(&self) -> Option<&str> {
        self.str_field("expiration_intent")
    }

    pub fn is_in_billing_retry_period(&self) -> bool {
        self.str_field("is_in_billing_retry_period") == Some("1")
    }
}

impl From<Map<String, Value>> for PendingRenewalInfo {
    fn from(fields: Map<String, Value>) -> Self {
        Self(fields)
    }
}
