use serde::Deserialize;
use serde_json::Value;

use super::{pending_renewal::PendingRenewalInfo, receipt_collection::ReceiptCollection};
use crate::error::{ReceiptError, Result};

/// Already-decoded body of a `verifyReceipt` response. Only the parts needed
/// to build a [`ReceiptCollection`] are modeled.
#[derive(Debug, Deserialize)]
pub struct VerificationResponse {
    pub status: i32,
    #[serde(default)]
    pub receipt: Option<AppleReceipt>,
    #[serde(default)]
    pub latest_receipt_info: Option<Vec<Value>>,
    #[serde(default)]
    pub pending_renewal_info: Option<Vec<PendingRenewalInfo>>,
}

#[derive(Debug, Deserialize)]
pub struct AppleReceipt {
    #[serde(default)]
    pub bundle_id: Option<String>,
    #[serde(default)]
    pub in_app: Vec<Value>,
}

impl VerificationResponse {
    pub fn from_json(body: Value) -> Result<Self> {
        Ok(serde_json::from_value(body)?)
    }

    pub fn into_collection(self) -> Result<ReceiptCollection> {
        if self.status != 0 {
            return Err(ReceiptError::VerificationStatus(self.status));
        }

        // Subscriptions report renewals in latest_receipt_info; plain
        // purchases only show up in the receipt itself.
        let attributes = match (self.latest_receipt_info, self.receipt) {
            (Some(latest), _) => latest,
            (None, Some(receipt)) => receipt.in_app,
            (None, None) => Vec::new(),
        };

        ReceiptCollection::new(&attributes, self.pending_renewal_info.unwrap_or_default())
    }
}

impl TryFrom<VerificationResponse> for ReceiptCollection {
    type Error = ReceiptError;

    fn try_from(response: VerificationResponse) -> Result<Self> {
        response.into_collection()
    }
}
