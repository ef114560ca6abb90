use serde_json::Value;
use time::{Date, OffsetDateTime, UtcOffset};
use tracing::{debug, warn};

use super::{pending_renewal::PendingRenewalInfo, receipt::Receipt};
use crate::error::{ReceiptError, Result};

/// Receipts from one verification response, ordered by purchase date, plus
/// the renewal metadata that came with them.
///
/// The most recent receipt is the last one after sorting. Receipts sharing a
/// purchase date keep their input order, so the one received last wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceiptCollection {
    receipts: Vec<Receipt>,
    pending_renewal_info: Vec<PendingRenewalInfo>,
}

impl ReceiptCollection {
    /// Decode raw attribute records and sort them. Any undecodable record
    /// fails the whole collection.
    pub fn new(
        attributes: &[Value],
        pending_renewal_info: Vec<PendingRenewalInfo>,
    ) -> Result<Self> {
        let receipts = attributes
            .iter()
            .enumerate()
            .map(|(index, raw)| {
                Receipt::from_attributes(raw).inspect_err(|e| {
                    warn!(index, error = %e, "Failed to decode receipt record");
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self::from_receipts(receipts, pending_renewal_info))
    }

    pub fn from_receipts(
        mut receipts: Vec<Receipt>,
        pending_renewal_info: Vec<PendingRenewalInfo>,
    ) -> Self {
        // Stable: equal purchase dates stay in input order.
        receipts.sort_by_key(|receipt| receipt.purchase_date);

        debug!(
            receipts = receipts.len(),
            pending_renewal_info = pending_renewal_info.len(),
            "Built receipt collection"
        );

        Self {
            receipts,
            pending_renewal_info,
        }
    }

    pub fn receipts(&self) -> &[Receipt] {
        &self.receipts
    }

    pub fn pending_renewal_info(&self) -> &[PendingRenewalInfo] {
        &self.pending_renewal_info
    }

    pub fn is_empty(&self) -> bool {
        self.receipts.is_empty()
    }

    /// The receipt with the latest purchase date.
    pub fn latest_receipt(&self) -> Result<&Receipt> {
        self.receipts.last().ok_or(ReceiptError::EmptyCollection)
    }

    /// Expired when the latest expiration is at or before `now`.
    pub fn is_expired(&self, now: OffsetDateTime) -> Result<bool> {
        Ok(self.expires_at()? <= now)
    }

    pub fn is_trial(&self) -> Result<bool> {
        Ok(self.latest_receipt()?.is_trial_period)
    }

    pub fn expires_at(&self) -> Result<OffsetDateTime> {
        Ok(self.latest_receipt()?.expires_date)
    }

    /// Calendar days between the expiration date and `today`, both in UTC.
    /// Zero or negative means not overdue.
    pub fn overdue_days(&self, today: Date) -> Result<i64> {
        let expires_on = self.expires_at()?.to_offset(UtcOffset::UTC).date();
        Ok((today - expires_on).whole_days())
    }

    /// True when any pending renewal entry has auto-renew switched on.
    pub fn auto_renewal_status(&self) -> bool {
        self.pending_renewal_info
            .iter()
            .any(PendingRenewalInfo::is_auto_renew_enabled)
    }

    /// Renewal product of the first pending renewal entry only.
    pub fn auto_renew_product_id(&self) -> Option<&str> {
        self.pending_renewal_info
            .first()
            .and_then(PendingRenewalInfo::auto_renew_product_id)
    }

    pub fn is_in_billing_retry(&self) -> bool {
        self.pending_renewal_info
            .iter()
            .any(PendingRenewalInfo::is_in_billing_retry_period)
    }
}
