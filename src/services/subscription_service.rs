use time::{Duration, OffsetDateTime, UtcOffset};
use tracing::{info, instrument};

use crate::{
    config::SubscriptionConfig,
    error::Result,
    models::{
        receipt_collection::ReceiptCollection,
        subscription::{SubscriptionStatus, SubscriptionSummary},
    },
};

pub struct SubscriptionService {
    config: SubscriptionConfig,
}

impl SubscriptionService {
    pub fn new(config: &SubscriptionConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }

    /// Determine subscription status as of `now`
    pub fn status(
        &self,
        collection: &ReceiptCollection,
        now: OffsetDateTime,
    ) -> Result<SubscriptionStatus> {
        let latest = collection.latest_receipt()?;

        if latest.is_cancelled() {
            return Ok(SubscriptionStatus::Cancelled);
        }

        if !collection.is_expired(now)? {
            return Ok(if latest.is_trial_period {
                SubscriptionStatus::Trial
            } else {
                SubscriptionStatus::Active
            });
        }

        if collection.is_in_billing_retry() {
            return Ok(SubscriptionStatus::BillingRetry);
        }

        let grace_period_end =
            latest.expires_date + Duration::days(i64::from(self.config.grace_period_days));
        if now < grace_period_end {
            Ok(SubscriptionStatus::GracePeriod)
        } else {
            Ok(SubscriptionStatus::Expired)
        }
    }

    /// Summarize the collection as of `now`
    #[instrument(skip(self, collection), fields(receipts = collection.receipts().len()))]
    pub fn summarize(
        &self,
        collection: &ReceiptCollection,
        now: OffsetDateTime,
    ) -> Result<SubscriptionSummary> {
        let status = self.status(collection, now)?;
        let latest = collection.latest_receipt()?;
        let today = now.to_offset(UtcOffset::UTC).date();

        let summary = SubscriptionSummary {
            status,
            product_id: latest.product_id.clone(),
            expires_at: collection.expires_at()?,
            is_trial: collection.is_trial()?,
            overdue_days: collection.overdue_days(today)?,
            auto_renewing: collection.auto_renewal_status(),
            auto_renew_product_id: collection.auto_renew_product_id().map(str::to_string),
        };

        info!(
            "Summarized subscription: status={}, product_id={:?}, overdue_days={}, auto_renewing={}",
            summary.status.as_str(),
            summary.product_id,
            summary.overdue_days,
            summary.auto_renewing
        );

        Ok(summary)
    }

    /// Summarize against the current wall-clock time
    pub fn summarize_now(&self, collection: &ReceiptCollection) -> Result<SubscriptionSummary> {
        self.summarize(collection, OffsetDateTime::now_utc())
    }
}
