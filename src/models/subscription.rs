use serde::Serialize;
use time::OffsetDateTime;

/// Subscription state derived from a receipt collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SubscriptionStatus {
    Active,
    Trial,
    GracePeriod,
    BillingRetry,
    Cancelled,
    Expired,
}

impl SubscriptionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Trial => "trial",
            Self::GracePeriod => "grace_period",
            Self::BillingRetry => "billing_retry",
            Self::Cancelled => "cancelled",
            Self::Expired => "expired",
        }
    }

    /// Whether the holder should still get access.
    pub fn is_entitled(&self) -> bool {
        matches!(self, Self::Active | Self::Trial | Self::GracePeriod)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionSummary {
    pub status: SubscriptionStatus,
    pub product_id: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub expires_at: OffsetDateTime,
    pub is_trial: bool,
    pub overdue_days: i64,
    pub auto_renewing: bool,
    pub auto_renew_product_id: Option<String>,
}
