// Library exports for testing and reuse
pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod telemetry;

// Re-export commonly used types
pub use crate::config::Config;
pub use crate::error::{ReceiptError, Result};
pub use crate::models::{
    pending_renewal::PendingRenewalInfo,
    receipt::Receipt,
    receipt_collection::ReceiptCollection,
    subscription::{SubscriptionStatus, SubscriptionSummary},
    verification::VerificationResponse,
};
pub use crate::services::SubscriptionService;
