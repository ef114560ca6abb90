#[derive(Debug, thiserror::Error)]
pub enum ReceiptError {
    #[error("Invalid receipt field `{field}`: {reason}")]
    Decode { field: String, reason: String },

    #[error("Receipt collection is empty")]
    EmptyCollection,

    #[error("Invalid receipt status: {0}")]
    VerificationStatus(i32),

    #[error("Invalid response format: {0}")]
    Json(#[from] serde_json::Error),
}

impl ReceiptError {
    pub(crate) fn decode(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ReceiptError::Decode {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

// Helper type for results
pub type Result<T> = std::result::Result<T, ReceiptError>;
