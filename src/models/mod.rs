// Receipt models
pub mod pending_renewal;
pub mod receipt;
pub mod receipt_collection;
pub mod subscription;
pub mod verification;
