use iap_receipts::{
    config::SubscriptionConfig, ReceiptCollection, SubscriptionService, SubscriptionStatus,
    VerificationResponse,
};
use serde_json::json;
use time::macros::datetime;

fn sandbox_response() -> serde_json::Value {
    json!({
        "status": 0,
        "environment": "Sandbox",
        "receipt": {
            "bundle_id": "com.example.app",
            "in_app": []
        },
        "latest_receipt_info": [
            {
                "quantity": "1",
                "product_id": "com.example.pro.monthly",
                "transaction_id": "1000000000000002",
                "original_transaction_id": "1000000000000001",
                "purchase_date": "2024-01-01 00:00:00 Etc/GMT",
                "purchase_date_ms": "1704067200000",
                "expires_date": "2024-02-01 00:00:00 Etc/GMT",
                "expires_date_ms": "1706745600000",
                "is_trial_period": "false",
                "is_in_intro_offer_period": "false"
            },
            {
                "quantity": "1",
                "product_id": "com.example.pro.monthly",
                "transaction_id": "1000000000000001",
                "original_transaction_id": "1000000000000001",
                "purchase_date": "2023-12-25 00:00:00 Etc/GMT",
                "expires_date": "2024-01-01 00:00:00 Etc/GMT",
                "is_trial_period": "true"
            }
        ],
        "pending_renewal_info": [
            {
                "auto_renew_product_id": "com.example.pro.monthly",
                "auto_renew_status": "0",
                "original_transaction_id": "1000000000000001",
                "product_id": "com.example.pro.monthly",
                "expiration_intent": "1"
            }
        ]
    })
}

#[test]
fn test_summarize_verification_response() {
    let collection: ReceiptCollection = VerificationResponse::from_json(sandbox_response())
        .unwrap()
        .try_into()
        .unwrap();

    assert_eq!(collection.receipts().len(), 2);
    assert!(collection.receipts()[0].is_trial_period);

    let service = SubscriptionService::new(&SubscriptionConfig {
        grace_period_days: 3,
    });

    let in_grace = service
        .summarize(&collection, datetime!(2024-02-02 12:00:00 UTC))
        .unwrap();
    assert_eq!(in_grace.status, SubscriptionStatus::GracePeriod);
    assert!(in_grace.status.is_entitled());
    assert_eq!(in_grace.overdue_days, 1);
    assert!(!in_grace.auto_renewing);

    let lapsed = service
        .summarize(&collection, datetime!(2024-02-10 00:00:00 UTC))
        .unwrap();
    assert_eq!(lapsed.status, SubscriptionStatus::Expired);
    assert_eq!(lapsed.overdue_days, 9);
    assert_eq!(
        lapsed.auto_renew_product_id.as_deref(),
        Some("com.example.pro.monthly")
    );
}

#[test]
fn test_sandbox_receipt_sent_to_production() {
    let response = VerificationResponse::from_json(json!({ "status": 21007 })).unwrap();

    let err = response.into_collection().unwrap_err();
    assert_eq!(err.to_string(), "Invalid receipt status: 21007");
}
