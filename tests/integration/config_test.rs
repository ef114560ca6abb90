use iap_receipts::Config;

#[test]
fn test_environment_overrides_defaults() {
    std::env::set_var("IAP_RECEIPTS__SUBSCRIPTION__GRACE_PERIOD_DAYS", "16");
    std::env::set_var("IAP_RECEIPTS__LOGGING__JSON", "true");

    let config = Config::load().expect("Failed to load configuration");

    assert_eq!(config.subscription.grace_period_days, 16);
    assert!(config.logging.json);
    assert_eq!(config.logging.filter, "info,iap_receipts=debug");

    std::env::remove_var("IAP_RECEIPTS__SUBSCRIPTION__GRACE_PERIOD_DAYS");
    std::env::remove_var("IAP_RECEIPTS__LOGGING__JSON");
}
