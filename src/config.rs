use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct Config {
    #[validate(nested)]
    pub subscription: SubscriptionConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct SubscriptionConfig {
    // Days after expiry during which access is kept while the store retries billing
    #[validate(range(max = 60))]
    pub grace_period_days: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub filter: String,
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info,iap_receipts=debug".to_string(),
            json: false,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        // Load .env file if it exists (for environment variable overrides)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .set_default("subscription.grace_period_days", 0)?
            .set_default("logging.filter", "info,iap_receipts=debug")?
            .set_default("logging.json", false)?
            // Optional config.{yml,toml,json} in the working directory
            .add_source(config::File::with_name("config").required(false))
            .add_source(
                config::Environment::with_prefix("IAP_RECEIPTS")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let config: Self = config.try_deserialize()?;
        config
            .validate()
            .map_err(|e| config::ConfigError::Message(format!("Invalid configuration: {}", e)))?;

        Ok(config)
    }
}
