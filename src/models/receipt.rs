use serde_json::{Map, Value};
use time::{
    format_description::well_known::Rfc3339, macros::format_description, Date, OffsetDateTime,
    PrimitiveDateTime, UtcOffset,
};

use crate::error::{ReceiptError, Result};

/// One purchase or renewal period decoded from an App Store receipt record.
///
/// Apple sends every value as a string (`"is_trial_period": "false"`,
/// `"purchase_date_ms": "1704067200000"`), so decoding goes through the raw
/// JSON object rather than a derived `Deserialize`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    pub purchase_date: OffsetDateTime,
    pub expires_date: OffsetDateTime,
    pub is_trial_period: bool,
    pub is_in_intro_offer_period: bool,
    pub product_id: Option<String>,
    pub transaction_id: Option<String>,
    pub original_transaction_id: Option<String>,
    pub quantity: u32,
    pub cancellation_date: Option<OffsetDateTime>,
}

impl Receipt {
    /// Decode a raw attribute record as found in `latest_receipt_info` or
    /// `receipt.in_app`.
    pub fn from_attributes(attributes: &Value) -> Result<Self> {
        let attributes = attributes
            .as_object()
            .ok_or_else(|| ReceiptError::decode("receipt", "expected a JSON object"))?;

        Ok(Self {
            purchase_date: required_date(attributes, "purchase_date")?,
            expires_date: required_date(attributes, "expires_date")?,
            is_trial_period: flag(attributes, "is_trial_period")?,
            is_in_intro_offer_period: flag(attributes, "is_in_intro_offer_period")?,
            product_id: text(attributes, "product_id"),
            transaction_id: text(attributes, "transaction_id"),
            original_transaction_id: text(attributes, "original_transaction_id"),
            quantity: quantity(attributes)?,
            cancellation_date: optional_date(attributes, "cancellation_date")?,
        })
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancellation_date.is_some()
    }
}

impl TryFrom<&Value> for Receipt {
    type Error = ReceiptError;

    fn try_from(attributes: &Value) -> Result<Self> {
        Receipt::from_attributes(attributes)
    }
}

/// Null and empty-string values are treated as missing.
fn present<'a>(attributes: &'a Map<String, Value>, field: &str) -> Option<&'a Value> {
    attributes
        .get(field)
        .filter(|value| !value.is_null() && value.as_str() != Some(""))
}

fn required_date(attributes: &Map<String, Value>, field: &str) -> Result<OffsetDateTime> {
    optional_date(attributes, field)?
        .ok_or_else(|| ReceiptError::decode(field, "missing required date"))
}

/// `<field>_ms` wins over `<field>` when both are present.
fn optional_date(attributes: &Map<String, Value>, field: &str) -> Result<Option<OffsetDateTime>> {
    let ms_field = format!("{field}_ms");
    if let Some(value) = present(attributes, &ms_field) {
        let millis = match value {
            Value::String(raw) => raw
                .trim()
                .parse::<i64>()
                .map_err(|e| ReceiptError::decode(&ms_field, e.to_string()))?,
            Value::Number(number) => number
                .as_i64()
                .ok_or_else(|| ReceiptError::decode(&ms_field, "expected integer milliseconds"))?,
            _ => return Err(ReceiptError::decode(&ms_field, "expected epoch milliseconds")),
        };

        return OffsetDateTime::from_unix_timestamp_nanos(i128::from(millis) * 1_000_000)
            .map(Some)
            .map_err(|e| ReceiptError::decode(&ms_field, e.to_string()));
    }

    match present(attributes, field) {
        None => Ok(None),
        Some(Value::String(raw)) => parse_date(raw)
            .map(Some)
            .ok_or_else(|| ReceiptError::decode(field, format!("unrecognized date `{raw}`"))),
        Some(_) => Err(ReceiptError::decode(field, "expected a date string")),
    }
}

fn parse_date(raw: &str) -> Option<OffsetDateTime> {
    let raw = raw.trim();

    // Apple's legacy format: "2024-01-01 00:00:00 Etc/GMT"
    let apple = format_description!("[year]-[month]-[day] [hour]:[minute]:[second] Etc/GMT");
    if let Ok(datetime) = PrimitiveDateTime::parse(raw, apple) {
        return Some(datetime.assume_utc());
    }

    if let Ok(datetime) = OffsetDateTime::parse(raw, &Rfc3339) {
        return Some(datetime.to_offset(UtcOffset::UTC));
    }

    let calendar = format_description!("[year]-[month]-[day]");
    Date::parse(raw, calendar)
        .ok()
        .map(|date| date.midnight().assume_utc())
}

fn flag(attributes: &Map<String, Value>, field: &str) -> Result<bool> {
    match present(attributes, field) {
        None => Ok(false),
        Some(Value::Bool(value)) => Ok(*value),
        Some(Value::String(raw)) => match raw.as_str() {
            "true" => Ok(true),
            "false" => Ok(false),
            other => Err(ReceiptError::decode(
                field,
                format!("expected \"true\" or \"false\", got `{other}`"),
            )),
        },
        Some(_) => Err(ReceiptError::decode(field, "expected a boolean")),
    }
}

fn text(attributes: &Map<String, Value>, field: &str) -> Option<String> {
    match present(attributes, field)? {
        Value::String(raw) => Some(raw.clone()),
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    }
}

fn quantity(attributes: &Map<String, Value>) -> Result<u32> {
    match present(attributes, "quantity") {
        None => Ok(1),
        Some(Value::String(raw)) => raw
            .trim()
            .parse()
            .map_err(|e: std::num::ParseIntError| ReceiptError::decode("quantity", e.to_string())),
        Some(Value::Number(number)) => number
            .as_u64()
            .and_then(|n| u32::try_from(n).ok())
            .ok_or_else(|| ReceiptError::decode("quantity", "expected a positive integer")),
        Some(_) => Err(ReceiptError::decode("quantity", "expected a number")),
    }
}
