use crate::domain::model::{DailyResult, DateKey, RateEntry, RateRecord};
use crate::utils::error::{RatesError, Result};
use serde_json::Value;

const RATES_FIELD: &str = "exchangeRate";

/// Decodes a response body. A body that is not JSON is a malformed response,
/// not a transport failure.
pub fn decode_body(date: &DateKey, body: &[u8]) -> Result<Value> {
    serde_json::from_slice(body).map_err(|e| RatesError::MalformedResponseError {
        date: date.to_string(),
        message: format!("body is not valid JSON: {}", e),
    })
}

/// Maps a decoded API payload to one day's rates.
///
/// Every tracked currency starts as an empty record and is overwritten by each
/// matching entry of `exchangeRate`, so the last entry for a code wins. Entries
/// for other codes, or without a `currency` string, are skipped. Rate values
/// are copied unchanged. A payload without an `exchangeRate` array, or with an
/// entry that is not an object, is an error.
pub fn parse_response(date: DateKey, data: &Value, currencies: &[String]) -> Result<DailyResult> {
    let records = data
        .get(RATES_FIELD)
        .and_then(Value::as_array)
        .ok_or_else(|| RatesError::MalformedResponseError {
            date: date.to_string(),
            message: format!("expected an '{}' array at the top level", RATES_FIELD),
        })?;

    let mut entry: RateEntry = currencies
        .iter()
        .map(|code| (code.clone(), RateRecord::default()))
        .collect();

    for record in records {
        let Some(fields) = record.as_object() else {
            return Err(RatesError::MalformedResponseError {
                date: date.to_string(),
                message: format!("'{}' entry is not an object: {}", RATES_FIELD, record),
            });
        };
        let Some(code) = fields.get("currency").and_then(Value::as_str) else {
            continue;
        };
        if let Some(slot) = entry.get_mut(code) {
            *slot = RateRecord::quoted(
                fields.get("saleRate").cloned().unwrap_or(Value::Null),
                fields.get("purchaseRate").cloned().unwrap_or(Value::Null),
            );
        }
    }

    Ok(DailyResult::rates(date, entry))
}
