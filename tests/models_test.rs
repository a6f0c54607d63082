//! Deserialization tests for the backend's response bodies.

use rust_decimal_macros::dec;

use pricedesk::models::{OperationOutcome, PriceSeriesResponse, ResponseStatus};

const PRICES_AAPL_JSON: &str = include_str!("fixtures/prices_aapl.json");
const PRICES_MESSY_JSON: &str = include_str!("fixtures/prices_messy.json");
const PRICES_ERROR_JSON: &str = include_str!("fixtures/prices_error.json");
const FETCH_SUCCESS_JSON: &str = include_str!("fixtures/fetch_success.json");
const FETCH_WARNING_JSON: &str = include_str!("fixtures/fetch_warning.json");
const FETCH_ERROR_JSON: &str = include_str!("fixtures/fetch_error.json");

#[test]
fn test_price_series_deserializes() {
    let response: PriceSeriesResponse =
        serde_json::from_str(PRICES_AAPL_JSON).expect("Failed to deserialize price series");

    assert_eq!(response.status, ResponseStatus::Success);
    assert_eq!(response.ticker, "AAPL");
    assert_eq!(response.count, Some(3));
    assert_eq!(response.prices.len(), 3);

    let first = &response.prices[0];
    assert_eq!(first.date, "2024-01-02");
    assert_eq!(first.open, Some(dec!(187.15)));
    assert_eq!(first.high, Some(dec!(188.44)));
    assert_eq!(first.low, Some(dec!(183.89)));
    assert_eq!(first.close, Some(dec!(185.64)));
    assert_eq!(first.volume, Some(dec!(82488700)));

    let dates: Vec<&str> = response.prices.iter().map(|p| p.date.as_str()).collect();
    assert_eq!(dates, ["2024-01-02", "2024-01-03", "2024-01-04"]);
}

#[test]
fn test_messy_numbers_degrade_to_none() {
    let response: PriceSeriesResponse =
        serde_json::from_str(PRICES_MESSY_JSON).expect("Failed to deserialize messy series");

    let first = &response.prices[0];
    assert_eq!(first.open, Some(dec!(370.87)));
    assert_eq!(first.high, None);
    assert_eq!(first.low, None);
    assert_eq!(first.close, Some(dec!(370.6)));
    assert_eq!(first.volume, Some(dec!(25258600)));

    let second = &response.prices[1];
    assert_eq!(second.open, None);
    assert_eq!(second.volume, None);
    assert_eq!(second.close, Some(dec!(370.6)));
    assert_eq!(response.count, None);
}

#[test]
fn test_error_series_has_no_prices() {
    let response: PriceSeriesResponse =
        serde_json::from_str(PRICES_ERROR_JSON).expect("Failed to deserialize error series");

    assert_eq!(response.status, ResponseStatus::Error);
    assert_eq!(response.message.as_deref(), Some("Database query failed."));
    assert!(response.ticker.is_empty());
    assert!(response.prices.is_empty());
}

#[test]
fn test_operation_outcomes_deserialize() {
    let success: OperationOutcome = serde_json::from_str(FETCH_SUCCESS_JSON).unwrap();
    assert_eq!(success.status, ResponseStatus::Success);
    assert_eq!(success.inserted, Some(250));
    assert_eq!(success.skipped, Some(2));

    let warning: OperationOutcome = serde_json::from_str(FETCH_WARNING_JSON).unwrap();
    assert_eq!(warning.status, ResponseStatus::Warning);
    assert_eq!(warning.message.as_deref(), Some("No data found for the ticker."));

    let error: OperationOutcome = serde_json::from_str(FETCH_ERROR_JSON).unwrap();
    assert_eq!(error.status, ResponseStatus::Error);
    assert_eq!(error.detail.as_deref(), Some("HTTPError: 429"));
}

#[test]
fn test_unknown_or_missing_status() {
    let outcome: OperationOutcome = serde_json::from_str(r#"{"status": "partial"}"#).unwrap();
    assert_eq!(outcome.status, ResponseStatus::Unknown);

    let outcome: OperationOutcome = serde_json::from_str("{}").unwrap();
    assert_eq!(outcome.status, ResponseStatus::Unknown);
    assert!(outcome.message.is_none());
}

#[test]
fn test_null_fields_decode_as_empty() {
    let response: PriceSeriesResponse = serde_json::from_str(
        r#"{"status": "success", "ticker": null, "prices": null, "count": null}"#,
    )
    .expect("null fields should decode");
    assert_eq!(response.status, ResponseStatus::Success);
    assert!(response.ticker.is_empty());
    assert!(response.prices.is_empty());

    let response: PriceSeriesResponse = serde_json::from_str(
        r#"{"status": null, "ticker": "AAPL", "prices": [{"date": null, "close": 185.64}]}"#,
    )
    .expect("null status and date should decode");
    assert_eq!(response.status, ResponseStatus::Unknown);
    assert_eq!(response.prices[0].date, "");
    assert_eq!(response.prices[0].close, Some(dec!(185.64)));

    let outcome: OperationOutcome =
        serde_json::from_str(r#"{"status": null, "message": null}"#).unwrap();
    assert_eq!(outcome.status, ResponseStatus::Unknown);
    assert!(outcome.message.is_none());
}
