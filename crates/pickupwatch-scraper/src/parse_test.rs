use chrono::NaiveDate;
use serde_json::{json, Value};

use super::*;

const PART: &str = "MMEF2ZM/A";

fn reference_day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 5, 20).unwrap()
}

fn store_entry(name: &str, city: &str, quote: &str) -> Value {
    json!({
        "storeName": name,
        "city": city,
        "storeNumber": "R045",
        "partsAvailability": {
            PART: {
                "pickupDisplay": "available",
                "pickupSearchQuote": quote,
            }
        }
    })
}

fn pickup_body(stores: Vec<Value>) -> Value {
    json!({
        "head": { "status": "200" },
        "body": { "stores": stores },
    })
}

#[test]
fn parse_quote_date_strips_the_available_prefix() {
    let date = parse_quote_date("Verfügbar<br/>23 May", reference_day());
    assert_eq!(date, NaiveDate::from_ymd_opt(2026, 5, 23));
}

#[test]
fn parse_quote_date_accepts_a_bare_fragment() {
    let date = parse_quote_date("23 May", reference_day());
    assert_eq!(date, NaiveDate::from_ymd_opt(2026, 5, 23));
}

#[test]
fn parse_quote_date_trims_surrounding_whitespace() {
    let date = parse_quote_date("Verfügbar<br/> 5 Jun ", reference_day());
    assert_eq!(date, NaiveDate::from_ymd_opt(2026, 6, 5));
}

#[test]
fn parse_quote_date_takes_the_year_from_the_reference_day() {
    let today = NaiveDate::from_ymd_opt(2027, 1, 10).unwrap();
    let date = parse_quote_date("Verfügbar<br/>23 May", today);
    assert_eq!(date, NaiveDate::from_ymd_opt(2027, 5, 23));
}

#[test]
fn parse_quote_date_rejects_non_date_quotes() {
    assert_eq!(parse_quote_date("Derzeit nicht verfügbar", reference_day()), None);
    assert_eq!(parse_quote_date("", reference_day()), None);
    assert_eq!(parse_quote_date("Verfügbar<br/>", reference_day()), None);
}

#[test]
fn extract_keeps_the_endpoint_store_order() {
    let data = pickup_body(vec![
        store_entry("Rosenstraße", "München", "Verfügbar<br/>23 May"),
        store_entry("Jungfernstieg", "Hamburg", "Verfügbar<br/>21 May"),
    ]);

    let records = extract_store_records(&data, PART, reference_day());

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].store_name, "Rosenstraße");
    assert_eq!(records[0].city, "München");
    assert_eq!(
        records[0].available_date,
        NaiveDate::from_ymd_opt(2026, 5, 23).unwrap()
    );
    assert_eq!(records[0].days_until_available, Some(3));
    assert_eq!(records[1].store_name, "Jungfernstieg");
    assert_eq!(records[1].days_until_available, Some(1));
}

#[test]
fn extract_skips_stores_missing_a_required_field() {
    let mut incomplete = store_entry("Rosenstraße", "München", "Verfügbar<br/>23 May");
    incomplete.as_object_mut().unwrap().remove("city");
    let data = pickup_body(vec![
        incomplete,
        store_entry("Jungfernstieg", "Hamburg", "Verfügbar<br/>21 May"),
    ]);

    let records = extract_store_records(&data, PART, reference_day());

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].store_name, "Jungfernstieg");
}

#[test]
fn extract_skips_stores_without_the_watched_part() {
    let other_part = json!({
        "storeName": "Rosenstraße",
        "city": "München",
        "partsAvailability": {
            "MV7N2ZM/A": { "pickupSearchQuote": "Verfügbar<br/>23 May" }
        }
    });
    let data = pickup_body(vec![other_part]);

    assert!(extract_store_records(&data, PART, reference_day()).is_empty());
}

#[test]
fn extract_skips_stores_with_an_unparseable_quote() {
    let data = pickup_body(vec![
        store_entry("Rosenstraße", "München", "Derzeit nicht verfügbar"),
        store_entry("Jungfernstieg", "Hamburg", "Verfügbar<br/>21 May"),
    ]);

    let records = extract_store_records(&data, PART, reference_day());

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].store_name, "Jungfernstieg");
}

#[test]
fn extract_returns_empty_when_stores_is_missing() {
    let data = json!({ "head": { "status": "200" }, "body": {} });
    assert!(extract_store_records(&data, PART, reference_day()).is_empty());
}

#[test]
fn extract_returns_empty_when_body_is_missing() {
    let data = json!({ "head": { "status": "200" } });
    assert!(extract_store_records(&data, PART, reference_day()).is_empty());
}
