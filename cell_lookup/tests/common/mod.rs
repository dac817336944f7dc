#![allow(dead_code)]

use cell_lookup::{LookupClient, Settings};
use chrono::{NaiveDate, NaiveDateTime};

pub const TOKEN: &str = "test-token";

pub fn settings(endpoint: String) -> Settings {
    Settings {
        log: "cell_lookup=debug".to_string(),
        endpoint,
        token: TOKEN.to_string(),
        timeout: None,
        user_agent: "cell-lookup/test".to_string(),
    }
}

pub fn client(endpoint: String) -> LookupClient {
    LookupClient::from_settings(&settings(endpoint)).expect("lookup client")
}

pub fn datetime() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 3, 9)
        .and_then(|d| d.and_hms_opt(14, 30, 5))
        .expect("valid datetime")
}

pub fn found_body() -> serde_json::Value {
    serde_json::json!({"lac": 123, "cellid": 456, "coordinates": "12.34,56.78"})
}
