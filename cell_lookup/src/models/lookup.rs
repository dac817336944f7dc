// models representing the JSON payloads exchanged with the lookup endpoint

use crate::{Error, Result};
use chrono::{Local, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Wire format of the lookup datetime, local time without offset
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Additional input formats accepted from the user
const INPUT_FORMATS: &[&str] = &[DATETIME_FORMAT, "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"];

#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct LookupRequest {
    pub phone_number: String,
    #[serde(serialize_with = "serialize_datetime")]
    pub datetime: NaiveDateTime,
}

impl LookupRequest {
    /// Build a request from the two form fields. An empty phone number is
    /// rejected before anything is sent.
    pub fn new(phone_number: &str, datetime: NaiveDateTime) -> Result<Self> {
        let phone_number = phone_number.trim();
        if phone_number.is_empty() {
            return Err(Error::Validation);
        }
        Ok(Self {
            phone_number: phone_number.to_string(),
            datetime: truncate_to_seconds(datetime),
        })
    }

    pub fn formatted_datetime(&self) -> String {
        format_datetime(&self.datetime)
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct LookupResult {
    pub lac: i64,
    // backends disagree on the spelling of this field
    #[serde(alias = "cellid", alias = "cellID", alias = "cellId")]
    pub cell_id: i64,
    pub coordinates: String,
}

impl fmt::Display for LookupResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Résultats")?;
        writeln!(f, "LAC: {}", self.lac)?;
        writeln!(f, "Cell ID: {}", self.cell_id)?;
        write!(f, "Coordonnées GPS: {}", self.coordinates)
    }
}

/// Optional JSON body of a non 2xx response
#[derive(Clone, Debug, Deserialize)]
pub struct ErrorBody {
    pub message: String,
}

pub fn format_datetime(datetime: &NaiveDateTime) -> String {
    datetime.format(DATETIME_FORMAT).to_string()
}

pub fn parse_datetime(value: &str) -> Result<NaiveDateTime> {
    let value = value.trim();
    INPUT_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .ok_or_else(|| Error::datetime(value))
}

/// Current local wall clock time, the default search datetime
pub fn now_local() -> NaiveDateTime {
    truncate_to_seconds(Local::now().naive_local())
}

fn truncate_to_seconds(datetime: NaiveDateTime) -> NaiveDateTime {
    datetime.with_nanosecond(0).unwrap_or(datetime)
}

fn serialize_datetime<S>(
    datetime: &NaiveDateTime,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.collect_str(&datetime.format(DATETIME_FORMAT))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn datetime(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 9)
            .and_then(|d| d.and_hms_opt(h, m, s))
            .expect("valid datetime")
    }

    fn matches_wire_pattern(value: &str) -> bool {
        let bytes = value.as_bytes();
        bytes.len() == 19
            && bytes.iter().enumerate().all(|(i, b)| match i {
                4 | 7 => *b == b'-',
                10 => *b == b' ',
                13 | 16 => *b == b':',
                _ => b.is_ascii_digit(),
            })
    }

    #[test]
    fn empty_phone_number_is_rejected() {
        assert!(matches!(
            LookupRequest::new("", datetime(8, 0, 0)),
            Err(Error::Validation)
        ));
        assert!(matches!(
            LookupRequest::new("   ", datetime(8, 0, 0)),
            Err(Error::Validation)
        ));
    }

    #[test]
    fn request_serializes_wire_body() {
        let request = LookupRequest::new(" 0612345678 ", datetime(7, 5, 3)).unwrap();
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "phone_number": "0612345678",
                "datetime": "2024-03-09 07:05:03"
            })
        );
    }

    #[test]
    fn sub_second_precision_is_dropped() {
        let precise = datetime(23, 59, 59)
            .with_nanosecond(999_000_000)
            .expect("valid nanos");
        let request = LookupRequest::new("0612345678", precise).unwrap();
        assert_eq!(request.formatted_datetime(), "2024-03-09 23:59:59");
        assert!(matches_wire_pattern(&request.formatted_datetime()));
    }

    #[test]
    fn now_matches_wire_pattern() {
        assert!(matches_wire_pattern(&format_datetime(&now_local())));
    }

    #[test]
    fn parses_accepted_input_formats() {
        let expected = datetime(14, 30, 0);
        assert_eq!(parse_datetime("2024-03-09 14:30:00").unwrap(), expected);
        assert_eq!(parse_datetime("2024-03-09T14:30:00").unwrap(), expected);
        assert_eq!(parse_datetime("2024-03-09 14:30").unwrap(), expected);
        assert!(matches!(
            parse_datetime("09/03/2024"),
            Err(Error::Datetime(_))
        ));
    }

    #[test]
    fn result_accepts_both_cell_id_spellings() {
        let lower: LookupResult =
            serde_json::from_str(r#"{"lac":123,"cellid":456,"coordinates":"12.34,56.78"}"#)
                .unwrap();
        let upper: LookupResult =
            serde_json::from_str(r#"{"lac":123,"cellID":456,"coordinates":"12.34,56.78"}"#)
                .unwrap();
        assert_eq!(lower, upper);
        assert_eq!(lower.lac, 123);
        assert_eq!(lower.cell_id, 456);
        assert_eq!(lower.coordinates, "12.34,56.78");
    }

    #[test]
    fn result_renders_block() {
        let result = LookupResult {
            lac: 123,
            cell_id: 456,
            coordinates: "12.34,56.78".to_string(),
        };
        assert_eq!(
            result.to_string(),
            "Résultats\nLAC: 123\nCell ID: 456\nCoordonnées GPS: 12.34,56.78"
        );
    }
}
