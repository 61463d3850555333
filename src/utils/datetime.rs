//! Wire timestamp handling for STIRR guide data
//!
//! STIRR publishes every programme boundary as a fixed-width, separator-free
//! UTC timestamp:
//!
//! ```text
//! YYYYMMDDHHMMSS      e.g. 20210422030000
//! ```
//!
//! This module is the only place that format is parsed or produced. Nothing
//! else (RFC3339, offsets, fractional seconds) is accepted.
//!
//! # Usage
//!
//! ```rust
//! use stirr_guide::utils::datetime::WireTime;
//!
//! let start = WireTime::parse("20210422030000").unwrap();
//! assert_eq!(WireTime::format(&start), "20210422030000");
//! ```

use chrono::{DateTime, NaiveDateTime, Timelike, Utc};
use thiserror::Error;

/// Length of a wire timestamp in characters
pub const WIRE_TIMESTAMP_LEN: usize = 14;

/// chrono layout equivalent of the wire format
const WIRE_LAYOUT: &str = "%Y%m%d%H%M%S";

/// Errors raised while parsing a wire timestamp
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Not exactly 14 ASCII digits
    #[error("Invalid timestamp layout: '{text}' - expected YYYYMMDDHHMMSS")]
    InvalidLayout { text: String },

    /// Digits are present but do not name a real calendar instant
    #[error("Timestamp out of range: '{text}'")]
    InvalidDate { text: String },
}

impl ParseError {
    /// The offending input text
    pub fn text(&self) -> &str {
        match self {
            Self::InvalidLayout { text } | Self::InvalidDate { text } => text,
        }
    }
}

/// Codec for the feed's `YYYYMMDDHHMMSS` timestamps
pub struct WireTime;

impl WireTime {
    /// Parse a wire timestamp into a UTC instant
    ///
    /// Fails with [`ParseError::InvalidLayout`] when the text is not exactly
    /// 14 ASCII digits, and with [`ParseError::InvalidDate`] when a calendar
    /// field is out of range (month 13, February 30th, hour 24, second 60, ...).
    pub fn parse(text: &str) -> Result<DateTime<Utc>, ParseError> {
        if text.len() != WIRE_TIMESTAMP_LEN || !text.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseError::InvalidLayout {
                text: text.to_string(),
            });
        }

        let invalid_date = || ParseError::InvalidDate {
            text: text.to_string(),
        };

        let naive = NaiveDateTime::parse_from_str(text, WIRE_LAYOUT).map_err(|_| invalid_date())?;

        // chrono reads second 60 as a leap second; the feed never sends one
        if naive.nanosecond() >= 1_000_000_000 {
            return Err(invalid_date());
        }

        Ok(naive.and_utc())
    }

    /// Format a UTC instant as a wire timestamp
    pub fn format(dt: &DateTime<Utc>) -> String {
        dt.format(WIRE_LAYOUT).to_string()
    }
}
