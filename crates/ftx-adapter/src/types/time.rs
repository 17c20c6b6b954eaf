/*
[INPUT]:  Timestamps as fractional epoch seconds or ISO-8601 strings
[OUTPUT]: FtxTime instants, re-encoded as fractional epoch seconds
[POS]:    Data layer - dual-format timestamp codec
[UPDATE]: When the exchange changes how it encodes instants
*/

use std::fmt;
use std::ops::Deref;

use chrono::{DateTime, TimeDelta, Utc};
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::http::{FtxError, Result};

/// An instant the exchange sends either as `1610000000.123` or as
/// `"2021-01-07T06:13:20.123+00:00"`.
///
/// Always serialized back as fractional epoch seconds.
///
/// Numeric input reads the fractional part as a raw nanosecond count instead
/// of scaling it by 1e9, so `1610000000.5` decodes to `1610000000` seconds
/// and 0 ns. Sub-second precision survives only on the ISO-8601 path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FtxTime(pub DateTime<Utc>);

impl FtxTime {
    /// Decode fractional epoch seconds
    pub fn from_epoch_seconds(value: f64) -> Result<Self> {
        if !value.is_finite() {
            return Err(FtxError::Format(format!("{value} is not a finite number")));
        }
        let seconds = value.trunc();
        let fraction = value - seconds;
        // Fraction used as nanoseconds as-is (see type docs)
        let nanos = fraction as i64;

        DateTime::from_timestamp(seconds as i64, 0)
            .and_then(|base| base.checked_add_signed(TimeDelta::nanoseconds(nanos)))
            .map(FtxTime)
            .ok_or_else(|| FtxError::Format(format!("{value} is out of range")))
    }

    /// Decode an ISO-8601 / RFC 3339 date-time
    pub fn from_iso8601(value: &str) -> Result<Self> {
        DateTime::parse_from_rfc3339(value)
            .map(|parsed| FtxTime(parsed.with_timezone(&Utc)))
            .map_err(|e| FtxError::Format(format!("{value:?}: {e}")))
    }

    /// Decode from an already-parsed JSON value
    pub fn from_json_value(value: &Value) -> Result<Self> {
        match value {
            Value::Number(number) => number
                .as_f64()
                .ok_or_else(|| FtxError::Format(format!("{number} is not representable")))
                .and_then(Self::from_epoch_seconds),
            Value::String(text) => Self::from_iso8601(text).map_err(|_| {
                FtxError::Format(format!(
                    "{text:?} is neither epoch seconds nor an ISO-8601 date-time"
                ))
            }),
            other => Err(FtxError::Format(format!(
                "expected a number or string timestamp, got {other}"
            ))),
        }
    }

    /// `unix_seconds + subsec_nanos / 1e9`
    pub fn as_epoch_seconds(&self) -> f64 {
        self.0.timestamp() as f64 + f64::from(self.0.timestamp_subsec_nanos()) / 1e9
    }

    pub fn into_inner(self) -> DateTime<Utc> {
        self.0
    }
}

impl From<DateTime<Utc>> for FtxTime {
    fn from(value: DateTime<Utc>) -> Self {
        FtxTime(value)
    }
}

impl From<FtxTime> for DateTime<Utc> {
    fn from(value: FtxTime) -> Self {
        value.0
    }
}

impl Deref for FtxTime {
    type Target = DateTime<Utc>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl fmt::Display for FtxTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl Serialize for FtxTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.as_epoch_seconds())
    }
}

struct FtxTimeVisitor;

impl Visitor<'_> for FtxTimeVisitor {
    type Value = FtxTime;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("fractional epoch seconds or an ISO-8601 date-time string")
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> std::result::Result<FtxTime, E> {
        FtxTime::from_epoch_seconds(value).map_err(E::custom)
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> std::result::Result<FtxTime, E> {
        self.visit_f64(value as f64)
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> std::result::Result<FtxTime, E> {
        self.visit_f64(value as f64)
    }

    fn visit_str<E: de::Error>(self, value: &str) -> std::result::Result<FtxTime, E> {
        FtxTime::from_iso8601(value).map_err(|_| {
            E::custom(format!(
                "invalid timestamp {value:?}: expected fractional epoch seconds or an ISO-8601 date-time"
            ))
        })
    }
}

impl<'de> Deserialize<'de> for FtxTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_any(FtxTimeVisitor)
    }
}
