use std::{convert::Infallible, fmt, str::FromStr};

use chrono::{DateTime, NaiveDateTime, Timelike};
use derive_more::{AsRef, Debug, Display, From};
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

// Access log timestamp: 10/Oct/2023:13:55:36 -0700
const LOG_FORMAT: &str = "%d/%b/%Y:%H:%M:%S %z";
const CANONICAL_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Display, AsRef, From, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClientIp(String);

impl ClientIp {
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl FromStr for ClientIp {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.into()))
    }
}

#[derive(Debug, Display, AsRef, From, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HttpMethod(String);

impl HttpMethod {
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl FromStr for HttpMethod {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.into()))
    }
}

/// Request target exactly as it appeared in the request line, no decoding.
#[derive(Debug, Display, AsRef, From, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequestTarget(String);

impl RequestTarget {
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl FromStr for RequestTarget {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.into()))
    }
}

/// Wall-clock time of a request in the offset it was logged with.
///
/// The offset is required when parsing but is not kept, so two timestamps
/// from servers in different zones are not comparable as instants.
#[derive(Debug, AsRef, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Timestamp(NaiveDateTime);

impl Timestamp {
    /// Parses the bracket-less `dd/Mon/yyyy:HH:MM:SS ±zzzz` form.
    ///
    /// Second 60 is refused; chrono would keep it as a leap second.
    pub fn from_log(raw: &str) -> Option<Self> {
        DateTime::parse_from_str(raw, LOG_FORMAT)
            .ok()
            .filter(|dt| dt.nanosecond() < 1_000_000_000)
            .map(|dt| Self(dt.naive_local()))
    }

    pub fn into_naive(self) -> NaiveDateTime {
        self.0
    }
}

impl From<NaiveDateTime> for Timestamp {
    fn from(value: NaiveDateTime) -> Self {
        Self(value)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(CANONICAL_FORMAT))
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&raw, CANONICAL_FORMAT)
            .map(Self)
            .map_err(de::Error::custom)
    }
}
