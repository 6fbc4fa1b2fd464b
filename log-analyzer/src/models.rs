use serde::{Deserialize, Serialize};

use crate::{
    analytics::{Counter, Tally},
    invariants::{ClientIp, HttpMethod, RequestTarget, Timestamp},
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    pub ip: ClientIp,
    #[serde(rename = "date_time")]
    pub timestamp: Timestamp,
    pub method: HttpMethod,
    pub url: RequestTarget,
    /// Last token of the line, milliseconds by convention.
    pub duration: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub total_requests: usize,
    pub http_methods: Tally<HttpMethod>,
    pub top_ips: Tally<ClientIp>,
    /// Every accepted entry in input order. Serialized as `top_requests`
    /// although nothing ranks it.
    #[serde(rename = "top_requests")]
    pub entries: Vec<LogEntry>,
}

impl Report {
    pub fn top_n(&self, counter: Counter, n: usize) -> Vec<(&str, usize)> {
        match counter {
            Counter::Methods => self
                .http_methods
                .top(n)
                .into_iter()
                .map(|(k, v)| (k.as_str(), v))
                .collect(),
            Counter::Ips => self
                .top_ips
                .top(n)
                .into_iter()
                .map(|(k, v)| (k.as_str(), v))
                .collect(),
        }
    }

    pub fn first_entries(&self, n: usize) -> &[LogEntry] {
        &self.entries[..n.min(self.entries.len())]
    }
}
