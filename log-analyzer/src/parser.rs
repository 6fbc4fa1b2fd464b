use thiserror::Error;

use crate::{invariants::Timestamp, models::LogEntry};

const MIN_TOKENS: usize = 10;

/// Why a line was skipped. Never fatal for a run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejected {
    #[error("expected at least 10 tokens, found {0}")]
    TooFewTokens(usize),
    #[error("unparseable timestamp {0:?}")]
    BadTimestamp(String),
    #[error("unparseable duration {0:?}")]
    BadDuration(String),
}

/// Parses a combined-format line with a trailing duration:
/// `ip ident user [day/Mon/year:HH:MM:SS ±zzzz] "METHOD target proto" status bytes ... duration`
///
/// Tokens are split on single spaces and read by position; the duration is
/// always the last token.
pub fn parse_log_line(line: &str) -> Result<LogEntry, Rejected> {
    let line = line.trim_end_matches(['\r', '\n']);
    let tokens: Vec<&str> = line.split(' ').collect();
    if tokens.len() < MIN_TOKENS {
        return Err(Rejected::TooFewTokens(tokens.len()));
    }
    let &[ip, _, _, day, zone, method, url, .., last] = tokens.as_slice() else {
        return Err(Rejected::TooFewTokens(tokens.len()));
    };

    // Timestamp spans two tokens
    let timestamp = day
        .strip_prefix('[')
        .zip(zone.strip_suffix(']'))
        .and_then(|(day, zone)| Timestamp::from_log(&format!("{day} {zone}")))
        .ok_or_else(|| Rejected::BadTimestamp(format!("{day} {zone}")))?;
    let duration: i64 = last
        .trim()
        .parse()
        .map_err(|_| Rejected::BadDuration(last.to_string()))?;

    Ok(LogEntry {
        ip: ip.to_string().into(),
        timestamp,
        method: unquote(method).to_string().into(),
        url: unquote(url).to_string().into(),
        duration,
    })
}

fn unquote(token: &str) -> &str {
    token.strip_prefix('"').unwrap_or(token)
}
