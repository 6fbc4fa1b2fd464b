//! Access log analysis: parses combined-format lines with a trailing request
//! duration and aggregates per-file counters.

pub mod analytics;
pub mod error;
pub mod ingest;
pub mod invariants;
pub mod models;
pub mod parser;
pub mod report;

pub use analytics::{Aggregator, Counter, Tally};
pub use error::AnalyzeError;
pub use models::{LogEntry, Report};
pub use parser::{Rejected, parse_log_line};
