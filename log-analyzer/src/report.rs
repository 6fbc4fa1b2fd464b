use std::{fmt, fs, path::Path};

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::{analytics::Counter, error::AnalyzeError, models::Report};

const CONSOLE_TOP: usize = 3;
const JSON_INDENT: &[u8] = b"    ";

/// Writes the report as indented JSON, replacing whatever is at `path`.
pub fn write_json(report: &Report, path: &Path) -> Result<(), AnalyzeError> {
    let mut buffer = Vec::new();
    let mut serializer =
        Serializer::with_formatter(&mut buffer, PrettyFormatter::with_indent(JSON_INDENT));
    report
        .serialize(&mut serializer)
        .map_err(|source| AnalyzeError::Encode {
            path: path.to_path_buf(),
            source,
        })?;
    fs::write(path, buffer).map_err(|source| AnalyzeError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Plain-text summary printed after each file.
pub struct ConsoleReport<'a>(pub &'a Report);

impl fmt::Display for ConsoleReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let report = self.0;
        writeln!(f, "Total requests: {}", report.total_requests)?;
        writeln!(f, "HTTP methods:")?;
        for (method, count) in report.http_methods.iter() {
            writeln!(f, "{method}: {count}")?;
        }
        writeln!(f, "Top IP addresses:")?;
        for (ip, count) in report.top_n(Counter::Ips, CONSOLE_TOP) {
            writeln!(f, "{ip}: {count}")?;
        }
        writeln!(f, "Top requests:")?;
        for entry in report.first_entries(CONSOLE_TOP) {
            writeln!(
                f,
                "Method: {}, URL: {}, IP: {}, Duration: {} ms, Date and Time: {}",
                entry.method, entry.url, entry.ip, entry.duration, entry.timestamp
            )?;
        }
        Ok(())
    }
}
