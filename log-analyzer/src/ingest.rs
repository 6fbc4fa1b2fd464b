use std::{
    fs::{self, File},
    io::{self, BufRead, BufReader},
    path::{Path, PathBuf},
};

use tracing::{debug, trace};

use crate::{analytics::Aggregator, error::AnalyzeError, models::Report, parser::parse_log_line};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inputs {
    Files(Vec<PathBuf>),
    /// Neither a regular file nor a directory.
    Unsupported,
}

/// Line counts for one file. Logged, never serialized.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FileSummary {
    pub accepted: usize,
    pub rejected: usize,
}

/// Expands the command line path into the files to analyze, one report each.
///
/// Directories are not descended into; their regular files are returned in
/// name order.
pub fn resolve_inputs(path: &Path) -> Result<Inputs, AnalyzeError> {
    if path.is_file() {
        return Ok(Inputs::Files(vec![path.to_path_buf()]));
    }
    if !path.is_dir() {
        return Ok(Inputs::Unsupported);
    }
    let mut files = Vec::new();
    for dirent in fs::read_dir(path).map_err(|e| AnalyzeError::read(path, e))? {
        let candidate = dirent.map_err(|e| AnalyzeError::read(path, e))?.path();
        if candidate.is_file() {
            files.push(candidate);
        } else {
            debug!(path = %candidate.display(), "skipping non-file entry");
        }
    }
    files.sort();
    Ok(Inputs::Files(files))
}

pub fn analyze_file(path: &Path) -> Result<(Report, FileSummary), AnalyzeError> {
    let file = File::open(path).map_err(|e| AnalyzeError::read(path, e))?;
    analyze_lines(BufReader::new(file)).map_err(|e| AnalyzeError::read(path, e))
}

pub fn analyze_lines<R: BufRead>(reader: R) -> io::Result<(Report, FileSummary)> {
    let mut aggregator = Aggregator::default();
    let mut summary = FileSummary::default();
    for (idx, line) in reader.lines().enumerate() {
        match parse_log_line(&line?) {
            Ok(entry) => {
                aggregator.accept(entry);
                summary.accepted += 1;
            }
            Err(reason) => {
                trace!(line = idx + 1, %reason, "skipping line");
                summary.rejected += 1;
            }
        }
    }
    Ok((aggregator.into_report(), summary))
}
