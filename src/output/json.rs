use serde::Serialize;

use crate::error::Result;
use crate::report::{Report, ScanEntry};

use super::ReportFormatter;

pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput<'a> {
    summary: Summary,
    entries: &'a [ScanEntry],
}

#[derive(Serialize)]
struct Summary {
    directories: usize,
    files: usize,
    embedded: usize,
}

impl ReportFormatter for JsonFormatter {
    fn format(&self, report: &Report) -> Result<String> {
        let output = JsonOutput {
            summary: Summary {
                directories: report.directory_count(),
                files: report.file_count(),
                embedded: report.embedded_count(),
            },
            entries: report.entries(),
        };

        Ok(serde_json::to_string_pretty(&output)?)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
