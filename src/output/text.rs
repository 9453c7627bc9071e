use crate::error::Result;
use crate::report::Report;

use super::ReportFormatter;

/// Plain report rendering, byte-for-byte what is written to the knowledge file.
pub struct TextFormatter;

impl ReportFormatter for TextFormatter {
    fn format(&self, report: &Report) -> Result<String> {
        Ok(report.render())
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
