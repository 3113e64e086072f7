//! CSV export of per-message sentiment results.

use crate::error::Result;
use moodline_core::types::SentimentResult;
use std::io::Write;
use std::path::Path;

/// Writes one row per message with its label and confidence.
pub fn write_csv(path: &Path, results: &[SentimentResult]) -> Result<()> {
    let mut file = std::fs::File::create(path)?;
    writeln!(file, "message,sentiment,confidence")?;
    for result in results {
        writeln!(
            file,
            "{},{},{:.2}",
            escape_field(&result.message.text),
            result.sentiment.as_str(),
            result.confidence
        )?;
    }
    Ok(())
}

/// Quotes a field when it contains a comma, quote, or newline.
fn escape_field(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
