//! Line splitting and row-to-record mapping.
//!
//! Parsing is deliberately naive: fields are split on `,` with no quote
//! or escape awareness, matching the input format this tool supports.
use crate::record::{FieldValue, Record};
use anyhow::{Context, Result};

/// The one field coerced to an integer; every other field stays text.
const ID_FIELD: &str = "id";

/// Split raw text into trimmed, non-empty lines in input order.
pub fn split_lines(text: &str) -> Vec<String> {
    text.split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Extract header names from the first CSV line.
///
/// Fragments that trim to nothing are dropped; surviving fragments keep
/// their original text, whitespace included.
pub fn extract_headers(line: &str) -> Vec<String> {
    line.split(',')
        .filter(|fragment| !fragment.trim().is_empty())
        .map(str::to_string)
        .collect()
}

/// Map header + data lines into records.
///
/// The first element of `lines` is the header line; each remaining line
/// is split positionally and zipped with the headers. A row shorter than
/// the header list omits its trailing fields; values past the last
/// header are ignored. Data values are never trimmed. A malformed `id`
/// fails the whole run.
pub fn map_rows(lines: &[String]) -> Result<Vec<Record>> {
    let Some((header_line, data_lines)) = lines.split_first() else {
        return Ok(Vec::new());
    };
    let headers = extract_headers(header_line);

    let mut records = Vec::with_capacity(data_lines.len());
    for (row, line) in data_lines.iter().enumerate() {
        let mut record = Record::with_capacity(headers.len());
        for (header, value) in headers.iter().zip(line.split(',')) {
            let field = if header == ID_FIELD {
                let id = value.parse::<i64>().with_context(|| {
                    format!("invalid id value '{value}' on data row {}", row + 1)
                })?;
                FieldValue::Int(id)
            } else {
                FieldValue::Text(value.to_string())
            };
            record.push(header, field);
        }
        records.push(record);
    }
    Ok(records)
}
