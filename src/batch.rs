// 📦 Batch Conversion
// CSV in (a `number` column) → CSV or JSON out, one row per input record

use crate::grouping::group_thousands;
use crate::input::parse_number;
use crate::words::to_english;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::io::{Read, Write};
use std::path::Path;
use tracing::{info, warn};

#[derive(Debug, Clone, Deserialize)]
pub struct BatchRecord {
    pub number: String,
}

/// One converted (or rejected) record
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatchRow {
    /// Input text as given
    pub number: String,
    pub grouped: String,
    pub words: String,
    pub error: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub total: usize,
    pub converted: usize,
    pub rejected: usize,
}

/// Convert every record; bad numbers become rows with `error` set
pub fn convert_records<R: Read>(reader: R) -> Result<(Vec<BatchRow>, BatchReport)> {
    let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);

    let mut rows = Vec::new();
    let mut report = BatchReport::default();

    for (line, result) in rdr.deserialize().enumerate() {
        let record: BatchRecord =
            result.with_context(|| format!("Failed to deserialize record {}", line + 1))?;
        report.total += 1;

        let row = match parse_number(&record.number) {
            Ok(number) => {
                report.converted += 1;
                BatchRow {
                    number: record.number,
                    grouped: group_thousands(number),
                    words: to_english(number),
                    error: String::new(),
                }
            }
            Err(e) => {
                report.rejected += 1;
                warn!(record = line + 1, number = %record.number, error = %e, "rejected record");
                BatchRow {
                    number: record.number,
                    grouped: String::new(),
                    words: String::new(),
                    error: e.to_string(),
                }
            }
        };
        rows.push(row);
    }

    info!(
        total = report.total,
        converted = report.converted,
        rejected = report.rejected,
        "batch converted"
    );
    Ok((rows, report))
}

/// CSV in → CSV out with `number,grouped,words,error` columns
pub fn convert_csv<R: Read, W: Write>(reader: R, writer: W) -> Result<BatchReport> {
    let (rows, report) = convert_records(reader)?;

    let mut wtr = csv::Writer::from_writer(writer);
    for row in &rows {
        wtr.serialize(row).context("Failed to write CSV row")?;
    }
    wtr.flush().context("Failed to flush CSV output")?;

    Ok(report)
}

/// CSV in → pretty JSON array out
pub fn convert_json<R: Read, W: Write>(reader: R, mut writer: W) -> Result<BatchReport> {
    let (rows, report) = convert_records(reader)?;

    serde_json::to_writer_pretty(&mut writer, &rows).context("Failed to write JSON output")?;
    writeln!(writer)?;

    Ok(report)
}

/// Open `path` and convert it to `writer`, as JSON when `json` is set
pub fn convert_file<W: Write>(path: &Path, writer: W, json: bool) -> Result<BatchReport> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("Failed to open CSV file: {:?}", path))?;

    if json {
        convert_json(file, writer)
    } else {
        convert_csv(file, writer)
    }
}
