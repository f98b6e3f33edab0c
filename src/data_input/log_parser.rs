// src/data_input/log_parser.rs

use log::{debug, info, warn};
use std::fs::{self, File};
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use crate::constants::{FIELD_COUNT, FIELD_NAMES};
use crate::data_input::log_data::{TelemetryRecord, TelemetryTable};
use crate::error::{Result, TelemetryError};

/// Parses the pendulum log at `input_file_path` into a `TelemetryTable`.
///
/// Every non-blank line must hold five whitespace-separated numbers in the order
/// Time, Command, Response, Setpoint, f. The first malformed line aborts the load.
/// An empty log is rejected with `TelemetryError::EmptyInput`.
pub fn parse_log_file(input_file_path: &Path) -> Result<TelemetryTable> {
    let missing = |source: io::Error| TelemetryError::MissingFile {
        path: input_file_path.to_path_buf(),
        source,
    };
    // Directories open fine on Linux and only fail on the first read.
    let metadata = fs::metadata(input_file_path).map_err(missing)?;
    if !metadata.is_file() {
        return Err(missing(io::Error::new(
            io::ErrorKind::InvalidInput,
            "not a regular file",
        )));
    }
    let file = File::open(input_file_path).map_err(missing)?;
    info!("Reading telemetry from '{}'", input_file_path.display());

    let table = parse_log_reader(BufReader::new(file))?;
    if table.is_empty() {
        return Err(TelemetryError::EmptyInput {
            path: input_file_path.to_path_buf(),
        });
    }

    log_table_summary(&table);
    Ok(table)
}

/// Parses log lines from any buffered reader. Blank lines are skipped but still
/// counted, so reported line numbers match the file.
pub fn parse_log_reader<R: BufRead>(mut reader: R) -> Result<TelemetryTable> {
    let mut records: Vec<TelemetryRecord> = Vec::new();
    let mut raw_line: Vec<u8> = Vec::new();
    let mut line_number = 0;

    loop {
        raw_line.clear();
        if reader.read_until(b'\n', &mut raw_line)? == 0 {
            break;
        }
        line_number += 1;

        let line = std::str::from_utf8(&raw_line).map_err(|e| TelemetryError::MalformedRecord {
            line: line_number,
            content: String::from_utf8_lossy(&raw_line).trim().to_string(),
            reason: format!("line is not valid UTF-8 ({})", e),
        })?;
        if line.trim().is_empty() {
            debug!("Skipping blank line {}", line_number);
            continue;
        }
        records.push(parse_record_line(line_number, line)?);
    }

    Ok(TelemetryTable::from_records(&records))
}

/// Parses one log line. `line_number` is 1-based and only used for error reporting.
pub fn parse_record_line(line_number: usize, line: &str) -> Result<TelemetryRecord> {
    let malformed = |reason: String| TelemetryError::MalformedRecord {
        line: line_number,
        content: line.trim().to_string(),
        reason,
    };

    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() != FIELD_COUNT {
        return Err(malformed(format!(
            "expected {} fields, found {}",
            FIELD_COUNT,
            tokens.len()
        )));
    }

    let mut values = [0.0f64; FIELD_COUNT];
    for (field_index, token) in tokens.iter().enumerate() {
        values[field_index] = token.parse::<f64>().map_err(|e| {
            malformed(format!(
                "field '{}' value '{}' is not a number ({})",
                FIELD_NAMES[field_index], token, e
            ))
        })?;
    }

    let [time, command, response, setpoint, f] = values;
    Ok(TelemetryRecord {
        time,
        command,
        response,
        setpoint,
        f,
    })
}

fn log_table_summary(table: &TelemetryTable) {
    info!("Finished reading {} telemetry records.", table.len());
    if let Some((t_min, t_max)) = table.time_range() {
        info!("Time span: {:.3} s to {:.3} s", t_min, t_max);
    }
    match table.estimated_sample_rate() {
        Some(rate) => info!("Estimated Sample Rate: {:.2} Hz", rate),
        None => warn!("Could not determine sample rate (need >= 2 records with distinct timestamps)."),
    }
    if !table.is_time_monotonic() {
        warn!("Time column is not monotonic; records are plotted in file order.");
    }
}


// src/data_input/log_parser.rs
