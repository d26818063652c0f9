//! Permissive CSV → Booking parsing.
//!
//! Rows are split on ',' with no quote handling and zipped with the header
//! row by position. Short rows leave trailing fields blank, long rows drop
//! the extras, and no value is validated here.

use crate::errors::{AppError, AppResult};
use crate::models::booking::{Booking, FIELD_NAMES};
use csv::{ReaderBuilder, StringRecord, StringRecordsIter, Trim};
use std::collections::HashMap;
use tracing::{debug, warn};

/// Parse the content of one source file. `label` only appears in
/// diagnostics and in the error, if the reader fails.
pub fn parse_bookings(text: &str, label: &str) -> AppResult<Vec<Booking>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .trim(Trim::All)
        .from_reader(text.as_bytes());

    let mut records = reader.records();

    let headers: Vec<String> = match next_non_blank(&mut records, label)? {
        Some(first) => first.iter().map(str::to_string).collect(),
        None => {
            warn!(source = label, "source appears to be empty");
            return Ok(Vec::new());
        }
    };
    debug!(source = label, ?headers, "headers found");

    let missing: Vec<&str> = FIELD_NAMES
        .iter()
        .copied()
        .filter(|name| !headers.iter().any(|h| h == name))
        .collect();
    if !missing.is_empty() {
        warn!(source = label, ?missing, "columns missing, values left blank");
    }

    let mut bookings = Vec::new();
    for record in records {
        let record = record.map_err(|e| AppError::parse(label, e))?;
        if is_blank(&record) {
            continue;
        }
        bookings.push(booking_from_record(&headers, &record));
    }

    if bookings.is_empty() {
        warn!(source = label, "no data rows");
    }
    debug!(source = label, count = bookings.len(), "parsed bookings");

    Ok(bookings)
}

fn booking_from_record(headers: &[String], record: &StringRecord) -> Booking {
    let fields: HashMap<&str, &str> = headers
        .iter()
        .enumerate()
        .map(|(i, h)| (h.as_str(), record.get(i).unwrap_or("")))
        .collect();

    Booking::from_fields(&fields)
}

/// The header is the first line with any content; blank lines before it
/// are skipped the same way blank data lines are.
fn next_non_blank<R: std::io::Read>(
    records: &mut StringRecordsIter<'_, R>,
    label: &str,
) -> AppResult<Option<StringRecord>> {
    for record in records.by_ref() {
        let record = record.map_err(|e| AppError::parse(label, e))?;
        if !is_blank(&record) {
            return Ok(Some(record));
        }
    }
    Ok(None)
}

// A whitespace-only line comes back as a single empty field.
fn is_blank(record: &StringRecord) -> bool {
    record.len() == 1 && record.get(0).is_none_or(str::is_empty)
}
