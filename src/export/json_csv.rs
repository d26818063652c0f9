// src/export/json_csv.rs

use crate::errors::{AppError, AppResult};
use crate::export::notify_export_success;
use crate::models::booking::Booking;
use crate::ui::messages::info;
use csv::{QuoteStyle, WriterBuilder};
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Export JSON pretty-printed.
pub(crate) fn export_json<T: Serialize>(items: &[T], path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let json_data = serde_json::to_string_pretty(items)
        .map_err(|e| AppError::Export(format!("JSON serialization error: {e}")))?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    notify_export_success("JSON", items.len(), path);
    Ok(())
}

/// Export CSV with the same header row the sources use, so an export can be
/// loaded back as a source.
pub(crate) fn export_csv(bookings: &[&Booking], path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    // sources are read without quote handling, so never write quotes
    let mut wtr = WriterBuilder::new()
        .quote_style(QuoteStyle::Never)
        .from_path(path)
        .map_err(|e| AppError::Export(format!("CSV open error: {e}")))?;

    for item in bookings {
        wtr.serialize(item)
            .map_err(|e| AppError::Export(format!("CSV write error: {e}")))?;
    }

    wtr.flush()?;

    notify_export_success("CSV", bookings.len(), path);
    Ok(())
}
