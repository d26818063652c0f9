// src/export/logic.rs

use crate::core::calendar::build_events;
use crate::core::view::Dashboard;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::ui::messages::warning;
use std::path::Path;

/// High-level export of what the table view would show.
pub struct ExportLogic;

impl ExportLogic {
    /// Export the filtered, sorted bookings of `dashboard`.
    ///
    /// - `format`: csv | json
    /// - `file`: absolute output path
    /// - `events`: write calendar events instead of raw bookings (JSON only)
    pub fn export(
        dashboard: &Dashboard,
        format: ExportFormat,
        file: &str,
        events: bool,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "Output file path must be absolute: {file}"
            )));
        }

        if events && format != ExportFormat::Json {
            return Err(AppError::Export(format!(
                "calendar events can only be exported as JSON, not {}",
                format.as_str()
            )));
        }

        let rows = dashboard.table_rows();

        if rows.is_empty() {
            warning("No bookings match the current filters, nothing exported.");
            return Ok(());
        }

        ensure_writable(path, force)?;

        match format {
            ExportFormat::Csv => export_csv(&rows, path)?,
            ExportFormat::Json if events => export_json(&build_events(rows.iter().copied()), path)?,
            ExportFormat::Json => export_json(&rows, path)?,
        }

        Ok(())
    }
}
