pub mod calendar;
pub mod config;
pub mod export;
pub mod init;
pub mod list;
pub mod show;
pub mod stats;

use crate::config::Config;
use crate::core::sort::SortState;
use crate::core::sources::{FsFetcher, load_all};
use crate::core::view::Dashboard;
use crate::errors::{AppError, AppResult};
use crate::models::booking::PartitionedBookings;
use crate::models::filter::FilterSpec;
use crate::ui::messages::loading;

/// One load cycle against the configured CSV directory.
pub(crate) fn load_bookings(cfg: &Config) -> AppResult<PartitionedBookings> {
    let dir = cfg.csv_path();
    loading(dir.display());

    let fetcher = FsFetcher::new(&dir);
    let sources = cfg.sources();

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    runtime.block_on(load_all(&fetcher, &sources))
}

/// Load and commit, or fail with the single message the dashboard shows.
pub(crate) fn open_dashboard(
    cfg: &Config,
    filters: FilterSpec,
    sort: SortState,
) -> AppResult<Dashboard> {
    let mut dashboard = Dashboard::new(filters, sort);

    match load_bookings(cfg) {
        Ok(bookings) => {
            dashboard.commit(bookings);
            Ok(dashboard)
        }
        Err(e) => {
            dashboard.fail(&e);
            let msg = dashboard.error().unwrap_or("Failed to load bookings").to_string();
            Err(AppError::LoadFailed(msg))
        }
    }
}
