//! Dashboard state: the committed booking set plus the current filter and
//! sort, and the views derived from them.

use crate::core::calendar::{CalendarEvent, build_events};
use crate::core::filter::filter_bookings;
use crate::core::sort::{SortField, SortState, sort_bookings};
use crate::core::stats::BookingStats;
use crate::errors::AppError;
use crate::models::booking::{Booking, PartitionedBookings};
use crate::models::filter::FilterSpec;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadState {
    #[default]
    Loading,
    Loaded(PartitionedBookings),
    Failed(String),
}

#[derive(Debug, Clone, Default)]
pub struct Dashboard {
    state: LoadState,
    filters: FilterSpec,
    sort: SortState,
}

impl Dashboard {
    pub fn new(filters: FilterSpec, sort: SortState) -> Self {
        Self {
            state: LoadState::Loading,
            filters,
            sort,
        }
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn filters(&self) -> FilterSpec {
        self.filters
    }

    pub fn sort(&self) -> SortState {
        self.sort
    }

    /// Replace the base set wholesale with a freshly loaded one.
    pub fn commit(&mut self, bookings: PartitionedBookings) {
        self.state = LoadState::Loaded(bookings);
    }

    /// A failed load drops whatever was shown before.
    pub fn fail(&mut self, err: &AppError) {
        self.state = LoadState::Failed(format!("Failed to load bookings: {err}"));
    }

    pub fn begin_reload(&mut self) {
        self.state = LoadState::Loading;
    }

    pub fn set_filters(&mut self, filters: FilterSpec) {
        self.filters = filters;
    }

    pub fn reset_filters(&mut self) {
        self.filters = FilterSpec::all();
    }

    pub fn sort_by(&mut self, field: SortField) {
        self.sort = self.sort.toggled(field);
    }

    pub fn error(&self) -> Option<&str> {
        match &self.state {
            LoadState::Failed(msg) => Some(msg.as_str()),
            _ => None,
        }
    }

    pub fn bookings(&self) -> Option<&PartitionedBookings> {
        match &self.state {
            LoadState::Loaded(b) => Some(b),
            _ => None,
        }
    }

    /// Filtered against whatever is committed right now; empty unless loaded.
    pub fn visible(&self) -> Vec<&Booking> {
        match self.bookings() {
            Some(b) => filter_bookings(b.iter(), &self.filters),
            None => Vec::new(),
        }
    }

    pub fn stats(&self) -> BookingStats {
        BookingStats::compute(self.visible())
    }

    pub fn events(&self) -> Vec<CalendarEvent<'_>> {
        build_events(self.visible())
    }

    /// Table rows: filtered again (a no-op on an already filtered set),
    /// then sorted.
    pub fn table_rows(&self) -> Vec<&Booking> {
        let visible = self.visible();
        let refiltered = filter_bookings(visible, &self.filters);
        sort_bookings(refiltered, self.sort)
    }
}
