use crate::models::booking::Booking;
use clap::ValueEnum;
use std::cmp::Ordering;

/// Columns the table can be sorted on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum SortField {
    #[default]
    Date,
    StartTime,
    Name,
    Type,
    Status,
}

impl SortField {
    /// Raw text of the field; dates and times compare as plain strings.
    pub fn key<'a>(&self, booking: &'a Booking) -> &'a str {
        match self {
            SortField::Date => &booking.date,
            SortField::StartTime => &booking.start_time,
            SortField::Name => &booking.name,
            SortField::Type => &booking.room_type,
            SortField::Status => &booking.status,
        }
    }

    pub fn header(&self) -> &'static str {
        match self {
            SortField::Date => "Date",
            SortField::StartTime => "Time",
            SortField::Name => "Room",
            SortField::Type => "Type",
            SortField::Status => "Status",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    pub fn arrow(&self) -> &'static str {
        match self {
            SortDirection::Asc => "↑",
            SortDirection::Desc => "↓",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortState {
    pub field: SortField,
    pub direction: SortDirection,
}

impl SortState {
    pub fn new(field: SortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    /// Clicking the active column flips direction; any other column
    /// starts ascending.
    pub fn toggled(self, field: SortField) -> Self {
        if self.field == field {
            Self {
                field,
                direction: self.direction.flipped(),
            }
        } else {
            Self {
                field,
                direction: SortDirection::Asc,
            }
        }
    }

    pub fn compare(&self, a: &Booking, b: &Booking) -> Ordering {
        let ord = self.field.key(a).cmp(self.field.key(b));
        match self.direction {
            SortDirection::Asc => ord,
            SortDirection::Desc => ord.reverse(),
        }
    }
}

/// Returns a new, stably sorted vector; equal keys keep their input order
/// in both directions.
pub fn sort_bookings<'a, I>(bookings: I, state: SortState) -> Vec<&'a Booking>
where
    I: IntoIterator<Item = &'a Booking>,
{
    let mut sorted: Vec<&Booking> = bookings.into_iter().collect();
    sorted.sort_by(|a, b| state.compare(a, b));
    sorted
}
