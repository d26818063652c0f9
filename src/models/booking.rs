use super::room_type::RoomType;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Column names expected in every source file, in export order.
pub const FIELD_NAMES: [&str; 9] = [
    "uuid",
    "status",
    "date",
    "start_time",
    "end_time",
    "user_uuid",
    "name",
    "code",
    "type",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum BookingStatus {
    Confirmed,
    Cancelled,
}

impl BookingStatus {
    pub const ALL: [BookingStatus; 2] = [BookingStatus::Confirmed, BookingStatus::Cancelled];

    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Confirmed => "CONFIRMED",
            BookingStatus::Cancelled => "CANCELLED",
        }
    }

    /// Exact match on the stored value; anything else is unrecognized.
    pub fn from_label(s: &str) -> Option<Self> {
        match s {
            "CONFIRMED" => Some(BookingStatus::Confirmed),
            "CANCELLED" => Some(BookingStatus::Cancelled),
            _ => None,
        }
    }
}

/// A single room reservation, exactly as read from a source file.
///
/// Every field keeps the trimmed raw text. Typed views (`status()`,
/// `room_type()`) are derived on demand so that malformed rows survive
/// parsing and are only dropped by the filter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    pub uuid: String,
    pub status: String,
    pub date: String,       // "YYYY-MM-DD"
    pub start_time: String, // "HH:MM"
    pub end_time: String,   // "HH:MM"
    pub user_uuid: String,
    pub name: String,
    pub code: String,
    #[serde(rename = "type")]
    pub room_type: String,
}

impl Booking {
    /// Build a booking from a header → value mapping.
    /// Missing keys become empty strings; unknown keys are ignored.
    pub fn from_fields(fields: &HashMap<&str, &str>) -> Self {
        let get = |key: &str| fields.get(key).map(|v| v.to_string()).unwrap_or_default();

        Self {
            uuid: get("uuid"),
            status: get("status"),
            date: get("date"),
            start_time: get("start_time"),
            end_time: get("end_time"),
            user_uuid: get("user_uuid"),
            name: get("name"),
            code: get("code"),
            room_type: get("type"),
        }
    }

    pub fn status(&self) -> Option<BookingStatus> {
        BookingStatus::from_label(&self.status)
    }

    pub fn room_type(&self) -> Option<RoomType> {
        RoomType::from_label(&self.room_type)
    }

    pub fn is_confirmed(&self) -> bool {
        matches!(self.status(), Some(BookingStatus::Confirmed))
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self.status(), Some(BookingStatus::Cancelled))
    }

    /// "HH:MM - HH:MM"
    pub fn time_range(&self) -> String {
        format!("{} - {}", self.start_time, self.end_time)
    }
}

/// Output of one load cycle: confirmed and cancelled bookings kept apart.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartitionedBookings {
    pub confirmed: Vec<Booking>,
    pub cancelled: Vec<Booking>,
}

impl PartitionedBookings {
    pub fn new(confirmed: Vec<Booking>, cancelled: Vec<Booking>) -> Self {
        Self {
            confirmed,
            cancelled,
        }
    }

    /// Confirmed first, then cancelled.
    pub fn all(&self) -> Vec<Booking> {
        self.iter().cloned().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Booking> {
        self.confirmed.iter().chain(self.cancelled.iter())
    }

    pub fn len(&self) -> usize {
        self.confirmed.len() + self.cancelled.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn find(&self, uuid: &str) -> Option<&Booking> {
        self.iter().find(|b| b.uuid == uuid)
    }
}
