//! Formatting utilities used for CLI and export outputs.

use crate::models::booking::{Booking, BookingStatus};
use crate::utils::date;

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

pub fn italic(s: &str) -> String {
    format!("\x1b[3m{}\x1b[0m", s)
}

pub fn blank_or(value: &str, placeholder: &str) -> String {
    if value.trim().is_empty() {
        placeholder.to_string()
    } else {
        value.to_string()
    }
}

/// Display date for tables: "03 Nov 2022", raw text when unparseable.
pub fn display_date(booking: &Booking) -> String {
    blank_or(&date::format_display(&booking.date), "--")
}

/// Human label for the stored status; unknown values are shown verbatim.
pub fn describe_status(booking: &Booking) -> String {
    match booking.status() {
        Some(BookingStatus::Confirmed) => "Confirmed".into(),
        Some(BookingStatus::Cancelled) => "Cancelled".into(),
        None => blank_or(&booking.status, "(none)"),
    }
}

/// Multi-line detail block shown for a single booking.
pub fn booking_details(booking: &Booking) -> String {
    format!(
        "Room: {}\nType: {}\nStatus: {}\nDate: {}\nTime: {}",
        booking.name,
        booking.room_type,
        booking.status,
        booking.date,
        booking.time_range()
    )
}
