//! Calendar-ready events derived from bookings.

use crate::models::booking::{Booking, BookingStatus};
use crate::models::room_type::RoomType;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEvent<'a> {
    pub id: String,
    pub title: String,
    pub start: String,
    pub end: String,
    pub class_names: Vec<String>,
    pub colors: EventColors,
    pub booking: &'a Booking,
}

impl<'a> CalendarEvent<'a> {
    pub fn from_booking(booking: &'a Booking) -> Self {
        Self {
            id: booking.uuid.clone(),
            title: booking.name.clone(),
            start: format!("{}T{}", booking.date, booking.start_time),
            end: format!("{}T{}", booking.date, booking.end_time),
            class_names: class_names(booking),
            colors: EventColors::for_booking(booking),
            booking,
        }
    }

    pub fn date(&self) -> &str {
        &self.booking.date
    }
}

/// `room-type-meeting-room`, `booking-status-cancelled`, ...
pub fn class_names(booking: &Booking) -> Vec<String> {
    let room = booking
        .room_type
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-");

    vec![
        format!("room-type-{room}"),
        format!("booking-status-{}", booking.status.to_lowercase()),
    ]
}

pub fn build_events<'a, I>(bookings: I) -> Vec<CalendarEvent<'a>>
where
    I: IntoIterator<Item = &'a Booking>,
{
    bookings
        .into_iter()
        .map(CalendarEvent::from_booking)
        .collect()
}

/// Events keyed by their raw date string, input order kept inside a day.
pub fn events_by_date<'a>(events: Vec<CalendarEvent<'a>>) -> BTreeMap<String, Vec<CalendarEvent<'a>>> {
    let mut days: BTreeMap<String, Vec<CalendarEvent<'a>>> = BTreeMap::new();
    for ev in events {
        days.entry(ev.date().to_string()).or_default().push(ev);
    }
    days
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventColors {
    pub background_color: String,
    pub border_color: String,
    pub text_color: String,
}

type Rgb = (u8, u8, u8);

const MEETING_ROOM: (Rgb, Rgb) = ((0x4C, 0xAF, 0x50), (0x38, 0x8E, 0x3C));
const DISCUSSION_ROOM: (Rgb, Rgb) = ((0x21, 0x96, 0xF3), (0x19, 0x76, 0xD2));
const CONFERENCE_ROOM: (Rgb, Rgb) = ((0x9C, 0x27, 0xB0), (0x7B, 0x1F, 0xA2));

impl EventColors {
    /// Base colour by room type (meeting-room green when unknown),
    /// half opacity for cancelled bookings.
    pub fn for_booking(booking: &Booking) -> Self {
        let (base, border) = match booking.room_type() {
            Some(RoomType::DiscussionRoom) => DISCUSSION_ROOM,
            Some(RoomType::ConferenceRoom) => CONFERENCE_ROOM,
            Some(RoomType::MeetingRoom) | None => MEETING_ROOM,
        };

        let cancelled = booking.status() == Some(BookingStatus::Cancelled);
        let opacity = if cancelled { "0.5" } else { "1" };

        Self {
            background_color: rgba(base, opacity),
            border_color: rgba(border, opacity),
            text_color: if cancelled { "#666666" } else { "#FFFFFF" }.to_string(),
        }
    }
}

fn rgba((r, g, b): Rgb, opacity: &str) -> String {
    format!("rgba({r}, {g}, {b}, {opacity})")
}
