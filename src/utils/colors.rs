/// ANSI color helper utilities for terminal output.
use crate::models::booking::Booking;
use crate::models::room_type::RoomType;

pub const RESET: &str = "\x1b[0m";

pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const CYAN: &str = "\x1b[36m";
pub const MAGENTA: &str = "\x1b[35m";

/// Green for meeting rooms, blue for discussion rooms, magenta for
/// conference rooms. Unknown types fall back to green.
pub fn color_for_room_type(booking: &Booking) -> &'static str {
    match booking.room_type() {
        Some(RoomType::DiscussionRoom) => BLUE,
        Some(RoomType::ConferenceRoom) => MAGENTA,
        Some(RoomType::MeetingRoom) | None => GREEN,
    }
}

pub fn colorize(value: &str, color: &str) -> String {
    format!("{color}{value}{RESET}")
}
