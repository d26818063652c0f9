use clap::ValueEnum;
use serde::Serialize;

/// Closed set of bookable room kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, ValueEnum)]
pub enum RoomType {
    MeetingRoom,
    DiscussionRoom,
    ConferenceRoom,
}

impl RoomType {
    pub const ALL: [RoomType; 3] = [
        RoomType::MeetingRoom,
        RoomType::DiscussionRoom,
        RoomType::ConferenceRoom,
    ];

    /// Label as stored in the source files.
    pub fn label(&self) -> &'static str {
        match self {
            RoomType::MeetingRoom => "MEETING ROOM",
            RoomType::DiscussionRoom => "DISCUSSION ROOM",
            RoomType::ConferenceRoom => "CONFERENCE ROOM",
        }
    }

    /// Case-sensitive: "meeting room" is not a member of the domain.
    pub fn from_label(s: &str) -> Option<Self> {
        match s {
            "MEETING ROOM" => Some(RoomType::MeetingRoom),
            "DISCUSSION ROOM" => Some(RoomType::DiscussionRoom),
            "CONFERENCE ROOM" => Some(RoomType::ConferenceRoom),
            _ => None,
        }
    }
}
