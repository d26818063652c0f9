//! Filter specification: one named switch per member of each closed domain.
//!
//! Every toggle returns a whole new `FilterSpec`; there is no way to build
//! one with a key missing.

use super::booking::BookingStatus;
use super::brand::Brand;
use super::room_type::RoomType;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusFilter {
    pub confirmed: bool,
    pub cancelled: bool,
}

impl StatusFilter {
    pub fn allows(&self, status: BookingStatus) -> bool {
        match status {
            BookingStatus::Confirmed => self.confirmed,
            BookingStatus::Cancelled => self.cancelled,
        }
    }

    pub fn toggled(self, status: BookingStatus) -> Self {
        match status {
            BookingStatus::Confirmed => Self {
                confirmed: !self.confirmed,
                ..self
            },
            BookingStatus::Cancelled => Self {
                cancelled: !self.cancelled,
                ..self
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoomTypeFilter {
    pub meeting_room: bool,
    pub discussion_room: bool,
    pub conference_room: bool,
}

impl RoomTypeFilter {
    pub fn allows(&self, room_type: RoomType) -> bool {
        match room_type {
            RoomType::MeetingRoom => self.meeting_room,
            RoomType::DiscussionRoom => self.discussion_room,
            RoomType::ConferenceRoom => self.conference_room,
        }
    }

    pub fn toggled(self, room_type: RoomType) -> Self {
        match room_type {
            RoomType::MeetingRoom => Self {
                meeting_room: !self.meeting_room,
                ..self
            },
            RoomType::DiscussionRoom => Self {
                discussion_room: !self.discussion_room,
                ..self
            },
            RoomType::ConferenceRoom => Self {
                conference_room: !self.conference_room,
                ..self
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrandFilter {
    pub colab: bool,
    pub itcd: bool,
}

impl BrandFilter {
    pub fn allows(&self, brand: Brand) -> bool {
        match brand {
            Brand::Colab => self.colab,
            Brand::Itcd => self.itcd,
        }
    }

    pub fn toggled(self, brand: Brand) -> Self {
        match brand {
            Brand::Colab => Self {
                colab: !self.colab,
                ..self
            },
            Brand::Itcd => Self {
                itcd: !self.itcd,
                ..self
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterSpec {
    pub status: StatusFilter,
    pub room_type: RoomTypeFilter,
    pub brand: BrandFilter,
}

impl Default for FilterSpec {
    fn default() -> Self {
        Self::all()
    }
}

impl FilterSpec {
    /// Everything visible. Also what "Reset Filters" goes back to.
    pub fn all() -> Self {
        Self {
            status: StatusFilter {
                confirmed: true,
                cancelled: true,
            },
            room_type: RoomTypeFilter {
                meeting_room: true,
                discussion_room: true,
                conference_room: true,
            },
            brand: BrandFilter {
                colab: true,
                itcd: true,
            },
        }
    }

    pub fn with_status_toggled(self, status: BookingStatus) -> Self {
        Self {
            status: self.status.toggled(status),
            ..self
        }
    }

    pub fn with_room_type_toggled(self, room_type: RoomType) -> Self {
        Self {
            room_type: self.room_type.toggled(room_type),
            ..self
        }
    }

    pub fn with_brand_toggled(self, brand: Brand) -> Self {
        Self {
            brand: self.brand.toggled(brand),
            ..self
        }
    }

    /// Start from `all()` and switch off each listed member once.
    /// Repeating a member in the list toggles it back on.
    pub fn hiding(statuses: &[BookingStatus], room_types: &[RoomType], brands: &[Brand]) -> Self {
        let spec = statuses
            .iter()
            .fold(Self::all(), |spec, s| spec.with_status_toggled(*s));
        let spec = room_types
            .iter()
            .fold(spec, |spec, t| spec.with_room_type_toggled(*t));
        brands
            .iter()
            .fold(spec, |spec, b| spec.with_brand_toggled(*b))
    }

    pub fn is_all(&self) -> bool {
        *self == Self::all()
    }

    /// Short description of what is hidden, for table/calendar footers.
    pub fn describe_hidden(&self) -> Vec<&'static str> {
        let mut hidden = Vec::new();
        for s in BookingStatus::ALL {
            if !self.status.allows(s) {
                hidden.push(s.as_str());
            }
        }
        for t in RoomType::ALL {
            if !self.room_type.allows(t) {
                hidden.push(t.label());
            }
        }
        for b in Brand::ALL {
            if !self.brand.allows(b) {
                hidden.push(b.as_str());
            }
        }
        hidden
    }
}
