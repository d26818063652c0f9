pub mod booking;
pub mod brand;
pub mod filter;
pub mod room_type;

pub use booking::{Booking, BookingStatus, PartitionedBookings};
pub use brand::Brand;
pub use filter::FilterSpec;
pub use room_type::RoomType;
