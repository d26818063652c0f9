use crate::models::booking::Booking;
use crate::models::brand::Brand;
use crate::models::filter::FilterSpec;

/// Whether a single booking passes the filter.
///
/// Unrecognized statuses and room types never pass, whatever the switches say.
pub fn matches(booking: &Booking, spec: &FilterSpec) -> bool {
    let status_ok = booking
        .status()
        .is_some_and(|status| spec.status.allows(status));
    let room_ok = booking
        .room_type()
        .is_some_and(|room_type| spec.room_type.allows(room_type));

    status_ok && room_ok && spec.brand.allows(Brand::classify(booking))
}

/// Stable filter: keeps input order, borrows from `bookings`.
pub fn filter_bookings<'a, I>(bookings: I, spec: &FilterSpec) -> Vec<&'a Booking>
where
    I: IntoIterator<Item = &'a Booking>,
{
    bookings
        .into_iter()
        .filter(|b| matches(b, spec))
        .collect()
}

pub fn filter_owned(bookings: &[Booking], spec: &FilterSpec) -> Vec<Booking> {
    filter_bookings(bookings, spec).into_iter().cloned().collect()
}
