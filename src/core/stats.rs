//! Per-brand booking counts.

use crate::models::booking::Booking;
use crate::models::brand::Brand;
use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BrandStats {
    pub total: usize,
    pub confirmed: usize,
    pub cancelled: usize,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BookingStats {
    pub colab: BrandStats,
    pub itcd: BrandStats,
}

impl BookingStats {
    /// Every record lands in one brand bucket, and within it in either
    /// `confirmed` or `cancelled`. Anything not CONFIRMED counts as cancelled.
    pub fn compute<'a, I>(bookings: I) -> Self
    where
        I: IntoIterator<Item = &'a Booking>,
    {
        let mut stats = Self::default();

        for booking in bookings {
            let bucket = stats.brand_mut(Brand::classify(booking));
            bucket.total += 1;
            if booking.is_confirmed() {
                bucket.confirmed += 1;
            } else {
                bucket.cancelled += 1;
            }
        }

        stats
    }

    pub fn brand(&self, brand: Brand) -> &BrandStats {
        match brand {
            Brand::Colab => &self.colab,
            Brand::Itcd => &self.itcd,
        }
    }

    fn brand_mut(&mut self, brand: Brand) -> &mut BrandStats {
        match brand {
            Brand::Colab => &mut self.colab,
            Brand::Itcd => &mut self.itcd,
        }
    }

    pub fn total(&self) -> usize {
        self.colab.total + self.itcd.total
    }

    pub fn confirmed(&self) -> usize {
        self.colab.confirmed + self.itcd.confirmed
    }

    pub fn cancelled(&self) -> usize {
        self.colab.cancelled + self.itcd.cancelled
    }
}
