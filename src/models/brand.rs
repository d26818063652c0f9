use super::booking::Booking;
use clap::ValueEnum;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, ValueEnum)]
pub enum Brand {
    Colab,
    Itcd,
}

impl Brand {
    pub const ALL: [Brand; 2] = [Brand::Colab, Brand::Itcd];

    pub fn as_str(&self) -> &'static str {
        match self {
            Brand::Colab => "COLAB",
            Brand::Itcd => "ITCD",
        }
    }

    /// COLAB when the code literally contains "COLAB", ITCD otherwise.
    ///
    /// There is no "unknown" brand: the source file a record came from
    /// plays no part in the decision.
    pub fn classify(booking: &Booking) -> Self {
        Self::from_code(&booking.code)
    }

    pub fn from_code(code: &str) -> Self {
        if code.contains("COLAB") {
            Brand::Colab
        } else {
            Brand::Itcd
        }
    }
}
