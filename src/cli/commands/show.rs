use crate::cli::commands::open_dashboard;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::brand::Brand;
use crate::utils::formatting::booking_details;

/// Detail of one booking, looked up in the unfiltered set.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Show { uuid } = cmd {
        let dashboard = open_dashboard(cfg, Default::default(), Default::default())?;
        let booking = dashboard
            .bookings()
            .and_then(|b| b.find(uuid))
            .ok_or_else(|| AppError::BookingNotFound(uuid.clone()))?;

        println!("{}", booking_details(booking));
        println!("Brand: {}", Brand::classify(booking).as_str());
        println!("Code: {}", booking.code);
    }
    Ok(())
}
