use crate::cli::commands::open_dashboard;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::stats::{BookingStats, BrandStats};
use crate::errors::{AppError, AppResult};
use crate::models::brand::Brand;
use crate::utils::colors::{CYAN, GREEN, RESET, YELLOW};
use crate::utils::formatting::bold;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Stats { json, filters } = cmd {
        let dashboard = open_dashboard(cfg, filters.to_spec(), Default::default())?;
        let stats = dashboard.stats();

        if *json {
            let out = serde_json::json!({
                "total": stats.total(),
                "confirmed": stats.confirmed(),
                "cancelled": stats.cancelled(),
                "brands": stats,
            });
            let text = serde_json::to_string_pretty(&out)
                .map_err(|e| AppError::Other(format!("JSON serialization error: {e}")))?;
            println!("{text}");
        } else {
            print_stats(&stats);
        }
    }
    Ok(())
}

fn print_stats(stats: &BookingStats) {
    println!("{}", bold("Bookings"));
    println!("{}• Total:{}     {}", CYAN, RESET, stats.total());
    println!("{}• Confirmed:{} {}{}{}", CYAN, RESET, GREEN, stats.confirmed(), RESET);
    println!("{}• Cancelled:{} {}{}{}", CYAN, RESET, YELLOW, stats.cancelled(), RESET);

    for brand in Brand::ALL {
        println!();
        print_brand(brand, stats.brand(brand));
    }
}

fn print_brand(brand: Brand, s: &BrandStats) {
    let title = match brand {
        Brand::Colab => "CoLab",
        Brand::Itcd => "ITCD",
    };
    println!("{}", bold(title));
    println!(
        "  Total {}  |  Confirmed {}{}{}  |  Cancelled {}{}{}",
        s.total, GREEN, s.confirmed, RESET, YELLOW, s.cancelled, RESET
    );
}
