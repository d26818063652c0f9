use crate::cli::commands::open_dashboard;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calendar::{CalendarEvent, events_by_date};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{header, showing, warning};
use crate::utils::colors::{color_for_room_type, colorize};
use crate::utils::date::{all_days_of_month, day_label, parse_month};
use crate::utils::formatting::italic;
use chrono::NaiveDate;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Calendar {
        month,
        json,
        filters,
    } = cmd
    {
        let dashboard = open_dashboard(cfg, filters.to_spec(), Default::default())?;
        let events = dashboard.events();

        if *json {
            let text = serde_json::to_string_pretty(&events)
                .map_err(|e| AppError::Other(format!("JSON serialization error: {e}")))?;
            println!("{text}");
            return Ok(());
        }

        let month = month.as_deref().unwrap_or(&cfg.initial_month);
        let (year, m) = parse_month(month).map_err(AppError::InvalidDate)?;
        let days = all_days_of_month(year, m);

        if let Some(first) = days.first() {
            header(first.format("%B %Y"));
        }

        let by_date = events_by_date(events);
        let mut shown = 0;

        for day in &days {
            let key = day.format("%Y-%m-%d").to_string();
            if let Some(day_events) = by_date.get(&key) {
                print_day(day, day_events);
                shown += day_events.len();
            }
        }

        if shown == 0 {
            warning(format!("No bookings in {month}"));
        }
        showing(shown, &dashboard.filters().describe_hidden());
    }
    Ok(())
}

fn print_day(day: &NaiveDate, events: &[CalendarEvent<'_>]) {
    println!("{}", day_label(day));
    for ev in events {
        let b = ev.booking;
        let mut line = format!(
            "  {} {} - {}  {}",
            colorize("■", color_for_room_type(b)),
            b.start_time,
            b.end_time,
            ev.title
        );
        if b.is_cancelled() {
            line.push_str(&format!("  {}", italic("Cancelled")));
        }
        println!("{line}");
    }
}
