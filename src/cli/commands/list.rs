use crate::cli::commands::open_dashboard;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::sort::{SortField, SortState};
use crate::errors::AppResult;
use crate::models::booking::Booking;
use crate::ui::messages::showing;
use crate::utils::formatting::{blank_or, describe_status, display_date};
use crate::utils::table::{Column, Table};

const COLUMNS: [SortField; 5] = [
    SortField::Date,
    SortField::StartTime,
    SortField::Name,
    SortField::Type,
    SortField::Status,
];

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { filters, sort } = cmd {
        let dashboard = open_dashboard(cfg, filters.to_spec(), sort.to_state())?;
        let rows = dashboard.table_rows();

        let table = build_table(&rows, dashboard.sort(), separator(cfg));
        print!("{}", table.render());

        showing(rows.len(), &dashboard.filters().describe_hidden());
    }
    Ok(())
}

pub(crate) fn build_table(rows: &[&Booking], sort: SortState, separator: char) -> Table {
    let columns = COLUMNS
        .iter()
        .map(|field| {
            if *field == sort.field {
                Column::new(format!("{} {}", field.header(), sort.direction.arrow()))
            } else {
                Column::new(field.header())
            }
        })
        .collect();

    let mut table = Table::new(columns).with_separator(separator);
    for b in rows {
        table.add_row(vec![
            display_date(b),
            b.time_range(),
            blank_or(&b.name, "--"),
            blank_or(&b.room_type, "--"),
            describe_status(b),
        ]);
    }
    table
}

fn separator(cfg: &Config) -> char {
    cfg.separator_char.chars().next().unwrap_or('-')
}
