use crate::core::sort::{SortDirection, SortField, SortState};
use crate::export::ExportFormat;
use crate::models::{BookingStatus, Brand, FilterSpec, RoomType};
use clap::{Args, Parser, Subcommand};

/// Command-line interface definition for roombook
/// Browse room bookings exported as CSV files
#[derive(Parser)]
#[command(
    name = "roombook",
    version = env!("CARGO_PKG_VERSION"),
    about = "Browse room bookings from CSV exports as a calendar or a sortable table",
    long_about = None
)]
pub struct Cli {
    /// Override the directory holding the CSV sources
    #[arg(global = true, long = "dir", value_name = "DIR")]
    pub dir: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    /// Print diagnostic logs to stderr
    #[arg(global = true, long, short = 'v')]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Filter switches shared by every view. Each flag switches one member off
/// starting from "everything visible".
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    #[arg(long = "hide-status", value_enum, help = "Hide bookings with this status")]
    pub hide_status: Vec<BookingStatus>,

    #[arg(long = "hide-type", value_enum, help = "Hide bookings of this room type")]
    pub hide_type: Vec<RoomType>,

    #[arg(long = "hide-brand", value_enum, help = "Hide bookings of this brand")]
    pub hide_brand: Vec<Brand>,
}

impl FilterArgs {
    pub fn to_spec(&self) -> FilterSpec {
        FilterSpec::hiding(&self.hide_status, &self.hide_type, &self.hide_brand)
    }
}

#[derive(Args, Debug, Clone, Default)]
pub struct SortArgs {
    #[arg(long, value_enum, default_value = "date", help = "Column to sort on")]
    pub sort: SortField,

    #[arg(long, help = "Sort descending")]
    pub desc: bool,
}

impl SortArgs {
    pub fn to_state(&self) -> SortState {
        let state = SortState::new(self.sort, SortDirection::Asc);
        if self.desc {
            state.toggled(self.sort)
        } else {
            state
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write the default configuration file
    Init,

    /// Show or check the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,
    },

    /// Table view of the filtered bookings
    List {
        #[command(flatten)]
        filters: FilterArgs,

        #[command(flatten)]
        sort: SortArgs,
    },

    /// Month view of the filtered bookings
    Calendar {
        #[arg(long, short, value_name = "YYYY-MM", help = "Month to show")]
        month: Option<String>,

        #[arg(long, help = "Print calendar events as JSON instead")]
        json: bool,

        #[command(flatten)]
        filters: FilterArgs,
    },

    /// Totals and per-brand statistics of the filtered bookings
    Stats {
        #[arg(long, help = "Print statistics as JSON")]
        json: bool,

        #[command(flatten)]
        filters: FilterArgs,
    },

    /// Show a single booking
    Show {
        /// Booking uuid
        uuid: String,
    },

    /// Export the filtered bookings
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'e', help = "Export calendar events (JSON only)")]
        events: bool,

        #[arg(long, short = 'f')]
        force: bool,

        #[command(flatten)]
        filters: FilterArgs,

        #[command(flatten)]
        sort: SortArgs,
    },
}
