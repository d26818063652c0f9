use std::fmt;

/// ANSI colors
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

const FG_BLUE: &str = "\x1b[34m";
const FG_GREEN: &str = "\x1b[32m";
const FG_YELLOW: &str = "\x1b[33m";
const FG_RED: &str = "\x1b[31m";

/// Icons
const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";
const ICON_ERR: &str = "❌";

pub fn info<T: fmt::Display>(msg: T) {
    println!("{}{}{} {}{}", FG_BLUE, BOLD, ICON_INFO, RESET, msg);
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{}{}{} {}{}", FG_GREEN, BOLD, ICON_OK, RESET, msg);
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{}{}{} {}{}", FG_YELLOW, BOLD, ICON_WARN, RESET, msg);
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{}{}{} {}{}", FG_RED, BOLD, ICON_ERR, RESET, msg);
}

/// Section header, e.g. "====================== November 2022"
pub fn header<T: fmt::Display>(msg: T) {
    println!("{}{}====================== {}{}\n", FG_BLUE, BOLD, msg, RESET);
}

/// Shown while the four sources are read.
pub fn loading<T: fmt::Display>(dir: T) {
    eprintln!("{}⏳ Loading bookings from {}…{}", FG_BLUE, dir, RESET);
}

/// Footer line under tables and calendars: "Showing 12 bookings (hidden: ITCD)".
pub fn showing(count: usize, hidden: &[&str]) {
    let noun = if count == 1 { "booking" } else { "bookings" };
    if hidden.is_empty() {
        println!("\nShowing {count} {noun}");
    } else {
        println!(
            "\nShowing {count} {noun} {}(hidden: {}){}",
            FG_YELLOW,
            hidden.join(", "),
            RESET
        );
    }
}
