use chrono::{Datelike, NaiveDate};

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// "YYYY-MM" → (year, month)
pub fn parse_month(p: &str) -> Result<(i32, u32), String> {
    NaiveDate::parse_from_str(&format!("{}-01", p.trim()), "%Y-%m-%d")
        .map(|d| (d.year(), d.month()))
        .map_err(|_| format!("Invalid month: {p} (expected YYYY-MM)"))
}

pub fn all_days_of_month(year: i32, month: u32) -> Vec<NaiveDate> {
    let mut out = Vec::new();
    let mut d = NaiveDate::from_ymd_opt(year, month, 1);

    while let Some(day) = d {
        if day.month() != month {
            break;
        }
        out.push(day);
        d = day.succ_opt();
    }

    out
}

/// "2022-11-03" → "03 Nov 2022"; anything unparseable is returned as is.
pub fn format_display(raw: &str) -> String {
    match parse_date(raw) {
        Some(d) => d.format("%d %b %Y").to_string(),
        None => raw.to_string(),
    }
}

/// "Thu 03"
pub fn day_label(d: &NaiveDate) -> String {
    d.format("%a %d").to_string()
}
