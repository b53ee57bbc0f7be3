use chrono::{NaiveDate, NaiveDateTime};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Lenient date parsing for entry input and imported spreadsheet rows.
///
/// Accepts `YYYY-MM-DD`, `YYYY/MM/DD`, `MM/DD/YYYY` and a full
/// `YYYY-MM-DD HH:MM:SS` timestamp (time part discarded).
pub fn parse_entry_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();

    ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"]
        .iter()
        .find_map(|f| NaiveDate::parse_from_str(s, f).ok())
        .or_else(|| {
            ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"]
                .iter()
                .find_map(|f| NaiveDateTime::parse_from_str(s, f).ok())
                .map(|dt| dt.date())
        })
}

pub fn month_last_day(y: i32, m: u32) -> Option<u32> {
    if !(1..=12).contains(&m) {
        return None;
    }
    let first_next = if m == 12 {
        NaiveDate::from_ymd_opt(y + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(y, m + 1, 1)?
    };
    first_next.pred_opt().map(|d| chrono::Datelike::day(&d))
}
