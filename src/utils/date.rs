use chrono::NaiveDate;

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// English month name for 1..=12.
pub fn month_name(month: u32) -> Option<String> {
    NaiveDate::from_ymd_opt(2000, month, 1).map(|d| d.format("%B").to_string())
}

/// Full English weekday name ("Monday" … "Sunday").
pub fn weekday_name(date: NaiveDate) -> String {
    date.format("%A").to_string()
}
