use chrono::{DateTime, NaiveDate};

const ISO_DATE: &str = "%Y-%m-%d";
const LONG_DATE: &str = "%B %-d, %Y";

pub fn parse_order_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(raw, ISO_DATE)
        .ok()
        .or_else(|| NaiveDate::parse_from_str(raw, LONG_DATE).ok())
        .or_else(|| {
            DateTime::parse_from_rfc3339(raw)
                .ok()
                .map(|ts| ts.date_naive())
        })
}

pub fn display_order_date(raw: &str) -> String {
    match parse_order_date(raw) {
        Some(date) => date.format(LONG_DATE).to_string(),
        None => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_iso_long_and_timestamp_forms() {
        let expected = NaiveDate::from_ymd_opt(2021, 10, 7);
        assert_eq!(parse_order_date("2021-10-07"), expected);
        assert_eq!(parse_order_date("October 7, 2021"), expected);
        assert_eq!(parse_order_date("2021-10-07T09:53:57-07:00"), expected);
        assert_eq!(parse_order_date("   "), None);
    }

    #[test]
    fn display_falls_back_to_raw_text() {
        assert_eq!(display_order_date("2021-10-07"), "October 7, 2021");
        assert_eq!(display_order_date("next tuesday"), "next tuesday");
    }
}
