use crate::query::QueryParams;
use chrono::{DateTime, Duration, Utc};

/// Query parameter the search filter uses for the upload date window
pub const DATE_PARAM: &str = "date";
/// Parameter the video endpoint expects instead of `date`
pub const DATE_GTE_PARAM: &str = "date_gte";

/// Upload date windows offered by the search filter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateWindow {
    Today,
    Week,
    Month,
    Year,
}

impl DateWindow {
    pub const ALL: [DateWindow; 4] = [
        DateWindow::Today,
        DateWindow::Week,
        DateWindow::Month,
        DateWindow::Year,
    ];

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Today" => Some(DateWindow::Today),
            "Week" => Some(DateWindow::Week),
            "Month" => Some(DateWindow::Month),
            "Year" => Some(DateWindow::Year),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DateWindow::Today => "Today",
            DateWindow::Week => "Week",
            DateWindow::Month => "Month",
            DateWindow::Year => "Year",
        }
    }

    fn days(&self) -> i64 {
        match self {
            DateWindow::Today => 1,
            DateWindow::Week => 7,
            DateWindow::Month => 31,
            DateWindow::Year => 365,
        }
    }

    /// Earliest publication time included in this window
    pub fn start(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        now - Duration::days(self.days())
    }
}

/// Turn the page's query string into the one sent to the video endpoint.
///
/// Only the `date` window is rewritten (into an absolute `date_gte`);
/// unknown date values are dropped and every other parameter passes through.
pub fn recommendation_query(query: &QueryParams, now: DateTime<Utc>) -> QueryParams {
    let Some(date) = query.get(DATE_PARAM) else {
        return query.clone();
    };

    let without_date = query.without(DATE_PARAM);
    match DateWindow::parse(date) {
        Some(window) => {
            let start = window.start(now).format("%d-%m-%y-%H-%M-%S").to_string();
            without_date.with_param(DATE_GTE_PARAM, &start)
        }
        None => without_date,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 15, 12, 30, 45).unwrap()
    }

    #[test]
    fn test_query_without_date_is_forwarded_verbatim() {
        let query = QueryParams::parse("offset=40&category=news");
        let forwarded = recommendation_query(&query, fixed_now());

        assert_eq!(forwarded.to_string(), "offset=40&category=news");
    }

    #[test]
    fn test_week_window_becomes_date_gte() {
        let query = QueryParams::parse("date=Week&language=en&offset=20");
        let forwarded = recommendation_query(&query, fixed_now());

        assert_eq!(
            forwarded.to_string(),
            "language=en&offset=20&date_gte=08-03-24-12-30-45"
        );
    }

    #[test]
    fn test_unknown_date_is_dropped() {
        let query = QueryParams::parse("date=Decade&language=en");
        let forwarded = recommendation_query(&query, fixed_now());

        assert_eq!(forwarded.to_string(), "language=en");
    }
}
