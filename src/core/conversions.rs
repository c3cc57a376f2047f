use chrono::NaiveDate;

/// `YYYY-MM-DD`, the format of the stock, comparison and fluctuation endpoints.
pub(crate) fn iso_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// `YYYYMMDD`, the format the KRX-backed endpoints (sectors, trading flows) expect.
pub(crate) fn krx_date(date: NaiveDate) -> String {
    date.format("%Y%m%d").to_string()
}

/// Parse `YYYY-MM-DD`, `YYYYMMDD`, or the date part of an ISO timestamp
/// (`2024-01-02T00:00:00`, as pandas emits it).
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(s, "%Y%m%d"))
        .ok()
        .or_else(|| {
            s.get(..10)
                .and_then(|head| NaiveDate::parse_from_str(head, "%Y-%m-%d").ok())
        })
}
