//! Year extraction from free-text object dates.
//!
//! Remote date fields are free text ("1885", "ca. 1890–1891",
//! "19th century"), so year filtering parses them locally instead of
//! trusting the remote range parameters.

use std::sync::OnceLock;

use regex::Regex;

fn year_pattern() -> &'static Regex {
    static YEAR_RE: OnceLock<Regex> = OnceLock::new();
    YEAR_RE.get_or_init(|| Regex::new(r"\d{3,4}").expect("static year pattern"))
}

/// Extract the (earliest, latest) year mentioned in a date string.
///
/// Returns `None` when no 3-4 digit year appears, e.g. "19th century".
pub fn year_span(date: &str) -> Option<(i32, i32)> {
    let mut span: Option<(i32, i32)> = None;

    for found in year_pattern().find_iter(date) {
        let Ok(year) = found.as_str().parse::<i32>() else {
            continue;
        };
        span = Some(match span {
            Some((min, max)) => (min.min(year), max.max(year)),
            None => (year, year),
        });
    }

    span
}

/// Whether the date's year span intersects the inclusive [from, to] range.
///
/// A date with no parseable year never matches; a missing bound is open.
pub fn in_range(date: &str, from: Option<i32>, to: Option<i32>) -> bool {
    let Some((earliest, latest)) = year_span(date) else {
        return false;
    };

    from.is_none_or(|from| latest >= from) && to.is_none_or(|to| earliest <= to)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_year() {
        assert_eq!(year_span("1885"), Some((1885, 1885)));
    }

    #[test]
    fn test_year_range() {
        assert_eq!(year_span("1890-1891"), Some((1890, 1891)));
    }

    #[test]
    fn test_circa_prefix() {
        assert_eq!(year_span("ca. 1885"), Some((1885, 1885)));
    }

    #[test]
    fn test_no_year() {
        assert_eq!(year_span("19th century"), None);
        assert_eq!(year_span(""), None);
    }

    #[test]
    fn test_in_range_keeps_exactly_the_overlapping_dates() {
        let range = (Some(1880), Some(1890));
        assert!(in_range("1885", range.0, range.1));
        assert!(in_range("1890-1891", range.0, range.1));
        assert!(!in_range("1979", range.0, range.1));
    }

    #[test]
    fn test_in_range_half_open_bounds() {
        assert!(in_range("1979", Some(1900), None));
        assert!(!in_range("1885", Some(1900), None));
        assert!(in_range("1885", None, Some(1900)));
        assert!(!in_range("1979", None, Some(1900)));
    }

    #[test]
    fn test_unparseable_date_never_matches() {
        assert!(!in_range("19th century", Some(1800), Some(1900)));
        assert!(!in_range("19th century", None, None));
    }
}
