//! List query helpers: search, categorical filters, sort, pagination.
//!
//! Every resource list in the dashboard applies the same client-side
//! semantics when the backend is unavailable:
//! - free-text search is a case-insensitive substring match OR'd across a
//!   fixed set of fields;
//! - categorical filters are exact-match, with `"all"` or the empty string
//!   acting as "no constraint";
//! - sorts are stable, case-insensitive for strings, timestamp-ordered for
//!   date-like fields;
//! - pagination is 1-indexed and applied after filter + sort.

use chrono::DateTime;

/// Fixed page size used by every list view.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Sort direction for list views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// Sentinel check: `"all"` (any case) or empty means "no constraint".
pub fn is_all_sentinel(filter: &str) -> bool {
    filter.is_empty() || filter.eq_ignore_ascii_case("all")
}

/// Exact-match categorical filter with sentinel handling.
pub fn matches_choice(filter: &str, value: &str) -> bool {
    is_all_sentinel(filter) || filter == value
}

/// Case-insensitive substring search OR'd across fields.
///
/// An empty query matches everything.
pub fn matches_search(query: &str, fields: &[&str]) -> bool {
    let query = query.trim();
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    fields
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

/// Stable case-insensitive sort on a string key.
pub fn sort_ci_by<T, F>(items: &mut [T], direction: SortDirection, key: F)
where
    F: Fn(&T) -> &str,
{
    items.sort_by(|a, b| {
        let ord = key(a).to_lowercase().cmp(&key(b).to_lowercase());
        match direction {
            SortDirection::Ascending => ord,
            SortDirection::Descending => ord.reverse(),
        }
    });
}

/// Stable sort on a date-like key, comparing parsed timestamps.
///
/// Unparseable values sort after parseable ones in either direction.
pub fn sort_by_date<T, K, F>(items: &mut [T], direction: SortDirection, key: F)
where
    K: AsRef<str>,
    F: Fn(&T) -> K,
{
    items.sort_by(|a, b| {
        let ta = parse_timestamp(key(a).as_ref());
        let tb = parse_timestamp(key(b).as_ref());
        match (ta, tb) {
            (Some(ta), Some(tb)) => match direction {
                SortDirection::Ascending => ta.cmp(&tb),
                SortDirection::Descending => tb.cmp(&ta),
            },
            (Some(_), None) => std::cmp::Ordering::Less,
            (None, Some(_)) => std::cmp::Ordering::Greater,
            (None, None) => std::cmp::Ordering::Equal,
        }
    });
}

fn parse_timestamp(raw: &str) -> Option<i64> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.timestamp_millis());
    }
    // Bare dates ("2024-01-01") appear in older fixtures.
    if let Ok(date) = chrono::NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(
            date.and_hms_opt(0, 0, 0)
                .map(|dt| dt.and_utc().timestamp_millis())
                .unwrap_or(0),
        );
    }
    None
}

/// 1-indexed page slice, applied after filter + sort.
///
/// A page past the end yields an empty vec; page 0 is treated as page 1.
pub fn paginate<T: Clone>(items: &[T], page: usize, page_size: usize) -> Vec<T> {
    let page = page.max(1);
    let start = (page - 1) * page_size;
    if start >= items.len() {
        return Vec::new();
    }
    let end = (start + page_size).min(items.len());
    items[start..end].to_vec()
}

/// Number of pages needed for `total` items.
pub fn total_pages(total: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total.div_ceil(page_size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_sentinel() {
        assert!(is_all_sentinel(""));
        assert!(is_all_sentinel("all"));
        assert!(is_all_sentinel("All"));
        assert!(is_all_sentinel("ALL"));
        assert!(!is_all_sentinel("Active"));
    }

    #[test]
    fn test_matches_choice() {
        assert!(matches_choice("all", "Pending"));
        assert!(matches_choice("", "Pending"));
        assert!(matches_choice("Pending", "Pending"));
        assert!(!matches_choice("Pending", "Completed"));
    }

    #[test]
    fn test_search_is_case_insensitive() {
        assert!(matches_search("RIVERSIDE", &["Riverside Park Playground"]));
        assert!(matches_search("riverside", &["RIVERSIDE PARK"]));
    }

    #[test]
    fn test_search_ors_across_fields() {
        let fields = ["P-2024-001", "Riverside Park"];
        assert!(matches_search("riverside", &fields));
        assert!(matches_search("2024", &fields));
        assert!(!matches_search("harbor", &fields));
    }

    #[test]
    fn test_empty_search_matches_everything() {
        assert!(matches_search("", &["anything"]));
        assert!(matches_search("   ", &["anything"]));
    }

    #[test]
    fn test_sort_ci_ascending() {
        let mut items = vec!["banana", "Apple", "cherry"];
        sort_ci_by(&mut items, SortDirection::Ascending, |s| s);
        assert_eq!(items, vec!["Apple", "banana", "cherry"]);
    }

    #[test]
    fn test_sort_ci_descending() {
        let mut items = vec!["banana", "Apple", "cherry"];
        sort_ci_by(&mut items, SortDirection::Descending, |s| s);
        assert_eq!(items, vec!["cherry", "banana", "Apple"]);
    }

    #[test]
    fn test_sort_ci_is_stable_for_ties() {
        let mut items = vec![("apple", 1), ("APPLE", 2), ("apple", 3)];
        sort_ci_by(&mut items, SortDirection::Ascending, |(s, _)| s);
        assert_eq!(
            items.iter().map(|(_, n)| *n).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
    }

    #[test]
    fn test_sort_by_date_descending() {
        let mut items = vec!["2023-01-01", "2024-01-01"];
        sort_by_date(&mut items, SortDirection::Descending, |s| *s);
        assert_eq!(items, vec!["2024-01-01", "2023-01-01"]);
    }

    #[test]
    fn test_sort_by_date_ascending() {
        let mut items = vec!["2024-01-01", "2023-01-01"];
        sort_by_date(&mut items, SortDirection::Ascending, |s| *s);
        assert_eq!(items, vec!["2023-01-01", "2024-01-01"]);
    }

    #[test]
    fn test_sort_by_date_rfc3339() {
        let mut items = vec!["2024-06-01T12:00:00Z", "2024-06-01T09:30:00Z"];
        sort_by_date(&mut items, SortDirection::Ascending, |s| *s);
        assert_eq!(items, vec!["2024-06-01T09:30:00Z", "2024-06-01T12:00:00Z"]);
    }

    #[test]
    fn test_unparseable_dates_sort_last() {
        let mut items = vec!["garbage", "2024-01-01", "2023-01-01"];
        sort_by_date(&mut items, SortDirection::Descending, |s| *s);
        assert_eq!(items, vec!["2024-01-01", "2023-01-01", "garbage"]);

        let mut items = vec!["garbage", "2023-01-01", "2024-01-01"];
        sort_by_date(&mut items, SortDirection::Ascending, |s| *s);
        assert_eq!(items, vec!["2023-01-01", "2024-01-01", "garbage"]);
    }

    #[test]
    fn test_paginate_first_page() {
        let items: Vec<i32> = (1..=25).collect();
        assert_eq!(paginate(&items, 1, 10), (1..=10).collect::<Vec<_>>());
    }

    #[test]
    fn test_paginate_partial_last_page() {
        let items: Vec<i32> = (1..=25).collect();
        assert_eq!(paginate(&items, 3, 10), (21..=25).collect::<Vec<_>>());
    }

    #[test]
    fn test_paginate_past_end_is_empty() {
        let items: Vec<i32> = (1..=5).collect();
        assert!(paginate(&items, 4, 10).is_empty());
    }

    #[test]
    fn test_paginate_page_zero_treated_as_one() {
        let items: Vec<i32> = (1..=5).collect();
        assert_eq!(paginate(&items, 0, 10), items);
    }

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, 10), 0);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(total_pages(25, 10), 3);
    }
}
