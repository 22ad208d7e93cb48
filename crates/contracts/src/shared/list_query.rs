//! Client-side list pipeline: text and range predicates, sort direction,
//! page slicing and the page/filter controls every list page keeps.

use std::cmp::Ordering;
use thiserror::Error;

/// Pages are numbered from 1 in the UI.
pub const FIRST_PAGE: usize = 1;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterInputError {
    #[error("'{input}' is not a number")]
    InvalidNumber { input: String },
    #[error("'{input}' is not a date (expected YYYY-MM-DD)")]
    InvalidDate { input: String },
}

/// Parse one bound of a numeric range filter.
///
/// Empty input means "unbounded".
pub fn parse_bound(raw: &str) -> Result<Option<f64>, FilterInputError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .map(Some)
        .ok_or_else(|| FilterInputError::InvalidNumber {
            input: trimmed.to_string(),
        })
}

/// Case-insensitive substring match. An empty needle matches everything.
pub fn contains_ci(haystack: &str, needle: &str) -> bool {
    let needle = needle.trim();
    needle.is_empty() || haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Inclusive numeric range; `None` on either side is unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct NumericRange {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl NumericRange {
    pub fn contains(&self, value: f64) -> bool {
        self.min.map_or(true, |min| value >= min) && self.max.map_or(true, |max| value <= max)
    }

    pub fn is_unbounded(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }
}

/// Builds ranges from raw inputs, remembering which fields did not parse.
///
/// A malformed bound is dropped (the range stays open on that side) and the
/// field name is reported so the page can flag the input.
#[derive(Debug, Default)]
pub struct RangeParser {
    invalid_fields: Vec<&'static str>,
}

impl RangeParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bound(&mut self, field: &'static str, raw: &str) -> Option<f64> {
        match parse_bound(raw) {
            Ok(value) => value,
            Err(_) => {
                self.invalid_fields.push(field);
                None
            }
        }
    }

    pub fn range(
        &mut self,
        min_field: &'static str,
        min_raw: &str,
        max_field: &'static str,
        max_raw: &str,
    ) -> NumericRange {
        NumericRange {
            min: self.bound(min_field, min_raw),
            max: self.bound(max_field, max_raw),
        }
    }

    pub fn mark_invalid(&mut self, field: &'static str) {
        self.invalid_fields.push(field);
    }

    pub fn into_invalid_fields(self) -> Vec<&'static str> {
        self.invalid_fields
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

/// Alphabetic comparison ignoring case.
pub fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

/// Total order over floats for sort comparators.
pub fn compare_f64(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

/// Result of running a page filter over a collection.
#[derive(Debug, Clone, PartialEq)]
pub struct Filtered<T> {
    pub rows: Vec<T>,
    /// Filter inputs that were ignored because they did not parse.
    pub invalid_fields: Vec<&'static str>,
}

/// A page's filter + sort state applied to its rows.
pub trait ListFilter<T> {
    fn apply(&self, rows: &[T]) -> Filtered<T>;

    /// Number of filter inputs differing from their defaults.
    fn active_count(&self) -> usize;

    fn has_active(&self) -> bool {
        self.active_count() > 0
    }
}

/// Count non-empty raw inputs.
pub fn count_non_empty(fields: &[&str]) -> usize {
    fields.iter().filter(|f| !f.trim().is_empty()).count()
}

pub fn total_pages(total_count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total_count.div_ceil(page_size)
}

/// One page of a filtered collection plus the counts behind
/// "showing X–Y of Z".
#[derive(Debug, Clone, PartialEq)]
pub struct PageSlice<T> {
    pub items: Vec<T>,
    /// 1-based page actually shown (clamped into range).
    pub page: usize,
    pub page_size: usize,
    pub total_pages: usize,
    pub total_count: usize,
}

impl<T> PageSlice<T> {
    /// 1-based position of the first row on this page, 0 when empty.
    pub fn showing_from(&self) -> usize {
        if self.items.is_empty() {
            0
        } else {
            (self.page - 1) * self.page_size + 1
        }
    }

    pub fn showing_to(&self) -> usize {
        if self.items.is_empty() {
            0
        } else {
            self.showing_from() + self.items.len() - 1
        }
    }

    pub fn has_previous(&self) -> bool {
        self.page > FIRST_PAGE
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}

/// Slice `items` to the requested 1-based page. Out-of-range pages are
/// clamped to the nearest valid one.
pub fn paginate<T: Clone>(items: &[T], page: usize, page_size: usize) -> PageSlice<T> {
    let total_count = items.len();
    let total_pages = total_pages(total_count, page_size);
    let page = page.clamp(FIRST_PAGE, total_pages.max(FIRST_PAGE));
    let start = (page - 1).saturating_mul(page_size).min(total_count);
    let end = start.saturating_add(page_size).min(total_count);

    PageSlice {
        items: items[start..end].to_vec(),
        page,
        page_size,
        total_pages,
        total_count,
    }
}

/// Filter state plus current page. Every filter edit sends the user back to
/// the first page.
#[derive(Debug, Clone, PartialEq)]
pub struct ListControls<F> {
    pub filter: F,
    pub page: usize,
}

impl<F: Default> Default for ListControls<F> {
    fn default() -> Self {
        Self {
            filter: F::default(),
            page: FIRST_PAGE,
        }
    }
}

impl<F: Default> ListControls<F> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn edit_filter(&mut self, edit: impl FnOnce(&mut F)) {
        edit(&mut self.filter);
        self.page = FIRST_PAGE;
    }

    pub fn clear(&mut self) {
        self.filter = F::default();
        self.page = FIRST_PAGE;
    }

    pub fn go_to(&mut self, page: usize) {
        self.page = page.max(FIRST_PAGE);
    }

    /// Run the filter and cut the current page.
    pub fn view<T: Clone>(&self, rows: &[T], page_size: usize) -> ListView<T>
    where
        F: ListFilter<T>,
    {
        let filtered = self.filter.apply(rows);
        ListView {
            page: paginate(&filtered.rows, self.page, page_size),
            unfiltered_count: rows.len(),
            invalid_fields: filtered.invalid_fields,
        }
    }
}

/// What a list page renders: the current page and the counts around it.
#[derive(Debug, Clone, PartialEq)]
pub struct ListView<T> {
    pub page: PageSlice<T>,
    pub unfiltered_count: usize,
    pub invalid_fields: Vec<&'static str>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bound() {
        assert_eq!(parse_bound(""), Ok(None));
        assert_eq!(parse_bound("   "), Ok(None));
        assert_eq!(parse_bound("12.5"), Ok(Some(12.5)));
        assert_eq!(parse_bound(" -3 "), Ok(Some(-3.0)));
        assert_eq!(
            parse_bound("12a"),
            Err(FilterInputError::InvalidNumber {
                input: "12a".to_string()
            })
        );
        assert!(parse_bound("NaN").is_err());
    }

    #[test]
    fn test_contains_ci() {
        assert!(contains_ci("Laptop Pro", "lap"));
        assert!(contains_ci("Laptop Pro", "PRO"));
        assert!(contains_ci("anything", ""));
        assert!(!contains_ci("Laptop", "phone"));
    }

    #[test]
    fn test_numeric_range_is_inclusive() {
        let range = NumericRange {
            min: Some(10.0),
            max: Some(20.0),
        };
        assert!(range.contains(10.0));
        assert!(range.contains(20.0));
        assert!(!range.contains(9.99));
        assert!(!range.contains(20.01));
        assert!(NumericRange::default().contains(f64::MAX));
    }

    #[test]
    fn test_range_parser_drops_malformed_bound() {
        let mut parser = RangeParser::new();
        let range = parser.range("price_min", "abc", "price_max", "50");
        assert_eq!(range.min, None);
        assert_eq!(range.max, Some(50.0));
        assert_eq!(parser.into_invalid_fields(), vec!["price_min"]);
    }

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, 8), 0);
        assert_eq!(total_pages(8, 8), 1);
        assert_eq!(total_pages(9, 8), 2);
        assert_eq!(total_pages(5, 0), 0);
    }

    #[test]
    fn test_paginate_last_page_remainder() {
        let items: Vec<u32> = (1..=23).collect();
        let last = paginate(&items, 3, 10);
        assert_eq!(last.total_pages, 3);
        assert_eq!(last.items, vec![21, 22, 23]);
        assert_eq!(last.showing_from(), 21);
        assert_eq!(last.showing_to(), 23);
        assert!(!last.has_next());
        assert!(last.has_previous());
    }

    #[test]
    fn test_paginate_full_last_page() {
        let items: Vec<u32> = (1..=24).collect();
        let last = paginate(&items, 3, 8);
        assert_eq!(last.items.len(), 8);
    }

    #[test]
    fn test_paginate_clamps_page() {
        let items: Vec<u32> = (1..=5).collect();
        assert_eq!(paginate(&items, 0, 2).page, 1);
        let beyond = paginate(&items, 9, 2);
        assert_eq!(beyond.page, 3);
        assert_eq!(beyond.items, vec![5]);

        let empty: Vec<u32> = Vec::new();
        let page = paginate(&empty, 4, 10);
        assert_eq!(page.page, 1);
        assert_eq!(page.total_pages, 0);
        assert_eq!(page.showing_from(), 0);
        assert_eq!(page.showing_to(), 0);
    }

    #[derive(Debug, Clone, Default, PartialEq)]
    struct MinFilter {
        min: String,
    }

    impl ListFilter<u32> for MinFilter {
        fn apply(&self, rows: &[u32]) -> Filtered<u32> {
            let mut parser = RangeParser::new();
            let min = parser.bound("min", &self.min);
            Filtered {
                rows: rows
                    .iter()
                    .copied()
                    .filter(|r| min.map_or(true, |m| f64::from(*r) >= m))
                    .collect(),
                invalid_fields: parser.into_invalid_fields(),
            }
        }

        fn active_count(&self) -> usize {
            count_non_empty(&[&self.min])
        }
    }

    #[test]
    fn test_controls_reset_page_on_filter_edit() {
        let rows: Vec<u32> = (1..=30).collect();
        let mut controls = ListControls::<MinFilter>::new();
        controls.go_to(3);
        assert_eq!(controls.view(&rows, 10).page.items.first(), Some(&21));

        controls.edit_filter(|f| f.min = "25".to_string());
        assert_eq!(controls.page, FIRST_PAGE);
        let view = controls.view(&rows, 10);
        assert_eq!(view.page.total_count, 6);
        assert_eq!(view.unfiltered_count, 30);
        assert!(controls.filter.has_active());
    }

    #[test]
    fn test_controls_clear_restores_everything() {
        let rows: Vec<u32> = (1..=30).collect();
        let mut controls = ListControls::<MinFilter>::new();
        controls.edit_filter(|f| f.min = "29".to_string());
        controls.go_to(2);
        controls.clear();

        assert_eq!(controls.page, FIRST_PAGE);
        assert_eq!(controls.filter, MinFilter::default());
        let view = controls.view(&rows, 10);
        assert_eq!(view.page.total_count, 30);
        assert!(view.invalid_fields.is_empty());
    }

    #[test]
    fn test_invalid_bound_does_not_hide_rows() {
        let rows: Vec<u32> = (1..=4).collect();
        let mut controls = ListControls::<MinFilter>::new();
        controls.edit_filter(|f| f.min = "x".to_string());
        let view = controls.view(&rows, 10);
        assert_eq!(view.page.total_count, 4);
        assert_eq!(view.invalid_fields, vec!["min"]);
    }
}
