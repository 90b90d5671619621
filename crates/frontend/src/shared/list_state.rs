//! Record List Controller state
//!
//! Holds the unfiltered collection exactly as last fetched and derives the
//! visible rows (filter → sort → page slice) on demand. Every fetch is tagged
//! with a generation so an answer for an older fetch is dropped.

use super::list_utils::{filter_list, sort_list, Searchable, Sortable};

pub const DEFAULT_PAGE_SIZE: usize = 10;
pub const PAGE_SIZE_OPTIONS: [usize; 3] = [10, 25, 50];

/// Identifies one fetch issued by a list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket(u64);

#[derive(Debug, Clone, PartialEq)]
pub struct ListState<T> {
    items: Vec<T>,
    pub filter: String,
    pub sort_field: String,
    pub sort_ascending: bool,
    pub page: usize,
    pub page_size: usize,
    pub is_loaded: bool,
    pub loading: bool,
    pub error: Option<String>,
    generation: u64,
}

impl<T: Searchable + Sortable + Clone> ListState<T> {
    pub fn new(sort_field: &str) -> Self {
        Self {
            items: Vec::new(),
            filter: String::new(),
            sort_field: sort_field.to_string(),
            sort_ascending: true,
            page: 0,
            page_size: DEFAULT_PAGE_SIZE,
            is_loaded: false,
            loading: false,
            error: None,
            generation: 0,
        }
    }

    /// Start a (re)fetch; any ticket handed out before becomes stale
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.generation += 1;
        self.loading = true;
        FetchTicket(self.generation)
    }

    /// Apply a fetch result. Returns `false` when the ticket is stale and
    /// nothing changed.
    pub fn apply_fetch(&mut self, ticket: FetchTicket, result: Result<Vec<T>, String>) -> bool {
        if ticket.0 != self.generation {
            log::warn!(
                "Discarding stale list response (generation {} < {})",
                ticket.0,
                self.generation
            );
            return false;
        }
        self.loading = false;
        match result {
            Ok(items) => {
                self.items = items;
                self.is_loaded = true;
                self.error = None;
                self.clamp_page();
            }
            Err(message) => self.error = Some(message),
        }
        true
    }

    /// Full collection as last fetched
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Recomputed on every keystroke; resets paging
    pub fn set_filter(&mut self, value: impl Into<String>) {
        self.filter = value.into();
        self.page = 0;
    }

    pub fn toggle_sort(&mut self, field: &str) {
        if self.sort_field == field {
            self.sort_ascending = !self.sort_ascending;
        } else {
            self.sort_field = field.to_string();
            self.sort_ascending = true;
        }
    }

    pub fn go_to_page(&mut self, page: usize) {
        self.page = page;
        self.clamp_page();
    }

    pub fn set_page_size(&mut self, size: usize) {
        self.page_size = size.max(1);
        self.page = 0;
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    /// Filtered and sorted, not paged
    pub fn filtered(&self) -> Vec<T> {
        let mut rows = filter_list(&self.items, &self.filter);
        sort_list(&mut rows, &self.sort_field, self.sort_ascending);
        rows
    }

    pub fn total_count(&self) -> usize {
        self.items
            .iter()
            .filter(|item| item.matches_filter(&self.filter))
            .count()
    }

    pub fn total_pages(&self) -> usize {
        let count = self.total_count();
        if count == 0 {
            1
        } else {
            (count + self.page_size - 1) / self.page_size
        }
    }

    /// Rows of the current page
    pub fn visible(&self) -> Vec<T> {
        let rows = self.filtered();
        let page = self.page.min(self.total_pages().saturating_sub(1));
        let start = page * self.page_size;
        let end = (start + self.page_size).min(rows.len());
        rows.get(start..end).map(<[T]>::to_vec).unwrap_or_default()
    }

    fn clamp_page(&mut self) {
        let total_pages = self.total_pages();
        if self.page >= total_pages {
            self.page = total_pages.saturating_sub(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_utils::cmp_text;
    use std::cmp::Ordering;

    #[derive(Clone, Debug, PartialEq)]
    struct Row {
        name: String,
        location: String,
    }

    fn row(name: &str, location: &str) -> Row {
        Row {
            name: name.into(),
            location: location.into(),
        }
    }

    impl Searchable for Row {
        fn search_field(&self) -> &str {
            &self.location
        }
    }

    impl Sortable for Row {
        fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
            match field {
                "location" => cmp_text(&self.location, &other.location),
                _ => cmp_text(&self.name, &other.name),
            }
        }
    }

    fn loaded(rows: Vec<Row>) -> ListState<Row> {
        let mut state = ListState::new("name");
        let ticket = state.begin_fetch();
        assert!(state.apply_fetch(ticket, Ok(rows)));
        state
    }

    #[test]
    fn filter_by_location_substring() {
        let mut state = loaded(vec![
            row("Central", "Main St"),
            row("Harbour", "Dock Rd"),
            row("Corner", "main square"),
        ]);
        state.set_filter("MAIN");
        let names: Vec<_> = state.filtered().into_iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["Central", "Corner"]);
        assert_eq!(state.total_count(), 2);

        state.set_filter("");
        assert_eq!(state.filtered().len(), 3);
        assert_eq!(state.items().len(), 3);
    }

    #[test]
    fn stale_fetch_is_discarded() {
        let mut state: ListState<Row> = ListState::new("name");
        let first = state.begin_fetch();
        let second = state.begin_fetch();
        assert!(state.apply_fetch(second, Ok(vec![row("New", "x")])));
        assert!(!state.apply_fetch(first, Ok(vec![row("Old", "y")])));
        assert_eq!(state.items()[0].name, "New");
        assert!(!state.loading);
    }

    #[test]
    fn failed_fetch_keeps_previous_rows() {
        let mut state = loaded(vec![row("Central", "Main St")]);
        let ticket = state.begin_fetch();
        state.apply_fetch(ticket, Err("No response from server".into()));
        assert_eq!(state.error.as_deref(), Some("No response from server"));
        assert_eq!(state.items().len(), 1);
        state.dismiss_error();
        assert_eq!(state.error, None);
    }

    #[test]
    fn paging_slices_and_clamps() {
        let rows = (0..23).map(|i| row(&format!("cafe{:02}", i), "x")).collect();
        let mut state = loaded(rows);
        assert_eq!(state.total_pages(), 3);
        assert_eq!(state.visible().len(), 10);

        state.go_to_page(2);
        assert_eq!(state.visible().len(), 3);
        assert_eq!(state.visible()[0].name, "cafe20");

        state.go_to_page(99);
        assert_eq!(state.page, 2);

        state.set_page_size(25);
        assert_eq!(state.total_pages(), 1);
        assert_eq!(state.visible().len(), 23);
    }

    #[test]
    fn refetch_with_fewer_rows_clamps_page() {
        let rows = (0..15).map(|i| row(&format!("c{:02}", i), "x")).collect();
        let mut state = loaded(rows);
        state.go_to_page(1);
        let ticket = state.begin_fetch();
        state.apply_fetch(ticket, Ok(vec![row("only", "x")]));
        assert_eq!(state.page, 0);
        assert_eq!(state.visible().len(), 1);
    }

    #[test]
    fn empty_list_has_one_page() {
        let state = loaded(vec![]);
        assert_eq!(state.total_pages(), 1);
        assert!(state.visible().is_empty());
    }

    #[test]
    fn toggle_sort_flips_then_switches_field() {
        let mut state = loaded(vec![row("b", "2"), row("a", "3"), row("c", "1")]);
        state.toggle_sort("name");
        assert!(!state.sort_ascending);
        assert_eq!(state.filtered()[0].name, "c");

        state.toggle_sort("location");
        assert!(state.sort_ascending);
        assert_eq!(state.sort_field, "location");
        assert_eq!(state.filtered()[0].name, "c");
    }
}
