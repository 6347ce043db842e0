//! In-memory filtering of fetched records and the per-view record list.
//!
//! Filtering mirrors the admin console: a case-insensitive substring match
//! over a record's searchable text fields, AND-ed with an optional exact
//! match on its categorical field. Both filters are pass-through when unset.

use serde::Deserialize;

/// Category value meaning "no category filter".
pub const CATEGORY_ALL: &str = "all";

/// A record that can be narrowed by [`ListFilter`].
pub trait Searchable {
    /// Text fields matched against the query.
    fn search_fields(&self) -> Vec<&str>;

    /// Categorical field matched against the category filter, if the kind has one.
    fn category(&self) -> Option<&str> {
        None
    }
}

/// Text query and categorical filter, as received from `?q=&category=`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListFilter {
    #[serde(default)]
    pub q: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

impl ListFilter {
    pub fn new(q: Option<&str>, category: Option<&str>) -> Self {
        Self {
            q: q.map(str::to_string),
            category: category.map(str::to_string),
        }
    }

    /// Lowercased query, `None` when blank.
    fn normalized_query(&self) -> Option<String> {
        self.q
            .as_deref()
            .map(str::trim)
            .filter(|q| !q.is_empty())
            .map(str::to_lowercase)
    }

    /// Selected category, `None` when blank or `all`.
    fn selected_category(&self) -> Option<&str> {
        self.category
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty() && *c != CATEGORY_ALL)
    }

    pub fn matches<T: Searchable>(&self, record: &T) -> bool {
        let query_ok = match self.normalized_query() {
            None => true,
            Some(q) => record
                .search_fields()
                .iter()
                .any(|field| field.to_lowercase().contains(&q)),
        };
        // Kinds without a categorical field ignore the category filter.
        let category_ok = match (self.selected_category(), record.category()) {
            (Some(selected), Some(value)) => value == selected,
            _ => true,
        };
        query_ok && category_ok
    }
}

/// Return the records matching `filter`, preserving input order.
pub fn filter_records<'a, T: Searchable>(records: &'a [T], filter: &ListFilter) -> Vec<&'a T> {
    records.iter().filter(|r| filter.matches(*r)).collect()
}

// ---------------------------------------------------------------------------
// Per-view list with stale-response guard
// ---------------------------------------------------------------------------

/// Identifies one fetch issued by a [`ListView`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket(u64);

/// What happened to a fetch result handed to [`ListView::apply`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyOutcome {
    Applied,
    /// A newer fetch was started after this one.
    Stale,
    /// The view was closed before the result arrived.
    Closed,
}

/// Locally owned list of records for one view.
///
/// Each fetch takes a ticket; only the result of the most recent ticket is
/// installed, and nothing is installed once the view is closed.
#[derive(Debug)]
pub struct ListView<T> {
    records: Vec<T>,
    generation: u64,
    closed: bool,
}

impl<T> Default for ListView<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            generation: 0,
            closed: false,
        }
    }
}

impl<T> ListView<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a fetch, invalidating any fetch still in flight.
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.generation += 1;
        FetchTicket(self.generation)
    }

    /// Install `records` if `ticket` is still current and the view is open.
    pub fn apply(&mut self, ticket: FetchTicket, records: Vec<T>) -> ApplyOutcome {
        if self.closed {
            return ApplyOutcome::Closed;
        }
        if ticket.0 != self.generation {
            return ApplyOutcome::Stale;
        }
        self.records = records;
        ApplyOutcome::Applied
    }

    /// Tear down the view; later results are discarded.
    pub fn close(&mut self) {
        self.closed = true;
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn records(&self) -> &[T] {
        &self.records
    }

    pub fn into_records(self) -> Vec<T> {
        self.records
    }
}

impl<T: Searchable> ListView<T> {
    pub fn filtered(&self, filter: &ListFilter) -> Vec<&T> {
        filter_records(&self.records, filter)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Entry {
        name: &'static str,
        message: &'static str,
        kind: Option<&'static str>,
    }

    impl Searchable for Entry {
        fn search_fields(&self) -> Vec<&str> {
            vec![self.name, self.message]
        }

        fn category(&self) -> Option<&str> {
            self.kind
        }
    }

    fn entry(name: &'static str, message: &'static str, kind: Option<&'static str>) -> Entry {
        Entry {
            name,
            message,
            kind,
        }
    }

    fn names(records: Vec<&Entry>) -> Vec<&'static str> {
        records.into_iter().map(|e| e.name).collect()
    }

    #[test]
    fn query_is_case_insensitive_substring() {
        let records = vec![entry("Amy", "...", None), entry("Bob", "...", None)];
        let filter = ListFilter::new(Some("am"), None);
        assert_eq!(names(filter_records(&records, &filter)), vec!["Amy"]);
    }

    #[test]
    fn query_matches_any_searchable_field() {
        let records = vec![
            entry("Amy", "Congratulations!", None),
            entry("Bob", "So happy for you", None),
        ];
        let filter = ListFilter::new(Some("HAPPY"), None);
        assert_eq!(names(filter_records(&records, &filter)), vec!["Bob"]);
    }

    #[test]
    fn empty_query_and_all_category_pass_through() {
        let records = vec![
            entry("Amy", "a", Some("attending")),
            entry("Bob", "b", Some("not-attending")),
        ];
        for filter in [
            ListFilter::default(),
            ListFilter::new(Some("   "), Some("all")),
            ListFilter::new(Some(""), Some("")),
        ] {
            assert_eq!(names(filter_records(&records, &filter)), vec!["Amy", "Bob"]);
        }
    }

    #[test]
    fn query_and_category_are_conjunctive() {
        let records = vec![
            entry("Amy", "a", Some("attending")),
            entry("Amos", "b", Some("not-attending")),
            entry("Bob", "c", Some("attending")),
        ];
        let filter = ListFilter::new(Some("am"), Some("attending"));
        assert_eq!(names(filter_records(&records, &filter)), vec!["Amy"]);

        let filter = ListFilter::new(None, Some("attending"));
        assert_eq!(names(filter_records(&records, &filter)), vec!["Amy", "Bob"]);
    }

    #[test]
    fn category_ignored_for_kinds_without_one() {
        let records = vec![entry("Amy", "a", None)];
        let filter = ListFilter::new(None, Some("attending"));
        assert_eq!(filter_records(&records, &filter).len(), 1);
    }

    #[test]
    fn latest_fetch_wins() {
        let mut view = ListView::new();
        let first = view.begin_fetch();
        let second = view.begin_fetch();

        assert_eq!(view.apply(second, vec![2]), ApplyOutcome::Applied);
        assert_eq!(view.apply(first, vec![1]), ApplyOutcome::Stale);
        assert_eq!(view.records(), &[2]);
    }

    #[test]
    fn closed_view_discards_late_results() {
        let mut view = ListView::new();
        let ticket = view.begin_fetch();
        view.close();
        assert_eq!(view.apply(ticket, vec![1]), ApplyOutcome::Closed);
        assert!(view.records().is_empty());
        assert!(view.is_closed());
    }

    #[test]
    fn view_filters_its_records() {
        let mut view = ListView::new();
        let ticket = view.begin_fetch();
        view.apply(
            ticket,
            vec![entry("Amy", "a", None), entry("Bob", "b", None)],
        );
        let filter = ListFilter::new(Some("bob"), None);
        assert_eq!(names(view.filtered(&filter)), vec!["Bob"]);
    }
}
