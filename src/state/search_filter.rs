// ============================================================================
// SEARCH / FILTER / PAGINATE - Derived views over an already-fetched list
// ============================================================================
// Pipeline: data -> search predicate -> registered filter predicates -> page.
// `filtered` keeps row indices and is rebuilt after every state change.
// ============================================================================

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

use crate::utils::constants::{DEFAULT_ITEMS_PER_PAGE, FILTER_ALL, MAIN_FILTER};

/// What a row exposes for one searchable field.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchValue<'a> {
    Text(Cow<'a, str>),
    List(Vec<Cow<'a, str>>),
    Missing,
}

impl<'a> From<&'a str> for SearchValue<'a> {
    fn from(value: &'a str) -> Self {
        SearchValue::Text(Cow::Borrowed(value))
    }
}

impl<'a> From<&'a String> for SearchValue<'a> {
    fn from(value: &'a String) -> Self {
        SearchValue::Text(Cow::Borrowed(value.as_str()))
    }
}

impl<'a> From<&'a Option<String>> for SearchValue<'a> {
    fn from(value: &'a Option<String>) -> Self {
        match value {
            Some(text) => text.into(),
            None => SearchValue::Missing,
        }
    }
}

impl<'a> From<&'a Vec<String>> for SearchValue<'a> {
    fn from(values: &'a Vec<String>) -> Self {
        SearchValue::List(values.iter().map(|v| Cow::Borrowed(v.as_str())).collect())
    }
}

/// Rows the engine can search. `field` is one of the names passed as
/// `search_fields`; unknown names should return [`SearchValue::Missing`].
pub trait Searchable {
    fn search_value(&self, field: &str) -> SearchValue<'_>;
}

/// `(row, filter value) -> keep?`
pub type FilterPredicate<T> = Rc<dyn Fn(&T, &str) -> bool>;

pub struct SearchFilterState<T> {
    data: Rc<Vec<T>>,
    search_fields: Rc<Vec<String>>,
    default_filter: String,
    items_per_page: usize,
    search_term: String,
    filters: BTreeMap<String, String>,
    current_page: usize,
    predicates: BTreeMap<String, FilterPredicate<T>>,
    filtered: Vec<usize>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SearchAction<T> {
    SetSearchTerm(String),
    SetMainFilter(String),
    SetCustomFilter(String, String),
    SetCurrentPage(usize),
    Reset,
    SetData(Vec<T>),
}

impl<T: Searchable> SearchFilterState<T> {
    pub fn new<S: AsRef<str>>(data: Vec<T>, search_fields: &[S]) -> Self {
        let mut state = Self {
            data: Rc::new(data),
            search_fields: Rc::new(search_fields.iter().map(|f| f.as_ref().to_string()).collect()),
            default_filter: FILTER_ALL.to_string(),
            items_per_page: DEFAULT_ITEMS_PER_PAGE,
            search_term: String::new(),
            filters: BTreeMap::new(),
            current_page: 1,
            predicates: BTreeMap::new(),
            filtered: Vec::new(),
        };
        state.filters.insert(MAIN_FILTER.to_string(), state.default_filter.clone());
        state.refresh();
        state
    }

    pub fn with_default_filter(mut self, default_filter: impl Into<String>) -> Self {
        self.default_filter = default_filter.into();
        self.filters.insert(MAIN_FILTER.to_string(), self.default_filter.clone());
        self.refresh();
        self
    }

    /// A page size of 0 is treated as 1.
    pub fn with_items_per_page(mut self, items_per_page: usize) -> Self {
        self.items_per_page = items_per_page.max(1);
        self
    }

    /// Declares how the filter stored under `key` restricts rows. Filters
    /// without a predicate are kept in `filters` but do not restrict.
    pub fn register_filter<F>(mut self, key: impl Into<String>, predicate: F) -> Self
    where
        F: Fn(&T, &str) -> bool + 'static,
    {
        self.predicates.insert(key.into(), Rc::new(predicate));
        self.refresh();
        self
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn filters(&self) -> &BTreeMap<String, String> {
        &self.filters
    }

    pub fn filter(&self, key: &str) -> Option<&str> {
        self.filters.get(key).map(String::as_str)
    }

    pub fn main_filter(&self) -> &str {
        self.filter(MAIN_FILTER).unwrap_or(&self.default_filter)
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn items_per_page(&self) -> usize {
        self.items_per_page
    }

    pub fn data(&self) -> &[T] {
        &self.data
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
        self.current_page = 1;
        self.refresh();
    }

    pub fn set_main_filter(&mut self, value: impl Into<String>) {
        self.set_custom_filter(MAIN_FILTER, value);
    }

    pub fn set_custom_filter(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.filters.insert(key.into(), value.into());
        self.current_page = 1;
        self.refresh();
    }

    /// No clamping: callers pass pages in `1..=total_pages()`.
    pub fn set_current_page(&mut self, page: usize) {
        self.current_page = page;
    }

    pub fn reset_search(&mut self) {
        self.search_term.clear();
        self.filters.clear();
        self.filters.insert(MAIN_FILTER.to_string(), self.default_filter.clone());
        self.current_page = 1;
        self.refresh();
    }

    /// Swaps in a freshly fetched collection. The current page is kept
    /// unless the new rows no longer reach it; then it moves to the last page.
    pub fn set_data(&mut self, data: Vec<T>) {
        self.data = Rc::new(data);
        self.refresh();
        self.current_page = self.current_page.min(self.total_pages().max(1));
    }

    pub fn filtered_data(&self) -> Vec<&T> {
        self.filtered.iter().map(|&i| &self.data[i]).collect()
    }

    pub fn total_items(&self) -> usize {
        self.filtered.len()
    }

    pub fn total_pages(&self) -> usize {
        self.total_items().div_ceil(self.items_per_page)
    }

    /// Rows of the current page; empty when the page is past the end.
    pub fn paginated_data(&self) -> Vec<&T> {
        let start = self.current_page.saturating_sub(1) * self.items_per_page;
        self.filtered
            .iter()
            .skip(start)
            .take(self.items_per_page)
            .map(|&i| &self.data[i])
            .collect()
    }

    pub fn apply(&mut self, action: SearchAction<T>) {
        match action {
            SearchAction::SetSearchTerm(term) => self.set_search_term(term),
            SearchAction::SetMainFilter(value) => self.set_main_filter(value),
            SearchAction::SetCustomFilter(key, value) => self.set_custom_filter(key, value),
            SearchAction::SetCurrentPage(page) => self.set_current_page(page),
            SearchAction::Reset => self.reset_search(),
            SearchAction::SetData(data) => self.set_data(data),
        }
    }

    fn refresh(&mut self) {
        let filtered = {
            let term = self.search_term.trim().to_lowercase();
            let active: Vec<(&FilterPredicate<T>, &str)> = self
                .filters
                .iter()
                .filter(|(_, value)| !value.is_empty() && value.as_str() != FILTER_ALL)
                .filter_map(|(key, value)| self.predicates.get(key).map(|p| (p, value.as_str())))
                .collect();

            self.data
                .iter()
                .enumerate()
                .filter(|&(_, row)| matches_search(row, &self.search_fields, &term))
                .filter(|&(_, row)| active.iter().all(|&(predicate, value)| predicate(row, value)))
                .map(|(i, _)| i)
                .collect()
        };
        self.filtered = filtered;
    }
}

/// `term` must already be trimmed and lowercased.
fn matches_search<T: Searchable>(row: &T, fields: &[String], term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let contains = |text: &str| text.to_lowercase().contains(term);
    fields.iter().any(|field| match row.search_value(field) {
        SearchValue::Text(text) => contains(&text),
        SearchValue::List(items) => items.iter().any(|item| contains(item)),
        SearchValue::Missing => false,
    })
}

impl<T> Clone for SearchFilterState<T> {
    fn clone(&self) -> Self {
        Self {
            data: Rc::clone(&self.data),
            search_fields: Rc::clone(&self.search_fields),
            default_filter: self.default_filter.clone(),
            items_per_page: self.items_per_page,
            search_term: self.search_term.clone(),
            filters: self.filters.clone(),
            current_page: self.current_page,
            predicates: self.predicates.clone(),
            filtered: self.filtered.clone(),
        }
    }
}

impl<T: PartialEq> PartialEq for SearchFilterState<T> {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
            && self.search_term == other.search_term
            && self.filters == other.filters
            && self.current_page == other.current_page
            && self.items_per_page == other.items_per_page
    }
}

impl<T> fmt::Debug for SearchFilterState<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchFilterState")
            .field("rows", &self.data.len())
            .field("search_term", &self.search_term)
            .field("filters", &self.filters)
            .field("current_page", &self.current_page)
            .field("matched", &self.filtered.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        name: String,
        skills: Vec<String>,
        status: String,
    }

    impl Searchable for Row {
        fn search_value(&self, field: &str) -> SearchValue<'_> {
            match field {
                "name" => (&self.name).into(),
                "skills" => (&self.skills).into(),
                _ => SearchValue::Missing,
            }
        }
    }

    fn row(name: &str, skills: &[&str], status: &str) -> Row {
        Row {
            name: name.to_string(),
            skills: skills.iter().map(|s| s.to_string()).collect(),
            status: status.to_string(),
        }
    }

    fn numbered(count: usize) -> Vec<Row> {
        (1..=count).map(|i| row(&format!("Volunteer {i}"), &[], "active")).collect()
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let mut state = SearchFilterState::new(
            vec![row("Ana Gomez", &[], "active"), row("Carlos", &[], "active")],
            &["name"],
        );
        state.set_search_term("ana");

        let names: Vec<_> = state.filtered_data().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Ana Gomez"]);
    }

    #[test]
    fn search_matches_any_list_element() {
        let mut state = SearchFilterState::new(
            vec![row("Ana", &["First Aid", "Driving"], "active"), row("Carlos", &["Cooking"], "active")],
            &["name", "skills"],
        );
        state.set_search_term("DRIV");
        assert_eq!(state.total_items(), 1);
        assert_eq!(state.filtered_data()[0].name, "Ana");
    }

    #[test]
    fn empty_search_matches_everything() {
        let mut state = SearchFilterState::new(numbered(7), &["name"]);
        state.set_search_term("volunteer 3");
        assert_eq!(state.total_items(), 1);
        state.set_search_term("");
        assert_eq!(state.total_items(), 7);
        state.set_search_term("   ");
        assert_eq!(state.total_items(), 7);
    }

    #[test]
    fn search_and_filter_setters_reset_page() {
        let mut state = SearchFilterState::new(numbered(40), &["name"]);

        state.set_current_page(3);
        state.set_search_term("volunteer");
        assert_eq!(state.current_page(), 1);

        state.set_current_page(2);
        state.set_custom_filter("skill", "cooking");
        assert_eq!(state.current_page(), 1);

        state.set_current_page(4);
        state.set_main_filter("inactive");
        assert_eq!(state.current_page(), 1);
    }

    #[test]
    fn pagination_boundary() {
        let mut state = SearchFilterState::new(numbered(25), &["name"]).with_items_per_page(10);
        assert_eq!(state.total_pages(), 3);

        state.set_current_page(3);
        let page = state.paginated_data();
        assert_eq!(page.len(), 5);
        assert_eq!(page[0].name, "Volunteer 21");
    }

    #[test]
    fn pages_cover_filtered_rows_exactly_once() {
        let mut state = SearchFilterState::new(numbered(23), &["name"]).with_items_per_page(4);
        state.set_search_term("1");
        let expected: Vec<Row> = state.filtered_data().into_iter().cloned().collect();

        let mut collected = Vec::new();
        for page in 1..=state.total_pages() {
            state.set_current_page(page);
            collected.extend(state.paginated_data().into_iter().cloned());
        }
        assert_eq!(collected, expected);
    }

    #[test]
    fn no_rows_means_no_pages() {
        let state = SearchFilterState::<Row>::new(Vec::new(), &["name"]);
        assert_eq!(state.total_pages(), 0);
        assert!(state.paginated_data().is_empty());
    }

    #[test]
    fn registered_filters_restrict_rows() {
        let mut state = SearchFilterState::new(
            vec![
                row("Ana", &["Cooking"], "active"),
                row("Beto", &["Cooking"], "inactive"),
                row("Carla", &["Driving"], "active"),
            ],
            &["name"],
        )
        .register_filter(MAIN_FILTER, |r: &Row, value| r.status == value)
        .register_filter("skill", |r: &Row, value| r.skills.iter().any(|s| s == value));

        assert_eq!(state.total_items(), 3);

        state.set_main_filter("active");
        assert_eq!(state.total_items(), 2);

        state.set_custom_filter("skill", "Cooking");
        let names: Vec<_> = state.filtered_data().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Ana"]);

        state.set_custom_filter("unregistered", "anything");
        assert_eq!(state.total_items(), 1);

        state.reset_search();
        assert_eq!(state.total_items(), 3);
        assert_eq!(state.main_filter(), FILTER_ALL);
        assert_eq!(state.filters().len(), 1);
    }

    #[test]
    fn default_filter_applies_from_the_start() {
        let state = SearchFilterState::new(
            vec![row("Ana", &[], "active"), row("Beto", &[], "inactive")],
            &["name"],
        )
        .register_filter(MAIN_FILTER, |r: &Row, value| r.status == value)
        .with_default_filter("inactive");

        assert_eq!(state.main_filter(), "inactive");
        assert_eq!(state.filtered_data()[0].name, "Beto");
        assert_eq!(state.total_items(), 1);
    }

    #[test]
    fn set_data_keeps_page_and_refilters() {
        let mut state = SearchFilterState::new(numbered(5), &["name"]).with_items_per_page(2);
        state.set_current_page(2);
        state.apply(SearchAction::SetData(numbered(30)));
        assert_eq!(state.current_page(), 2);
        assert_eq!(state.total_items(), 30);
        assert_eq!(state.paginated_data()[0].name, "Volunteer 3");
    }

    #[test]
    fn set_data_clamps_page_when_list_shrinks() {
        let mut state = SearchFilterState::new(numbered(11), &["name"]);
        state.set_current_page(2);
        assert_eq!(state.paginated_data().len(), 1);

        state.set_data(numbered(10));
        assert_eq!(state.current_page(), 1);
        assert_eq!(state.paginated_data().len(), 10);

        state.set_data(Vec::new());
        assert_eq!(state.current_page(), 1);
        assert!(state.paginated_data().is_empty());
    }
}
