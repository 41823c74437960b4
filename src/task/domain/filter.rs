//! Filter criteria for the visible task subset and their key-value form.

use super::TaskStatus;

/// Query key for the status criterion.
pub const STATUS_KEY: &str = "status";
/// Query key for the developers criterion.
pub const DEVELOPERS_KEY: &str = "developers";
/// Query key for the free-text search criterion.
pub const SEARCH_KEY: &str = "search";

/// Separator between developer names in the key-value form.
const DEVELOPER_SEPARATOR: char = ',';

/// Criteria selecting the visible subset of the collection.
///
/// Absent criteria do not filter. All present criteria must hold.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskFilter {
    /// Exact workflow status to match.
    pub status: Option<TaskStatus>,
    /// Developers that must all be assigned to a task.
    pub developers: Option<Vec<String>>,
    /// Case-insensitive title substring.
    pub search: Option<String>,
}

impl TaskFilter {
    /// Creates a filter that lets every task through.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts the filter to a status.
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Restricts the filter to tasks assigned to all `developers`.
    #[must_use]
    pub fn with_developers<I, S>(mut self, developers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.developers = Some(developers.into_iter().map(Into::into).collect());
        self
    }

    /// Restricts the filter to titles containing `search`.
    #[must_use]
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    /// Returns the selected developers, empty when none are selected.
    #[must_use]
    pub fn selected_developers(&self) -> &[String] {
        self.developers.as_deref().unwrap_or_default()
    }

    /// Returns the search text when it would filter anything.
    #[must_use]
    pub fn active_search(&self) -> Option<&str> {
        self.search.as_deref().filter(|search| !search.is_empty())
    }

    /// Returns `true` when at least one criterion filters tasks out.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.status.is_some()
            || !self.selected_developers().is_empty()
            || self.active_search().is_some()
    }

    /// Merges an update into the criteria.
    pub fn apply(&mut self, update: FilterUpdate) {
        update.status.merge_into(&mut self.status);
        update.developers.merge_into(&mut self.developers);
        update.search.merge_into(&mut self.search);
        if self.developers.as_ref().is_some_and(Vec::is_empty) {
            self.developers = None;
        }
        if self.search.as_ref().is_some_and(String::is_empty) {
            self.search = None;
        }
    }

    /// Reads criteria from key-value pairs such as a parsed query string.
    ///
    /// Unknown keys, unknown status labels, and empty values are ignored.
    #[must_use]
    pub fn from_query_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut filter = Self::default();
        for (key, value) in pairs {
            let raw = value.as_ref();
            match key.as_ref() {
                STATUS_KEY => filter.status = TaskStatus::try_from(raw).ok(),
                DEVELOPERS_KEY => {
                    let names: Vec<String> = raw
                        .split(DEVELOPER_SEPARATOR)
                        .map(str::trim)
                        .filter(|name| !name.is_empty())
                        .map(str::to_owned)
                        .collect();
                    filter.developers = (!names.is_empty()).then_some(names);
                }
                SEARCH_KEY => {
                    filter.search = (!raw.is_empty()).then(|| raw.to_owned());
                }
                _ => {}
            }
        }
        filter
    }

    /// Writes the present criteria as key-value pairs.
    #[must_use]
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(status) = self.status {
            pairs.push((STATUS_KEY, status.as_str().to_owned()));
        }
        let developers = self.selected_developers();
        if !developers.is_empty() {
            pairs.push((DEVELOPERS_KEY, developers.join(",")));
        }
        if let Some(search) = self.active_search() {
            pairs.push((SEARCH_KEY, search.to_owned()));
        }
        pairs
    }
}

/// Change to a single filter key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FieldUpdate<T> {
    /// Leave the key as it is.
    #[default]
    Keep,
    /// Replace the key's value.
    Set(T),
    /// Remove the key.
    Clear,
}

impl<T> FieldUpdate<T> {
    fn merge_into(self, slot: &mut Option<T>) {
        match self {
            Self::Keep => {}
            Self::Set(value) => *slot = Some(value),
            Self::Clear => *slot = None,
        }
    }

    /// Builds an update that sets `value`, or clears the key for `None`.
    #[must_use]
    pub fn from_option(value: Option<T>) -> Self {
        value.map_or(Self::Clear, Self::Set)
    }
}

/// Partial change to the filter state, merged key by key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterUpdate {
    /// Change to the status key.
    pub status: FieldUpdate<TaskStatus>,
    /// Change to the developers key.
    pub developers: FieldUpdate<Vec<String>>,
    /// Change to the search key.
    pub search: FieldUpdate<String>,
}

impl FilterUpdate {
    /// Creates an update that changes nothing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets or clears the status criterion.
    #[must_use]
    pub fn status(mut self, status: Option<TaskStatus>) -> Self {
        self.status = FieldUpdate::from_option(status);
        self
    }

    /// Sets or clears the developers criterion.
    #[must_use]
    pub fn developers(mut self, developers: Option<Vec<String>>) -> Self {
        self.developers = FieldUpdate::from_option(developers);
        self
    }

    /// Sets or clears the search criterion.
    #[must_use]
    pub fn search(mut self, search: Option<String>) -> Self {
        self.search = FieldUpdate::from_option(search);
        self
    }

    /// Builds an update adding `developer` to the current selection.
    ///
    /// Selecting an already selected developer or a blank name changes
    /// nothing.
    #[must_use]
    pub fn select_developer(current: &TaskFilter, developer: &str) -> Self {
        let selected = current.selected_developers();
        let name = developer.trim();
        if name.is_empty() || selected.iter().any(|existing| existing == name) {
            return Self::new();
        }
        let mut developers = selected.to_vec();
        developers.push(name.to_owned());
        Self::new().developers(Some(developers))
    }

    /// Builds an update removing `developer` from the current selection.
    #[must_use]
    pub fn deselect_developer(current: &TaskFilter, developer: &str) -> Self {
        let remaining: Vec<String> = current
            .selected_developers()
            .iter()
            .filter(|existing| existing.as_str() != developer)
            .cloned()
            .collect();
        Self::new().developers(Some(remaining))
    }
}
