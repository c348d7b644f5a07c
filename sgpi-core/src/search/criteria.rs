//! Filter criteria and the pending/committed search state.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Membership categories. `All` is the wildcard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Category {
    #[default]
    All,
    Life,
    Founder,
    AdHoc,
    Associate,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::All,
        Category::Life,
        Category::Founder,
        Category::AdHoc,
        Category::Associate,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::All => "All",
            Category::Life => "Life",
            Category::Founder => "Founder",
            Category::AdHoc => "Ad Hoc",
            Category::Associate => "Associate",
        }
    }

    pub fn is_wildcard(&self) -> bool {
        *self == Category::All
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| {
                let labels: Vec<_> = Category::ALL.iter().map(|c| c.label()).collect();
                format!("Unknown category '{wanted}'. Expected one of: {}", labels.join(", "))
            })
    }
}

/// What to filter a catalog by.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Space-separated search terms, as typed.
    pub keyword: String,
    pub category: Category,
}

impl FilterCriteria {
    pub fn new(keyword: impl Into<String>, category: Category) -> Self {
        FilterCriteria {
            keyword: keyword.into(),
            category,
        }
    }

    pub fn keyword(keyword: impl Into<String>) -> Self {
        Self::new(keyword, Category::All)
    }

    /// Empty keyword and wildcard category.
    pub fn is_default(&self) -> bool {
        self.keyword.is_empty() && self.category.is_wildcard()
    }

    /// Lower-cased, non-empty whitespace-separated terms.
    pub fn terms(&self) -> Vec<String> {
        self.keyword
            .split_whitespace()
            .map(str::to_lowercase)
            .collect()
    }
}

/// The two criteria a search UI holds.
///
/// `pending` follows every edit; `committed` is what results are computed
/// from and only changes through [`SearchState::commit`] or
/// [`SearchState::clear`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchState {
    pending: FilterCriteria,
    committed: FilterCriteria,
    has_searched: bool,
}

impl SearchState {
    /// Start with identical pending and committed criteria. Non-default
    /// initial criteria (e.g. from a shared link) count as a search.
    pub fn new(initial: FilterCriteria) -> Self {
        let has_searched = !initial.is_default();
        SearchState {
            pending: initial.clone(),
            committed: initial,
            has_searched,
        }
    }

    pub fn pending(&self) -> &FilterCriteria {
        &self.pending
    }

    pub fn committed(&self) -> &FilterCriteria {
        &self.committed
    }

    pub fn has_searched(&self) -> bool {
        self.has_searched
    }

    pub fn set_keyword(&mut self, keyword: impl Into<String>) {
        self.pending.keyword = keyword.into();
    }

    pub fn set_category(&mut self, category: Category) {
        self.pending.category = category;
    }

    /// Apply the pending criteria.
    pub fn commit(&mut self) -> &FilterCriteria {
        self.committed = self.pending.clone();
        self.has_searched = true;
        &self.committed
    }

    /// Reset both criteria and return to the pre-search state.
    pub fn clear(&mut self) {
        self.pending = FilterCriteria::default();
        self.committed = FilterCriteria::default();
        self.has_searched = false;
    }
}

impl Default for SearchState {
    fn default() -> Self {
        SearchState::new(FilterCriteria::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_parses_labels_case_insensitively() {
        assert_eq!("ad hoc".parse::<Category>().unwrap(), Category::AdHoc);
        assert_eq!(" LIFE ".parse::<Category>().unwrap(), Category::Life);
        assert_eq!("all".parse::<Category>().unwrap(), Category::All);
        assert!("Honorary".parse::<Category>().is_err());
    }

    #[test]
    fn terms_drop_blank_segments() {
        let criteria = FilterCriteria::keyword("  Delhi   MD\tpathology ");
        assert_eq!(criteria.terms(), vec!["delhi", "md", "pathology"]);
        assert!(FilterCriteria::keyword("   ").terms().is_empty());
    }

    #[test]
    fn whitespace_keyword_is_not_default() {
        assert!(FilterCriteria::default().is_default());
        assert!(!FilterCriteria::keyword(" ").is_default());
        assert!(!FilterCriteria::new("", Category::Founder).is_default());
    }

    #[test]
    fn edits_stay_pending_until_commit() {
        let mut state = SearchState::default();
        state.set_keyword("rao");
        state.set_category(Category::Life);

        assert_eq!(state.committed(), &FilterCriteria::default());
        assert!(!state.has_searched());

        let committed = state.commit().clone();
        assert_eq!(committed, FilterCriteria::new("rao", Category::Life));
        assert!(state.has_searched());

        state.set_keyword("iyer");
        assert_eq!(state.committed().keyword, "rao");
    }

    #[test]
    fn clear_resets_both_and_the_search_flag() {
        let mut state = SearchState::new(FilterCriteria::keyword("rao"));
        assert!(state.has_searched());

        state.clear();
        assert_eq!(state.pending(), &FilterCriteria::default());
        assert_eq!(state.committed(), &FilterCriteria::default());
        assert!(!state.has_searched());
    }

    #[test]
    fn committing_defaults_still_counts_as_a_search() {
        let mut state = SearchState::default();
        state.commit();
        assert!(state.has_searched());
        assert!(state.committed().is_default());
    }
}
