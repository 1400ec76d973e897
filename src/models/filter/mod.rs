//! Category selection state.
//!
//! The selection is either "all categories" or a non-empty set of specific
//! categories. Toggling is a pure transition: every toggle consumes the old
//! state and returns the new one, and no sequence of toggles can produce an
//! empty selection.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::category::{Category, UnknownCategory};

/// A category button: either the "all" sentinel or one concrete category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CategoryToggle {
    All,
    Only(Category),
}

impl FromStr for CategoryToggle {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(CategoryToggle::All)
        } else {
            s.parse().map(CategoryToggle::Only)
        }
    }
}

impl From<Category> for CategoryToggle {
    fn from(category: Category) -> Self {
        CategoryToggle::Only(category)
    }
}

/// A set of categories that is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BTreeSet<Category>", into = "BTreeSet<Category>")]
pub struct Selection(BTreeSet<Category>);

impl Selection {
    pub fn single(category: Category) -> Self {
        Self(BTreeSet::from([category]))
    }

    pub fn contains(&self, category: Category) -> bool {
        self.0.contains(&category)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = Category> + '_ {
        self.0.iter().copied()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptySelection;

impl fmt::Display for EmptySelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "A category selection cannot be empty")
    }
}

impl std::error::Error for EmptySelection {}

impl TryFrom<BTreeSet<Category>> for Selection {
    type Error = EmptySelection;

    fn try_from(set: BTreeSet<Category>) -> Result<Self, Self::Error> {
        if set.is_empty() {
            Err(EmptySelection)
        } else {
            Ok(Self(set))
        }
    }
}

impl From<Selection> for BTreeSet<Category> {
    fn from(selection: Selection) -> Self {
        selection.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterState {
    #[default]
    AllSelected,
    SomeSelected(Selection),
}

impl FilterState {
    /// Build a selection from explicit categories; an empty list means all.
    pub fn from_categories<I: IntoIterator<Item = Category>>(categories: I) -> Self {
        let set: BTreeSet<Category> = categories.into_iter().collect();
        match Selection::try_from(set) {
            Ok(selection) => FilterState::SomeSelected(selection),
            Err(EmptySelection) => FilterState::AllSelected,
        }
    }

    pub fn toggle(self, toggle: CategoryToggle) -> FilterState {
        match (self, toggle) {
            (FilterState::AllSelected, CategoryToggle::All) => FilterState::AllSelected,
            (FilterState::AllSelected, CategoryToggle::Only(category)) => {
                FilterState::SomeSelected(Selection::single(category))
            }
            (FilterState::SomeSelected(_), CategoryToggle::All) => FilterState::AllSelected,
            (FilterState::SomeSelected(Selection(mut set)), CategoryToggle::Only(category)) => {
                if !set.remove(&category) {
                    set.insert(category);
                }
                Self::from_categories(set)
            }
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, FilterState::AllSelected)
    }

    /// Whether places of `category` pass this selection.
    pub fn admits(&self, category: Category) -> bool {
        match self {
            FilterState::AllSelected => true,
            FilterState::SomeSelected(selection) => selection.contains(category),
        }
    }

    /// Keys of the active buttons, `["all"]` for the sentinel.
    pub fn active_keys(&self) -> Vec<&'static str> {
        match self {
            FilterState::AllSelected => vec!["all"],
            FilterState::SomeSelected(selection) => selection.iter().map(Category::key).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn toggling_same_category_twice_returns_to_all() {
        let state = FilterState::AllSelected
            .toggle(Category::Restaurant.into())
            .toggle(Category::Restaurant.into());
        assert_eq!(state, FilterState::AllSelected);
    }

    #[test]
    fn all_sentinel_is_noop_when_already_all() {
        assert_eq!(
            FilterState::AllSelected.toggle(CategoryToggle::All),
            FilterState::AllSelected
        );
    }

    #[test]
    fn all_sentinel_resets_specific_selection() {
        let state = FilterState::from_categories([Category::Cafe, Category::Museum]);
        assert_eq!(state.toggle(CategoryToggle::All), FilterState::AllSelected);
    }

    #[test]
    fn adding_and_removing_categories() {
        let state = FilterState::AllSelected
            .toggle(Category::Cafe.into())
            .toggle(Category::Museum.into());
        assert_eq!(state, FilterState::from_categories([Category::Cafe, Category::Museum]));

        let state = state.toggle(Category::Cafe.into());
        assert_eq!(state, FilterState::from_categories([Category::Museum]));
        assert!(state.admits(Category::Museum));
        assert!(!state.admits(Category::Cafe));
    }

    #[test]
    fn from_empty_categories_is_all() {
        assert_eq!(FilterState::from_categories([]), FilterState::AllSelected);
    }

    #[test]
    fn selection_cannot_be_built_empty() {
        assert_eq!(Selection::try_from(BTreeSet::new()), Err(EmptySelection));
    }

    #[test]
    fn active_keys_report_sentinel() {
        assert_eq!(FilterState::AllSelected.active_keys(), vec!["all"]);
        let state = FilterState::from_categories([Category::Store, Category::Restaurant]);
        assert_eq!(state.active_keys(), vec!["restaurant", "store"]);
    }

    #[test_case("all" => CategoryToggle::All ; "sentinel")]
    #[test_case("ALL" => CategoryToggle::All ; "sentinel any case")]
    #[test_case("cafe" => CategoryToggle::Only(Category::Cafe) ; "cafe")]
    #[test_case("tourist_attraction" => CategoryToggle::Only(Category::TouristAttraction) ; "attraction")]
    fn parses_toggle(input: &str) -> CategoryToggle {
        input.parse().unwrap()
    }

    #[test]
    fn rejects_unknown_toggle() {
        assert!("bakery".parse::<CategoryToggle>().is_err());
    }
}
