// Properties of the category toggle machine and the filter pipeline

use nearby_places::models::category::Category;
use nearby_places::models::filter::{CategoryToggle, FilterState};
use nearby_places::models::place::{Coordinate, Place};
use nearby_places::services::search::{apply_filters, SearchQuery};
use proptest::prelude::*;

fn category() -> impl Strategy<Value = Category> {
    prop::sample::select(Category::ALL.to_vec())
}

fn toggle() -> impl Strategy<Value = CategoryToggle> {
    prop_oneof![
        1 => Just(CategoryToggle::All),
        6 => category().prop_map(CategoryToggle::Only),
    ]
}

fn filter_state() -> impl Strategy<Value = FilterState> {
    prop::collection::vec(toggle(), 0..12)
        .prop_map(|toggles| toggles.into_iter().fold(FilterState::AllSelected, FilterState::toggle))
}

fn place() -> impl Strategy<Value = Place> {
    (
        "[a-z0-9]{4}",
        "[A-Za-z ]{0,12}",
        prop::option::of("[A-Za-z0-9 ]{0,12}"),
        category(),
    )
        .prop_map(|(id, name, vicinity, category)| {
            let mut place = Place::new(id, name, Coordinate::new(40.7, -74.0)).with_tags([category.key()]);
            place.vicinity = vicinity;
            place
        })
}

proptest! {
    /// Property: no toggle sequence ever produces an empty selection
    #[test]
    fn prop_selection_never_empty(state in filter_state()) {
        if let FilterState::SomeSelected(selection) = &state {
            prop_assert!(selection.len() > 0);
        }
    }

    /// Property: toggling the same category twice is a no-op
    #[test]
    fn prop_double_toggle_restores_state(state in filter_state(), category in category()) {
        let once = state.clone().toggle(CategoryToggle::Only(category));
        let twice = once.toggle(CategoryToggle::Only(category));
        prop_assert_eq!(twice, state);
    }

    /// Property: the all sentinel always ends in AllSelected
    #[test]
    fn prop_all_resets(state in filter_state()) {
        prop_assert!(state.toggle(CategoryToggle::All).is_all());
    }

    /// Property: output is an order-preserving subsequence whose members pass both predicates
    #[test]
    fn prop_filter_is_sound_subsequence(
        places in prop::collection::vec(place(), 0..20),
        state in filter_state(),
        query in "[a-z ]{0,3}",
    ) {
        let query = SearchQuery::new(query);
        let visible = apply_filters(&places, &state, &query);

        let mut cursor = 0;
        for place in &visible {
            let index = places[cursor..].iter().position(|candidate| std::ptr::eq(candidate, *place));
            prop_assert!(index.is_some());
            cursor += index.unwrap() + 1;

            prop_assert!(state.admits(place.category()));
            if let Some(needle) = query.needle() {
                let vicinity = place.vicinity.clone().unwrap_or_default().to_lowercase();
                prop_assert!(place.name.to_lowercase().contains(&needle) || vicinity.contains(&needle));
            }
        }

        let again = apply_filters(&places, &state, &query);
        prop_assert_eq!(visible.len(), again.len());
    }

    /// Property: with everything selected and no query nothing is dropped
    #[test]
    fn prop_unfiltered_keeps_all(places in prop::collection::vec(place(), 0..20)) {
        prop_assert_eq!(apply_filters(&places, &FilterState::AllSelected, &SearchQuery::default()).len(), places.len());
    }
}
