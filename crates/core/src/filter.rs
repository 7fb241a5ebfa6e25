//! The filter/search engine over a fetched event list.
//!
//! Pure and synchronous: given the active category filters and a search
//! query, [`visible`] derives the subset of events to show, preserving the
//! original fetch order. Re-evaluated on every call; no caching here.

use std::collections::HashSet;

use crate::types::DbId;

/// Sentinel filter name matching every category.
pub const ALL_EVENTS: &str = "All Events";

/// Read access to the event fields the engine matches against.
///
/// Implemented by the persistence layer's event rows so the engine stays
/// independent of any storage type.
pub trait EventView {
    fn id(&self) -> DbId;
    fn title(&self) -> &str;
    fn description(&self) -> &str;
    fn location(&self) -> &str;
    fn category(&self) -> &str;
}

/// The set of active category filters.
///
/// Invariant: never empty. Defaults to `{"All Events"}`, and collapses back
/// to it when the last concrete category is deselected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSet {
    active: Vec<String>,
}

impl Default for FilterSet {
    fn default() -> Self {
        Self {
            active: vec![ALL_EVENTS.to_string()],
        }
    }
}

impl FilterSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a filter set from already-selected category names.
    ///
    /// An empty selection yields the sentinel set.
    pub fn from_selection<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut set = Self::new();
        for name in names {
            set.toggle(&name.into());
        }
        set
    }

    /// The active filter names, in selection order.
    pub fn active(&self) -> &[String] {
        &self.active
    }

    /// Toggle a filter name.
    ///
    /// Selecting the sentinel clears everything else; selecting a concrete
    /// category drops the sentinel and toggles membership; removing the last
    /// concrete category restores the sentinel.
    pub fn toggle(&mut self, name: &str) {
        if name == ALL_EVENTS {
            self.active = vec![ALL_EVENTS.to_string()];
            return;
        }

        if let Some(pos) = self.active.iter().position(|f| f == name) {
            self.active.remove(pos);
        } else {
            self.active.retain(|f| f != ALL_EVENTS);
            self.active.push(name.to_string());
        }

        if self.active.is_empty() {
            self.active.push(ALL_EVENTS.to_string());
        }
    }

    /// Whether an event in `category` passes the filter.
    pub fn matches_category(&self, category: &str) -> bool {
        self.active.iter().any(|f| f == ALL_EVENTS || f == category)
    }
}

/// Case-insensitive substring search over title, description, and location.
///
/// An empty query matches everything.
pub fn matches_search<E: EventView + ?Sized>(event: &E, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    event.title().to_lowercase().contains(&needle)
        || event.description().to_lowercase().contains(&needle)
        || event.location().to_lowercase().contains(&needle)
}

/// The visible subset of `events`: both the category filter and the search
/// predicate must hold. Original order is preserved.
pub fn visible<'a, E: EventView>(events: &'a [E], filters: &FilterSet, query: &str) -> Vec<&'a E> {
    events
        .iter()
        .filter(|event| filters.matches_category(event.category()) && matches_search(*event, query))
        .collect()
}

/// The caller's saved events: the subset of `events` whose ids are in the
/// favorite-id set, in the original fetch order.
pub fn saved_events<'a, E: EventView>(
    events: &'a [E],
    favorite_ids: &HashSet<DbId>,
) -> Vec<&'a E> {
    events
        .iter()
        .filter(|event| favorite_ids.contains(&event.id()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestEvent {
        id: DbId,
        title: &'static str,
        description: &'static str,
        location: &'static str,
        category: &'static str,
    }

    impl EventView for TestEvent {
        fn id(&self) -> DbId {
            self.id
        }
        fn title(&self) -> &str {
            self.title
        }
        fn description(&self) -> &str {
            self.description
        }
        fn location(&self) -> &str {
            self.location
        }
        fn category(&self) -> &str {
            self.category
        }
    }

    fn sample_events() -> Vec<TestEvent> {
        vec![
            TestEvent {
                id: 1,
                title: "Rooftop Jazz Night",
                description: "Live jazz with a skyline view",
                location: "Westlands, Nairobi",
                category: "Concerts",
            },
            TestEvent {
                id: 2,
                title: "Morning Run Club",
                description: "Easy 5k around the park",
                location: "Karura Forest",
                category: "Fitness",
            },
            TestEvent {
                id: 3,
                title: "Sip & Paint Sunday",
                description: "Paint, sip, repeat",
                location: "Kilimani",
                category: "Sip & Paint",
            },
        ]
    }

    #[test]
    fn default_filter_is_the_sentinel() {
        let filters = FilterSet::new();
        assert_eq!(filters.active(), [ALL_EVENTS]);
    }

    #[test]
    fn selecting_sentinel_clears_other_selections() {
        let mut filters = FilterSet::new();
        filters.toggle("Concerts");
        filters.toggle("Fitness");
        filters.toggle(ALL_EVENTS);
        assert_eq!(filters.active(), [ALL_EVENTS]);
    }

    #[test]
    fn selecting_a_category_drops_the_sentinel() {
        let mut filters = FilterSet::new();
        filters.toggle("Concerts");
        assert_eq!(filters.active(), ["Concerts"]);
    }

    #[test]
    fn deselecting_last_category_restores_the_sentinel() {
        let mut filters = FilterSet::new();
        filters.toggle("Concerts");
        filters.toggle("Concerts");
        assert_eq!(filters.active(), [ALL_EVENTS]);
    }

    #[test]
    fn active_set_is_never_empty() {
        let mut filters = FilterSet::new();
        for name in ["Concerts", "Fitness", "Concerts", "Fitness", ALL_EVENTS] {
            filters.toggle(name);
            assert!(!filters.active().is_empty());
        }
    }

    #[test]
    fn from_selection_of_nothing_is_the_sentinel() {
        let filters = FilterSet::from_selection(Vec::<String>::new());
        assert_eq!(filters.active(), [ALL_EVENTS]);
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let events = sample_events();
        assert!(matches_search(&events[0], "jazz"));
        assert!(matches_search(&events[0], "JAZZ"));
        assert!(matches_search(&events[0], "skyline"));
        assert!(matches_search(&events[0], "westlands"));
        assert!(!matches_search(&events[0], "karaoke"));
    }

    #[test]
    fn empty_query_matches_everything() {
        let events = sample_events();
        let visible = visible(&events, &FilterSet::new(), "");
        assert_eq!(visible.len(), events.len());
    }

    #[test]
    fn both_predicates_must_hold() {
        let events = sample_events();
        let filters = FilterSet::from_selection(["Fitness"]);

        // "park" matches event 2's description, and Fitness matches its category.
        let hits = visible(&events, &filters, "park");
        assert_eq!(hits.iter().map(|e| e.id()).collect::<Vec<_>>(), [2]);

        // "jazz" matches event 1 but its category is filtered out.
        assert!(visible(&events, &filters, "jazz").is_empty());
    }

    #[test]
    fn visible_preserves_fetch_order() {
        let events = sample_events();
        let filters = FilterSet::from_selection(["Concerts", "Sip & Paint"]);
        let hits = visible(&events, &filters, "");
        assert_eq!(hits.iter().map(|e| e.id()).collect::<Vec<_>>(), [1, 3]);
    }

    #[test]
    fn saved_events_is_the_favorite_intersection() {
        let events = sample_events();
        let favorites: HashSet<DbId> = [3, 1].into_iter().collect();
        let saved = saved_events(&events, &favorites);
        assert_eq!(saved.iter().map(|e| e.id()).collect::<Vec<_>>(), [1, 3]);

        assert!(saved_events(&events, &HashSet::new()).is_empty());
    }
}
