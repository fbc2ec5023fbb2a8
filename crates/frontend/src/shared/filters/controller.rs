//! The filter controller: applies selection events atomically and returns
//! the side-effect requests (dependent-list fetches, navigation, listing
//! refetch) for the reactive boundary to execute.
//!
//! Dependent option lists live here too. Every fetch request carries the
//! selection it was scoped to, and the matching `apply_*` call compares
//! that scope against the live selection before installing the response —
//! a list fetched for a selection the user has already left is silently
//! discarded.

use super::path::{build_path, RouteSelection};
use super::query::build_query;
use super::selection::FilterState;
use contracts::domain::category::find_by_slug;
use contracts::domain::{CategoryNode, LocationLevel, LocationNode};
use std::collections::BTreeMap;

/// Side-effect request emitted by a mutation. The controller never
/// performs I/O itself.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    FetchDistricts {
        state: String,
    },
    FetchCities {
        state: String,
        district: String,
    },
    FetchLocalities {
        state: String,
        district: String,
        city: String,
    },
    Navigate {
        path: String,
    },
    RefetchListings {
        query: BTreeMap<String, String>,
    },
}

/// Outcome of resolving a route-supplied category slug. `Pending` means
/// the category list has not produced a match yet; the caller retries once
/// the list loads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlugResolution {
    Applied,
    Pending,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterController {
    state: FilterState,
    categories: Vec<CategoryNode>,
    states: Vec<LocationNode>,
    districts: Vec<LocationNode>,
    cities: Vec<LocationNode>,
    localities: Vec<LocationNode>,
}

impl FilterController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> &FilterState {
        &self.state
    }

    pub fn current_path(&self) -> String {
        build_path(&self.state)
    }

    pub fn current_query(&self) -> BTreeMap<String, String> {
        build_query(&self.state)
    }

    pub fn categories(&self) -> &[CategoryNode] {
        &self.categories
    }

    pub fn states(&self) -> &[LocationNode] {
        &self.states
    }

    pub fn districts(&self) -> &[LocationNode] {
        &self.districts
    }

    pub fn cities(&self) -> &[LocationNode] {
        &self.cities
    }

    pub fn localities(&self) -> &[LocationNode] {
        &self.localities
    }

    fn navigate_and_refetch(&self) -> Vec<Effect> {
        vec![
            Effect::Navigate {
                path: self.current_path(),
            },
            Effect::RefetchListings {
                query: self.current_query(),
            },
        ]
    }

    fn refetch_only(&self) -> Vec<Effect> {
        vec![Effect::RefetchListings {
            query: self.current_query(),
        }]
    }

    /// Select or clear the state. Clears the three deeper selections and
    /// their option lists; requests the district list when a state is set.
    pub fn select_state(&mut self, slug: Option<&str>) -> Vec<Effect> {
        if !self.state.select_location(LocationLevel::State, slug) {
            return Vec::new();
        }
        self.districts.clear();
        self.cities.clear();
        self.localities.clear();

        let mut effects = Vec::new();
        if let Some(state) = self.state.location(LocationLevel::State) {
            effects.push(Effect::FetchDistricts {
                state: state.to_string(),
            });
        }
        effects.extend(self.navigate_and_refetch());
        effects
    }

    /// Select or clear the district. Rejected while no state is selected.
    pub fn select_district(&mut self, slug: Option<&str>) -> Vec<Effect> {
        if !self.state.select_location(LocationLevel::District, slug) {
            return Vec::new();
        }
        self.cities.clear();
        self.localities.clear();

        let mut effects = Vec::new();
        if let (Some(state), Some(district)) = (
            self.state.location(LocationLevel::State),
            self.state.location(LocationLevel::District),
        ) {
            effects.push(Effect::FetchCities {
                state: state.to_string(),
                district: district.to_string(),
            });
        }
        effects.extend(self.navigate_and_refetch());
        effects
    }

    /// Select or clear the city. Rejected unless state and district are
    /// both selected.
    pub fn select_city(&mut self, slug: Option<&str>) -> Vec<Effect> {
        if !self.state.select_location(LocationLevel::City, slug) {
            return Vec::new();
        }
        self.localities.clear();

        let mut effects = Vec::new();
        if let (Some(state), Some(district), Some(city)) = (
            self.state.location(LocationLevel::State),
            self.state.location(LocationLevel::District),
            self.state.location(LocationLevel::City),
        ) {
            effects.push(Effect::FetchLocalities {
                state: state.to_string(),
                district: district.to_string(),
                city: city.to_string(),
            });
        }
        effects.extend(self.navigate_and_refetch());
        effects
    }

    /// Select or clear the locality. Query-only: the locality never
    /// appears in the path, so no navigation is emitted.
    pub fn select_locality(&mut self, slug: Option<&str>) -> Vec<Effect> {
        if !self.state.select_location(LocationLevel::Locality, slug) {
            return Vec::new();
        }
        self.refetch_only()
    }

    pub fn select_category(&mut self, node: &CategoryNode) -> Vec<Effect> {
        self.state.select_category(node);
        self.navigate_and_refetch()
    }

    pub fn select_subcategory(&mut self, node: &CategoryNode) -> Vec<Effect> {
        self.state.select_category(node);
        self.navigate_and_refetch()
    }

    pub fn clear_category(&mut self) -> Vec<Effect> {
        self.state.clear_category();
        self.navigate_and_refetch()
    }

    pub fn set_search_text(&mut self, value: &str) -> Vec<Effect> {
        self.state.search_text = value.to_string();
        self.refetch_only()
    }

    pub fn set_min_price(&mut self, value: &str) -> Vec<Effect> {
        self.state.min_price = value.to_string();
        self.refetch_only()
    }

    pub fn set_max_price(&mut self, value: &str) -> Vec<Effect> {
        self.state.max_price = value.to_string();
        self.refetch_only()
    }

    /// Resolve a route-supplied category slug against the loaded category
    /// list. A match selects category (and subcategory when the match is
    /// one) and emits the canonical navigate/refetch pair; no match leaves
    /// the state untouched and reports `Pending`.
    pub fn resolve_category_slug(&mut self, slug: &str) -> (SlugResolution, Vec<Effect>) {
        match find_by_slug(&self.categories, slug).cloned() {
            Some(node) => {
                self.state.select_category(&node);
                (SlugResolution::Applied, self.navigate_and_refetch())
            }
            None => (SlugResolution::Pending, Vec::new()),
        }
    }

    /// Install the category list (global, no scope to check).
    pub fn set_categories(&mut self, items: Vec<CategoryNode>) {
        self.categories = items;
    }

    /// Install the state list (global, no scope to check).
    pub fn set_states(&mut self, items: Vec<LocationNode>) {
        self.states = items;
    }

    /// Install a district list fetched for `scope_state`. Discarded when
    /// the selection has moved on; returns whether it was applied.
    pub fn apply_districts(&mut self, scope_state: &str, items: Vec<LocationNode>) -> bool {
        if self.state.location(LocationLevel::State) != Some(scope_state) {
            return false;
        }
        self.districts = items;
        true
    }

    pub fn apply_cities(
        &mut self,
        scope_state: &str,
        scope_district: &str,
        items: Vec<LocationNode>,
    ) -> bool {
        if self.state.location(LocationLevel::State) != Some(scope_state)
            || self.state.location(LocationLevel::District) != Some(scope_district)
        {
            return false;
        }
        self.cities = items;
        true
    }

    pub fn apply_localities(
        &mut self,
        scope_state: &str,
        scope_district: &str,
        scope_city: &str,
        items: Vec<LocationNode>,
    ) -> bool {
        if self.state.location(LocationLevel::State) != Some(scope_state)
            || self.state.location(LocationLevel::District) != Some(scope_district)
            || self.state.location(LocationLevel::City) != Some(scope_city)
        {
            return false;
        }
        self.localities = items;
        true
    }

    /// Apply an inbound route (deep link, back/forward). Location levels
    /// are applied root-first; the category slug goes through
    /// [`Self::resolve_category_slug`] and may stay pending until the
    /// category list loads. Intermediate navigate/refetch effects are
    /// squashed to the final ones.
    pub fn apply_route(&mut self, route: &RouteSelection) -> (SlugResolution, Vec<Effect>) {
        let mut effects = self.select_state(route.state.as_deref());
        if route.district.is_some() {
            effects.extend(self.select_district(route.district.as_deref()));
        }
        if route.city.is_some() {
            effects.extend(self.select_city(route.city.as_deref()));
        }
        let mut resolution = SlugResolution::Applied;
        if let Some(slug) = route.category_slug.as_deref() {
            let (r, e) = self.resolve_category_slug(slug);
            resolution = r;
            effects.extend(e);
        }
        (resolution, squash(effects))
    }
}

/// Keep every fetch request in order but only the final navigate and the
/// final listing refetch.
fn squash(effects: Vec<Effect>) -> Vec<Effect> {
    let navigate = effects
        .iter()
        .rev()
        .find(|e| matches!(e, Effect::Navigate { .. }))
        .cloned();
    let refetch = effects
        .iter()
        .rev()
        .find(|e| matches!(e, Effect::RefetchListings { .. }))
        .cloned();
    let mut out: Vec<Effect> = effects
        .into_iter()
        .filter(|e| !matches!(e, Effect::Navigate { .. } | Effect::RefetchListings { .. }))
        .collect();
    out.extend(navigate);
    out.extend(refetch);
    out
}

#[cfg(test)]
mod tests {
    use super::super::path::parse_route;
    use super::*;

    fn category(id: i64, parent_id: Option<i64>, slug: &str) -> CategoryNode {
        CategoryNode {
            id,
            name: slug.to_string(),
            parent_id,
            slug: slug.to_string(),
        }
    }

    fn electronics_categories() -> Vec<CategoryNode> {
        vec![
            category(1, None, "electronics"),
            category(11, Some(1), "phones"),
        ]
    }

    fn nodes(names: &[&str]) -> Vec<LocationNode> {
        names
            .iter()
            .enumerate()
            .map(|(i, n)| LocationNode::new(i as i64 + 1, n))
            .collect()
    }

    fn select_full_location(c: &mut FilterController) {
        c.select_state(Some("california"));
        c.select_district(Some("los-angeles-county"));
        c.select_city(Some("los-angeles"));
    }

    #[test]
    fn test_full_path_with_subcategory() {
        let mut c = FilterController::new();
        c.set_categories(electronics_categories());
        select_full_location(&mut c);
        let phones = c.categories()[1].clone();
        c.select_subcategory(&phones);
        assert_eq!(
            c.current_path(),
            "/listings/california/los-angeles-county/los-angeles/category/phones"
        );
        assert_eq!(c.snapshot().category_id(), Some(1));
        assert_eq!(c.snapshot().subcategory_id(), Some(11));
    }

    #[test]
    fn test_category_only_path() {
        let mut c = FilterController::new();
        c.set_categories(electronics_categories());
        let electronics = c.categories()[0].clone();
        c.select_category(&electronics);
        assert_eq!(c.current_path(), "/listings/category/electronics");
    }

    #[test]
    fn test_clearing_state_keeps_category_segment() {
        let mut c = FilterController::new();
        c.set_categories(electronics_categories());
        let electronics = c.categories()[0].clone();
        c.select_category(&electronics);
        select_full_location(&mut c);
        c.select_state(None);
        for level in LocationLevel::ALL {
            assert_eq!(c.snapshot().location(level), None);
        }
        assert_eq!(c.current_path(), "/listings/category/electronics");
    }

    #[test]
    fn test_query_contains_only_set_fields() {
        let mut c = FilterController::new();
        c.set_min_price("100");
        c.set_max_price("500");
        c.set_search_text("chair");
        let q = c.current_query();
        assert_eq!(q.len(), 3);
        assert_eq!(q.get("location").map(String::as_str), Some("chair"));
        assert_eq!(q.get("min_price").map(String::as_str), Some("100"));
        assert_eq!(q.get("max_price").map(String::as_str), Some("500"));
    }

    #[test]
    fn test_city_before_state_is_rejected_without_effects() {
        let mut c = FilterController::new();
        let effects = c.select_city(Some("los-angeles"));
        assert!(effects.is_empty());
        for level in LocationLevel::ALL {
            assert_eq!(c.snapshot().location(level), None);
        }
    }

    #[test]
    fn test_selecting_state_requests_districts_and_navigates() {
        let mut c = FilterController::new();
        let effects = c.select_state(Some("california"));
        assert_eq!(
            effects[0],
            Effect::FetchDistricts {
                state: "california".to_string()
            }
        );
        assert!(matches!(&effects[1], Effect::Navigate { path } if path == "/listings/california"));
        assert!(matches!(&effects[2], Effect::RefetchListings { query }
            if query.get("state").map(String::as_str) == Some("california")));
    }

    #[test]
    fn test_clearing_state_still_navigates_but_fetches_nothing() {
        let mut c = FilterController::new();
        c.select_state(Some("california"));
        let effects = c.select_state(None);
        assert!(matches!(&effects[0], Effect::Navigate { path } if path == "/listings"));
        assert!(!effects
            .iter()
            .any(|e| matches!(e, Effect::FetchDistricts { .. })));
    }

    #[test]
    fn test_stale_district_response_is_discarded() {
        let mut c = FilterController::new();
        c.select_state(Some("california"));
        c.select_state(Some("karnataka"));
        // The response scoped to the abandoned selection arrives late.
        assert!(!c.apply_districts("california", nodes(&["Los Angeles County"])));
        assert!(c.districts().is_empty());
        assert!(c.apply_districts("karnataka", nodes(&["Mysore District"])));
        assert_eq!(c.districts()[0].slug, "mysore-district");
    }

    #[test]
    fn test_stale_city_response_checks_whole_scope() {
        let mut c = FilterController::new();
        c.select_state(Some("karnataka"));
        c.select_district(Some("mysore-district"));
        c.select_district(Some("udupi-district"));
        assert!(!c.apply_cities("karnataka", "mysore-district", nodes(&["Mysore"])));
        assert!(c.apply_cities("karnataka", "udupi-district", nodes(&["Udupi"])));
        assert_eq!(c.cities().len(), 1);
    }

    #[test]
    fn test_changing_ancestor_drops_descendant_lists() {
        let mut c = FilterController::new();
        c.select_state(Some("karnataka"));
        c.apply_districts("karnataka", nodes(&["Mysore District"]));
        c.select_district(Some("mysore-district"));
        c.apply_cities("karnataka", "mysore-district", nodes(&["Mysore"]));
        c.select_state(Some("goa"));
        assert!(c.districts().is_empty());
        assert!(c.cities().is_empty());
        assert!(c.localities().is_empty());
    }

    #[test]
    fn test_select_state_is_idempotent() {
        let mut c = FilterController::new();
        c.select_state(Some("karnataka"));
        let path = c.current_path();
        let query = c.current_query();
        c.select_state(Some("karnataka"));
        assert_eq!(c.current_path(), path);
        assert_eq!(c.current_query(), query);
    }

    #[test]
    fn test_locality_is_query_only() {
        let mut c = FilterController::new();
        select_full_location(&mut c);
        let path = c.current_path();
        let effects = c.select_locality(Some("venice"));
        assert_eq!(effects.len(), 1);
        assert!(matches!(&effects[0], Effect::RefetchListings { query }
            if query.get("locality").map(String::as_str) == Some("venice")));
        assert_eq!(c.current_path(), path);
    }

    #[test]
    fn test_resolve_slug_pending_until_categories_load() {
        let mut c = FilterController::new();
        let (resolution, effects) = c.resolve_category_slug("phones");
        assert_eq!(resolution, SlugResolution::Pending);
        assert!(effects.is_empty());
        assert_eq!(c.snapshot().category_slug(), None);

        c.set_categories(electronics_categories());
        let (resolution, effects) = c.resolve_category_slug("phones");
        assert_eq!(resolution, SlugResolution::Applied);
        assert_eq!(c.snapshot().category_id(), Some(1));
        assert_eq!(c.snapshot().subcategory_id(), Some(11));
        // The late resolution still has to land on the canonical path.
        assert!(matches!(&effects[0], Effect::Navigate { path }
            if *path == c.current_path()));
    }

    #[test]
    fn test_apply_route_round_trips() {
        let mut c = FilterController::new();
        c.set_categories(electronics_categories());
        let path = "/listings/california/los-angeles-county/category/phones";
        let route = parse_route(path).unwrap();
        let (resolution, effects) = c.apply_route(&route);
        assert_eq!(resolution, SlugResolution::Applied);
        assert_eq!(c.current_path(), path);
        // One squashed navigate/refetch pair at the end, fetches first.
        assert_eq!(
            effects
                .iter()
                .filter(|e| matches!(e, Effect::Navigate { .. }))
                .count(),
            1
        );
        assert!(matches!(effects.last(), Some(Effect::RefetchListings { .. })));
        assert!(matches!(
            &effects[0],
            Effect::FetchDistricts { state } if state == "california"
        ));
        // The surviving navigate must reflect the fully applied route,
        // category segment included, not an intermediate location-only path.
        assert!(effects.iter().any(|e| matches!(e, Effect::Navigate { path: p }
            if p == path)));
    }

    #[test]
    fn test_apply_route_navigates_to_path_with_category() {
        let mut c = FilterController::new();
        c.set_categories(electronics_categories());
        let route = parse_route("/listings/karnataka/category/electronics").unwrap();
        let (_, effects) = c.apply_route(&route);
        let navigate = effects
            .iter()
            .find_map(|e| match e {
                Effect::Navigate { path } => Some(path.clone()),
                _ => None,
            })
            .unwrap();
        assert_eq!(navigate, "/listings/karnataka/category/electronics");
        assert_eq!(navigate, c.current_path());
    }

    #[test]
    fn test_fetch_failure_policy_leaves_selection_alone() {
        // A failed district fetch simply never calls apply_districts; the
        // selection must stay valid with an empty option list.
        let mut c = FilterController::new();
        c.select_state(Some("karnataka"));
        assert_eq!(
            c.snapshot().location(LocationLevel::State),
            Some("karnataka")
        );
        assert!(c.districts().is_empty());
        assert!(c.snapshot().cascade_invariant_holds());
    }
}
