use crate::domain::{categories, locations};
use crate::shared::filters::controller::{Effect, FilterController, SlugResolution};
use crate::shared::filters::path::parse_route;
use contracts::domain::category::placeholder_categories;
use contracts::domain::{CategoryNode, LocationLevel, LocationNode};
use leptos::prelude::*;
use std::collections::HashMap;
use wasm_bindgen_futures::spawn_local;
use web_sys::window;

/// Where the auth modal was opened from; a login that started from the
/// Sell button continues into the sell modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginSource {
    Header,
    Sell,
}

/// App-wide state: the filter controller plus the modal flags. All filter
/// mutations go through the methods here so that every emitted effect
/// (dependent-list fetch, navigation, listing refetch) is executed.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub filters: RwSignal<FilterController>,
    /// Bumped on every listing-refetch effect; the grid debounces on it.
    pub query_version: RwSignal<u64>,
    /// Route-supplied category slug waiting for the category list.
    pub pending_category_slug: RwSignal<Option<String>>,
    pub auth_modal_open: RwSignal<bool>,
    pub sell_modal_open: RwSignal<bool>,
    pub login_source: RwSignal<Option<LoginSource>>,
}

pub fn use_app_context() -> AppGlobalContext {
    use_context::<AppGlobalContext>().expect("AppGlobalContext not found in component tree")
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            filters: RwSignal::new(FilterController::new()),
            query_version: RwSignal::new(0),
            pending_category_slug: RwSignal::new(None),
            auth_modal_open: RwSignal::new(false),
            sell_modal_open: RwSignal::new(false),
            login_source: RwSignal::new(None),
        }
    }

    // ------------------------------------------------------------------
    // Filter mutations (each applies atomically, then runs the effects)
    // ------------------------------------------------------------------

    fn update_filters(self, f: impl FnOnce(&mut FilterController) -> Vec<Effect>) {
        let effects = self.filters.try_update(f).unwrap_or_default();
        self.dispatch(effects);
    }

    pub fn select_state(self, slug: Option<String>) {
        self.update_filters(|c| c.select_state(slug.as_deref()));
    }

    pub fn select_district(self, slug: Option<String>) {
        self.update_filters(|c| c.select_district(slug.as_deref()));
    }

    pub fn select_city(self, slug: Option<String>) {
        self.update_filters(|c| c.select_city(slug.as_deref()));
    }

    pub fn select_locality(self, slug: Option<String>) {
        self.update_filters(|c| c.select_locality(slug.as_deref()));
    }

    pub fn select_category(self, node: CategoryNode) {
        self.update_filters(|c| c.select_category(&node));
    }

    pub fn select_subcategory(self, node: CategoryNode) {
        self.update_filters(|c| c.select_subcategory(&node));
    }

    pub fn clear_category(self) {
        self.update_filters(|c| c.clear_category());
    }

    pub fn set_search_text(self, value: String) {
        self.update_filters(|c| c.set_search_text(&value));
    }

    pub fn set_min_price(self, value: String) {
        self.update_filters(|c| c.set_min_price(&value));
    }

    pub fn set_max_price(self, value: String) {
        self.update_filters(|c| c.set_max_price(&value));
    }

    pub fn refetch_listings(self) {
        self.query_version.update(|v| *v += 1);
    }

    // ------------------------------------------------------------------
    // Effect execution
    // ------------------------------------------------------------------

    pub fn dispatch(self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::FetchDistricts { state } => self.run_fetch_districts(state),
                Effect::FetchCities { state, district } => self.run_fetch_cities(state, district),
                Effect::FetchLocalities {
                    state,
                    district,
                    city,
                } => self.run_fetch_localities(state, district, city),
                Effect::Navigate { path } => navigate_to(&path),
                Effect::RefetchListings { .. } => self.refetch_listings(),
            }
        }
    }

    fn run_fetch_districts(self, state: String) {
        let Some(code) = self.filters.with_untracked(|f| code_of(f.states(), &state)) else {
            // State list not loaded yet; init re-requests once it is.
            log::debug!("no code for state '{}' yet, skipping district fetch", state);
            return;
        };
        spawn_local(async move {
            match locations::api::fetch_districts(code).await {
                Ok(items) => {
                    let applied = self
                        .filters
                        .try_update(|f| f.apply_districts(&state, items))
                        .unwrap_or(false);
                    if applied {
                        // Deep links select deeper levels before their
                        // option lists exist; request the next one now.
                        let next = self.filters.with_untracked(|f| {
                            match (f.snapshot().location(LocationLevel::District), f.cities()) {
                                (Some(district), cities) if cities.is_empty() => {
                                    Some(Effect::FetchCities {
                                        state: state.clone(),
                                        district: district.to_string(),
                                    })
                                }
                                _ => None,
                            }
                        });
                        if let Some(e) = next {
                            self.dispatch(vec![e]);
                        }
                    }
                }
                Err(e) => log::warn!("district fetch failed: {}", e),
            }
        });
    }

    fn run_fetch_cities(self, state: String, district: String) {
        let Some(code) = self
            .filters
            .with_untracked(|f| code_of(f.districts(), &district))
        else {
            log::debug!(
                "no code for district '{}' yet, skipping city fetch",
                district
            );
            return;
        };
        let Some(state_code) = self.filters.with_untracked(|f| code_of(f.states(), &state)) else {
            return;
        };
        spawn_local(async move {
            match locations::api::fetch_cities(state_code, code).await {
                Ok(items) => {
                    let applied = self
                        .filters
                        .try_update(|f| f.apply_cities(&state, &district, items))
                        .unwrap_or(false);
                    if applied {
                        let next = self.filters.with_untracked(|f| {
                            match (f.snapshot().location(LocationLevel::City), f.localities()) {
                                (Some(city), localities) if localities.is_empty() => {
                                    Some(Effect::FetchLocalities {
                                        state: state.clone(),
                                        district: district.clone(),
                                        city: city.to_string(),
                                    })
                                }
                                _ => None,
                            }
                        });
                        if let Some(e) = next {
                            self.dispatch(vec![e]);
                        }
                    }
                }
                Err(e) => log::warn!("city fetch failed: {}", e),
            }
        });
    }

    fn run_fetch_localities(self, state: String, district: String, city: String) {
        let codes = self.filters.with_untracked(|f| {
            Some((
                code_of(f.states(), &state)?,
                code_of(f.districts(), &district)?,
                code_of(f.cities(), &city)?,
            ))
        });
        let Some((state_code, district_code, city_code)) = codes else {
            log::debug!("no code for city '{}' yet, skipping locality fetch", city);
            return;
        };
        spawn_local(async move {
            match locations::api::fetch_localities(state_code, district_code, city_code).await {
                Ok(items) => {
                    self.filters
                        .update(|f| {
                            f.apply_localities(&state, &district, &city, items);
                        });
                }
                Err(e) => log::warn!("locality fetch failed: {}", e),
            }
        });
    }

    // ------------------------------------------------------------------
    // Startup: option lists and inbound route
    // ------------------------------------------------------------------

    /// Runs once when the listings view is created: applies the inbound
    /// route and query string, then loads the category and state lists.
    pub fn init_router_integration(self) {
        let pathname = window()
            .and_then(|w| w.location().pathname().ok())
            .unwrap_or_default();
        if let Some(route) = parse_route(&pathname) {
            let mut pending = None;
            let effects = self
                .filters
                .try_update(|f| {
                    let (resolution, effects) = f.apply_route(&route);
                    if resolution == SlugResolution::Pending {
                        pending = route.category_slug.clone();
                    }
                    effects
                })
                .unwrap_or_default();
            self.pending_category_slug.set(pending);
            self.dispatch(effects);
        }

        // Filter fields carried in the query string survive a reload.
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let params: HashMap<String, String> =
            serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
        if let Some(v) = params.get("location") {
            self.set_search_text(v.clone());
        }
        if let Some(v) = params.get("min_price") {
            self.set_min_price(v.clone());
        }
        if let Some(v) = params.get("max_price") {
            self.set_max_price(v.clone());
        }

        spawn_local(async move {
            let items = match categories::api::fetch_categories().await {
                Ok(items) => items,
                Err(e) => {
                    log::warn!("category fetch failed, using placeholder: {}", e);
                    placeholder_categories()
                }
            };
            self.filters.update(|f| f.set_categories(items));
            self.retry_pending_category_slug();
        });

        spawn_local(async move {
            match locations::api::fetch_states().await {
                Ok(items) => {
                    self.filters.update(|f| f.set_states(items));
                    // A deep-linked state selection could not fetch its
                    // districts before the codes were known; retry now.
                    let next = self.filters.with_untracked(|f| {
                        f.snapshot()
                            .location(LocationLevel::State)
                            .map(|s| Effect::FetchDistricts {
                                state: s.to_string(),
                            })
                    });
                    if let Some(e) = next {
                        self.dispatch(vec![e]);
                    }
                }
                Err(e) => log::warn!("state fetch failed: {}", e),
            }
        });
    }

    /// Retry a route-supplied category slug once the category list is in.
    pub fn retry_pending_category_slug(self) {
        let Some(slug) = self.pending_category_slug.get_untracked() else {
            return;
        };
        let mut applied = false;
        let effects = self
            .filters
            .try_update(|f| {
                let (resolution, effects) = f.resolve_category_slug(&slug);
                applied = resolution == SlugResolution::Applied;
                effects
            })
            .unwrap_or_default();
        if applied {
            self.pending_category_slug.set(None);
        }
        self.dispatch(effects);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

fn code_of(nodes: &[LocationNode], slug: &str) -> Option<i64> {
    nodes.iter().find(|n| n.slug == slug).map(|n| n.code)
}

/// Put the canonical path into the address bar without reloading,
/// preserving the query string. No-op when already current.
fn navigate_to(path: &str) {
    let Some(w) = window() else {
        return;
    };
    let location = w.location();
    if location.pathname().ok().as_deref() == Some(path) {
        return;
    }
    let search = location.search().unwrap_or_default();
    let new_url = format!("{}{}", path, search);
    if let Ok(history) = w.history() {
        let _ = history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&new_url));
    }
}
