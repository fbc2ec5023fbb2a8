pub mod state;

use self::state::create_state;
use crate::domain::listings::api;
use crate::layout::use_app_context;
use crate::shared::api_utils::media_url;
use contracts::domain::Listing;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

const FETCH_DEBOUNCE_MS: u32 = 250;

fn format_created(dt: chrono::DateTime<chrono::Utc>) -> String {
    dt.format("%Y-%m-%d").to_string()
}

/// Server-side filter bar plus the listing grid. Refetches whenever the
/// controller reports a query change, debounced so a typing burst or a
/// cascade of selections produces one request.
#[component]
#[allow(non_snake_case)]
pub fn ListingList() -> impl IntoView {
    let ctx = use_app_context();
    let state = create_state();
    let (items, set_items) = signal::<Vec<Listing>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);

    Effect::new(move |_| {
        let version = ctx.query_version.get();
        // Untracked: option-list updates must not retrigger the fetch.
        let query = ctx.filters.with_untracked(|f| f.current_query());
        spawn_local(async move {
            TimeoutFuture::new(FETCH_DEBOUNCE_MS).await;
            if ctx.query_version.get_untracked() != version {
                return; // superseded while we were waiting
            }
            match api::fetch_listings(&query).await {
                Ok(v) => {
                    set_items.set(v);
                    set_error.set(None);
                }
                Err(e) => {
                    log::error!("listing fetch failed: {}", e);
                    set_items.set(Vec::new());
                    set_error.set(Some(e));
                }
            }
        });
    });

    let search_text = move || ctx.filters.with(|f| f.snapshot().search_text.clone());
    let min_price = move || ctx.filters.with(|f| f.snapshot().min_price.clone());
    let max_price = move || ctx.filters.with(|f| f.snapshot().max_price.clone());

    let filtered_items = move || {
        let search = state.with(|s| s.client_search.clone());
        items
            .get()
            .into_iter()
            .filter(|l| l.matches_search(&search))
            .collect::<Vec<_>>()
    };

    view! {
        <section class="filter-bar">
            <div class="filter-group">
                <label class="field-inline">
                    <span>"Search"</span>
                    <input
                        type="text"
                        placeholder="Search listings..."
                        prop:value=move || state.with(|s| s.client_search.clone())
                        on:input=move |ev| {
                            let v = event_target_value(&ev);
                            state.update(|s| s.client_search = v);
                        }
                    />
                </label>
            </div>

            <div class="filter-group">
                <label class="field-inline">
                    <span>"Location"</span>
                    <input
                        type="text"
                        placeholder="City, area..."
                        prop:value=search_text
                        on:input=move |ev| ctx.set_search_text(event_target_value(&ev))
                    />
                </label>
                <label class="field-inline">
                    <span>"Min price"</span>
                    <input
                        type="number"
                        prop:value=min_price
                        on:input=move |ev| ctx.set_min_price(event_target_value(&ev))
                    />
                </label>
                <label class="field-inline">
                    <span>"Max price"</span>
                    <input
                        type="number"
                        prop:value=max_price
                        on:input=move |ev| ctx.set_max_price(event_target_value(&ev))
                    />
                </label>
            </div>
        </section>

        <main class="listing-section">
            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}
            <Show when=move || filtered_items().is_empty()>
                <div class="empty-state">"No listings found."</div>
            </Show>
            <div class="listing-grid">
                {move || filtered_items().into_iter().map(|item| {
                    let image = item.first_image().map(media_url);
                    let description = if item.description.is_empty() {
                        "No description provided.".to_string()
                    } else {
                        item.description.clone()
                    };
                    view! {
                        <div class="listing-card">
                            {image.map(|src| view! {
                                <div class="listing-image-wrapper">
                                    <img src=src alt=item.title.clone() class="listing-image" />
                                </div>
                            })}
                            <h3 class="listing-title">{item.title.clone()}</h3>
                            <p class="listing-location">{item.location.clone()}</p>
                            <p class="listing-price">{format!("${}", item.price)}</p>
                            <p class="listing-desc">{description}</p>
                            {item.created_at.map(|dt| view! {
                                <p class="listing-date">{format_created(dt)}</p>
                            })}
                        </div>
                    }
                }).collect_view()}
            </div>
        </main>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_created() {
        let dt = chrono::DateTime::parse_from_rfc3339("2024-03-15T14:02:26Z")
            .unwrap()
            .with_timezone(&chrono::Utc);
        assert_eq!(format_created(dt), "2024-03-15");
    }
}
