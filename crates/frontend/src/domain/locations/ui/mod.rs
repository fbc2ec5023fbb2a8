use crate::layout::use_app_context;
use contracts::domain::{LocationLevel, LocationNode};
use leptos::prelude::*;

fn to_selection(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

/// The four dependent location drill-downs. Each deeper select only
/// renders once its parent is chosen; its options come from the
/// controller's scoped lists, so they are always consistent with the
/// current ancestor selection.
#[component]
#[allow(non_snake_case)]
pub fn LocationFilter() -> impl IntoView {
    let ctx = use_app_context();

    let selected = move |level: LocationLevel| {
        ctx.filters
            .with(|f| f.snapshot().location(level).unwrap_or("").to_string())
    };

    let states = move || ctx.filters.with(|f| f.states().to_vec());
    let districts = move || ctx.filters.with(|f| f.districts().to_vec());
    let cities = move || ctx.filters.with(|f| f.cities().to_vec());
    let localities = move || ctx.filters.with(|f| f.localities().to_vec());

    let options = |nodes: Vec<LocationNode>| {
        nodes
            .into_iter()
            .map(|n| view! { <option value=n.slug.clone()>{n.name.clone()}</option> })
            .collect_view()
    };

    view! {
        <div class="filter-group location-filter">
            <label class="field-inline">
                <span>"State"</span>
                <select
                    prop:value=move || selected(LocationLevel::State)
                    on:change=move |ev| ctx.select_state(to_selection(event_target_value(&ev)))
                >
                    <option value="">"All states"</option>
                    {move || options(states())}
                </select>
            </label>

            <Show when=move || !selected(LocationLevel::State).is_empty()>
                <label class="field-inline">
                    <span>"District"</span>
                    <select
                        prop:value=move || selected(LocationLevel::District)
                        on:change=move |ev| {
                            ctx.select_district(to_selection(event_target_value(&ev)))
                        }
                    >
                        <option value="">"All districts"</option>
                        {move || options(districts())}
                    </select>
                </label>
            </Show>

            <Show when=move || !selected(LocationLevel::District).is_empty()>
                <label class="field-inline">
                    <span>"City"</span>
                    <select
                        prop:value=move || selected(LocationLevel::City)
                        on:change=move |ev| ctx.select_city(to_selection(event_target_value(&ev)))
                    >
                        <option value="">"All cities"</option>
                        {move || options(cities())}
                    </select>
                </label>
            </Show>

            <Show when=move || !selected(LocationLevel::City).is_empty()>
                <label class="field-inline">
                    <span>"Locality"</span>
                    <select
                        prop:value=move || selected(LocationLevel::Locality)
                        on:change=move |ev| {
                            ctx.select_locality(to_selection(event_target_value(&ev)))
                        }
                    >
                        <option value="">"All localities"</option>
                        {move || options(localities())}
                    </select>
                </label>
            </Show>
        </div>
    }
}
