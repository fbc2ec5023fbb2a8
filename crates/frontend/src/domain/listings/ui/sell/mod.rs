use crate::domain::listings::api;
use crate::layout::{use_app_context, LoginSource};
use crate::shared::dom_utils::alert;
use crate::system::auth::context::use_auth;
use contracts::domain::ListingDraft;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;

/// Create-listing modal: draft form, at least one image required, then a
/// POST followed by one upload per image.
#[component]
#[allow(non_snake_case)]
pub fn SellModal() -> impl IntoView {
    let ctx = use_app_context();
    let (auth_state, _) = use_auth();
    let draft = RwSignal::new(ListingDraft::default());
    // web_sys::File is not Send; keep the picked files thread-local.
    let picked_files = StoredValue::new_local(Vec::<web_sys::File>::new());

    let close = move || ctx.sell_modal_open.set(false);

    let handle_file_select = move |ev: web_sys::Event| {
        let input = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok());
        let mut files = Vec::new();
        if let Some(list) = input.and_then(|i| i.files()) {
            for i in 0..list.length() {
                if let Some(file) = list.get(i) {
                    files.push(file);
                }
            }
        }
        picked_files.set_value(files);
    };

    let publish = move |_| {
        let current = draft.get_untracked();
        if let Err(e) = current.validate() {
            alert(&e);
            return;
        }
        let files = picked_files.get_value();
        if files.is_empty() {
            alert("Please upload at least one image.");
            return;
        }
        let Some(token) = auth_state.get_untracked().token else {
            alert("Please log in first.");
            ctx.login_source.set(Some(LoginSource::Sell));
            ctx.auth_modal_open.set(true);
            return;
        };

        spawn_local(async move {
            let listing_id = match api::create_listing(&current, &token).await {
                Ok(id) => id,
                Err(e) => {
                    alert(&e);
                    return;
                }
            };
            for file in &files {
                if let Err(e) = api::upload_listing_image(listing_id, file, &token).await {
                    log::error!("image upload failed: {}", e);
                    alert("One of the images failed to upload.");
                }
            }
            alert("Listing created with images.");
            draft.set(ListingDraft::default());
            picked_files.set_value(Vec::new());
            ctx.sell_modal_open.set(false);
            ctx.refetch_listings();
        });
    };

    let category_options = move || {
        ctx.filters.with(|f| {
            f.categories()
                .iter()
                .map(|c| {
                    view! {
                        <option value=c.id.to_string()>{c.name.clone()}</option>
                    }
                })
                .collect_view()
        })
    };

    view! {
        <Show when=move || ctx.sell_modal_open.get()>
            <div class="modal-backdrop" on:click=move |_| close()>
                <div class="modal" on:click=move |ev| ev.stop_propagation()>
                    <h2>"Create Listing"</h2>
                    <label class="field">
                        <span>"Title"</span>
                        <input
                            prop:value=move || draft.with(|d| d.title.clone())
                            on:input=move |ev| {
                                let v = event_target_value(&ev);
                                draft.update(|d| d.title = v);
                            }
                        />
                    </label>
                    <label class="field">
                        <span>"Category"</span>
                        <select
                            prop:value=move || draft.with(|d| d.category.to_string())
                            on:change=move |ev| {
                                if let Ok(id) = event_target_value(&ev).parse::<i64>() {
                                    draft.update(|d| d.category = id);
                                }
                            }
                        >
                            {category_options}
                        </select>
                    </label>
                    <label class="field">
                        <span>"Price"</span>
                        <input
                            type="number"
                            prop:value=move || draft.with(|d| d.price.to_string())
                            on:input=move |ev| {
                                let v = event_target_value(&ev).parse::<f64>().unwrap_or(0.0);
                                draft.update(|d| d.price = v);
                            }
                        />
                    </label>
                    <label class="field">
                        <span>"Location"</span>
                        <input
                            prop:value=move || draft.with(|d| d.location.clone())
                            on:input=move |ev| {
                                let v = event_target_value(&ev);
                                draft.update(|d| d.location = v);
                            }
                        />
                    </label>
                    <label class="field">
                        <span>"Description"</span>
                        <textarea
                            prop:value=move || draft.with(|d| d.description.clone())
                            on:input=move |ev| {
                                let v = event_target_value(&ev);
                                draft.update(|d| d.description = v);
                            }
                        ></textarea>
                    </label>
                    <label class="field">
                        <span>"Images (at least one)"</span>
                        <input
                            type="file"
                            accept="image/*"
                            multiple
                            on:change=handle_file_select
                        />
                    </label>
                    <div class="button-row">
                        <button class="btn secondary" on:click=move |_| close()>
                            "Cancel"
                        </button>
                        <button class="btn primary" on:click=publish>
                            "Publish"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
