use crate::layout::use_app_context;
use contracts::domain::CategoryTree;
use leptos::prelude::*;

/// Top navigation category bar: an "All" reset, a button per top-level
/// category and a dropdown of its subcategories. Active selection is
/// highlighted; clicks go through the filter controller.
#[component]
#[allow(non_snake_case)]
pub fn CategoryBar() -> impl IntoView {
    let ctx = use_app_context();

    let tree = move || ctx.filters.with(|f| CategoryTree::build(f.categories()));
    let selected_category = move || ctx.filters.with(|f| f.snapshot().category_id());
    let selected_subcategory = move || ctx.filters.with(|f| f.snapshot().subcategory_id());

    view! {
        <nav class="category-bar">
            <button class="category-all" on:click=move |_| ctx.clear_category()>
                "All"
            </button>
            {move || tree().into_iter().map(|cat| {
                let node = cat.node.clone();
                let cat_id = node.id;
                view! {
                    <div class="category-top-item">
                        <button
                            class="category-top-button"
                            class:active=move || {
                                selected_category() == Some(cat_id)
                                    && selected_subcategory().is_none()
                            }
                            on:click={
                                let node = node.clone();
                                move |_| ctx.select_category(node.clone())
                            }
                        >
                            {node.name.clone()}
                        </button>
                        {(!cat.subcategories.is_empty()).then(|| view! {
                            <div class="dropdown">
                                {cat.subcategories.iter().map(|sub| {
                                    let sub = sub.clone();
                                    let sub_id = sub.id;
                                    view! {
                                        <button
                                            class="dropdown-item"
                                            class:active=move || {
                                                selected_subcategory() == Some(sub_id)
                                            }
                                            on:click={
                                                let sub = sub.clone();
                                                move |_| ctx.select_subcategory(sub.clone())
                                            }
                                        >
                                            {sub.name.clone()}
                                        </button>
                                    }
                                }).collect_view()}
                            </div>
                        })}
                    </div>
                }
            }).collect_view()}
        </nav>
    }
}
