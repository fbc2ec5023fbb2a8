use crate::domain::listings::ui::list::ListingList;
use crate::domain::listings::ui::sell::SellModal;
use crate::domain::locations::ui::LocationFilter;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::header::Header;
use crate::system::auth::ui::AuthModal;
use leptos::prelude::*;

#[component]
fn ListingsPage() -> impl IntoView {
    view! {
        <div class="page-root">
            <Header />
            <div class="layout">
                <div class="main-content">
                    <LocationFilter />
                    <ListingList />
                </div>
            </div>
            <AuthModal />
            <SellModal />
        </div>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    // Apply the inbound route and kick off the option-list fetches. This
    // runs once when the component is created.
    ctx.init_router_integration();

    view! { <ListingsPage /> }
}
