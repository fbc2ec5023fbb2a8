use crate::domain::categories::ui::CategoryBar;
use crate::layout::{use_app_context, LoginSource};
use crate::system::auth::context::{use_auth, AuthState};
use crate::system::auth::storage;
use leptos::prelude::*;

/// Top navbar: logo, category bar and the auth/sell actions.
#[component]
#[allow(non_snake_case)]
pub fn Header() -> impl IntoView {
    let ctx = use_app_context();
    let (auth_state, set_auth_state) = use_auth();

    let is_logged_in = move || auth_state.get().is_logged_in();
    let status = move || {
        auth_state
            .get()
            .email
            .map(|e| format!("Logged in as {}", e))
            .unwrap_or_else(|| "Guest".to_string())
    };

    let open_auth_modal = move |source: LoginSource| {
        ctx.login_source.set(Some(source));
        ctx.auth_modal_open.set(true);
    };

    let handle_logout = move |_| {
        storage::clear_session();
        set_auth_state.set(AuthState::default());
        ctx.auth_modal_open.set(false);
        ctx.sell_modal_open.set(false);
        ctx.login_source.set(None);
        ctx.clear_category();
    };

    let handle_sell = move |_| {
        if is_logged_in() {
            ctx.sell_modal_open.set(true);
        } else {
            open_auth_modal(LoginSource::Sell);
        }
    };

    view! {
        <header class="navbar">
            <div class="logo">"Huduku"</div>

            <CategoryBar />

            <div class="nav-actions">
                <button
                    class="btn secondary"
                    disabled=is_logged_in
                    on:click=move |_| {
                        if !is_logged_in() {
                            open_auth_modal(LoginSource::Header);
                        }
                    }
                >
                    "Register"
                </button>

                <Show
                    when=is_logged_in
                    fallback=move || view! {
                        <button
                            class="btn secondary"
                            on:click=move |_| open_auth_modal(LoginSource::Header)
                        >
                            "Login"
                        </button>
                    }
                >
                    <button class="btn secondary" on:click=handle_logout>
                        "Logout"
                    </button>
                </Show>

                <button class="btn primary" on:click=handle_sell>
                    "Sell"
                </button>

                <span class="status">{status}</span>
            </div>
        </header>
    }
}
