use crate::layout::{use_app_context, LoginSource};
use crate::shared::dom_utils::alert;
use crate::system::auth::context::{use_auth, AuthState};
use crate::system::auth::{api, storage};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// Combined register/login modal.
#[component]
#[allow(non_snake_case)]
pub fn AuthModal() -> impl IntoView {
    let ctx = use_app_context();
    let (auth_state, set_auth_state) = use_auth();
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());

    let close = move || {
        ctx.auth_modal_open.set(false);
        ctx.login_source.set(None);
    };

    let handle_register = move |_| {
        let email = email.get_untracked();
        let password = password.get_untracked();
        spawn_local(async move {
            match api::register(email, password).await {
                Ok(()) => alert("Registered successfully. Please log in."),
                Err(e) => alert(&e),
            }
        });
    };

    let handle_login = move |_| {
        let email = email.get_untracked();
        let password = password.get_untracked();
        spawn_local(async move {
            match api::login(email.clone(), password).await {
                Ok(response) => {
                    storage::save_session(&response.token, &email);
                    set_auth_state.set(AuthState {
                        token: Some(response.token),
                        email: Some(email),
                    });
                    ctx.auth_modal_open.set(false);
                    if ctx.login_source.get_untracked() == Some(LoginSource::Sell) {
                        ctx.sell_modal_open.set(true);
                    }
                    ctx.login_source.set(None);
                }
                Err(e) => {
                    set_auth_state.set(AuthState::default());
                    alert(&e);
                }
            }
        });
    };

    let is_logged_in = move || auth_state.get().is_logged_in();

    view! {
        <Show when=move || ctx.auth_modal_open.get()>
            <div class="modal-backdrop" on:click=move |_| close()>
                <div class="modal" on:click=move |ev| ev.stop_propagation()>
                    <h2>"Register / Login"</h2>
                    <label class="field">
                        <span>"Email"</span>
                        <input
                            type="email"
                            placeholder="you@example.com"
                            prop:value=email
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="field">
                        <span>"Password"</span>
                        <input
                            type="password"
                            prop:value=password
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                        />
                    </label>
                    <div class="button-row">
                        <button
                            class="btn secondary"
                            on:click=handle_register
                            disabled=is_logged_in
                        >
                            "Register"
                        </button>
                        <button class="btn primary" on:click=handle_login>
                            "Login"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
