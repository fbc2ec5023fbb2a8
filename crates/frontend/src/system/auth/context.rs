use leptos::prelude::*;

use super::storage;

#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub token: Option<String>,
    pub email: Option<String>,
}

impl AuthState {
    pub fn is_logged_in(&self) -> bool {
        self.token.is_some()
    }
}

/// Auth context provider component. Restores the session saved in
/// localStorage on mount; the token itself is opaque to the frontend.
#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    let (auth_state, set_auth_state) = signal(AuthState::default());

    if let Some(token) = storage::get_token() {
        set_auth_state.set(AuthState {
            token: Some(token),
            email: storage::get_email(),
        });
    }

    provide_context(auth_state);
    provide_context(set_auth_state);

    children()
}

/// Hook to access auth state
pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    let auth_state =
        use_context::<ReadSignal<AuthState>>().expect("AuthProvider not found in component tree");
    let set_auth_state =
        use_context::<WriteSignal<AuthState>>().expect("AuthProvider not found in component tree");

    (auth_state, set_auth_state)
}
