use web_sys::window;

const TOKEN_KEY: &str = "auth_token";
const EMAIL_KEY: &str = "auth_email";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Save the session to localStorage
pub fn save_session(token: &str, email: &str) {
    if let Some(storage) = get_local_storage() {
        let _ = storage.set_item(TOKEN_KEY, token);
        let _ = storage.set_item(EMAIL_KEY, email);
    }
}

/// Get the saved token from localStorage
pub fn get_token() -> Option<String> {
    get_local_storage()?.get_item(TOKEN_KEY).ok()?
}

/// Get the saved email from localStorage
pub fn get_email() -> Option<String> {
    get_local_storage()?.get_item(EMAIL_KEY).ok()?
}

/// Clear the saved session
pub fn clear_session() {
    if let Some(storage) = get_local_storage() {
        let _ = storage.remove_item(TOKEN_KEY);
        let _ = storage.remove_item(EMAIL_KEY);
    }
}
