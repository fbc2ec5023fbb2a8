use web_sys::window;

/// Browser alert; the original UI surfaces auth and sell-flow outcomes
/// this way.
pub fn alert(message: &str) {
    if let Some(w) = window() {
        let _ = w.alert_with_message(message);
    }
}
