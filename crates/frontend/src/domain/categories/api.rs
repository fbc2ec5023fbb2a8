use crate::shared::api_utils::{api_url, get_text};
use contracts::domain::CategoryNode;

/// Flat category list from the listing service.
pub async fn fetch_categories() -> Result<Vec<CategoryNode>, String> {
    let text = get_text(&api_url("/categories")).await?;
    serde_json::from_str(&text).map_err(|e| format!("{e}"))
}
