//! Region service client. The service keys its nested routes by numeric
//! codes and returns `{code, name}` rows; slugs are derived on the way in
//! (`LocationNode::from_api`).

use crate::shared::api_utils::{api_url, get_text};
use contracts::domain::LocationNode;

async fn fetch_nodes(path: &str) -> Result<Vec<LocationNode>, String> {
    let text = get_text(&api_url(path)).await?;
    let rows: Vec<LocationNode> = serde_json::from_str(&text).map_err(|e| format!("{e}"))?;
    Ok(rows.into_iter().map(LocationNode::from_api).collect())
}

pub async fn fetch_states() -> Result<Vec<LocationNode>, String> {
    fetch_nodes("/states").await
}

pub async fn fetch_districts(state_code: i64) -> Result<Vec<LocationNode>, String> {
    fetch_nodes(&format!("/states/{}/districts", state_code)).await
}

pub async fn fetch_cities(state_code: i64, district_code: i64) -> Result<Vec<LocationNode>, String> {
    fetch_nodes(&format!(
        "/states/{}/districts/{}/cities",
        state_code, district_code
    ))
    .await
}

pub async fn fetch_localities(
    state_code: i64,
    district_code: i64,
    city_code: i64,
) -> Result<Vec<LocationNode>, String> {
    fetch_nodes(&format!(
        "/states/{}/districts/{}/cities/{}/locality",
        state_code, district_code, city_code
    ))
    .await
}
