use crate::shared::api_utils::{api_url, get_text};
use crate::shared::filters::query::encode_query;
use contracts::domain::{Listing, ListingDraft};
use std::collections::BTreeMap;

/// Fetch listings matching the current filter query.
pub async fn fetch_listings(query: &BTreeMap<String, String>) -> Result<Vec<Listing>, String> {
    let qs = encode_query(query);
    let url = if qs.is_empty() {
        api_url("/listings-with-images")
    } else {
        api_url(&format!("/listings-with-images?{}", qs))
    };
    let text = get_text(&url).await?;
    serde_json::from_str(&text).map_err(|e| format!("{e}"))
}

/// Create a listing; returns the new listing id.
pub async fn create_listing(draft: &ListingDraft, token: &str) -> Result<i64, String> {
    let response = gloo_net::http::Request::post(&api_url("/listing/create"))
        .header("Authorization", &format!("Bearer {}", token))
        .json(draft)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        let err = response
            .json::<contracts::domain::ApiError>()
            .await
            .unwrap_or_default();
        return Err(err.message(&format!("Create failed: {}", response.status())));
    }

    let body = response
        .json::<serde_json::Value>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;
    body.get("id")
        .and_then(|v| v.as_i64())
        .ok_or_else(|| "Listing created but ID missing in response".to_string())
}

/// Upload one image for a listing (multipart form, field name `image`).
pub async fn upload_listing_image(
    listing_id: i64,
    file: &web_sys::File,
    token: &str,
) -> Result<(), String> {
    use wasm_bindgen::JsCast;
    use web_sys::{FormData, Request, RequestInit, RequestMode, Response};

    let form = FormData::new().map_err(|e| format!("{e:?}"))?;
    form.append_with_blob("image", file)
        .map_err(|e| format!("{e:?}"))?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&form);

    let url = api_url(&format!("/listing/{}/image/upload", listing_id));
    let request = Request::new_with_str_and_init(&url, &opts).map_err(|e| format!("{e:?}"))?;
    request
        .headers()
        .set("Authorization", &format!("Bearer {}", token))
        .map_err(|e| format!("{e:?}"))?;

    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    let resp_value = wasm_bindgen_futures::JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| format!("{e:?}"))?;
    let resp: Response = resp_value.dyn_into().map_err(|e| format!("{e:?}"))?;
    if !resp.ok() {
        return Err(format!("HTTP {}", resp.status()));
    }
    Ok(())
}
