use contracts::domain::{ApiError, LoginRequest, RegisterRequest, TokenResponse};
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;

/// Register a new account
pub async fn register(email: String, password: String) -> Result<(), String> {
    let request = RegisterRequest { email, password };

    let response = Request::post(&api_url("/register"))
        .json(&request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        let err = response.json::<ApiError>().await.unwrap_or_default();
        return Err(err.message("Registration failed"));
    }
    Ok(())
}

/// Login with email and password
pub async fn login(email: String, password: String) -> Result<TokenResponse, String> {
    let request = LoginRequest { email, password };

    let response = Request::post(&api_url("/login"))
        .json(&request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        let err = response.json::<ApiError>().await.unwrap_or_default();
        return Err(err.message("Login failed"));
    }

    let token: TokenResponse = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;
    if token.token.is_empty() {
        return Err("Login failed".to_string());
    }
    Ok(token)
}
