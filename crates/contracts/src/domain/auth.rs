use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub token: String,
}

/// Error payload of the auth and listing services. Different endpoints use
/// different keys, so all three are optional and [`ApiError::message`]
/// picks the first one present.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiError {
    #[serde(default)]
    pub detail: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ApiError {
    pub fn message(&self, fallback: &str) -> String {
        self.detail
            .clone()
            .or_else(|| self.error.clone())
            .or_else(|| self.message.clone())
            .unwrap_or_else(|| fallback.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_prefers_detail() {
        let e: ApiError =
            serde_json::from_str(r#"{"detail": "bad password", "error": "x"}"#).unwrap();
        assert_eq!(e.message("fallback"), "bad password");
    }

    #[test]
    fn test_api_error_falls_back() {
        let e: ApiError = serde_json::from_str("{}").unwrap();
        assert_eq!(e.message("Login failed"), "Login failed");
    }
}
