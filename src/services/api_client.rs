// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// NO tiene lógica de negocio, solo hace requests HTTP
// Sin reintentos ni timeout: un único intento por llamada
// ============================================================================

use gloo_net::http::{Request, Response};
use serde::Deserialize;

use crate::config::CONFIG;
use crate::error::{AppError, AppResult};
use crate::models::{LoginRequest, RecommendationPayload, TokenResponse, User};

/// Cliente API - SOLO comunicación HTTP (stateless)
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new() -> Self {
        Self::with_base_url(CONFIG.backend_url())
    }

    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// `POST /auth/token` (OAuth2 password grant, form-urlencoded)
    pub async fn request_token(&self, login: &LoginRequest) -> AppResult<TokenResponse> {
        let url = self.url("/auth/token");
        log::info!("🔐 Pidiendo token para usuario: {}", login.username);

        let response = Request::post(&url)
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(login.to_form_body())?
            .send()
            .await?;

        let response = ensure_success(response).await?;
        Ok(response.json::<TokenResponse>().await?)
    }

    /// `GET /users/me` con el bearer token
    pub async fn fetch_current_user(&self, token: &str) -> AppResult<User> {
        let url = self.url("/users/me");
        log::info!("👤 Obteniendo perfil del usuario...");

        let response = Request::get(&url)
            .header("Authorization", &bearer(token))
            .send()
            .await?;

        let response = ensure_success(response).await?;
        Ok(response.json::<User>().await?)
    }

    /// `POST /recommendation/` - devuelve el cuerpo JSON tal cual
    pub async fn request_recommendation(
        &self,
        payload: &RecommendationPayload,
        token: Option<&str>,
    ) -> AppResult<serde_json::Value> {
        let url = self.url("/recommendation/");
        log::info!(
            "🧭 Pidiendo recomendación ({}) para user_id={}",
            payload.request.mode.as_str(),
            payload.user_id
        );

        let mut builder = Request::post(&url);
        if let Some(token) = token {
            builder = builder.header("Authorization", &bearer(token));
        }
        let response = builder.json(payload)?.send().await?;

        let response = ensure_success(response).await?;
        Ok(response.json::<serde_json::Value>().await?)
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

fn bearer(token: &str) -> String {
    format!("Bearer {}", token)
}

/// Cuerpo de error de FastAPI: `{"detail": "..."}`
#[derive(Deserialize)]
struct ErrorDetail {
    detail: serde_json::Value,
}

async fn ensure_success(response: Response) -> AppResult<Response> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let text = response
        .text()
        .await
        .unwrap_or_else(|_| response.status_text());
    Err(AppError::http(status, error_message(&text)))
}

pub fn error_message(body: &str) -> String {
    match serde_json::from_str::<ErrorDetail>(body) {
        Ok(ErrorDetail { detail: serde_json::Value::String(s) }) => s,
        Ok(ErrorDetail { detail }) => detail.to_string(),
        Err(_) if body.trim().is_empty() => "Unknown error".to_string(),
        Err(_) => body.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_do_not_double_slashes() {
        let client = ApiClient::with_base_url("http://localhost:8000/");
        assert_eq!(client.url("/recommendation/"), "http://localhost:8000/recommendation/");
        assert_eq!(client.url("/auth/token"), "http://localhost:8000/auth/token");
    }

    #[test]
    fn fastapi_detail_is_extracted() {
        assert_eq!(
            error_message(r#"{"detail":"Incorrect username or password"}"#),
            "Incorrect username or password"
        );
        assert_eq!(error_message(""), "Unknown error");
        assert_eq!(error_message("Bad Gateway"), "Bad Gateway");
        assert!(error_message(r#"{"detail":[{"loc":["body","mode"]}]}"#).contains("mode"));
    }
}
