use crate::config::CONFIG;
use crate::error::{AppError, AppResult};
use crate::models::RecommendationRequest;
use super::api_client::ApiClient;

/// Pide una recomendación y devuelve el GeoJSON serializado
pub async fn request_recommendation(request: RecommendationRequest, token: Option<String>) -> AppResult<String> {
    let payload = request.into_payload(&CONFIG.recommendation_user_id);
    let body = ApiClient::new()
        .request_recommendation(&payload, token.as_deref())
        .await?;
    geojson_text(body)
}

/// El backend puede devolver el GeoJSON ya serializado (string JSON) o como objeto
pub fn geojson_text(body: serde_json::Value) -> AppResult<String> {
    match body {
        serde_json::Value::String(text) => Ok(text),
        serde_json::Value::Null => Err(AppError::Parse("Empty recommendation response".to_string())),
        other => Ok(serde_json::to_string(&other)?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn string_body_is_used_verbatim() {
        let raw = r#"{"type":"FeatureCollection","features":[]}"#;
        assert_eq!(geojson_text(json!(raw)).unwrap(), raw);
    }

    #[test]
    fn object_body_is_serialized() {
        let text = geojson_text(json!({"type": "FeatureCollection", "features": []})).unwrap();
        let back: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(back["type"], "FeatureCollection");
    }

    #[test]
    fn null_body_is_an_error() {
        assert!(geojson_text(serde_json::Value::Null).is_err());
    }
}
