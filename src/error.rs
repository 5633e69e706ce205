// ============================================================================
// APP ERROR - Errores compartidos por services, stores y mapa
// ============================================================================

/// Error de la aplicación
#[derive(Debug, Clone, PartialEq)]
pub enum AppError {
    /// Fallo de red (la petición no llegó a tener respuesta)
    Network(String),
    /// Respuesta HTTP no exitosa
    Http { status: u16, message: String },
    /// Respuesta o dato almacenado que no se puede deserializar
    Parse(String),
    Storage(String),
    /// Resultado de recomendación que no es GeoJSON válido
    GeoJson(String),
}

impl AppError {
    pub fn http(status: u16, message: impl Into<String>) -> Self {
        AppError::Http {
            status,
            message: message.into(),
        }
    }

    /// Mensaje corto para mostrar en una notificación
    pub fn user_message(&self) -> String {
        match self {
            AppError::Network(_) => "Could not reach the server".to_string(),
            AppError::Http { status: 401, .. } | AppError::Http { status: 400, .. } => {
                "Incorrect username or password".to_string()
            }
            AppError::Http { status, .. } => format!("Server answered with status {}", status),
            AppError::Parse(_) => "Unexpected response from the server".to_string(),
            AppError::Storage(_) => "Local storage is not available".to_string(),
            AppError::GeoJson(_) => "The route returned by the server is not valid GeoJSON".to_string(),
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Network(msg) => write!(f, "Network error: {}", msg),
            AppError::Http { status, message } => write!(f, "HTTP {}: {}", status, message),
            AppError::Parse(msg) => write!(f, "Parse error: {}", msg),
            AppError::Storage(msg) => write!(f, "Storage error: {}", msg),
            AppError::GeoJson(msg) => write!(f, "Invalid GeoJSON: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl From<gloo_net::Error> for AppError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => AppError::Parse(e.to_string()),
            other => AppError::Network(other.to_string()),
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Parse(err.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_credentials_have_friendly_message() {
        let err = AppError::http(401, "Incorrect username or password");
        assert_eq!(err.user_message(), "Incorrect username or password");
        assert_eq!(err.to_string(), "HTTP 401: Incorrect username or password");
    }

    #[test]
    fn server_errors_mention_status() {
        assert_eq!(
            AppError::http(503, "down").user_message(),
            "Server answered with status 503"
        );
    }
}
