use crate::error::AppResult;
use crate::models::{LoginRequest, TokenResponse, User};
use super::api_client::ApiClient;

/// Los dos endpoints que usa el login
#[allow(async_fn_in_trait)]
pub trait AuthApi {
    async fn request_token(&self, login: &LoginRequest) -> AppResult<TokenResponse>;
    async fn fetch_current_user(&self, token: &str) -> AppResult<User>;
}

impl AuthApi for ApiClient {
    async fn request_token(&self, login: &LoginRequest) -> AppResult<TokenResponse> {
        ApiClient::request_token(self, login).await
    }

    async fn fetch_current_user(&self, token: &str) -> AppResult<User> {
        ApiClient::fetch_current_user(self, token).await
    }
}

/// Login en dos pasos: token (password grant) y luego perfil con ese token.
/// Si cualquiera de los dos falla no se devuelve nada parcial.
pub async fn perform_login_with<A: AuthApi>(
    api: &A,
    username: &str,
    password: &str,
) -> AppResult<(String, User)> {
    let token = api
        .request_token(&LoginRequest::password_grant(username, password))
        .await?
        .access_token;

    let user = api.fetch_current_user(&token).await.map_err(|e| {
        log::error!("❌ Token obtenido pero el perfil falló: {}", e);
        e
    })?;

    log::info!("✅ Login exitoso: {} ({:?})", user.username, user.role);
    Ok((token, user))
}

#[cfg(test)]
pub mod testing {
    use super::*;
    use crate::error::AppError;
    use crate::models::UserRole;

    pub fn user(username: &str) -> User {
        User {
            username: username.to_string(),
            name: "leonidas".to_string(),
            age_group: None,
            sex: None,
            location: None,
            is_available: true,
            role: UserRole::User,
        }
    }

    /// Backend falso: `None` en un paso hace que ese paso responda 401
    pub struct FakeAuthApi {
        pub token: Option<&'static str>,
        pub profile: Option<User>,
    }

    impl AuthApi for FakeAuthApi {
        async fn request_token(&self, _login: &LoginRequest) -> AppResult<TokenResponse> {
            self.token
                .map(|t| TokenResponse {
                    access_token: t.to_string(),
                    token_type: Some("bearer".to_string()),
                })
                .ok_or_else(|| AppError::http(401, "Incorrect username or password"))
        }

        async fn fetch_current_user(&self, _token: &str) -> AppResult<User> {
            self.profile
                .clone()
                .ok_or_else(|| AppError::http(401, "Could not validate credentials"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::{user, FakeAuthApi};
    use super::*;

    #[tokio::test]
    async fn token_and_profile_are_returned_together() {
        let api = FakeAuthApi { token: Some("tok"), profile: Some(user("leo")) };
        let (token, user) = perform_login_with(&api, "leo", "pw").await.unwrap();
        assert_eq!(token, "tok");
        assert_eq!(user.username, "leo");
    }

    #[tokio::test]
    async fn profile_failure_discards_the_token() {
        let api = FakeAuthApi { token: Some("tok"), profile: None };
        let err = perform_login_with(&api, "leo", "pw").await.unwrap_err();
        assert_eq!(err.user_message(), "Incorrect username or password");
    }
}
