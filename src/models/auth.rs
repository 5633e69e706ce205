use serde::{Deserialize, Serialize};

use super::geo::Coordinates;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AgeGroup {
    Child,
    Teen,
    Adult,
    Senior,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Sex {
    Male,
    Female,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum UserRole {
    #[default]
    User,
    Admin,
}

/// Perfil devuelto por `GET /users/me`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    pub name: String,
    #[serde(default)]
    pub age_group: Option<AgeGroup>,
    #[serde(default)]
    pub sex: Option<Sex>,
    #[serde(default)]
    pub location: Option<Coordinates>,
    #[serde(default = "default_available")]
    pub is_available: bool,
    #[serde(default)]
    pub role: UserRole,
}

fn default_available() -> bool {
    true
}

/// Respuesta de `POST /auth/token`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
}

/// Formulario OAuth2 password grant
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub grant_type: String,
    pub username: String,
    pub password: String,
}

impl LoginRequest {
    pub fn password_grant(username: &str, password: &str) -> Self {
        Self {
            grant_type: "password".to_string(),
            username: username.to_string(),
            password: password.to_string(),
        }
    }

    /// Cuerpo `application/x-www-form-urlencoded`
    pub fn to_form_body(&self) -> String {
        [
            ("grant_type", self.grant_type.as_str()),
            ("username", self.username.as_str()),
            ("password", self.password.as_str()),
        ]
        .iter()
        .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&")
    }
}

// La contraseña nunca debe acabar en los logs
impl std::fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginRequest")
            .field("grant_type", &self.grant_type)
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_profile_from_backend() {
        let json = r#"{
            "username": "leo",
            "name": "leonidas",
            "age_group": "ADULT",
            "sex": "MALE",
            "location": {"latitude": 59.33, "longitude": 18.06},
            "is_available": true,
            "role": "USER"
        }"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.age_group, Some(AgeGroup::Adult));
        assert_eq!(user.sex, Some(Sex::Male));
        assert_eq!(user.role, UserRole::User);
        assert_eq!(user.location, Some(Coordinates::new(59.33, 18.06)));
    }

    #[test]
    fn profile_without_location_or_sex_is_accepted() {
        let json = r#"{"username":"a","name":"b","age_group":"TEEN","location":null,"role":"ADMIN"}"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert!(user.location.is_none());
        assert!(user.sex.is_none());
        assert!(user.is_available);
        assert_eq!(user.role, UserRole::Admin);
    }

    #[test]
    fn password_grant_is_form_encoded() {
        let body = LoginRequest::password_grant("ana maria", "p&ss=1").to_form_body();
        assert_eq!(body, "grant_type=password&username=ana%20maria&password=p%26ss%3D1");
    }

    #[test]
    fn non_ascii_usernames_are_percent_encoded() {
        let body = LoginRequest::password_grant("ñ~a", "x").to_form_body();
        assert_eq!(body, "grant_type=password&username=%C3%B1~a&password=x");
    }

    #[test]
    fn debug_output_hides_password() {
        let debug = format!("{:?}", LoginRequest::password_grant("ana", "secret"));
        assert!(!debug.contains("secret"));
    }
}
