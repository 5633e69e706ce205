// ============================================================================
// SESSION STORE - Usuario autenticado + bearer token
// ============================================================================
// Reducer de Yew: solo LoggedIn/Logout mutan la sesión
// ============================================================================

use std::rc::Rc;

use yew::prelude::*;

use crate::error::AppResult;
use crate::models::User;
use crate::services::{perform_login_with, AuthApi};
use crate::utils::{load_json, KeyValueStore, STORAGE_KEY_ACCESS_TOKEN, STORAGE_KEY_USER};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Session {
    pub user: Option<User>,
    pub access_token: Option<String>,
}

pub enum SessionAction {
    LoggedIn { user: User, access_token: String },
    Logout,
}

impl Session {
    pub fn authenticated(user: User, access_token: String) -> Self {
        Self {
            user: Some(user),
            access_token: Some(access_token),
        }
    }

    pub fn is_logged_in(&self) -> bool {
        self.user.is_some()
    }

    /// Lee la sesión guardada; datos corruptos se ignoran (sesión vacía)
    pub fn restore<S: KeyValueStore + ?Sized>(store: &S) -> Self {
        let user = match load_json::<S, User>(store, STORAGE_KEY_USER) {
            Ok(user) => user,
            Err(e) => {
                log::warn!("⚠️ Usuario guardado ilegible, se ignora: {}", e);
                None
            }
        };
        let access_token = match store.get(STORAGE_KEY_ACCESS_TOKEN) {
            Ok(token) => token.filter(|t| !t.is_empty()),
            Err(e) => {
                log::warn!("⚠️ No se pudo leer el token guardado: {}", e);
                None
            }
        };

        if user.is_some() {
            log::info!("💾 Sesión restaurada desde storage");
        }
        Self { user, access_token }
    }

    /// `access_token` se guarda como string crudo, `user` como JSON.
    /// El usuario va primero: nunca queda un token guardado sin perfil.
    pub fn persist<S: KeyValueStore + ?Sized>(&self, store: &S) -> AppResult<()> {
        let user_json = self.user.as_ref().map(serde_json::to_string).transpose()?;

        if let Some(json) = user_json {
            store.set(STORAGE_KEY_USER, &json)?;
        }
        if let Some(token) = &self.access_token {
            store.set(STORAGE_KEY_ACCESS_TOKEN, token)?;
        }
        Ok(())
    }
}

/// Login completo contra `api`: token, perfil y persistencia en `store`.
/// Si algún paso remoto falla no se escribe nada y no hay acción que despachar.
pub async fn login_with<A, S>(api: &A, store: &S, username: &str, password: &str) -> AppResult<SessionAction>
where
    A: AuthApi,
    S: KeyValueStore + ?Sized,
{
    let (access_token, user) = perform_login_with(api, username, password).await?;

    let session = Session::authenticated(user.clone(), access_token.clone());
    if let Err(e) = session.persist(store) {
        // La sesión en memoria sigue siendo válida
        log::error!("❌ No se pudo guardar la sesión: {}", e);
    }

    Ok(SessionAction::LoggedIn { user, access_token })
}

impl Reducible for Session {
    type Action = SessionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            SessionAction::LoggedIn { user, access_token } => {
                Rc::new(Session::authenticated(user, access_token))
            }
            SessionAction::Logout => {
                // TODO: definir si logout debe borrar storage y estado; hoy no hace nada
                log::warn!("⚠️ logout() todavía no está implementado, la sesión se mantiene");
                self
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::models::{Coordinates, UserRole};
    use crate::services::auth_service::testing::FakeAuthApi;
    use crate::utils::storage::memory::MemoryStore;

    /// Almacén cuyo `set` falla para una clave concreta
    struct FailingStore {
        inner: MemoryStore,
        failing_key: &'static str,
    }

    impl KeyValueStore for FailingStore {
        fn get(&self, key: &str) -> AppResult<Option<String>> {
            self.inner.get(key)
        }

        fn set(&self, key: &str, value: &str) -> AppResult<()> {
            if key == self.failing_key {
                return Err(AppError::Storage("quota exceeded".to_string()));
            }
            self.inner.set(key, value)
        }

        fn remove(&self, key: &str) -> AppResult<()> {
            self.inner.remove(key)
        }
    }

    fn user() -> User {
        User {
            username: "leo".to_string(),
            name: "leonidas".to_string(),
            age_group: None,
            sex: None,
            location: Some(Coordinates::new(59.33, 18.06)),
            is_available: true,
            role: UserRole::User,
        }
    }

    #[test]
    fn empty_storage_means_logged_out() {
        let session = Session::restore(&MemoryStore::default());
        assert!(!session.is_logged_in());
        assert!(session.access_token.is_none());
    }

    #[test]
    fn login_is_mirrored_in_storage() {
        let store = MemoryStore::default();
        let session = Rc::new(Session::default()).reduce(SessionAction::LoggedIn {
            user: user(),
            access_token: "tok-123".to_string(),
        });
        session.persist(&store).unwrap();

        assert!(session.is_logged_in());
        assert_eq!(store.get(STORAGE_KEY_ACCESS_TOKEN).unwrap().as_deref(), Some("tok-123"));
        assert_eq!(Session::restore(&store), *session);
    }

    #[test]
    fn token_is_stored_raw_not_json_quoted() {
        let store = MemoryStore::default();
        Session::authenticated(user(), "abc".to_string()).persist(&store).unwrap();
        assert_eq!(store.items.borrow().get("access_token").unwrap(), "abc");
    }

    #[test]
    fn corrupt_user_entry_is_ignored() {
        let store = MemoryStore::default();
        store.set(STORAGE_KEY_USER, "{broken").unwrap();
        store.set(STORAGE_KEY_ACCESS_TOKEN, "abc").unwrap();
        let session = Session::restore(&store);
        assert!(!session.is_logged_in());
        assert_eq!(session.access_token.as_deref(), Some("abc"));
    }

    #[test]
    fn logout_is_declared_but_inert() {
        let logged_in = Rc::new(Session::authenticated(user(), "abc".to_string()));
        let after = logged_in.clone().reduce(SessionAction::Logout);
        assert!(Rc::ptr_eq(&logged_in, &after));
        assert!(after.is_logged_in());
    }

    #[test]
    fn failed_user_write_leaves_no_orphan_token() {
        let store = FailingStore { inner: MemoryStore::default(), failing_key: STORAGE_KEY_USER };
        let result = Session::authenticated(user(), "abc".to_string()).persist(&store);
        assert!(result.is_err());
        assert!(store.inner.items.borrow().is_empty());
    }

    #[tokio::test]
    async fn successful_login_persists_and_yields_logged_in() {
        let store = MemoryStore::default();
        let api = FakeAuthApi { token: Some("tok-1"), profile: Some(user()) };
        let action = login_with(&api, &store, "leo", "pw").await.unwrap();

        let session = Rc::new(Session::default()).reduce(action);
        assert!(session.is_logged_in());
        assert_eq!(Session::restore(&store), *session);
    }

    #[tokio::test]
    async fn rejected_credentials_change_nothing() {
        let store = MemoryStore::default();
        let api = FakeAuthApi { token: None, profile: Some(user()) };
        let result = login_with(&api, &store, "leo", "wrong").await;

        assert!(matches!(result, Err(AppError::Http { status: 401, .. })));
        assert!(store.items.borrow().is_empty());
        let session = Session::restore(&store);
        assert!(session.user.is_none());
        assert!(session.access_token.is_none());
    }

    #[tokio::test]
    async fn profile_failure_after_token_changes_nothing() {
        let store = MemoryStore::default();
        let api = FakeAuthApi { token: Some("tok-1"), profile: None };
        let result = login_with(&api, &store, "leo", "pw").await;

        assert!(result.is_err());
        assert!(store.items.borrow().is_empty());
        assert!(!Session::restore(&store).is_logged_in());
    }
}
