// ============================================================================
// SESSION CONTEXT - Compartir estado de sesión entre componentes
// ============================================================================
// Context API de Yew: la sesión se restaura una vez en main() y se inyecta
// aquí como prop; login/logout son los únicos mutadores.
// ============================================================================

use yew::prelude::*;

use crate::error::AppResult;
use crate::models::User;
use crate::services::ApiClient;
use crate::stores::{login_with, Session, SessionAction};
use crate::utils::LocalStore;

#[derive(Clone, PartialEq)]
pub struct SessionContext {
    state: UseReducerHandle<Session>,
}

impl SessionContext {
    pub fn is_logged_in(&self) -> bool {
        self.state.is_logged_in()
    }

    pub fn user(&self) -> Option<&User> {
        self.state.user.as_ref()
    }

    pub fn access_token(&self) -> Option<String> {
        self.state.access_token.clone()
    }

    /// Token + perfil; si algo falla la sesión no cambia
    pub async fn login(&self, username: String, password: String) -> AppResult<()> {
        let action = login_with(&ApiClient::new(), &LocalStore, &username, &password).await?;
        self.state.dispatch(action);
        Ok(())
    }

    pub fn logout(&self) {
        self.state.dispatch(SessionAction::Logout);
    }
}

#[derive(Properties, PartialEq)]
pub struct SessionContextProviderProps {
    /// Sesión ya restaurada desde storage antes de montar la app
    pub initial: Session,
    pub children: Children,
}

/// Provider component que envuelve la app y proporciona el estado de sesión
#[function_component(SessionContextProvider)]
pub fn session_context_provider(props: &SessionContextProviderProps) -> Html {
    let initial = props.initial.clone();
    let state = use_reducer(move || initial);
    let context = SessionContext { state };

    html! {
        <ContextProvider<SessionContext> context={context}>
            {props.children.clone()}
        </ContextProvider<SessionContext>>
    }
}

#[hook]
pub fn use_session_context() -> SessionContext {
    use_context::<SessionContext>().expect("use_session_context must be used within a SessionContextProvider")
}
