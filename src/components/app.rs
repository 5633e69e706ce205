use yew::prelude::*;

use super::{MultimodalMap, Notifications};
use crate::hooks::{NotificationProvider, SessionContextProvider};
use crate::stores::Session;

#[derive(Properties, PartialEq)]
pub struct AppProps {
    /// Sesión leída de localStorage antes del primer render
    pub initial_session: Session,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    html! {
        <NotificationProvider>
            <SessionContextProvider initial={props.initial_session.clone()}>
                <MultimodalMap />
                <Notifications />
            </SessionContextProvider>
        </NotificationProvider>
    }
}
