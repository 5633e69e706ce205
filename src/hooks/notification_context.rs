use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config::CONFIG;
use crate::stores::{Notice, NoticeLevel, NotificationAction, NotificationStore};

#[derive(Clone, PartialEq)]
pub struct NotificationContext {
    state: UseReducerHandle<NotificationStore>,
}

impl NotificationContext {
    pub fn notices(&self) -> &[Notice] {
        &self.state.notices
    }

    /// Añade un aviso que se cierra solo tras `notification_timeout_ms`
    pub fn push(&self, level: NoticeLevel, message: impl Into<String>) {
        let notice = Notice::new(level, message);
        let id = notice.id.clone();
        self.state.dispatch(NotificationAction::Push(notice));

        let state = self.state.clone();
        Timeout::new(CONFIG.ui_config.notification_timeout_ms, move || {
            state.dispatch(NotificationAction::Dismiss(id));
        })
        .forget();
    }

    pub fn info(&self, message: impl Into<String>) {
        self.push(NoticeLevel::Info, message);
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(NoticeLevel::Success, message);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(NoticeLevel::Error, message);
    }

    pub fn dismiss(&self, id: String) {
        self.state.dispatch(NotificationAction::Dismiss(id));
    }
}

#[derive(Properties, PartialEq)]
pub struct NotificationProviderProps {
    pub children: Children,
}

#[function_component(NotificationProvider)]
pub fn notification_provider(props: &NotificationProviderProps) -> Html {
    let state = use_reducer(NotificationStore::default);
    let context = NotificationContext { state };

    html! {
        <ContextProvider<NotificationContext> context={context}>
            {props.children.clone()}
        </ContextProvider<NotificationContext>>
    }
}

#[hook]
pub fn use_notifications() -> NotificationContext {
    use_context::<NotificationContext>().expect("use_notifications must be used within a NotificationProvider")
}
