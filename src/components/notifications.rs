use yew::prelude::*;

use crate::hooks::use_notifications;

/// Avisos apilados en la esquina; se cierran solos o con la ×
#[function_component(Notifications)]
pub fn notifications() -> Html {
    let notifications = use_notifications();

    html! {
        <div class="notifications" role="status" aria-live="polite">
            { for notifications.notices().iter().map(|notice| {
                let onclick = {
                    let notifications = notifications.clone();
                    let id = notice.id.clone();
                    Callback::from(move |_: MouseEvent| notifications.dismiss(id.clone()))
                };
                html! {
                    <div key={notice.id.clone()} class={notice.level.css_class()}>
                        <span class="notice-message">{notice.message.clone()}</span>
                        <button class="notice-close" aria-label="Dismiss" {onclick}>{"×"}</button>
                    </div>
                }
            }) }
        </div>
    }
}
