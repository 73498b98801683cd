use yew::prelude::*;

use votacao::notification::{Notification, NotificationKind};

#[derive(Properties, PartialEq)]
pub struct NotificationToastProps {
    #[prop_or_default]
    pub notification: Option<Notification>,
}

#[function_component(NotificationToast)]
pub fn notification_toast(props: &NotificationToastProps) -> Html {
    let Some(notification) = props.notification.as_ref() else {
        // Keep the live region mounted so screen readers pick up the next message.
        return html! { <div class="toast" aria-live="polite"></div> };
    };

    let tone = match notification.kind {
        NotificationKind::Info => "bg-blue-50 text-blue-800 border-blue-200",
        NotificationKind::Success => "bg-green-50 text-green-800 border-green-200",
        NotificationKind::Error => "bg-red-50 text-red-700 border-red-200",
    };

    html! {
        <div
            class={classes!(
                "toast",
                format!("toast--{}", notification.kind.as_str()),
                "px-4", "py-2", "border", "rounded", "text-sm",
                tone
            )}
            role="status"
            aria-live="polite"
        >
            { &notification.message }
        </div>
    }
}
