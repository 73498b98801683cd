use yew::prelude::*;

use votacao::notification::{Notification, NotificationSlot};

/// Page-scoped notification banner state.
///
/// Returns the notification currently shown and a callback that replaces it.
/// Blank messages are ignored by the slot, so the banner never renders an
/// empty toast.
#[hook]
pub fn use_notification() -> (Option<Notification>, Callback<Notification>) {
    let slot = use_state(NotificationSlot::default);

    let push = {
        let slot = slot.clone();
        Callback::from(move |notification: Notification| {
            let mut next = (*slot).clone();
            if next.push(notification) {
                slot.set(next);
            }
        })
    };

    (slot.current().cloned(), push)
}
