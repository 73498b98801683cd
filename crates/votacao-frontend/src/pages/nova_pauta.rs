use yew::prelude::*;
use yew_router::prelude::*;

use votacao::async_callback;
use votacao::data::CreatePauta;
use votacao::log::info;
use votacao::notification::Notification;

use crate::components::{NotificationToast, PautaForm};
use crate::hooks::use_notification;
use crate::providers::api;
use crate::routes::Route;

#[function_component(NovaPautaPage)]
pub fn nova_pauta_page() -> Html {
    let api = use_memo((), |_| api::create());
    let navigator = use_navigator();
    let is_submitting = use_state(|| false);
    let (notification, notify) = use_notification();

    let on_submit: Callback<CreatePauta> =
        async_callback!([api, navigator, is_submitting, notify] |payload: CreatePauta| {
            is_submitting.set(true);

            match api.create_pauta(&payload).await {
                Ok(pauta) => {
                    info!("Created pauta {}", pauta.id);
                    is_submitting.set(false);
                    notify.emit(Notification::success("Pauta criada com sucesso."));
                    if let Some(navigator) = &navigator {
                        navigator.push(&Route::PautaDetail { id: pauta.id.to_string() });
                    }
                }
                Err(err) => {
                    is_submitting.set(false);
                    notify.emit(Notification::error(err.user_message("Erro ao criar pauta.")));
                }
            }
        });

    html! {
        <section class="max-w-2xl space-y-6">
            <h2 class="text-xl font-semibold text-gray-900">{ "Nova pauta" }</h2>
            <NotificationToast notification={notification} />
            <PautaForm on_submit={on_submit} is_submitting={*is_submitting} />
        </section>
    }
}
