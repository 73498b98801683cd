use yew::prelude::*;

use votacao::async_callback;
use votacao::log::debug;
use votacao::sequence::FetchSequence;
use votacao::views::{DashboardState, DashboardView};

use crate::components::{NotificationToast, PautaCard};
use crate::hooks::use_notification;
use crate::providers::api;

#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    let api = use_memo((), |_| api::create());
    let list_seq = use_memo((), |_| FetchSequence::new());
    let list = use_state(DashboardState::default);
    let (notification, notify) = use_notification();

    let load: Callback<()> = async_callback!([api, list_seq, list, notify] {
        let ticket = list_seq.next();
        let mut next = (*list).clone();
        next.begin();
        list.set(next.clone());

        let Some(result) = list_seq.settle(ticket, api.list_pautas().await) else {
            debug!("Discarding stale pauta list");
            return;
        };

        let notice = next.resolve(result);
        list.set(next);
        if let Some(notice) = notice {
            notify.emit(notice);
        }
    });

    {
        let load = load.clone();
        use_effect_with((), move |_| load.emit(()));
    }

    let on_refresh_click = load.reform(|_: MouseEvent| ());
    let is_loading = list.is_loading();

    html! {
        <section class="space-y-6">
            <div class="flex items-center justify-between">
                <h2 class="text-xl font-semibold text-gray-900">{ "Sessões" }</h2>
                <button
                    type="button"
                    class="px-4 py-2 border border-gray-300 rounded hover:bg-gray-100 disabled:opacity-50"
                    onclick={on_refresh_click.clone()}
                    disabled={is_loading}
                >
                    { if is_loading { "Atualizando..." } else { "Atualizar" } }
                </button>
            </div>

            <NotificationToast notification={notification} />

            {
                match list.view() {
                    DashboardView::Loading => html! {
                        <p class="text-gray-500">{ "Carregando pautas..." }</p>
                    },
                    DashboardView::Failed(message) => html! {
                        <div class="p-4 bg-red-50 border border-red-200 rounded space-y-2">
                            <p class="text-red-700">{ message }</p>
                            <button
                                type="button"
                                class="bg-blue-600 text-white px-4 py-2 rounded hover:bg-blue-700"
                                onclick={on_refresh_click}
                            >
                                { "Tentar novamente" }
                            </button>
                        </div>
                    },
                    DashboardView::Empty => html! {
                        <p class="text-gray-500">
                            { "Sem pautas ainda. Crie uma nova para iniciar a votação." }
                        </p>
                    },
                    DashboardView::Loaded(pautas) => html! {
                        <div class="grid gap-4">
                            {
                                pautas.iter().map(|pauta| {
                                    html! {
                                        <PautaCard
                                            key={pauta.id.to_string()}
                                            pauta={pauta.clone()}
                                            on_refresh={load.clone()}
                                            on_notify={notify.clone()}
                                        />
                                    }
                                }).collect::<Html>()
                            }
                        </div>
                    },
                }
            }
        </section>
    }
}
