use yew::prelude::*;
use yew_router::prelude::*;

use votacao::async_callback;
use votacao::log::debug;
use votacao::sequence::FetchSequence;
use votacao::views::{DetailState, DetailView, parse_route_id};

use crate::components::{NotificationToast, PautaCard};
use crate::hooks::use_notification;
use crate::providers::api;
use crate::routes::Route;

#[derive(Properties, PartialEq)]
pub struct PautaDetailProps {
    /// Raw `:id` route segment, validated here.
    pub id: String,
}

#[function_component(PautaDetailPage)]
pub fn pauta_detail_page(props: &PautaDetailProps) -> Html {
    let api = use_memo((), |_| api::create());
    let detail_seq = use_memo((), |_| FetchSequence::new());
    let detail = use_state(DetailState::default);
    let (notification, notify) = use_notification();
    let navigator = use_navigator();

    let raw_id = props.id.clone();
    let load: Callback<()> = async_callback!([api, detail_seq, detail, notify, raw_id] {
        let ticket = detail_seq.next();
        let mut next = (*detail).clone();

        let id = match parse_route_id(&raw_id) {
            Ok(id) => id,
            Err(err) => {
                let notice = next.reject(err);
                detail.set(next);
                notify.emit(notice);
                return;
            }
        };

        next.begin(id);
        detail.set(next.clone());

        let Some(result) = detail_seq.settle(ticket, api.get_pauta(id).await) else {
            debug!("Discarding stale response for pauta {}", id);
            return;
        };

        let notice = next.resolve(result);
        detail.set(next);
        if let Some(notice) = notice {
            notify.emit(notice);
        }
    });

    {
        let load = load.clone();
        use_effect_with(props.id.clone(), move |_| load.emit(()));
    }

    let go_to_dashboard = {
        let navigator = navigator.clone();
        Callback::from(move |_: ()| {
            if let Some(navigator) = &navigator {
                navigator.push(&Route::Dashboard);
            }
        })
    };
    let on_back_click = go_to_dashboard.reform(|_: MouseEvent| ());
    let on_refresh_click = load.reform(|_: MouseEvent| ());
    let is_loading = detail.is_loading();

    html! {
        <section class="space-y-6">
            <div class="flex items-center justify-between">
                <div>
                    <Link<Route> to={Route::Dashboard} classes={classes!("text-sm", "text-blue-600", "hover:underline")}>
                        { "← Voltar" }
                    </Link<Route>>
                    <h2 class="text-xl font-semibold text-gray-900">{ "Detalhes da pauta" }</h2>
                </div>
                <button
                    type="button"
                    class="px-4 py-2 border border-gray-300 rounded hover:bg-gray-100 disabled:opacity-50"
                    onclick={on_refresh_click}
                    disabled={is_loading}
                >
                    { if is_loading { "Atualizando..." } else { "Atualizar" } }
                </button>
            </div>

            <NotificationToast notification={notification} />

            {
                match detail.view() {
                    DetailView::Loading => html! {
                        <p class="text-gray-500">{ "Carregando detalhes da pauta..." }</p>
                    },
                    DetailView::Loaded(pauta) => html! {
                        <PautaCard
                            pauta={pauta.clone()}
                            on_refresh={load.clone()}
                            on_notify={notify.clone()}
                            show_details_link={false}
                            on_deleted={go_to_dashboard.clone()}
                        />
                    },
                    DetailView::Failed(error) => html! {
                        <div class="p-4 bg-red-50 border border-red-200 rounded space-y-2">
                            <p class="text-red-700">{ &error.message }</p>
                            <button
                                type="button"
                                class="bg-blue-600 text-white px-4 py-2 rounded hover:bg-blue-700"
                                onclick={on_back_click}
                            >
                                { "Voltar para pautas" }
                            </button>
                        </div>
                    },
                    DetailView::Empty => html! {
                        <p class="text-gray-500">{ "Nenhuma pauta encontrada." }</p>
                    },
                }
            }
        </section>
    }
}
