use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use votacao::async_callback;
use votacao::card::CardActions;
use votacao::data::{Pauta, Resultado, VotoValor};
use votacao::id::{ASSOCIADO_ID_LEN, sanitize_associado_input};
use votacao::notification::Notification;
use votacao::sequence::FetchSequence;

use crate::providers::api;
use crate::routes::Route;

const DEFAULT_DURACAO: &str = "1";

#[derive(Properties, PartialEq)]
pub struct PautaCardProps {
    pub pauta: Pauta,
    /// Re-fetch the item(s) after a mutation
    pub on_refresh: Callback<()>,
    pub on_notify: Callback<Notification>,
    #[prop_or(true)]
    pub show_details_link: bool,
    /// Runs instead of `on_refresh` once the item is deleted
    #[prop_or_default]
    pub on_deleted: Option<Callback<()>>,
}

fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|window| window.confirm_with_message(message).ok())
        .unwrap_or(false)
}

#[function_component(PautaCard)]
pub fn pauta_card(props: &PautaCardProps) -> Html {
    let api = use_memo((), |_| api::create());
    let tally_seq = use_memo((), |_| FetchSequence::new());

    // Form state
    let duracao = use_state(|| DEFAULT_DURACAO.to_string());
    let associado = use_state(String::new);

    // Tally state
    let resultado = use_state(|| None::<Resultado>);
    let loading_resultado = use_state(|| false);

    let pauta = props.pauta.clone();
    let on_notify = props.on_notify.clone();
    let on_refresh = props.on_refresh.clone();
    let on_deleted = props.on_deleted.clone();

    use_effect_with(props.pauta.sessao_key(), {
        let api = api.clone();
        let tally_seq = tally_seq.clone();
        let resultado = resultado.clone();
        let loading_resultado = loading_resultado.clone();
        let pauta = pauta.clone();
        let on_notify = on_notify.clone();
        let on_refresh = on_refresh.clone();

        move |_| {
            resultado.set(None);
            loading_resultado.set(pauta.sessao.is_some());

            wasm_bindgen_futures::spawn_local(async move {
                let notify = |notification: Notification| on_notify.emit(notification);
                let refresh = || on_refresh.emit(());
                let tally = CardActions::new(&api, &notify, &refresh)
                    .refresh_tally(&pauta, &tally_seq)
                    .await;

                if let Some(tally) = tally {
                    resultado.set(tally.into_display());
                    loading_resultado.set(false);
                }
            });
        }
    });

    let on_duracao_input = {
        let duracao = duracao.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                duracao.set(input.value());
            }
        })
    };

    let on_associado_input = {
        let associado = associado.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                let sanitized = sanitize_associado_input(&input.value());
                input.set_value(&sanitized);
                associado.set(sanitized);
            }
        })
    };

    let on_open_sessao: Callback<MouseEvent> =
        async_callback!([api, pauta, duracao, on_notify, on_refresh] {
            let notify = |notification: Notification| on_notify.emit(notification);
            let refresh = || on_refresh.emit(());
            CardActions::new(&api, &notify, &refresh)
                .open_sessao(&pauta, &duracao)
                .await;
        });

    let vote = |voto: VotoValor| -> Callback<MouseEvent> {
        async_callback!([
            api,
            pauta,
            associado,
            tally_seq,
            resultado,
            loading_resultado,
            on_notify,
            on_refresh,
        ] {
            let notify = |notification: Notification| on_notify.emit(notification);
            let refresh = || on_refresh.emit(());

            let tally = CardActions::new(&api, &notify, &refresh)
                .vote(&pauta, &associado, voto, &tally_seq)
                .await;
            if let Some(tally) = tally {
                resultado.set(tally.into_display());
                loading_resultado.set(false);
            }
        })
    };
    let on_vote_sim = vote(VotoValor::Sim);
    let on_vote_nao = vote(VotoValor::Nao);

    let on_delete: Callback<MouseEvent> =
        async_callback!([api, pauta, on_notify, on_refresh, on_deleted] {
            let notify = |notification: Notification| on_notify.emit(notification);
            let refresh = || on_refresh.emit(());
            let after_delete = on_deleted.map(|callback| move || callback.emit(()));

            CardActions::new(&api, &notify, &refresh)
                .delete(
                    &pauta,
                    confirm,
                    after_delete.as_ref().map(|f| f as &dyn Fn()),
                )
                .await;
        });

    let text_class = if props.show_details_link {
        "line-clamp-3"
    } else {
        "whitespace-pre-wrap"
    };
    let badge_class = match &props.pauta.sessao {
        Some(sessao) if sessao.aberta => "bg-green-100 text-green-800",
        Some(_) => "bg-gray-200 text-gray-700",
        None => "bg-yellow-100 text-yellow-800",
    };
    let can_vote = props.pauta.can_vote();

    html! {
        <article class="p-4 bg-white border border-gray-200 rounded shadow-sm">
            <header class="flex items-start justify-between gap-4 mb-4">
                <div class="min-w-0">
                    <h3 class={classes!("text-lg", "font-semibold", "text-gray-900", "break-words", text_class)}>
                        { &props.pauta.titulo }
                    </h3>
                    <p class={classes!("text-sm", "text-gray-600", "break-words", text_class)}>
                        { props.pauta.descricao_or_default() }
                    </p>
                    {
                        if props.show_details_link {
                            html! {
                                <Link<Route>
                                    to={Route::PautaDetail { id: props.pauta.id.to_string() }}
                                    classes={classes!("text-sm", "text-blue-600", "hover:underline")}
                                >
                                    { "Abrir detalhes" }
                                </Link<Route>>
                            }
                        } else {
                            html! {}
                        }
                    }
                </div>
                <div class="flex items-center space-x-2 shrink-0">
                    <span class={classes!("px-2", "py-1", "rounded", "text-xs", "font-medium", badge_class)}>
                        { props.pauta.sessao_label() }
                    </span>
                    <button
                        type="button"
                        class="px-3 py-1 text-sm text-red-700 border border-red-300 rounded hover:bg-red-50"
                        onclick={on_delete}
                    >
                        { "Excluir" }
                    </button>
                </div>
            </header>

            {
                if let Some(sessao) = props.pauta.sessao.as_ref() {
                    html! {
                        <p class="text-xs text-gray-500 mb-4">
                            { format!(
                                "Aberta em {} · encerra em {}",
                                sessao.aberta_em.format("%d/%m/%Y %H:%M"),
                                sessao.fecha_em.format("%d/%m/%Y %H:%M"),
                            ) }
                        </p>
                    }
                } else {
                    html! {}
                }
            }

            <div class="grid gap-4 md:grid-cols-2">
                // Session form
                <div class="space-y-2">
                    <label class="block text-sm font-medium text-gray-700" for={format!("duracao-{}", props.pauta.id)}>
                        { "Duração da sessão (minutos)" }
                    </label>
                    <div class="flex space-x-2">
                        <input
                            id={format!("duracao-{}", props.pauta.id)}
                            type="number"
                            min="1"
                            class="w-24 px-3 py-2 border border-gray-300 rounded disabled:opacity-50"
                            value={(*duracao).clone()}
                            oninput={on_duracao_input}
                            disabled={!props.pauta.can_open_sessao()}
                        />
                        <button
                            type="button"
                            class="bg-blue-600 text-white px-4 py-2 rounded hover:bg-blue-700 disabled:opacity-50"
                            onclick={on_open_sessao}
                            disabled={!props.pauta.can_open_sessao()}
                        >
                            { "Abrir sessão" }
                        </button>
                    </div>
                </div>

                // Voting controls
                <div class="space-y-2">
                    <label class="block text-sm font-medium text-gray-700" for={format!("associado-{}", props.pauta.id)}>
                        { "ID do associado" }
                    </label>
                    <input
                        id={format!("associado-{}", props.pauta.id)}
                        type="text"
                        inputmode="numeric"
                        maxlength={ASSOCIADO_ID_LEN.to_string()}
                        placeholder="00000000000"
                        class="w-full px-3 py-2 border border-gray-300 rounded"
                        value={(*associado).clone()}
                        oninput={on_associado_input}
                    />
                    <div class="flex space-x-2">
                        <button
                            type="button"
                            class="bg-green-600 text-white px-4 py-2 rounded hover:bg-green-700 disabled:opacity-50"
                            onclick={on_vote_sim}
                            disabled={!can_vote}
                        >
                            { VotoValor::Sim.label() }
                        </button>
                        <button
                            type="button"
                            class="bg-red-600 text-white px-4 py-2 rounded hover:bg-red-700 disabled:opacity-50"
                            onclick={on_vote_nao}
                            disabled={!can_vote}
                        >
                            { VotoValor::Nao.label() }
                        </button>
                    </div>
                </div>
            </div>

            // Tally
            <div class="mt-4 pt-4 border-t border-gray-100 text-sm">
                {
                    if *loading_resultado {
                        html! { <span class="text-gray-500">{ "Carregando resultado..." }</span> }
                    } else if let Some(resultado) = resultado.as_ref() {
                        html! {
                            <div class="flex flex-wrap gap-4">
                                <span>{ format!("Total: {}", resultado.total_votos) }</span>
                                <span class="text-green-700">{ format!("Sim: {}", resultado.votos_sim) }</span>
                                <span class="text-red-700">{ format!("Não: {}", resultado.votos_nao) }</span>
                                <span class="font-medium">{ &resultado.status }</span>
                            </div>
                        }
                    } else {
                        html! { <span class="text-gray-500">{ "Sem resultado disponível." }</span> }
                    }
                }
            </div>
        </article>
    }
}
