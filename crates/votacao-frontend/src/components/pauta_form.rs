use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use votacao::data::CreatePauta;
use votacao::validation::PautaFormValues;

#[derive(Properties, PartialEq)]
pub struct PautaFormProps {
    /// Receives the trimmed payload; the form clears itself right after.
    pub on_submit: Callback<CreatePauta>,
    #[prop_or(false)]
    pub is_submitting: bool,
}

#[function_component(PautaForm)]
pub fn pauta_form(props: &PautaFormProps) -> Html {
    let values = use_state(PautaFormValues::default);

    let on_titulo_input = {
        let values = values.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                let mut next = (*values).clone();
                next.titulo = input.value();
                values.set(next);
            }
        })
    };

    let on_descricao_input = {
        let values = values.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(textarea) = e.target_dyn_into::<HtmlTextAreaElement>() {
                let mut next = (*values).clone();
                next.descricao = textarea.value();
                values.set(next);
            }
        })
    };

    // Not an async callback: the default action has to be prevented before
    // the handler returns.
    let on_form_submit = {
        let values = values.clone();
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let mut next = (*values).clone();
            if let Some(payload) = next.take_payload() {
                on_submit.emit(payload);
                values.set(next);
            }
        })
    };

    html! {
        <form class="p-6 bg-white border border-gray-200 rounded shadow-sm space-y-4" onsubmit={on_form_submit}>
            <div>
                <label for="pauta-titulo" class="block text-sm font-medium text-gray-700 mb-1">
                    { "Título" }
                </label>
                <input
                    id="pauta-titulo"
                    type="text"
                    required={true}
                    placeholder="Ex.: Aprovação do orçamento anual"
                    class="w-full px-3 py-2 border border-gray-300 rounded focus:outline-none focus:ring-2 focus:ring-blue-500"
                    value={values.titulo.clone()}
                    oninput={on_titulo_input}
                />
            </div>

            <div>
                <label for="pauta-descricao" class="block text-sm font-medium text-gray-700 mb-1">
                    { "Descrição" }
                </label>
                <textarea
                    id="pauta-descricao"
                    rows="4"
                    placeholder="Contexto da votação (opcional)"
                    class="w-full px-3 py-2 border border-gray-300 rounded focus:outline-none focus:ring-2 focus:ring-blue-500"
                    value={values.descricao.clone()}
                    oninput={on_descricao_input}
                />
            </div>

            <button
                type="submit"
                class="bg-blue-600 text-white px-4 py-2 rounded hover:bg-blue-700 disabled:opacity-50 cursor-pointer"
                disabled={props.is_submitting || !values.can_submit()}
            >
                { if props.is_submitting { "Criando..." } else { "Criar" } }
            </button>
        </form>
    }
}
