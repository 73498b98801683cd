use yew::prelude::*;
use yew_router::prelude::*;

use crate::routes::Route;

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <section class="py-12 text-center space-y-4">
            <h2 class="text-2xl font-semibold text-gray-900">{ "Página não encontrada" }</h2>
            <p class="text-gray-500">{ "O endereço acessado não existe." }</p>
            <Link<Route> to={Route::Dashboard} classes={classes!("text-blue-600", "hover:underline")}>
                { "Ir para pautas" }
            </Link<Route>>
        </section>
    }
}
