mod components;
mod hooks;
mod pages;
mod providers;
mod routes;

use yew::prelude::*;
use yew_router::prelude::*;

use votacao::log::info;

use components::AppLayout;
use routes::{Route, switch};

#[function_component(App)]
fn app() -> Html {
    html! {
        <BrowserRouter>
            <AppLayout>
                <Switch<Route> render={switch} />
            </AppLayout>
        </BrowserRouter>
    }
}

fn main() {
    votacao::log::setup().expect("Failed to setup logging");
    info!("Starting Votação frontend");
    yew::Renderer::<App>::new().render();
}
