use yew::prelude::*;
use yew_router::prelude::*;

use crate::pages::{DashboardPage, NotFoundPage, NovaPautaPage, PautaDetailPage};

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Dashboard,
    #[at("/pautas/nova")]
    NovaPauta,
    #[at("/pautas/:id")]
    PautaDetail { id: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}

pub fn switch(route: Route) -> Html {
    match route {
        Route::Dashboard => html! { <DashboardPage /> },
        Route::NovaPauta => html! { <NovaPautaPage /> },
        Route::PautaDetail { id } => html! { <PautaDetailPage id={id} /> },
        Route::NotFound => html! { <NotFoundPage /> },
    }
}
