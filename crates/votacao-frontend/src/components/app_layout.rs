use yew::prelude::*;
use yew_router::prelude::*;

use crate::routes::Route;

#[derive(Properties, PartialEq)]
pub struct AppLayoutProps {
    pub children: Html,
}

fn nav_classes(active: bool) -> Classes {
    if active {
        classes!("px-3", "py-2", "rounded", "bg-blue-600", "text-white", "font-medium")
    } else {
        classes!("px-3", "py-2", "rounded", "text-gray-700", "hover:bg-gray-100")
    }
}

#[function_component(AppLayout)]
pub fn app_layout(props: &AppLayoutProps) -> Html {
    let route = use_route::<Route>();

    html! {
        <div class="min-h-screen bg-gray-50">
            <header class="bg-white border-b border-gray-200">
                <div class="max-w-5xl mx-auto px-6 py-4 flex items-center justify-between">
                    <div>
                        <h1 class="text-2xl font-bold text-gray-900">{ "Votação" }</h1>
                        <p class="text-sm text-gray-500">{ "Pautas, sessões e resultados da cooperativa" }</p>
                    </div>
                    <nav class="flex space-x-2">
                        <Link<Route>
                            to={Route::Dashboard}
                            classes={nav_classes(route == Some(Route::Dashboard))}
                        >
                            { "Sessões" }
                        </Link<Route>>
                        <Link<Route>
                            to={Route::NovaPauta}
                            classes={nav_classes(route == Some(Route::NovaPauta))}
                        >
                            { "Nova pauta" }
                        </Link<Route>>
                    </nav>
                </div>
            </header>

            <main class="max-w-5xl mx-auto px-6 py-8">
                { props.children.clone() }
            </main>
        </div>
    }
}
