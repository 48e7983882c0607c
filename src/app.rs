//! DSList Frontend App
//!
//! Header plus the page for the current hash route.

use leptos::ev;
use leptos::leptos_dom::helpers::window_event_listener;
use leptos::prelude::*;
use reactive_stores::Store;

use crate::api::ApiClient;
use crate::components::{EmptyState, Header};
use crate::config::ApiConfig;
use crate::context::AppContext;
use crate::pages::{GameDetailPage, GamesPage, HomePage, ListGamesPage, ListsPage};
use crate::route::{current_route, Route};
use crate::store::CatalogState;

#[component]
pub fn App() -> impl IntoView {
    let config = ApiConfig::from_env();
    web_sys::console::log_1(&format!("[APP] Backend at {}", config.base_url).into());

    let (route, set_route) = signal(current_route());
    // Lives as long as the app; never removed
    let _hashchange = window_event_listener(ev::hashchange, move |_| {
        set_route.set(current_route());
    });

    // Provide context to all children
    provide_context(AppContext::new(route, ApiClient::new(config)));
    provide_context(Store::new(CatalogState::default()));

    view! {
        <div class="app-layout">
            <Header />
            <main class="main-content">
                {move || match route.get() {
                    Route::Home => view! { <HomePage /> }.into_any(),
                    Route::Games => view! { <GamesPage /> }.into_any(),
                    Route::GameDetail(id) => view! { <GameDetailPage game_id=id /> }.into_any(),
                    Route::Lists => view! { <ListsPage /> }.into_any(),
                    Route::ListGames(id) => view! { <ListGamesPage list_id=id /> }.into_any(),
                    Route::NotFound => view! {
                        <EmptyState title="Página não encontrada" message="O endereço acessado não existe.">
                            <a class="button" href=Route::Home.href()>"Voltar ao início"</a>
                        </EmptyState>
                    }.into_any(),
                }}
            </main>
        </div>
    }
}
