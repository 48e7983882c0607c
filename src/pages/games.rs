//! Games Page
//!
//! Full catalog as a card grid.

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::Loadable;
use crate::components::{Breadcrumb, Crumb, EmptyState, ErrorCard, GameCard, LoadingSpinner};
use crate::context::use_app_context;
use crate::models::{games_found_label, Game};
use crate::route::Route;

#[component]
pub fn GamesPage() -> impl IntoView {
    let ctx = use_app_context();
    let (state, set_state) = signal(Loadable::<Vec<Game>>::Loading);
    let (reload_trigger, set_reload_trigger) = signal(0u32);

    let api = ctx.api.clone();
    Effect::new(move |_| {
        let _ = reload_trigger.get();
        let api = api.clone();
        set_state.set(Loadable::Loading);
        spawn_local(async move {
            match api.list_games().await {
                Ok(games) => {
                    web_sys::console::log_1(&format!("[GAMES] Loaded {} games", games.len()).into());
                    set_state.set(Loadable::Loaded(games));
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[GAMES] Failed to load catalog: {}", e).into());
                    set_state.set(Loadable::Failed(e));
                }
            }
        });
    });

    let retry = Callback::new(move |_| set_reload_trigger.update(|n| *n += 1));
    let trail = Signal::derive(|| vec![Crumb::link("Home", Route::Home), Crumb::current("Games")]);

    view! {
        <section class="page">
            <Breadcrumb trail=trail />
            {move || match state.get() {
                Loadable::Loading => view! { <LoadingSpinner /> }.into_any(),
                Loadable::Failed(e) => view! {
                    <ErrorCard
                        title="Erro ao carregar games"
                        message=e.to_string()
                        on_retry=retry
                        back=Route::Home
                        back_label="Voltar ao início"
                    />
                }.into_any(),
                Loadable::Loaded(games) if games.is_empty() => view! {
                    <EmptyState title="Nenhum game" message="O catálogo está vazio no momento." />
                }.into_any(),
                Loadable::Loaded(games) => view! {
                    <div class="page-title">
                        <h1>"🎮 Games"</h1>
                        <p>{games_found_label(games.len())}</p>
                    </div>
                    <div class="game-grid">
                        {games.into_iter().map(|game| view! { <GameCard game=game /> }).collect_view()}
                    </div>
                }.into_any(),
            }}
        </section>
    }
}
