//! Game Detail Page

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::Loadable;
use crate::components::{use_placeholder_on_error, Breadcrumb, Crumb, ErrorCard, LoadingSpinner};
use crate::context::use_app_context;
use crate::models::GameDetail;
use crate::route::Route;

#[component]
pub fn GameDetailPage(game_id: u64) -> impl IntoView {
    let ctx = use_app_context();
    let (state, set_state) = signal(Loadable::<GameDetail>::Loading);
    let (reload_trigger, set_reload_trigger) = signal(0u32);

    let api = ctx.api.clone();
    Effect::new(move |_| {
        let _ = reload_trigger.get();
        let api = api.clone();
        set_state.set(Loadable::Loading);
        spawn_local(async move {
            match api.get_game(game_id).await {
                Ok(game) => set_state.set(Loadable::Loaded(game)),
                Err(e) => {
                    web_sys::console::error_1(&format!("[GAME] Failed to load game {}: {}", game_id, e).into());
                    set_state.set(Loadable::Failed(e));
                }
            }
        });
    });

    let retry = Callback::new(move |_| set_reload_trigger.update(|n| *n += 1));
    let trail = Signal::derive(move || {
        let title = match state.get() {
            Loadable::Loaded(game) => game.title,
            _ => format!("Game {}", game_id),
        };
        vec![Crumb::link("Home", Route::Home), Crumb::link("Games", Route::Games), Crumb::current(title)]
    });

    view! {
        <section class="page">
            <Breadcrumb trail=trail />
            {move || match state.get() {
                Loadable::Loading => view! { <LoadingSpinner /> }.into_any(),
                Loadable::Failed(e) => {
                    let message = if e.is_not_found() { "Game não encontrado".to_string() } else { e.to_string() };
                    view! {
                        <ErrorCard
                            title="Game não encontrado"
                            message=message
                            on_retry=retry
                            back=Route::Games
                            back_label="Voltar à Lista"
                        />
                    }.into_any()
                }
                Loadable::Loaded(game) => view! { <GameDetailCard game=game /> }.into_any(),
            }}
        </section>
    }
}

#[component]
fn GameDetailCard(game: GameDetail) -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <article class="game-detail">
            <div class="game-detail-image">
                <img src=game.img_url.clone() alt=game.title.clone() on:error=move |ev| use_placeholder_on_error(&ev) />
            </div>
            <div class="game-detail-body">
                <header>
                    <h1>{game.title.clone()}</h1>
                    <span class="year-badge">{game.year}</span>
                    <span class="score">"⭐ " {game.score}</span>
                </header>
                <div class="game-facts">
                    <div>
                        <h3>"🎯 Gênero"</h3>
                        <p>{game.genre.clone()}</p>
                    </div>
                    <div>
                        <h3>"🎮 Plataformas"</h3>
                        <p>{game.platforms.clone()}</p>
                    </div>
                </div>
                <h3>"📝 Resumo"</h3>
                <p class="summary">{game.short_description.clone()}</p>
                <h3>"📖 Descrição Completa"</h3>
                <p>{game.long_description.clone()}</p>
                <button on:click=move |_| ctx.navigate(Route::Games)>"← Voltar à Lista"</button>
            </div>
        </article>
    }
}
