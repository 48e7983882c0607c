//! Lists Page
//!
//! All game lists, linking to each list's games.

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::Loadable;
use crate::components::{Breadcrumb, Crumb, EmptyState, ErrorCard, LoadingSpinner};
use crate::context::use_app_context;
use crate::models::GameList;
use crate::route::Route;
use crate::store::{store_set_lists, use_catalog_store};

#[component]
pub fn ListsPage() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_catalog_store();
    let (state, set_state) = signal(Loadable::<Vec<GameList>>::Loading);
    let (reload_trigger, set_reload_trigger) = signal(0u32);

    let api = ctx.api.clone();
    Effect::new(move |_| {
        let _ = reload_trigger.get();
        let api = api.clone();
        set_state.set(Loadable::Loading);
        spawn_local(async move {
            match api.list_lists().await {
                Ok(lists) => {
                    web_sys::console::log_1(&format!("[LISTS] Loaded {} lists", lists.len()).into());
                    store_set_lists(&store, lists.clone());
                    set_state.set(Loadable::Loaded(lists));
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[LISTS] Failed to load lists: {}", e).into());
                    set_state.set(Loadable::Failed(e));
                }
            }
        });
    });

    let retry = Callback::new(move |_| set_reload_trigger.update(|n| *n += 1));
    let trail = Signal::derive(|| vec![Crumb::link("Home", Route::Home), Crumb::current("Listas")]);

    view! {
        <section class="page">
            <Breadcrumb trail=trail />
            <div class="page-title">
                <h1>"📋 Listas de Games"</h1>
                <p>"Coleções organizadas por gênero"</p>
            </div>
            {move || match state.get() {
                Loadable::Loading => view! { <LoadingSpinner /> }.into_any(),
                Loadable::Failed(e) => view! {
                    <ErrorCard
                        title="Erro ao carregar listas"
                        message=e.to_string()
                        on_retry=retry
                        back=Route::Home
                        back_label="Voltar ao início"
                    />
                }.into_any(),
                Loadable::Loaded(lists) if lists.is_empty() => view! {
                    <EmptyState title="Nenhuma lista" message="Ainda não há listas cadastradas." />
                }.into_any(),
                Loadable::Loaded(lists) => view! {
                    <div class="list-grid">
                        {lists
                            .into_iter()
                            .map(|list| view! {
                                <div class="list-card">
                                    <h2>{list.name}</h2>
                                    <a class="button primary" href=Route::ListGames(list.id).href()>"Ver Games"</a>
                                </div>
                            })
                            .collect_view()}
                    </div>
                }.into_any(),
            }}
        </section>
    }
}
