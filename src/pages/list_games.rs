//! List Games Page
//!
//! Games of one list in backend order, reorderable with drag-and-drop.
//! Saving re-fetches the list, diffs it against the working order, and
//! sends the moves one by one through `POST /lists/{id}/replacement`.

use futures::future::{abortable, AbortHandle};
use leptos::prelude::*;
use leptos::task::spawn_local;

use dslist_reorder::{apply_moves, ReconcileState, ReorderSession};

use super::Loadable;
use crate::components::{Breadcrumb, Crumb, EmptyState, ErrorCard, LoadingSpinner, SortableGameList};
use crate::context::use_app_context;
use crate::models::{games_found_label, Game};
use crate::route::Route;
use crate::store::{list_name, store_set_lists, use_catalog_store, CatalogStateStoreFields};

/// Status line under the toolbar for a reconciliation state
pub fn save_status_text(state: &ReconcileState) -> Option<String> {
    match state {
        ReconcileState::Idle => None,
        ReconcileState::Computing => Some("Ordem alterada, ainda não salva".to_string()),
        ReconcileState::Applying => Some("Salvando nova ordem...".to_string()),
        ReconcileState::Succeeded => Some("Ordem salva".to_string()),
        ReconcileState::Failed { failed_index: Some(index), message } => Some(format!(
            "Falha ao salvar no movimento {}: {}. Os movimentos anteriores já foram aplicados.",
            index + 1,
            message
        )),
        ReconcileState::Failed { failed_index: None, message } => Some(format!(
            "A lista mudou no servidor ({}). Descarte as alterações para recarregar.",
            message
        )),
    }
}

#[component]
pub fn ListGamesPage(list_id: u64) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_catalog_store();

    let session = RwSignal::new(ReorderSession::<Game>::new(Vec::new()));
    let (state, set_state) = signal(Loadable::<()>::Loading);
    let (reload_trigger, set_reload_trigger) = signal(0u32);
    // Save-side messages that are not part of the session state
    let (notice, set_notice) = signal(None::<String>);
    let save_abort = StoredValue::new(None::<AbortHandle>);

    // Load the baseline
    let api = ctx.api.clone();
    Effect::new(move |_| {
        let _ = reload_trigger.get();
        let api = api.clone();
        set_state.set(Loadable::Loading);
        set_notice.set(None);
        spawn_local(async move {
            match api.list_games_in(list_id).await {
                Ok(games) => {
                    web_sys::console::log_1(&format!("[LIST] Loaded {} games for list {}", games.len(), list_id).into());
                    session.update(|s| s.rebaseline(games));
                    set_state.set(Loadable::Loaded(()));
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[LIST] Failed to load list {}: {}", list_id, e).into());
                    set_state.set(Loadable::Failed(e));
                }
            }
        });
    });

    // List name for the title; not critical
    let api = ctx.api.clone();
    Effect::new(move |_| {
        if store.lists_loaded().get_untracked() {
            return;
        }
        let api = api.clone();
        spawn_local(async move {
            match api.list_lists().await {
                Ok(lists) => store_set_lists(&store, lists),
                Err(e) => web_sys::console::warn_1(&format!("[LIST] Could not load list info: {}", e).into()),
            }
        });
    });
    let name = Memo::new(move |_| list_name(&store.lists().read(), list_id));

    let api = ctx.api.clone();
    let save = Callback::new(move |_: ()| {
        if session.with_untracked(|s| s.is_applying() || !s.is_dirty()) {
            return;
        }
        let api = api.clone();
        set_notice.set(None);
        spawn_local(async move {
            // Diff against the backend's order as it is now, not as first loaded
            let fresh = match api.list_games_in(list_id).await {
                Ok(fresh) => fresh,
                Err(e) => {
                    web_sys::console::error_1(&format!("[LIST] Save aborted, refetch failed: {}", e).into());
                    set_notice.set(Some(format!("Não foi possível salvar: {}", e)));
                    return;
                }
            };

            let moves = match session.try_update(|s| s.prepare_save(&fresh)) {
                Some(Ok(moves)) => moves,
                Some(Err(e)) => {
                    web_sys::console::error_1(&format!("[LIST] Cannot reconcile list {}: {}", list_id, e).into());
                    return;
                }
                None => return,
            };
            web_sys::console::log_1(&format!("[LIST] Saving list {} with {} moves", list_id, moves.len()).into());

            let replay_api = api.clone();
            let (replay, handle) = abortable(async move { apply_moves(&replay_api, list_id, &moves).await });
            save_abort.set_value(Some(handle));
            let outcome = replay.await;
            save_abort.try_update_value(|h| *h = None);

            // Aborted: the page went away, remaining moves are abandoned
            let Ok(result) = outcome else {
                web_sys::console::warn_1(&format!("[LIST] Save of list {} abandoned", list_id).into());
                return;
            };

            if let Err(e) = &result {
                web_sys::console::error_1(&format!("[LIST] {}", e).into());
            }
            session.update(|s| s.complete_save(&result));

            if result.is_ok() {
                match api.list_games_in(list_id).await {
                    Ok(games) => session.update(|s| s.rebaseline(games)),
                    Err(e) => set_notice.set(Some(format!("Ordem salva, mas a lista não pôde ser recarregada: {}", e))),
                }
            }
        });
    });

    on_cleanup(move || {
        save_abort.try_with_value(|handle| {
            if let Some(handle) = handle {
                handle.abort();
            }
        });
    });

    // A failed attempt may have been partially applied: only a reload shows the truth
    let discard = Callback::new(move |_: ()| {
        if session.with_untracked(|s| s.needs_reload()) {
            set_reload_trigger.update(|n| *n += 1);
        } else {
            session.update(|s| s.revert());
        }
    });

    let retry = Callback::new(move |_| set_reload_trigger.update(|n| *n += 1));
    let is_empty = Memo::new(move |_| session.with(|s| s.working().is_empty()));
    let applying = Memo::new(move |_| session.with(|s| s.is_applying()));
    let can_save = move || session.with(|s| s.is_dirty() && !s.is_applying());
    let is_failed = move || session.with(|s| matches!(s.state(), ReconcileState::Failed { .. }));
    let trail = Signal::derive(move || {
        vec![Crumb::link("Home", Route::Home), Crumb::link("Listas", Route::Lists), Crumb::current(name.get())]
    });

    view! {
        <section class="page">
            <Breadcrumb trail=trail />
            <div class="page-title">
                <h1>"📋 " {move || name.get()}</h1>
                <p>{move || format!("{} nesta lista", games_found_label(session.with(|s| s.working().len())))}</p>
            </div>

            {move || match state.get() {
                Loadable::Loading => view! { <LoadingSpinner /> }.into_any(),
                Loadable::Failed(e) => view! {
                    <ErrorCard
                        title="Erro ao carregar games"
                        message=e.to_string()
                        on_retry=retry
                        back=Route::Lists
                        back_label="Voltar às Listas"
                    />
                }.into_any(),
                Loadable::Loaded(()) if is_empty.get() => view! {
                    <EmptyState title="Lista vazia" message="Esta lista não possui jogos no momento." />
                }.into_any(),
                Loadable::Loaded(()) => view! {
                    <div class="reorder-toolbar">
                        <span class="reorder-status" class:error=is_failed>
                            {move || session.with(|s| save_status_text(s.state()))}
                        </span>
                        <button class="primary" disabled=move || !can_save() on:click=move |_| save.run(())>
                            {move || if applying.get() { "Salvando..." } else { "Salvar ordem" }}
                        </button>
                        <button disabled=move || applying.get() || !session.with(|s| s.is_dirty()) on:click=move |_| discard.run(())>
                            "Descartar alterações"
                        </button>
                    </div>
                    {move || notice.get().map(|text| view! { <p class="notice">{text}</p> })}
                    <SortableGameList session=session />
                }.into_any(),
            }}

            <div class="page-footer">
                <button on:click=move |_| ctx.navigate(Route::Lists)>"← Voltar às Listas"</button>
            </div>
        </section>
    }
}
