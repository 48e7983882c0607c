//! Sortable Game List Component
//!
//! Games of one list, reorderable with leptos-dragdrop. Drops only change
//! the session's working order; persisting is the page's save action.

use leptos::prelude::*;

use dslist_reorder::{position_of, slot_to_destination, Move, ReorderSession};
use leptos_dragdrop::*;

use crate::components::GameCard;
use crate::models::Game;

/// Translate a drop into a move on `working`
pub fn drop_move(working: &[Game], dragged: u64, target: DropTarget) -> Option<Move> {
    let from = position_of(working, dragged)?;
    let destination = match target {
        DropTarget::Item(target_id) => position_of(working, target_id)?,
        DropTarget::Slot(slot) => slot_to_destination(from, slot.min(working.len())),
    };
    let mv = Move::new(from, destination);
    (!mv.is_noop()).then_some(mv)
}

/// Drag-and-drop list over the session's working order
#[component]
pub fn SortableGameList(session: RwSignal<ReorderSession<Game>>) -> impl IntoView {
    let dnd = create_dnd_signals();

    // No new drags while moves are being sent
    Effect::new(move |_| {
        dnd.locked_write.set(session.with(|s| s.is_applying()));
    });

    let listeners = bind_global_mouseup(dnd, move |dragged_id, target| {
        session.update(|s| {
            let Some(mv) = drop_move(s.working(), dragged_id, target) else { return };
            match s.reorder(mv) {
                Ok(true) => web_sys::console::log_1(&format!("[DND] game {} moved {}", dragged_id, mv).into()),
                Ok(false) => {}
                Err(e) => web_sys::console::error_1(&format!("[DND] rejected drop: {}", e).into()),
            }
        });
    });
    on_cleanup(move || listeners.remove());

    let rows = move || session.with(|s| s.working().iter().cloned().enumerate().collect::<Vec<_>>());

    view! {
        <div class="sortable-list" class:locked=move || dnd.locked_read.get()>
            <DropSlot dnd=dnd position=0 />

            <For
                each=rows
                // Index is part of the key so slots are rebuilt after a reorder
                key=|(index, game)| (*index, game.id)
                children=move |(index, game)| {
                    let id = game.id;
                    let on_mousedown = make_on_mousedown(dnd, id);
                    let on_mouseenter = make_on_item_mouseenter(dnd, id);
                    let on_mouseleave = make_on_mouseleave(dnd);

                    let is_drop_target = move || {
                        matches!(dnd.drop_target_read.get(), Some(DropTarget::Item(tid)) if tid == id)
                    };

                    let row_class = move || {
                        let mut c = String::from("sortable-row");
                        if dnd.is_dragging(id) { c.push_str(" dragging"); }
                        if is_drop_target() { c.push_str(" drop-target"); }
                        c
                    };

                    view! {
                        <div
                            class=row_class
                            on:mousedown=on_mousedown
                            on:mouseenter=on_mouseenter
                            on:mouseleave=on_mouseleave
                        >
                            <span class="drag-handle" title="Arraste para reordenar">"⠿"</span>
                            <span class="row-position">{index + 1}</span>
                            <GameCard game=game />
                        </div>

                        <DropSlot dnd=dnd position={index + 1} />
                    }
                }
            />
        </div>
    }
}

/// Gap between rows that accepts a drop
#[component]
fn DropSlot(dnd: DndSignals, position: usize) -> impl IntoView {
    let on_mouseenter = make_on_slot_mouseenter(dnd, position);
    let on_mouseleave = make_on_mouseleave(dnd);

    let is_active = move || dnd.drop_target_read.get() == Some(DropTarget::Slot(position));

    let slot_class = move || {
        let mut c = String::from("drop-slot");
        if !dnd.is_active() { c.push_str(" hidden"); }
        if is_active() { c.push_str(" active"); }
        c
    };

    view! {
        <div
            class=slot_class
            on:mouseenter=on_mouseenter
            on:mouseleave=on_mouseleave
        />
    }
}
