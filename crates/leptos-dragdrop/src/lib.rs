//! Leptos DragDrop Utilities
//!
//! Drag-and-drop reordering for flat Leptos lists using mouse events.
//! Uses movement threshold to distinguish click from drag.

use leptos::leptos_dom::helpers::{window_event_listener, WindowListenerHandle};
use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Drop target types
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DropTarget {
    /// Drop on an item: the dragged item takes its index
    Item(u64),
    /// Drop on the gap before `position` (0..=len, counted before the
    /// dragged item is lifted out)
    Slot(usize),
}

/// DnD state signals
#[derive(Clone, Copy)]
pub struct DndSignals {
    pub dragging_id_read: ReadSignal<Option<u64>>,
    pub dragging_id_write: WriteSignal<Option<u64>>,
    pub drop_target_read: ReadSignal<Option<DropTarget>>,
    pub drop_target_write: WriteSignal<Option<DropTarget>>,
    /// Pending item id (mousedown but not yet dragging)
    pub pending_id_read: ReadSignal<Option<u64>>,
    pub pending_id_write: WriteSignal<Option<u64>>,
    /// Start position for movement detection
    pub start_read: ReadSignal<(i32, i32)>,
    pub start_write: WriteSignal<(i32, i32)>,
    /// Disables new drags (e.g. while a save is running)
    pub locked_read: ReadSignal<bool>,
    pub locked_write: WriteSignal<bool>,
}

/// Movement threshold in pixels to start dragging
const DRAG_THRESHOLD_PX: i32 = 5;

pub fn create_dnd_signals() -> DndSignals {
    let (dragging_id_read, dragging_id_write) = signal(None::<u64>);
    let (drop_target_read, drop_target_write) = signal(None::<DropTarget>);
    let (pending_id_read, pending_id_write) = signal(None::<u64>);
    let (start_read, start_write) = signal((0i32, 0i32));
    let (locked_read, locked_write) = signal(false);
    DndSignals {
        dragging_id_read,
        dragging_id_write,
        drop_target_read,
        drop_target_write,
        pending_id_read,
        pending_id_write,
        start_read,
        start_write,
        locked_read,
        locked_write,
    }
}

impl DndSignals {
    /// Is `id` the item being dragged
    pub fn is_dragging(&self, id: u64) -> bool {
        self.dragging_id_read.get() == Some(id)
    }

    /// Is any drag in progress
    pub fn is_active(&self) -> bool {
        self.dragging_id_read.get().is_some()
    }
}

/// Whether the pointer moved far enough from the mousedown point to count as a drag
pub fn exceeds_threshold(start: (i32, i32), current: (i32, i32)) -> bool {
    (current.0 - start.0).abs() > DRAG_THRESHOLD_PX || (current.1 - start.1).abs() > DRAG_THRESHOLD_PX
}

/// End drag operation
pub fn end_drag(dnd: &DndSignals) {
    dnd.dragging_id_write.set(None);
    dnd.drop_target_write.set(None);
    dnd.pending_id_write.set(None);
}

/// Create mousedown handler for draggable rows
/// Records pending drag with start position
pub fn make_on_mousedown(dnd: DndSignals, item_id: u64) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |ev: web_sys::MouseEvent| {
        if ev.button() != 0 || dnd.locked_read.get_untracked() {
            return;
        }
        // Controls inside the row keep their own click behavior
        if let Some(target) = ev.target() {
            if target.dyn_ref::<web_sys::HtmlInputElement>().is_some() { return; }
            if target.dyn_ref::<web_sys::HtmlButtonElement>().is_some() { return; }
            if target.dyn_ref::<web_sys::HtmlAnchorElement>().is_some() { return; }
        }
        // Stop the browser from starting a text selection
        ev.prevent_default();
        dnd.pending_id_write.set(Some(item_id));
        dnd.start_write.set((ev.client_x(), ev.client_y()));
    }
}

/// Create mouseenter handler for rows (take this item's place)
pub fn make_on_item_mouseenter(dnd: DndSignals, item_id: u64) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if let Some(dragging) = dnd.dragging_id_read.get_untracked() {
            // Don't allow dropping on self
            if dragging != item_id {
                dnd.drop_target_write.set(Some(DropTarget::Item(item_id)));
            }
        }
    }
}

/// Create mouseenter handler for slots between rows
pub fn make_on_slot_mouseenter(dnd: DndSignals, position: usize) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging_id_read.get_untracked().is_some() {
            dnd.drop_target_write.set(Some(DropTarget::Slot(position)));
        }
    }
}

/// Create mouseleave handler
pub fn make_on_mouseleave(dnd: DndSignals) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging_id_read.get_untracked().is_some() {
            dnd.drop_target_write.set(None);
        }
    }
}

/// Window listeners driving a drag; remove them when the list unmounts
pub struct DndListeners {
    mouseup: WindowListenerHandle,
    mousemove: WindowListenerHandle,
}

impl DndListeners {
    pub fn remove(self) {
        self.mouseup.remove();
        self.mousemove.remove();
    }
}

/// Bind global mouseup handler for drop detection, plus the mousemove
/// handler that turns a pending press into a drag
pub fn bind_global_mouseup<F>(dnd: DndSignals, on_drop: F) -> DndListeners
where
    F: Fn(u64, DropTarget) + Clone + 'static,
{
    let mouseup = window_event_listener(leptos::ev::mouseup, move |_ev: web_sys::MouseEvent| {
        let dragging_id = dnd.dragging_id_read.get_untracked();
        let drop_target = dnd.drop_target_read.get_untracked();

        end_drag(&dnd);

        // Only a real drag onto a target counts; a plain click falls through
        if let (Some(dragged), Some(target)) = (dragging_id, drop_target) {
            on_drop(dragged, target);
        }
    });

    let mousemove = window_event_listener(leptos::ev::mousemove, move |ev: web_sys::MouseEvent| {
        let pending = dnd.pending_id_read.get_untracked();

        if pending.is_some() && dnd.dragging_id_read.get_untracked().is_none() {
            let start = dnd.start_read.get_untracked();
            if exceeds_threshold(start, (ev.client_x(), ev.client_y())) {
                dnd.dragging_id_write.set(pending);
            }
        }
    });

    DndListeners { mouseup, mousemove }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_jitter_is_a_click() {
        assert!(!exceeds_threshold((100, 100), (103, 96)));
        assert!(!exceeds_threshold((100, 100), (105, 105)));
    }

    #[test]
    fn test_end_drag_clears_every_drag_signal() {
        let dnd = create_dnd_signals();
        dnd.pending_id_write.set(Some(7));
        dnd.dragging_id_write.set(Some(7));
        dnd.drop_target_write.set(Some(DropTarget::Slot(2)));

        end_drag(&dnd);
        assert_eq!(dnd.pending_id_read.get_untracked(), None);
        assert_eq!(dnd.dragging_id_read.get_untracked(), None);
        assert_eq!(dnd.drop_target_read.get_untracked(), None);
    }

    #[test]
    fn test_movement_past_threshold_is_a_drag() {
        assert!(exceeds_threshold((100, 100), (106, 100)));
        assert!(exceeds_threshold((100, 100), (100, 94)));
    }
}
