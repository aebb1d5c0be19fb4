use egui::Pos2;

use super::list::SortList;
use super::types::{DropRequest, DropVerdict};

/// Owner callbacks for panes and items. All methods default to no-ops.
///
/// One behavior serves every pane and item registered with a
/// [`super::SortArea`]; notifications carry the `egui::Id` of the pane or
/// item they concern.
pub trait SortBehavior<T> {
    /// The item at `source_index` of `list` started being dragged.
    fn on_drag_start(&mut self, _item: &T, _list: &SortList<T>, _source_index: usize) {}

    /// The drag entered `pane`.
    fn on_drag_enter(&mut self, _pane: egui::Id) {}

    /// The drag left `pane` without entering another.
    fn on_drag_leave(&mut self, _pane: egui::Id) {}

    /// The pointer moved over the active pane.
    fn on_drag(&mut self, _pane: egui::Id, _pointer: Pos2) {}

    /// The drag passed over `item`.
    fn on_drag_over(&mut self, _item: egui::Id) {}

    /// The dragged item's own drag ended (fires before the drop commit).
    fn on_drag_end(&mut self) {}

    /// Confirm or reject the optimistic list mutation, which has already
    /// been applied when this is called.
    ///
    /// Return [`DropVerdict::Deferred`] to answer later through
    /// [`super::SortArea::resolve_drop`] with `request.ticket`; a failed
    /// confirmation then rolls the mutation back exactly like a rejection.
    fn on_drop(&mut self, _request: DropRequest<'_, T>) -> DropVerdict {
        DropVerdict::Confirm
    }
}
