use egui::Pos2;

use super::behavior::SortBehavior;
use super::scroll::ScrollAdjuster;
use super::SortArea;

/// Synthetic drag protocol, replacing native drag events.
///
/// Pointer tracking is translated into these messages and routed to whatever
/// pane or item is under the pointer; the contract is carried by the type
/// system instead of stringly-named custom events.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SyntheticEvent {
    /// The pointer entered a pane's element.
    DragEnter,
    /// The pointer left the active pane without entering another.
    DragLeave,
    /// Fired to the hovered pane on every pointer move; consumers read
    /// ambient session state.
    Drag,
    /// Fired to another item's element as the drag passes over it.
    DragOver { page_pos: Pos2 },
}

/// Addressee of a [`SyntheticEvent`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EventTarget {
    Pane(egui::Id),
    Item(egui::Id),
}

impl<T: Clone> SortArea<T> {
    /// Route one synthetic event to its handler.
    ///
    /// Target/event pairings outside the protocol (a `Drag` addressed to an
    /// item, say) are logged and ignored.
    pub fn dispatch(
        &mut self,
        target: EventTarget,
        event: SyntheticEvent,
        behavior: &mut dyn SortBehavior<T>,
        scroll: &mut dyn ScrollAdjuster,
    ) {
        match (target, event) {
            (EventTarget::Pane(pane), SyntheticEvent::DragEnter) => {
                self.handle_drag_enter(pane, behavior);
            }
            (EventTarget::Pane(pane), SyntheticEvent::DragLeave) => {
                self.handle_drag_leave(pane, behavior);
            }
            (EventTarget::Pane(pane), SyntheticEvent::Drag) => {
                self.handle_pane_drag(pane, behavior, scroll);
            }
            (EventTarget::Item(item), SyntheticEvent::DragOver { page_pos }) => {
                self.handle_drag_over(item, page_pos, behavior);
            }
            (target, event) => {
                self.debug_log_event(format!(
                    "dispatch IGNORED target={target:?} event={event:?}"
                ));
            }
        }
    }
}
