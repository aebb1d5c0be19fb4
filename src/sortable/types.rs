use std::cell::Cell;
use std::rc::Rc;

use egui::{Pos2, Rect, Vec2};

use super::list::SortList;
use super::scroll::ScrollAxis;

/// Which pointer button went down on a sortable item.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    /// Context-menu button; never starts a drag, but the press is consumed so
    /// the embedder can suppress the default context menu.
    Secondary,
}

/// Per-pane configuration.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PaneConfig {
    /// Compatibility tag: a drag may only enter panes whose group equals the
    /// source pane's group. Fixed at drag start.
    pub group: egui::Id,

    /// A disabled pane never accepts enters or drops.
    pub disabled: bool,

    /// Scroll speed handed to the [`super::ScrollAdjuster`] collaborator.
    pub scroll_speed: f32,

    /// Axis along which the pane auto-scrolls.
    pub scroll_axis: ScrollAxis,

    /// Element the scroll collaborator should move; the pane itself if unset.
    pub scroll_pane: Option<egui::Id>,
}

impl PaneConfig {
    pub fn new(group: impl Into<egui::Id>) -> Self {
        Self {
            group: group.into(),
            disabled: false,
            scroll_speed: 3.0,
            scroll_axis: ScrollAxis::Vertical,
            scroll_pane: None,
        }
    }
}

/// Per-item configuration.
#[derive(Clone, Copy, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemConfig {
    /// A disabled item neither starts drags nor receives `DragOver`.
    pub disabled: bool,

    /// Optional containment element bounding auto-scroll while this item is
    /// being dragged.
    pub containment: Option<egui::Id>,
}

/// Handle identifying one drop confirmation that was deferred by the owner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DropTicket(pub(super) u64);

/// Owner's immediate answer to [`super::SortBehavior::on_drop`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DropVerdict {
    /// Keep the optimistic mutation.
    Confirm,
    /// Undo the optimistic mutation right away.
    Reject,
    /// Decide later via [`super::SortArea::resolve_drop`] with the request's
    /// ticket. The session is reset immediately regardless.
    Deferred,
}

/// Final outcome of a deferred confirmation.
#[derive(Debug)]
pub enum DropResolution {
    Confirm,
    Reject,
    /// The owner's confirmation failed. Treated exactly like `Reject`; the
    /// error is logged and swallowed at this layer.
    Error(DropError),
}

/// Failure reported by a drop confirmation.
#[derive(Debug)]
pub struct DropError {
    pub message: String,
}

impl DropError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl std::fmt::Display for DropError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "drop confirmation failed: {}", self.message)
    }
}

impl std::error::Error for DropError {}

/// Everything the zone owner needs to confirm or reject a drop.
///
/// Lists and indices are the drop-time snapshot, not the live session: the
/// session is reset before any deferred confirmation settles.
#[derive(Debug)]
pub struct DropRequest<'a, T> {
    /// Ticket to pass to [`super::SortArea::resolve_drop`] when answering
    /// with [`DropVerdict::Deferred`].
    pub ticket: DropTicket,
    pub dragged_item: &'a T,
    pub source_list: &'a SortList<T>,
    pub source_index: usize,
    pub target_list: &'a SortList<T>,
    pub target_index: usize,
    /// The element the drag started from.
    pub dragged_element: egui::Id,
}

/// Drop-time snapshot kept while a deferred confirmation is in flight.
#[derive(Debug)]
pub(super) struct PendingConfirm<T> {
    pub(super) dragged_item: T,
    pub(super) source_list: SortList<T>,
    pub(super) source_index: usize,
    pub(super) target_list: SortList<T>,
    pub(super) target_index: usize,
    /// Liveness flag of the pane that owned the drop, captured at drop time.
    /// Rollback is skipped once the pane has been torn down.
    pub(super) pane_alive: Rc<Cell<bool>>,
    pub(super) pane: egui::Id,
}

/// Pointer-capture state of the item machinery: idle, armed by a
/// pointer-down, or dragging with a live ghost.
#[derive(Clone, Copy, Debug, Default)]
pub(super) enum DragPhase {
    #[default]
    Idle,
    Armed {
        item: egui::Id,
        origin: Pos2,
    },
    Dragging {
        item: egui::Id,
        grab_offset: Vec2,
    },
}

#[derive(Debug)]
pub(super) struct PaneState<T> {
    pub(super) rect: Rect,
    pub(super) items: SortList<T>,
    pub(super) config: PaneConfig,
    pub(super) alive: Rc<Cell<bool>>,
}

#[derive(Clone, Copy, Debug)]
pub(super) struct ItemState {
    pub(super) pane: egui::Id,
    pub(super) position: usize,
    pub(super) rect: Rect,
    pub(super) config: ItemConfig,
}
