use std::collections::hash_map::Entry;
use std::collections::VecDeque;

use egui::{Pos2, Rect};
use itertools::Itertools as _;

mod behavior;
mod debug;
mod events;
mod geometry;
mod ghost;
mod item;
mod list;
mod options;
mod pane;
mod scroll;
mod session;
mod types;


pub use behavior::SortBehavior;
pub use events::{EventTarget, SyntheticEvent};
pub use ghost::GhostHandle;
pub use list::SortList;
pub use options::SortAreaOptions;
pub use scroll::{ScrollAdjuster, ScrollAxis};
pub use session::DragSession;
pub use types::{
    DropError, DropRequest, DropResolution, DropTicket, DropVerdict, ItemConfig, PaneConfig,
    PointerButton,
};

use geometry::Hit;
use types::{DragPhase, ItemState, PaneState, PendingConfirm};

/// Pointer-driven drag-and-drop reordering across panes.
///
/// Owns the one [`DragSession`] that every pane and item handler reads and
/// writes, plus the registries mapping `egui::Id`s to pane/item geometry.
/// The embedder registers panes (each backed by a [`SortList`]) and items
/// (each a slot of its pane's list), then feeds raw pointer input through
/// [`Self::on_pointer_down`] / [`Self::on_pointer_move`] /
/// [`Self::on_pointer_up`]; the area translates that input into the
/// synthetic [`SyntheticEvent`] protocol and commits drops optimistically,
/// rolling back when the owner rejects them.
///
/// Rendering, auto-scroll velocity, and the ghost visual stay with the
/// embedder behind the [`SortBehavior`], [`ScrollAdjuster`] and
/// [`GhostHandle`] traits.
#[derive(Debug)]
pub struct SortArea<T> {
    pub options: SortAreaOptions,

    session: DragSession<T>,
    phase: DragPhase,

    panes: ahash::HashMap<egui::Id, PaneState<T>>,
    pane_order: Vec<egui::Id>,
    items: ahash::HashMap<egui::Id, ItemState>,
    item_order: Vec<egui::Id>,

    pending: ahash::HashMap<DropTicket, PendingConfirm<T>>,
    next_ticket: u64,

    last_pointer: Option<Pos2>,
    last_ghost_rect: Option<Rect>,

    debug_log: VecDeque<String>,
}

impl<T> Default for SortArea<T> {
    fn default() -> Self {
        Self {
            options: SortAreaOptions::default(),
            session: DragSession::default(),
            phase: DragPhase::Idle,
            panes: ahash::HashMap::default(),
            pane_order: Vec::new(),
            items: ahash::HashMap::default(),
            item_order: Vec::new(),
            pending: ahash::HashMap::default(),
            next_ticket: 1,
            last_pointer: None,
            last_ghost_rect: None,
            debug_log: VecDeque::new(),
        }
    }
}

impl<T> SortArea<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or refresh) a pane: a list container with on-screen `rect`.
    ///
    /// Re-registering an existing pane updates its geometry, list and config
    /// while keeping its liveness: in-flight drop confirmations for it stay
    /// reversible.
    pub fn insert_pane(
        &mut self,
        pane: egui::Id,
        rect: Rect,
        items: SortList<T>,
        config: PaneConfig,
    ) {
        match self.panes.entry(pane) {
            Entry::Occupied(mut entry) => {
                let alive = entry.get().alive.clone();
                entry.insert(PaneState {
                    rect,
                    items,
                    config,
                    alive,
                });
            }
            Entry::Vacant(entry) => {
                entry.insert(PaneState {
                    rect,
                    items,
                    config,
                    alive: std::rc::Rc::new(std::cell::Cell::new(true)),
                });
                self.pane_order.push(pane);
            }
        }
    }

    /// Tear a pane down. Marks it dead so a deferred drop confirmation that
    /// settles later skips its rollback, and drops the pane's items.
    pub fn remove_pane(&mut self, pane: egui::Id) {
        let Some(state) = self.panes.remove(&pane) else {
            return;
        };
        state.alive.set(false);
        self.pane_order.retain(|key| *key != pane);
        self.items.retain(|_, item| item.pane != pane);
        self.item_order.retain(|key| self.items.contains_key(key));

        if self.session.active_pane == Some(pane) {
            self.session.active_pane = None;
            self.session.is_drag_entered = false;
        }
    }

    pub fn set_pane_rect(&mut self, pane: egui::Id, rect: Rect) {
        if let Some(state) = self.panes.get_mut(&pane) {
            state.rect = rect;
        }
    }

    /// Register (or refresh) an item: the slot at `position` of `pane`'s
    /// list, rendered at `rect`. Later registrations are treated as topmost
    /// during hit-testing.
    pub fn insert_item(
        &mut self,
        item: egui::Id,
        pane: egui::Id,
        position: usize,
        rect: Rect,
        config: ItemConfig,
    ) {
        if self
            .items
            .insert(
                item,
                ItemState {
                    pane,
                    position,
                    rect,
                    config,
                },
            )
            .is_none()
        {
            self.item_order.push(item);
        }
    }

    pub fn remove_item(&mut self, item: egui::Id) {
        if self.items.remove(&item).is_some() {
            self.item_order.retain(|key| *key != item);
        }
    }

    pub fn set_item_rect(&mut self, item: egui::Id, rect: Rect) {
        if let Some(state) = self.items.get_mut(&item) {
            state.rect = rect;
        }
    }

    /// Read-only view of the shared drag session.
    pub fn session(&self) -> &DragSession<T> {
        &self.session
    }

    pub fn is_dragging(&self) -> bool {
        self.session.is_dragging
    }

    /// True iff `pane`'s group matches the session's source group.
    /// Compatibility is fixed at drag start and does not change mid-drag.
    pub fn is_connected(&self, pane: egui::Id) -> bool {
        let Some(state) = self.panes.get(&pane) else {
            return false;
        };
        self.session.source_group == Some(state.config.group)
    }

    /// True iff `pane` is the session's active drop target, by identity.
    pub fn is_active_pane(&self, pane: egui::Id) -> bool {
        self.session.active_pane == Some(pane)
    }

    /// The rendered element backing the active pane, if any.
    pub fn active_pane_rect(&self) -> Option<Rect> {
        let pane = self.session.active_pane?;
        self.panes.get(&pane).map(|state| state.rect)
    }

    /// The session's placeholder styles serialized as a single inline-style
    /// string (`"prop: value; prop: value"`).
    pub fn placeholder_style_inline(&self) -> Option<String> {
        if self.session.placeholder_styles.is_empty() {
            return None;
        }
        Some(
            self.session
                .placeholder_styles
                .iter()
                .map(|(prop, value)| format!("{prop}: {value}"))
                .join("; "),
        )
    }

    /// Clear the session back to idle. Idempotent; called unconditionally
    /// after every drop attempt regardless of the commit outcome.
    pub fn reset(&mut self) {
        if self.session.is_dragging {
            self.debug_log_event("session RESET");
        }
        self.session.reset();
    }

    /// Topmost registered item and pane under `pos`. The dragged item is
    /// excluded, mirroring the original element being hidden during the
    /// probe.
    fn element_under_pointer(
        &self,
        pos: Pos2,
        exclude_item: Option<egui::Id>,
    ) -> Hit {
        let item = self.item_order.iter().rev().copied().find(|key| {
            Some(*key) != exclude_item
                && self
                    .items
                    .get(key)
                    .is_some_and(|state| state.rect.contains(pos))
        });
        let pane = self.pane_order.iter().rev().copied().find(|key| {
            self.panes
                .get(key)
                .is_some_and(|state| state.rect.contains(pos))
        });
        Hit { item, pane }
    }
}
