use super::behavior::SortBehavior;
use super::geometry::entry_indices;
use super::scroll::ScrollAdjuster;
use super::types::{DropRequest, DropResolution, DropTicket, DropVerdict, PendingConfirm};
use super::SortArea;

impl<T: Clone> SortArea<T> {
    /// The synthetic `DragEnter` reached `pane_key`'s element.
    ///
    /// No-op when the pane's group doesn't match the session's source group,
    /// when the pane is already the active one, or when it is disabled; the
    /// session is left untouched in all three cases.
    pub(super) fn handle_drag_enter(
        &mut self,
        pane_key: egui::Id,
        behavior: &mut dyn SortBehavior<T>,
    ) {
        let Some((group, disabled, list)) = self
            .panes
            .get(&pane_key)
            .map(|p| (p.config.group, p.config.disabled, p.items.clone()))
        else {
            return;
        };

        let connected = self.session.source_group == Some(group);
        let already_active = self.session.active_pane == Some(pane_key);
        if !connected || already_active || disabled {
            return;
        }

        let same_pane = list.same_list(&self.session.source_list);
        let (target_index, over_index) = entry_indices(list.len(), same_pane);

        self.session.is_drag_entered = true;
        self.session.active_pane = Some(pane_key);
        self.session.target_list = list;
        self.session.target_index = Some(target_index);
        self.session.current_over_index = Some(over_index);
        // Placeholder sits at the end of the list while hovering empty space.
        self.session.over_on_top_half = false;

        self.debug_log_event(format!(
            "pane ENTER pane={pane_key:?} same_pane={same_pane} target_index={target_index}"
        ));
        behavior.on_drag_enter(pane_key);
    }

    /// The synthetic `DragLeave` reached `pane_key`'s element.
    ///
    /// Clears the active pane unconditionally; safe even if this pane was
    /// never entered.
    pub(super) fn handle_drag_leave(
        &mut self,
        pane_key: egui::Id,
        behavior: &mut dyn SortBehavior<T>,
    ) {
        self.session.active_pane = None;
        self.session.is_drag_entered = false;

        self.debug_log_event(format!("pane LEAVE pane={pane_key:?}"));
        behavior.on_drag_leave(pane_key);
    }

    /// The synthetic `Drag` reached `pane_key`'s element.
    ///
    /// The event flows to the pane even when it is disabled or not connected;
    /// only an enabled pane reacts, by driving auto-scroll and notifying its
    /// owner.
    pub(super) fn handle_pane_drag(
        &mut self,
        pane_key: egui::Id,
        behavior: &mut dyn SortBehavior<T>,
        scroll: &mut dyn ScrollAdjuster,
    ) {
        let Some(config) = self.panes.get(&pane_key).map(|p| p.config) else {
            return;
        };
        if config.disabled {
            return;
        }

        if let Some(ghost_rect) = self.last_ghost_rect {
            let container = config.scroll_pane.unwrap_or(pane_key);
            scroll.adjust(container, ghost_rect, config.scroll_axis, config.scroll_speed);
        }

        if let Some(pointer) = self.last_pointer {
            behavior.on_drag(pane_key, pointer);
        }
    }

    /// The pointer was released while `pane_key` owns the session: commit the
    /// move.
    ///
    /// Reads a consistent snapshot from the session, applies the optimistic
    /// mutation (remove before insert, so a same-list insert lands at the
    /// intended final position), asks the owner to confirm, and resets the
    /// session unconditionally without waiting for a deferred answer. Any
    /// later rollback operates on the snapshot, never on the cleared session.
    pub(super) fn handle_drop(
        &mut self,
        pane_key: egui::Id,
        dragged_element: egui::Id,
        behavior: &mut dyn SortBehavior<T>,
    ) {
        let snapshot = (
            self.session.dragged_item.clone(),
            self.session.source_index,
            self.session.target_index,
        );
        let (Some(dragged_item), Some(source_index), Some(target_index)) = snapshot else {
            self.debug_log_event(format!("drop IGNORED pane={pane_key:?} (no live session)"));
            self.reset();
            return;
        };
        let source_list = self.session.source_list.clone();
        let target_list = self.session.target_list.clone();

        let same_list = source_list.same_list(&target_list);
        let ticket = self.allocate_ticket();

        if same_list && source_index == target_index {
            // Nothing moves; the owner still hears about the attempt, but
            // there is no mutation to confirm or roll back.
            self.debug_log_event(format!(
                "drop NOOP pane={pane_key:?} index={source_index}"
            ));
            let _ = behavior.on_drop(DropRequest {
                ticket,
                dragged_item: &dragged_item,
                source_list: &source_list,
                source_index,
                target_list: &target_list,
                target_index,
                dragged_element,
            });
            self.reset();
            return;
        }

        // Optimistic mutation. Removing first shifts same-list indices so the
        // insert lands at the intended final position.
        if source_list.remove_at(source_index).is_none() {
            log::warn!("drop aborted: source slot {source_index} vanished");
            self.reset();
            return;
        }
        target_list.insert_at(target_index, dragged_item.clone());

        let pane_alive = self
            .panes
            .get(&pane_key)
            .map(|p| p.alive.clone())
            .unwrap_or_else(|| std::rc::Rc::new(std::cell::Cell::new(false)));

        let pending = PendingConfirm {
            dragged_item: dragged_item.clone(),
            source_list: source_list.clone(),
            source_index,
            target_list: target_list.clone(),
            target_index,
            pane_alive,
            pane: pane_key,
        };

        let verdict = behavior.on_drop(DropRequest {
            ticket,
            dragged_item: &dragged_item,
            source_list: &source_list,
            source_index,
            target_list: &target_list,
            target_index,
            dragged_element,
        });

        match verdict {
            DropVerdict::Confirm => {
                self.debug_log_event(format!(
                    "drop COMMIT pane={pane_key:?} {source_index}->{target_index}"
                ));
            }
            DropVerdict::Reject => {
                self.rollback_move(&pending);
            }
            DropVerdict::Deferred => {
                self.debug_log_event(format!(
                    "drop DEFERRED pane={pane_key:?} ticket={ticket:?}"
                ));
                self.pending.insert(ticket, pending);
            }
        }

        self.reset();
    }

    /// Settle a drop confirmation that was deferred by the owner.
    ///
    /// Unknown tickets (already settled, or minted for a no-op drop) are
    /// ignored. A rejection or error rolls the optimistic mutation back
    /// exactly, unless the owning pane has been torn down in the meantime.
    pub fn resolve_drop(&mut self, ticket: DropTicket, resolution: DropResolution) {
        let Some(pending) = self.pending.remove(&ticket) else {
            self.debug_log_event(format!("resolve IGNORED ticket={ticket:?} (unknown)"));
            return;
        };

        match resolution {
            DropResolution::Confirm => {
                self.debug_log_event(format!(
                    "resolve COMMIT pane={:?} ticket={ticket:?}",
                    pending.pane
                ));
            }
            DropResolution::Reject => {
                self.rollback_move(&pending);
            }
            DropResolution::Error(err) => {
                // Swallowed here; reporting is the owner's concern.
                log::warn!("{err}");
                self.rollback_move(&pending);
            }
        }
    }

    /// Exact inverse of the optimistic mutation, skipped once the owning
    /// pane is gone so a defunct collection is never touched.
    fn rollback_move(&mut self, pending: &PendingConfirm<T>) {
        if !pending.pane_alive.get() {
            self.debug_log_event(format!(
                "rollback SKIPPED pane={:?} (torn down)",
                pending.pane
            ));
            return;
        }

        let _ = pending.target_list.remove_at(pending.target_index);
        pending
            .source_list
            .insert_at(pending.source_index, pending.dragged_item.clone());

        self.debug_log_event(format!(
            "rollback APPLIED pane={:?} {}<-{}",
            pending.pane, pending.source_index, pending.target_index
        ));
    }

    fn allocate_ticket(&mut self) -> DropTicket {
        let id = self.next_ticket.max(1);
        self.next_ticket = id.saturating_add(1);
        DropTicket(id)
    }
}
