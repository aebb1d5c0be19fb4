use egui::{Pos2, Rect};

use super::behavior::SortBehavior;
use super::events::{EventTarget, SyntheticEvent};
use super::geometry::{hover_target_index, point_over_top_half};
use super::ghost::{placeholder_styles_for, GhostHandle};
use super::scroll::ScrollAdjuster;
use super::types::{DragPhase, PointerButton};
use super::SortArea;

impl<T: Clone> SortArea<T> {
    /// Pointer-down on a registered item.
    ///
    /// Arms the item for dragging on the primary button. A secondary button
    /// or a disabled item stays idle but is still consumed, so the embedder
    /// can suppress the default context-menu behavior. Returns whether the
    /// press was consumed.
    pub fn on_pointer_down(&mut self, item: egui::Id, button: PointerButton, pos: Pos2) -> bool {
        let Some(state) = self.items.get(&item) else {
            return false;
        };

        if button == PointerButton::Secondary || state.config.disabled {
            return true;
        }

        self.phase = DragPhase::Armed { item, origin: pos };
        true
    }

    /// Pointer moved.
    ///
    /// An armed item is promoted to dragging once the pointer has travelled
    /// at least the configured threshold; the promoting move only creates the
    /// ghost and seeds the session. Subsequent moves reposition the ghost,
    /// hit-test under the pointer with the ghost hidden, and translate the
    /// result into synthetic `DragOver`/`DragEnter`/`Drag`/`DragLeave`
    /// messages.
    pub fn on_pointer_move(
        &mut self,
        pos: Pos2,
        behavior: &mut dyn SortBehavior<T>,
        ghost: &mut dyn GhostHandle,
        scroll: &mut dyn ScrollAdjuster,
    ) {
        self.last_pointer = Some(pos);

        match self.phase {
            DragPhase::Idle => {}
            DragPhase::Armed { item, origin } => {
                if (pos - origin).length() >= self.options.drag_start_threshold {
                    self.start_drag(item, pos, behavior, ghost);
                }
            }
            DragPhase::Dragging { item, grab_offset } => {
                ghost.set_position(pos - grab_offset);
                let ghost_rect = Rect::from_min_size(pos - grab_offset, ghost.size());
                self.last_ghost_rect = Some(ghost_rect);

                // The ghost tracks the pointer and would otherwise be the
                // topmost element for any embedder-side hit region.
                ghost.hide();
                let hit = self.element_under_pointer(pos, Some(item));
                ghost.show();

                if let Some(over_item) = hit.item {
                    let over_disabled = self
                        .items
                        .get(&over_item)
                        .is_none_or(|it| it.config.disabled);
                    if !over_disabled {
                        self.dispatch(
                            EventTarget::Item(over_item),
                            SyntheticEvent::DragOver { page_pos: pos },
                            behavior,
                            scroll,
                        );
                    }
                }

                if let Some(pane) = hit.pane {
                    let pane_disabled = self
                        .panes
                        .get(&pane)
                        .is_none_or(|p| p.config.disabled);
                    if self.session.active_pane != Some(pane) && !pane_disabled {
                        self.dispatch(
                            EventTarget::Pane(pane),
                            SyntheticEvent::DragEnter,
                            behavior,
                            scroll,
                        );
                    }
                    // The pane's own handler decides whether to react.
                    self.dispatch(EventTarget::Pane(pane), SyntheticEvent::Drag, behavior, scroll);
                } else if let Some(active) = self.session.active_pane {
                    self.dispatch(
                        EventTarget::Pane(active),
                        SyntheticEvent::DragLeave,
                        behavior,
                        scroll,
                    );
                }

                self.adjust_containment_scroll(item, ghost_rect, scroll);
            }
        }
    }

    /// Pointer released: a dragging item performs a drop attempt on the pane
    /// that currently owns the session; an armed item simply disarms. The
    /// session is reset unconditionally after every drop attempt.
    pub fn on_pointer_up(
        &mut self,
        pos: Pos2,
        behavior: &mut dyn SortBehavior<T>,
        ghost: &mut dyn GhostHandle,
    ) {
        self.last_pointer = Some(pos);

        match std::mem::take(&mut self.phase) {
            DragPhase::Idle | DragPhase::Armed { .. } => {}
            DragPhase::Dragging { item, .. } => {
                behavior.on_drag_end();
                ghost.destroy();
                self.last_ghost_rect = None;

                if let Some(pane) = self.session.active_pane {
                    self.handle_drop(pane, item, behavior);
                } else {
                    self.debug_log_event(format!("drop SKIPPED item={item:?} (no active pane)"));
                }
                self.reset();
            }
        }
    }

    /// A drag passed over `item_key`: recompute the hover half and the
    /// tentative target index. Only meaningful while a drag is live.
    pub(super) fn handle_drag_over(
        &mut self,
        item_key: egui::Id,
        page_pos: Pos2,
        behavior: &mut dyn SortBehavior<T>,
    ) {
        if !self.session.is_dragging {
            return;
        }
        let Some((rect, over_index)) = self
            .items
            .get(&item_key)
            .map(|it| (it.rect, it.position))
        else {
            return;
        };
        let Some(source_index) = self.session.source_index else {
            return;
        };

        let over_on_top_half = point_over_top_half(page_pos.y, rect);
        let same_list = self
            .session
            .source_list
            .same_list(&self.session.target_list);
        let target_index =
            hover_target_index(over_index, source_index, same_list, over_on_top_half);

        self.session.current_over_item = Some(item_key);
        self.session.over_on_top_half = over_on_top_half;
        self.session.current_over_index = Some(over_index);
        self.session.target_index = Some(target_index);

        behavior.on_drag_over(item_key);
    }

    fn start_drag(
        &mut self,
        item_key: egui::Id,
        pos: Pos2,
        behavior: &mut dyn SortBehavior<T>,
        ghost: &mut dyn GhostHandle,
    ) {
        let Some((pane_key, position, item_rect)) = self
            .items
            .get(&item_key)
            .map(|it| (it.pane, it.position, it.rect))
        else {
            self.phase = DragPhase::Idle;
            return;
        };
        let Some((group, list)) = self
            .panes
            .get(&pane_key)
            .map(|p| (p.config.group, p.items.clone()))
        else {
            log::warn!("drag start aborted: item {item_key:?} has no registered pane");
            self.phase = DragPhase::Idle;
            return;
        };
        let Some(dragged) = list.get_cloned(position) else {
            log::warn!(
                "drag start aborted: position {position} out of range (len {})",
                list.len()
            );
            self.phase = DragPhase::Idle;
            return;
        };

        ghost.materialize(item_key, item_rect, pos);

        self.session.is_dragging = true;
        self.session.dragged_item = Some(dragged.clone());
        self.session.source_list = list.clone();
        self.session.target_list = list.clone();
        self.session.source_index = Some(position);
        self.session.target_index = Some(position);
        self.session.source_group = Some(group);
        // The drag begins inside its source pane, which is therefore both
        // active and entered until the pointer leaves it.
        self.session.active_pane = Some(pane_key);
        self.session.is_drag_entered = true;
        self.session.over_on_top_half = true;
        self.session.current_over_index = Some(position);
        self.session.placeholder_styles = placeholder_styles_for(ghost.size());

        self.phase = DragPhase::Dragging {
            item: item_key,
            grab_offset: pos - item_rect.min,
        };

        self.debug_log_event(format!(
            "drag START item={item_key:?} pane={pane_key:?} index={position}"
        ));
        behavior.on_drag_start(&dragged, &list, position);
    }

    fn adjust_containment_scroll(
        &mut self,
        item_key: egui::Id,
        ghost_rect: Rect,
        scroll: &mut dyn ScrollAdjuster,
    ) {
        let Some(state) = self.items.get(&item_key) else {
            return;
        };
        let Some(containment) = state.config.containment else {
            return;
        };
        let (axis, speed) = self
            .panes
            .get(&state.pane)
            .map(|p| (p.config.scroll_axis, p.config.scroll_speed))
            .unwrap_or_default();
        scroll.adjust(containment, ghost_rect, axis, speed);
    }
}
