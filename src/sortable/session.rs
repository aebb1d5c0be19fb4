use std::collections::BTreeMap;

use super::list::SortList;

/// The single shared mutable record describing an in-flight drag.
///
/// Owned by [`super::SortArea`] for the lifetime of the process; semantically
/// "live" only between drag start and [`DragSession::reset`]. Every pane and
/// item handler reads and writes this one record, so mutation ordering is the
/// synchronous event-dispatch ordering and the last write wins.
#[derive(Debug)]
pub struct DragSession<T> {
    /// A drag is currently in progress.
    pub is_dragging: bool,

    /// The value being moved, cloned out of the source list at drag start.
    pub dragged_item: Option<T>,

    /// Collection the drag started from.
    pub source_list: SortList<T>,

    /// Collection the item would land in if dropped now. Same underlying
    /// allocation as `source_list` iff the move is a same-pane reorder.
    pub target_list: SortList<T>,

    /// Position of the dragged item in `source_list`.
    pub source_index: Option<usize>,

    /// Position the item would land at in `target_list`. Kept in
    /// `0..=target_list.len()` while the session is live.
    pub target_index: Option<usize>,

    /// Unadjusted position of the slot currently under the pointer.
    pub current_over_index: Option<usize>,

    /// Whether the pointer is over the top half of the hovered slot.
    pub over_on_top_half: bool,

    /// Group tag of the source pane, fixed at drag start.
    pub source_group: Option<egui::Id>,

    /// Pane currently accepting the drag. Non-`None` only while
    /// `is_drag_entered` is set.
    pub active_pane: Option<egui::Id>,

    /// Whether the active pane has actually been entered.
    pub is_drag_entered: bool,

    /// Item currently hovered by the pointer.
    pub current_over_item: Option<egui::Id>,

    /// Geometry of the placeholder gap, as CSS property/value pairs captured
    /// from the ghost at drag start.
    pub placeholder_styles: BTreeMap<String, String>,
}

impl<T> Default for DragSession<T> {
    fn default() -> Self {
        Self {
            is_dragging: false,
            dragged_item: None,
            source_list: SortList::default(),
            target_list: SortList::default(),
            source_index: None,
            target_index: None,
            current_over_index: None,
            over_on_top_half: false,
            source_group: None,
            active_pane: None,
            is_drag_entered: false,
            current_over_item: None,
            placeholder_styles: BTreeMap::new(),
        }
    }
}

impl<T> DragSession<T> {
    /// Restore every field to its idle value, including fresh empty lists.
    ///
    /// Sole state-clearing entry point; idempotent. Deferred drop
    /// confirmations keep operating on their drop-time snapshot, never on
    /// the cleared session.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::DragSession;
    use crate::sortable::list::SortList;

    fn dirty_session() -> DragSession<u32> {
        let list = SortList::from_vec(vec![1, 2, 3]);
        DragSession {
            is_dragging: true,
            dragged_item: Some(2),
            source_list: list.clone(),
            target_list: list,
            source_index: Some(1),
            target_index: Some(2),
            current_over_index: Some(2),
            over_on_top_half: true,
            source_group: Some(egui::Id::new("group")),
            active_pane: Some(egui::Id::new("pane")),
            is_drag_entered: true,
            current_over_item: Some(egui::Id::new("item")),
            placeholder_styles: [("width".to_owned(), "10px".to_owned())].into(),
        }
    }

    #[test]
    fn reset_clears_every_field() {
        let mut session = dirty_session();
        let old_list = session.source_list.clone();
        session.reset();

        assert!(!session.is_dragging);
        assert!(session.dragged_item.is_none());
        assert!(session.source_index.is_none());
        assert!(session.target_index.is_none());
        assert!(session.current_over_index.is_none());
        assert!(!session.over_on_top_half);
        assert!(session.source_group.is_none());
        assert!(session.active_pane.is_none());
        assert!(!session.is_drag_entered);
        assert!(session.current_over_item.is_none());
        assert!(session.placeholder_styles.is_empty());

        // Fresh empty collections, not the old handles emptied in place.
        assert!(!session.source_list.same_list(&old_list));
        assert!(session.source_list.is_empty());
        assert_eq!(old_list.len(), 3);
    }

    #[test]
    fn reset_is_idempotent() {
        let mut session = dirty_session();
        session.reset();
        session.reset();
        assert!(!session.is_dragging);
        assert!(session.source_list.is_empty());
        assert!(session.target_list.is_empty());
    }
}
