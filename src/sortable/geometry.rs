use egui::Rect;

/// What the pointer is currently over, topmost-wins.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(super) struct Hit {
    pub(super) item: Option<egui::Id>,
    pub(super) pane: Option<egui::Id>,
}

/// Whether `pointer_y` falls in the top half of `rect`.
pub(super) fn point_over_top_half(pointer_y: f32, rect: Rect) -> bool {
    (pointer_y - rect.top()) < rect.height() / 2.0
}

/// Target/over indices when the pointer enters a pane's empty trailing space.
///
/// Entering a foreign pane appends: `target = len`, `over = len - 1`.
/// Re-entering the pane the drag started from decrements both once more to
/// compensate for the dragged item's own slot still occupying the list.
/// Both decrements saturate at zero so length-0/1 lists stay in range.
pub(super) fn entry_indices(len: usize, same_pane: bool) -> (usize, usize) {
    let target = len;
    let over = len.saturating_sub(1);
    if same_pane {
        (target.saturating_sub(1), over.saturating_sub(1))
    } else {
        (target, over)
    }
}

/// Final target index while hovering the slot at `over_index`.
///
/// The same-list shift subtracts one when the hovered slot sits after the
/// dragged item's own (still occupied) slot in the same list.
pub(super) fn hover_target_index(
    over_index: usize,
    source_index: usize,
    same_list: bool,
    over_on_top_half: bool,
) -> usize {
    let shift = usize::from(same_list && over_index > source_index);
    let base = if over_on_top_half {
        over_index
    } else {
        over_index + 1
    };
    // shift == 1 implies over_index >= 1, so base >= 1 and this never wraps.
    base - shift
}

#[cfg(test)]
mod tests {
    use super::{entry_indices, hover_target_index, point_over_top_half};
    use egui::{Pos2, Rect, Vec2};

    #[test]
    fn top_half_split_is_strict() {
        let rect = Rect::from_min_size(Pos2::new(0.0, 100.0), Vec2::new(50.0, 40.0));
        assert!(point_over_top_half(110.0, rect));
        assert!(!point_over_top_half(120.0, rect)); // exactly the midline
        assert!(!point_over_top_half(135.0, rect));
    }

    #[test]
    fn foreign_pane_entry_appends() {
        assert_eq!(entry_indices(3, false), (3, 2));
        assert_eq!(entry_indices(0, false), (0, 0));
    }

    #[test]
    fn source_pane_reentry_compensates_for_dragged_slot() {
        assert_eq!(entry_indices(3, true), (2, 1));
        // Single-item list: the only occupant is the dragged item itself.
        assert_eq!(entry_indices(1, true), (0, 0));
        assert_eq!(entry_indices(0, true), (0, 0));
    }

    #[test]
    fn same_list_shift_applies_only_past_the_source() {
        // Dragging index 0 onto the bottom half of index 3: [a,b,c,d] -> a at 3.
        assert_eq!(hover_target_index(3, 0, true, false), 3);
        // Top half of the same slot.
        assert_eq!(hover_target_index(3, 0, true, true), 2);
        // Hovering before the source slot: no shift.
        assert_eq!(hover_target_index(1, 3, true, false), 2);
        // Cross-list: never shifted.
        assert_eq!(hover_target_index(3, 0, false, false), 4);
    }
}
