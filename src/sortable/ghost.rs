use std::collections::BTreeMap;

use egui::{Pos2, Rect, Vec2};

pub(super) const PLACEHOLDER_BG_COLOR: &str = "#ccc";

/// Floating visual clone of the dragged element, tracking the pointer.
///
/// External collaborator: the embedder owns creation and styling; the sort
/// machinery only drives it. `hide`/`show` bracket the hit-test on every
/// pointer move so the ghost never occludes the probe for the element under
/// the pointer.
pub trait GhostHandle {
    /// Create the floating clone for `item`, initially covering `item_rect`,
    /// grabbed at `pointer`.
    fn materialize(&mut self, item: egui::Id, item_rect: Rect, pointer: Pos2);

    fn show(&mut self);

    fn hide(&mut self);

    /// Move the clone so its top-left corner sits at `pos`.
    fn set_position(&mut self, pos: Pos2);

    /// Current geometry of the clone; feeds the placeholder gap and
    /// auto-scroll.
    fn size(&self) -> Vec2;

    /// Tear the clone down at the end of the drag.
    fn destroy(&mut self);
}

/// Placeholder-gap styles matching the ghost's geometry.
pub(super) fn placeholder_styles_for(size: Vec2) -> BTreeMap<String, String> {
    BTreeMap::from([
        ("width".to_owned(), format!("{:.0}px", size.x)),
        ("height".to_owned(), format!("{:.0}px", size.y)),
        (
            "background-color".to_owned(),
            PLACEHOLDER_BG_COLOR.to_owned(),
        ),
    ])
}
