use egui::Rect;

/// Axis along which a container auto-scrolls during a drag.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollAxis {
    #[default]
    Vertical,
    Horizontal,
}

/// External collaborator that scrolls a container toward the pointer when
/// the dragged element nears one of its edges.
///
/// Consumed, not implemented, by this crate: the velocity computation and
/// the actual scrolling belong to the embedder.
pub trait ScrollAdjuster {
    fn adjust(&mut self, container: egui::Id, ghost_rect: Rect, axis: ScrollAxis, speed: f32);
}
