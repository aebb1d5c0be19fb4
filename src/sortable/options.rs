/// Options for [`super::SortArea`].
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SortAreaOptions {
    /// Pointer travel (in points) required to promote a pressed item into a
    /// drag.
    pub drag_start_threshold: f32,

    /// If true, record debug events (session transitions, drop decisions,
    /// rollbacks) in a small ring buffer readable via
    /// [`super::SortArea::debug_log_lines`].
    pub debug_event_log: bool,

    /// Maximum number of debug log lines to keep (ring buffer).
    pub debug_event_log_capacity: usize,
}

impl Default for SortAreaOptions {
    fn default() -> Self {
        Self {
            drag_start_threshold: 1.0,
            debug_event_log: false,
            debug_event_log_capacity: 200,
        }
    }
}
