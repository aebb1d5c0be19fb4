//! Pointer-driven drag-and-drop list reordering across panes.
//!
//! Instead of native drag events, raw pointer input is translated into a
//! synthetic `DragEnter`/`DragLeave`/`Drag`/`DragOver` protocol routed to
//! whichever pane or item is under the pointer, so reordering behaves the
//! same across input devices and across independently rendered containers.
//! Drops mutate the lists optimistically and are confirmed (possibly
//! deferred) or rolled back by the list owner.

#![forbid(unsafe_code)]

pub mod sortable;

pub use sortable::{
    DragSession, DropError, DropRequest, DropResolution, DropTicket, DropVerdict, EventTarget,
    GhostHandle, ItemConfig, PaneConfig, PointerButton, ScrollAdjuster, ScrollAxis, SortArea,
    SortAreaOptions, SortBehavior, SortList, SyntheticEvent,
};
