//! Pure board logic, testable without a DOM.

pub mod columns;
pub mod drag;
pub mod refresh;

pub use columns::ColumnAssignment;
pub use drag::{decide_drop, DragPayload, DropAction};
pub use refresh::{RefreshSequence, RefreshToken};
