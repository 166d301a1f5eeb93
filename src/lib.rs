//! Client-side kanban board synchronizer.
//!
//! Keeps three status columns (`todo`, `ongoing`, `completed`) in sync with a
//! remote task store reached over two HTTP endpoints, and translates
//! drag-and-drop gestures into status-update requests. The board holds no
//! state of its own between loads: every refresh rebuilds the columns from a
//! fresh snapshot.

pub mod app;
pub mod board;
pub mod components;
pub mod hooks;
pub mod models;
pub mod pages;
pub mod store;
