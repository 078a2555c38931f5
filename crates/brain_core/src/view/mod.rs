//! View renderers: pure functions from store snapshots to render trees.
//!
//! # Responsibility
//! - Build a complete `ViewNode` tree for a page on every call.
//! - Embed interaction bindings (`Action`) in the nodes they belong to.
//!
//! # Invariants
//! - Rendering reads state only; equal inputs give equal trees.
//! - Element ids are fixed per page so callers can locate nodes by id.

mod action;
pub mod calendar;
pub mod finances;
pub mod home;
mod layout;
mod node;
pub mod notes;
mod page;
pub mod projects;
pub mod settings;
pub mod text;
pub mod timetable;

pub use action::Action;
pub use layout::{render_layout, LayoutContext};
pub use node::{Tag, ViewNode};
pub use page::Page;
