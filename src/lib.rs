//! Pageboard: draggable canvas items for a visual page builder.
//!
//! The item model ([`draggable`], [`portal`], [`tree`]) is independent of
//! any windowing system and is what the tests exercise. [`render`] maps it
//! onto gpui and [`app`] is a small page built from it.

pub mod app;
pub mod class_name;
pub mod constants;
pub mod dnd;
pub mod draggable;
pub mod element;
pub mod error;
pub mod events;
pub mod modifier;
pub mod perf;
pub mod portal;
pub mod render;
pub mod settings;
pub mod settings_watcher;
pub mod style;
pub mod tree;
pub mod visual_state;

pub use draggable::{DraggableItem, DraggableItemProps};
pub use error::{PageboardError, Result};
