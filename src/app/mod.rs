//! Demo page built from draggable items.
//!
//! A vertical list of content blocks, each rendered through a
//! [`DraggableItem`](crate::draggable::DraggableItem). Blocks can be
//! selected, reordered by dragging, duplicated and deleted.

mod blocks;
mod interactions;
mod lifecycle;
mod state;
mod view;

pub use blocks::{Block, BlockList, drop_index};
pub use state::{ActionQueue, ItemAction, PageCanvas};
