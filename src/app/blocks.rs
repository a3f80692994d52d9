//! Ordered block list behind the demo page.

use uuid::Uuid;

#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub id: String,
    pub title: String,
    pub body: String,
    pub locked: bool,
}

impl Block {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: title.into(),
            body: body.into(),
            locked: false,
        }
    }

    pub fn locked(mut self) -> Self {
        self.locked = true;
        self
    }

    /// Copy with a fresh id.
    pub fn duplicate(&self) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            ..self.clone()
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct BlockList {
    blocks: Vec<Block>,
}

impl BlockList {
    pub fn new(blocks: Vec<Block>) -> Self {
        Self { blocks }
    }

    /// Starter content for a fresh page.
    pub fn sample() -> Self {
        Self::new(vec![
            Block::new("Hero", "Welcome to the page. Drag blocks to reorder them."),
            Block::new("Text", "Hold Alt to interact with block contents instead of dragging."),
            Block::new("Footer", "This block is locked and cannot be dragged.").locked(),
            Block::new("", "A block without a label."),
        ])
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Block> {
        self.blocks.iter()
    }

    pub fn get(&self, id: &str) -> Option<&Block> {
        self.blocks.iter().find(|b| b.id == id)
    }

    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.blocks.iter().position(|b| b.id == id)
    }

    /// Insert a copy right after `id`. Returns the copy's id.
    pub fn duplicate(&mut self, id: &str) -> Option<String> {
        let index = self.index_of(id)?;
        let copy = self.blocks[index].duplicate();
        let new_id = copy.id.clone();
        self.blocks.insert(index + 1, copy);
        Some(new_id)
    }

    pub fn remove(&mut self, id: &str) -> Option<Block> {
        let index = self.index_of(id)?;
        Some(self.blocks.remove(index))
    }

    /// Move the block at `from` so it ends up at `to`. Out-of-range
    /// indices leave the list unchanged.
    pub fn move_block(&mut self, from: usize, to: usize) -> bool {
        if from >= self.blocks.len() || to >= self.blocks.len() || from == to {
            return false;
        }
        let block = self.blocks.remove(from);
        self.blocks.insert(to, block);
        true
    }
}

/// Destination index for a drop at `pointer_y`, given the vertical centers
/// of every item in order. The dragged item's own slot is ignored.
pub fn drop_index(centers: &[f32], source: usize, pointer_y: f32) -> usize {
    centers
        .iter()
        .enumerate()
        .filter(|(i, center)| *i != source && **center < pointer_y)
        .count()
}
