use crate::storyboard::sprite::{Sprite, SpriteBuilder};

/// Handle to a sprite registered in a [`Storyboard`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SpriteId(pub usize);

/// Per-compile registry of sprites, in construction order.
///
/// Append-only: sprites are never removed or reordered, so the serialized document lists them
/// in the order the script created them no matter when each one was last modified.
#[derive(Clone, Debug, Default)]
pub struct Storyboard {
    sprites: Vec<Sprite>,
}

impl Storyboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an already built sprite.
    pub fn add(&mut self, sprite: Sprite) -> SpriteId {
        self.sprites.push(sprite);
        SpriteId(self.sprites.len() - 1)
    }

    /// Construct a sprite with default header fields, register it and hand it back for chaining.
    pub fn sprite(&mut self, image: impl Into<String>) -> &mut Sprite {
        self.sprite_with(SpriteBuilder::new(image))
    }

    /// Like [`Storyboard::sprite`] for a configured builder.
    pub fn sprite_with(&mut self, builder: SpriteBuilder) -> &mut Sprite {
        let id = self.add(builder.build());
        &mut self.sprites[id.0]
    }

    /// Id the next registered sprite will get.
    pub fn next_id(&self) -> SpriteId {
        SpriteId(self.sprites.len())
    }

    pub fn get(&self) -> &[Sprite] {
        &self.sprites
    }

    pub fn get_mut(&mut self, id: SpriteId) -> Option<&mut Sprite> {
        self.sprites.get_mut(id.0)
    }

    pub fn len(&self) -> usize {
        self.sprites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sprites.is_empty()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/storyboard/registry.rs"]
mod tests;
