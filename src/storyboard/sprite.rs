use crate::{
    foundation::core::{Layer, Ms, Origin},
    storyboard::chain::{ChainBuilder, DEFAULT_X, DEFAULT_Y, Pose},
    storyboard::effect::Effect,
    storyboard::record::{CommandRecord, Prefix},
    storyboard::timeline::Timeline,
};

/// An image placed on the storyboard together with its command chain.
///
/// The first record of the chain is the sprite header, fixed at construction time. Later
/// `set_*` calls only change the starting values of the next animation.
#[derive(Clone, Debug)]
pub struct Sprite {
    image: String,
    origin: Origin,
    layer: Layer,
    pose: Pose,
    timeline: Timeline,
}

impl Sprite {
    /// Sprite with the default start time, origin, layer and position.
    pub fn new(image: impl Into<String>) -> Self {
        SpriteBuilder::new(image).build()
    }

    pub fn builder(image: impl Into<String>) -> SpriteBuilder {
        SpriteBuilder::new(image)
    }

    pub fn image(&self) -> &str {
        &self.image
    }

    pub fn origin(&self) -> Origin {
        self.origin
    }

    pub fn layer(&self) -> Layer {
        self.layer
    }

    /// Does not touch the already written header.
    pub fn set_layer(&mut self, layer: Layer) -> &mut Self {
        self.layer = layer;
        self
    }

    /// Replay `effect` at the current cursor, `repeat_count` times.
    pub fn apply_effect(&mut self, effect: &Effect, repeat_count: u32) -> &mut Self {
        self.timeline.replay(effect.timeline(), repeat_count);
        self
    }
}

impl ChainBuilder for Sprite {
    fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    fn timeline_mut(&mut self) -> &mut Timeline {
        &mut self.timeline
    }

    fn pose(&self) -> &Pose {
        &self.pose
    }

    fn pose_mut(&mut self) -> &mut Pose {
        &mut self.pose
    }
}

/// Builder for [`Sprite`] values with non-default header fields.
#[derive(Clone, Debug)]
pub struct SpriteBuilder {
    image: String,
    start_ms: Ms,
    origin: Origin,
    layer: Layer,
    x: f64,
    y: f64,
}

impl SpriteBuilder {
    pub fn new(image: impl Into<String>) -> Self {
        Self {
            image: image.into(),
            start_ms: 0,
            origin: Origin::default(),
            layer: Layer::default(),
            x: DEFAULT_X,
            y: DEFAULT_Y,
        }
    }

    /// Initial cursor position.
    pub fn start_ms(mut self, ms: Ms) -> Self {
        self.start_ms = ms;
        self
    }

    pub fn origin(mut self, origin: Origin) -> Self {
        self.origin = origin;
        self
    }

    pub fn layer(mut self, layer: Layer) -> Self {
        self.layer = layer;
        self
    }

    pub fn position(mut self, x: f64, y: f64) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    /// Build the sprite and write its header record.
    pub fn build(self) -> Sprite {
        let mut timeline = Timeline::new(self.start_ms, Prefix::Top);
        timeline.push(CommandRecord::Header {
            layer: self.layer,
            origin: self.origin,
            image: self.image.clone(),
            x: self.x,
            y: self.y,
        });
        Sprite {
            image: self.image,
            origin: self.origin,
            layer: self.layer,
            pose: Pose::at(self.x, self.y),
            timeline,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/storyboard/sprite.rs"]
mod tests;
