use crate::{
    foundation::core::Ms,
    storyboard::chain::{ChainBuilder, Pose},
    storyboard::record::Prefix,
    storyboard::timeline::Timeline,
};

/// Reusable, headerless command chain.
///
/// An effect has its own cursor starting at 0 and is only ever replayed onto sprites through
/// [`Sprite::apply_effect`](crate::Sprite::apply_effect), always under a loop marker, so its
/// commands carry loop-relative times and the doubled prefix.
#[derive(Clone, Debug)]
pub struct Effect {
    pose: Pose,
    timeline: Timeline,
}

impl Effect {
    pub fn new() -> Self {
        Self {
            pose: Pose::default(),
            timeline: Timeline::new(0, Prefix::Loop),
        }
    }

    /// Length of one replay: the final cursor value.
    pub fn total_duration(&self) -> Ms {
        self.timeline.ms()
    }
}

impl Default for Effect {
    fn default() -> Self {
        Self::new()
    }
}

impl ChainBuilder for Effect {
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

#[cfg(test)]
#[path = "../../tests/unit/storyboard/effect.rs"]
mod tests;
