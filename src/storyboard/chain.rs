use crate::{
    animation::ease::Easing,
    foundation::core::{Ms, Param, ParameterFlag, Rgb},
    storyboard::record::{CommandRecord, Opcode},
    storyboard::timeline::Timeline,
};

/// Default sprite position (centre of the 640x480 storyboard field).
pub const DEFAULT_X: f64 = 320.0;
/// Default sprite position (centre of the 640x480 storyboard field).
pub const DEFAULT_Y: f64 = 240.0;

/// "Current values" of an animated entity.
///
/// Every animation helper starts from these and leaves its target here, so chained calls
/// continue where the previous one ended.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub transparency: f64,
    /// Radians.
    pub rotation: f64,
    pub color: Rgb,
}

impl Pose {
    pub fn at(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            ..Self::default()
        }
    }
}

impl Default for Pose {
    fn default() -> Self {
        Self {
            x: DEFAULT_X,
            y: DEFAULT_Y,
            size: 1.0,
            transparency: 0.0,
            rotation: 0.0,
            color: Rgb::WHITE,
        }
    }
}

/// Shared command-building surface of sprites and effect templates.
///
/// Implementors only expose their [`Timeline`] and [`Pose`]; every operation is provided.
pub trait ChainBuilder {
    fn timeline(&self) -> &Timeline;
    fn timeline_mut(&mut self) -> &mut Timeline;
    fn pose(&self) -> &Pose;
    fn pose_mut(&mut self) -> &mut Pose;

    /// Current absolute cursor.
    fn ms(&self) -> Ms {
        self.timeline().ms()
    }

    /// Records accumulated so far. Reading has no side effects.
    fn chain(&self) -> &[CommandRecord] {
        self.timeline().chain()
    }

    /// The chain rendered one record per line.
    fn chain_lines(&self) -> Vec<String> {
        self.chain().iter().map(ToString::to_string).collect()
    }

    /// Append a command starting at the active cursor.
    fn add_to_chain(
        &mut self,
        opcode: Opcode,
        easing: Easing,
        duration: Ms,
        params: Vec<Param>,
    ) -> &mut Self {
        self.timeline_mut()
            .add_to_chain(opcode, easing, duration, params);
        self
    }

    /// Open a loop replayed `repeat_count` times. Ignored while a loop is open.
    fn start_loop(&mut self, repeat_count: u32) -> &mut Self {
        self.timeline_mut().start_loop(repeat_count);
        self
    }

    /// Close the open loop; no-op without one.
    fn end_loop(&mut self) -> &mut Self {
        self.timeline_mut().end_loop();
        self
    }

    /// Open a batch: following commands share one start time. Ignored while a batch is open.
    fn start_batch(&mut self) -> &mut Self {
        self.timeline_mut().start_batch();
        self
    }

    /// Close the open batch; no-op without one.
    fn end_batch(&mut self) -> &mut Self {
        self.timeline_mut().end_batch();
        self
    }

    /// Let time pass without recording anything.
    fn sleep(&mut self, duration: Ms) -> &mut Self {
        self.timeline_mut().advance(duration);
        self
    }

    /// Jump the absolute cursor to `ms`.
    ///
    /// Unlike every other operation this may move the cursor backwards, so later commands can
    /// overlap earlier ones. Records nothing.
    fn set_time(&mut self, ms: Ms) -> &mut Self {
        self.timeline_mut().set_ms(ms);
        self
    }

    fn set_position(&mut self, x: f64, y: f64) -> &mut Self {
        let pose = self.pose_mut();
        pose.x = x;
        pose.y = y;
        self
    }

    fn set_size(&mut self, size: f64) -> &mut Self {
        self.pose_mut().size = size;
        self
    }

    fn set_transparency(&mut self, transparency: f64) -> &mut Self {
        self.pose_mut().transparency = transparency;
        self
    }

    fn set_rotation(&mut self, rotation: f64) -> &mut Self {
        self.pose_mut().rotation = rotation;
        self
    }

    fn set_color(&mut self, color: Rgb) -> &mut Self {
        self.pose_mut().color = color;
        self
    }

    fn fade_in(&mut self, duration: Ms, easing: Easing) -> &mut Self {
        self.fade(duration, 1.0, easing)
    }

    fn fade_out(&mut self, duration: Ms, easing: Easing) -> &mut Self {
        self.fade(duration, 0.0, easing)
    }

    fn fade(&mut self, duration: Ms, transparency: f64, easing: Easing) -> &mut Self {
        let from = self.pose().transparency;
        self.add_to_chain(
            Opcode::Fade,
            easing,
            duration,
            vec![from.into(), transparency.into()],
        );
        self.pose_mut().transparency = transparency;
        self
    }

    fn move_to(&mut self, duration: Ms, x: f64, y: f64, easing: Easing) -> &mut Self {
        let Pose { x: x0, y: y0, .. } = *self.pose();
        self.add_to_chain(
            Opcode::Move,
            easing,
            duration,
            vec![x0.into(), y0.into(), x.into(), y.into()],
        );
        self.set_position(x, y)
    }

    fn resize(&mut self, duration: Ms, size: f64, easing: Easing) -> &mut Self {
        let from = self.pose().size;
        self.add_to_chain(
            Opcode::Scale,
            easing,
            duration,
            vec![from.into(), size.into()],
        );
        self.set_size(size)
    }

    fn rotate(&mut self, duration: Ms, rotation: f64, easing: Easing) -> &mut Self {
        let from = self.pose().rotation;
        self.add_to_chain(
            Opcode::Rotate,
            easing,
            duration,
            vec![from.into(), rotation.into()],
        );
        self.set_rotation(rotation)
    }

    fn color(&mut self, duration: Ms, color: Rgb, easing: Easing) -> &mut Self {
        let from = self.pose().color;
        self.add_to_chain(
            Opcode::Color,
            easing,
            duration,
            vec![
                from.r.into(),
                from.g.into(),
                from.b.into(),
                color.r.into(),
                color.g.into(),
                color.b.into(),
            ],
        );
        self.set_color(color)
    }

    fn parameter(&mut self, duration: Ms, flag: ParameterFlag, easing: Easing) -> &mut Self {
        self.add_to_chain(Opcode::Parameter, easing, duration, vec![flag.into()])
    }
}

#[cfg(test)]
#[path = "../../tests/unit/storyboard/chain.rs"]
mod tests;
