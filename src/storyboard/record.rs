use std::fmt;

use crate::{
    animation::ease::Easing,
    foundation::core::{Layer, Ms, Origin, Param, write_num},
};

/// Command letter understood by the storyboard renderer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
pub enum Opcode {
    /// `F`: transparency.
    Fade,
    /// `M`: position.
    Move,
    /// `S`: uniform scale.
    Scale,
    /// `R`: rotation in radians.
    Rotate,
    /// `C`: RGB tint.
    Color,
    /// `P`: flip/blend flag.
    Parameter,
}

impl Opcode {
    pub fn letter(self) -> char {
        match self {
            Self::Fade => 'F',
            Self::Move => 'M',
            Self::Scale => 'S',
            Self::Rotate => 'R',
            Self::Color => 'C',
            Self::Parameter => 'P',
        }
    }
}

/// Indentation prefix of a command line.
///
/// `Loop` marks times as relative to the enclosing loop marker.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
pub enum Prefix {
    Top,
    Loop,
}

impl Prefix {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Top => "_",
            Self::Loop => "__",
        }
    }
}

/// One line of a chain. Records are never changed after they are appended.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub enum CommandRecord {
    /// Sprite declaration; always the first record of a sprite chain.
    Header {
        layer: Layer,
        origin: Origin,
        image: String,
        x: f64,
        y: f64,
    },
    /// A timed animation command.
    Command {
        prefix: Prefix,
        opcode: Opcode,
        easing: Easing,
        start_ms: Ms,
        end_ms: Ms,
        params: Vec<Param>,
    },
    /// Start of a loop body replayed `repeat_count` times.
    LoopMarker { start_ms: Ms, repeat_count: u32 },
}

impl fmt::Display for CommandRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Header {
                layer,
                origin,
                image,
                x,
                y,
            } => {
                write!(f, "Sprite,{},{},\"{image}\",", layer.code(), origin.code())?;
                write_num(f, *x)?;
                f.write_str(",")?;
                write_num(f, *y)
            }
            Self::Command {
                prefix,
                opcode,
                easing,
                start_ms,
                end_ms,
                params,
            } => {
                write!(
                    f,
                    "{}{},{},{start_ms},{end_ms}",
                    prefix.as_str(),
                    opcode.letter(),
                    easing.code()
                )?;
                for p in params {
                    write!(f, ",{p}")?;
                }
                Ok(())
            }
            Self::LoopMarker {
                start_ms,
                repeat_count,
            } => write!(f, "_L,{start_ms},{repeat_count}"),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/storyboard/record.rs"]
mod tests;
