use std::fmt;

/// Timeline position or duration in milliseconds.
///
/// Signed on purpose: values from scripts pass through unchecked.
pub type Ms = i64;

/// Anchor point of a sprite image.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub enum Origin {
    /// Image centre.
    #[default]
    Centre,
    /// Top-left corner.
    TopLeft,
    /// Middle of the top edge.
    TopCentre,
    /// Top-right corner.
    TopRight,
    /// Middle of the left edge.
    CentreLeft,
    /// Middle of the right edge.
    CentreRight,
    /// Bottom-left corner.
    BottomLeft,
    /// Middle of the bottom edge.
    BottomCentre,
    /// Bottom-right corner.
    BottomRight,
}

impl Origin {
    /// Numeric code written into sprite headers.
    pub fn code(self) -> u8 {
        match self {
            Self::Centre => 0,
            Self::TopLeft => 1,
            Self::TopCentre => 2,
            Self::TopRight => 3,
            Self::CentreLeft => 4,
            Self::CentreRight => 5,
            Self::BottomLeft => 6,
            Self::BottomCentre => 7,
            Self::BottomRight => 8,
        }
    }
}

/// Storyboard layer a sprite is drawn on.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub enum Layer {
    /// Behind everything else.
    #[default]
    Background,
    /// Shown only while the player is failing.
    Fail,
    /// Shown only while the player is passing.
    Pass,
    /// In front of the background layers.
    Foreground,
    /// Above gameplay elements.
    Overlay,
}

impl Layer {
    /// Numeric code written into sprite headers.
    pub fn code(self) -> u8 {
        match self {
            Self::Background => 0,
            Self::Fail => 1,
            Self::Pass => 2,
            Self::Foreground => 3,
            Self::Overlay => 4,
        }
    }
}

/// Straight RGB color, one byte per channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb {
        r: 255,
        g: 255,
        b: 255,
    };

    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl Default for Rgb {
    fn default() -> Self {
        Self::WHITE
    }
}

/// One-shot render flag toggled by a `P` command.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ParameterFlag {
    /// Mirror the image horizontally.
    FlipHorizontal,
    /// Mirror the image vertically.
    FlipVertical,
    /// Use additive color blending.
    Additive,
}

impl ParameterFlag {
    pub fn letter(self) -> &'static str {
        match self {
            Self::FlipHorizontal => "H",
            Self::FlipVertical => "V",
            Self::Additive => "A",
        }
    }
}

/// A single command parameter as it appears in the comma-separated tail of a record.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub enum Param {
    Num(f64),
    Int(i64),
    Flag(ParameterFlag),
}

impl From<f64> for Param {
    fn from(v: f64) -> Self {
        Self::Num(v)
    }
}

impl From<u8> for Param {
    fn from(v: u8) -> Self {
        Self::Int(i64::from(v))
    }
}

impl From<ParameterFlag> for Param {
    fn from(v: ParameterFlag) -> Self {
        Self::Flag(v)
    }
}

impl fmt::Display for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Num(v) => write_num(f, *v),
            Self::Int(v) => write!(f, "{v}"),
            Self::Flag(flag) => f.write_str(flag.letter()),
        }
    }
}

/// Shortest decimal form of `v`, without exponent; `-0` is written as `0`.
pub(crate) fn write_num(f: &mut impl fmt::Write, v: f64) -> fmt::Result {
    if v == 0.0 {
        return f.write_str("0");
    }
    write!(f, "{v}")
}

/// [`write_num`] into a fresh `String`.
pub fn format_num(v: f64) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_num(&mut out, v);
    out
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
