use std::collections::BTreeMap;

use crate::{
    animation::ease::Easing,
    foundation::core::{Layer, Ms, Origin, ParameterFlag, Rgb},
    foundation::error::{OsbError, OsbResult},
    script::gateway::Script,
    storyboard::chain::{ChainBuilder, DEFAULT_X, DEFAULT_Y},
    storyboard::effect::Effect,
    storyboard::registry::Storyboard,
    storyboard::sprite::{Sprite, SpriteBuilder},
};

/// A storyboard script as data.
///
/// Effects are named templates; sprites are created in list order and may replay any effect
/// by name. Several documents (libraries first, then the user script) merge into one.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScriptDoc {
    #[serde(default)]
    pub effects: Vec<EffectDef>,
    #[serde(default)]
    pub sprites: Vec<SpriteDef>,
}

/// Named effect template definition.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EffectDef {
    pub name: String,
    #[serde(default)]
    pub calls: Vec<Call>,
}

/// Sprite construction followed by its method calls.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SpriteDef {
    pub image: String,
    #[serde(default)]
    pub start_ms: Ms,
    #[serde(default)]
    pub origin: Origin,
    #[serde(default)]
    pub layer: Layer,
    #[serde(default = "default_x")]
    pub x: f64,
    #[serde(default = "default_y")]
    pub y: f64,
    #[serde(default)]
    pub calls: Vec<Call>,
}

fn default_x() -> f64 {
    DEFAULT_X
}

fn default_y() -> f64 {
    DEFAULT_Y
}

fn default_repeat() -> u32 {
    1
}

/// One builder method call.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case", deny_unknown_fields)]
pub enum Call {
    FadeIn {
        duration: Ms,
        #[serde(default)]
        easing: Easing,
    },
    FadeOut {
        duration: Ms,
        #[serde(default)]
        easing: Easing,
    },
    Fade {
        duration: Ms,
        transparency: f64,
        #[serde(default)]
        easing: Easing,
    },
    MoveTo {
        duration: Ms,
        x: f64,
        y: f64,
        #[serde(default)]
        easing: Easing,
    },
    Resize {
        duration: Ms,
        size: f64,
        #[serde(default)]
        easing: Easing,
    },
    Rotate {
        duration: Ms,
        rotation: f64,
        #[serde(default)]
        easing: Easing,
    },
    Color {
        duration: Ms,
        color: Rgb,
        #[serde(default)]
        easing: Easing,
    },
    Parameter {
        duration: Ms,
        flag: ParameterFlag,
        #[serde(default)]
        easing: Easing,
    },
    StartLoop {
        count: u32,
    },
    EndLoop,
    StartBatch,
    EndBatch,
    Sleep {
        duration: Ms,
    },
    SetTime {
        ms: Ms,
    },
    SetPosition {
        x: f64,
        y: f64,
    },
    SetSize {
        size: f64,
    },
    SetTransparency {
        transparency: f64,
    },
    SetRotation {
        rotation: f64,
    },
    SetColor {
        color: Rgb,
    },
    /// Sprites only.
    SetLayer {
        layer: Layer,
    },
    /// Sprites only.
    ApplyEffect {
        effect: String,
        #[serde(default = "default_repeat")]
        count: u32,
    },
}

impl Call {
    /// Operation name as written in scripts.
    pub fn name(&self) -> &'static str {
        match self {
            Self::FadeIn { .. } => "fade_in",
            Self::FadeOut { .. } => "fade_out",
            Self::Fade { .. } => "fade",
            Self::MoveTo { .. } => "move_to",
            Self::Resize { .. } => "resize",
            Self::Rotate { .. } => "rotate",
            Self::Color { .. } => "color",
            Self::Parameter { .. } => "parameter",
            Self::StartLoop { .. } => "start_loop",
            Self::EndLoop => "end_loop",
            Self::StartBatch => "start_batch",
            Self::EndBatch => "end_batch",
            Self::Sleep { .. } => "sleep",
            Self::SetTime { .. } => "set_time",
            Self::SetPosition { .. } => "set_position",
            Self::SetSize { .. } => "set_size",
            Self::SetTransparency { .. } => "set_transparency",
            Self::SetRotation { .. } => "set_rotation",
            Self::SetColor { .. } => "set_color",
            Self::SetLayer { .. } => "set_layer",
            Self::ApplyEffect { .. } => "apply_effect",
        }
    }

    /// Apply a call every chain builder understands. Returns `false` for sprite-only calls.
    fn apply_shared<B: ChainBuilder>(&self, target: &mut B) -> bool {
        match *self {
            Self::FadeIn { duration, easing } => {
                target.fade_in(duration, easing);
            }
            Self::FadeOut { duration, easing } => {
                target.fade_out(duration, easing);
            }
            Self::Fade {
                duration,
                transparency,
                easing,
            } => {
                target.fade(duration, transparency, easing);
            }
            Self::MoveTo {
                duration,
                x,
                y,
                easing,
            } => {
                target.move_to(duration, x, y, easing);
            }
            Self::Resize {
                duration,
                size,
                easing,
            } => {
                target.resize(duration, size, easing);
            }
            Self::Rotate {
                duration,
                rotation,
                easing,
            } => {
                target.rotate(duration, rotation, easing);
            }
            Self::Color {
                duration,
                color,
                easing,
            } => {
                target.color(duration, color, easing);
            }
            Self::Parameter {
                duration,
                flag,
                easing,
            } => {
                target.parameter(duration, flag, easing);
            }
            Self::StartLoop { count } => {
                target.start_loop(count);
            }
            Self::EndLoop => {
                target.end_loop();
            }
            Self::StartBatch => {
                target.start_batch();
            }
            Self::EndBatch => {
                target.end_batch();
            }
            Self::Sleep { duration } => {
                target.sleep(duration);
            }
            Self::SetTime { ms } => {
                target.set_time(ms);
            }
            Self::SetPosition { x, y } => {
                target.set_position(x, y);
            }
            Self::SetSize { size } => {
                target.set_size(size);
            }
            Self::SetTransparency { transparency } => {
                target.set_transparency(transparency);
            }
            Self::SetRotation { rotation } => {
                target.set_rotation(rotation);
            }
            Self::SetColor { color } => {
                target.set_color(color);
            }
            Self::SetLayer { .. } | Self::ApplyEffect { .. } => return false,
        }
        true
    }

    fn apply_to_effect(&self, fx: &mut Effect) -> Result<(), String> {
        if self.apply_shared(fx) {
            Ok(())
        } else {
            Err(format!("'{}' is only available on sprites", self.name()))
        }
    }

    fn apply_to_sprite(
        &self,
        sprite: &mut Sprite,
        effects: &BTreeMap<String, Effect>,
    ) -> Result<(), String> {
        match self {
            Self::SetLayer { layer } => {
                sprite.set_layer(*layer);
            }
            Self::ApplyEffect { effect, count } => {
                let fx = effects
                    .get(effect)
                    .ok_or_else(|| format!("unknown effect '{effect}'"))?;
                sprite.apply_effect(fx, *count);
            }
            other => {
                other.apply_shared(sprite);
            }
        }
        Ok(())
    }
}

impl ScriptDoc {
    /// Parse a script document from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> OsbResult<Self> {
        serde_json::from_reader(r).map_err(|e| OsbError::serde(format!("parse script JSON: {e}")))
    }

    /// Parse a script document from JSON text.
    pub fn from_json(text: &str) -> OsbResult<Self> {
        serde_json::from_str(text).map_err(|e| OsbError::serde(format!("parse script JSON: {e}")))
    }

    /// Concatenate documents in iteration order.
    pub fn merge(docs: impl IntoIterator<Item = ScriptDoc>) -> ScriptDoc {
        let mut merged = ScriptDoc::default();
        for doc in docs {
            merged.effects.extend(doc.effects);
            merged.sprites.extend(doc.sprites);
        }
        merged
    }

    /// Build every effect template, rejecting empty and duplicate names.
    pub fn build_effects(&self) -> OsbResult<BTreeMap<String, Effect>> {
        let mut effects = BTreeMap::new();
        for def in &self.effects {
            if def.name.trim().is_empty() {
                return Err(OsbError::script("effect name must be non-empty"));
            }
            if effects.contains_key(&def.name) {
                return Err(OsbError::script(format!(
                    "duplicate effect '{}'",
                    def.name
                )));
            }
            let mut fx = Effect::new();
            for call in &def.calls {
                call.apply_to_effect(&mut fx)
                    .map_err(|e| OsbError::script(format!("effect '{}': {e}", def.name)))?;
            }
            effects.insert(def.name.clone(), fx);
        }
        Ok(effects)
    }
}

impl SpriteDef {
    fn builder(&self) -> SpriteBuilder {
        Sprite::builder(self.image.clone())
            .start_ms(self.start_ms)
            .origin(self.origin)
            .layer(self.layer)
            .position(self.x, self.y)
    }
}

impl Script for ScriptDoc {
    fn run(&self, board: &mut Storyboard) -> OsbResult<()> {
        let effects = self.build_effects()?;
        for (index, def) in self.sprites.iter().enumerate() {
            let sprite = board.sprite_with(def.builder());
            for call in &def.calls {
                call.apply_to_sprite(sprite, &effects).map_err(|e| {
                    OsbError::script(format!("sprite #{index} ('{}'): {e}", def.image))
                })?;
            }
        }
        tracing::debug!(
            effects = effects.len(),
            sprites = self.sprites.len(),
            "script document executed"
        );
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/script/model.rs"]
mod tests;
