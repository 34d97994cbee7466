//! osbforge builds storyboard `[Events]` sections for osu! from scripted sprites.
//!
//! A script constructs [`Sprite`]s into a per-compile [`Storyboard`] and drives each sprite's
//! timeline with chained calls (`fade_in`, `move_to`, ...). Two modifiers shape the timing:
//!
//! - **loops** (`start_loop`/`end_loop`): commands are recorded once, relative to a loop marker,
//!   and the cursor skips past every repetition;
//! - **batches** (`start_batch`/`end_batch`): commands share a start time and the cursor moves
//!   once, by the longest of them.
//!
//! Reusable [`Effect`] templates are replayed onto sprites with [`Sprite::apply_effect`].
//! Finally [`render_events`] turns the storyboard into text.
//!
//! # Pipeline overview
//!
//! 1. **Merge**: library and script documents are read concurrently and merged in list order
//! 2. **Evaluate**: the merged [`ScriptDoc`] (or any [`Script`]) runs against a fresh storyboard
//! 3. **Serialize**: [`render_events`] produces the document
//! 4. **Write**: only after the steps above succeeded
#![forbid(unsafe_code)]

mod animation;
mod encode;
mod foundation;
mod script;
mod storyboard;

/// Merge/evaluate/serialize/write entry points.
pub mod pipeline;

pub use animation::ease::Easing;
pub use encode::events::{
    EVENTS_HEADER, EventsOpts, LineEnding, ensure_parent_dir, render_events, write_document,
};
pub use foundation::core::{Layer, Ms, Origin, Param, ParameterFlag, Rgb, format_num};
pub use foundation::error::{OsbError, OsbResult};
pub use pipeline::{
    CompileOpts, CompileOutput, compile, compile_to_file, merge_sources, read_sources,
};
pub use script::gateway::{Script, evaluate};
pub use script::model::{Call, EffectDef, ScriptDoc, SpriteDef};
pub use storyboard::chain::{ChainBuilder, DEFAULT_X, DEFAULT_Y, Pose};
pub use storyboard::effect::Effect;
pub use storyboard::record::{CommandRecord, Opcode, Prefix};
pub use storyboard::registry::{SpriteId, Storyboard};
pub use storyboard::sprite::{Sprite, SpriteBuilder};
pub use storyboard::timeline::{BatchState, LoopState, Timeline};
