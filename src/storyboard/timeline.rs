use crate::{
    animation::ease::Easing,
    foundation::core::{Ms, Param},
    storyboard::record::{CommandRecord, Opcode, Prefix},
};

/// Loop modifier state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoopState {
    pub active: bool,
    pub repeat_count: u32,
    /// Length of one loop iteration accumulated so far.
    pub duration: Ms,
}

/// Batch modifier state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BatchState {
    pub active: bool,
    /// Longest command duration seen since the batch opened.
    pub duration: Ms,
}

/// Cursor, modifiers and accumulated chain of one sprite or effect.
///
/// While looping, commands are placed relative to the loop start and advance the loop duration
/// instead of the absolute cursor. While batching, commands share the current position and the
/// cursor moves once, by the longest command, when the batch closes.
#[derive(Clone, Debug)]
pub struct Timeline {
    ms: Ms,
    base_prefix: Prefix,
    chain: Vec<CommandRecord>,
    looping: LoopState,
    batch: BatchState,
}

impl Timeline {
    pub(crate) fn new(start_ms: Ms, base_prefix: Prefix) -> Self {
        Self {
            ms: start_ms,
            base_prefix,
            chain: Vec::new(),
            looping: LoopState::default(),
            batch: BatchState::default(),
        }
    }

    /// Absolute cursor position.
    pub fn ms(&self) -> Ms {
        self.ms
    }

    pub fn chain(&self) -> &[CommandRecord] {
        &self.chain
    }

    pub fn loop_state(&self) -> LoopState {
        self.looping
    }

    pub fn batch_state(&self) -> BatchState {
        self.batch
    }

    pub(crate) fn push(&mut self, record: CommandRecord) {
        self.chain.push(record);
    }

    pub(crate) fn set_ms(&mut self, ms: Ms) {
        self.ms = ms;
    }

    pub(crate) fn start_loop(&mut self, repeat_count: u32) {
        if self.looping.active {
            tracing::debug!(repeat_count, "start_loop while looping ignored");
            return;
        }
        self.chain.push(CommandRecord::LoopMarker {
            start_ms: self.ms,
            repeat_count,
        });
        self.looping = LoopState {
            active: true,
            repeat_count,
            duration: 0,
        };
    }

    pub(crate) fn end_loop(&mut self) {
        if !self.looping.active {
            tracing::debug!("end_loop without open loop ignored");
            return;
        }
        self.looping.active = false;
        let total = i64::from(self.looping.repeat_count).saturating_mul(self.looping.duration);
        self.ms = self.ms.saturating_add(total);
    }

    pub(crate) fn start_batch(&mut self) {
        if self.batch.active {
            tracing::debug!("start_batch while batching ignored");
            return;
        }
        self.batch = BatchState {
            active: true,
            duration: 0,
        };
    }

    pub(crate) fn end_batch(&mut self) {
        if !self.batch.active {
            tracing::debug!("end_batch without open batch ignored");
            return;
        }
        self.batch.active = false;
        let d = self.batch.duration;
        if self.looping.active {
            self.looping.duration = self.looping.duration.saturating_add(d);
        } else {
            self.ms = self.ms.saturating_add(d);
        }
    }

    /// Position the next command starts at: loop-relative while looping.
    pub fn active_ms(&self) -> Ms {
        if self.looping.active {
            self.looping.duration
        } else {
            self.ms
        }
    }

    pub(crate) fn add_to_chain(
        &mut self,
        opcode: Opcode,
        easing: Easing,
        duration: Ms,
        params: Vec<Param>,
    ) {
        let start_ms = self.active_ms();
        let end_ms = start_ms.saturating_add(duration);
        let prefix = if self.looping.active {
            Prefix::Loop
        } else {
            self.base_prefix
        };
        self.chain.push(CommandRecord::Command {
            prefix,
            opcode,
            easing,
            start_ms,
            end_ms,
            params,
        });
        self.advance(duration);
    }

    /// Move the active cursor by `duration`, or widen the open batch.
    pub(crate) fn advance(&mut self, duration: Ms) {
        if self.batch.active {
            self.batch.duration = self.batch.duration.max(duration);
        } else if self.looping.active {
            self.looping.duration = self.looping.duration.saturating_add(duration);
        } else {
            self.ms = self.ms.saturating_add(duration);
        }
    }

    /// Replay a finished template: loop marker at the cursor, verbatim copy, then skip past
    /// `repeat_count` iterations of it.
    pub(crate) fn replay(&mut self, template: &Timeline, repeat_count: u32) {
        self.chain.push(CommandRecord::LoopMarker {
            start_ms: self.ms,
            repeat_count,
        });
        self.chain.extend(template.chain.iter().cloned());
        let total = i64::from(repeat_count).saturating_mul(template.ms);
        self.ms = self.ms.saturating_add(total);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/storyboard/timeline.rs"]
mod tests;
