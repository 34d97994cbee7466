use crate::{
    foundation::error::{OsbError, OsbResult},
    storyboard::registry::Storyboard,
};

/// Code that populates a storyboard.
///
/// Scripts are plain Rust: either a closure calling the builder API directly or a parsed
/// [`ScriptDoc`](crate::ScriptDoc). Nothing is evaluated from text.
pub trait Script {
    /// Construct sprites into `board`. Any error aborts the whole compile.
    fn run(&self, board: &mut Storyboard) -> OsbResult<()>;
}

impl<F> Script for F
where
    F: Fn(&mut Storyboard) -> OsbResult<()>,
{
    fn run(&self, board: &mut Storyboard) -> OsbResult<()> {
        self(board)
    }
}

/// Run `script` synchronously against a fresh storyboard.
///
/// On failure the partially built storyboard is dropped; callers either get every sprite the
/// script constructed or an [`OsbError::ScriptEvaluation`]. Errors of any other kind returned
/// by the script are flattened into a `ScriptEvaluation` carrying their message; the original
/// variant and source chain are not kept.
#[tracing::instrument(skip(script))]
pub fn evaluate<S: Script + ?Sized>(script: &S) -> OsbResult<Storyboard> {
    let mut board = Storyboard::new();
    match script.run(&mut board) {
        Ok(()) => {
            tracing::debug!(sprites = board.len(), "script finished");
            Ok(board)
        }
        Err(e @ OsbError::ScriptEvaluation(_)) => Err(e),
        Err(e) => Err(OsbError::script(e.to_string())),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/script/gateway.rs"]
mod tests;
