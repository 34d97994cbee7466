use std::path::{Path, PathBuf};

use rayon::prelude::*;

use crate::{
    encode::events::{EventsOpts, LineEnding, render_events, write_document},
    foundation::error::{OsbError, OsbResult},
    script::gateway::evaluate,
    script::model::ScriptDoc,
    storyboard::chain::ChainBuilder,
};

/// Inputs of one compile run.
#[derive(Clone, Debug)]
pub struct CompileOpts {
    /// Library documents, merged before the script in the given order.
    pub libraries: Vec<PathBuf>,
    /// The user script.
    pub script: PathBuf,
    /// Serializer options.
    pub events: EventsOpts,
}

impl CompileOpts {
    /// Options for compiling `script` without libraries.
    pub fn new(script: impl Into<PathBuf>) -> Self {
        Self {
            libraries: Vec::new(),
            script: script.into(),
            events: EventsOpts::default(),
        }
    }

    /// Append a library document.
    pub fn library(mut self, path: impl Into<PathBuf>) -> Self {
        self.libraries.push(path.into());
        self
    }

    pub fn line_ending(mut self, line_ending: LineEnding) -> Self {
        self.events.line_ending = line_ending;
        self
    }

    /// All sources in merge order: libraries, then the script.
    pub fn sources(&self) -> Vec<PathBuf> {
        let mut out = self.libraries.clone();
        out.push(self.script.clone());
        out
    }
}

/// Result of a successful compile.
#[derive(Clone, Debug)]
pub struct CompileOutput {
    /// The rendered `[Events]` document.
    pub text: String,
    /// Number of sprites in the document.
    pub sprites: usize,
    /// Number of records across all sprites, headers included.
    pub records: usize,
}

/// Read every source concurrently; contents come back in `paths` order.
///
/// Any unreadable file fails the whole read.
#[tracing::instrument(skip(paths), fields(count = paths.len()))]
pub fn read_sources(paths: &[PathBuf]) -> OsbResult<Vec<String>> {
    paths
        .par_iter()
        .map(|path| {
            std::fs::read_to_string(path).map_err(|e| OsbError::source_read(path.clone(), e))
        })
        .collect()
}

/// Read and parse every source, then merge the documents in `paths` order.
pub fn merge_sources(paths: &[PathBuf]) -> OsbResult<ScriptDoc> {
    let texts = read_sources(paths)?;
    let mut docs = Vec::with_capacity(texts.len());
    for (path, text) in paths.iter().zip(&texts) {
        let doc = ScriptDoc::from_json(text).map_err(|e| match e {
            OsbError::Serde(msg) => OsbError::serde(format!("{}: {msg}", path.display())),
            other => other,
        })?;
        docs.push(doc);
    }
    let merged = ScriptDoc::merge(docs);
    tracing::debug!(
        effects = merged.effects.len(),
        sprites = merged.sprites.len(),
        "sources merged"
    );
    Ok(merged)
}

/// Merge, execute and serialize. Nothing is written.
#[tracing::instrument(skip(opts), fields(script = %opts.script.display()))]
pub fn compile(opts: &CompileOpts) -> OsbResult<CompileOutput> {
    let doc = merge_sources(&opts.sources())?;
    let board = evaluate(&doc)?;
    let text = render_events(&board, opts.events);
    let records = board.get().iter().map(|s| s.chain().len()).sum();
    Ok(CompileOutput {
        text,
        sprites: board.len(),
        records,
    })
}

/// [`compile`] and write the document to `out`.
///
/// The output file is only touched after merge and execution both succeeded.
pub fn compile_to_file(opts: &CompileOpts, out: &Path) -> OsbResult<CompileOutput> {
    let output = compile(opts)?;
    write_document(out, &output.text)?;
    tracing::debug!(path = %out.display(), bytes = output.text.len(), "document written");
    Ok(output)
}

#[cfg(test)]
#[path = "../tests/unit/pipeline.rs"]
mod tests;
