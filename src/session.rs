//! What the user is looking at, and the actions that change it.

use std::path::{Path, PathBuf};

use crate::{
    export::export_into,
    foundation::{
        core::{Collection, Dataset, ViewMode},
        error::{ChiasmError, ChiasmResult},
    },
    interaction::{Highlight, hover},
    layout::{LayoutOpts, RenderModel, layout},
    parser::parse_text,
    render::RasterOpts,
    source::VerseSource,
};

/// Shown when a range starts after it ends.
pub const INVERTED_RANGE_MESSAGE: &str = "Starting verse must be less than or equal to ending verse.";
/// Shown when a range load comes back empty.
pub const EMPTY_LOAD_MESSAGE: &str = "Could not load verse data.";
/// Shown when the text box is empty.
pub const EMPTY_TEXT_MESSAGE: &str = "Please paste some text to visualize.";
/// Shown when exporting with nothing loaded.
pub const NO_DATA_MESSAGE: &str = "No data to export.";

/// Identifies one load request; only the newest one may publish its result.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LoadToken(u64);

/// Current dataset, active view and canvas size.
///
/// A successful load or parse replaces the dataset wholesale; failures leave it untouched.
#[derive(Clone, Debug, Default)]
pub struct Session {
    current: Option<Dataset>,
    view: ViewMode,
    opts: LayoutOpts,
    generation: u64,
}

impl Session {
    /// Empty session drawing into `opts`.
    pub fn new(opts: LayoutOpts) -> Self {
        Self {
            opts,
            ..Self::default()
        }
    }

    /// Dataset on screen, if any.
    pub fn current(&self) -> Option<&Dataset> {
        self.current.as_ref()
    }

    /// Active view.
    pub fn view(&self) -> ViewMode {
        self.view
    }

    /// Canvas size.
    pub fn layout_opts(&self) -> &LayoutOpts {
        &self.opts
    }

    /// Start a load. Any earlier token becomes stale.
    pub fn begin_load(&mut self) -> LoadToken {
        self.generation += 1;
        LoadToken(self.generation)
    }

    /// Publish `dataset` if `token` is still the newest request. Returns whether it was kept.
    pub fn finish_load(&mut self, token: LoadToken, dataset: Dataset) -> bool {
        if token.0 != self.generation {
            tracing::debug!(
                token = token.0,
                latest = self.generation,
                "dropping superseded load"
            );
            return false;
        }
        self.current = Some(dataset);
        true
    }

    /// Fetch verses `from..=to` of `collection` and make them current.
    ///
    /// An inverted range is rejected before anything is fetched. A fetch that yields
    /// nothing (including a failed one) is an [`ChiasmError::EmptyResult`].
    #[tracing::instrument(skip(self, source), fields(collection = collection.id))]
    pub fn load_collection(
        &mut self,
        source: &dyn VerseSource,
        collection: &Collection,
        from: u32,
        to: u32,
    ) -> ChiasmResult<&Dataset> {
        if from > to {
            return Err(ChiasmError::validation(INVERTED_RANGE_MESSAGE));
        }
        let token = self.begin_load();
        tracing::info!(from, to, "loading verse range");
        let items = source.fetch_range(collection.id, from, to);
        if items.is_empty() {
            return Err(ChiasmError::empty_result(EMPTY_LOAD_MESSAGE));
        }
        let title = format!("Surah {} ({from}-{to})", collection.label());
        self.finish_load(token, Dataset::from_items(title, items));
        self.current
            .as_ref()
            .ok_or_else(|| ChiasmError::empty_result(EMPTY_LOAD_MESSAGE))
    }

    /// Parse pasted text and make it current.
    pub fn visualize_text(&mut self, text: &str) -> ChiasmResult<&Dataset> {
        if text.trim().is_empty() {
            return Err(ChiasmError::validation(EMPTY_TEXT_MESSAGE));
        }
        let token = self.begin_load();
        self.finish_load(token, parse_text(text));
        self.current
            .as_ref()
            .ok_or_else(|| ChiasmError::validation(EMPTY_TEXT_MESSAGE))
    }

    /// Change the active view; the dataset is kept.
    pub fn switch_view(&mut self, view: ViewMode) {
        tracing::debug!(%view, "switched view");
        self.view = view;
    }

    /// Lay out the current dataset in the active view.
    pub fn render(&self) -> Option<RenderModel> {
        self.current
            .as_ref()
            .map(|ds| layout(self.view, ds, &self.opts))
    }

    /// Hover `item` in the active view.
    pub fn hover(&self, item: usize) -> Option<Highlight> {
        self.current
            .as_ref()
            .and_then(|ds| hover(self.view, ds, item))
    }

    /// Export the active view as a PDF into `dir`, named after the dataset title.
    pub fn export(&self, dir: &Path, opts: &RasterOpts) -> ChiasmResult<PathBuf> {
        let (Some(ds), Some(model)) = (self.current.as_ref(), self.render()) else {
            return Err(ChiasmError::validation(NO_DATA_MESSAGE));
        };
        export_into(dir, &model, &ds.title, opts)
    }
}

#[cfg(test)]
#[path = "../tests/unit/session.rs"]
mod tests;
