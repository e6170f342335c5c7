//! Event handling for the file list
//!
//! The controller owns all application state (tile store, preview cache and
//! view mode) and keeps a rendered `FileListView` in sync with it. Every
//! mutation triggers a full re-render; preview decodes it wants started are
//! handed back to the caller as `PreviewRequest`s.

use crate::config::DEFAULT_VIEW_MODE;
use crate::error::PreviewError;
use crate::state::data::{SelectedFile, TileId, ViewMode};
use crate::state::preview::{PreviewCache, PreviewRequest, Thumbnail};
use crate::state::store::TileStore;
use crate::ui::render::{render, FileListView};

#[derive(Debug)]
pub struct Controller {
    store: TileStore,
    previews: PreviewCache,
    mode: ViewMode,
    /// Output of the last full render
    view: FileListView,
    renders: u64,
}

impl Controller {
    pub fn new() -> Self {
        let store = TileStore::new();
        let previews = PreviewCache::new();
        let view = render(store.tiles(), DEFAULT_VIEW_MODE, &previews);

        Self {
            store,
            previews,
            mode: DEFAULT_VIEW_MODE,
            view,
            renders: 0,
        }
    }

    /// Add the first file of a selection; the rest is dropped
    pub fn on_files_selected(&mut self, files: Vec<SelectedFile>) -> Vec<PreviewRequest> {
        let total = files.len();
        let Some(file) = files.into_iter().next() else {
            return Vec::new();
        };
        if total > 1 {
            log::info!("Only the first of {} selected files is added", total);
        }

        self.store.add(file);
        self.refresh()
    }

    /// Remove a tile; unknown ids still re-render
    pub fn on_delete_clicked(&mut self, id: TileId) -> Vec<PreviewRequest> {
        self.store.remove(id);
        self.refresh()
    }

    /// Switch layout; does nothing when `mode` is already active
    pub fn set_view(&mut self, mode: ViewMode) -> Vec<PreviewRequest> {
        if self.mode == mode {
            return Vec::new();
        }

        log::info!("🔀 View switched to {}", mode.label());
        self.mode = mode;
        self.refresh()
    }

    /// Store a finished decode and patch the current view in place.
    ///
    /// Tiles removed while their decode ran are silently skipped.
    pub fn on_preview_decoded(&mut self, id: TileId, result: Result<Thumbnail, PreviewError>) {
        if !self.previews.complete(id, result) {
            return;
        }

        if let Some(thumbnail) = self.previews.get(id) {
            if !self.view.patch_preview(id, thumbnail) {
                log::debug!("Tile {} no longer shown, preview kept in cache only", id);
            }
        }
    }

    /// Request missing previews, then re-render everything
    fn refresh(&mut self) -> Vec<PreviewRequest> {
        let requests = self.previews.request_missing(self.store.tiles());
        self.view = render(self.store.tiles(), self.mode, &self.previews);
        self.renders += 1;
        requests
    }

    pub fn view(&self) -> &FileListView {
        &self.view
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    #[cfg(test)]
    pub fn store(&self) -> &TileStore {
        &self.store
    }

    #[cfg(test)]
    pub fn previews(&self) -> &PreviewCache {
        &self.previews
    }

    /// Number of full renders run so far
    pub fn render_count(&self) -> u64 {
        self.renders
    }
}
