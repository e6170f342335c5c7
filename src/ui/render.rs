/// Pure rendering of the tile store into a view model
///
/// `render` never touches the preview cache beyond reading it; requesting
/// missing previews is a separate step the controller runs first.

use crate::config::UNKNOWN_MIME_LABEL;
use crate::format::format_size;
use crate::state::data::{Tile, TileId, ViewMode};
use crate::state::preview::{PreviewCache, Thumbnail};

/// What goes in the preview slot of a card or row
#[derive(Debug, Clone)]
pub enum Preview {
    /// Decoded image
    Thumbnail(Thumbnail),
    /// Image whose decode has not completed (or failed)
    Placeholder,
    /// Generic icon for anything that is not an image
    FileIcon,
}

/// Everything needed to draw one file, in either layout
#[derive(Debug, Clone)]
pub struct EntryView {
    pub id: TileId,
    /// Full name; the widgets may cut it visually but never here
    pub name: String,
    pub preview: Preview,
    pub mime: String,
    pub size: String,
}

/// A complete rendering of the store
#[derive(Debug, Clone, Default)]
pub struct FileListView {
    pub mode: ViewMode,
    pub entries: Vec<EntryView>,
    pub total_size: String,
}

impl FileListView {
    /// Swap in a freshly decoded thumbnail for one entry.
    ///
    /// Returns `false` when the entry is no longer part of this view, or is
    /// not showing a placeholder.
    pub fn patch_preview(&mut self, id: TileId, thumbnail: &Thumbnail) -> bool {
        match self.entries.iter_mut().find(|entry| entry.id == id) {
            Some(entry) if matches!(entry.preview, Preview::Placeholder) => {
                entry.preview = Preview::Thumbnail(thumbnail.clone());
                true
            }
            _ => false,
        }
    }
}

/// Render the tiles in store order for the given mode
pub fn render(tiles: &[Tile], mode: ViewMode, previews: &PreviewCache) -> FileListView {
    let entries = tiles.iter().map(|tile| entry_view(tile, previews)).collect();
    let total: u64 = tiles.iter().map(|tile| tile.file.size).sum();

    FileListView {
        mode,
        entries,
        total_size: format_size(total),
    }
}

fn entry_view(tile: &Tile, previews: &PreviewCache) -> EntryView {
    let preview = if tile.file.is_image() {
        match previews.get(tile.id) {
            Some(thumbnail) => Preview::Thumbnail(thumbnail.clone()),
            None => Preview::Placeholder,
        }
    } else {
        Preview::FileIcon
    };

    let mime = if tile.file.mime.is_empty() {
        UNKNOWN_MIME_LABEL.to_string()
    } else {
        tile.file.mime.clone()
    };

    EntryView {
        id: tile.id,
        name: tile.file.name.clone(),
        preview,
        mime,
        size: format_size(tile.file.size),
    }
}
