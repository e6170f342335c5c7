/// Shared data structures for the application state
///
/// These structs represent the data model that flows between
/// the tile store, the preview cache and the UI layer.

use std::fmt;
use std::path::PathBuf;

/// Unique tile identifier, handed out in strictly increasing order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TileId(pub u64);

impl fmt::Display for TileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A file the user picked, as far as the widget cares about it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    /// Filename only (e.g., "holiday.png")
    pub name: String,
    /// Size in bytes
    pub size: u64,
    /// MIME type, empty when it could not be determined
    pub mime: String,
    /// Where the bytes live; used to read the file for previews
    pub path: PathBuf,
}

impl SelectedFile {
    /// Whether this file should get an image preview
    pub fn is_image(&self) -> bool {
        self.mime.starts_with("image/")
    }
}

/// One selected file in the store
///
/// Identity is the id: two tiles holding the same file are still different tiles.
#[derive(Debug, Clone)]
pub struct Tile {
    pub id: TileId,
    pub file: SelectedFile,
}

/// Layout used to display the tiles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    /// Wrapping grid of cards
    #[default]
    Tiles,
    /// Full-width rows
    List,
}

impl ViewMode {
    /// Label for the toggle button
    pub fn label(self) -> &'static str {
        match self {
            ViewMode::Tiles => "Tiles",
            ViewMode::List => "List",
        }
    }
}
