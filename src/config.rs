//! Application configuration constants.

use crate::state::data::ViewMode;

/// Window title
pub const APP_TITLE: &str = "File Tiles";

/// Log filter used when `RUST_LOG` is unset: this crate at info, dependencies at warn
pub const DEFAULT_LOG_FILTER: &str = "warn,file_tiles=info";

/// View mode used on start-up
pub const DEFAULT_VIEW_MODE: ViewMode = ViewMode::Tiles;

/// Edge length of the preview shown inside a card or row (logical pixels)
pub const PREVIEW_DISPLAY_SIZE: f32 = 50.0;

/// Longest edge of a decoded thumbnail; larger than the display size so
/// HiDPI screens still get a crisp preview
pub const PREVIEW_DECODE_SIZE: u32 = 128;

/// Width of a card in the tile grid
pub const CARD_WIDTH: f32 = 220.0;

/// Gap between cards and rows
pub const SPACING: f32 = 8.0;

/// MIME label shown when a file's type could not be determined
pub const UNKNOWN_MIME_LABEL: &str = "unknown";
