//! Lazily filled cache of decoded image previews, keyed by tile id.
//!
//! Decodes happen elsewhere (see `thumbnail::decode_preview`); this type only
//! decides whether a decode should start and stores what comes back.

use std::collections::{HashMap, HashSet};
use std::path::PathBuf;

use iced::widget::image::Handle;

use super::data::{Tile, TileId};
use crate::error::PreviewError;

/// A decoded preview ready to be drawn
#[derive(Debug, Clone)]
pub struct Thumbnail {
    pub width: u32,
    pub height: u32,
    pub handle: Handle,
}

impl Thumbnail {
    /// Wrap raw RGBA8 pixels
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        Self {
            width,
            height,
            handle: Handle::from_rgba(width, height, pixels),
        }
    }
}

/// A decode the shell should run in the background
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewRequest {
    pub id: TileId,
    pub path: PathBuf,
}

#[derive(Debug, Default)]
pub struct PreviewCache {
    entries: HashMap<TileId, Thumbnail>,
    /// Decodes started but not yet completed
    in_flight: HashSet<TileId>,
    /// Decodes that failed; these tiles keep their placeholder
    failed: HashSet<TileId>,
}

impl PreviewCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: TileId) -> Option<&Thumbnail> {
        self.entries.get(&id)
    }

    /// Start a decode for `tile` unless there is nothing to do.
    ///
    /// Returns `None` for non-image files, cached entries, decodes already
    /// running and decodes that failed before.
    pub fn request(&mut self, tile: &Tile) -> Option<PreviewRequest> {
        if !tile.file.is_image() {
            return None;
        }
        if self.entries.contains_key(&tile.id)
            || self.in_flight.contains(&tile.id)
            || self.failed.contains(&tile.id)
        {
            return None;
        }

        self.in_flight.insert(tile.id);
        log::debug!("🖼️  Preview requested for tile {} ({})", tile.id, tile.file.name);

        Some(PreviewRequest {
            id: tile.id,
            path: tile.file.path.clone(),
        })
    }

    /// Request every image tile in `tiles` that still lacks a preview
    pub fn request_missing(&mut self, tiles: &[Tile]) -> Vec<PreviewRequest> {
        tiles.iter().filter_map(|tile| self.request(tile)).collect()
    }

    /// Record the outcome of a decode; returns whether a preview was stored
    pub fn complete(&mut self, id: TileId, result: Result<Thumbnail, PreviewError>) -> bool {
        self.in_flight.remove(&id);

        match result {
            Ok(thumbnail) => {
                log::debug!(
                    "✅ Preview for tile {} decoded ({}x{})",
                    id,
                    thumbnail.width,
                    thumbnail.height
                );
                self.entries.insert(id, thumbnail);
                true
            }
            Err(err) => {
                log::warn!("⚠️  Preview for tile {} unavailable: {}", id, err);
                self.failed.insert(id);
                false
            }
        }
    }

    #[cfg(test)]
    pub fn is_pending(&self, id: TileId) -> bool {
        self.in_flight.contains(&id)
    }
}
