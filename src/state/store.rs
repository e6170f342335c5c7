use super::data::{SelectedFile, Tile, TileId};

/// Ordered collection of the selected files.
///
/// Insertion order is display order for both layouts. Ids are never reused,
/// even after the tile holding them is removed.
#[derive(Debug, Default)]
pub struct TileStore {
    tiles: Vec<Tile>,
    next_id: u64,
}

impl TileStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a file and return the id it was given
    pub fn add(&mut self, file: SelectedFile) -> TileId {
        let id = TileId(self.next_id);
        self.next_id += 1;

        log::debug!("➕ Tile {} added: {} ({} bytes)", id, file.name, file.size);
        self.tiles.push(Tile { id, file });
        id
    }

    /// Remove the tile with the given id.
    ///
    /// Unknown ids are ignored; returns whether a tile was actually dropped.
    pub fn remove(&mut self, id: TileId) -> bool {
        let before = self.tiles.len();
        self.tiles.retain(|tile| tile.id != id);
        let removed = self.tiles.len() != before;

        if removed {
            log::debug!("➖ Tile {} removed", id);
        } else {
            log::debug!("Tile {} not in store, nothing to remove", id);
        }
        removed
    }

    /// Sum of all file sizes in bytes
    pub fn total_size(&self) -> u64 {
        self.tiles.iter().map(|tile| tile.file.size).sum()
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }
}
