/// Background decoding of image previews
///
/// Reads the file, decodes it with the `image` crate and shrinks it to a
/// thumbnail small enough to keep many of them in memory.

use std::path::Path;
use tokio::task;

use crate::config::PREVIEW_DECODE_SIZE;
use crate::error::PreviewError;
use crate::state::preview::{PreviewRequest, Thumbnail};

/// Decode the preview for one request
///
/// Spawns blocking because reading and decoding a large image is CPU and IO bound.
pub async fn decode_preview(request: PreviewRequest) -> Result<Thumbnail, PreviewError> {
    task::spawn_blocking(move || decode_preview_blocking(&request.path, PREVIEW_DECODE_SIZE))
        .await
        .map_err(|e| PreviewError::Join(e.to_string()))?
}

/// Blocking implementation of preview decoding
fn decode_preview_blocking(path: &Path, max_edge: u32) -> Result<Thumbnail, PreviewError> {
    let bytes = std::fs::read(path).map_err(|e| PreviewError::Read {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    let img = image::load_from_memory(&bytes).map_err(|e| PreviewError::Decode {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    // Small images are kept as is, larger ones shrink preserving aspect ratio
    let img = if img.width() > max_edge || img.height() > max_edge {
        img.thumbnail(max_edge, max_edge)
    } else {
        img
    };

    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();

    log::debug!(
        "📸 Decoded preview for {} ({} bytes -> {}x{})",
        path.display(),
        bytes.len(),
        width,
        height
    );

    Ok(Thumbnail::from_rgba(width, height, rgba.into_raw()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::data::TileId;
    use image::{Rgba, RgbaImage};

    fn write_png(dir: &Path, name: &str, width: u32, height: u32) -> std::path::PathBuf {
        let path = dir.join(name);
        let img = RgbaImage::from_pixel(width, height, Rgba([10, 20, 30, 255]));
        img.save(&path).expect("fixture png should save");
        path
    }

    #[tokio::test]
    async fn test_decode_small_image_keeps_size() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_png(dir.path(), "small.png", 4, 3);

        let thumb = decode_preview(PreviewRequest { id: TileId(0), path })
            .await
            .expect("small png decodes");
        assert_eq!((thumb.width, thumb.height), (4, 3));
    }

    #[test]
    fn test_decode_large_image_is_shrunk() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_png(dir.path(), "wide.png", 400, 200);

        let thumb = decode_preview_blocking(&path, 100).unwrap();
        assert_eq!((thumb.width, thumb.height), (100, 50));
    }

    #[tokio::test]
    async fn test_missing_file_is_read_error() {
        let result = decode_preview(PreviewRequest {
            id: TileId(1),
            path: "/nonexistent/preview.png".into(),
        })
        .await;
        assert!(matches!(result, Err(PreviewError::Read { .. })));
    }

    #[test]
    fn test_garbage_bytes_are_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.png");
        std::fs::write(&path, b"definitely not a png").unwrap();

        let result = decode_preview_blocking(&path, 100);
        assert!(matches!(result, Err(PreviewError::Decode { .. })));
    }
}
