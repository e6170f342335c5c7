//! Turning picked or dropped paths into `SelectedFile`s.

use std::path::{Path, PathBuf};

use image::ImageFormat;

use crate::error::ProbeError;
use crate::state::data::SelectedFile;

/// Probe only the first path of a selection; the rest is never looked at.
///
/// An unusable first path yields an empty selection rather than falling
/// through to the next one.
pub async fn probe_first(paths: Vec<PathBuf>) -> Vec<SelectedFile> {
    let Some(path) = paths.into_iter().next() else {
        return Vec::new();
    };

    match probe(&path).await {
        Ok(file) => vec![file],
        Err(err) => {
            log::warn!("⚠️  Skipping selection: {}", err);
            Vec::new()
        }
    }
}

/// Read name, size and MIME type of a single file
pub async fn probe(path: &Path) -> Result<SelectedFile, ProbeError> {
    let metadata = tokio::fs::metadata(path)
        .await
        .map_err(|e| ProbeError::Metadata {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

    if !metadata.is_file() {
        return Err(ProbeError::NotAFile(path.to_path_buf()));
    }

    let name = path
        .file_name()
        .unwrap_or_default()
        .to_string_lossy()
        .to_string();

    Ok(SelectedFile {
        name,
        size: metadata.len(),
        mime: mime_for_path(path),
        path: path.to_path_buf(),
    })
}

/// Guess a MIME type from the file extension; empty when unknown
pub fn mime_for_path(path: &Path) -> String {
    if let Ok(format) = ImageFormat::from_path(path) {
        return format.to_mime_type().to_string();
    }

    let ext = match path.extension() {
        Some(ext) => ext.to_string_lossy().to_lowercase(),
        None => return String::new(),
    };

    let mime = match ext.as_str() {
        "txt" | "log" => "text/plain",
        "md" => "text/markdown",
        "csv" => "text/csv",
        "html" | "htm" => "text/html",
        "css" => "text/css",
        "js" => "text/javascript",
        "json" => "application/json",
        "xml" => "application/xml",
        "pdf" => "application/pdf",
        "zip" => "application/zip",
        "gz" => "application/gzip",
        "tar" => "application/x-tar",
        "mp3" => "audio/mpeg",
        "wav" => "audio/wav",
        "mp4" => "video/mp4",
        "webm" => "video/webm",
        _ => "",
    };
    mime.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mime_for_images() {
        assert_eq!(mime_for_path(Path::new("a.png")), "image/png");
        assert_eq!(mime_for_path(Path::new("b.JPG")), "image/jpeg");
        assert_eq!(mime_for_path(Path::new("c.gif")), "image/gif");
    }

    #[test]
    fn test_mime_for_other_files() {
        assert_eq!(mime_for_path(Path::new("notes.txt")), "text/plain");
        assert_eq!(mime_for_path(Path::new("report.PDF")), "application/pdf");
        assert_eq!(mime_for_path(Path::new("Makefile")), "");
        assert_eq!(mime_for_path(Path::new("data.xyz")), "");
    }

    #[tokio::test]
    async fn test_probe_reads_size_and_type() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hello.txt");
        std::fs::write(&path, vec![b'x'; 500]).unwrap();

        let file = probe(&path).await.unwrap();
        assert_eq!(file.name, "hello.txt");
        assert_eq!(file.size, 500);
        assert_eq!(file.mime, "text/plain");
        assert!(!file.is_image());
    }

    #[tokio::test]
    async fn test_probe_first_only_looks_at_first_path() {
        let dir = tempfile::tempdir().unwrap();
        let first = dir.path().join("first.bin");
        let second = dir.path().join("second.txt");
        std::fs::write(&first, b"1234").unwrap();
        std::fs::write(&second, b"hello").unwrap();

        let files = probe_first(vec![first, second]).await;
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].name, "first.bin");
        assert_eq!(files[0].mime, "");
    }

    #[tokio::test]
    async fn test_unusable_first_path_does_not_fall_through() {
        let dir = tempfile::tempdir().unwrap();
        let good = dir.path().join("ok.txt");
        std::fs::write(&good, b"1234").unwrap();

        let missing = probe_first(vec![dir.path().join("missing.png"), good.clone()]).await;
        assert!(missing.is_empty());

        let directory = probe_first(vec![dir.path().to_path_buf(), good]).await;
        assert!(directory.is_empty());

        assert!(probe_first(Vec::new()).await.is_empty());
    }
}
