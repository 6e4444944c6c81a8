//! Frame images on disk.
//!
//! Frames live in a flat directory as `frame_<id>.png`; anything else in the
//! directory is ignored.

use crate::Result;
use image::RgbImage;
use scanstitch_core::frame::{
    FRAME_DATA_EXTENSION, FRAME_DATA_PREFIX, FRAME_EXTENSION, FRAME_PREFIX,
};
use scanstitch_core::{Error, FrameId};
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Collect the ids of every `frame_<id>.png` in `directory`.
pub fn list_frame_ids<P: AsRef<Path>>(directory: P) -> Result<BTreeSet<FrameId>> {
    Ok(scan(directory.as_ref(), FRAME_PREFIX, FRAME_EXTENSION)?
        .into_iter()
        .map(|(id, _)| id)
        .collect())
}

/// Paths of every `frameData_<id>.csv` in `directory`, ordered by id.
pub fn list_frame_data_files<P: AsRef<Path>>(directory: P) -> Result<Vec<(FrameId, PathBuf)>> {
    let mut files = scan(directory.as_ref(), FRAME_DATA_PREFIX, FRAME_DATA_EXTENSION)?;
    files.sort_by_key(|(id, _)| *id);
    Ok(files)
}

fn scan(directory: &Path, prefix: &str, extension: &str) -> Result<Vec<(FrameId, PathBuf)>> {
    let mut found = Vec::new();

    for entry in fs::read_dir(directory)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let name = entry.file_name();
        let Some(name) = name.to_str() else {
            continue;
        };
        if let Some(id) = FrameId::from_file_name(name, prefix, extension) {
            found.push((id, entry.path()));
        }
    }

    tracing::debug!(
        "Found {} {}*{} files in {}",
        found.len(),
        prefix,
        extension,
        directory.display()
    );
    Ok(found)
}

/// Path of the image file for `id` inside `directory`.
pub fn frame_path<P: AsRef<Path>>(directory: P, id: FrameId) -> PathBuf {
    directory.as_ref().join(id.image_file_name())
}

/// Load the image of frame `id` as RGB.
pub fn load_frame<P: AsRef<Path>>(directory: P, id: FrameId) -> Result<RgbImage> {
    let path = frame_path(directory, id);
    if !path.is_file() {
        return Err(Error::FrameLoad(id));
    }
    image::open(&path)
        .map(|img| img.to_rgb8())
        .map_err(|e| Error::Image(format!("{}: {}", path.display(), e)))
}

/// Like [`load_frame`] but reports any failure as missing data.
pub fn try_load_frame<P: AsRef<Path>>(directory: P, id: FrameId) -> Option<RgbImage> {
    match load_frame(directory, id) {
        Ok(img) => Some(img),
        Err(e) => {
            tracing::warn!("can't read image of frame {}: {}", id, e);
            None
        }
    }
}

/// Save an image; the format follows the file extension.
pub fn save_image<P: AsRef<Path>>(path: P, image: &RgbImage) -> Result<()> {
    let path = path.as_ref();
    image
        .save(path)
        .map_err(|e| Error::Image(format!("Failed to save {}: {}", path.display(), e)))?;
    tracing::info!("Saved {}x{} image to {}", image.width(), image.height(), path.display());
    Ok(())
}

/// Remove every `frame_<id>.png` from `directory`, returning how many were removed.
pub fn delete_frames<P: AsRef<Path>>(directory: P) -> Result<usize> {
    let directory = directory.as_ref();
    let frames = scan(directory, FRAME_PREFIX, FRAME_EXTENSION)?;
    for (_, path) in &frames {
        fs::remove_file(path)?;
    }
    tracing::info!("Deleted {} frame images from {}", frames.len(), directory.display());
    Ok(frames.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_frame_path() {
        assert_eq!(
            frame_path("/scan", FrameId(3)),
            PathBuf::from("/scan").join("frame_3.png")
        );
    }

    #[test]
    fn test_missing_frame_is_frame_load_error() {
        let dir = tempdir().unwrap();
        let err = load_frame(dir.path(), FrameId(5)).unwrap_err();
        assert!(matches!(err, Error::FrameLoad(FrameId(5))));
        assert!(try_load_frame(dir.path(), FrameId(5)).is_none());
    }

    #[test]
    fn test_undecodable_frame() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("frame_1.png"), b"not a png").unwrap();
        assert!(matches!(
            load_frame(dir.path(), FrameId(1)),
            Err(Error::Image(_))
        ));
    }
}
