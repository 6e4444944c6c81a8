//! Where images meant for the user end up.

use image::RgbImage;
use scanstitch_core::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// Receives images that should be shown to the user.
pub trait ImageSink {
    fn show(&mut self, title: &str, image: &RgbImage) -> Result<()>;
}

/// Writes each shown image to `<directory>/<slug of title>.png`.
#[derive(Debug, Clone)]
pub struct PreviewSink {
    directory: PathBuf,
    written: Vec<PathBuf>,
}

impl PreviewSink {
    pub fn new<P: AsRef<Path>>(directory: P) -> Self {
        Self {
            directory: directory.as_ref().to_path_buf(),
            written: Vec::new(),
        }
    }

    /// Files written so far, oldest first.
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }

    pub fn path_for(&self, title: &str) -> PathBuf {
        self.directory.join(format!("{}.png", slug(title)))
    }
}

impl ImageSink for PreviewSink {
    fn show(&mut self, title: &str, image: &RgbImage) -> Result<()> {
        fs::create_dir_all(&self.directory)?;
        let path = self.path_for(title);
        scanstitch_io::save_image(&path, image)?;
        tracing::info!("Showing '{}' at {}", title, path.display());
        self.written.push(path);
        Ok(())
    }
}

fn slug(title: &str) -> String {
    let slug: String = title
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '_'
            }
        })
        .collect();
    if slug.is_empty() {
        "image".to_string()
    } else {
        slug
    }
}
