//! Image folder discovery and validation.
//!
//! A folder is usable when it exists, is a directory, and holds at least
//! as many `.gif` files as the board has pairs. Only the listing matters
//! here; decoding the images is the presentation's business.

use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::GameRng;
use crate::error::MatchError;

/// File extension of usable images, compared case-insensitively.
pub const IMAGE_EXTENSION: &str = "gif";

/// Validated listing of an image folder.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageSet {
    folder: PathBuf,
    images: Vec<PathBuf>,
}

impl ImageSet {
    /// List `folder` and check it holds at least `required` images.
    pub fn from_folder(folder: impl AsRef<Path>, required: usize) -> Result<Self, MatchError> {
        let folder = folder.as_ref().to_path_buf();
        let images = list_images(&folder)?;
        if images.len() < required {
            return Err(MatchError::NotEnoughImages {
                folder,
                required,
                found: images.len(),
            });
        }
        tracing::debug!(folder = %folder.display(), count = images.len(), "image folder validated");
        Ok(Self { folder, images })
    }

    #[must_use]
    pub fn folder(&self) -> &Path {
        &self.folder
    }

    /// Every image, sorted by path.
    #[must_use]
    pub fn images(&self) -> &[PathBuf] {
        &self.images
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.images.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Pick `count` distinct images at random.
    ///
    /// Position `i` of the result is the image for `Symbol(i)`.
    pub fn pick(&self, count: usize, rng: &mut GameRng) -> Vec<PathBuf> {
        rng.sample_indices(self.images.len(), count)
            .into_iter()
            .map(|i| self.images[i].clone())
            .collect()
    }
}

/// Sorted `.gif` files directly inside `folder`.
pub fn list_images(folder: &Path) -> Result<Vec<PathBuf>, MatchError> {
    if !folder.exists() {
        return Err(MatchError::FolderNotFound(folder.to_path_buf()));
    }
    if !folder.is_dir() {
        return Err(MatchError::NotADirectory(folder.to_path_buf()));
    }

    let read_error = |source: std::io::Error| MatchError::ReadFolder {
        folder: folder.to_path_buf(),
        source,
    };

    let mut images = Vec::new();
    for entry in fs::read_dir(folder).map_err(read_error)? {
        let path = entry.map_err(read_error)?.path();
        if path.is_file() && is_image(&path) {
            images.push(path);
        }
    }
    images.sort();
    Ok(images)
}

fn is_image(path: &Path) -> bool {
    path.extension()
        .and_then(OsStr::to_str)
        .is_some_and(|ext| ext.eq_ignore_ascii_case(IMAGE_EXTENSION))
}

/// Display label for an image: its file stem.
#[must_use]
pub fn image_label(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_image() {
        assert!(is_image(Path::new("cat.gif")));
        assert!(is_image(Path::new("dir/CAT.GIF")));
        assert!(!is_image(Path::new("cat.png")));
        assert!(!is_image(Path::new("gif")));
    }

    #[test]
    fn test_image_label() {
        assert_eq!(image_label(Path::new("imgs/sammy.gif")), "sammy");
        assert_eq!(image_label(Path::new("owl.gif")), "owl");
    }
}
