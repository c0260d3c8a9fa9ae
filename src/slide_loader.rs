use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::error::{CarouselError, Result};
use crate::slide::Slide;

const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "bmp", "gif", "webp"];

// --- Helper: Load and Sort Image Paths ---
pub fn load_sorted_image_paths(dir_path: &Path) -> Result<Vec<PathBuf>> {
    let io_err = |source: std::io::Error| CarouselError::Io {
        path: dir_path.to_path_buf(),
        source,
    };

    let mut paths = Vec::new();
    for entry in fs::read_dir(dir_path).map_err(io_err)? {
        let path = entry.map_err(io_err)?.path();
        if !path.is_file() {
            continue;
        }
        let is_image = path
            .extension()
            .and_then(|s| s.to_str())
            .is_some_and(|ext| IMAGE_EXTENSIONS.contains(&ext.to_lowercase().as_str()));
        if is_image {
            paths.push(path);
        } else {
            debug!("skipping non-image file {}", path.display());
        }
    }
    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    if paths.is_empty() {
        Err(CarouselError::NoImages {
            dir: dir_path.to_path_buf(),
        })
    } else {
        Ok(paths)
    }
}

pub fn load_slides(dir_path: &Path) -> Result<Vec<Slide>> {
    Ok(load_sorted_image_paths(dir_path)?
        .iter()
        .map(|path| Slide::from_path(path))
        .collect())
}

/// Shuffles the slide order. A seed makes the order reproducible.
pub fn shuffle(slides: &mut [Slide], seed: Option<u64>) {
    match seed {
        Some(seed) => slides.shuffle(&mut StdRng::seed_from_u64(seed)),
        None => slides.shuffle(&mut rand::rng()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_fs::prelude::*;

    #[test]
    fn only_images_are_loaded_in_name_order() {
        let dir = assert_fs::TempDir::new().unwrap();
        dir.child("b.JPG").touch().unwrap();
        dir.child("a.png").touch().unwrap();
        dir.child("notes.txt").touch().unwrap();
        dir.child("nested").create_dir_all().unwrap();

        let slides = load_slides(dir.path()).unwrap();
        let labels: Vec<_> = slides.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, ["a.png", "b.JPG"]);
    }

    #[test]
    fn directory_without_images_is_an_error() {
        let dir = assert_fs::TempDir::new().unwrap();
        dir.child("readme.md").touch().unwrap();

        let err = load_sorted_image_paths(dir.path()).unwrap_err();
        assert!(matches!(err, CarouselError::NoImages { .. }));
    }

    #[test]
    fn missing_directory_is_an_io_error() {
        let err = load_sorted_image_paths(Path::new("/definitely/not/here")).unwrap_err();
        assert!(matches!(err, CarouselError::Io { .. }));
    }

    #[test]
    fn seeded_shuffle_is_reproducible_and_keeps_every_slide() {
        let mut first = Slide::generated(12);
        let mut second = Slide::generated(12);
        shuffle(&mut first, Some(7));
        shuffle(&mut second, Some(7));
        assert_eq!(first, second);

        let mut sorted = first.clone();
        sorted.sort_by(|a, b| a.label.cmp(&b.label));
        assert_eq!(sorted, Slide::generated(12));
    }
}
