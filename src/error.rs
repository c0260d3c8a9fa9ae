//! Error types for the carousel library.
//!
//! The rotator itself never fails once built; errors only come from building
//! one (empty slide sets), loading slides from disk, reading configuration,
//! or parsing scripted input for the headless driver.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while reading carousel configuration.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// A numeric setting had no leading digits.
    #[error("invalid value for {key}: {value:?} is not a number")]
    InvalidNumber { key: String, value: String },

    /// Automatic rotation cannot run on a zero interval.
    #[error("interval delay must be greater than zero")]
    ZeroInterval,
}

/// Main error type for carousel operations.
#[derive(Error, Debug)]
pub enum CarouselError {
    /// A carousel needs at least one slide.
    #[error("a carousel needs at least one slide")]
    NoSlides,

    /// Two slides compare equal, so the surface could not tell them apart.
    #[error("slide {index} repeats slide {first}")]
    DuplicateSlide { index: usize, first: usize },

    #[error("no image files found in directory: {}", dir.display())]
    NoImages { dir: PathBuf },

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A scripted input event could not be parsed.
    #[error("invalid event {entry:?}: {reason}")]
    InvalidEvent { entry: String, reason: String },

    #[error(transparent)]
    Config(#[from] ConfigError),
}

pub type Result<T> = std::result::Result<T, CarouselError>;
