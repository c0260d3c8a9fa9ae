use std::fmt;
use std::path::{Path, PathBuf};

/// Opaque handle to one carousel panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slide {
    pub label: String,
    pub path: Option<PathBuf>,
}

impl Slide {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            path: None,
        }
    }

    /// Labels the slide with the file name of `path`.
    pub fn from_path(path: &Path) -> Self {
        let label = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Self {
            label,
            path: Some(path.to_path_buf()),
        }
    }

    /// `slide-00`, `slide-01`, ... for carousels without image files.
    pub fn generated(count: usize) -> Vec<Slide> {
        (0..count).map(|i| Slide::new(format!("slide-{:02}", i))).collect()
    }
}

impl fmt::Display for Slide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}
