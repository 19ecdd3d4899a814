//! Per-article output files under `<data>/districts/<name>/`.

use std::fmt::Write as _;
use std::fs;
use std::path::{Component, Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("name cannot be used as a directory name: {0:?}")]
    InvalidName(String),

    #[error("path should end with .txt: {0}")]
    NotTxt(PathBuf),

    #[error("file not created: {0}")]
    NotCreated(PathBuf),

    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Where one article lives on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticlePaths {
    pub dir: PathBuf,
    pub file: PathBuf,
}

pub fn districts_dir(data_dir: &Path) -> PathBuf {
    data_dir.join("districts")
}

/// Filesystem form of `name`: path separators and ASCII control characters
/// percent-encoded, everything else (non-ASCII included) verbatim. The result
/// is always one normal path component.
pub fn fs_segment(name: &str) -> Result<String, StoreError> {
    let mut segment = String::with_capacity(name.len());
    for c in name.chars() {
        if c == '/' || c == '\\' || c.is_ascii_control() {
            let _ = write!(segment, "%{:02X}", c as u32);
        } else {
            segment.push(c);
        }
    }
    let mut components = Path::new(&segment).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => Ok(segment),
        _ => Err(StoreError::InvalidName(name.to_string())),
    }
}

/// `<data>/districts/<seg>/` and `<seg>_<suffix>.txt` inside it.
pub fn article_paths(data_dir: &Path, name: &str, suffix: &str) -> Result<ArticlePaths, StoreError> {
    let segment = fs_segment(name)?;
    let dir = districts_dir(data_dir).join(&segment);
    let file = dir.join(format!("{segment}_{suffix}.txt"));
    Ok(ArticlePaths { dir, file })
}

/// Create `dir` and its parents; an existing directory is fine.
pub fn ensure_dir(dir: &Path) -> Result<(), StoreError> {
    fs::create_dir_all(dir).map_err(|source| StoreError::Io {
        path: dir.to_path_buf(),
        source,
    })
}

/// Dump `content` to `path` in one write, replacing any earlier file.
pub fn write_text(path: &Path, content: &str) -> Result<(), StoreError> {
    if path.extension().is_none_or(|ext| ext != "txt") {
        return Err(StoreError::NotTxt(path.to_path_buf()));
    }

    fs::write(path, content).map_err(|source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    if !path.is_file() {
        return Err(StoreError::NotCreated(path.to_path_buf()));
    }
    Ok(())
}
