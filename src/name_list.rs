//! Line-delimited name lists shared by both pipelines.

use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum NameListError {
    #[error("failed to read name list {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write name list {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Read one name per line, preserving file order. Blank lines are dropped.
pub fn read_names(path: &Path) -> Result<Vec<String>, NameListError> {
    let content = fs::read_to_string(path).map_err(|source| NameListError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(parse_names(&content))
}

fn parse_names(content: &str) -> Vec<String> {
    content
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(str::to_string)
        .collect()
}

/// Overwrite `path` with one name per line, each followed by `\n`.
pub fn write_names(path: &Path, names: &[String]) -> Result<(), NameListError> {
    let mut out = String::with_capacity(names.iter().map(|n| n.len() + 1).sum());
    for name in names {
        out.push_str(name);
        out.push('\n');
    }
    fs::write(path, out).map_err(|source| NameListError::Write {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_strips_newlines_and_keeps_order() {
        let names = parse_names("Paris\nLyon\nMarseille\n");
        assert_eq!(names, vec!["Paris", "Lyon", "Marseille"]);
    }

    #[test]
    fn parse_handles_crlf_and_missing_trailing_newline() {
        let names = parse_names("Berlin\r\nHamburg");
        assert_eq!(names, vec!["Berlin", "Hamburg"]);
    }

    #[test]
    fn parse_skips_blank_lines() {
        let names = parse_names("Oslo\n\n   \nBergen\n");
        assert_eq!(names, vec!["Oslo", "Bergen"]);
    }

    #[test]
    fn parse_keeps_duplicates() {
        let names = parse_names("Springfield\nSpringfield\n");
        assert_eq!(names.len(), 2);
    }

    #[test]
    fn write_then_read_preserves_sequence() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("en_citynames.txt");
        let names: Vec<String> = ["Tokyo", "S%C3%A3o_Paulo", "New_York_City"]
            .into_iter()
            .map(String::from)
            .collect();

        write_names(&path, &names).unwrap();
        let raw = fs::read_to_string(&path).unwrap();
        assert_eq!(raw, "Tokyo\nS%C3%A3o_Paulo\nNew_York_City\n");
        assert_eq!(read_names(&path).unwrap(), names);
    }

    #[test]
    fn write_overwrites_previous_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("list.txt");
        write_names(&path, &["A".into(), "B".into(), "C".into()]).unwrap();
        write_names(&path, &["D".into()]).unwrap();
        assert_eq!(read_names(&path).unwrap(), vec!["D"]);
    }

    #[test]
    fn read_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_names(&dir.path().join("nope.txt")).unwrap_err();
        assert!(matches!(err, NameListError::Read { .. }));
        assert!(err.to_string().contains("nope.txt"));
    }
}
