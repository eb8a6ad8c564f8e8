//! Filesystem access.
//!
//! Handlers never touch `std::fs` directly; they go through [`FileSystem`] so
//! tests can run the whole pipeline against an in-memory disk with injected
//! failures. All access is whole-file: no seeking, no streaming.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

pub trait FileSystem {
    fn read_file(&self, path: &Path) -> io::Result<String>;
    fn create_dir_all(&self, path: &Path) -> io::Result<()>;
    fn write_file(&self, path: &Path, contents: &str) -> io::Result<()>;
}

/// The real filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct Disk;

impl FileSystem for Disk {
    fn read_file(&self, path: &Path) -> io::Result<String> {
        fs::read_to_string(path)
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        fs::create_dir_all(path)
    }

    fn write_file(&self, path: &Path, contents: &str) -> io::Result<()> {
        fs::write(path, contents)
    }
}

const ARTICLE_EXTENSION: &str = "md";

/// Every markdown file under `root`, recursively, in sorted path order.
///
/// Hidden files and directories are skipped. The order is the discovery
/// order for the whole run, so it must not depend on the platform's
/// directory iteration order.
pub fn discover_articles(root: &Path) -> Result<Vec<PathBuf>, walkdir::Error> {
    let mut paths = Vec::new();
    let walker = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || !is_hidden(entry.file_name()));
    for entry in walker {
        let entry = entry?;
        if entry.file_type().is_file() && is_article(entry.path()) {
            paths.push(entry.into_path());
        }
    }
    paths.sort();
    Ok(paths)
}

fn is_hidden(name: &std::ffi::OsStr) -> bool {
    name.to_string_lossy().starts_with('.')
}

fn is_article(path: &Path) -> bool {
    path.extension()
        .map(|e| e.eq_ignore_ascii_case(ARTICLE_EXTENSION))
        .unwrap_or(false)
}
