//! Shared test utilities for the huguinho test suite.
//!
//! Provides an in-memory [`FileSystem`] with per-path failure injection, a
//! renderer and converter that can be told to fail, and the four fixture
//! articles most handler tests run against:
//!
//! | Fixture        | Slug   | Title | Date       | Topic   | Draft |
//! |----------------|--------|-------|------------|---------|-------|
//! | [`article_a`]  | `/a`   | A     | 2023-07-07 | topic-a | no    |
//! | [`article_b`]  | `/b`   | B     | 2023-07-08 | topic-b | yes   |
//! | [`article_b2`] | `/b/2` | B2    | 2023-07-08 | topic-b | yes   |
//! | [`article_c`]  | `/c`   | C     | 2023-07-09 | topic-c | no    |

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::io;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use crate::disk::FileSystem;
use crate::listing::Filter;
use crate::markdown::{ConvertError, Converter};
use crate::render::{RenderError, Renderer, TemplateError, template_for};
use crate::types::{Article, ArticleMetadata, PageModel};

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

// =========================================================================
// Fixture articles
// =========================================================================

fn fixture(name: &str, title: &str, intro: &str, day: u32, topic: &str, draft: bool) -> Article {
    let mut article = Article::new(format!("content/{name}.md"));
    article.metadata = ArticleMetadata {
        title: title.into(),
        intro: intro.into(),
        slug: format!("/{name}"),
        date: Some(date(2023, 7, day)),
        draft,
        topics: vec![topic.into()],
    };
    article
}

pub fn article_a() -> Article {
    fixture("a", "A", "aa", 7, "topic-a", false)
}

pub fn article_b() -> Article {
    fixture("b", "B", "bb", 8, "topic-b", true)
}

pub fn article_b2() -> Article {
    fixture("b/2", "B2", "bb", 8, "topic-b", true)
}

pub fn article_c() -> Article {
    fixture("c", "C", "cc", 9, "topic-c", false)
}

/// Accepts every fixture except C.
pub fn title_before_c() -> Filter {
    Box::new(|article: &Article| article.metadata.title.as_str() < "C")
}

// =========================================================================
// In-memory file system
// =========================================================================

/// Files and directories kept in memory. Failures are injected per path and
/// returned on every matching call.
#[derive(Debug, Default)]
pub struct MemoryDisk {
    files: RefCell<BTreeMap<PathBuf, String>>,
    dirs: RefCell<BTreeSet<PathBuf>>,
    read_errors: RefCell<HashMap<PathBuf, io::ErrorKind>>,
    mkdir_errors: RefCell<HashMap<PathBuf, io::ErrorKind>>,
    write_errors: RefCell<HashMap<PathBuf, io::ErrorKind>>,
}

impl MemoryDisk {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_file(&self, path: impl Into<PathBuf>, contents: &str) {
        self.files.borrow_mut().insert(path.into(), contents.to_string());
    }

    pub fn fail_read(&self, path: impl Into<PathBuf>, kind: io::ErrorKind) {
        self.read_errors.borrow_mut().insert(path.into(), kind);
    }

    pub fn fail_mkdir(&self, path: impl Into<PathBuf>, kind: io::ErrorKind) {
        self.mkdir_errors.borrow_mut().insert(path.into(), kind);
    }

    pub fn fail_write(&self, path: impl Into<PathBuf>, kind: io::ErrorKind) {
        self.write_errors.borrow_mut().insert(path.into(), kind);
    }

    pub fn file(&self, path: impl AsRef<Path>) -> Option<String> {
        self.files.borrow().get(path.as_ref()).cloned()
    }

    /// Every file path, sorted.
    pub fn files(&self) -> Vec<PathBuf> {
        self.files.borrow().keys().cloned().collect()
    }

    pub fn has_dir(&self, path: impl AsRef<Path>) -> bool {
        self.dirs.borrow().contains(path.as_ref())
    }

    fn injected(errors: &RefCell<HashMap<PathBuf, io::ErrorKind>>, path: &Path) -> io::Result<()> {
        match errors.borrow().get(path) {
            Some(kind) => Err(io::Error::new(*kind, format!("boink: {}", path.display()))),
            None => Ok(()),
        }
    }
}

impl FileSystem for MemoryDisk {
    fn read_file(&self, path: &Path) -> io::Result<String> {
        Self::injected(&self.read_errors, path)?;
        self.file(path)
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, path.display().to_string()))
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        Self::injected(&self.mkdir_errors, path)?;
        self.dirs.borrow_mut().insert(path.to_path_buf());
        Ok(())
    }

    fn write_file(&self, path: &Path, contents: &str) -> io::Result<()> {
        Self::injected(&self.write_errors, path)?;
        self.add_file(path, contents);
        Ok(())
    }
}

// =========================================================================
// Fake renderer and converter
// =========================================================================

/// Records every page model it is asked to render.
#[derive(Debug, Default)]
pub struct FakeRenderer {
    result: String,
    fail: bool,
    rendered: RefCell<Vec<PageModel>>,
}

impl FakeRenderer {
    pub fn returning(result: impl Into<String>) -> Self {
        Self {
            result: result.into(),
            ..Self::default()
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    /// The most recently rendered page model.
    pub fn rendered(&self) -> Option<PageModel> {
        self.rendered.borrow().last().cloned()
    }

    pub fn all_rendered(&self) -> Vec<PageModel> {
        self.rendered.borrow().clone()
    }
}

impl Renderer for FakeRenderer {
    fn render(&self, page: &PageModel) -> Result<String, RenderError> {
        self.rendered.borrow_mut().push(page.clone());
        if self.fail {
            return Err(RenderError::RenderingFailure {
                template: template_for(page),
                data: format!("{page:?}"),
                source: TemplateError::Missing("boink".into()),
            });
        }
        Ok(self.result.clone())
    }
}

#[derive(Debug)]
pub struct FakeConverter {
    message: String,
}

impl FakeConverter {
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Converter for FakeConverter {
    fn convert(&self, _markdown: &str) -> Result<String, ConvertError> {
        Err(ConvertError(self.message.clone()))
    }
}
