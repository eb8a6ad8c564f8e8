//! Per-article handler chain.
//!
//! Every discovered file becomes an [`Article`] that is pushed through an
//! ordered list of [`Handler`]s. Each handler mutates the article in place;
//! the first one to set `article.error` ends the chain for that article and
//! every later handler skips it.
//!
//! ```text
//! read → convert → parse → validate → drafts → future → article page
//! ```
//!
//! | Stage        | Type                        | Error on the article          |
//! |--------------|-----------------------------|-------------------------------|
//! | read         | [`FileReadingHandler`]      | [`ArticleError::Read`]        |
//! | convert      | [`ContentConversionHandler`]| [`ArticleError::Conversion`]  |
//! | parse        | [`MetadataParsingHandler`]  | [`ArticleError::Metadata`]    |
//! | validate     | [`ValidationHandler`]       | [`ArticleError::Validation`]  |
//! | drafts       | [`DraftFilteringHandler`]   | [`ArticleError::Dropped`]     |
//! | future       | [`FutureFilteringHandler`]  | [`ArticleError::Dropped`]     |
//! | article page | [`ArticleRenderingHandler`] | [`ArticleError::Page`]        |
//!
//! Dropped articles are excluded exactly like failed ones, but
//! [`ArticleError::is_dropped`] lets the driver report them apart from
//! defects.

mod article;
mod conversion;
mod filtering;
mod parsing;
mod reading;
mod validation;

pub use article::ArticleRenderingHandler;
pub use conversion::ContentConversionHandler;
pub use filtering::{DraftFilteringHandler, FutureFilteringHandler};
pub use parsing::MetadataParsingHandler;
pub use reading::FileReadingHandler;
pub use validation::{ValidationError, ValidationHandler};

use crate::listing::FinalizeError;
use crate::markdown::ConvertError;
use crate::metadata::MetadataError;
use crate::types::Article;
use chrono::NaiveDate;
use std::fmt;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// One stage of the per-article chain.
pub trait Handler {
    fn handle(&mut self, article: &mut Article);
}

impl<H: Handler + ?Sized> Handler for Box<H> {
    fn handle(&mut self, article: &mut Article) {
        (**self).handle(article)
    }
}

/// Terminal state of an article that did not make it through the chain.
#[derive(Error, Debug)]
pub enum ArticleError {
    #[error("[{}] failed to read article: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("[{}] {source}", path.display())]
    Metadata {
        path: PathBuf,
        #[source]
        source: MetadataError,
    },
    #[error("[{}] {source}", path.display())]
    Validation {
        path: PathBuf,
        #[source]
        source: ValidationError,
    },
    #[error("[{}] {source}", path.display())]
    Conversion {
        path: PathBuf,
        #[source]
        source: ConvertError,
    },
    #[error("[{}] failed to write article page: {source}", path.display())]
    Page {
        path: PathBuf,
        #[source]
        source: FinalizeError,
    },
    #[error("dropped article: {0}")]
    Dropped(DropReason),
}

impl ArticleError {
    /// Policy exclusion rather than a defect in the article.
    pub fn is_dropped(&self) -> bool {
        matches!(self, ArticleError::Dropped(_))
    }
}

/// Why an otherwise valid article was left out of the site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropReason {
    Draft { slug: String },
    Future { slug: String, date: NaiveDate },
}

impl fmt::Display for DropReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DropReason::Draft { slug } => write!(f, "{slug} (DRAFT)"),
            DropReason::Future { slug, date } => write!(f, "{slug} (FUTURE: {date})"),
        }
    }
}

/// Run `article` through `chain` in order, stopping at the first error.
pub fn run_chain(chain: &mut [Box<dyn Handler + '_>], article: &mut Article) {
    for handler in chain.iter_mut() {
        if article.failed() {
            break;
        }
        handler.handle(article);
    }
}
