//! Shared types used across the article pipeline.
//!
//! An [`Article`] is created per discovered file and mutated in place as it
//! moves through the handler chain. Aggregation handlers only ever see it by
//! shared reference and copy what they need into a [`RenderedArticleSummary`].
//!
//! Page models are immutable values handed to the renderer. They serialize
//! with a `kind` tag so a single model can be dumped to JSON and rendered back
//! (see [`crate::render::TemplateRenderer::render_json`]).

use crate::handlers::ArticleError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// One source document in flight through the pipeline.
#[derive(Debug, Default)]
pub struct Article {
    pub source: Source,
    pub metadata: ArticleMetadata,
    pub content: Content,
    /// Terminal failure. Once set, the article is excluded from aggregation.
    pub error: Option<ArticleError>,
}

impl Article {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            source: Source {
                path: path.into(),
                data: String::new(),
            },
            ..Self::default()
        }
    }

    pub fn failed(&self) -> bool {
        self.error.is_some()
    }
}

#[derive(Debug, Default, Clone)]
pub struct Source {
    pub path: PathBuf,
    pub data: String,
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Content {
    /// Markdown body exactly as found after the front-matter divider.
    pub original: String,
    pub converted: String,
}

/// Validated, structured front matter.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ArticleMetadata {
    pub title: String,
    pub intro: String,
    pub slug: String,
    /// `None` until a `date` field has been parsed.
    pub date: Option<NaiveDate>,
    pub draft: bool,
    pub topics: Vec<String>,
}

/// Read-only projection of [`ArticleMetadata`] used by every listing page.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderedArticleSummary {
    pub slug: String,
    pub title: String,
    pub intro: String,
    pub date: NaiveDate,
    pub topics: Vec<String>,
    pub draft: bool,
}

impl From<&ArticleMetadata> for RenderedArticleSummary {
    fn from(metadata: &ArticleMetadata) -> Self {
        Self {
            slug: metadata.slug.clone(),
            title: metadata.title.clone(),
            intro: metadata.intro.clone(),
            date: metadata.date.unwrap_or_default(),
            topics: metadata.topics.clone(),
            draft: metadata.draft,
        }
    }
}

// ============================================================================
// Page models
// ============================================================================

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderedHomePage {
    pub prominent_topics: Vec<String>,
    pub pages: Vec<RenderedArticleSummary>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderedArchivesPage {
    pub pages: Vec<RenderedArticleSummary>,
}

/// A titled listing of articles, used for per-topic pages.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderedListPage {
    pub title: String,
    pub latest_article: Option<RenderedArticleSummary>,
    pub prominent_topics: Vec<String>,
    pub pages: Vec<RenderedArticleSummary>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderedArticle {
    pub slug: String,
    pub title: String,
    pub intro: String,
    pub date: NaiveDate,
    pub topics: Vec<String>,
    pub draft: bool,
    /// Converted HTML body.
    pub content: String,
}

impl RenderedArticle {
    pub fn from_article(article: &Article) -> Self {
        let metadata = &article.metadata;
        Self {
            slug: metadata.slug.clone(),
            title: metadata.title.clone(),
            intro: metadata.intro.clone(),
            date: metadata.date.unwrap_or_default(),
            topics: metadata.topics.clone(),
            draft: metadata.draft,
            content: article.content.converted.clone(),
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderedTopicsListing {
    pub topics: Vec<RenderedTopic>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderedTopic {
    pub name: String,
    pub href: String,
    pub count: usize,
}

/// Every page shape the renderer knows how to stamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PageModel {
    Home(RenderedHomePage),
    Archives(RenderedArchivesPage),
    Article(RenderedArticle),
    Listing(RenderedListPage),
    Topics(RenderedTopicsListing),
}

impl PageModel {
    /// Tag values accepted in serialized page models.
    pub const KINDS: [&'static str; 5] = ["home", "archives", "article", "listing", "topics"];

    /// A zero value of every variant, in [`PageModel::KINDS`] order.
    pub fn zero_values() -> [PageModel; 5] {
        [
            PageModel::Home(RenderedHomePage::default()),
            PageModel::Archives(RenderedArchivesPage::default()),
            PageModel::Article(RenderedArticle::default()),
            PageModel::Listing(RenderedListPage::default()),
            PageModel::Topics(RenderedTopicsListing::default()),
        ]
    }

    pub fn kind(&self) -> &'static str {
        match self {
            PageModel::Home(_) => "home",
            PageModel::Archives(_) => "archives",
            PageModel::Article(_) => "article",
            PageModel::Listing(_) => "listing",
            PageModel::Topics(_) => "topics",
        }
    }
}

/// Site-relative link to an article page. Slugs may or may not carry a
/// leading slash; the link always does.
/// A slug with its surrounding slashes removed. Two slugs with the same
/// path share an output folder and a link.
pub fn slug_path(slug: &str) -> &str {
    slug.trim_matches('/')
}

pub fn article_href(slug: &str) -> String {
    format!("/{}/", slug_path(slug))
}

/// Site-relative link to a topic listing page.
pub fn topic_href(topic: &str) -> String {
    format!("/topics/{topic}/")
}
