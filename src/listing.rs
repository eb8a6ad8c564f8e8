//! Aggregation handlers.
//!
//! Articles that survive the chain are broadcast to every [`Aggregator`].
//! Each one keeps its own accumulator and topic [`Leaderboard`], filtered by
//! its own predicate, and commits a single page in [`Aggregator::finalize`]:
//!
//! | Handler                  | Page model              | Output                           |
//! |--------------------------|-------------------------|----------------------------------|
//! | [`HomepageHandler`]      | `RenderedHomePage`      | `<out>/index.html`               |
//! | [`ArchivesHandler`]      | `RenderedArchivesPage`  | `<out>/archives/index.html`      |
//! | [`ListHandler`]          | `RenderedListPage`      | `<out>/index.html`               |
//! | [`TopicPagesHandler`]    | one list per topic      | `<out>/topics/<topic>/index.html`|
//! | [`TopicsListingHandler`] | `RenderedTopicsListing` | `<out>/topics/index.html`        |
//!
//! Finalizing with nothing accumulated writes nothing. Summaries are sorted
//! with a stable sort, so equal entries keep discovery order.

use crate::disk::FileSystem;
use crate::leaderboard::Leaderboard;
use crate::render::{RenderError, Renderer};
use crate::types::{
    Article, PageModel, RenderedArchivesPage, RenderedArticleSummary, RenderedHomePage,
    RenderedListPage, RenderedTopic, RenderedTopicsListing, topic_href,
};
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const INDEX_FILE: &str = "index.html";
pub const ARCHIVES_FOLDER: &str = "archives";
pub const TOPICS_FOLDER: &str = "topics";

#[derive(Error, Debug)]
pub enum FinalizeError {
    #[error("failed to render {kind} page: {source}")]
    Render {
        kind: &'static str,
        #[source]
        source: RenderError,
    },
    #[error("failed to create directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("{} page(s) failed: {}", .0.len(), join_errors(.0))]
    Pages(Vec<FinalizeError>),
}

fn join_errors(errors: &[FinalizeError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Consumes every surviving article, then commits one page.
pub trait Aggregator {
    fn handle(&mut self, article: &Article);
    fn finalize(&mut self) -> Result<(), FinalizeError>;
}

pub type Filter = Box<dyn Fn(&Article) -> bool>;
pub type Sorter = fn(&RenderedArticleSummary, &RenderedArticleSummary) -> Ordering;

pub fn accept_all() -> Filter {
    Box::new(|_: &Article| true)
}

pub fn has_topic(topic: impl Into<String>) -> Filter {
    let topic = topic.into();
    Box::new(move |article: &Article| article.metadata.topics.contains(&topic))
}

/// Newest first; same-day articles by slug.
pub fn by_date_descending(a: &RenderedArticleSummary, b: &RenderedArticleSummary) -> Ordering {
    b.date.cmp(&a.date).then_with(|| a.slug.cmp(&b.slug))
}

pub fn by_title(a: &RenderedArticleSummary, b: &RenderedArticleSummary) -> Ordering {
    a.title.cmp(&b.title)
}

/// Render `page` and write it to `<folder>/index.html`.
pub fn write_page(
    renderer: &dyn Renderer,
    disk: &dyn FileSystem,
    page: &PageModel,
    folder: &Path,
) -> Result<(), FinalizeError> {
    let rendered = renderer
        .render(page)
        .map_err(|source| FinalizeError::Render {
            kind: page.kind(),
            source,
        })?;
    disk.create_dir_all(folder)
        .map_err(|source| FinalizeError::CreateDir {
            path: folder.to_path_buf(),
            source,
        })?;
    let path = folder.join(INDEX_FILE);
    disk.write_file(&path, &rendered)
        .map_err(|source| FinalizeError::Write { path, source })
}

/// Accepted summaries plus the topic counts across them.
#[derive(Debug, Default)]
struct Collected {
    pages: Vec<RenderedArticleSummary>,
    topics: Leaderboard<String>,
}

impl Collected {
    fn add(&mut self, article: &Article) {
        for topic in &article.metadata.topics {
            self.topics.tally(topic.clone());
        }
        self.pages.push(RenderedArticleSummary::from(&article.metadata));
    }

    fn sorted(&self, sorter: Sorter) -> Vec<RenderedArticleSummary> {
        let mut pages = self.pages.clone();
        pages.sort_by(sorter);
        pages
    }
}

// ============================================================================
// Homepage
// ============================================================================

pub struct HomepageHandler<'a> {
    collected: Collected,
    filter: Filter,
    sorter: Sorter,
    renderer: &'a dyn Renderer,
    disk: &'a dyn FileSystem,
    output: PathBuf,
    articles: usize,
    prominent_topics: usize,
}

impl<'a> HomepageHandler<'a> {
    pub fn new(
        filter: Filter,
        sorter: Sorter,
        renderer: &'a dyn Renderer,
        disk: &'a dyn FileSystem,
        output: impl Into<PathBuf>,
    ) -> Self {
        Self {
            collected: Collected::default(),
            filter,
            sorter,
            renderer,
            disk,
            output: output.into(),
            articles: 10,
            prominent_topics: 30,
        }
    }

    /// Override how many articles and topics the page lists.
    pub fn with_limits(mut self, articles: usize, prominent_topics: usize) -> Self {
        self.articles = articles;
        self.prominent_topics = prominent_topics;
        self
    }
}

impl Aggregator for HomepageHandler<'_> {
    fn handle(&mut self, article: &Article) {
        if (self.filter)(article) {
            self.collected.add(article);
        }
    }

    fn finalize(&mut self) -> Result<(), FinalizeError> {
        if self.collected.pages.is_empty() {
            return Ok(());
        }
        let mut pages = self.collected.sorted(self.sorter);
        pages.truncate(self.articles);
        let page = PageModel::Home(RenderedHomePage {
            prominent_topics: self.collected.topics.top_n(self.prominent_topics),
            pages,
        });
        write_page(self.renderer, self.disk, &page, &self.output)
    }
}

// ============================================================================
// Archives
// ============================================================================

pub struct ArchivesHandler<'a> {
    collected: Collected,
    filter: Filter,
    sorter: Sorter,
    renderer: &'a dyn Renderer,
    disk: &'a dyn FileSystem,
    output: PathBuf,
}

impl<'a> ArchivesHandler<'a> {
    /// Writes into `<output>/archives/`.
    pub fn new(
        filter: Filter,
        sorter: Sorter,
        renderer: &'a dyn Renderer,
        disk: &'a dyn FileSystem,
        output: impl Into<PathBuf>,
    ) -> Self {
        Self {
            collected: Collected::default(),
            filter,
            sorter,
            renderer,
            disk,
            output: output.into(),
        }
    }
}

impl Aggregator for ArchivesHandler<'_> {
    fn handle(&mut self, article: &Article) {
        if (self.filter)(article) {
            self.collected.add(article);
        }
    }

    fn finalize(&mut self) -> Result<(), FinalizeError> {
        if self.collected.pages.is_empty() {
            return Ok(());
        }
        let page = PageModel::Archives(RenderedArchivesPage {
            pages: self.collected.sorted(self.sorter),
        });
        write_page(
            self.renderer,
            self.disk,
            &page,
            &self.output.join(ARCHIVES_FOLDER),
        )
    }
}

// ============================================================================
// List
// ============================================================================

/// A titled listing written directly into its output folder.
pub struct ListHandler<'a> {
    collected: Collected,
    filter: Filter,
    sorter: Sorter,
    renderer: &'a dyn Renderer,
    disk: &'a dyn FileSystem,
    output: PathBuf,
    title: String,
    prominent_topics: usize,
}

impl<'a> ListHandler<'a> {
    pub fn new(
        filter: Filter,
        sorter: Sorter,
        renderer: &'a dyn Renderer,
        disk: &'a dyn FileSystem,
        output: impl Into<PathBuf>,
        title: impl Into<String>,
    ) -> Self {
        Self {
            collected: Collected::default(),
            filter,
            sorter,
            renderer,
            disk,
            output: output.into(),
            title: title.into(),
            prominent_topics: 30,
        }
    }

    pub fn with_prominent_topics(mut self, prominent_topics: usize) -> Self {
        self.prominent_topics = prominent_topics;
        self
    }
}

impl Aggregator for ListHandler<'_> {
    fn handle(&mut self, article: &Article) {
        if (self.filter)(article) {
            self.collected.add(article);
        }
    }

    fn finalize(&mut self) -> Result<(), FinalizeError> {
        if self.collected.pages.is_empty() {
            return Ok(());
        }
        let pages = self.collected.sorted(self.sorter);
        let page = PageModel::Listing(RenderedListPage {
            title: self.title.clone(),
            latest_article: pages.first().cloned(),
            prominent_topics: self.collected.topics.top_n(self.prominent_topics),
            pages,
        });
        write_page(self.renderer, self.disk, &page, &self.output)
    }
}

// ============================================================================
// Topics
// ============================================================================

/// One [`ListHandler`] per topic, created the first time the topic is seen.
pub struct TopicPagesHandler<'a> {
    pages: BTreeMap<String, ListHandler<'a>>,
    sorter: Sorter,
    renderer: &'a dyn Renderer,
    disk: &'a dyn FileSystem,
    output: PathBuf,
    prominent_topics: usize,
}

impl<'a> TopicPagesHandler<'a> {
    /// Pages land in `<output>/topics/<topic>/`.
    pub fn new(
        sorter: Sorter,
        renderer: &'a dyn Renderer,
        disk: &'a dyn FileSystem,
        output: impl Into<PathBuf>,
    ) -> Self {
        Self {
            pages: BTreeMap::new(),
            sorter,
            renderer,
            disk,
            output: output.into(),
            prominent_topics: 30,
        }
    }

    pub fn with_prominent_topics(mut self, prominent_topics: usize) -> Self {
        self.prominent_topics = prominent_topics;
        self
    }

    pub fn topics(&self) -> impl Iterator<Item = &str> {
        self.pages.keys().map(String::as_str)
    }
}

impl Aggregator for TopicPagesHandler<'_> {
    fn handle(&mut self, article: &Article) {
        for topic in &article.metadata.topics {
            let list = self.pages.entry(topic.clone()).or_insert_with(|| {
                ListHandler::new(
                    has_topic(topic.as_str()),
                    self.sorter,
                    self.renderer,
                    self.disk,
                    self.output.join(TOPICS_FOLDER).join(topic),
                    topic.as_str(),
                )
                .with_prominent_topics(self.prominent_topics)
            });
            list.handle(article);
        }
    }

    fn finalize(&mut self) -> Result<(), FinalizeError> {
        let failures: Vec<FinalizeError> = self
            .pages
            .values_mut()
            .filter_map(|list| list.finalize().err())
            .collect();
        if failures.is_empty() {
            Ok(())
        } else {
            Err(FinalizeError::Pages(failures))
        }
    }
}

/// The page linking every topic, most used first.
pub struct TopicsListingHandler<'a> {
    topics: Leaderboard<String>,
    renderer: &'a dyn Renderer,
    disk: &'a dyn FileSystem,
    output: PathBuf,
}

impl<'a> TopicsListingHandler<'a> {
    /// Writes into `<output>/topics/`.
    pub fn new(
        renderer: &'a dyn Renderer,
        disk: &'a dyn FileSystem,
        output: impl Into<PathBuf>,
    ) -> Self {
        Self {
            topics: Leaderboard::new(),
            renderer,
            disk,
            output: output.into(),
        }
    }
}

impl Aggregator for TopicsListingHandler<'_> {
    fn handle(&mut self, article: &Article) {
        for topic in &article.metadata.topics {
            self.topics.tally(topic.clone());
        }
    }

    fn finalize(&mut self) -> Result<(), FinalizeError> {
        if self.topics.is_empty() {
            return Ok(());
        }
        let topics = self
            .topics
            .ranked()
            .into_iter()
            .map(|(name, count)| RenderedTopic {
                href: topic_href(&name),
                name,
                count,
            })
            .collect();
        let page = PageModel::Topics(RenderedTopicsListing { topics });
        write_page(
            self.renderer,
            self.disk,
            &page,
            &self.output.join(TOPICS_FOLDER),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{
        FakeRenderer, MemoryDisk, article_a, article_b, article_b2, article_c, date,
        title_before_c,
    };
    use std::error::Error;

    fn summary(
        slug: &str,
        title: &str,
        intro: &str,
        day: u32,
        topic: &str,
        draft: bool,
    ) -> RenderedArticleSummary {
        RenderedArticleSummary {
            slug: slug.into(),
            title: title.into(),
            intro: intro.into(),
            date: date(2023, 7, day),
            topics: vec![topic.into()],
            draft,
        }
    }

    fn handled_summaries() -> Vec<RenderedArticleSummary> {
        vec![
            summary("/a", "A", "aa", 7, "topic-a", false),
            summary("/b", "B", "bb", 8, "topic-b", true),
            summary("/b/2", "B2", "bb", 8, "topic-b", true),
        ]
    }

    fn handle_all(aggregator: &mut dyn Aggregator) -> Result<(), FinalizeError> {
        for article in [article_a(), article_b(), article_b2(), article_c()] {
            aggregator.handle(&article);
        }
        aggregator.finalize()
    }

    /// Walk the source chain down to the injected io error.
    fn injected_io(err: &FinalizeError) -> &io::Error {
        let mut current: &(dyn Error + 'static) = err;
        loop {
            if let Some(io) = current.downcast_ref::<io::Error>() {
                return io;
            }
            current = current.source().expect("io error in chain");
        }
    }

    // =========================================================================
    // Homepage
    // =========================================================================

    fn homepage<'a>(renderer: &'a FakeRenderer, disk: &'a MemoryDisk) -> HomepageHandler<'a> {
        HomepageHandler::new(title_before_c(), by_title, renderer, disk, "output/folder")
    }

    #[test]
    fn homepage_no_articles_nothing_to_render() {
        let renderer = FakeRenderer::returning("RENDERED");
        let disk = MemoryDisk::new();
        let mut handler = homepage(&renderer, &disk);

        handler.handle(&article_c());
        assert!(handler.finalize().is_ok());

        assert!(disk.files().is_empty());
        assert!(renderer.rendered().is_none());
    }

    #[test]
    fn homepage_rendered_and_written_to_disk() {
        let renderer = FakeRenderer::returning("RENDERED");
        let disk = MemoryDisk::new();

        handle_all(&mut homepage(&renderer, &disk)).unwrap();

        assert_eq!(
            renderer.rendered(),
            Some(PageModel::Home(RenderedHomePage {
                prominent_topics: vec!["topic-b".into(), "topic-a".into()],
                pages: handled_summaries(),
            }))
        );
        assert!(disk.has_dir("output/folder"));
        assert_eq!(disk.files(), vec![PathBuf::from("output/folder/index.html")]);
        assert_eq!(disk.file("output/folder/index.html").as_deref(), Some("RENDERED"));
    }

    #[test]
    fn homepage_keeps_first_articles_after_sorting() {
        let renderer = FakeRenderer::returning("RENDERED");
        let disk = MemoryDisk::new();
        let mut handler = HomepageHandler::new(
            accept_all(),
            by_date_descending,
            &renderer,
            &disk,
            "output",
        )
        .with_limits(2, 1);

        handle_all(&mut handler).unwrap();

        match renderer.rendered() {
            Some(PageModel::Home(page)) => {
                let slugs: Vec<&str> = page.pages.iter().map(|p| p.slug.as_str()).collect();
                assert_eq!(slugs, vec!["/c", "/b"]);
                assert_eq!(page.prominent_topics, vec!["topic-b"]);
            }
            other => panic!("expected homepage, got {other:?}"),
        }
    }

    #[test]
    fn homepage_render_error_returned() {
        let renderer = FakeRenderer::failing();
        let disk = MemoryDisk::new();

        let err = handle_all(&mut homepage(&renderer, &disk)).unwrap_err();

        assert!(matches!(err, FinalizeError::Render { kind: "home", .. }));
        assert!(err.source().unwrap().to_string().contains("boink"));
        assert!(disk.files().is_empty());
    }

    #[test]
    fn homepage_mkdir_error_returned() {
        let renderer = FakeRenderer::returning("RENDERED");
        let disk = MemoryDisk::new();
        disk.fail_mkdir("output/folder", io::ErrorKind::PermissionDenied);

        let err = handle_all(&mut homepage(&renderer, &disk)).unwrap_err();

        assert!(matches!(err, FinalizeError::CreateDir { .. }));
        assert_eq!(injected_io(&err).kind(), io::ErrorKind::PermissionDenied);
        assert!(disk.files().is_empty());
    }

    #[test]
    fn homepage_write_error_returned() {
        let renderer = FakeRenderer::returning("RENDERED");
        let disk = MemoryDisk::new();
        disk.fail_write("output/folder/index.html", io::ErrorKind::StorageFull);

        let err = handle_all(&mut homepage(&renderer, &disk)).unwrap_err();

        assert!(matches!(err, FinalizeError::Write { .. }));
        assert_eq!(injected_io(&err).kind(), io::ErrorKind::StorageFull);
        assert!(disk.file("output/folder/index.html").is_none());
    }

    // =========================================================================
    // Archives
    // =========================================================================

    fn archives<'a>(renderer: &'a FakeRenderer, disk: &'a MemoryDisk) -> ArchivesHandler<'a> {
        ArchivesHandler::new(title_before_c(), by_title, renderer, disk, "output/folder")
    }

    #[test]
    fn archives_no_articles_nothing_to_render() {
        let renderer = FakeRenderer::returning("RENDERED");
        let disk = MemoryDisk::new();
        let mut handler = archives(&renderer, &disk);

        handler.handle(&article_c());
        assert!(handler.finalize().is_ok());
        assert!(disk.files().is_empty());
    }

    #[test]
    fn archives_rendered_and_written_to_disk() {
        let renderer = FakeRenderer::returning("RENDERED");
        let disk = MemoryDisk::new();

        handle_all(&mut archives(&renderer, &disk)).unwrap();

        assert_eq!(
            renderer.rendered(),
            Some(PageModel::Archives(RenderedArchivesPage {
                pages: handled_summaries(),
            }))
        );
        assert_eq!(
            disk.file("output/folder/archives/index.html").as_deref(),
            Some("RENDERED")
        );
    }

    #[test]
    fn archives_failures_leave_no_file() {
        let renderer = FakeRenderer::failing();
        let disk = MemoryDisk::new();
        assert!(handle_all(&mut archives(&renderer, &disk)).is_err());
        assert!(disk.files().is_empty());

        let renderer = FakeRenderer::returning("RENDERED");
        let disk = MemoryDisk::new();
        disk.fail_mkdir("output/folder/archives", io::ErrorKind::PermissionDenied);
        assert!(handle_all(&mut archives(&renderer, &disk)).is_err());
        assert!(disk.files().is_empty());

        let disk = MemoryDisk::new();
        disk.fail_write("output/folder/archives/index.html", io::ErrorKind::StorageFull);
        assert!(handle_all(&mut archives(&renderer, &disk)).is_err());
        assert!(disk.files().is_empty());
    }

    // =========================================================================
    // List
    // =========================================================================

    #[test]
    fn list_page_has_title_and_latest_article() {
        let renderer = FakeRenderer::returning("RENDERED");
        let disk = MemoryDisk::new();
        let mut handler = ListHandler::new(
            accept_all(),
            by_date_descending,
            &renderer,
            &disk,
            "output/topics/all",
            "All",
        );

        handle_all(&mut handler).unwrap();

        match renderer.rendered() {
            Some(PageModel::Listing(page)) => {
                assert_eq!(page.title, "All");
                assert_eq!(page.latest_article.map(|a| a.slug), Some("/c".to_string()));
                let slugs: Vec<&str> = page.pages.iter().map(|p| p.slug.as_str()).collect();
                assert_eq!(slugs, vec!["/c", "/b", "/b/2", "/a"]);
                assert_eq!(page.prominent_topics, vec!["topic-b", "topic-a", "topic-c"]);
            }
            other => panic!("expected listing, got {other:?}"),
        }
        assert!(disk.file("output/topics/all/index.html").is_some());
    }

    #[test]
    fn stable_sort_keeps_discovery_order_for_ties() {
        let renderer = FakeRenderer::returning("RENDERED");
        let disk = MemoryDisk::new();
        let same_title: Sorter = |_, _| Ordering::Equal;
        let mut handler =
            ListHandler::new(accept_all(), same_title, &renderer, &disk, "output", "Ties");

        for article in [article_c(), article_a(), article_b()] {
            handler.handle(&article);
        }
        handler.finalize().unwrap();

        match renderer.rendered() {
            Some(PageModel::Listing(page)) => {
                let slugs: Vec<&str> = page.pages.iter().map(|p| p.slug.as_str()).collect();
                assert_eq!(slugs, vec!["/c", "/a", "/b"]);
            }
            other => panic!("expected listing, got {other:?}"),
        }
    }

    #[test]
    fn finalize_is_deterministic() {
        let first = FakeRenderer::returning("RENDERED");
        let second = FakeRenderer::returning("RENDERED");
        let disk = MemoryDisk::new();

        handle_all(&mut archives(&first, &disk)).unwrap();
        handle_all(&mut archives(&second, &disk)).unwrap();

        assert_eq!(first.rendered(), second.rendered());
    }

    // =========================================================================
    // Topics
    // =========================================================================

    #[test]
    fn topic_pages_one_listing_per_topic() {
        let renderer = FakeRenderer::returning("RENDERED");
        let disk = MemoryDisk::new();
        let mut handler = TopicPagesHandler::new(by_date_descending, &renderer, &disk, "output");

        handle_all(&mut handler).unwrap();

        assert_eq!(
            handler.topics().collect::<Vec<_>>(),
            vec!["topic-a", "topic-b", "topic-c"]
        );
        assert_eq!(
            disk.files(),
            vec![
                PathBuf::from("output/topics/topic-a/index.html"),
                PathBuf::from("output/topics/topic-b/index.html"),
                PathBuf::from("output/topics/topic-c/index.html"),
            ]
        );
        let titles: Vec<String> = renderer
            .all_rendered()
            .into_iter()
            .map(|page| match page {
                PageModel::Listing(list) => {
                    format!("{}:{}", list.title, list.pages.len())
                }
                other => panic!("expected listing, got {other:?}"),
            })
            .collect();
        assert_eq!(titles, vec!["topic-a:1", "topic-b:2", "topic-c:1"]);
    }

    #[test]
    fn topic_pages_attempt_all_and_collect_failures() {
        let renderer = FakeRenderer::returning("RENDERED");
        let disk = MemoryDisk::new();
        disk.fail_write("output/topics/topic-a/index.html", io::ErrorKind::StorageFull);
        disk.fail_write("output/topics/topic-c/index.html", io::ErrorKind::StorageFull);
        let mut handler = TopicPagesHandler::new(by_date_descending, &renderer, &disk, "output");

        let err = handle_all(&mut handler).unwrap_err();

        match err {
            FinalizeError::Pages(failures) => assert_eq!(failures.len(), 2),
            other => panic!("expected collected failures, got {other:?}"),
        }
        assert_eq!(
            disk.files(),
            vec![PathBuf::from("output/topics/topic-b/index.html")]
        );
    }

    #[test]
    fn topic_pages_without_topics_write_nothing() {
        let renderer = FakeRenderer::returning("RENDERED");
        let disk = MemoryDisk::new();
        let mut handler = TopicPagesHandler::new(by_date_descending, &renderer, &disk, "output");
        let mut article = article_a();
        article.metadata.topics.clear();

        handler.handle(&article);

        assert!(handler.finalize().is_ok());
        assert!(disk.files().is_empty());
    }

    #[test]
    fn topics_listing_ranks_by_count() {
        let renderer = FakeRenderer::returning("RENDERED");
        let disk = MemoryDisk::new();
        let mut handler = TopicsListingHandler::new(&renderer, &disk, "output");

        handle_all(&mut handler).unwrap();

        assert_eq!(
            renderer.rendered(),
            Some(PageModel::Topics(RenderedTopicsListing {
                topics: vec![
                    RenderedTopic {
                        name: "topic-b".into(),
                        href: "/topics/topic-b/".into(),
                        count: 2,
                    },
                    RenderedTopic {
                        name: "topic-a".into(),
                        href: "/topics/topic-a/".into(),
                        count: 1,
                    },
                    RenderedTopic {
                        name: "topic-c".into(),
                        href: "/topics/topic-c/".into(),
                        count: 1,
                    },
                ],
            }))
        );
        assert!(disk.file("output/topics/index.html").is_some());
    }

    #[test]
    fn topics_listing_empty_is_noop() {
        let renderer = FakeRenderer::returning("RENDERED");
        let disk = MemoryDisk::new();
        let mut handler = TopicsListingHandler::new(&renderer, &disk, "output");
        assert!(handler.finalize().is_ok());
        assert!(disk.files().is_empty());
    }

    #[test]
    fn date_sorter_newest_first_then_slug() {
        let older = summary("/a", "A", "", 7, "t", false);
        let newer = summary("/z", "Z", "", 9, "t", false);
        let same_day = summary("/b", "B", "", 9, "t", false);
        assert_eq!(by_date_descending(&newer, &older), Ordering::Less);
        assert_eq!(by_date_descending(&same_day, &newer), Ordering::Less);
    }
}
