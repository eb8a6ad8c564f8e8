//! The build driver.
//!
//! A run is a single synchronous pass:
//!
//! ```text
//! 1. Setup      validate options, validate templates      (SetupError aborts)
//! 2. Discover   every *.md under the content root, sorted
//! 3. Chain      read → convert → parse → validate → drafts → future → article page
//! 4. Broadcast  survivors → homepage, archives, topic pages, topics listing
//! 5. Finalize   each aggregator once; failures recorded, the rest still run
//! ```
//!
//! Nothing below this module logs. Handlers record errors on the article and
//! aggregators return them; the driver collects everything into a [`Report`]
//! and is the only place that decides what gets logged.

use crate::config::{BuildOptions, ConfigError, SiteConfig};
use crate::disk::{FileSystem, discover_articles};
use crate::handlers::{
    ArticleError, ArticleRenderingHandler, ContentConversionHandler, DraftFilteringHandler,
    DropReason, FileReadingHandler, FutureFilteringHandler, Handler, MetadataParsingHandler,
    ValidationHandler, run_chain,
};
use crate::listing::{
    Aggregator, ArchivesHandler, FinalizeError, HomepageHandler, TopicPagesHandler,
    TopicsListingHandler, accept_all, by_date_descending,
};
use crate::markdown::Converter;
use crate::render::{RenderError, Renderer};
use crate::types::{Article, RenderedArticleSummary};
use chrono::NaiveDate;
use std::path::PathBuf;
use thiserror::Error;

/// Fatal before any article is processed.
#[derive(Error, Debug)]
pub enum SetupError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("invalid templates: {0}")]
    Templates(#[from] RenderError),
    #[error("failed to discover articles: {0}")]
    Discover(#[from] walkdir::Error),
}

/// A defect recorded during the run.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error(transparent)]
    Article(ArticleError),
    #[error(transparent)]
    Finalize(FinalizeError),
}

/// Outcome of one run.
#[derive(Debug, Default)]
pub struct Report {
    pub discovered: usize,
    /// Articles that made it through the whole chain, in discovery order.
    pub published: Vec<RenderedArticleSummary>,
    pub dropped: Vec<DropReason>,
    pub errors: Vec<PipelineError>,
}

impl Report {
    /// Process exit status: the number of errors, saturating.
    pub fn exit_code(&self) -> u8 {
        u8::try_from(self.errors.len()).unwrap_or(u8::MAX)
    }

    fn record(&mut self, error: ArticleError) {
        match error {
            ArticleError::Dropped(reason) => self.dropped.push(reason),
            other => self.errors.push(PipelineError::Article(other)),
        }
    }
}

/// Everything one run needs. Holds no state of its own, so every call to
/// [`Pipeline::build`] or [`Pipeline::check`] starts from scratch.
pub struct Pipeline<'a> {
    options: &'a BuildOptions,
    config: &'a SiteConfig,
    disk: &'a dyn FileSystem,
    renderer: &'a dyn Renderer,
    converter: &'a dyn Converter,
    today: NaiveDate,
}

impl<'a> Pipeline<'a> {
    pub fn new(
        options: &'a BuildOptions,
        config: &'a SiteConfig,
        disk: &'a dyn FileSystem,
        renderer: &'a dyn Renderer,
        converter: &'a dyn Converter,
        today: NaiveDate,
    ) -> Self {
        Self {
            options,
            config,
            disk,
            renderer,
            converter,
            today,
        }
    }

    /// Validate options and templates. Run before anything is read.
    pub fn setup(&self) -> Result<(), SetupError> {
        self.options.validate()?;
        self.renderer.validate()?;
        Ok(())
    }

    /// Full run over every article under the content root.
    pub fn build(&self) -> Result<Report, SetupError> {
        self.setup()?;
        let paths = self.discover()?;
        Ok(self.publish(&paths))
    }

    /// Parse and validate every article under the content root. Writes
    /// nothing.
    pub fn check(&self) -> Result<Report, SetupError> {
        self.options.validate()?;
        let paths = self.discover()?;
        Ok(self.run(&paths, false))
    }

    /// Chain, aggregate and finalize the given articles, in order.
    pub fn publish(&self, paths: &[PathBuf]) -> Report {
        self.run(paths, true)
    }

    fn discover(&self) -> Result<Vec<PathBuf>, SetupError> {
        let paths = discover_articles(&self.options.content_root)?;
        log::info!(
            "discovered {} articles under {}",
            paths.len(),
            self.options.content_root.display()
        );
        Ok(paths)
    }

    fn chain(&self, write_pages: bool) -> Vec<Box<dyn Handler + 'a>> {
        let dialect = self.config.front_matter;
        let mut chain: Vec<Box<dyn Handler + 'a>> = vec![
            Box::new(FileReadingHandler::new(self.disk)),
            Box::new(ContentConversionHandler::new(self.converter, dialect)),
            Box::new(MetadataParsingHandler::new(dialect)),
            Box::new(ValidationHandler::new()),
            Box::new(DraftFilteringHandler::new(!self.options.with_drafts)),
            Box::new(FutureFilteringHandler::new(
                !self.options.with_future,
                self.today,
            )),
        ];
        if write_pages {
            chain.push(Box::new(ArticleRenderingHandler::new(
                self.renderer,
                self.disk,
                &self.options.output_root,
            )));
        }
        chain
    }

    fn aggregators(&self) -> Vec<Box<dyn Aggregator + 'a>> {
        let output = &self.options.output_root;
        vec![
            Box::new(
                HomepageHandler::new(
                    accept_all(),
                    by_date_descending,
                    self.renderer,
                    self.disk,
                    output,
                )
                .with_limits(
                    self.config.homepage.articles,
                    self.config.homepage.prominent_topics,
                ),
            ),
            Box::new(ArchivesHandler::new(
                accept_all(),
                by_date_descending,
                self.renderer,
                self.disk,
                output,
            )),
            Box::new(
                TopicPagesHandler::new(by_date_descending, self.renderer, self.disk, output)
                    .with_prominent_topics(self.config.listing.prominent_topics),
            ),
            Box::new(TopicsListingHandler::new(self.renderer, self.disk, output)),
        ]
    }

    fn run(&self, paths: &[PathBuf], write_pages: bool) -> Report {
        let mut report = Report {
            discovered: paths.len(),
            ..Report::default()
        };
        let mut chain = self.chain(write_pages);
        let mut aggregators = if write_pages {
            self.aggregators()
        } else {
            Vec::new()
        };

        for path in paths {
            let mut article = Article::new(path);
            run_chain(&mut chain, &mut article);
            match article.error.take() {
                Some(error) => {
                    log::debug!("{error}");
                    report.record(error);
                }
                None => {
                    log::debug!("accepted {}", path.display());
                    for aggregator in aggregators.iter_mut() {
                        aggregator.handle(&article);
                    }
                    report
                        .published
                        .push(RenderedArticleSummary::from(&article.metadata));
                }
            }
        }

        for aggregator in aggregators.iter_mut() {
            if let Err(error) = aggregator.finalize() {
                log::debug!("{error}");
                report.errors.push(PipelineError::Finalize(error));
            }
        }
        report
    }
}
