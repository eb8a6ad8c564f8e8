use super::{ArticleError, Handler};
use crate::types::{Article, slug_path};
use std::collections::HashSet;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("blank metadata title")]
    BlankTitle,
    #[error("blank metadata slug")]
    BlankSlug,
    #[error("blank metadata date")]
    BlankDate,
    #[error("repeated metadata slug: [{0}]")]
    RepeatedSlug(String),
}

/// Checks required fields and slug uniqueness across the run.
///
/// The first article to claim a slug keeps it; every later article with the
/// same slug path fails, so `/a`, `a/` and `/a/` count as one slug. One
/// instance per run.
#[derive(Debug, Default)]
pub struct ValidationHandler {
    slugs: HashSet<String>,
}

impl ValidationHandler {
    pub fn new() -> Self {
        Self::default()
    }

    fn validate(&mut self, article: &Article) -> Result<(), ValidationError> {
        let metadata = &article.metadata;
        if metadata.title.is_empty() {
            return Err(ValidationError::BlankTitle);
        }
        if metadata.slug.is_empty() {
            return Err(ValidationError::BlankSlug);
        }
        if metadata.date.is_none() {
            return Err(ValidationError::BlankDate);
        }
        if !self.slugs.insert(slug_path(&metadata.slug).to_string()) {
            return Err(ValidationError::RepeatedSlug(metadata.slug.clone()));
        }
        Ok(())
    }
}

impl Handler for ValidationHandler {
    fn handle(&mut self, article: &mut Article) {
        if let Err(source) = self.validate(article) {
            article.error = Some(ArticleError::Validation {
                path: article.source.path.clone(),
                source,
            });
        }
    }
}
