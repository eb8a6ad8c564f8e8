use super::{ArticleError, DropReason, Handler};
use crate::types::Article;
use chrono::NaiveDate;

/// Drops drafts unless drafts are being published.
#[derive(Debug, Clone, Copy)]
pub struct DraftFilteringHandler {
    enabled: bool,
}

impl DraftFilteringHandler {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }
}

impl Handler for DraftFilteringHandler {
    fn handle(&mut self, article: &mut Article) {
        if self.enabled && article.metadata.draft {
            article.error = Some(ArticleError::Dropped(DropReason::Draft {
                slug: article.metadata.slug.clone(),
            }));
        }
    }
}

/// Drops articles dated after `today` unless future articles are being
/// published.
#[derive(Debug, Clone, Copy)]
pub struct FutureFilteringHandler {
    enabled: bool,
    today: NaiveDate,
}

impl FutureFilteringHandler {
    pub fn new(enabled: bool, today: NaiveDate) -> Self {
        Self { enabled, today }
    }
}

impl Handler for FutureFilteringHandler {
    fn handle(&mut self, article: &mut Article) {
        if !self.enabled {
            return;
        }
        if let Some(date) = article.metadata.date.filter(|date| *date > self.today) {
            article.error = Some(ArticleError::Dropped(DropReason::Future {
                slug: article.metadata.slug.clone(),
                date,
            }));
        }
    }
}
