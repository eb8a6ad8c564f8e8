use super::{ArticleError, Handler};
use crate::disk::FileSystem;
use crate::types::Article;

/// Loads the whole source file into `article.source.data`.
pub struct FileReadingHandler<'a> {
    disk: &'a dyn FileSystem,
}

impl<'a> FileReadingHandler<'a> {
    pub fn new(disk: &'a dyn FileSystem) -> Self {
        Self { disk }
    }
}

impl Handler for FileReadingHandler<'_> {
    fn handle(&mut self, article: &mut Article) {
        match self.disk.read_file(&article.source.path) {
            Ok(data) => article.source.data = data,
            Err(source) => {
                article.error = Some(ArticleError::Read {
                    path: article.source.path.clone(),
                    source,
                })
            }
        }
    }
}
