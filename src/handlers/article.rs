use super::{ArticleError, Handler};
use crate::disk::FileSystem;
use crate::listing::write_page;
use crate::render::Renderer;
use crate::types::{Article, PageModel, RenderedArticle, slug_path};
use std::path::{Path, PathBuf};

/// Writes `<output>/<slug>/index.html` for every article reaching the end
/// of the chain.
pub struct ArticleRenderingHandler<'a> {
    renderer: &'a dyn Renderer,
    disk: &'a dyn FileSystem,
    output_root: PathBuf,
}

impl<'a> ArticleRenderingHandler<'a> {
    pub fn new(
        renderer: &'a dyn Renderer,
        disk: &'a dyn FileSystem,
        output_root: impl Into<PathBuf>,
    ) -> Self {
        Self {
            renderer,
            disk,
            output_root: output_root.into(),
        }
    }
}

/// Output folder for a slug. Slugs are rooted at the output root whether or
/// not they start with a slash.
pub fn article_folder(output_root: &Path, slug: &str) -> PathBuf {
    output_root.join(slug_path(slug))
}

impl Handler for ArticleRenderingHandler<'_> {
    fn handle(&mut self, article: &mut Article) {
        let page = PageModel::Article(RenderedArticle::from_article(article));
        let folder = article_folder(&self.output_root, &article.metadata.slug);
        if let Err(source) = write_page(self.renderer, self.disk, &page, &folder) {
            article.error = Some(ArticleError::Page {
                path: article.source.path.clone(),
                source,
            });
        }
    }
}
