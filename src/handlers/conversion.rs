use super::{ArticleError, Handler};
use crate::frontmatter::{self, Dialect};
use crate::markdown::Converter;
use crate::types::{Article, Content};

/// Converts the markdown body (everything after the front matter) to HTML.
///
/// Sources without a divider are left alone; the parsing stage reports them.
pub struct ContentConversionHandler<'a> {
    converter: &'a dyn Converter,
    dialect: Dialect,
}

impl<'a> ContentConversionHandler<'a> {
    pub fn new(converter: &'a dyn Converter, dialect: Dialect) -> Self {
        Self { converter, dialect }
    }
}

impl Handler for ContentConversionHandler<'_> {
    fn handle(&mut self, article: &mut Article) {
        let Some(split) = frontmatter::split(&article.source.data, self.dialect) else {
            return;
        };
        match self.converter.convert(split.body) {
            Ok(converted) => {
                article.content = Content {
                    original: split.body.to_string(),
                    converted,
                }
            }
            Err(source) => {
                article.error = Some(ArticleError::Conversion {
                    path: article.source.path.clone(),
                    source,
                })
            }
        }
    }
}
