use super::{ArticleError, Handler};
use crate::frontmatter::{self, Dialect};
use crate::metadata::{MetadataError, MetadataParser};
use crate::types::{Article, ArticleMetadata};

/// Parses the front matter into `article.metadata`.
pub struct MetadataParsingHandler {
    dialect: Dialect,
}

impl MetadataParsingHandler {
    pub fn new(dialect: Dialect) -> Self {
        Self { dialect }
    }

    fn parse(&self, data: &str) -> Result<ArticleMetadata, MetadataError> {
        if data.trim().is_empty() {
            return Err(MetadataError::MissingMetadata);
        }
        let split =
            frontmatter::split(data, self.dialect).ok_or(MetadataError::MissingMetadataDivider)?;
        if split.front.trim().is_empty() {
            return Err(MetadataError::MissingMetadata);
        }
        let fields = frontmatter::fields(split.front, self.dialect)?;
        MetadataParser::new().parse(fields)
    }
}

impl Handler for MetadataParsingHandler {
    fn handle(&mut self, article: &mut Article) {
        match self.parse(&article.source.data) {
            Ok(metadata) => article.metadata = metadata,
            Err(source) => {
                article.error = Some(ArticleError::Metadata {
                    path: article.source.path.clone(),
                    source,
                })
            }
        }
    }
}
