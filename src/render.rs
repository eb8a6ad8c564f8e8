//! Page rendering.
//!
//! [`TemplateRenderer`] is the single render entry point: it maps each
//! [`PageModel`] variant to a template name and hands both to a
//! [`TemplateEngine`]. The engine is a capability; the binary uses the
//! compiled-in templates from [`crate::templates`], tests use fakes.
//!
//! ```text
//! PageModel::Home      →  "home"
//! PageModel::Archives  →  "archives"
//! PageModel::Article   →  "article"
//! PageModel::Listing   →  "listing"
//! PageModel::Topics    →  "topics"
//! ```
//!
//! [`Renderer::validate`] renders a zero value of every variant and
//! fails if any template is missing, errors, or produces nothing. It runs
//! once at startup, before any article is read.

use crate::types::PageModel;
use regex::{Captures, Regex};
use std::sync::LazyLock;
use thiserror::Error;

pub const HOME_TEMPLATE: &str = "home";
pub const ARCHIVES_TEMPLATE: &str = "archives";
pub const ARTICLE_TEMPLATE: &str = "article";
pub const LISTING_TEMPLATE: &str = "listing";
pub const TOPICS_TEMPLATE: &str = "topics";

/// Failure inside a template engine.
#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("no template named [{0}]")]
    Missing(String),
    #[error("template [{template}] cannot render a [{kind}] page")]
    Mismatch {
        template: String,
        kind: &'static str,
    },
}

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("unsupported rendering type [{0}]")]
    UnsupportedType(String),
    #[error("invalid page model: {0}")]
    InvalidModel(#[from] serde_json::Error),
    #[error("failed to render template [{template}] ({source}) with data: {data}")]
    RenderingFailure {
        template: &'static str,
        data: String,
        #[source]
        source: TemplateError,
    },
    #[error("template [{0}] rendered no content (template must not have been provided)")]
    EmptyOutput(&'static str),
}

pub trait Renderer {
    fn render(&self, page: &PageModel) -> Result<String, RenderError>;

    /// Render a zero value of every page variant. Any error or empty output
    /// means a required template is absent.
    fn validate(&self) -> Result<(), RenderError> {
        for page in PageModel::zero_values() {
            if self.render(&page)?.trim().is_empty() {
                return Err(RenderError::EmptyOutput(template_for(&page)));
            }
        }
        Ok(())
    }
}

impl<R: Renderer + ?Sized> Renderer for &R {
    fn render(&self, page: &PageModel) -> Result<String, RenderError> {
        (**self).render(page)
    }

    fn validate(&self) -> Result<(), RenderError> {
        (**self).validate()
    }
}

impl<R: Renderer + ?Sized> Renderer for Box<R> {
    fn render(&self, page: &PageModel) -> Result<String, RenderError> {
        (**self).render(page)
    }

    fn validate(&self) -> Result<(), RenderError> {
        (**self).validate()
    }
}

/// Executes a named template against a page model.
pub trait TemplateEngine {
    fn execute(&self, template: &str, page: &PageModel) -> Result<String, TemplateError>;
}

/// The template name a page model variant is rendered with.
pub fn template_for(page: &PageModel) -> &'static str {
    match page {
        PageModel::Home(_) => HOME_TEMPLATE,
        PageModel::Archives(_) => ARCHIVES_TEMPLATE,
        PageModel::Article(_) => ARTICLE_TEMPLATE,
        PageModel::Listing(_) => LISTING_TEMPLATE,
        PageModel::Topics(_) => TOPICS_TEMPLATE,
    }
}

#[derive(Debug)]
pub struct TemplateRenderer<E> {
    engine: E,
}

impl<E: TemplateEngine> TemplateRenderer<E> {
    pub fn new(engine: E) -> Self {
        Self { engine }
    }

    /// Render a page model given as JSON, dispatching on its `kind` tag.
    pub fn render_json(&self, value: serde_json::Value) -> Result<String, RenderError> {
        self.render(&parse_page_model(value)?)
    }
}

/// Decode a `kind`-tagged page model. An unknown or missing tag is
/// `UnsupportedType`; a known tag with bad fields is `InvalidModel`.
pub fn parse_page_model(value: serde_json::Value) -> Result<PageModel, RenderError> {
    let kind = value.get("kind").and_then(|k| k.as_str()).unwrap_or("");
    if !PageModel::KINDS.contains(&kind) {
        let name = if kind.is_empty() { "<untagged>" } else { kind };
        return Err(RenderError::UnsupportedType(name.to_string()));
    }
    Ok(serde_json::from_value(value)?)
}

impl<E: TemplateEngine> Renderer for TemplateRenderer<E> {
    fn render(&self, page: &PageModel) -> Result<String, RenderError> {
        let template = template_for(page);
        self.engine
            .execute(template, page)
            .map_err(|source| RenderError::RenderingFailure {
                template,
                data: format!("{page:?}"),
                source,
            })
    }
}

// ============================================================================
// Base path prefixing
// ============================================================================

/// Root-relative `href`/`src` attribute values; `//host` is excluded.
static ROOT_RELATIVE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(href|src)="/([^/])"#).expect("valid regex"));

/// Prefixes every root-relative link in the rendered output with a base
/// path, for sites served from a sub-directory.
#[derive(Debug)]
pub struct BasePathRenderer<R> {
    inner: R,
    base_path: String,
}

impl<R: Renderer> BasePathRenderer<R> {
    /// `base_path` is normalized to a leading slash and no trailing slash;
    /// an empty or `/` base path disables rewriting.
    pub fn new(inner: R, base_path: &str) -> Self {
        let trimmed = base_path.trim().trim_matches('/');
        let base_path = if trimmed.is_empty() {
            String::new()
        } else {
            format!("/{trimmed}")
        };
        Self { inner, base_path }
    }

    fn rewrite(&self, html: String) -> String {
        if self.base_path.is_empty() {
            return html;
        }
        ROOT_RELATIVE
            .replace_all(&html, |caps: &Captures| {
                format!("{}=\"{}/{}", &caps[1], self.base_path, &caps[2])
            })
            .into_owned()
    }
}

impl<R: Renderer> Renderer for BasePathRenderer<R> {
    fn render(&self, page: &PageModel) -> Result<String, RenderError> {
        self.inner.render(page).map(|html| self.rewrite(html))
    }
}
