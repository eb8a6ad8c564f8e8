//! Built-in HTML templates.
//!
//! Every page shape has one compiled-in template, written with
//! [maud](https://maud.lambda.xyz/) so templates are type-checked Rust with
//! automatic escaping. Article bodies are the only pre-escaped content.
//!
//! ## Generated Pages
//!
//! - **Home** (`/index.html`): latest articles and the most used topics
//! - **Archives** (`/archives/index.html`): every article, newest first
//! - **Article** (`/{slug}/index.html`): one article body
//! - **Listing** (`/topics/{topic}/index.html`): articles sharing a topic
//! - **Topics** (`/topics/index.html`): every topic with its article count
//!
//! All links are root-relative, so a [`crate::render::BasePathRenderer`] can
//! relocate the whole site under a sub-directory.

use crate::config::SiteConfig;
use crate::render::{
    ARCHIVES_TEMPLATE, ARTICLE_TEMPLATE, HOME_TEMPLATE, LISTING_TEMPLATE, TOPICS_TEMPLATE,
    TemplateEngine, TemplateError,
};
use crate::types::{
    PageModel, RenderedArchivesPage, RenderedArticle, RenderedArticleSummary, RenderedHomePage,
    RenderedListPage, RenderedTopicsListing, article_href, topic_href,
};
use chrono::NaiveDate;
use maud::{DOCTYPE, Markup, PreEscaped, html};

const CSS: &str = include_str!("../static/style.css");

/// The compiled-in template set.
#[derive(Debug, Clone)]
pub struct BuiltinTemplates {
    site_title: String,
    author: String,
}

impl BuiltinTemplates {
    pub fn new(config: &SiteConfig) -> Self {
        Self {
            site_title: config.title.clone(),
            author: config.author.clone(),
        }
    }

    fn home(&self, page: &RenderedHomePage) -> Markup {
        let content = html! {
            main.home-page {
                (article_list(&page.pages))
                p { a href="/archives/" { "All articles" } }
                @if !page.prominent_topics.is_empty() {
                    section.prominent-topics {
                        h2 { "Topics" }
                        (topic_links(&page.prominent_topics))
                    }
                }
            }
        };
        self.base_document(&self.site_title, None, content)
    }

    fn archives(&self, page: &RenderedArchivesPage) -> Markup {
        let content = html! {
            main.archives-page {
                h1 { "Archives" }
                (article_list(&page.pages))
            }
        };
        self.base_document("Archives", None, content)
    }

    fn article(&self, page: &RenderedArticle) -> Markup {
        let content = html! {
            main.article-page {
                article {
                    h1 { (page.title) }
                    p.meta {
                        (date_tag(page.date))
                        @if page.draft { " " span.draft { "draft" } }
                    }
                    @if !page.intro.is_empty() {
                        p.intro { (page.intro) }
                    }
                    div.article-body {
                        (PreEscaped(&page.content))
                    }
                    @if !page.topics.is_empty() {
                        footer { (topic_links(&page.topics)) }
                    }
                }
            }
        };
        self.base_document(&page.title, Some("article-view"), content)
    }

    fn listing(&self, page: &RenderedListPage) -> Markup {
        let content = html! {
            main.listing-page {
                h1 { (page.title) }
                @if let Some(latest) = &page.latest_article {
                    p.latest {
                        "Latest: "
                        a href=(article_href(&latest.slug)) { (latest.title) }
                    }
                }
                (article_list(&page.pages))
                @if !page.prominent_topics.is_empty() {
                    section.prominent-topics {
                        h2 { "Related topics" }
                        (topic_links(&page.prominent_topics))
                    }
                }
            }
        };
        self.base_document(&page.title, None, content)
    }

    fn topics(&self, page: &RenderedTopicsListing) -> Markup {
        let content = html! {
            main.topics-page {
                h1 { "Topics" }
                ul.topic-list {
                    @for topic in &page.topics {
                        li {
                            a href=(topic.href) { (topic.name) }
                            " (" (topic.count) ")"
                        }
                    }
                }
            }
        };
        self.base_document("Topics", None, content)
    }

    /// Renders the base HTML document structure
    fn base_document(&self, title: &str, body_class: Option<&str>, content: Markup) -> Markup {
        let full_title = if title.is_empty() || title == self.site_title {
            self.site_title.clone()
        } else {
            format!("{title} | {}", self.site_title)
        };
        html! {
            (DOCTYPE)
            html lang="en" {
                head {
                    meta charset="UTF-8";
                    meta name="viewport" content="width=device-width, initial-scale=1.0";
                    title { (full_title) }
                    style { (PreEscaped(CSS)) }
                }
                body class=[body_class] {
                    (self.site_header())
                    (content)
                    @if !self.author.is_empty() {
                        footer.site-footer { p { "By " (self.author) } }
                    }
                }
            }
        }
    }

    fn site_header(&self) -> Markup {
        html! {
            header.site-header {
                a.site-title href="/" { (self.site_title) }
                nav.site-nav {
                    a href="/archives/" { "Archives" }
                    a href="/topics/" { "Topics" }
                }
            }
        }
    }
}

impl TemplateEngine for BuiltinTemplates {
    fn execute(&self, template: &str, page: &PageModel) -> Result<String, TemplateError> {
        let markup = match (template, page) {
            (HOME_TEMPLATE, PageModel::Home(p)) => self.home(p),
            (ARCHIVES_TEMPLATE, PageModel::Archives(p)) => self.archives(p),
            (ARTICLE_TEMPLATE, PageModel::Article(p)) => self.article(p),
            (LISTING_TEMPLATE, PageModel::Listing(p)) => self.listing(p),
            (TOPICS_TEMPLATE, PageModel::Topics(p)) => self.topics(p),
            (
                HOME_TEMPLATE | ARCHIVES_TEMPLATE | ARTICLE_TEMPLATE | LISTING_TEMPLATE
                | TOPICS_TEMPLATE,
                _,
            ) => {
                return Err(TemplateError::Mismatch {
                    template: template.to_string(),
                    kind: page.kind(),
                });
            }
            _ => return Err(TemplateError::Missing(template.to_string())),
        };
        Ok(markup.into_string())
    }
}

// ============================================================================
// HTML Components
// ============================================================================

fn article_list(pages: &[RenderedArticleSummary]) -> Markup {
    html! {
        ul.article-list {
            @for page in pages {
                li {
                    a href=(article_href(&page.slug)) { (page.title) }
                    " " (date_tag(page.date))
                    @if !page.intro.is_empty() {
                        p.intro { (page.intro) }
                    }
                }
            }
        }
    }
}

fn topic_links(topics: &[String]) -> Markup {
    html! {
        nav.topics {
            @for topic in topics {
                a href=(topic_href(topic)) { (topic) }
            }
        }
    }
}

fn date_tag(date: NaiveDate) -> Markup {
    let iso = date.format("%Y-%m-%d").to_string();
    html! {
        time datetime=(iso) { (iso) }
    }
}
