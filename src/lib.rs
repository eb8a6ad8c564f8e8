//! # Huguinho
//!
//! A minimal static site generator for markdown articles. Each article is a
//! text file with a front-matter block followed by a markdown body; the site
//! is every article page plus a homepage, an archive, one page per topic and
//! an index of all topics.
//!
//! # Architecture: One Pass, Two Kinds of Handler
//!
//! ```text
//! content/*.md ──► chain (per article) ──► aggregators (per site page) ──► rendered/
//!
//!   read → convert → parse → validate      homepage       index.html
//!   → drafts → future → article page       archives       archives/index.html
//!                                          topic pages    topics/<topic>/index.html
//!                                          topics         topics/index.html
//! ```
//!
//! - **Chain handlers** ([`handlers`]) transform one mutable [`types::Article`]
//!   at a time. The first handler to record an error ends that article's
//!   trip; the run carries on with the next file.
//! - **Aggregators** ([`listing`]) see every article that survived the chain,
//!   accumulate what they need, and write a single page when finalized.
//!
//! Rendering goes through one entry point ([`render::Renderer`]) that maps
//! each [`types::PageModel`] variant to a template. The templates are
//! compiled in ([`templates`]) and checked once at startup, so a broken
//! template aborts the run before any article is read.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`types`] | `Article`, summaries and every page model |
//! | [`frontmatter`] | Divider, dialects, source splitting, raw field extraction |
//! | [`metadata`] | Front-matter field parsing and its error taxonomy |
//! | [`markdown`] | Markdown conversion capability (pulldown-cmark) |
//! | [`disk`] | Filesystem capability and article discovery |
//! | [`handlers`] | The per-article chain |
//! | [`leaderboard`] | Ranked topic counts |
//! | [`listing`] | Homepage, archives, topic pages and topics index |
//! | [`render`] | Template dispatch, startup validation, base-path rewriting |
//! | [`templates`] | Built-in HTML templates (maud) |
//! | [`config`] | `config.toml` loading, merging, validation; build options |
//! | [`pipeline`] | The driver and its run report |
//! | [`output`] | CLI output formatting |
//!
//! # Error Handling
//!
//! Setup problems (bad options, bad config, broken templates) are fatal.
//! Per-article problems are recorded on the article and reported at the end;
//! drafts and future-dated articles are *dropped*, which is reported apart
//! from defects. A failure writing one site page never stops the others.

pub mod config;
pub mod disk;
pub mod frontmatter;
pub mod handlers;
pub mod leaderboard;
pub mod listing;
pub mod markdown;
pub mod metadata;
pub mod output;
pub mod pipeline;
pub mod render;
pub mod templates;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
