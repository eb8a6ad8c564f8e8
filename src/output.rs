//! CLI output formatting for build and check runs.
//!
//! # Information-First Display
//!
//! Every published article leads with its positional index and title, with
//! the output location and metadata shown as indented context lines. Dropped
//! articles and errors follow in their own sections, so the output doubles as
//! an inventory of the site.
//!
//! # Output Format
//!
//! ## Build
//!
//! ```text
//! Articles
//! 001 Hello → hello/index.html
//!     Date: 2023-07-07
//!     Topics: rust, go
//! 002 Second → notes/second/index.html
//!     Date: 2023-07-09
//!
//! Dropped
//! 001 /draft (DRAFT)
//!
//! Errors
//! 001 [content/bad.md] invalid metadata slug: [/Bad]
//!
//! Built 4 articles: 2 published, 1 dropped, 1 error
//! ```
//!
//! `check` prints the same sections without output locations.
//!
//! # Architecture
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format functions
//! are pure: no I/O, no side effects.

use crate::pipeline::Report;
use crate::types::RenderedArticleSummary;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}

/// Output location of an article relative to the output root.
fn article_location(slug: &str) -> String {
    let trimmed = slug.trim_matches('/');
    if trimmed.is_empty() {
        "index.html".to_string()
    } else {
        format!("{trimmed}/index.html")
    }
}

fn article_lines(index: usize, article: &RenderedArticleSummary, with_location: bool) -> Vec<String> {
    let header = if with_location {
        format!(
            "{} {} → {}",
            format_index(index),
            article.title,
            article_location(&article.slug)
        )
    } else {
        format!("{} {} ({})", format_index(index), article.title, article.slug)
    };
    let mut lines = vec![header];
    lines.push(format!("{}Date: {}", indent(1), article.date.format("%Y-%m-%d")));
    if !article.topics.is_empty() {
        lines.push(format!("{}Topics: {}", indent(1), article.topics.join(", ")));
    }
    if article.draft {
        lines.push(format!("{}Draft", indent(1)));
    }
    lines
}

fn format_report(report: &Report, verb: &str, with_location: bool) -> Vec<String> {
    let mut lines = Vec::new();

    if !report.published.is_empty() {
        lines.push("Articles".to_string());
        for (i, article) in report.published.iter().enumerate() {
            lines.extend(article_lines(i + 1, article, with_location));
        }
        lines.push(String::new());
    }

    if !report.dropped.is_empty() {
        lines.push("Dropped".to_string());
        for (i, reason) in report.dropped.iter().enumerate() {
            lines.push(format!("{} {}", format_index(i + 1), reason));
        }
        lines.push(String::new());
    }

    if !report.errors.is_empty() {
        lines.push("Errors".to_string());
        for (i, error) in report.errors.iter().enumerate() {
            lines.push(format!("{} {}", format_index(i + 1), error));
        }
        lines.push(String::new());
    }

    lines.push(format!(
        "{} {}: {} published, {} dropped, {}",
        verb,
        plural(report.discovered, "article"),
        report.published.len(),
        report.dropped.len(),
        plural(report.errors.len(), "error"),
    ));
    lines
}

// ============================================================================
// Build output
// ============================================================================

pub fn format_build_output(report: &Report) -> Vec<String> {
    format_report(report, "Built", true)
}

pub fn print_build_output(report: &Report) {
    for line in format_build_output(report) {
        println!("{}", line);
    }
}

// ============================================================================
// Check output
// ============================================================================

pub fn format_check_output(report: &Report) -> Vec<String> {
    format_report(report, "Checked", false)
}

pub fn print_check_output(report: &Report) {
    for line in format_check_output(report) {
        println!("{}", line);
    }
}
