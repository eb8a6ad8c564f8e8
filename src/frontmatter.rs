//! Front-matter splitting and raw field extraction.
//!
//! Two dialects share the same three-character divider:
//!
//! ```text
//! lines (default)             toml
//! ---------------             ----
//! title: Hello                +++
//! slug: /hello                title = "Hello"
//! date: 2023-07-07            slug = "/hello"
//! +++                         date = 2023-07-07
//! The body...                 tags = ["a", "b"]
//!                             +++
//!                             The body...
//! ```
//!
//! Both produce the same flat `(key, value)` pairs, which are then run
//! through [`crate::metadata::MetadataParser`] so every field rule applies
//! identically regardless of dialect.

use crate::metadata::MetadataError;
use serde::{Deserialize, Serialize};

pub const DIVIDER: &str = "+++";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    /// Flat `key: value` lines preceding the divider.
    #[default]
    Lines,
    /// A TOML table fenced by two dividers.
    Toml,
}

/// A source document cut at its divider(s). Borrowed; nothing is trimmed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Split<'a> {
    pub dialect: Dialect,
    pub front: &'a str,
    pub body: &'a str,
}

impl Split<'_> {
    /// Rebuild the exact source the split was taken from.
    pub fn reassemble(&self) -> String {
        match self.dialect {
            Dialect::Lines => format!("{}{DIVIDER}{}", self.front, self.body),
            Dialect::Toml => format!("{DIVIDER}{}{DIVIDER}{}", self.front, self.body),
        }
    }
}

/// Cut `source` at the first divider (or, for TOML, between the opening and
/// closing dividers). `None` when the divider is missing.
pub fn split(source: &str, dialect: Dialect) -> Option<Split<'_>> {
    let (front, body) = match dialect {
        Dialect::Lines => source.split_once(DIVIDER)?,
        Dialect::Toml => source.strip_prefix(DIVIDER)?.split_once(DIVIDER)?,
    };
    Some(Split {
        dialect,
        front,
        body,
    })
}

/// Raw `(key, value)` pairs from a front-matter block, in source order for
/// the line dialect and key order for TOML. Keys and values are trimmed.
pub fn fields(front: &str, dialect: Dialect) -> Result<Vec<(String, String)>, MetadataError> {
    match dialect {
        Dialect::Lines => Ok(line_fields(front)),
        Dialect::Toml => toml_fields(front),
    }
}

/// Split each line on its first `:`. Lines without a colon carry no field.
fn line_fields(front: &str) -> Vec<(String, String)> {
    front
        .lines()
        .filter_map(|line| line.split_once(':'))
        .map(|(key, value)| (key.trim().to_string(), value.trim().to_string()))
        .collect()
}

fn toml_fields(front: &str) -> Result<Vec<(String, String)>, MetadataError> {
    let table: toml::Table = toml::from_str(front)?;
    Ok(table
        .into_iter()
        .map(|(key, value)| (key, flatten(value)))
        .collect())
}

fn flatten(value: toml::Value) -> String {
    match value {
        toml::Value::String(s) => s.trim().to_string(),
        toml::Value::Array(items) => items
            .into_iter()
            .map(flatten)
            .collect::<Vec<_>>()
            .join(" "),
        other => other.to_string(),
    }
}
