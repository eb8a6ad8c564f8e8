//! Article metadata parsing.
//!
//! Turns the raw front-matter fields of one article into a validated
//! [`ArticleMetadata`]. Recognized keys:
//!
//! | Key     | Rule                                                        |
//! |---------|-------------------------------------------------------------|
//! | `title` | non-blank                                                   |
//! | `intro` | non-blank                                                   |
//! | `slug`  | lowercase, URL path needing no escaping, not only slashes   |
//! | `draft` | exactly `true` or `false`                                   |
//! | `date`  | `YYYY-MM-DD`                                                |
//! | `tags`  | whitespace-separated, each `[a-z0-9 -]+`                    |
//!
//! Unknown keys are ignored so the schema can grow. For each recognized key
//! the checks run in a fixed order: seen before → `Duplicate`, blank →
//! `Blank`, then the key-specific syntax. Parsing stops at the first error.

use crate::types::{ArticleMetadata, slug_path};
use chrono::NaiveDate;
use std::collections::BTreeSet;
use std::fmt;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MetadataError {
    #[error("article lacks metadata")]
    MissingMetadata,
    #[error("article lacks metadata divider")]
    MissingMetadataDivider,
    #[error("duplicate metadata {0}")]
    Duplicate(Field),
    #[error("blank metadata {0}")]
    Blank(Field),
    #[error("invalid metadata slug: [{0}]")]
    InvalidSlug(String),
    #[error("invalid metadata draft: [{0}]")]
    InvalidDraft(String),
    #[error("invalid metadata date: [{value}]: {source}")]
    InvalidDate {
        value: String,
        #[source]
        source: chrono::ParseError,
    },
    #[error("invalid metadata tags: [{0}]")]
    InvalidTags(String),
    #[error("front matter decode error: {0}")]
    Decode(#[from] toml::de::Error),
}

/// A recognized front-matter key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Title,
    Intro,
    Slug,
    Draft,
    Date,
    Tags,
}

impl Field {
    pub fn from_key(key: &str) -> Option<Field> {
        match key {
            "title" => Some(Field::Title),
            "intro" => Some(Field::Intro),
            "slug" => Some(Field::Slug),
            "draft" => Some(Field::Draft),
            "date" => Some(Field::Date),
            "tags" => Some(Field::Tags),
            _ => None,
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            Field::Title => "title",
            Field::Intro => "intro",
            Field::Slug => "slug",
            Field::Draft => "draft",
            Field::Date => "date",
            Field::Tags => "tags",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Single-use parser for one front-matter block.
#[derive(Debug, Default)]
pub struct MetadataParser {
    seen: BTreeSet<Field>,
    parsed: ArticleMetadata,
}

impl MetadataParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse fields in order, as produced by [`crate::frontmatter::fields`].
    pub fn parse<K, V>(
        mut self,
        fields: impl IntoIterator<Item = (K, V)>,
    ) -> Result<ArticleMetadata, MetadataError>
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        for (key, value) in fields {
            if let Some(field) = Field::from_key(key.as_ref()) {
                self.parse_field(field, value.as_ref().trim())?;
            }
        }
        Ok(self.parsed)
    }

    fn parse_field(&mut self, field: Field, value: &str) -> Result<(), MetadataError> {
        if !self.seen.insert(field) {
            return Err(MetadataError::Duplicate(field));
        }
        if value.is_empty() {
            return Err(MetadataError::Blank(field));
        }
        match field {
            Field::Title => self.parsed.title = value.to_string(),
            Field::Intro => self.parsed.intro = value.to_string(),
            Field::Slug => self.parsed.slug = parse_slug(value)?,
            Field::Draft => self.parsed.draft = parse_draft(value)?,
            Field::Date => self.parsed.date = Some(parse_date(value)?),
            Field::Tags => self.parsed.topics = parse_tags(value)?,
        }
        Ok(())
    }
}

fn parse_slug(value: &str) -> Result<String, MetadataError> {
    let invalid = || MetadataError::InvalidSlug(value.to_string());
    if value.to_lowercase() != value {
        return Err(invalid());
    }
    if !value.chars().all(is_path_char) {
        return Err(invalid());
    }
    if value.split('/').any(|segment| segment == "." || segment == "..") {
        return Err(invalid());
    }
    if slug_path(value).is_empty() {
        return Err(invalid());
    }
    Ok(value.to_string())
}

/// Characters a URL path may carry without percent-escaping (RFC 3986
/// `pchar` plus the segment separator).
fn is_path_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || "-._~!$&'()*+,;=:@/".contains(c)
}

fn parse_draft(value: &str) -> Result<bool, MetadataError> {
    match value {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(MetadataError::InvalidDraft(value.to_string())),
    }
}

fn parse_date(value: &str) -> Result<NaiveDate, MetadataError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|source| MetadataError::InvalidDate {
        value: value.to_string(),
        source,
    })
}

fn parse_tags(value: &str) -> Result<Vec<String>, MetadataError> {
    let tags: Vec<String> = value.split_whitespace().map(String::from).collect();
    if !tags.iter().all(|tag| is_valid_tag(tag)) {
        return Err(MetadataError::InvalidTags(value.to_string()));
    }
    Ok(tags)
}

fn is_valid_tag(tag: &str) -> bool {
    !tag.is_empty()
        && tag
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == ' ')
}
