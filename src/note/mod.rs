//! Note document model for krapp.
//!
//! A note is an optional YAML frontmatter block followed by a markdown body.
//! This module parses and serializes that format and provides file I/O on
//! top of it.
//!
//! # Note File Format
//!
//! ```text
//! ---
//! created: 2024-01-15
//! tags:
//! - journal
//! ---
//!
//! Body text...
//! ```
//!
//! A file that does not start with exactly `---\n` has no frontmatter; its
//! whole text is the body.

use crate::error::{KrappError, Result};
use std::path::PathBuf;

mod frontmatter;
mod io;
mod mutations;

pub use frontmatter::{CREATED_KEY, DATE_FORMAT, FrontMatter, LABEL_KEY};

/// Delimiter that opens and closes the frontmatter block.
const DELIMITER: &str = "---";

/// A parsed note with frontmatter, trimmed body, and optional backing file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Note {
    /// Metadata fields from the frontmatter block.
    pub frontmatter: FrontMatter,
    /// The markdown body with outer whitespace trimmed.
    pub content: String,
    /// Where the note lives on disk, if anywhere.
    pub file_path: Option<PathBuf>,
}

impl Note {
    /// Create an unsaved note at `path`.
    pub fn new(frontmatter: FrontMatter, content: impl Into<String>, path: PathBuf) -> Self {
        Self {
            frontmatter,
            content: content.into(),
            file_path: Some(path),
        }
    }

    /// Parse a note from its text.
    ///
    /// Text that does not begin with exactly `---\n` yields an empty frontmatter
    /// and the trimmed text as content. Otherwise the text is split on the
    /// literal `---` into at most three segments: the (empty) prefix, the
    /// YAML block, and the body. Fewer than three segments means the
    /// frontmatter was never closed.
    pub fn parse(raw: &str) -> Result<Self> {
        if !Self::opens_frontmatter(raw) {
            return Ok(Self {
                frontmatter: FrontMatter::new(),
                content: raw.trim().to_string(),
                file_path: None,
            });
        }

        let parts: Vec<&str> = raw.splitn(3, DELIMITER).collect();
        if parts.len() < 3 {
            return Err(KrappError::Format(
                "frontmatter is missing its closing '---' delimiter".to_string(),
            ));
        }

        let frontmatter = FrontMatter::from_yaml(parts[1])?;

        Ok(Self {
            frontmatter,
            content: parts[2].trim().to_string(),
            file_path: None,
        })
    }

    /// Render the note as file text.
    ///
    /// An empty frontmatter emits the content verbatim. Otherwise the YAML
    /// block is wrapped in `---` lines and separated from the content by a
    /// blank line.
    pub fn to_markdown(&self) -> Result<String> {
        if self.frontmatter.is_empty() {
            return Ok(self.content.clone());
        }

        let yaml = self.frontmatter.to_yaml()?;

        let mut output = String::with_capacity(yaml.len() + self.content.len() + 10);
        output.push_str(DELIMITER);
        output.push('\n');
        output.push_str(&yaml);
        output.push_str(DELIMITER);
        output.push('\n');
        output.push('\n');
        output.push_str(&self.content);

        Ok(output)
    }

    fn opens_frontmatter(raw: &str) -> bool {
        raw.strip_prefix(DELIMITER)
            .is_some_and(|rest| rest.starts_with('\n'))
    }
}
