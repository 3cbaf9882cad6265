//! Metadata helpers that derive frontmatter from a note's own text.

use super::{CREATED_KEY, Note};
use crate::error::{KrappError, Result};
use regex::Regex;
use std::sync::LazyLock;

static DATE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d{4}-\d{2}-\d{2}").expect("Invalid date regex"));

impl Note {
    /// Fill in `created` from the first `YYYY-MM-DD` in the file name, then
    /// in the content.
    ///
    /// Returns `Ok(false)` if `created` was already present.
    pub fn backfill_created(&mut self) -> Result<bool> {
        if self.frontmatter.contains_key(CREATED_KEY) {
            return Ok(false);
        }

        let from_name = self
            .file_path
            .as_deref()
            .and_then(|p| p.file_name())
            .and_then(|n| n.to_str())
            .and_then(|n| DATE_REGEX.find(n))
            .map(|m| m.as_str().to_string());

        let date = from_name
            .or_else(|| DATE_REGEX.find(&self.content).map(|m| m.as_str().to_string()))
            .ok_or_else(|| KrappError::FieldMissing(CREATED_KEY.to_string()))?;

        self.frontmatter.insert(CREATED_KEY, date);
        Ok(true)
    }
}
