//! Frontmatter mapping and its typed accessors.

use crate::error::{KrappError, Result};
use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone};
use serde::{Deserialize, Serialize};
use serde_yaml::Value;
use std::collections::BTreeMap;
use std::fmt::Display;

/// Key holding the note's creation date.
pub const CREATED_KEY: &str = "created";

/// Key holding the note's triage label.
pub const LABEL_KEY: &str = "label";

/// Format of the `created` field.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Frontmatter fields keyed by name.
///
/// Values keep their YAML types. A `BTreeMap` gives deterministic, key-sorted
/// serialization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FrontMatter(BTreeMap<String, Value>);

impl FrontMatter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode a YAML block. A blank or `null` block is an empty mapping.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::new());
        }
        let fields: Option<BTreeMap<String, Value>> = serde_yaml::from_str(yaml)
            .map_err(|e| KrappError::FrontMatterDecode(e.to_string()))?;
        Ok(Self(fields.unwrap_or_default()))
    }

    /// Encode as a YAML block (ends with a newline).
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(&self.0).map_err(|e| KrappError::FrontMatterEncode(e.to_string()))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Insert or replace a field.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    /// Copy every field of `fields` in, replacing existing keys.
    pub fn extend<'a, I>(&mut self, fields: I)
    where
        I: IntoIterator<Item = (&'a String, &'a Value)>,
    {
        for (key, value) in fields {
            self.0.insert(key.clone(), value.clone());
        }
    }

    /// Store `t` as the `created` date.
    ///
    /// The zero timestamp (the Unix epoch) is rejected.
    pub fn set_created<Tz>(&mut self, t: &DateTime<Tz>) -> Result<()>
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        if t.naive_utc() == NaiveDateTime::default() {
            return Err(KrappError::InvalidTime);
        }
        self.insert(CREATED_KEY, t.format(DATE_FORMAT).to_string());
        Ok(())
    }

    /// Read the `created` date.
    ///
    /// Accepts a `YYYY-MM-DD` string or a full RFC 3339 timestamp.
    pub fn created(&self) -> Result<NaiveDate> {
        match self.0.get(CREATED_KEY) {
            None => Err(KrappError::FieldMissing(CREATED_KEY.to_string())),
            Some(Value::String(s)) => parse_date(s),
            Some(_) => Err(KrappError::TypeMismatch {
                field: CREATED_KEY.to_string(),
                expected: "date string",
            }),
        }
    }

    /// Read the `label` string.
    pub fn label(&self) -> Result<&str> {
        match self.0.get(LABEL_KEY) {
            None => Err(KrappError::FieldMissing(LABEL_KEY.to_string())),
            Some(Value::String(s)) => Ok(s),
            Some(_) => Err(KrappError::TypeMismatch {
                field: LABEL_KEY.to_string(),
                expected: "string",
            }),
        }
    }
}

impl From<BTreeMap<String, Value>> for FrontMatter {
    fn from(fields: BTreeMap<String, Value>) -> Self {
        Self(fields)
    }
}

fn parse_date(s: &str) -> Result<NaiveDate> {
    let s = s.trim();
    NaiveDate::parse_from_str(s, DATE_FORMAT)
        .or_else(|_| DateTime::parse_from_rfc3339(s).map(|dt| dt.date_naive()))
        .map_err(|_| KrappError::InvalidDate(s.to_string()))
}
