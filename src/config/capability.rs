//! Read-only views of the configuration consumed by note creation.

use super::model::{Config, Template};

/// Root of the notes collection.
pub trait NoteRoot {
    fn base_dir(&self) -> &str;
}

/// What the daily note factory needs to know.
pub trait DailyNoteConfig: NoteRoot {
    fn daily_note_dir(&self) -> &str;
    fn daily_template(&self) -> &Template;
}

/// What inbox note creation and imports need to know.
pub trait InboxNoteConfig: NoteRoot {
    fn inbox_dir(&self) -> &str;
    fn inbox_template(&self) -> &Template;
}

/// Thin adapter exposing a loaded [`Config`] through the capability traits.
#[derive(Debug, Clone, Copy)]
pub struct ConfigAdapter<'a> {
    config: &'a Config,
}

impl<'a> ConfigAdapter<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }
}

impl NoteRoot for ConfigAdapter<'_> {
    fn base_dir(&self) -> &str {
        &self.config.base_dir
    }
}

impl DailyNoteConfig for ConfigAdapter<'_> {
    fn daily_note_dir(&self) -> &str {
        &self.config.daily_note_dir
    }

    fn daily_template(&self) -> &Template {
        &self.config.daily_template
    }
}

impl InboxNoteConfig for ConfigAdapter<'_> {
    fn inbox_dir(&self) -> &str {
        &self.config.inbox_dir
    }

    fn inbox_template(&self) -> &Template {
        &self.config.inbox_template
    }
}
