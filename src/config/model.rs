//! Config struct definition and compiled-in defaults.

use serde::{Deserialize, Serialize};
use serde_yaml::Value;
use std::collections::BTreeMap;

/// Extra frontmatter fields merged into newly created notes.
pub type Template = BTreeMap<String, Value>;

/// One configuration layer, or the merged result of several.
///
/// Every field deserializes to its type's zero value when absent, so a
/// partial layer file only carries the fields it actually sets. Unknown
/// keys are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Root of the notes collection. `~` is expanded after merging.
    #[serde(default)]
    pub base_dir: String,

    /// Daily notes directory, relative to `base_dir`.
    #[serde(default)]
    pub daily_note_dir: String,

    /// Inbox directory, relative to `base_dir`.
    #[serde(default)]
    pub inbox_dir: String,

    /// Editor command used to open created notes.
    #[serde(default)]
    pub editor: String,

    /// Extra editor arguments, split shell-style.
    #[serde(default)]
    pub editor_option: String,

    /// Open the editor after every note creation, without `--edit`.
    #[serde(default)]
    pub with_always_open_editor: bool,

    #[serde(default)]
    pub daily_template: Template,

    #[serde(default)]
    pub inbox_template: Template,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_dir: "./notes".to_string(),
            daily_note_dir: "daily".to_string(),
            inbox_dir: "inbox".to_string(),
            editor: "vim".to_string(),
            editor_option: String::new(),
            with_always_open_editor: false,
            daily_template: default_daily_template(),
            inbox_template: default_inbox_template(),
        }
    }
}

pub(crate) fn default_daily_template() -> Template {
    let mut template = Template::new();
    template.insert("tags".to_string(), Value::Sequence(Vec::new()));
    template
}

pub(crate) fn default_inbox_template() -> Template {
    let mut template = Template::new();
    template.insert("tags".to_string(), Value::Sequence(Vec::new()));
    template.insert("status".to_string(), Value::from("new"));
    template
}
