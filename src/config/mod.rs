//! Configuration for krapp.
//!
//! Three layers combine, most specific last:
//!
//! 1. the compiled-in default (`Config::default()`),
//! 2. the user-global file `$XDG_CONFIG_HOME/krapp/config.yaml`
//!    (created with defaults on first run),
//! 3. an optional project-local `.krapp_config.yaml`.
//!
//! A layer overrides a field only when it sets it to a non-zero value.
//! Note creation code does not see `Config` directly; it consumes the narrow
//! capability traits in [`capability`].

pub mod capability;
mod model;
mod operations;
mod paths;


pub use capability::{ConfigAdapter, DailyNoteConfig, InboxNoteConfig, NoteRoot};
pub use model::{Config, Template};
pub use paths::ConfigPaths;
