//! Persisted session state.
//!
//! Four opaque strings (selected body, theme, language, view mode) stored
//! as one small JSON document in the OS application-data directory. Read
//! once at startup (any problem falls back to defaults), written on every
//! change.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Session {
    pub planet: String,
    pub theme: String,
    pub language: String,
    pub view: String,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            planet: "Earth".to_string(),
            theme: "dark".to_string(),
            language: "en".to_string(),
            view: "form".to_string(),
        }
    }
}

pub fn default_session_path() -> Result<PathBuf> {
    let proj = ProjectDirs::from("", "", "solar_atlas")
        .context("Unable to determine OS app data directory")?;
    Ok(proj.data_local_dir().join("session.json"))
}

/// Loads the session, falling back to defaults when the file is missing or
/// unreadable. Startup must never fail on a bad session file; a corrupt one
/// is logged and replaced on the next save.
pub fn load(path: &Path) -> Session {
    match fs::read_to_string(path) {
        Ok(raw) => match serde_json::from_str(&raw) {
            Ok(session) => session,
            Err(err) => {
                log::warn!("ignoring corrupt session file {}: {err}", path.display());
                Session::default()
            }
        },
        Err(_) => Session::default(),
    }
}

pub fn save(path: &Path, session: &Session) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Unable to create directory: {}", parent.display()))?;
    }
    let json = serde_json::to_string_pretty(session).context("Unable to serialize session")?;
    fs::write(path, format!("{json}\n"))
        .with_context(|| format!("Unable to write session file: {}", path.display()))?;
    Ok(())
}
