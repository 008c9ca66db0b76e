//! Locally cached preferences: the signed-in user's id and the chosen
//! location. Nothing else is persisted client-side.

use inventory_core::country::Country;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("session io: {0}")]
    Io(#[from] std::io::Error),

    #[error("session encode: {0}")]
    Encode(#[from] serde_json::Error),
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    pub code: String,
}

impl From<Country> for Location {
    fn from(country: Country) -> Self {
        Self {
            name: country.display_name().to_string(),
            code: country.code().to_string(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    #[serde(rename = "userId", default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(rename = "folkspace-location", default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
}

pub struct SessionStore {
    path: PathBuf,
    session: Session,
    dirty: bool,
}

impl SessionStore {
    /// Loads the session file. A missing file starts empty; an unreadable
    /// one is logged and ignored.
    pub fn open(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let session = match std::fs::read_to_string(&path) {
            Ok(raw) => serde_json::from_str(&raw).unwrap_or_else(|err| {
                tracing::warn!(
                    path = %path.display(),
                    error = %err,
                    "ignoring corrupt session file"
                );
                Session::default()
            }),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Session::default(),
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "cannot read session file");
                Session::default()
            }
        };
        Self {
            path,
            session,
            dirty: false,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn user_id(&self) -> Option<&str> {
        self.session.user_id.as_deref()
    }

    pub fn location(&self) -> Option<&Location> {
        self.session.location.as_ref()
    }

    pub fn set_user_id(&mut self, user_id: impl Into<String>) {
        self.session.user_id = Some(user_id.into());
        self.dirty = true;
    }

    pub fn set_location(&mut self, location: Location) {
        self.session.location = Some(location);
        self.dirty = true;
    }

    pub fn clear(&mut self) {
        self.session = Session::default();
        self.dirty = true;
    }

    /// True once a setter has run and the change has not been saved.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn save(&mut self) -> Result<(), SessionError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let raw = serde_json::to_string_pretty(&self.session)?;
        std::fs::write(&self.path, raw)?;
        self.dirty = false;
        Ok(())
    }

    /// Writes the file only when something changed since it was opened
    /// or last saved. Returns whether a write happened.
    pub fn save_if_dirty(&mut self) -> Result<bool, SessionError> {
        if !self.dirty {
            return Ok(false);
        }
        self.save()?;
        Ok(true)
    }
}
