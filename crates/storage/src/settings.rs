use std::{io, path::PathBuf};

use forma_domain::Settings;

/// Search settings persisted as a JSON file.
pub struct SettingsFile {
    path: PathBuf,
}

impl SettingsFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn read(&self) -> Result<Settings, SettingsError> {
        match std::fs::read_to_string(&self.path) {
            Ok(json) => Ok(serde_json::from_str(&json)?),
            Err(err) => match err.kind() {
                io::ErrorKind::NotFound => Ok(Settings::default()),
                _ => Err(err.into()),
            },
        }
    }

    pub fn write(&self, settings: &Settings) -> Result<(), SettingsError> {
        std::fs::write(&self.path, serde_json::to_string_pretty(settings)?)?;
        Ok(())
    }
}

#[derive(thiserror::Error, Debug)]
pub enum SettingsError {
    #[error("failed to access settings: {0}")]
    Io(#[from] io::Error),
    #[error("invalid settings: {0}")]
    Json(#[from] serde_json::Error),
}
