use crate::config;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

/// What the next start restores.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionRecord {
    pub last_chapter: Option<u16>,
    pub reciter: Option<String>,
    pub country: Option<String>,
    #[serde(default)]
    pub saved_at: String,
}

impl SessionRecord {
    pub fn stamped(mut self) -> Self {
        self.saved_at = chrono::Utc::now().to_rfc3339();
        self
    }
}

fn session_path() -> Option<PathBuf> {
    config::config_root().map(|dir| dir.join("session.json"))
}

pub fn load_session() -> Option<SessionRecord> {
    load_session_from(&session_path()?)
}

pub fn load_session_from(path: &Path) -> Option<SessionRecord> {
    let data = fs::read(path).ok()?;
    serde_json::from_slice(&data).ok()
}

pub fn save_session(record: &SessionRecord) -> std::io::Result<()> {
    let path = session_path()
        .ok_or_else(|| std::io::Error::new(std::io::ErrorKind::NotFound, "no config dir"))?;
    save_session_to(&path, record)
}

pub fn save_session_to(path: &Path, record: &SessionRecord) -> std::io::Result<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    let mut f = fs::File::create(path)?;
    let s = serde_json::to_string_pretty(record).unwrap_or_else(|_| "{}".into());
    f.write_all(s.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_survives_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("session.json");
        let record = SessionRecord {
            last_chapter: Some(18),
            reciter: Some("3".into()),
            country: Some("JO".into()),
            saved_at: String::new(),
        }
        .stamped();
        save_session_to(&path, &record).unwrap();
        let loaded = load_session_from(&path).unwrap();
        assert_eq!(loaded, record);
        assert!(!loaded.saved_at.is_empty());
    }

    #[test]
    fn corrupt_session_is_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        fs::write(&path, "not json").unwrap();
        assert!(load_session_from(&path).is_none());
    }
}
