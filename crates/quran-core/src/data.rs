//! Static tables: compiled-in TOML that a file of the same name in the
//! config directory replaces.

use std::{
    borrow::Cow,
    collections::HashMap,
    fs,
    path::PathBuf,
};

use serde::Deserialize;
use thiserror::Error;
use tracing::info;

use crate::types::{Country, PrayerTimes, Reciter, ReferenceKind, ReferenceText};

const RECITERS: &str = include_str!("../data/reciters.toml");
const SCHEDULE: &str = include_str!("../data/schedule.toml");
const AZKAR: &str = include_str!("../data/azkar.toml");
const HADITH: &str = include_str!("../data/hadith.toml");

#[derive(Debug, Error)]
pub enum DataError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("{file}: {source}")]
    Toml {
        file: &'static str,
        #[source]
        source: toml::de::Error,
    },
    #[error("schedule has no entry for default country {0}")]
    MissingDefault(String),
}

#[derive(Deserialize)]
struct RecitersFile {
    reciter: Vec<Reciter>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScheduleFile {
    #[serde(default = "default_country")]
    pub default: String,
    #[serde(default)]
    pub country: Vec<Country>,
    pub times: HashMap<String, PrayerTimes>,
}

fn default_country() -> String {
    crate::schedule::DEFAULT_COUNTRY.to_string()
}

#[derive(Deserialize)]
struct ReferenceFile {
    #[serde(default)]
    entry: Vec<ReferenceText>,
}

#[derive(Debug, Clone, Default)]
pub struct DataStore {
    dir: Option<PathBuf>,
}

impl DataStore {
    pub fn embedded() -> Self {
        Self { dir: None }
    }

    pub fn with_overrides(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: Some(dir.into()),
        }
    }

    pub fn reciters(&self) -> Result<Vec<Reciter>, DataError> {
        let text = self.read("reciters.toml", RECITERS)?;
        let file: RecitersFile = parse("reciters.toml", &text)?;
        Ok(file.reciter)
    }

    pub fn schedule(&self) -> Result<ScheduleFile, DataError> {
        let text = self.read("schedule.toml", SCHEDULE)?;
        parse("schedule.toml", &text)
    }

    pub fn references(&self, kind: ReferenceKind) -> Result<Vec<ReferenceText>, DataError> {
        let embedded = match kind {
            ReferenceKind::Azkar => AZKAR,
            ReferenceKind::Hadith => HADITH,
        };
        let name = kind.file_name();
        let text = self.read(name, embedded)?;
        let file: ReferenceFile = parse(name, &text)?;
        Ok(file.entry)
    }

    fn read(&self, name: &'static str, embedded: &'static str) -> Result<Cow<'static, str>, DataError> {
        if let Some(dir) = &self.dir {
            let path = dir.join(name);
            if path.is_file() {
                info!(path = %path.display(), "using data override");
                return Ok(Cow::Owned(fs::read_to_string(path)?));
            }
        }
        Ok(Cow::Borrowed(embedded))
    }
}

fn parse<T: for<'de> Deserialize<'de>>(file: &'static str, text: &str) -> Result<T, DataError> {
    toml::from_str(text).map_err(|source| DataError::Toml { file, source })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_tables_parse() {
        let store = DataStore::embedded();
        let reciters = store.reciters().unwrap();
        assert_eq!(reciters.len(), 5);
        assert_eq!(reciters[0].base_url, "https://server8.mp3quran.net/afs");
        let schedule = store.schedule().unwrap();
        assert_eq!(schedule.default, "SA");
        assert_eq!(schedule.country.len(), 10);
        assert_eq!(schedule.times.len(), 10);
        assert_eq!(store.references(ReferenceKind::Azkar).unwrap().len(), 4);
        assert_eq!(store.references(ReferenceKind::Hadith).unwrap().len(), 4);
    }

    #[test]
    fn override_file_replaces_embedded_table() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("hadith.toml"),
            "[[entry]]\nbody = \"نص\"\ncitation = \"مصدر\"\nnote = \"صحيح\"\n",
        )
        .unwrap();
        let store = DataStore::with_overrides(dir.path());
        let hadith = store.references(ReferenceKind::Hadith).unwrap();
        assert_eq!(hadith.len(), 1);
        assert_eq!(hadith[0].citation, "مصدر");
        // Tables without an override still come from the binary.
        assert_eq!(store.references(ReferenceKind::Azkar).unwrap().len(), 4);
    }

    #[test]
    fn malformed_override_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("reciters.toml"), "[[reciter]]\nid = 1\n").unwrap();
        let store = DataStore::with_overrides(dir.path());
        let err = store.reciters().unwrap_err();
        assert!(matches!(err, DataError::Toml { file: "reciters.toml", .. }));
    }
}
