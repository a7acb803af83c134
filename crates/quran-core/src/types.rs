use serde::{Deserialize, Serialize};

use crate::strings;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum RevelationPlace {
    Meccan,
    #[serde(other)]
    Medinan,
}

impl RevelationPlace {
    pub fn label(self) -> &'static str {
        match self {
            RevelationPlace::Meccan => strings::MECCAN,
            RevelationPlace::Medinan => strings::MEDINAN,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChapterSummary {
    pub index: u16,
    pub name: String,
    pub english_name: String,
    pub english_translation: String,
    pub verse_count: u16,
    pub revelation_place: RevelationPlace,
}

impl ChapterSummary {
    /// "مكية - 7 آية"
    pub fn details(&self) -> String {
        format!(
            "{} - {} {}",
            self.revelation_place.label(),
            self.verse_count,
            strings::VERSES
        )
    }

    pub fn verse_count_label(&self) -> String {
        format!("{} {}", self.verse_count, strings::VERSES)
    }

    /// Transliterated name with the English meaning when the API sent one.
    pub fn english_label(&self) -> String {
        if self.english_translation.is_empty() {
            self.english_name.clone()
        } else {
            format!("{} ({})", self.english_name, self.english_translation)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verse {
    pub text: String,
    pub position: u16,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chapter {
    pub summary: ChapterSummary,
    pub verses: Vec<Verse>,
}

impl Chapter {
    pub fn heading(&self) -> String {
        format!(
            "{} {} ({})",
            strings::CHAPTER_PREFIX,
            self.summary.english_name,
            self.summary.name
        )
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Reciter {
    pub id: String,
    pub name: String,
    pub base_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Country {
    pub code: String,
    pub name: String,
    pub city: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PrayerTimes {
    pub fajr: String,
    pub dhuhr: String,
    pub asr: String,
    pub maghrib: String,
    pub isha: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleEntry {
    pub country_code: String,
    pub times: PrayerTimes,
}

impl ScheduleEntry {
    /// The five fixed rows, in prayer order.
    pub fn rows(&self) -> [(&'static str, &str); 5] {
        let t = &self.times;
        let [fajr, dhuhr, asr, maghrib, isha] = strings::PRAYER_NAMES;
        [
            (fajr, t.fajr.as_str()),
            (dhuhr, t.dhuhr.as_str()),
            (asr, t.asr.as_str()),
            (maghrib, t.maghrib.as_str()),
            (isha, t.isha.as_str()),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceKind {
    Azkar,
    Hadith,
}

impl ReferenceKind {
    pub fn file_name(self) -> &'static str {
        match self {
            ReferenceKind::Azkar => "azkar.toml",
            ReferenceKind::Hadith => "hadith.toml",
        }
    }

    pub fn load_failed_message(self) -> &'static str {
        match self {
            ReferenceKind::Azkar => strings::AZKAR_LOAD_FAILED,
            ReferenceKind::Hadith => strings::HADITH_LOAD_FAILED,
        }
    }
}

/// A devotional text: azkar carry a recitation frequency in `note`,
/// hadiths carry an authenticity grade.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReferenceText {
    pub body: String,
    pub citation: String,
    pub note: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_label_adds_translation() {
        let mut summary = ChapterSummary {
            index: 1,
            name: "سُورَةُ ٱلْفَاتِحَةِ".into(),
            english_name: "Al-Faatiha".into(),
            english_translation: "The Opening".into(),
            verse_count: 7,
            revelation_place: RevelationPlace::Meccan,
        };
        assert_eq!(summary.english_label(), "Al-Faatiha (The Opening)");
        assert_eq!(summary.details(), "مكية - 7 آية");
        summary.english_translation.clear();
        assert_eq!(summary.english_label(), "Al-Faatiha");
    }
}
