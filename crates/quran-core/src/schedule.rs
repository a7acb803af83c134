use std::collections::HashMap;

use tracing::debug;

use crate::data::{DataError, ScheduleFile};
use crate::types::{Country, ScheduleEntry};

pub const DEFAULT_COUNTRY: &str = "SA";

/// Fixed display times per country. No date or location math happens here.
pub struct ScheduleTable {
    countries: Vec<Country>,
    entries: HashMap<String, ScheduleEntry>,
    fallback: ScheduleEntry,
    current: String,
}

impl ScheduleTable {
    pub fn from_file(file: ScheduleFile) -> Result<Self, DataError> {
        let Some(default_times) = file.times.get(&file.default).cloned() else {
            return Err(DataError::MissingDefault(file.default));
        };
        let fallback = ScheduleEntry {
            country_code: file.default.clone(),
            times: default_times,
        };
        let entries = file
            .times
            .into_iter()
            .map(|(code, times)| {
                let entry = ScheduleEntry {
                    country_code: code.clone(),
                    times,
                };
                (code, entry)
            })
            .collect();
        Ok(Self {
            countries: file.country,
            entries,
            fallback,
            current: file.default,
        })
    }

    pub fn countries(&self) -> &[Country] {
        &self.countries
    }

    /// Unknown codes fall back to the default country's entry.
    pub fn lookup(&self, code: &str) -> &ScheduleEntry {
        self.entries.get(code).unwrap_or(&self.fallback)
    }

    pub fn show(&mut self, code: &str) -> &ScheduleEntry {
        debug!(code, "showing prayer times");
        self.current = code.to_string();
        self.lookup(code)
    }

    pub fn current(&self) -> &ScheduleEntry {
        self.lookup(&self.current)
    }

    pub fn current_code(&self) -> &str {
        &self.current
    }

    pub fn current_country(&self) -> Option<&Country> {
        self.countries.iter().find(|c| c.code == self.current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::DataStore;

    fn table() -> ScheduleTable {
        ScheduleTable::from_file(DataStore::embedded().schedule().unwrap()).unwrap()
    }

    #[test]
    fn unknown_code_matches_default() {
        let t = table();
        assert_eq!(t.lookup("ZZ").times, t.lookup("SA").times);
        assert_eq!(t.lookup("").times, t.lookup("SA").times);
    }

    #[test]
    fn shows_five_rows_for_country() {
        let mut t = table();
        let entry = t.show("EG");
        let rows = entry.rows();
        assert_eq!(rows.len(), 5);
        assert_eq!(rows[0], ("الفجر", "4:00 ص"));
        assert_eq!(rows[4], ("العشاء", "7:45 م"));
        assert_eq!(t.current_code(), "EG");
        assert_eq!(t.current_country().map(|c| c.city.as_str()), Some("القاهرة"));
    }

    #[test]
    fn default_must_exist() {
        let mut file = DataStore::embedded().schedule().unwrap();
        file.default = "XX".into();
        assert!(matches!(
            ScheduleTable::from_file(file),
            Err(DataError::MissingDefault(code)) if code == "XX"
        ));
    }
}
