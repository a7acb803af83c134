use serde::Deserialize;
use serde_json::Value;

use crate::types::{Chapter, ChapterSummary, RevelationPlace, Verse};

use super::ApiError;

#[derive(Deserialize)]
struct Envelope {
    code: u16,
    #[serde(default)]
    data: Value,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SurahWire {
    number: u16,
    name: String,
    english_name: String,
    #[serde(default)]
    english_name_translation: String,
    number_of_ayahs: u16,
    revelation_type: RevelationPlace,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SurahDetailWire {
    #[serde(flatten)]
    summary: SurahWire,
    ayahs: Vec<AyahWire>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct AyahWire {
    text: String,
    number_in_surah: u16,
}

impl From<SurahWire> for ChapterSummary {
    fn from(w: SurahWire) -> Self {
        ChapterSummary {
            index: w.number,
            name: w.name,
            english_name: w.english_name,
            english_translation: w.english_name_translation,
            verse_count: w.number_of_ayahs,
            revelation_place: w.revelation_type,
        }
    }
}

fn unwrap_envelope(body: &str) -> Result<Value, ApiError> {
    let envelope: Envelope = serde_json::from_str(body)?;
    if envelope.code != 200 {
        return Err(ApiError::Status(envelope.code));
    }
    if envelope.data.is_null() {
        return Err(ApiError::Empty);
    }
    Ok(envelope.data)
}

/// Decode the body of `GET /surah`.
pub fn parse_chapter_list(body: &str) -> Result<Vec<ChapterSummary>, ApiError> {
    let data = unwrap_envelope(body)?;
    let list: Vec<SurahWire> = serde_json::from_value(data)?;
    Ok(list.into_iter().map(ChapterSummary::from).collect())
}

/// Decode the body of `GET /surah/{n}/{edition}`.
pub fn parse_chapter(body: &str) -> Result<Chapter, ApiError> {
    let data = unwrap_envelope(body)?;
    let detail: SurahDetailWire = serde_json::from_value(data)?;
    let verses = detail
        .ayahs
        .into_iter()
        .map(|a| Verse {
            text: a.text,
            position: a.number_in_surah,
        })
        .collect();
    Ok(Chapter {
        summary: detail.summary.into(),
        verses,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const LIST: &str = r#"{
        "code": 200,
        "status": "OK",
        "data": [
            {"number": 1, "name": "سُورَةُ ٱلْفَاتِحَةِ", "englishName": "Al-Faatiha",
             "englishNameTranslation": "The Opening", "numberOfAyahs": 7, "revelationType": "Meccan"},
            {"number": 2, "name": "سُورَةُ البَقَرَةِ", "englishName": "Al-Baqara",
             "englishNameTranslation": "The Cow", "numberOfAyahs": 286, "revelationType": "Medinan"}
        ]
    }"#;

    #[test]
    fn parses_chapter_list() {
        let list = parse_chapter_list(LIST).unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list[0].index, 1);
        assert_eq!(list[0].english_name, "Al-Faatiha");
        assert_eq!(list[0].revelation_place, RevelationPlace::Meccan);
        assert_eq!(list[1].verse_count, 286);
        assert_eq!(list[1].revelation_place, RevelationPlace::Medinan);
    }

    #[test]
    fn unknown_revelation_type_reads_as_medinan() {
        let body = r#"{"code":200,"data":[{"number":9,"name":"x","englishName":"At-Tawba",
            "numberOfAyahs":129,"revelationType":"Unknown"}]}"#;
        let list = parse_chapter_list(body).unwrap();
        assert_eq!(list[0].revelation_place, RevelationPlace::Medinan);
        assert!(list[0].english_translation.is_empty());
    }

    #[test]
    fn parses_chapter_detail_in_order() {
        let body = r#"{"code":200,"status":"OK","data":{
            "number":112,"name":"سُورَةُ الإِخۡلَاصِ","englishName":"Al-Ikhlaas",
            "englishNameTranslation":"Sincerity","revelationType":"Meccan","numberOfAyahs":4,
            "ayahs":[
                {"number":6222,"text":"قُلۡ هُوَ ٱللَّهُ أَحَدٌ","numberInSurah":1},
                {"number":6223,"text":"ٱللَّهُ ٱلصَّمَدُ","numberInSurah":2}
            ]}}"#;
        let chapter = parse_chapter(body).unwrap();
        assert_eq!(chapter.summary.index, 112);
        assert_eq!(chapter.verses.len(), 2);
        assert_eq!(chapter.verses[0].position, 1);
        assert_eq!(chapter.verses[1].text, "ٱللَّهُ ٱلصَّمَدُ");
    }

    #[test]
    fn non_200_code_is_a_status_error() {
        let body = r#"{"code":404,"status":"NOT FOUND","data":"Surah not found"}"#;
        let err = parse_chapter(body).unwrap_err();
        assert!(matches!(err, ApiError::Status(404)));
        assert!(err.is_silent());
    }

    #[test]
    fn missing_data_is_empty() {
        let err = parse_chapter_list(r#"{"code":200}"#).unwrap_err();
        assert!(matches!(err, ApiError::Empty));
        assert!(err.is_silent());
    }

    #[test]
    fn malformed_body_is_decode_error() {
        let err = parse_chapter_list("<html>").unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }
}
