use unicode_linebreak::{linebreaks, BreakOpportunity};
use unicode_segmentation::UnicodeSegmentation;

use crate::types::Chapter;

/// One wrapped row of the reader view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerseLine {
    pub text: String,
    pub verse: u16,
    /// First row of its verse.
    pub first: bool,
}

pub fn verse_marker(position: u16) -> String {
    format!("﴿{}﴾", position)
}

/// Wraps every verse to `width` columns, appending the verse marker to
/// the verse text before wrapping.
pub fn verse_lines(chapter: &Chapter, width: usize) -> Vec<VerseLine> {
    let mut out = Vec::new();
    for verse in &chapter.verses {
        let text = format!("{} {}", verse.text.trim(), verse_marker(verse.position));
        for (i, line) in wrap_text(&text, width).into_iter().enumerate() {
            out.push(VerseLine {
                text: line,
                verse: verse.position,
                first: i == 0,
            });
        }
    }
    out
}

pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut out = Vec::new();
    let mut line = String::new();
    let mut line_len = 0usize; // graphemes
    for token in text.split_whitespace() {
        for piece in split_long(token, width) {
            let piece_len = piece.graphemes(true).count();
            if line.is_empty() {
                line.push_str(&piece);
                line_len = piece_len;
            } else if line_len + 1 + piece_len <= width {
                line.push(' ');
                line.push_str(&piece);
                line_len += 1 + piece_len;
            } else {
                out.push(std::mem::take(&mut line));
                line.push_str(&piece);
                line_len = piece_len;
            }
        }
    }
    if !line.is_empty() {
        out.push(line);
    }
    out
}

// Tokens wider than the line break at linebreak opportunities first, then
// at grapheme boundaries.
fn split_long(token: &str, width: usize) -> Vec<String> {
    if token.graphemes(true).count() <= width {
        return vec![token.to_string()];
    }
    let mut parts = Vec::new();
    let mut start = 0usize;
    for (idx, opp) in linebreaks(token) {
        if matches!(opp, BreakOpportunity::Mandatory | BreakOpportunity::Allowed) && idx > start {
            parts.push(&token[start..idx]);
            start = idx;
        }
    }
    if start < token.len() {
        parts.push(&token[start..]);
    }
    let mut out = Vec::new();
    for part in parts {
        let graphemes: Vec<&str> = part.graphemes(true).collect();
        for chunk in graphemes.chunks(width) {
            out.push(chunk.concat());
        }
    }
    out
}

/// Cuts `text` to at most `max` graphemes, ending with `…` when cut.
pub fn truncate_graphemes(text: &str, max: usize) -> String {
    let count = text.graphemes(true).count();
    if count <= max {
        return text.to_string();
    }
    if max == 0 {
        return String::new();
    }
    let mut out: String = text.graphemes(true).take(max - 1).collect();
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ChapterSummary, RevelationPlace, Verse};

    fn chapter() -> Chapter {
        Chapter {
            summary: ChapterSummary {
                index: 112,
                name: "سُورَةُ الإِخْلَاصِ".into(),
                english_name: "Al-Ikhlaas".into(),
                english_translation: "Sincerity".into(),
                verse_count: 2,
                revelation_place: RevelationPlace::Meccan,
            },
            verses: vec![
                Verse {
                    text: "قُلْ هُوَ ٱللَّهُ أَحَدٌ".into(),
                    position: 1,
                },
                Verse {
                    text: "ٱللَّهُ ٱلصَّمَدُ".into(),
                    position: 2,
                },
            ],
        }
    }

    #[test]
    fn wraps_on_whitespace_within_width() {
        let lines = wrap_text("one two three four", 9);
        assert_eq!(lines, vec!["one two", "three", "four"]);
        for line in &lines {
            assert!(line.graphemes(true).count() <= 9);
        }
    }

    #[test]
    fn long_token_is_split() {
        let lines = wrap_text("abcdefghij", 4);
        assert_eq!(lines, vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn verses_end_with_marker() {
        let lines = verse_lines(&chapter(), 80);
        assert_eq!(lines.len(), 2);
        assert!(lines[0].first);
        assert_eq!(lines[0].verse, 1);
        assert!(lines[0].text.ends_with("﴿1﴾"));
        assert!(lines[1].text.ends_with("﴿2﴾"));
    }

    #[test]
    fn narrow_width_keeps_verse_numbers() {
        let lines = verse_lines(&chapter(), 6);
        assert!(lines.len() > 2);
        assert!(lines.iter().filter(|l| l.first).count() == 2);
        assert!(lines.iter().all(|l| l.verse == 1 || l.verse == 2));
    }

    #[test]
    fn truncates_with_ellipsis() {
        assert_eq!(truncate_graphemes("Al-Baqara", 5), "Al-B…");
        assert_eq!(truncate_graphemes("Taha", 5), "Taha");
    }
}
