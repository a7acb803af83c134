#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Quran,
    Reader,
    Audio,
    Prayer,
    Azkar,
    Hadith,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::Quran,
        Section::Reader,
        Section::Audio,
        Section::Prayer,
        Section::Azkar,
        Section::Hadith,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Section::Quran => "القرآن الكريم",
            Section::Reader => "القراءة",
            Section::Audio => "الاستماع",
            Section::Prayer => "مواقيت الصلاة",
            Section::Azkar => "الأدعية والأذكار",
            Section::Hadith => "الأحاديث",
        }
    }

    pub fn position(self) -> usize {
        Self::ALL.iter().position(|s| *s == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.position() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        Self::ALL[(self.position() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Which list has the cursor in the audio section.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AudioFocus {
    Reciters,
    Chapters,
}

/// A blocking message; any of Enter/Esc dismisses it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Alert {
    pub title: Option<String>,
    pub body: String,
}

impl Alert {
    pub fn new(body: impl Into<String>) -> Self {
        Self {
            title: None,
            body: body.into(),
        }
    }

    pub fn titled(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            body: body.into(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum SearchCommand {
    Cancel,
    Submit,
    Backspace,
    Insert(char),
    Up,
    Down,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum Command {
    Exit,
    Cancel,
    Submit,
    NextSection,
    PrevSection,
    GoTo(Section),
    NavigateUp,
    NavigateDown,
    NavigateLeft,
    NavigateRight,
    PageUp,
    PageDown,
    StartSearch,
    StartGlobalSearch,
    Play,
    TogglePause,
    Stop,
    Download,
    Share,
    ToggleHelp,
    CloseHelp,
    DismissAlert,
    DismissOverlay,
    Search(SearchCommand),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum CommandOutcome {
    Continue,
    Exit,
}
