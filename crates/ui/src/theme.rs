use quran_core::config::ThemeSettings;
use ratatui::prelude::Color;

// Tokyonight-inspired palette; tweak these to change header/footer colors.
const TN_BG: Color = Color::Rgb(26, 27, 38); // #1a1b26
const TN_BG_ALT: Color = Color::Rgb(31, 35, 53); // #1f2335
const TN_BG_STRONG: Color = Color::Rgb(65, 72, 104); // #414868
const TN_FG: Color = Color::Rgb(192, 202, 245); // #c0caf5
const TN_BLUE: Color = Color::Rgb(122, 162, 247); // #7aa2f7
const TN_GREEN: Color = Color::Rgb(158, 206, 106); // #9ece6a

#[derive(Clone, Debug, PartialEq)]
pub struct Theme {
    pub header_bg: Color,
    pub header_fg: Color,
    pub footer_bg: Color,
    pub footer_fg: Color,
    pub pad_bg: Color,
    /// Selected card, active tab, and verse markers.
    pub accent: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            header_bg: TN_BG_ALT,
            header_fg: TN_FG,
            footer_bg: TN_BG_STRONG,
            footer_fg: TN_BLUE,
            pad_bg: TN_BG,
            accent: TN_GREEN,
        }
    }
}

impl Theme {
    /// Preset by name, then individual color overrides.
    pub fn from_settings(settings: &ThemeSettings) -> Self {
        let mut theme = match settings.name.as_deref().map(str::to_lowercase).as_deref() {
            Some("gruvbox") => Theme {
                header_bg: Color::Yellow,
                header_fg: Color::Black,
                footer_bg: Color::Green,
                footer_fg: Color::Black,
                pad_bg: Color::DarkGray,
                accent: Color::Yellow,
            },
            Some("dracula") => Theme {
                header_bg: Color::Magenta,
                header_fg: Color::White,
                footer_bg: Color::Blue,
                footer_fg: Color::White,
                pad_bg: Color::DarkGray,
                accent: Color::Magenta,
            },
            Some("tokyonight") => Theme {
                header_bg: Color::Blue,
                header_fg: Color::White,
                footer_bg: Color::Cyan,
                footer_fg: Color::Black,
                pad_bg: Color::DarkGray,
                accent: Color::Cyan,
            },
            _ => Theme::default(),
        };
        let overrides = [
            (&settings.header_bg, &mut theme.header_bg),
            (&settings.header_fg, &mut theme.header_fg),
            (&settings.footer_bg, &mut theme.footer_bg),
            (&settings.footer_fg, &mut theme.footer_fg),
            (&settings.accent, &mut theme.accent),
        ];
        for (value, slot) in overrides {
            if let Some(color) = value.as_deref().and_then(parse_color) {
                *slot = color;
            }
        }
        theme
    }
}

fn parse_color(s: &str) -> Option<Color> {
    match s.to_lowercase().as_str() {
        "black" => Some(Color::Black),
        "red" => Some(Color::Red),
        "green" => Some(Color::Green),
        "yellow" => Some(Color::Yellow),
        "blue" => Some(Color::Blue),
        "magenta" => Some(Color::Magenta),
        "cyan" => Some(Color::Cyan),
        "white" => Some(Color::White),
        "gray" | "darkgray" => Some(Color::DarkGray),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preset_then_override() {
        let settings = ThemeSettings {
            name: Some("Dracula".into()),
            footer_fg: Some("black".into()),
            accent: Some("no-such-color".into()),
            ..ThemeSettings::default()
        };
        let theme = Theme::from_settings(&settings);
        assert_eq!(theme.header_bg, Color::Magenta);
        assert_eq!(theme.footer_fg, Color::Black);
        assert_eq!(theme.accent, Color::Magenta);
    }

    #[test]
    fn unknown_preset_is_default() {
        let settings = ThemeSettings {
            name: Some("solarized".into()),
            ..ThemeSettings::default()
        };
        assert_eq!(Theme::from_settings(&settings), Theme::default());
    }
}
