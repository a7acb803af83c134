use std::{fs, path::Path, path::PathBuf};

use directories::ProjectDirs;
use serde::Deserialize;
use thiserror::Error;
use tracing::warn;

use crate::{api, engagement, strings};

pub const QUALIFIER: &str = "com";
pub const ORGANIZATION: &str = "tilawa";
pub const APPLICATION: &str = "tilawa";

pub fn config_root() -> Option<PathBuf> {
    ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION).map(|p| p.config_dir().to_path_buf())
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("config parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Settings {
    pub api: ApiSettings,
    pub overlay: OverlaySettings,
    pub share: ShareSettings,
    pub player: PlayerSettings,
    pub theme: ThemeSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiSettings {
    pub base_url: String,
    pub edition: String,
    pub timeout_secs: u64,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: api::DEFAULT_BASE_URL.to_string(),
            edition: api::DEFAULT_EDITION.to_string(),
            timeout_secs: 15,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OverlaySettings {
    pub every: u64,
    pub auto_close_secs: u64,
    pub message: String,
}

impl Default for OverlaySettings {
    fn default() -> Self {
        Self {
            every: engagement::DEFAULT_EVERY,
            auto_close_secs: engagement::DEFAULT_AUTO_CLOSE.as_secs(),
            message: format!("{}\n\n{}", strings::SHARE_TITLE, strings::SHARE_TEXT),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ShareSettings {
    pub title: String,
    pub text: String,
    pub url: String,
}

impl Default for ShareSettings {
    fn default() -> Self {
        Self {
            title: strings::SHARE_TITLE.to_string(),
            text: strings::SHARE_TEXT.to_string(),
            url: "https://alquran.cloud".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PlayerSettings {
    pub mpv_path: String,
}

impl Default for PlayerSettings {
    fn default() -> Self {
        Self {
            mpv_path: "mpv".to_string(),
        }
    }
}

/// Preset name plus per-color overrides; colors are parsed by the UI.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct ThemeSettings {
    pub name: Option<String>,
    pub header_bg: Option<String>,
    pub header_fg: Option<String>,
    pub footer_bg: Option<String>,
    pub footer_fg: Option<String>,
    pub accent: Option<String>,
}

pub fn load_settings_from(path: &Path) -> Result<Settings, ConfigError> {
    let text = fs::read_to_string(path)?;
    Ok(toml::from_str(&text)?)
}

/// `config.toml` under the config root; defaults when absent or broken.
pub fn load_settings() -> Settings {
    let Some(path) = config_root().map(|dir| dir.join("config.toml")) else {
        return Settings::default();
    };
    if !path.is_file() {
        return Settings::default();
    }
    match load_settings_from(&path) {
        Ok(settings) => settings,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "ignoring unreadable config");
            Settings::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            "[overlay]\nevery = 5\n\n[theme]\nname = \"dracula\"\nfooter_fg = \"white\"\n",
        )
        .unwrap();
        let settings = load_settings_from(&path).unwrap();
        assert_eq!(settings.overlay.every, 5);
        assert_eq!(settings.overlay.auto_close_secs, 10);
        assert_eq!(settings.api.base_url, api::DEFAULT_BASE_URL);
        assert_eq!(settings.api.edition, "ar.alafasy");
        assert_eq!(settings.theme.name.as_deref(), Some("dracula"));
        assert_eq!(settings.theme.footer_fg.as_deref(), Some("white"));
        assert_eq!(settings.player.mpv_path, "mpv");
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[api\nbase_url = 3").unwrap();
        assert!(matches!(load_settings_from(&path), Err(ConfigError::Toml(_))));
    }
}
