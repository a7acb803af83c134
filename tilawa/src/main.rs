use std::{fs, path::PathBuf, sync::Arc, sync::Mutex, time::Duration};

use anyhow::Context;
use directories::UserDirs;
use quran_core::{
    api::{HttpSource, ScriptureSource},
    config::{self, Settings},
    data::DataStore,
    engagement::EngagementOverlay,
    media::{DetachedElement, MediaElement, MpvElement},
    recitation::RecitationPlayer,
    schedule::ScheduleTable,
    share::{ShareFacilitator, SharePayload},
    state::{load_session, save_session},
};
use tracing::{error, info, warn};
use tracing_subscriber::{fmt, EnvFilter};
use ui::{
    app::{App, Components},
    clipboard::ArboardClipboard,
    theme::Theme,
};

fn main() -> anyhow::Result<()> {
    init_logging();
    let settings = config::load_settings();
    let store = match config::config_root() {
        Some(dir) => DataStore::with_overrides(dir),
        None => DataStore::embedded(),
    };

    let source: Arc<dyn ScriptureSource> = Arc::new(
        HttpSource::new(
            &settings.api.base_url,
            &settings.api.edition,
            Duration::from_secs(settings.api.timeout_secs),
        )
        .context("building HTTP client")?,
    );

    let reciters = store.reciters().or_else(|e| {
        warn!(error = %e, "reciter override unreadable; using built-in list");
        DataStore::embedded().reciters()
    })?;
    let player = RecitationPlayer::new(reciters, media_element(&settings));

    let schedule = store
        .schedule()
        .and_then(ScheduleTable::from_file)
        .or_else(|e| {
            warn!(error = %e, "schedule override unreadable; using built-in table");
            DataStore::embedded().schedule().and_then(ScheduleTable::from_file)
        })?;

    let overlay = EngagementOverlay::new(
        settings.overlay.every,
        Duration::from_secs(settings.overlay.auto_close_secs),
    );
    let share = ShareFacilitator::new(
        SharePayload {
            title: settings.share.title.clone(),
            text: settings.share.text.clone(),
            url: settings.share.url.clone(),
        },
        None,
        Some(Box::new(ArboardClipboard::new())),
    );

    let mut app = App::new(Components {
        source,
        player,
        schedule,
        overlay,
        overlay_message: settings.overlay.message.clone(),
        share,
        download_dir: download_dir(),
        theme: Theme::from_settings(&settings.theme),
    });
    app.start(&store);
    if let Some(record) = load_session() {
        app.restore(record);
    }

    let record = app.run().context("running terminal UI")?;
    if let Err(e) = save_session(&record) {
        error!(error = %e, "failed to save session");
    }
    info!("bye");
    Ok(())
}

/// Logs go to `tilawa.log` in the config dir since the UI owns the terminal.
fn init_logging() {
    let filter = EnvFilter::try_from_env("TILAWA_LOG").unwrap_or_else(|_| EnvFilter::new("info"));
    let file = config::config_root().and_then(|dir| {
        fs::create_dir_all(&dir).ok()?;
        fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(dir.join("tilawa.log"))
            .ok()
    });
    let builder = fmt().with_env_filter(filter).with_ansi(false);
    match file {
        Some(file) => builder.with_writer(Mutex::new(file)).init(),
        None => builder.with_writer(std::io::sink).init(),
    }
}

fn media_element(settings: &Settings) -> Box<dyn MediaElement> {
    let socket = std::env::temp_dir().join(format!("tilawa-mpv-{}.sock", std::process::id()));
    match MpvElement::spawn(&settings.player.mpv_path, socket) {
        Ok(mpv) => {
            info!(program = %settings.player.mpv_path, "audio backend: mpv");
            Box::new(mpv)
        }
        Err(e) => {
            warn!(error = %e, "mpv unavailable; recitations will not produce sound");
            Box::new(DetachedElement::new())
        }
    }
}

fn download_dir() -> PathBuf {
    UserDirs::new()
        .and_then(|dirs| dirs.download_dir().map(PathBuf::from))
        .or_else(|| UserDirs::new().map(|dirs| dirs.home_dir().to_path_buf()))
        .unwrap_or_else(|| PathBuf::from("."))
}
