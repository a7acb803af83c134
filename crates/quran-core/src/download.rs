use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

use reqwest::blocking::Client;
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum DownloadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server answered {0}")]
    Status(u16),
}

/// Picks a path in `dir` that does not exist yet, adding ` (n)` before the
/// extension when needed.
pub fn unique_target(dir: &Path, file_name: &str) -> PathBuf {
    let candidate = dir.join(file_name);
    if !candidate.exists() {
        return candidate;
    }
    let (stem, ext) = match file_name.rsplit_once('.') {
        Some((stem, ext)) => (stem, format!(".{}", ext)),
        None => (file_name, String::new()),
    };
    (1..)
        .map(|n| dir.join(format!("{} ({}){}", stem, n, ext)))
        .find(|p| !p.exists())
        .unwrap_or(candidate)
}

/// Streams `url` to `target`, creating parent directories. The partial
/// file is removed on failure.
pub fn download_to(url: &str, target: &Path) -> Result<PathBuf, DownloadError> {
    if let Some(dir) = target.parent() {
        fs::create_dir_all(dir)?;
    }
    let client = Client::builder()
        .connect_timeout(Duration::from_secs(15))
        .user_agent(concat!("tilawa/", env!("CARGO_PKG_VERSION")))
        .build()?;
    let mut resp = client.get(url).send()?;
    let status = resp.status();
    if !status.is_success() {
        return Err(DownloadError::Status(status.as_u16()));
    }
    let mut file = fs::File::create(target)?;
    if let Err(e) = resp.copy_to(&mut file) {
        drop(file);
        let _ = fs::remove_file(target);
        return Err(e.into());
    }
    info!(url, path = %target.display(), "download finished");
    Ok(target.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unique_target_numbers_collisions() {
        let dir = tempfile::tempdir().unwrap();
        let first = unique_target(dir.path(), "سورة الفاتحة - العفاسي.mp3");
        assert_eq!(first, dir.path().join("سورة الفاتحة - العفاسي.mp3"));
        fs::write(&first, b"x").unwrap();
        let second = unique_target(dir.path(), "سورة الفاتحة - العفاسي.mp3");
        assert_eq!(second, dir.path().join("سورة الفاتحة - العفاسي (1).mp3"));
    }
}
