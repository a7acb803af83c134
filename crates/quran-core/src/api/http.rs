use std::time::Duration;

use reqwest::blocking::Client;
use tracing::{debug, warn};

use crate::types::{Chapter, ChapterSummary};

use super::{parse_chapter, parse_chapter_list, ApiError, ScriptureSource};

pub struct HttpSource {
    client: Client,
    base_url: String,
    edition: String,
}

impl HttpSource {
    pub fn new(base_url: &str, edition: &str, timeout: Duration) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("tilawa/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            edition: edition.to_string(),
        })
    }

    pub fn chapter_list_url(&self) -> String {
        format!("{}/surah", self.base_url)
    }

    pub fn chapter_url(&self, index: u16) -> String {
        format!("{}/surah/{}/{}", self.base_url, index, self.edition)
    }

    // The API reports failures inside the JSON envelope, so the HTTP status
    // is not checked here.
    fn get(&self, url: &str) -> Result<String, ApiError> {
        debug!(url, "GET");
        let resp = self.client.get(url).send()?;
        let status = resp.status();
        if !status.is_success() {
            warn!(url, %status, "non-success HTTP status");
        }
        Ok(resp.text()?)
    }
}

impl ScriptureSource for HttpSource {
    fn chapter_list(&self) -> Result<Vec<ChapterSummary>, ApiError> {
        let body = self.get(&self.chapter_list_url())?;
        parse_chapter_list(&body)
    }

    fn chapter(&self, index: u16) -> Result<Chapter, ApiError> {
        let body = self.get(&self.chapter_url(index))?;
        parse_chapter(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_endpoint_urls() {
        let source =
            HttpSource::new("https://api.example.test/v1/", "ar.alafasy", Duration::from_secs(5))
                .unwrap();
        assert_eq!(source.chapter_list_url(), "https://api.example.test/v1/surah");
        assert_eq!(
            source.chapter_url(18),
            "https://api.example.test/v1/surah/18/ar.alafasy"
        );
    }
}
