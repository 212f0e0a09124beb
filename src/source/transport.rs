use std::{
    path::{Path, PathBuf},
    time::Duration,
};

use crate::foundation::error::{ChiasmError, ChiasmResult};

/// Fetches the raw JSON document at an API-relative path such as `surah/1/en.sahih`.
pub trait Transport: Send + Sync {
    /// Body bytes of the document at `path`.
    fn get(&self, path: &str) -> ChiasmResult<Vec<u8>>;
}

/// Blocking HTTP client rooted at an API base URL.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl HttpTransport {
    /// Client for `base_url` with a per-request `timeout`.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> ChiasmResult<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("chiasm/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ChiasmError::source(format!("build http client: {e}")))?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

impl Transport for HttpTransport {
    fn get(&self, path: &str) -> ChiasmResult<Vec<u8>> {
        let url = self.url(path);
        tracing::debug!(%url, "GET");
        let response = self
            .client
            .get(&url)
            .send()
            .map_err(|e| ChiasmError::source(format!("GET {url}: {e}")))?;
        let status = response.status();
        if !status.is_success() {
            return Err(ChiasmError::source(format!(
                "GET {url}: API call failed with status {status}"
            )));
        }
        let body = response
            .bytes()
            .map_err(|e| ChiasmError::source(format!("GET {url}: read body: {e}")))?;
        Ok(body.to_vec())
    }
}

/// API documents mirrored on disk: `path` resolves to `<root>/<path>.json`.
#[derive(Debug, Clone)]
pub struct DirTransport {
    root: PathBuf,
}

impl DirTransport {
    /// Serve documents from `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Directory documents are read from.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn file_for(&self, path: &str) -> PathBuf {
        let mut file = self.root.clone();
        for segment in path.split('/').filter(|s| !s.is_empty()) {
            file.push(segment);
        }
        file.as_mut_os_string().push(".json");
        file
    }
}

impl Transport for DirTransport {
    fn get(&self, path: &str) -> ChiasmResult<Vec<u8>> {
        let file = self.file_for(path);
        tracing::debug!(path = %file.display(), "read");
        std::fs::read(&file).map_err(|e| ChiasmError::source(format!("read {}: {e}", file.display())))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/source/transport.rs"]
mod tests;
