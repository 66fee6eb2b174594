use crate::domain::Entry;
use crate::error::{GalleryError, Result};
use crate::infrastructure::{DatasetSource, MediaProbe};
use log::debug;
use reqwest::StatusCode;
use reqwest::blocking::Client;
use std::time::Duration;

const USER_AGENT: &str = concat!("apod-gallery/", env!("CARGO_PKG_VERSION"));

fn build_client(timeout: Duration) -> Result<Client> {
    Ok(Client::builder()
        .timeout(timeout)
        .user_agent(USER_AGENT)
        .build()?)
}

/// Fetches the dataset with a single GET to a fixed URL.
pub struct HttpSource {
    url: String,
    client: Client,
}

impl HttpSource {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self> {
        Ok(Self {
            url: url.into(),
            client: build_client(timeout)?,
        })
    }
}

impl DatasetSource for HttpSource {
    fn fetch(&self) -> Result<Vec<Entry>> {
        let response = self.client.get(&self.url).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(GalleryError::Status(status.as_u16()));
        }

        let body = response.text()?;
        debug!("event=dataset_fetch url={} bytes={}", self.url, body.len());
        Ok(serde_json::from_str(&body)?)
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}

/// Probes preview URLs with HEAD requests.
pub struct HttpProbe {
    client: Client,
}

impl HttpProbe {
    pub fn new(timeout: Duration) -> Result<Self> {
        Ok(Self {
            client: build_client(timeout)?,
        })
    }
}

impl MediaProbe for HttpProbe {
    fn is_reachable(&self, url: &str) -> bool {
        match self.client.head(url).send() {
            // Some media hosts refuse HEAD but serve GET fine.
            Ok(response) => {
                response.status().is_success()
                    || response.status() == StatusCode::METHOD_NOT_ALLOWED
            }
            Err(e) => {
                debug!("event=media_probe url={} error={}", url, e);
                false
            }
        }
    }
}
