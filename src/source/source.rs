use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use log::{debug, info};
use reqwest::Client;
use url::Url;

use crate::error::{Error, Result};
use crate::product::Catalog;

/// Where the product document comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    /// An `http`/`https` URL, fetched with a single GET request.
    Remote(Url),
    /// A file on disk.
    Local(PathBuf),
}

impl FromStr for DataSource {
    type Err = std::convert::Infallible;

    /// Strings that parse as `http`/`https` URLs are remote, `file` URLs
    /// name the file they point at, anything else is taken as a file path.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match Url::parse(s) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => Ok(DataSource::Remote(url)),
            Ok(url) if url.scheme() == "file" => match url.to_file_path() {
                Ok(path) => Ok(DataSource::Local(path)),
                Err(()) => Ok(DataSource::Local(PathBuf::from(s))),
            },
            _ => Ok(DataSource::Local(PathBuf::from(s))),
        }
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataSource::Remote(url) => write!(f, "{url}"),
            DataSource::Local(path) => write!(f, "{}", path.display()),
        }
    }
}

impl DataSource {
    /// Fetches the raw document.
    ///
    /// There is no timeout and no retry: a request that never completes
    /// keeps the caller waiting.
    pub async fn fetch(&self) -> Result<Vec<u8>> {
        match self {
            DataSource::Remote(url) => {
                let fetch_error = |source| Error::Fetch {
                    url: url.to_string(),
                    source,
                };
                let client = Client::builder()
                    .default_headers(crate::build_headers())
                    .build()
                    .map_err(fetch_error)?;

                let response = client
                    .get(url.to_owned())
                    .send()
                    .await
                    .and_then(|response| response.error_for_status())
                    .map_err(fetch_error)?;
                let body = response.bytes().await.map_err(fetch_error)?;
                Ok(body.to_vec())
            }
            DataSource::Local(path) => tokio::fs::read(path).await.map_err(|source| Error::Io {
                path: path.to_owned(),
                source,
            }),
        }
    }

    /// Fetches and parses the product document.
    pub async fn load(&self) -> Result<Catalog> {
        info!("fetching product document from {self}");
        let body = self.fetch().await?;
        debug!("received {} bytes", body.len());
        Catalog::from_slice(&body)
    }
}
