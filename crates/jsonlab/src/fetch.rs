use crate::prelude::*;
use jsonlab_core::resource::Resource;
use serde::de::DeserializeOwned;

/// HTTP client bound to one base endpoint
///
/// Cloning is cheap: `reqwest::Client` is reference counted, so every
/// spawned unit gets its own handle to the same connection pool.
#[derive(Debug, Clone)]
pub struct Api {
    client: reqwest::Client,
    base_url: String,
}

impl Api {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url(&self, resource: Resource) -> String {
        resource.url(&self.base_url)
    }

    /// Fetch one collection and decode it as records of type `T`
    pub async fn fetch<T: DeserializeOwned>(&self, resource: Resource) -> Settled<Vec<T>> {
        fetch_data(&self.client, &self.url(resource)).await
    }
}

/// GET `url`, buffer the whole body, then decode it as a JSON array
///
/// No partial result is ever returned: the body is decoded only once it has
/// been read completely.
pub async fn fetch_data<T: DeserializeOwned>(
    client: &reqwest::Client,
    url: &str,
) -> Settled<Vec<T>> {
    log::debug!("GET {url}");

    let transport = |e: reqwest::Error| Error::Transport {
        url: url.to_string(),
        message: e.to_string(),
    };

    let response = client.get(url).send().await.map_err(transport)?;

    let status = response.status();
    if !status.is_success() {
        return Err(Error::Transport {
            url: url.to_string(),
            message: format!("HTTP {status}"),
        });
    }

    let body = response.bytes().await.map_err(transport)?;

    let records: Vec<T> = serde_json::from_slice(&body).map_err(|e| Error::Decode {
        url: url.to_string(),
        message: e.to_string(),
    })?;

    log::debug!("Decoded {} records from {url}", records.len());

    Ok(records)
}
