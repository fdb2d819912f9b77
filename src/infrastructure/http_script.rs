// SPDX-License-Identifier: MPL-2.0
//! HTTP implementation of the [`ScriptHost`] port.
//!
//! "Injecting" the buy-button script means downloading it completely. The
//! downloaded body is kept as the injected artifact until [`remove`] is
//! called, which is what a retry does before requesting the script again.
//!
//! [`remove`]: ScriptHost::remove

use crate::application::port::ScriptHost;
use crate::domain::error::EmbedLoadError;
use futures_util::future::BoxFuture;
use futures_util::StreamExt;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// User agent sent with every script request.
const USER_AGENT: &str = concat!("showreel/", env!("CARGO_PKG_VERSION"));

/// Upper bound on the script size, protects against a misconfigured URL
/// pointing at something that is not a script.
const MAX_SCRIPT_BYTES: usize = 4 * 1024 * 1024;

/// Downloads embed scripts with `reqwest` and keeps them in memory.
#[derive(Debug, Clone, Default)]
pub struct HttpScriptHost {
    client: Option<reqwest::Client>,
    injected: Arc<Mutex<HashMap<String, Vec<u8>>>>,
}

impl HttpScriptHost {
    /// Creates a host with its own HTTP client.
    ///
    /// A client that cannot be built (TLS backend unavailable) makes every
    /// load fail with a network error instead of panicking.
    #[must_use]
    pub fn new() -> Self {
        let client = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::limited(10))
            .user_agent(USER_AGENT)
            .build();
        match client {
            Ok(client) => Self {
                client: Some(client),
                injected: Arc::default(),
            },
            Err(e) => {
                log::warn!("Failed to build HTTP client for embed script: {e}");
                Self::default()
            }
        }
    }
}

impl ScriptHost for HttpScriptHost {
    fn load(&self, url: &str) -> BoxFuture<'static, Result<(), EmbedLoadError>> {
        let url = url.to_string();
        let client = self.client.clone();
        let injected = Arc::clone(&self.injected);

        Box::pin(async move {
            let Some(client) = client else {
                return Err(EmbedLoadError::Network("HTTP client unavailable".into()));
            };
            let body = fetch_script(&client, &url).await?;
            log::debug!("Embed script {url} downloaded ({} bytes)", body.len());
            if let Ok(mut map) = injected.lock() {
                map.insert(url, body);
            }
            Ok(())
        })
    }

    fn remove(&self, url: &str) {
        if let Ok(mut map) = self.injected.lock() {
            if map.remove(url).is_some() {
                log::debug!("Removed injected embed script {url}");
            }
        }
    }
}

async fn fetch_script(client: &reqwest::Client, url: &str) -> Result<Vec<u8>, EmbedLoadError> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| EmbedLoadError::Network(e.to_string()))?;

    if !response.status().is_success() {
        return Err(EmbedLoadError::Status(response.status().as_u16()));
    }

    let mut body = Vec::new();
    let mut stream = response.bytes_stream();
    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(|e| EmbedLoadError::Network(e.to_string()))?;
        if body.len() + chunk.len() > MAX_SCRIPT_BYTES {
            return Err(EmbedLoadError::Network(format!(
                "Script larger than {MAX_SCRIPT_BYTES} bytes"
            )));
        }
        body.extend_from_slice(&chunk);
    }

    if body.is_empty() {
        return Err(EmbedLoadError::Network("Empty script body".into()));
    }

    Ok(body)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_injected(host: &HttpScriptHost, url: &str) -> bool {
        host.injected
            .lock()
            .map(|map| map.contains_key(url))
            .unwrap_or(false)
    }

    #[test]
    fn remove_drops_the_artifact() {
        let host = HttpScriptHost::default();
        if let Ok(mut map) = host.injected.lock() {
            map.insert("https://x.test/a.js".into(), b"x".to_vec());
        }
        assert!(is_injected(&host, "https://x.test/a.js"));

        host.remove("https://x.test/a.js");
        assert!(!is_injected(&host, "https://x.test/a.js"));
    }

    #[test]
    fn remove_of_unknown_url_is_harmless() {
        let host = HttpScriptHost::default();
        host.remove("https://x.test/never.js");
        assert!(!is_injected(&host, "https://x.test/never.js"));
    }

    #[tokio::test]
    async fn load_without_client_fails_as_network_error() {
        let host = HttpScriptHost::default();
        let result = host.load("https://x.test/a.js").await;
        assert!(matches!(result, Err(EmbedLoadError::Network(_))));
        assert!(!is_injected(&host, "https://x.test/a.js"));
    }

    #[tokio::test]
    async fn unreachable_host_is_a_network_error() {
        let host = HttpScriptHost::new();
        // Port 9 on loopback is the discard service and is normally closed.
        let result = host.load("http://127.0.0.1:9/buy-button.js").await;
        assert!(matches!(result, Err(EmbedLoadError::Network(_))));
    }
}
