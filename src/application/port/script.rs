// SPDX-License-Identifier: MPL-2.0
//! Embed script port definition.
//!
//! The loader only needs to request the script, learn whether that
//! succeeded, and drop whatever a failed request left behind before asking
//! again. Timeouts are not the host's business: the loader enforces its own
//! budget and ignores late outcomes.

use crate::domain::error::EmbedLoadError;
use futures_util::future::BoxFuture;

/// Port for injecting the third-party script.
pub trait ScriptHost: Send + Sync {
    /// Requests `url`. Resolves when the script is available.
    ///
    /// # Errors
    ///
    /// Returns an [`EmbedLoadError`] if the request fails or the host
    /// answers with a non-success status.
    fn load(&self, url: &str) -> BoxFuture<'static, Result<(), EmbedLoadError>>;

    /// Removes any artifact a previous request for `url` left behind.
    fn remove(&self, url: &str);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn _assert_object_safe(_: &dyn ScriptHost) {}

    #[derive(Default)]
    struct CountingHost {
        loads: Arc<AtomicUsize>,
        removals: Arc<AtomicUsize>,
    }

    impl ScriptHost for CountingHost {
        fn load(&self, _url: &str) -> BoxFuture<'static, Result<(), EmbedLoadError>> {
            self.loads.fetch_add(1, Ordering::SeqCst);
            Box::pin(async { Ok(()) })
        }

        fn remove(&self, _url: &str) {
            self.removals.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[tokio::test]
    async fn host_is_usable_behind_a_trait_object() {
        let host = CountingHost::default();
        let loads = host.loads.clone();
        let removals = host.removals.clone();
        let host: Arc<dyn ScriptHost> = Arc::new(host);

        assert_eq!(host.load("https://example.test/s.js").await, Ok(()));
        host.remove("https://example.test/s.js");

        assert_eq!(loads.load(Ordering::SeqCst), 1);
        assert_eq!(removals.load(Ordering::SeqCst), 1);
    }
}
