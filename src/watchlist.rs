//! Watchlist membership store.
//!
//! Process-lifetime bookkeeping of which symbols to re-run, external to the
//! pure analysis pipeline. A cloneable handle over shared state, passed
//! explicitly to whoever needs it.

use std::collections::BTreeSet;
use std::sync::Arc;

use tokio::sync::RwLock;

#[derive(Clone, Default)]
pub struct Watchlist {
    inner: Arc<RwLock<BTreeSet<String>>>,
}

impl Watchlist {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_symbols(symbols: impl IntoIterator<Item = String>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(symbols.into_iter().collect())),
        }
    }

    /// Add a symbol. Returns false when it was already present.
    pub async fn add(&self, symbol: &str) -> bool {
        self.inner.write().await.insert(symbol.to_string())
    }

    /// Remove a symbol. Returns false when it was not present.
    pub async fn remove(&self, symbol: &str) -> bool {
        self.inner.write().await.remove(symbol)
    }

    pub async fn contains(&self, symbol: &str) -> bool {
        self.inner.read().await.contains(symbol)
    }

    /// Sorted listing of the current membership.
    pub async fn symbols(&self) -> Vec<String> {
        self.inner.read().await.iter().cloned().collect()
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.is_empty()
    }
}
