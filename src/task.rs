//! Fetch Task
//!
//! One-shot item loading that can be cancelled when the list is torn down.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::commands::ItemSource;
use crate::error::FetchError;
use crate::models::Item;

/// Shared cancellation flag
///
/// Atomic so it can be captured by `on_cleanup`, which requires `Send + Sync`.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Fetch the items once.
///
/// Returns `None` when the token was cancelled before the fetch started or
/// while it was in flight; the result must then be dropped.
pub async fn load_items<S: ItemSource>(
    source: &S,
    token: &CancelToken,
) -> Option<Result<Vec<Item>, FetchError>> {
    if token.is_cancelled() {
        log::debug!("items list torn down before fetch started");
        return None;
    }

    let result = source.fetch_items().await;

    if token.is_cancelled() {
        log::debug!("dropping fetch completion for a discarded items list");
        return None;
    }

    match &result {
        Ok(items) => log::info!("loaded {} items", items.len()),
        Err(e) => log::error!("failed to load items: {}", e),
    }
    Some(result)
}
