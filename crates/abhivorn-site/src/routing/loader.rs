use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};

use async_trait::async_trait;
use tokio::sync::OnceCell;

use super::page::PageId;
use crate::pages::PageModule;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoadError {
    #[error("page module for {page:?} is unavailable: {reason}")]
    Unavailable { page: PageId, reason: String },
}

/// Resolution state of a lazily loaded page.
#[derive(Clone)]
pub enum LoadState {
    Loading,
    Ready(Arc<dyn PageModule>),
    Failed(LoadError),
}

impl fmt::Debug for LoadState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadState::Loading => f.write_str("Loading"),
            LoadState::Ready(_) => f.write_str("Ready(..)"),
            LoadState::Failed(err) => f.debug_tuple("Failed").field(err).finish(),
        }
    }
}

/// Produces page modules on demand.
#[async_trait]
pub trait PageSource: Send + Sync {
    async fn load(&self, page: PageId) -> Result<Arc<dyn PageModule>, LoadError>;
}

type Slot = Arc<OnceCell<Arc<dyn PageModule>>>;

/// Loads each page module the first time its route is visited and keeps it
/// for later visits. Failed loads leave the slot empty so the next visit
/// retries.
pub struct PageLoader {
    source: Box<dyn PageSource>,
    slots: Mutex<HashMap<PageId, Slot>>,
}

impl PageLoader {
    pub fn new(source: impl PageSource + 'static) -> Self {
        Self {
            source: Box::new(source),
            slots: Mutex::new(HashMap::new()),
        }
    }

    fn slot(&self, page: PageId) -> Slot {
        let mut slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
        slots.entry(page).or_default().clone()
    }

    /// Current state without triggering a load.
    pub fn state(&self, page: PageId) -> LoadState {
        match self.slot(page).get() {
            Some(module) => LoadState::Ready(module.clone()),
            None => LoadState::Loading,
        }
    }

    pub async fn resolve(&self, page: PageId) -> LoadState {
        let slot = self.slot(page);
        let loaded = slot
            .get_or_try_init(|| async {
                tracing::debug!(?page, "loading page module");
                self.source.load(page).await
            })
            .await;

        match loaded {
            Ok(module) => LoadState::Ready(module.clone()),
            Err(err) => {
                tracing::error!(?page, error = %err, "page module failed to load");
                LoadState::Failed(err)
            }
        }
    }
}

impl fmt::Debug for PageLoader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PageLoader").finish_non_exhaustive()
    }
}
