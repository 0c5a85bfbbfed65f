// Pagination controller.
// Fetches one full result set per query context and reveals it in fixed-size pages.

use std::collections::HashSet;
use std::sync::Arc;

use log::{debug, warn};
use tokio::sync::watch;

use crate::error::Result;
use crate::model::RecipeSummary;
use crate::remote::RemoteSource;
use crate::store::MembershipIndex;

/// Default number of items revealed per page.
pub const DEFAULT_PAGE_SIZE: usize = 20;

/// Lifecycle of a pagination context.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Lifecycle {
    #[default]
    Idle,
    Loading,
    Loaded,
    Finished,
    Error(String),
}

impl Lifecycle {
    pub fn is_loading(&self) -> bool {
        matches!(self, Lifecycle::Loading)
    }
}

/// A revealed summary annotated with current favorite membership.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageItem {
    pub summary: RecipeSummary,
    pub is_favorite: bool,
}

/// Published view of a pagination context.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageSnapshot {
    pub items: Vec<PageItem>,
    pub lifecycle: Lifecycle,
}

/// Client-side pagination over one query context (a category).
///
/// The full matching set is fetched once and kept in memory; pages are carved
/// off on demand. Revealed items are annotated with favorite membership when
/// a snapshot is built, not when the set was fetched, so a toggle followed by
/// `refresh_membership` updates annotations without refetching.
pub struct Pager {
    remote: Arc<dyn RemoteSource>,
    membership: MembershipIndex,
    category: String,
    page_size: usize,
    full_set: Vec<RecipeSummary>,
    cursor: usize,
    lifecycle: Lifecycle,
    favorites: HashSet<String>,
    tx: watch::Sender<PageSnapshot>,
}

impl Pager {
    pub fn new(
        remote: Arc<dyn RemoteSource>,
        membership: MembershipIndex,
        category: impl Into<String>,
    ) -> Self {
        Self::with_page_size(remote, membership, category, DEFAULT_PAGE_SIZE)
    }

    pub fn with_page_size(
        remote: Arc<dyn RemoteSource>,
        membership: MembershipIndex,
        category: impl Into<String>,
        page_size: usize,
    ) -> Self {
        let (tx, _rx) = watch::channel(PageSnapshot::default());
        Self {
            remote,
            membership,
            category: category.into(),
            page_size: page_size.max(1),
            full_set: Vec::new(),
            cursor: 0,
            lifecycle: Lifecycle::Idle,
            favorites: HashSet::new(),
            tx,
        }
    }

    /// Subscribe to published snapshots.
    pub fn subscribe(&self) -> watch::Receiver<PageSnapshot> {
        self.tx.subscribe()
    }

    /// Current lifecycle state.
    pub fn lifecycle(&self) -> &Lifecycle {
        &self.lifecycle
    }

    /// Items revealed so far, annotated with the current membership set.
    pub fn items(&self) -> Vec<PageItem> {
        self.full_set[..self.cursor]
            .iter()
            .map(|summary| PageItem {
                summary: summary.clone(),
                is_favorite: self.favorites.contains(&summary.id),
            })
            .collect()
    }

    /// Build the published view of the current state.
    pub fn snapshot(&self) -> PageSnapshot {
        PageSnapshot {
            items: self.items(),
            lifecycle: self.lifecycle.clone(),
        }
    }

    fn publish(&self) {
        self.tx.send_replace(self.snapshot());
    }

    /// Fetch the full result set for this context and reveal the first page.
    ///
    /// Valid from `Idle` and `Error` (retry). A call while a fetch is in
    /// flight is dropped, and a fetched set stays immutable until an explicit
    /// `refresh`. A failed fetch surfaces `Error` with no partial list
    /// exposed. Dropping the returned future mid-flight never transitions to
    /// `Error`.
    pub async fn fetch(&mut self) {
        if !matches!(self.lifecycle, Lifecycle::Idle | Lifecycle::Error(_)) {
            debug!(
                "fetch ignored in state {:?} for '{}'",
                self.lifecycle, self.category
            );
            return;
        }
        self.lifecycle = Lifecycle::Loading;
        self.publish();

        match self.remote.list_by_category(&self.category).await {
            Ok(summaries) => {
                self.favorites = self.membership.snapshot().await.unwrap_or_else(|err| {
                    warn!("membership unavailable, annotations reset: {}", err);
                    HashSet::new()
                });
                self.full_set = summaries;
                self.cursor = 0;
                self.reveal_next_slice();
            }
            Err(err) => {
                self.full_set = Vec::new();
                self.cursor = 0;
                self.lifecycle = Lifecycle::Error(err.to_string());
            }
        }
        self.publish();
    }

    /// Reveal the next page from the in-memory set.
    ///
    /// Valid only from `Loaded`; in any other state this is a no-op, which
    /// also guards duplicate triggers. Synchronous: the full set is already
    /// in memory.
    pub fn load_next_page(&mut self) {
        if self.lifecycle != Lifecycle::Loaded {
            return;
        }
        self.reveal_next_slice();
        self.publish();
    }

    /// Discard the fetched set and cursor, then fetch again.
    pub async fn refresh(&mut self) {
        self.full_set = Vec::new();
        self.cursor = 0;
        self.lifecycle = Lifecycle::Idle;
        self.fetch().await;
    }

    /// Re-derive favorite membership for annotation.
    ///
    /// Membership is not push-updated; call this when returning from a detail
    /// view so revealed items reflect toggles without refetching the set.
    pub async fn refresh_membership(&mut self) -> Result<()> {
        self.favorites = self.membership.snapshot().await?;
        self.publish();
        Ok(())
    }

    fn reveal_next_slice(&mut self) {
        let end = (self.cursor + self.page_size).min(self.full_set.len());
        self.cursor = end;
        self.lifecycle = if end == self.full_set.len() {
            Lifecycle::Finished
        } else {
            Lifecycle::Loaded
        };
    }
}
