// Recipe detail state.
// Owns the displayed recipe, refresh-in-place, and the favorite toggle.

use log::warn;
use tokio::sync::watch;

use crate::resolve::{Resolved, Resolver};

/// Lifecycle of a recipe detail view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DetailState {
    #[default]
    Idle,
    Loading,
    Ready(Resolved),
    Error(String),
}

/// Published view of a detail context.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DetailSnapshot {
    pub state: DetailState,
    /// True while a refresh runs behind already-displayed data.
    pub refreshing: bool,
}

/// Detail view controller for one recipe id.
pub struct DetailView {
    resolver: Resolver,
    id: String,
    state: DetailState,
    refreshing: bool,
    tx: watch::Sender<DetailSnapshot>,
}

impl DetailView {
    pub fn new(resolver: Resolver, id: impl Into<String>) -> Self {
        let (tx, _rx) = watch::channel(DetailSnapshot::default());
        Self {
            resolver,
            id: id.into(),
            state: DetailState::Idle,
            refreshing: false,
            tx,
        }
    }

    /// Subscribe to published snapshots.
    pub fn subscribe(&self) -> watch::Receiver<DetailSnapshot> {
        self.tx.subscribe()
    }

    /// Current state.
    pub fn state(&self) -> &DetailState {
        &self.state
    }

    /// The currently displayed resolution, if any.
    pub fn current(&self) -> Option<&Resolved> {
        match &self.state {
            DetailState::Ready(resolved) => Some(resolved),
            _ => None,
        }
    }

    fn publish(&self) {
        self.tx.send_replace(DetailSnapshot {
            state: self.state.clone(),
            refreshing: self.refreshing,
        });
    }

    /// Resolve and display the recipe.
    pub async fn load(&mut self) {
        self.state = DetailState::Loading;
        self.publish();

        match self.resolver.fetch_recipe(&self.id).await {
            Ok(resolved) => self.state = DetailState::Ready(resolved),
            Err(err) => self.state = DetailState::Error(err.to_string()),
        }
        self.publish();
    }

    /// Re-run resolution without clearing displayed data while in flight.
    ///
    /// The prior result stays visible until the new result, or an error, is
    /// ready. Without a displayed result this is a plain load.
    pub async fn refresh(&mut self) {
        if !matches!(self.state, DetailState::Ready(_)) {
            return self.load().await;
        }
        self.refreshing = true;
        self.publish();

        match self.resolver.fetch_recipe(&self.id).await {
            Ok(resolved) => self.state = DetailState::Ready(resolved),
            Err(err) => self.state = DetailState::Error(err.to_string()),
        }
        self.refreshing = false;
        self.publish();
    }

    /// Flip favorite membership for the displayed recipe.
    ///
    /// The in-memory flag changes only after the store write succeeds; a
    /// failed write is logged and leaves the displayed state as it was.
    /// Returns the flag after the attempt. Without a displayed recipe this is
    /// a no-op returning false.
    pub async fn toggle_favorite(&mut self) -> bool {
        let DetailState::Ready(resolved) = &self.state else {
            return false;
        };
        let was_favorite = resolved.is_favorite;
        let recipe = resolved.recipe.clone();

        let outcome = if was_favorite {
            self.resolver.remove_favorite(&recipe.id).await
        } else {
            self.resolver.add_favorite(&recipe).await
        };

        match outcome {
            Ok(()) => {
                if let DetailState::Ready(resolved) = &mut self.state {
                    resolved.is_favorite = !was_favorite;
                }
                self.publish();
                !was_favorite
            }
            Err(err) => {
                warn!("favorite toggle for {} not persisted: {}", recipe.id, err);
                was_favorite
            }
        }
    }
}
