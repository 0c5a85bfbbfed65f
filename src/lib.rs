// Offline-first recipe engine.
// Resolves recipes against a local favorites store before the network, decodes
// the provider's irregular ingredient fields, and paginates listings client-side.

pub mod error;
pub mod model;
pub mod record;
pub mod remote;
pub mod resolve;
pub mod state;
pub mod store;

pub use error::{LarderError, Result};
pub use model::{Category, FavoriteSnapshot, Ingredient, Recipe, RecipeSummary};
pub use record::RawRecord;
pub use remote::{HttpSource, RemoteSource};
pub use resolve::{Resolved, Resolver};
pub use state::{
    DEFAULT_PAGE_SIZE, DetailSnapshot, DetailState, DetailView, Lifecycle, PageItem, PageSnapshot,
    Pager,
};
pub use store::{DiskStore, FavoriteStore, MembershipIndex, MemoryStore};
