//! Query execution and refetch-after-mutation consistency.

mod client;
mod invalidation;
mod query;

pub use client::{Settled, SyncClient};
pub use invalidation::{invalidated_by, MutationKind, INVALIDATIONS};
pub use query::{Query, QueryData, QueryKind};
