//! In-memory persistence for SiteTrack.
//!
//! A [`Store`] owns one collection per entity type and is seeded from fixture
//! files at startup. Repositories in [`repositories`] are the only way to
//! read or mutate it; every call returns owned copies and waits out a
//! simulated network delay first. [`views`] derives filtered, sorted and
//! grouped projections from those copies.

pub mod latency;
pub mod models;
pub mod repositories;
pub mod seed;
pub mod store;
pub mod views;

pub use latency::LatencyProfile;
pub use seed::{Seed, SeedError};
pub use store::Store;

/// Confirm the store is reachable and report how many records it holds.
pub async fn health_check(store: &Store) -> usize {
    store.record_count().await
}
