//! # Data Sources
//!
//! A [`DataSource`] hands a list view the full, unordered collection of one
//! record kind in a single asynchronous round-trip. There is no paging,
//! sorting or server-side filtering: everything after `load` happens in the
//! [`ListController`](crate::controller::ListController).
//!
//! ## Implementations
//!
//! - [`memory::MemorySource`]: a fixed collection of one kind, with optional
//!   simulated latency and scripted failure. Used by tests.
//! - [`seed::SeedSource`]: every kind from an in-memory [`seed::SeedData`]
//!   (the built-in demo data by default), with simulated latency.
//! - [`seed::SeedFile`]: every kind from a JSON document on disk, read on
//!   each load.
//!
//! Failures are reported as [`Failure`] values; turning them into messages
//! is the job of [`crate::failure::ErrorReporter`].

use crate::failure::Failure;
use crate::model::Record;
use async_trait::async_trait;
use std::sync::Arc;

pub mod memory;
pub mod seed;

pub type LoadResult<R> = std::result::Result<Vec<R>, Failure>;

#[async_trait]
pub trait DataSource<R: Record>: Send + Sync {
    /// Load every current record of kind `R`.
    async fn load(&self) -> LoadResult<R>;
}

#[async_trait]
impl<R, S> DataSource<R> for Arc<S>
where
    R: Record,
    S: DataSource<R> + ?Sized,
{
    async fn load(&self) -> LoadResult<R> {
        (**self).load().await
    }
}
