//! Read side of the event catalog.
//!
//! [`EventAssembler`] joins events with their cover images into
//! [`EventSummary`] projections, and [`EventCatalog`] puts a single-flight
//! [`ResultCache`] in front of it. Persistence lives behind the traits in
//! [`store`].

pub mod assembler;
pub mod cache;
mod error;
#[cfg(any(test, feature = "memory"))]
pub mod memory;
pub mod service;
pub mod stats;
pub mod store;

pub use assembler::{EventAssembler, EventDetail, EventSummary};
pub use cache::{CachePolicy, ResultCache};
pub use error::{CatalogError, CatalogResult};
pub use service::{CacheKey, EventCatalog};
pub use store::{CoverImageStore, EventIntroStore, EventStatsStore, EventStore};
