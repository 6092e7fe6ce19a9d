//! Session application services.

mod cache;

pub use cache::SessionCache;
