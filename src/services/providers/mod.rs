/// Book catalog provider abstraction
///
/// Each provider knows how to search its catalog by subject and return the raw
/// volume list in upstream order. Ordering matters: the recommendation pipeline
/// truncates by prefix.
use crate::{error::AppResult, models::Volume};

pub mod google_books;

pub use google_books::GoogleBooksProvider;

/// Trait for book catalog providers
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait CatalogProvider: Send + Sync {
    /// Search for volumes filed under `subject`, requesting at most `max_results`
    ///
    /// Fails with `AppError::UpstreamFetch` when the catalog answers with a
    /// non-success status.
    async fn search_by_subject(&self, subject: &str, max_results: u32) -> AppResult<Vec<Volume>>;

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}
