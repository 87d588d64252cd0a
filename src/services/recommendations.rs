use std::sync::Arc;

use rand::{seq::SliceRandom, Rng};

use crate::{
    config::{self, Config},
    error::{AppError, AppResult},
    models::Volume,
    services::providers::CatalogProvider,
};

/// Returned when the shortlist is empty
pub const NOT_FOUND_MESSAGE: &str = "Sorry, we couldn't find a book in this genre.";

/// Sizes used by the fetch and truncation steps
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecommenderSettings {
    /// `maxResults` sent to the catalog
    pub page_size: u32,
    /// First prefix window applied to the fetched list
    pub candidate_pool_limit: usize,
    /// Second prefix window; the random pick is drawn from here
    pub shortlist_size: usize,
}

impl Default for RecommenderSettings {
    fn default() -> Self {
        Self {
            page_size: config::default_catalog_page_size(),
            candidate_pool_limit: config::default_candidate_pool_limit(),
            shortlist_size: config::default_shortlist_size(),
        }
    }
}

impl From<&Config> for RecommenderSettings {
    fn from(config: &Config) -> Self {
        Self {
            page_size: config.catalog_page_size,
            candidate_pool_limit: config.candidate_pool_limit,
            shortlist_size: config.shortlist_size,
        }
    }
}

/// Picks a random book for a genre
///
/// Holds no per-request data: the fetched list, the truncated lists and the
/// selection all live on the stack of a single `recommend` call, so concurrent
/// requests never observe each other's results.
#[derive(Clone)]
pub struct Recommender {
    provider: Arc<dyn CatalogProvider>,
    settings: RecommenderSettings,
}

impl Recommender {
    pub fn new(provider: Arc<dyn CatalogProvider>, settings: RecommenderSettings) -> Self {
        Self { provider, settings }
    }

    /// Runs fetch → truncate → select → format with the thread-local RNG
    pub async fn recommend(&self, genre: &str) -> AppResult<String> {
        let volumes = self.fetch(genre).await?;
        let mut rng = rand::thread_rng();
        self.pick(volumes, &mut rng)
    }

    /// Same pipeline as [`Recommender::recommend`] with a caller-supplied RNG
    pub async fn recommend_with_rng<R>(&self, genre: &str, rng: &mut R) -> AppResult<String>
    where
        R: Rng + Send + ?Sized,
    {
        let volumes = self.fetch(genre).await?;
        self.pick(volumes, rng)
    }

    async fn fetch(&self, genre: &str) -> AppResult<Vec<Volume>> {
        self.provider
            .search_by_subject(genre, self.settings.page_size)
            .await
    }

    /// Candidate pool after both truncation windows
    pub fn shortlist(&self, volumes: Vec<Volume>) -> Vec<Volume> {
        let pool = truncate(volumes, self.settings.candidate_pool_limit);
        truncate(pool, self.settings.shortlist_size)
    }

    fn pick<R>(&self, volumes: Vec<Volume>, rng: &mut R) -> AppResult<String>
    where
        R: Rng + ?Sized,
    {
        let fetched = volumes.len();
        let shortlist = self.shortlist(volumes);

        tracing::debug!(
            fetched,
            shortlisted = shortlist.len(),
            "Candidate pool truncated"
        );

        let title = match select(&shortlist, rng) {
            Some(volume) => Some(volume.title().ok_or_else(|| {
                AppError::Internal(format!(
                    "Selected volume {} has no title",
                    volume.id.as_deref().unwrap_or("<unknown>")
                ))
            })?),
            None => None,
        };

        Ok(format_recommendation(title))
    }
}

/// Keeps at most `limit` items from the front of the list
pub fn truncate<T>(mut items: Vec<T>, limit: usize) -> Vec<T> {
    items.truncate(limit);
    items
}

/// Uniformly picks one candidate, or `None` when there are none
pub fn select<'a, T, R>(candidates: &'a [T], rng: &mut R) -> Option<&'a T>
where
    R: Rng + ?Sized,
{
    candidates.choose(rng)
}

/// Formats the response sentence for a selected title
pub fn format_recommendation(title: Option<&str>) -> String {
    match title {
        Some(title) => format!("We recommend '{}' for you.", title),
        None => NOT_FOUND_MESSAGE.to_string(),
    }
}
