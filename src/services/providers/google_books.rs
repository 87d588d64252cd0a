/// Google Books API provider
///
/// Uses the public volumes search: `GET /volumes?q=subject:<genre>&maxResults=<n>`.
/// An API key is optional for this endpoint.
use crate::{
    error::{AppError, AppResult},
    models::{Volume, VolumeSearchResponse},
    services::providers::CatalogProvider,
};
use reqwest::Client as HttpClient;

#[derive(Clone)]
pub struct GoogleBooksProvider {
    http_client: HttpClient,
    api_key: Option<String>,
    api_url: String,
}

impl GoogleBooksProvider {
    pub fn new(api_url: String, api_key: Option<String>) -> Self {
        Self {
            http_client: HttpClient::new(),
            api_key,
            api_url: api_url.trim_end_matches('/').to_string(),
        }
    }

    fn volumes_url(&self) -> String {
        format!("{}/volumes", self.api_url)
    }

    fn query_params(&self, subject: &str, max_results: u32) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("q", format!("subject:{}", subject)),
            ("maxResults", max_results.to_string()),
        ];
        if let Some(key) = &self.api_key {
            params.push(("key", key.clone()));
        }
        params
    }
}

#[async_trait::async_trait]
impl CatalogProvider for GoogleBooksProvider {
    async fn search_by_subject(&self, subject: &str, max_results: u32) -> AppResult<Vec<Volume>> {
        let response = self
            .http_client
            .get(self.volumes_url())
            .query(&self.query_params(subject, max_results))
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::UpstreamFetch(format!(
                "Google Books API returned status {}: {}",
                status, body
            )));
        }

        let search: VolumeSearchResponse = response.json().await?;

        tracing::info!(
            subject = %subject,
            total_items = search.total_items,
            results = search.items.len(),
            provider = "google_books",
            "Subject search completed"
        );

        Ok(search.items)
    }

    fn name(&self) -> &'static str {
        "google_books"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let provider = GoogleBooksProvider::new("http://test.local/books/v1/".to_string(), None);
        assert_eq!(provider.volumes_url(), "http://test.local/books/v1/volumes");
    }

    #[test]
    fn test_query_params_without_key() {
        let provider = GoogleBooksProvider::new("http://test.local".to_string(), None);
        let params = provider.query_params("fantasy", 40);
        assert_eq!(
            params,
            vec![
                ("q", "subject:fantasy".to_string()),
                ("maxResults", "40".to_string()),
            ]
        );
    }

    #[test]
    fn test_query_params_with_key() {
        let provider =
            GoogleBooksProvider::new("http://test.local".to_string(), Some("secret".to_string()));
        let params = provider.query_params("history", 10);
        assert_eq!(params.last(), Some(&("key", "secret".to_string())));
    }

    #[test]
    fn test_genre_is_encoded_in_request_url() {
        let provider = GoogleBooksProvider::new("http://test.local".to_string(), None);
        let request = provider
            .http_client
            .get(provider.volumes_url())
            .query(&provider.query_params("sci-fi&maxResults=1 #x", 40))
            .build()
            .unwrap();

        let pairs: Vec<(String, String)> = request
            .url()
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("q".to_string(), "subject:sci-fi&maxResults=1 #x".to_string()),
                ("maxResults".to_string(), "40".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn test_transport_error_does_not_leak_api_key() {
        // Nothing listens on port 1
        let provider = GoogleBooksProvider::new(
            "http://127.0.0.1:1".to_string(),
            Some("SECRETKEY".to_string()),
        );

        let err = provider.search_by_subject("fantasy", 40).await.unwrap_err();
        assert!(matches!(err, AppError::HttpClient(_)));
        assert!(!err.to_string().contains("SECRETKEY"), "leaked: {}", err);
    }

    #[test]
    fn test_provider_name() {
        let provider = GoogleBooksProvider::new("http://test.local".to_string(), None);
        assert_eq!(provider.name(), "google_books");
    }
}
