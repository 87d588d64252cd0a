use serde::Deserialize;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Book catalog API base URL
    #[serde(default = "default_catalog_api_url")]
    pub catalog_api_url: String,

    /// Optional catalog API key, sent as the `key` query parameter
    #[serde(default)]
    pub catalog_api_key: Option<String>,

    /// Number of results requested from the catalog per search
    #[serde(default = "default_catalog_page_size")]
    pub catalog_page_size: u32,

    /// First truncation window applied to the fetched results
    #[serde(default = "default_candidate_pool_limit")]
    pub candidate_pool_limit: usize,

    /// Second truncation window; the random pick is made from this shortlist
    #[serde(default = "default_shortlist_size")]
    pub shortlist_size: usize,

    /// Name of the text-generation model loaded at startup
    #[serde(default = "default_model_name")]
    pub model_name: String,

    /// Path to the model artifact. When unset only the name is registered.
    #[serde(default)]
    pub model_path: Option<String>,

    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_catalog_api_url() -> String {
    "https://www.googleapis.com/books/v1".to_string()
}

pub(crate) fn default_catalog_page_size() -> u32 {
    40
}

pub(crate) fn default_candidate_pool_limit() -> usize {
    100
}

pub(crate) fn default_shortlist_size() -> usize {
    10
}

fn default_model_name() -> String {
    "distilgpt2".to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }

    /// Load configuration from an explicit set of key/value pairs
    pub fn from_pairs<I>(pairs: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        envy::from_iter::<_, Config>(pairs)
            .map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }

    /// Socket address the server binds to
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::from_pairs(Vec::<(String, String)>::new()).unwrap();
        assert_eq!(config.catalog_api_url, "https://www.googleapis.com/books/v1");
        assert_eq!(config.catalog_api_key, None);
        assert_eq!(config.catalog_page_size, 40);
        assert_eq!(config.candidate_pool_limit, 100);
        assert_eq!(config.shortlist_size, 10);
        assert_eq!(config.model_name, "distilgpt2");
        assert_eq!(config.model_path, None);
        assert_eq!(config.bind_address(), "127.0.0.1:3000");
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_pairs(vec![
            ("CATALOG_PAGE_SIZE".to_string(), "20".to_string()),
            ("SHORTLIST_SIZE".to_string(), "5".to_string()),
            ("CATALOG_API_KEY".to_string(), "abc".to_string()),
            ("PORT".to_string(), "8080".to_string()),
        ])
        .unwrap();
        assert_eq!(config.catalog_page_size, 20);
        assert_eq!(config.shortlist_size, 5);
        assert_eq!(config.catalog_api_key.as_deref(), Some("abc"));
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn test_invalid_number_is_rejected() {
        let result = Config::from_pairs(vec![(
            "CATALOG_PAGE_SIZE".to_string(),
            "forty".to_string(),
        )]);
        assert!(result.is_err());
    }
}
