/// Default API server URL
const DEFAULT_API_URL: &str = "http://localhost:3000";

/// Client configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    api_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }
}

impl ClientConfig {
    /// Configuration from `CLIENT_API_URL`, falling back to the local server
    pub fn from_env() -> Self {
        Self::default()
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_url = lookup("CLIENT_API_URL")
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        Self::new(api_url)
    }

    /// Configuration pointing at `api_url`; a trailing slash is dropped
    pub fn new(api_url: impl Into<String>) -> Self {
        let api_url = api_url.into().trim().trim_end_matches('/').to_string();
        Self { api_url }
    }

    pub fn server_url(&self) -> &str {
        &self.api_url
    }

    /// Get the full URL for an API endpoint
    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.api_url, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_url() {
        let config = ClientConfig::from_lookup(|_| None);
        assert_eq!(config.server_url(), "http://localhost:3000");
        assert_eq!(
            config.api_url("/api/auth/me"),
            "http://localhost:3000/api/auth/me"
        );
    }

    #[test]
    fn test_url_from_lookup() {
        let config = ClientConfig::from_lookup(|key| {
            (key == "CLIENT_API_URL").then(|| "https://vocab.example.com/".to_string())
        });
        assert_eq!(
            config.api_url("/api/words"),
            "https://vocab.example.com/api/words"
        );
    }
}
