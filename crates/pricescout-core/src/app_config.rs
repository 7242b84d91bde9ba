use std::net::SocketAddr;

#[derive(Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub log_level: String,
    /// Shopping-search credential. `None` disables the primary source and
    /// the service serves catalog results only.
    pub shopping_api_key: Option<String>,
    pub shopping_base_url: String,
    pub catalog_base_url: String,
    pub cache_ttl_secs: u64,
    pub request_timeout_secs: u64,
    pub user_agent: String,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("bind_addr", &self.bind_addr)
            .field("log_level", &self.log_level)
            .field(
                "shopping_api_key",
                &self.shopping_api_key.as_ref().map(|_| "[redacted]"),
            )
            .field("shopping_base_url", &self.shopping_base_url)
            .field("catalog_base_url", &self.catalog_base_url)
            .field("cache_ttl_secs", &self.cache_ttl_secs)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_output_redacts_api_key() {
        let config = AppConfig {
            bind_addr: "127.0.0.1:3000".parse().expect("addr"),
            log_level: "info".to_string(),
            shopping_api_key: Some("super-secret".to_string()),
            shopping_base_url: "https://serpapi.com/search.json".to_string(),
            catalog_base_url: "https://dummyjson.com".to_string(),
            cache_ttl_secs: 300,
            request_timeout_secs: 30,
            user_agent: "pricescout/0.1".to_string(),
        };
        let rendered = format!("{config:?}");
        assert!(rendered.contains("[redacted]"));
        assert!(!rendered.contains("super-secret"));
    }
}
