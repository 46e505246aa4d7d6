use async_trait::async_trait;
use reqwest::header::HeaderMap;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use url::Url;

use crate::config::Config;
use crate::constants::{MAX_CATEGORY_PAGES, TOTAL_PAGES_HEADER, USER_AGENT};
use crate::error::FetchError;
use crate::wp::models::{Category, Post};
use crate::wp::source::{PostSource, PostsPage};

/// HTTP client for the WordPress REST API of one site.
#[derive(Debug, Clone)]
pub struct WpClient {
    http: reqwest::Client,
    base_url: String,
    categories_per_page: u32,
}

impl WpClient {
    /// Build a client from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(config: &Config) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(config.http_timeout)
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self::with_client(
            http,
            &config.base_url,
            config.categories_per_page,
        ))
    }

    /// Wrap an existing HTTP client.
    #[must_use]
    pub fn with_client(http: reqwest::Client, base_url: &str, categories_per_page: u32) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            categories_per_page,
        }
    }

    /// `{base}/wp-json/wp/v2/posts?_embed&per_page={N}&page={P}`
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL does not form a valid URL.
    pub fn posts_url(&self, page: u32, per_page: u32) -> Result<Url, FetchError> {
        self.endpoint_url(
            "posts",
            &format!("_embed&per_page={per_page}&page={page}"),
        )
    }

    /// `{base}/wp-json/wp/v2/categories?per_page={N}&page={P}`
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL does not form a valid URL.
    pub fn categories_url(&self, page: u32) -> Result<Url, FetchError> {
        self.endpoint_url(
            "categories",
            &format!("per_page={}&page={page}", self.categories_per_page),
        )
    }

    fn endpoint_url(&self, resource: &str, query: &str) -> Result<Url, FetchError> {
        let raw = format!("{}/wp-json/wp/v2/{resource}", self.base_url);
        let mut url = Url::parse(&raw).map_err(|e| FetchError::parse(&raw, e.to_string()))?;
        url.set_query(Some(query));
        Ok(url)
    }

    /// GET a collection URL, returning the parsed body and response headers.
    async fn get_collection<T: DeserializeOwned>(
        &self,
        url: Url,
    ) -> Result<(Vec<T>, HeaderMap), FetchError> {
        let url_str = url.to_string();
        debug!(url = %url_str, "Fetching");

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|source| FetchError::Network {
                url: url_str.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::HttpStatus {
                url: url_str,
                status,
            });
        }

        let headers = response.headers().clone();
        let body = response
            .text()
            .await
            .map_err(|source| FetchError::Network {
                url: url_str.clone(),
                source,
            })?;
        let items =
            serde_json::from_str(&body).map_err(|e| FetchError::parse(&url_str, e.to_string()))?;

        Ok((items, headers))
    }
}

#[async_trait]
impl PostSource for WpClient {
    async fn fetch_posts(&self, page: u32, per_page: u32) -> Result<PostsPage, FetchError> {
        let url = self.posts_url(page, per_page)?;
        let url_str = url.to_string();
        let (posts, headers) = self.get_collection::<Post>(url).await?;

        let total_pages = match header_value(&headers, TOTAL_PAGES_HEADER) {
            Some(raw) => raw.parse::<u32>().map_err(|e| {
                FetchError::parse(&url_str, format!("invalid {TOTAL_PAGES_HEADER} {raw:?}: {e}"))
            })?,
            None => {
                return Err(FetchError::parse(
                    &url_str,
                    format!("missing {TOTAL_PAGES_HEADER} header"),
                ))
            }
        };

        debug!(page, count = posts.len(), total_pages, "Fetched posts page");
        Ok(PostsPage { posts, total_pages })
    }

    async fn fetch_categories(&self) -> Result<Vec<Category>, FetchError> {
        let mut categories = Vec::new();
        let mut page = 1;

        loop {
            let url = self.categories_url(page)?;
            let (batch, headers) = self.get_collection::<Category>(url).await?;
            categories.extend(batch);

            // A missing or unreadable header means everything fit on one page.
            let total_pages = header_value(&headers, TOTAL_PAGES_HEADER)
                .and_then(|raw| raw.parse::<u32>().ok())
                .unwrap_or(1);

            if page >= total_pages {
                break;
            }
            if page >= MAX_CATEGORY_PAGES {
                warn!(
                    total_pages,
                    fetched = categories.len(),
                    "Category pages exceed limit, remaining names will be missing"
                );
                break;
            }
            page += 1;
        }

        debug!(count = categories.len(), "Fetched categories");
        Ok(categories)
    }
}

fn header_value<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty())
}
