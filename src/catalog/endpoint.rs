use url::Url;

use crate::config::ApiConfig;

/// Builds the URL of one catalog page: `<base>/<collection>?page=<n>`.
#[derive(Debug, Clone)]
pub struct PageEndpoint {
    base_url: String,
    collection: String,
    per_page: Option<u32>,
}

impl PageEndpoint {
    pub fn new(base_url: impl Into<String>, collection: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            collection: collection.into(),
            per_page: None,
        }
    }

    pub fn from_config(config: &ApiConfig) -> Self {
        Self::new(config.base_url.clone(), config.collection.clone()).per_page(config.per_page)
    }

    pub fn per_page(mut self, per_page: Option<u32>) -> Self {
        self.per_page = per_page;
        self
    }

    pub fn page_url(&self, page: u32) -> Result<Url, url::ParseError> {
        let raw = format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            self.collection.trim_matches('/')
        );
        let mut url = Url::parse(&raw)?;

        {
            let mut query = url.query_pairs_mut();
            query.append_pair("page", &page.to_string());
            if let Some(per_page) = self.per_page {
                query.append_pair("per_page", &per_page.to_string());
            }
        }

        Ok(url)
    }
}
