//! Remote catalog source.
//!
//! The endpoint is an opaque request/response service: one POST per fetch,
//! no authentication, JSON in and out. The `CatalogSource` trait is the seam
//! that lets views be driven by an in-memory source in tests.

pub mod protocol;

use async_trait::async_trait;
use tracing::debug;

use crate::error::SgpiResult;
use crate::record::Record;
use crate::remote::protocol::{CatalogRequest, parse_response};
use crate::resource::Resource;

/// Something that can produce the records of a named catalog.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn fetch(&self, resource: Resource) -> SgpiResult<Vec<Record>>;
}

/// HTTP implementation of [`CatalogSource`].
#[derive(Clone)]
pub struct HttpCatalogSource {
    http: reqwest::Client,
    endpoint: url::Url,
}

impl HttpCatalogSource {
    pub fn new(endpoint: &str) -> SgpiResult<Self> {
        Ok(HttpCatalogSource {
            http: reqwest::Client::new(),
            endpoint: url::Url::parse(endpoint)?,
        })
    }

    /// Endpoint with a `t=<unix millis>` parameter so intermediaries never
    /// answer from their own cache.
    fn cache_busted_endpoint(&self) -> url::Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("t", &chrono::Utc::now().timestamp_millis().to_string());
        url
    }
}

#[async_trait]
impl CatalogSource for HttpCatalogSource {
    async fn fetch(&self, resource: Resource) -> SgpiResult<Vec<Record>> {
        let url = self.cache_busted_endpoint();
        debug!(%resource, %url, "fetching catalog");

        let body = self
            .http
            .post(url)
            .json(&CatalogRequest::for_resource(resource))
            .send()
            .await?
            .text()
            .await?;

        let records = parse_response(resource, &body)?;
        debug!(%resource, count = records.len(), "fetched catalog");
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cache_buster_keeps_existing_query() {
        let source = HttpCatalogSource::new("https://script.example.com/exec?v=2").unwrap();
        let url = source.cache_busted_endpoint();

        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert_eq!(pairs[0], ("v".to_string(), "2".to_string()));
        assert_eq!(pairs[1].0, "t");
        assert!(pairs[1].1.parse::<i64>().is_ok());
    }

    #[test]
    fn rejects_unparseable_endpoint() {
        assert!(HttpCatalogSource::new("not a url").is_err());
    }
}
