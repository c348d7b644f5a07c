//! Keeps committed criteria in the view's URL so results can be linked.
//!
//! Only non-default values are written, so a default view has a
//! parameter-free URL. Updating the URL never reloads anything; it only
//! changes the address shown to the user.

use tracing::warn;
use url::Url;

use crate::resource::{QueryParams, Resource};
use crate::search::{Category, FilterCriteria};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryBridge {
    url: Url,
    params: QueryParams,
}

impl QueryBridge {
    pub fn new(url: Url, resource: Resource) -> Self {
        QueryBridge {
            url,
            params: resource.query_params(),
        }
    }

    /// Bridge for `resource`'s route under `site_url`.
    pub fn for_site(site_url: &Url, resource: Resource) -> Result<Self, url::ParseError> {
        Ok(Self::new(site_url.join(resource.route())?, resource))
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Criteria encoded in the current URL. Absent parameters mean default;
    /// an unknown category falls back to `All`.
    pub fn read(&self) -> FilterCriteria {
        let mut criteria = FilterCriteria::default();

        for (key, value) in self.url.query_pairs() {
            if key == self.params.keyword {
                criteria.keyword = value.into_owned();
            } else if Some(key.as_ref()) == self.params.category {
                criteria.category = value.parse().unwrap_or_else(|e| {
                    warn!(category = %value, error = %e, "ignoring category from URL");
                    Category::All
                });
            }
        }

        criteria
    }

    /// Replace the query with the non-default parts of `criteria`.
    pub fn write(&mut self, criteria: &FilterCriteria) {
        let mut pairs: Vec<(&str, &str)> = Vec::new();
        if !criteria.keyword.is_empty() {
            pairs.push((self.params.keyword, &criteria.keyword));
        }
        if let Some(name) = self.params.category {
            if !criteria.category.is_wildcard() {
                pairs.push((name, criteria.category.label()));
            }
        }

        if pairs.is_empty() {
            self.url.set_query(None);
        } else {
            self.url.query_pairs_mut().clear().extend_pairs(pairs);
        }
    }

    /// Drop every filter parameter.
    pub fn clear(&mut self) {
        self.url.set_query(None);
    }
}
