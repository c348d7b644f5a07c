//! The named catalogs served by the remote endpoint.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::sync::LoadPolicy;

/// Query parameter names a view reads and writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryParams {
    pub keyword: &'static str,
    /// `None` for catalogs without a category filter.
    pub category: Option<&'static str>,
}

/// A named remote catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Resource {
    Events,
    Members,
}

impl Resource {
    pub fn name(&self) -> &'static str {
        match self {
            Resource::Events => "events",
            Resource::Members => "members",
        }
    }

    /// Value of the `action` field sent to the remote endpoint.
    pub fn action(&self) -> &'static str {
        match self {
            Resource::Events => "get_events",
            Resource::Members => "get_members",
        }
    }

    /// Response field holding the record array.
    pub fn payload_field(&self) -> &'static str {
        match self {
            Resource::Events => "data",
            Resource::Members => "members",
        }
    }

    /// Session cache key.
    pub fn cache_key(&self) -> &'static str {
        match self {
            Resource::Events => "events_data",
            Resource::Members => "members_data",
        }
    }

    /// Fields concatenated for keyword matching, in order.
    pub fn searchable_fields(&self) -> &'static [&'static str] {
        match self {
            Resource::Events => &["title", "date", "location", "description"],
            Resource::Members => &[
                "name",
                "memberId",
                "qualification",
                "address",
                "email",
                "phone",
            ],
        }
    }

    pub fn category_field(&self) -> Option<&'static str> {
        match self {
            Resource::Events => None,
            Resource::Members => Some("category"),
        }
    }

    /// Whether the view shows nothing until the user first searches.
    ///
    /// The member directory is a lookup, not a listing; events are listed
    /// in full until narrowed.
    pub fn requires_search(&self) -> bool {
        matches!(self, Resource::Members)
    }

    pub fn query_params(&self) -> QueryParams {
        match self {
            Resource::Events => QueryParams {
                keyword: "e_search",
                category: None,
            },
            Resource::Members => QueryParams {
                keyword: "m_search",
                category: Some("cat"),
            },
        }
    }

    /// Site route of the view that lists this catalog.
    pub fn route(&self) -> &'static str {
        match self {
            Resource::Events => "/academics-events",
            Resource::Members => "/members-details",
        }
    }

    /// Load policy used by the listing view.
    pub fn listing_policy(&self) -> LoadPolicy {
        match self {
            Resource::Events => LoadPolicy::RevalidateWithFallback,
            Resource::Members => LoadPolicy::CacheFirst,
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Resource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "events" | "event" => Ok(Resource::Events),
            "members" | "member" | "directory" => Ok(Resource::Members),
            other => Err(format!(
                "Unknown catalog '{other}'. Expected 'events' or 'members'"
            )),
        }
    }
}
