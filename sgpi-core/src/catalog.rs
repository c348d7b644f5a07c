//! In-memory catalogs and their freshness.

use crate::record::Record;
use crate::resource::Resource;

/// Where a catalog's records came from.
///
/// Moves `Absent -> Cached -> Fresh` (or straight to `Fresh`) and never back
/// to `Absent` within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Freshness {
    Absent,
    Cached,
    Fresh,
}

/// The ordered records of one resource, kept in the order received.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    pub resource: Resource,
    pub records: Vec<Record>,
    pub freshness: Freshness,
}

impl Catalog {
    pub fn empty(resource: Resource) -> Self {
        Catalog {
            resource,
            records: Vec::new(),
            freshness: Freshness::Absent,
        }
    }

    /// Populate from the session cache. A fresh catalog is left untouched.
    pub fn with_cached(self, records: Vec<Record>) -> Self {
        if self.freshness == Freshness::Fresh {
            return self;
        }
        Catalog {
            records,
            freshness: Freshness::Cached,
            ..self
        }
    }

    /// Replace with records from a successful remote fetch.
    pub fn with_fresh(self, records: Vec<Record>) -> Self {
        Catalog {
            records,
            freshness: Freshness::Fresh,
            ..self
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn one() -> Vec<Record> {
        vec![Record::from_pairs([("title", "CME")])]
    }

    #[test]
    fn cached_then_fresh() {
        let catalog = Catalog::empty(Resource::Events).with_cached(one());
        assert_eq!(catalog.freshness, Freshness::Cached);

        let catalog = catalog.with_fresh(Vec::new());
        assert_eq!(catalog.freshness, Freshness::Fresh);
        assert!(catalog.is_empty());
    }

    #[test]
    fn cache_never_downgrades_fresh() {
        let catalog = Catalog::empty(Resource::Members)
            .with_fresh(one())
            .with_cached(Vec::new());
        assert_eq!(catalog.freshness, Freshness::Fresh);
        assert_eq!(catalog.len(), 1);
    }
}
