//! Keyword and category filtering over a catalog.

mod criteria;

pub use criteria::{Category, FilterCriteria, SearchState};

use crate::record::Record;
use crate::resource::Resource;

/// Indices of the records matching `committed`, in catalog order.
///
/// Before the first search of a resource that requires one, default criteria
/// match nothing (the pre-search empty state). Otherwise a record matches
/// when its category field contains the category label (unless the category
/// is `All`) and every keyword term occurs in its searchable fields, all
/// case-insensitively.
pub fn apply(
    records: &[Record],
    resource: Resource,
    committed: &FilterCriteria,
    has_searched: bool,
) -> Vec<usize> {
    if resource.requires_search() && !has_searched && committed.is_default() {
        return Vec::new();
    }

    let terms = committed.terms();
    let category = category_needle(resource, committed.category);
    let fields = resource.searchable_fields();

    records
        .iter()
        .enumerate()
        .filter(|(_, record)| {
            matches_category(record, resource, category.as_deref())
                && matches_terms(record, fields, &terms)
        })
        .map(|(i, _)| i)
        .collect()
}

fn category_needle(resource: Resource, category: Category) -> Option<String> {
    if category.is_wildcard() || resource.category_field().is_none() {
        None
    } else {
        Some(category.label().to_lowercase())
    }
}

fn matches_category(record: &Record, resource: Resource, needle: Option<&str>) -> bool {
    match (needle, resource.category_field()) {
        (Some(needle), Some(field)) => record.field(field).to_lowercase().contains(needle),
        _ => true,
    }
}

fn matches_terms(record: &Record, fields: &[&str], terms: &[String]) -> bool {
    if terms.is_empty() {
        return true;
    }
    let haystack = record.haystack(fields);
    terms.iter().all(|term| haystack.contains(term.as_str()))
}
