// src/domain/search.rs

use crate::domain::criteria::Criteria;
use crate::domain::property::Property;

pub const SUGGESTION_LIMIT: usize = 5;
pub const SUGGESTION_MIN_CHARS: usize = 3;
pub const FEATURED_LIMIT: usize = 6;

/// Whether a search has been run, as opposed to a search that found nothing.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchState<'a> {
    NotSearched,
    Searched(Vec<&'a Property>),
}

impl<'a> SearchState<'a> {
    pub fn results(&self) -> Option<&[&'a Property]> {
        match self {
            SearchState::NotSearched => None,
            SearchState::Searched(found) => Some(found),
        }
    }
}

/// Properties matching every constraint in `criteria`, in input order.
pub fn filter<'a, I>(properties: I, criteria: &Criteria) -> Vec<&'a Property>
where
    I: IntoIterator<Item = &'a Property>,
{
    properties
        .into_iter()
        .filter(|p| criteria.matches(p))
        .collect()
}

/// Up to [`SUGGESTION_LIMIT`] distinct titles, locations or type labels that
/// contain `query` (case-insensitive), in order of first appearance.
///
/// Queries shorter than [`SUGGESTION_MIN_CHARS`] after trimming yield nothing.
pub fn suggest<'a, I>(properties: I, query: &str) -> Vec<&'a str>
where
    I: IntoIterator<Item = &'a Property>,
{
    let query = query.trim();
    if query.chars().count() < SUGGESTION_MIN_CHARS {
        return Vec::new();
    }
    let needle = query.to_lowercase();

    let mut out: Vec<&'a str> = Vec::with_capacity(SUGGESTION_LIMIT);
    let candidates = properties.into_iter().flat_map(|p| {
        [
            p.title.as_str(),
            p.location.as_str(),
            p.property_type.as_str(),
        ]
    });

    for candidate in candidates {
        if out.len() == SUGGESTION_LIMIT {
            break;
        }
        if out.contains(&candidate) {
            continue;
        }
        if candidate.to_lowercase().contains(&needle) {
            out.push(candidate);
        }
    }

    out
}

/// Featured properties for the home page, catalog order, capped at
/// [`FEATURED_LIMIT`].
pub fn featured<'a, I>(properties: I) -> Vec<&'a Property>
where
    I: IntoIterator<Item = &'a Property>,
{
    properties
        .into_iter()
        .filter(|p| p.featured)
        .take(FEATURED_LIMIT)
        .collect()
}
