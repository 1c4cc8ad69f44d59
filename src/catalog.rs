// src/catalog.rs

use crate::domain::property::Property;
use crate::domain::search;
use crate::domain::Criteria;
use std::collections::HashSet;
use std::fmt;
use std::fs;
use tracing::info;

/// Sample listings compiled into the binary.
const SAMPLE_JSON: &str = include_str!("../data/properties.json");

#[derive(Debug)]
pub enum CatalogError {
    Read(String),
    Parse(String),
    DuplicateId(u32),
    MissingImages(u32),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Read(msg) => write!(f, "Failed to read catalog: {msg}"),
            CatalogError::Parse(msg) => write!(f, "Failed to parse catalog: {msg}"),
            CatalogError::DuplicateId(id) => write!(f, "Duplicate property id {id}"),
            CatalogError::MissingImages(id) => write!(f, "Property {id} has no images"),
        }
    }
}

impl std::error::Error for CatalogError {}

/// The read-only set of listings. Built once at startup and only borrowed after.
#[derive(Debug, Clone)]
pub struct Catalog {
    properties: Vec<Property>,
}

impl Catalog {
    /// Validate and wrap an ordered list of properties.
    pub fn new(properties: Vec<Property>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(properties.len());
        for p in &properties {
            if !seen.insert(p.id) {
                return Err(CatalogError::DuplicateId(p.id));
            }
            if p.images.is_empty() {
                return Err(CatalogError::MissingImages(p.id));
            }
        }
        Ok(Self { properties })
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let properties: Vec<Property> =
            serde_json::from_str(json).map_err(|e| CatalogError::Parse(e.to_string()))?;
        Self::new(properties)
    }

    /// The embedded EliteHomes listings.
    pub fn sample() -> Result<Self, CatalogError> {
        Self::from_json(SAMPLE_JSON)
    }

    /// Load from a JSON file on disk, falling back to the embedded sample
    /// when no path is configured.
    pub fn load(path: Option<&str>) -> Result<Self, CatalogError> {
        let catalog = match path {
            Some(path) => {
                let json = fs::read_to_string(path)
                    .map_err(|e| CatalogError::Read(format!("{path}: {e}")))?;
                Self::from_json(&json)?
            }
            None => Self::sample()?,
        };

        info!(
            properties = catalog.len(),
            source = path.unwrap_or("embedded"),
            "catalog loaded"
        );
        Ok(catalog)
    }

    pub fn all(&self) -> &[Property] {
        &self.properties
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    pub fn find_by_id(&self, id: u32) -> Option<&Property> {
        self.all().iter().find(|p| p.id == id)
    }

    pub fn filter(&self, criteria: &Criteria) -> Vec<&Property> {
        search::filter(self.all(), criteria)
    }

    pub fn suggest(&self, query: &str) -> Vec<&str> {
        search::suggest(self.all(), query)
    }

    pub fn featured(&self) -> Vec<&Property> {
        search::featured(self.all())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_catalog_loads() {
        let catalog = Catalog::sample().unwrap();
        assert_eq!(catalog.len(), 12);
        assert_eq!(catalog.all()[0].title, "Luxury Modern Villa");
    }

    #[test]
    fn find_by_id_hits_and_misses() {
        let catalog = Catalog::sample().unwrap();
        assert_eq!(
            catalog.find_by_id(6).map(|p| p.title.as_str()),
            Some("Urban Loft Apartment")
        );
        assert!(catalog.find_by_id(999).is_none());
    }

    #[test]
    fn rejects_duplicate_ids() {
        let mut props = Catalog::sample().unwrap().all().to_vec();
        props[1].id = props[0].id;
        match Catalog::new(props) {
            Err(CatalogError::DuplicateId(1)) => {}
            other => panic!("expected DuplicateId, got: {:?}", other),
        }
    }

    #[test]
    fn rejects_empty_images() {
        let mut props = Catalog::sample().unwrap().all().to_vec();
        props[2].images.clear();
        match Catalog::new(props) {
            Err(CatalogError::MissingImages(3)) => {}
            other => panic!("expected MissingImages, got: {:?}", other),
        }
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        assert!(matches!(
            Catalog::from_json("[{\"id\": 1}]"),
            Err(CatalogError::Parse(_))
        ));
    }

    #[test]
    fn missing_file_is_a_read_error() {
        assert!(matches!(
            Catalog::load(Some("does/not/exist.json")),
            Err(CatalogError::Read(_))
        ));
    }
}
