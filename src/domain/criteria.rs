// src/domain/criteria.rs

use crate::domain::property::{Property, PropertyStatus, PropertyType};
use std::collections::HashMap;

/// Fixed purchase-price buckets offered by the listings filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceRange {
    Under500k,
    From500kTo1M,
    From1MTo2M,
    Over2M,
}

impl PriceRange {
    pub const ALL: [PriceRange; 4] = [
        Self::Under500k,
        Self::From500kTo1M,
        Self::From1MTo2M,
        Self::Over2M,
    ];

    /// Query-string value.
    pub fn as_str(&self) -> &'static str {
        match self {
            PriceRange::Under500k => "Under 500k",
            PriceRange::From500kTo1M => "500k-1M",
            PriceRange::From1MTo2M => "1M-2M",
            PriceRange::Over2M => "Over 2M",
        }
    }

    /// Human label for the select box.
    pub fn display(&self) -> &'static str {
        match self {
            PriceRange::Under500k => "Under $500k",
            PriceRange::From500kTo1M => "$500k - $1M",
            PriceRange::From1MTo2M => "$1M - $2M",
            PriceRange::Over2M => "Over $2M",
        }
    }

    pub fn parse(label: &str) -> Option<Self> {
        let label = label.trim();
        Self::ALL
            .into_iter()
            .find(|r| r.as_str().eq_ignore_ascii_case(label))
    }

    /// Half-open `[min, max)` bounds.
    pub fn contains(&self, price: u64) -> bool {
        match self {
            PriceRange::Under500k => price < 500_000,
            PriceRange::From500kTo1M => (500_000..1_000_000).contains(&price),
            PriceRange::From1MTo2M => (1_000_000..2_000_000).contains(&price),
            PriceRange::Over2M => price >= 2_000_000,
        }
    }
}

/// Buy/Rent toggle of the home page search bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Buy,
    Rent,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Buy => "Buy",
            Mode::Rent => "Rent",
        }
    }

    pub fn parse(label: &str) -> Option<Self> {
        match label.trim().to_ascii_lowercase().as_str() {
            "buy" => Some(Mode::Buy),
            "rent" => Some(Mode::Rent),
            _ => None,
        }
    }

    pub fn required_status(&self) -> PropertyStatus {
        match self {
            Mode::Buy => PropertyStatus::ForSale,
            Mode::Rent => PropertyStatus::ForRent,
        }
    }
}

/// Which text fields a search term is matched against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchScope {
    /// Title and location.
    #[default]
    Basic,
    /// Title, location, description and type.
    Extended,
}

/// User-supplied filter parameters. `None` everywhere means "no constraint".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Criteria {
    pub search_term: Option<String>,
    pub scope: SearchScope,
    pub status: Option<PropertyStatus>,
    pub property_type: Option<PropertyType>,
    pub price_range: Option<PriceRange>,
    pub mode: Option<Mode>,
}

impl Criteria {
    /// Build criteria from decoded query parameters.
    ///
    /// Recognized keys: `q`, `status`, `type`, `price`, `mode`. Values that do
    /// not name a known option ("All", typos, empty strings) are dropped.
    pub fn from_params(params: &HashMap<String, String>) -> Self {
        let get = |key: &str| params.get(key).map(String::as_str);

        Criteria {
            search_term: get("q")
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string),
            scope: SearchScope::Basic,
            status: get("status").and_then(PropertyStatus::parse),
            property_type: get("type").and_then(PropertyType::parse),
            price_range: get("price").and_then(PriceRange::parse),
            mode: get("mode").and_then(Mode::parse),
        }
    }

    pub fn with_scope(mut self, scope: SearchScope) -> Self {
        self.scope = scope;
        self
    }

    /// True when no constraint is set at all.
    pub fn is_empty(&self) -> bool {
        self.search_term.is_none()
            && self.status.is_none()
            && self.property_type.is_none()
            && self.price_range.is_none()
            && self.mode.is_none()
    }

    /// Logical AND across every supplied constraint.
    pub fn matches(&self, property: &Property) -> bool {
        self.matches_term(property)
            && self.status.map_or(true, |s| property.status == s)
            && self
                .mode
                .map_or(true, |m| property.status == m.required_status())
            && self
                .property_type
                .map_or(true, |t| property.property_type == t)
            && self.matches_price(property)
    }

    fn matches_term(&self, property: &Property) -> bool {
        let Some(term) = self.search_term.as_deref().map(str::trim) else {
            return true;
        };
        if term.is_empty() {
            return true;
        }

        let needle = term.to_lowercase();
        let hit = |haystack: &str| haystack.to_lowercase().contains(&needle);

        hit(&property.title)
            || hit(&property.location)
            || (self.scope == SearchScope::Extended
                && (hit(&property.description) || hit(property.property_type.as_str())))
    }

    // Buckets are purchase prices; a monthly rent is never in one.
    fn matches_price(&self, property: &Property) -> bool {
        match self.price_range {
            None => true,
            Some(range) => !property.is_rental() && range.contains(property.price),
        }
    }
}
