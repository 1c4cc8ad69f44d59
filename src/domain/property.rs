// src/domain/property.rs

use serde::{Deserialize, Serialize};

/// Listing lifecycle status. Closed set: anything else is rejected when the
/// catalog is deserialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PropertyStatus {
    #[serde(rename = "For Sale")]
    ForSale,
    #[serde(rename = "For Rent")]
    ForRent,
    #[serde(rename = "Sold")]
    Sold,
}

impl PropertyStatus {
    pub const ALL: [PropertyStatus; 3] = [Self::ForSale, Self::ForRent, Self::Sold];

    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyStatus::ForSale => "For Sale",
            PropertyStatus::ForRent => "For Rent",
            PropertyStatus::Sold => "Sold",
        }
    }

    /// Case-insensitive label lookup. Unknown labels yield `None`.
    pub fn parse(label: &str) -> Option<Self> {
        let label = label.trim();
        Self::ALL
            .into_iter()
            .find(|s| s.as_str().eq_ignore_ascii_case(label))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PropertyType {
    House,
    Condo,
    Apartment,
    Townhouse,
    Cabin,
}

impl PropertyType {
    pub const ALL: [PropertyType; 5] = [
        Self::House,
        Self::Condo,
        Self::Apartment,
        Self::Townhouse,
        Self::Cabin,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyType::House => "House",
            PropertyType::Condo => "Condo",
            PropertyType::Apartment => "Apartment",
            PropertyType::Townhouse => "Townhouse",
            PropertyType::Cabin => "Cabin",
        }
    }

    pub fn parse(label: &str) -> Option<Self> {
        let label = label.trim();
        Self::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(label))
    }
}

/// Listing agent, denormalized onto each property.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Agent {
    pub name: String,
    pub phone: String,
    pub email: String,
}

impl Agent {
    pub fn initials(&self) -> String {
        initials(&self.name)
    }
}

/// "Sarah Johnson" -> "SJ"
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub id: u32,
    pub title: String,
    /// Sale price, or monthly rent for `ForRent` listings.
    pub price: u64,
    pub location: String,
    pub bedrooms: u32,
    pub bathrooms: u32,
    pub sqft: u32,
    #[serde(rename = "type")]
    pub property_type: PropertyType,
    pub status: PropertyStatus,
    pub featured: bool,
    pub images: Vec<String>,
    pub description: String,
    pub amenities: Vec<String>,
    pub year_built: i32,
    pub lot_size: String,
    pub garage: u32,
    pub agent: Agent,
}

impl Property {
    pub fn is_rental(&self) -> bool {
        self.status == PropertyStatus::ForRent
    }

    /// "$1,200,000", or "$3,200/mo" for rentals.
    pub fn price_label(&self) -> String {
        let amount = format!("${}", group_thousands(self.price));
        if self.is_rental() {
            format!("{amount}/mo")
        } else {
            amount
        }
    }

    /// Cover image for cards. Catalog loading guarantees at least one image.
    pub fn cover_image(&self) -> &str {
        self.images.first().map(String::as_str).unwrap_or_default()
    }

    /// Gallery position for a requested image index, wrapped into range.
    pub fn gallery(&self, requested: usize) -> Gallery {
        let len = self.images.len().max(1);
        let current = requested % len;
        Gallery {
            current,
            len,
            prev: (current + len - 1) % len,
            next: (current + 1) % len,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gallery {
    pub current: usize,
    pub len: usize,
    pub prev: usize,
    pub next: usize,
}

/// 1234567 -> "1,234,567"
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
