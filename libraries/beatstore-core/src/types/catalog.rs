/// Catalog domain types
use crate::types::{LicenseOption, LicenseTier};
use serde::{Deserialize, Serialize};

/// Category of a purchasable unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemCategory {
    /// A single beat
    #[default]
    Beat,

    /// A bundle of beats sold together
    Pack,
}

impl ItemCategory {
    /// Display label, as shown in notifications and analytics payloads
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Beat => "Beat",
            Self::Pack => "Pack",
        }
    }

    /// Parse from a label, case-insensitively
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "beat" => Some(Self::Beat),
            "pack" => Some(Self::Pack),
            _ => None,
        }
    }
}

impl std::fmt::Display for ItemCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A purchasable unit supplied by the catalog backend
///
/// Read-only to the engines; the cart snapshots the fields it needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    /// Unique item identifier
    pub id: String,

    /// Item title
    pub title: String,

    /// Artist / producer name
    pub artist: String,

    /// Base price before any license selection
    pub price: f64,

    /// Beat or Pack
    pub category: ItemCategory,

    /// Streamable preview URL
    pub preview_url: String,

    /// Artwork URL
    pub artwork_url: String,

    /// Available license options
    pub licenses: Vec<LicenseOption>,
}

impl CatalogItem {
    /// Create a catalog item with minimal fields (category Beat, no licenses)
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        artist: impl Into<String>,
        price: f64,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            artist: artist.into(),
            price,
            category: ItemCategory::Beat,
            preview_url: String::new(),
            artwork_url: String::new(),
            licenses: Vec::new(),
        }
    }

    /// Builder-style: set the category
    #[must_use]
    pub fn with_category(mut self, category: ItemCategory) -> Self {
        self.category = category;
        self
    }

    /// Builder-style: add a license option
    #[must_use]
    pub fn with_license(mut self, license: LicenseOption) -> Self {
        self.licenses.push(license);
        self
    }

    /// Look up the license option for a tier
    #[must_use]
    pub fn license(&self, tier: LicenseTier) -> Option<&LicenseOption> {
        self.licenses.iter().find(|l| l.tier == tier)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_labels() {
        assert_eq!(ItemCategory::Beat.as_str(), "Beat");
        assert_eq!(ItemCategory::Pack.as_str(), "Pack");
        assert_eq!(ItemCategory::parse("pack"), Some(ItemCategory::Pack));
        assert_eq!(ItemCategory::parse("album"), None);
    }

    #[test]
    fn license_lookup() {
        let item = CatalogItem::new("b1", "Night Loop", "Producer X", 29.99)
            .with_license(LicenseOption::new(LicenseTier::Basic, 29.99))
            .with_license(LicenseOption::new(LicenseTier::Premium, 59.99));

        assert_eq!(
            item.license(LicenseTier::Premium).map(|l| l.price),
            Some(59.99)
        );
        assert!(item.license(LicenseTier::Exclusive).is_none());
    }
}
