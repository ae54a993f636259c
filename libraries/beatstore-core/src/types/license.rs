/// License tier and license option types
use serde::{Deserialize, Serialize};

/// Usage-rights level attached to a purchasable item
///
/// The tier vocabulary is closed: unknown labels fail to parse at the
/// boundary instead of flowing into discount grouping as free-form strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LicenseTier {
    Basic,
    Premium,
    Professional,
    Legacy,
    Exclusive,
}

impl LicenseTier {
    /// Canonical display label
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Basic => "Basic",
            Self::Premium => "Premium",
            Self::Professional => "Professional",
            Self::Legacy => "Legacy",
            Self::Exclusive => "Exclusive",
        }
    }

    /// Parse from a label, case-insensitively
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "basic" => Some(Self::Basic),
            "premium" => Some(Self::Premium),
            "professional" => Some(Self::Professional),
            "legacy" => Some(Self::Legacy),
            "exclusive" => Some(Self::Exclusive),
            _ => None,
        }
    }

    /// Whether this tier is exempt from promotional pricing
    #[must_use]
    pub fn is_exclusive(&self) -> bool {
        matches!(self, Self::Exclusive)
    }
}

impl std::fmt::Display for LicenseTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for LicenseTier {
    type Err = crate::error::StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| crate::error::StoreError::UnknownLicenseTier(s.to_string()))
    }
}

/// A purchasable license attached to a catalog item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LicenseOption {
    /// Usage-rights tier
    pub tier: LicenseTier,

    /// Price in `currency` units
    pub price: f64,

    /// ISO currency code
    pub currency: String,

    /// Human-readable description
    pub description: String,

    /// Feature strings shown to the buyer
    pub features: Vec<String>,

    /// Deliverable file reference, withheld from client payloads until purchase
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub download_file: Option<String>,
}

impl LicenseOption {
    /// Create a license option with the given tier and price (USD, no features)
    pub fn new(tier: LicenseTier, price: f64) -> Self {
        Self {
            tier,
            price,
            currency: "USD".to_string(),
            description: String::new(),
            features: Vec::new(),
            download_file: None,
        }
    }
}
