//! Beat Store Core
//!
//! Shared domain types, error handling, and the analytics boundary for the
//! Beat Store engines.
//!
//! This crate defines:
//! - **Domain Types**: `CatalogItem`, `LicenseOption`, `LicenseTier`, `Track`
//! - **Analytics**: the `AnalyticsSink` trait and the `AnalyticsEvent` vocabulary
//! - **Error Handling**: unified `StoreError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use beatstore_core::types::{CatalogItem, ItemCategory, LicenseOption, LicenseTier};
//!
//! let item = CatalogItem::new("beat-1", "Midnight Drive", "Producer X", 29.99)
//!     .with_license(LicenseOption::new(LicenseTier::Basic, 29.99));
//!
//! assert_eq!(item.category, ItemCategory::Beat);
//! assert!(item.license(LicenseTier::Basic).is_some());
//! ```

#![forbid(unsafe_code)]

pub mod analytics;
pub mod error;
pub mod types;

// Re-export commonly used types
pub use analytics::{AnalyticsEvent, AnalyticsSink, NullAnalytics, RecordingAnalytics};
pub use error::{Result, StoreError};
pub use types::{CatalogItem, ItemCategory, LicenseOption, LicenseTier, Track};
