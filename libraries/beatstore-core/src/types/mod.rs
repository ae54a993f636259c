mod catalog;
mod license;
mod track;

pub use catalog::{CatalogItem, ItemCategory};
pub use license::{LicenseOption, LicenseTier};
pub use track::Track;
