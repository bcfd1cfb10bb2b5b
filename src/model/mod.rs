//! Catalog data model
//!
//! # Components
//!
//! - `MotorcycleLine`: a product family named in the catalog navigation
//! - `ModelVariant`: one year/edition of a line with its own spec page
//! - `SpecificationRecord`: the flattened key/value contents of a spec page
//! - `Catalog`: discovered variants grouped by line

mod catalog;
mod record;
mod variant;

pub use catalog::{Catalog, CatalogLine};
pub use record::{SpecIdentity, SpecificationRecord, IDENTITY_FIELDS};
pub use variant::{split_year_edition, ModelVariant, MotorcycleLine, BASE_EDITION};
