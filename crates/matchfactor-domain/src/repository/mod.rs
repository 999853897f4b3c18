//! Catalog source trait
//!
//! Defines where the equipment catalog comes from. Implementations live in
//! the infrastructure layer; the engine only ever sees the built catalog.

use matchfactor_types::CatalogError;

use crate::model::EquipmentCatalog;

/// Anything that can produce a complete equipment catalog
pub trait CatalogSource {
    /// Build the catalog, resolving missing optional fields to defaults
    fn load_catalog(&self) -> Result<EquipmentCatalog, CatalogError>;

    /// Short description for logs and `catalog` output
    fn describe(&self) -> String;
}
