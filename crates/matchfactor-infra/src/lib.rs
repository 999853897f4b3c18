//! Infrastructure layer
//!
//! Builds the equipment catalog from TOML, either the built-in table or a
//! file supplied by the user.

pub mod catalog_loader;

pub use catalog_loader::{parse_catalog, BuiltinCatalog, TomlCatalogFile};
