//! Read-only equipment catalog
//!
//! Built once by the outer layer and passed by reference into every
//! calculation. There are no mutating methods after construction, so a
//! catalog behind `&` or `Arc` is safe for any number of readers.

use std::collections::BTreeMap;

use matchfactor_types::CatalogError;

use super::{HaulerSpec, LoaderSpec, MaterialSpec};

#[derive(Debug, Clone, Default)]
pub struct EquipmentCatalog {
    loaders: BTreeMap<String, LoaderSpec>,
    haulers: BTreeMap<String, HaulerSpec>,
    materials: BTreeMap<String, MaterialSpec>,
}

impl EquipmentCatalog {
    /// Build a catalog keyed by name. A later record replaces an earlier
    /// one with the same name.
    pub fn new(
        loaders: impl IntoIterator<Item = LoaderSpec>,
        haulers: impl IntoIterator<Item = HaulerSpec>,
        materials: impl IntoIterator<Item = MaterialSpec>,
    ) -> Self {
        Self {
            loaders: loaders.into_iter().map(|l| (l.name.clone(), l)).collect(),
            haulers: haulers.into_iter().map(|h| (h.name.clone(), h)).collect(),
            materials: materials.into_iter().map(|m| (m.name.clone(), m)).collect(),
        }
    }

    pub fn loader(&self, name: &str) -> Result<&LoaderSpec, CatalogError> {
        self.loaders
            .get(name.trim())
            .ok_or_else(|| CatalogError::UnknownLoader(name.to_string()))
    }

    pub fn hauler(&self, name: &str) -> Result<&HaulerSpec, CatalogError> {
        self.haulers
            .get(name.trim())
            .ok_or_else(|| CatalogError::UnknownHauler(name.to_string()))
    }

    pub fn material(&self, name: &str) -> Result<&MaterialSpec, CatalogError> {
        self.materials
            .get(name.trim())
            .ok_or_else(|| CatalogError::UnknownMaterial(name.to_string()))
    }

    /// Loaders in name order
    pub fn loaders(&self) -> impl Iterator<Item = &LoaderSpec> {
        self.loaders.values()
    }

    /// Haulers in name order
    pub fn haulers(&self) -> impl Iterator<Item = &HaulerSpec> {
        self.haulers.values()
    }

    /// Materials in name order
    pub fn materials(&self) -> impl Iterator<Item = &MaterialSpec> {
        self.materials.values()
    }

    /// Fail if any of the three tables is empty
    pub fn ensure_complete(&self) -> Result<(), CatalogError> {
        if self.loaders.is_empty() {
            return Err(CatalogError::Empty("loaders"));
        }
        if self.haulers.is_empty() {
            return Err(CatalogError::Empty("haulers"));
        }
        if self.materials.is_empty() {
            return Err(CatalogError::Empty("materials"));
        }
        Ok(())
    }

    pub fn counts(&self) -> (usize, usize, usize) {
        (self.loaders.len(), self.haulers.len(), self.materials.len())
    }
}
