//! Equipment catalog loader from TOML
//!
//! Catalog data is often incomplete. Missing or NaN optional fields are
//! not errors: they resolve to the documented defaults and are logged at
//! debug level. Required fields (`name`, loader bucket, hauler capacity)
//! must be present.

use std::fs;
use std::path::{Path, PathBuf};

use matchfactor_domain::{
    value_or_default, CatalogSource, EquipmentCatalog, HaulerSpec, LoaderSpec, MaterialSpec,
};
use matchfactor_types::CatalogError;
use serde::Deserialize;
use tracing::{debug, info};

const BUILTIN_CATALOG: &str = include_str!("../data/default_catalog.toml");

/// Container for parsing a catalog file
#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    loaders: Vec<LoaderRecord>,
    #[serde(default)]
    haulers: Vec<HaulerRecord>,
    #[serde(default)]
    materials: Vec<MaterialRecord>,
}

#[derive(Debug, Deserialize)]
struct LoaderRecord {
    name: String,
    bucket_capacity_m3: f64,
    #[serde(default)]
    cycle_time_s: Option<f64>,
    #[serde(default)]
    efficiency: Option<f64>,
    #[serde(default)]
    product_type: Option<String>,
}

#[derive(Debug, Deserialize)]
struct HaulerRecord {
    name: String,
    capacity_tons: f64,
    #[serde(default)]
    speed_loaded_kmh: Option<f64>,
    #[serde(default)]
    speed_empty_kmh: Option<f64>,
    #[serde(default)]
    efficiency: Option<f64>,
    #[serde(default)]
    product_type: Option<String>,
}

#[derive(Debug, Deserialize)]
struct MaterialRecord {
    name: String,
    #[serde(default)]
    density_bank_t_per_m3: Option<f64>,
    #[serde(default)]
    density_loose_t_per_m3: Option<f64>,
    #[serde(default)]
    swell_factor: Option<f64>,
    #[serde(default)]
    fill_factor: Option<f64>,
}

/// Resolve one optional field, noting when the default was used
fn resolve(record: &str, field: &str, value: Option<f64>, default: f64) -> f64 {
    let resolved = value_or_default(value, default);
    if value.map_or(true, f64::is_nan) {
        debug!(record, field, default, "catalog field missing, using default");
    }
    resolved
}

impl LoaderRecord {
    fn into_spec(self) -> LoaderSpec {
        let name = self.name.trim().to_string();
        LoaderSpec {
            cycle_time_s: resolve(
                &name,
                "cycle_time_s",
                self.cycle_time_s,
                LoaderSpec::DEFAULT_CYCLE_TIME_S,
            ),
            efficiency: resolve(
                &name,
                "efficiency",
                self.efficiency,
                LoaderSpec::DEFAULT_EFFICIENCY,
            ),
            product_type: self
                .product_type
                .unwrap_or_else(|| LoaderSpec::DEFAULT_PRODUCT_TYPE.to_string()),
            bucket_capacity_m3: self.bucket_capacity_m3,
            name,
        }
    }
}

impl HaulerRecord {
    fn into_spec(self) -> HaulerSpec {
        let name = self.name.trim().to_string();
        HaulerSpec {
            speed_loaded_kmh: resolve(
                &name,
                "speed_loaded_kmh",
                self.speed_loaded_kmh,
                HaulerSpec::DEFAULT_SPEED_LOADED_KMH,
            ),
            speed_empty_kmh: resolve(
                &name,
                "speed_empty_kmh",
                self.speed_empty_kmh,
                HaulerSpec::DEFAULT_SPEED_EMPTY_KMH,
            ),
            efficiency: resolve(
                &name,
                "efficiency",
                self.efficiency,
                HaulerSpec::DEFAULT_EFFICIENCY,
            ),
            product_type: self
                .product_type
                .unwrap_or_else(|| HaulerSpec::DEFAULT_PRODUCT_TYPE.to_string()),
            capacity_tons: self.capacity_tons,
            name,
        }
    }
}

impl MaterialRecord {
    fn into_spec(self) -> MaterialSpec {
        let name = self.name.trim().to_string();
        MaterialSpec {
            density_bank_t_per_m3: resolve(
                &name,
                "density_bank_t_per_m3",
                self.density_bank_t_per_m3,
                MaterialSpec::DEFAULT_DENSITY_BANK,
            ),
            density_loose_t_per_m3: resolve(
                &name,
                "density_loose_t_per_m3",
                self.density_loose_t_per_m3,
                MaterialSpec::DEFAULT_DENSITY_LOOSE,
            ),
            swell_factor: resolve(
                &name,
                "swell_factor",
                self.swell_factor,
                MaterialSpec::DEFAULT_SWELL_FACTOR,
            ),
            fill_factor: resolve(
                &name,
                "fill_factor",
                self.fill_factor,
                MaterialSpec::DEFAULT_FILL_FACTOR,
            ),
            name,
        }
    }
}

/// Parse a complete catalog from TOML text
pub fn parse_catalog(toml_content: &str) -> Result<EquipmentCatalog, CatalogError> {
    let file: CatalogFile = toml::from_str(toml_content)
        .map_err(|e| CatalogError::Parse(format!("Failed to parse catalog TOML: {}", e)))?;

    let catalog = EquipmentCatalog::new(
        file.loaders.into_iter().map(LoaderRecord::into_spec),
        file.haulers.into_iter().map(HaulerRecord::into_spec),
        file.materials.into_iter().map(MaterialRecord::into_spec),
    );
    catalog.ensure_complete()?;

    let (loaders, haulers, materials) = catalog.counts();
    info!(loaders, haulers, materials, "equipment catalog loaded");
    Ok(catalog)
}

/// The catalog shipped with the binary
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinCatalog;

impl CatalogSource for BuiltinCatalog {
    fn load_catalog(&self) -> Result<EquipmentCatalog, CatalogError> {
        parse_catalog(BUILTIN_CATALOG)
    }

    fn describe(&self) -> String {
        "built-in catalog".to_string()
    }
}

/// A user-supplied catalog file
#[derive(Debug, Clone)]
pub struct TomlCatalogFile {
    path: PathBuf,
}

impl TomlCatalogFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CatalogSource for TomlCatalogFile {
    fn load_catalog(&self) -> Result<EquipmentCatalog, CatalogError> {
        let content = fs::read_to_string(&self.path).map_err(|e| {
            CatalogError::Parse(format!(
                "Failed to read catalog file {}: {}",
                self.path.display(),
                e
            ))
        })?;
        parse_catalog(&content)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_TOML: &str = r#"
[[loaders]]
name = "PC850"
bucket_capacity_m3 = 3.5
cycle_time_s = 25.0
efficiency = 0.92

[[loaders]]
name = "PC400"
bucket_capacity_m3 = 1.9

[[haulers]]
name = "HD465"
capacity_tons = 55.0
speed_loaded_kmh = 20.0
speed_empty_kmh = 30.0

[[haulers]]
name = "HD785"
capacity_tons = 91.0
efficiency = nan

[[materials]]
name = "Overburden"
density_bank_t_per_m3 = 2.1
density_loose_t_per_m3 = nan
"#;

    #[test]
    fn test_parse_catalog_counts() {
        let catalog = parse_catalog(TEST_TOML).unwrap();
        assert_eq!(catalog.counts(), (2, 2, 1));
    }

    #[test]
    fn test_loader_defaults() {
        let catalog = parse_catalog(TEST_TOML).unwrap();
        let loader = catalog.loader("PC400").unwrap();
        assert_eq!(loader.cycle_time_s, 25.0);
        assert_eq!(loader.efficiency, 0.92);
        assert_eq!(loader.product_type, "Backhoe");
    }

    #[test]
    fn test_hauler_defaults_and_nan() {
        let catalog = parse_catalog(TEST_TOML).unwrap();
        let hauler = catalog.hauler("HD785").unwrap();
        assert_eq!(hauler.efficiency, 0.92);
        assert_eq!(hauler.speed_loaded_kmh, 23.0);
        assert_eq!(hauler.speed_empty_kmh, 21.0);
        assert_eq!(hauler.product_type, "Dump Truck");

        let explicit = catalog.hauler("HD465").unwrap();
        assert_eq!(explicit.speed_loaded_kmh, 20.0);
        assert_eq!(explicit.speed_empty_kmh, 30.0);
    }

    #[test]
    fn test_material_defaults_and_nan() {
        let catalog = parse_catalog(TEST_TOML).unwrap();
        let material = catalog.material("Overburden").unwrap();
        assert_eq!(material.density_bank_t_per_m3, 2.1);
        assert_eq!(material.density_loose_t_per_m3, 1.5);
        assert_eq!(material.swell_factor, 0.8);
        assert_eq!(material.fill_factor, 0.9);
    }

    #[test]
    fn test_missing_required_field() {
        let toml = r#"
[[loaders]]
name = "NoBucket"
"#;
        assert!(matches!(parse_catalog(toml), Err(CatalogError::Parse(_))));
    }

    #[test]
    fn test_empty_table_rejected() {
        let toml = r#"
[[loaders]]
name = "PC850"
bucket_capacity_m3 = 3.5
"#;
        assert!(matches!(parse_catalog(toml), Err(CatalogError::Empty("haulers"))));
    }

    #[test]
    fn test_builtin_catalog_loads() {
        let catalog = BuiltinCatalog.load_catalog().unwrap();
        let (loaders, haulers, materials) = catalog.counts();
        assert!(loaders > 0 && haulers > 0 && materials > 0);

        let xde = catalog.hauler("XDE130").unwrap();
        assert_eq!(xde.speed_loaded_kmh, 20.0);
        assert_eq!(xde.speed_empty_kmh, 18.0);
    }
}
