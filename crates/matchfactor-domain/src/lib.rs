//! Fleet matching engine for open-pit load and haul operations
//!
//! Pure calculations over immutable equipment records: cycle times,
//! match factor, productivity, optimal fleet size and sensitivity sweeps.
//!
//! Units at every boundary:
//! - bucket capacity in m³, truck capacity in metric tonnes
//! - speeds in km/h, haul distance in km
//! - input times in seconds, internal times in hours, display times in minutes
//! - densities in t/m³

pub mod model;
pub mod repository;
pub mod service;

pub use matchfactor_types::{CatalogError, DomainError, JobCondition};
pub use model::*;
pub use repository::CatalogSource;
