//! Core types for fleet matching calculations

mod error;

pub use error::*;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Output format for results
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Site operating condition, expressed as a job efficiency multiplier
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
pub enum JobCondition {
    #[serde(alias = "good")]
    Good,
    #[default]
    #[serde(alias = "average")]
    Average,
    #[value(name = "rather-poor")]
    #[serde(rename = "Rather Poor", alias = "rather-poor")]
    RatherPoor,
    #[serde(alias = "poor")]
    Poor,
}

impl JobCondition {
    pub const ALL: [JobCondition; 4] = [
        JobCondition::Good,
        JobCondition::Average,
        JobCondition::RatherPoor,
        JobCondition::Poor,
    ];

    /// Job efficiency multiplier (0.0 - 1.0)
    pub fn efficiency(&self) -> f64 {
        match self {
            JobCondition::Good => 0.83,
            JobCondition::Average => 0.75,
            JobCondition::RatherPoor => 0.67,
            JobCondition::Poor => 0.58,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            JobCondition::Good => "Good",
            JobCondition::Average => "Average",
            JobCondition::RatherPoor => "Rather Poor",
            JobCondition::Poor => "Poor",
        }
    }
}

impl std::fmt::Display for JobCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
