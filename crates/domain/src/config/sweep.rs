use crate::sweep::{DEFAULT_PROBE_LABELS, DEFAULT_PROBE_RECORD_TYPES, DEFAULT_RECORD_TYPES};
use crate::{RecordType, SweepCatalog};
use serde::{Deserialize, Serialize};

/// Sweep catalogs as written in the config file.
///
/// Record types are kept as strings here so a typo is reported by
/// `Config::validate` with the offending entry rather than as a serde error.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SweepConfig {
    #[serde(default = "default_record_types")]
    pub record_types: Vec<String>,

    #[serde(default = "default_probe_labels")]
    pub probe_labels: Vec<String>,

    #[serde(default = "default_probe_record_types")]
    pub probe_record_types: Vec<String>,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            record_types: default_record_types(),
            probe_labels: default_probe_labels(),
            probe_record_types: default_probe_record_types(),
        }
    }
}

impl SweepConfig {
    /// Build the ordered catalog. Fails on the first unparsable type.
    pub fn catalog(&self) -> Result<SweepCatalog, String> {
        Ok(SweepCatalog {
            record_types: parse_types(&self.record_types)?,
            probe_labels: self.probe_labels.clone(),
            probe_record_types: parse_types(&self.probe_record_types)?,
        })
    }
}

fn parse_types(names: &[String]) -> Result<Vec<RecordType>, String> {
    names.iter().map(|n| n.parse::<RecordType>()).collect()
}

fn default_record_types() -> Vec<String> {
    DEFAULT_RECORD_TYPES.iter().map(|rt| rt.to_string()).collect()
}

fn default_probe_labels() -> Vec<String> {
    DEFAULT_PROBE_LABELS.iter().map(|l| l.to_string()).collect()
}

fn default_probe_record_types() -> Vec<String> {
    DEFAULT_PROBE_RECORD_TYPES
        .iter()
        .map(|rt| rt.to_string())
        .collect()
}
