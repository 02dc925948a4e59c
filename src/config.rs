//! Configuration for palette combination.
//!
//! The evaluation formulas themselves are fixed by the WCAG standard;
//! the tunables here only affect how the combiner reports its results.
//!
//! # Configuration Loading
//!
//! Configuration can be loaded from JSON files or constructed programmatically:
//!
//! ```no_run
//! use contrast_colors::CombinerConfig;
//! use std::path::Path;
//!
//! // Load from file
//! let config = CombinerConfig::from_json_file(Path::new("config.json"))?;
//!
//! // Or use defaults
//! let config = CombinerConfig::default();
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Combiner configuration.
///
/// Can be serialized to/from JSON for reproducible audit runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombinerConfig {
    /// Drop ranked pairs whose rounded ratio falls below this floor.
    ///
    /// `None` keeps every pair, including those that fail all WCAG
    /// levels. A floor of 3.0 limits output to pairs that pass at
    /// least AA for large text.
    #[serde(default)]
    pub min_ratio: Option<f64>,

    /// Log a warning for palette entries rejected by the strict
    /// `#RRGGBB` filter (shorthand, missing `#`, non-hex).
    #[serde(default = "default_warn_on_dropped")]
    pub warn_on_dropped: bool,
}

fn default_warn_on_dropped() -> bool {
    true
}

impl Default for CombinerConfig {
    fn default() -> Self {
        Self {
            min_ratio: None,
            warn_on_dropped: true,
        }
    }
}

impl CombinerConfig {
    /// Load configuration from JSON file
    pub fn from_json_file(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to JSON file
    pub fn to_json_file(&self, path: &Path) -> Result<(), Box<dyn std::error::Error>> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}
