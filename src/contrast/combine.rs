//! Palette combination and ranking
//!
//! Enumerates every ordered foreground/background pairing of a palette
//! and ranks the pairs by contrast ratio:
//! - Exact-string deduplication (first occurrence kept)
//! - Strict `#RRGGBB` filter; dropped entries are logged, not errors
//! - Both orderings of each pair kept, self-pairs excluded
//! - Results sorted by rounded ratio, highest contrast first

use crate::color::{is_strict_hex, parse_hex, relative_luminance};
use crate::config::CombinerConfig;
use crate::contrast::evaluate::ratio_from_luminance;
use crate::ComplianceResult;

/// Palette combiner producing ranked compliance results
///
/// Note the intentional asymmetry with [`parse_hex`]: the parser accepts
/// shorthand and `#`-less input, but the palette filter here only admits
/// the full `#RRGGBB` form. Tolerated-but-rejected entries are surfaced
/// through a `tracing` warning instead of disappearing silently.
pub struct PaletteCombiner {
    config: CombinerConfig,
}

impl Default for PaletteCombiner {
    fn default() -> Self {
        Self::new()
    }
}

impl PaletteCombiner {
    /// Create a combiner with default configuration
    pub fn new() -> Self {
        Self {
            config: CombinerConfig::default(),
        }
    }

    /// Create a combiner with custom configuration
    pub fn with_config(config: CombinerConfig) -> Self {
        Self { config }
    }

    /// Evaluate every ordered pair of a palette, ranked by contrast
    ///
    /// # Arguments
    ///
    /// * `colors` - Palette entries; duplicates and non-`#RRGGBB` strings
    ///   are removed before pairing
    ///
    /// # Returns
    ///
    /// One [`ComplianceResult`] per ordered pair (A-on-B and B-on-A are
    /// distinct results with identical ratios), sorted by ratio
    /// descending. Empty if fewer than two palette entries survive the
    /// filter.
    pub fn combine(&self, colors: &[String]) -> Vec<ComplianceResult> {
        let mut unique: Vec<&String> = Vec::new();
        for color in colors {
            if !unique.contains(&color) {
                unique.push(color);
            }
        }

        // Parse once and precompute luminance per surviving entry
        let mut palette: Vec<(&str, f64)> = Vec::new();
        for color in unique {
            if !is_strict_hex(color) {
                if self.config.warn_on_dropped {
                    tracing::warn!("Palette entry '{}' does not match #RRGGBB, dropped", color);
                }
                continue;
            }
            let Ok(rgb) = parse_hex(color) else { continue };
            palette.push((color, relative_luminance(rgb)));
        }

        let mut results =
            Vec::with_capacity(palette.len().saturating_mul(palette.len().saturating_sub(1)));
        for (i, &(foreground, fg_lum)) in palette.iter().enumerate() {
            for (j, &(background, bg_lum)) in palette.iter().enumerate() {
                if i == j {
                    continue;
                }
                let raw = ratio_from_luminance(fg_lum, bg_lum);
                results.push(ComplianceResult::from_raw_ratio(foreground, background, raw));
            }
        }

        results.sort_by(|a, b| b.ratio.total_cmp(&a.ratio));

        if let Some(floor) = self.config.min_ratio {
            results.retain(|result| result.ratio >= floor);
        }

        tracing::debug!(
            "Ranked {} combinations from {} palette colors",
            results.len(),
            palette.len()
        );
        results
    }
}
