// ─────────────────────────────────────────────────────────────────────
// SCPN Determinant Lab — Config
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use serde::{Deserialize, Serialize};

use crate::error::{DetError, DetResult};

/// Determinant engine configuration.
///
/// The Python script kept the near-zero threshold as a module-level
/// constant; here it is explicit configuration threaded to the engine.
/// All fields are optional in JSON and fall back to the documented
/// defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Near-zero threshold: entries with |x| <= tolerance are treated as
    /// exactly zero for pivot scoring and term pruning (default: 1e-6).
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,
    /// Agreement bound used when cross-checking the engine against the
    /// LU reference determinant (default: 1e-4).
    #[serde(default = "default_cross_check_tolerance")]
    pub cross_check_tolerance: f64,
}

fn default_tolerance() -> f64 {
    1e-6
}
fn default_cross_check_tolerance() -> f64 {
    1e-4
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            tolerance: default_tolerance(),
            cross_check_tolerance: default_cross_check_tolerance(),
        }
    }
}

impl EngineConfig {
    /// Load from a JSON file and validate.
    pub fn from_file(path: &str) -> DetResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Both tolerances must be finite and non-negative.
    pub fn validate(&self) -> DetResult<()> {
        if !self.tolerance.is_finite() || self.tolerance < 0.0 {
            return Err(DetError::ConfigError(format!(
                "tolerance must be finite and >= 0, got {}",
                self.tolerance
            )));
        }
        if !self.cross_check_tolerance.is_finite() || self.cross_check_tolerance < 0.0 {
            return Err(DetError::ConfigError(format!(
                "cross_check_tolerance must be finite and >= 0, got {}",
                self.cross_check_tolerance
            )));
        }
        Ok(())
    }
}
