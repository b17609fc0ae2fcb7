use crate::core::bonding::classifier::BondClassifier;
use crate::core::bonding::radii::{CovalentRadii, RadiusTableError};
use crate::core::models::lattice::Replication;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),
    #[error("Invalid value for parameter '{name}': {reason}")]
    InvalidParameter { name: &'static str, reason: String },
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct BondingConfig {
    /// Relative widening of every bond-length cutoff.
    pub tolerance: f64,
    /// CSV radius table replacing the built-in one.
    pub radii_table_path: Option<PathBuf>,
}

impl BondingConfig {
    /// Builds the classifier, loading the custom radius table if one is configured.
    pub fn classifier(&self) -> Result<BondClassifier, RadiusTableError> {
        let radii = match &self.radii_table_path {
            Some(path) => CovalentRadii::load_csv(path)?,
            None => CovalentRadii::Builtin,
        };
        Ok(BondClassifier::new(radii, self.tolerance))
    }
}

/// Hop-distance window selecting atom pairs; `max_depth == 0` leaves it open-ended.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DepthWindow {
    pub min_depth: f64,
    pub max_depth: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoulombConfig {
    pub alpha: f64,
    pub use_decay: bool,
}

impl Default for CoulombConfig {
    fn default() -> Self {
        Self {
            alpha: 1.0,
            use_decay: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FeaturizeConfig {
    pub bonding: BondingConfig,
    pub depth: DepthWindow,
    pub coulomb: CoulombConfig,
    pub crystal: Option<Replication>,
}

#[derive(Default)]
pub struct FeaturizeConfigBuilder {
    tolerance: Option<f64>,
    radii_table_path: Option<PathBuf>,
    min_depth: Option<f64>,
    max_depth: Option<f64>,
    alpha: Option<f64>,
    use_decay: Option<bool>,
    crystal: Option<Replication>,
}

impl FeaturizeConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = Some(tolerance);
        self
    }
    pub fn radii_table_path(mut self, path: PathBuf) -> Self {
        self.radii_table_path = Some(path);
        self
    }
    pub fn min_depth(mut self, depth: f64) -> Self {
        self.min_depth = Some(depth);
        self
    }
    pub fn max_depth(mut self, depth: f64) -> Self {
        self.max_depth = Some(depth);
        self
    }
    pub fn alpha(mut self, alpha: f64) -> Self {
        self.alpha = Some(alpha);
        self
    }
    pub fn use_decay(mut self, use_decay: bool) -> Self {
        self.use_decay = Some(use_decay);
        self
    }
    pub fn crystal(mut self, replication: Replication) -> Self {
        self.crystal = Some(replication);
        self
    }

    pub fn build(self) -> Result<FeaturizeConfig, ConfigError> {
        let tolerance = self
            .tolerance
            .ok_or(ConfigError::MissingParameter("tolerance"))?;
        if !tolerance.is_finite() || tolerance <= -1.0 {
            return Err(ConfigError::InvalidParameter {
                name: "tolerance",
                reason: format!("{} would make every cutoff non-positive", tolerance),
            });
        }

        let depth = DepthWindow {
            min_depth: self
                .min_depth
                .ok_or(ConfigError::MissingParameter("min_depth"))?,
            max_depth: self
                .max_depth
                .ok_or(ConfigError::MissingParameter("max_depth"))?,
        };
        if depth.min_depth.is_nan() || depth.max_depth.is_nan() || depth.max_depth < 0.0 {
            return Err(ConfigError::InvalidParameter {
                name: "max_depth",
                reason: format!("window [{}, {}] is not valid", depth.min_depth, depth.max_depth),
            });
        }

        let alpha = self.alpha.ok_or(ConfigError::MissingParameter("alpha"))?;
        if !alpha.is_finite() {
            return Err(ConfigError::InvalidParameter {
                name: "alpha",
                reason: format!("{} is not finite", alpha),
            });
        }

        Ok(FeaturizeConfig {
            bonding: BondingConfig {
                tolerance,
                radii_table_path: self.radii_table_path,
            },
            depth,
            coulomb: CoulombConfig {
                alpha,
                use_decay: self
                    .use_decay
                    .ok_or(ConfigError::MissingParameter("use_decay"))?,
            },
            crystal: self.crystal,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete() -> FeaturizeConfigBuilder {
        FeaturizeConfigBuilder::new()
            .tolerance(0.1)
            .min_depth(1.0)
            .max_depth(3.0)
            .alpha(2.0)
            .use_decay(true)
    }

    #[test]
    fn build_with_all_parameters() {
        let config = complete().crystal(Replication::Units([1, 1, 1])).build().unwrap();
        assert_eq!(config.bonding.tolerance, 0.1);
        assert_eq!(config.bonding.radii_table_path, None);
        assert_eq!(
            config.depth,
            DepthWindow {
                min_depth: 1.0,
                max_depth: 3.0
            }
        );
        assert_eq!(
            config.coulomb,
            CoulombConfig {
                alpha: 2.0,
                use_decay: true
            }
        );
        assert_eq!(config.crystal, Some(Replication::Units([1, 1, 1])));
    }

    #[test]
    fn build_reports_first_missing_parameter() {
        let result = FeaturizeConfigBuilder::new().min_depth(0.0).build();
        assert_eq!(result, Err(ConfigError::MissingParameter("tolerance")));

        let result = FeaturizeConfigBuilder::new()
            .tolerance(0.0)
            .min_depth(0.0)
            .max_depth(0.0)
            .alpha(1.0)
            .build();
        assert_eq!(result, Err(ConfigError::MissingParameter("use_decay")));
    }

    #[test]
    fn build_rejects_invalid_values() {
        assert!(matches!(
            complete().tolerance(-1.0).build(),
            Err(ConfigError::InvalidParameter { name: "tolerance", .. })
        ));
        assert!(matches!(
            complete().max_depth(-2.0).build(),
            Err(ConfigError::InvalidParameter { name: "max_depth", .. })
        ));
        assert!(matches!(
            complete().alpha(f64::NAN).build(),
            Err(ConfigError::InvalidParameter { name: "alpha", .. })
        ));
    }

    #[test]
    fn infinite_min_depth_is_accepted() {
        let config = complete().min_depth(f64::INFINITY).max_depth(0.0).build().unwrap();
        assert_eq!(config.depth.min_depth, f64::INFINITY);
    }

    #[test]
    fn default_bonding_uses_builtin_radii() {
        let classifier = BondingConfig::default().classifier().unwrap();
        assert_eq!(classifier.tolerance(), 0.0);
        assert!(matches!(classifier.radii(), CovalentRadii::Builtin));
    }

    #[test]
    fn missing_radii_table_fails_to_build_classifier() {
        let dir = tempfile::tempdir().unwrap();
        let bonding = BondingConfig {
            tolerance: 0.0,
            radii_table_path: Some(dir.path().join("absent.csv")),
        };
        assert!(matches!(
            bonding.classifier(),
            Err(RadiusTableError::Csv { .. })
        ));
    }
}
