use crate::cli::{CrystalArgs, DecayFlags, FeaturizeArgs};
use crate::error::{CliError, Result};
use moldesc::core::models::lattice::Replication;
use moldesc::engine::config as core_config;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::debug;

/// Values used when neither the command line nor the config file sets a parameter.
pub struct DefaultsConfig {
    pub tolerance: f64,
    pub min_depth: f64,
    pub max_depth: f64,
    pub alpha: f64,
    pub use_decay: bool,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            tolerance: 0.0,
            min_depth: 0.0,
            max_depth: 0.0,
            alpha: 1.0,
            use_decay: false,
        }
    }
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialBondingConfig {
    tolerance: Option<f64>,
    #[serde(rename = "radii-table")]
    radii_table: Option<PathBuf>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialDepthConfig {
    #[serde(rename = "min-depth")]
    min_depth: Option<f64>,
    #[serde(rename = "max-depth")]
    max_depth: Option<f64>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialCoulombConfig {
    alpha: Option<f64>,
    #[serde(rename = "use-decay")]
    use_decay: Option<bool>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
struct PartialCrystalConfig {
    radius: Option<f64>,
    units: Option<Vec<i64>>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct PartialFeaturizeConfig {
    bonding: Option<PartialBondingConfig>,
    depth: Option<PartialDepthConfig>,
    coulomb: Option<PartialCoulombConfig>,
    crystal: Option<PartialCrystalConfig>,
}

fn parse_value<T: FromStr>(key: &str, value: &str, kind: &str) -> Result<T> {
    value.trim().parse().map_err(|_| {
        CliError::Config(format!("Invalid {} value for {}: {}", kind, key, value))
    })
}

fn parse_units(key: &str, value: &str) -> Result<Vec<i64>> {
    value
        .split(',')
        .map(|part| parse_value(key, part, "integer"))
        .collect()
}

impl PartialFeaturizeConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }

    /// Resolves every parameter with precedence command line, then `--set`/file, then defaults.
    pub fn merge_with_cli(mut self, args: &FeaturizeArgs) -> Result<core_config::FeaturizeConfig> {
        self.apply_set_values(&args.set_values)?;
        let defaults = DefaultsConfig::default();

        let bonding = self.bonding.take().unwrap_or_default();
        let depth = self.depth.take().unwrap_or_default();
        let coulomb = self.coulomb.take().unwrap_or_default();

        let mut builder = core_config::FeaturizeConfigBuilder::new()
            .tolerance(
                args.tolerance
                    .or(bonding.tolerance)
                    .unwrap_or(defaults.tolerance),
            )
            .min_depth(
                args.min_depth
                    .or(depth.min_depth)
                    .unwrap_or(defaults.min_depth),
            )
            .max_depth(
                args.max_depth
                    .or(depth.max_depth)
                    .unwrap_or(defaults.max_depth),
            )
            .alpha(args.alpha.or(coulomb.alpha).unwrap_or(defaults.alpha))
            .use_decay(Self::merge_decay(args.decay, coulomb.use_decay, &defaults));

        if let Some(path) = args.radii_table.as_ref().or(bonding.radii_table.as_ref()) {
            if !path.exists() {
                return Err(CliError::Io(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("Radius table does not exist: {}", path.display()),
                )));
            }
            builder = builder.radii_table_path(path.clone());
        }

        if let Some(replication) = Self::merge_crystal(&args.crystal, self.crystal.take())? {
            builder = builder.crystal(replication);
        }

        builder.build().map_err(|e| CliError::Config(e.to_string()))
    }

    fn merge_decay(flags: DecayFlags, file_val: Option<bool>, defaults: &DefaultsConfig) -> bool {
        if flags.use_decay {
            true
        } else if flags.no_decay {
            false
        } else {
            file_val.unwrap_or(defaults.use_decay)
        }
    }

    fn merge_crystal(
        cli: &CrystalArgs,
        partial: Option<PartialCrystalConfig>,
    ) -> Result<Option<Replication>> {
        if cli.no_crystal {
            return Ok(None);
        }
        let (radius, units) = if cli.radius.is_some() || cli.units.is_some() {
            (cli.radius, cli.units.clone())
        } else if let Some(p) = partial {
            (p.radius, p.units)
        } else {
            return Ok(None);
        };
        Replication::new(radius, units.as_deref())
            .map(Some)
            .map_err(|e| CliError::Config(format!("`crystal`: {}", e)))
    }

    fn apply_set_values(&mut self, set_values: &[String]) -> Result<()> {
        for kv_pair in set_values {
            let Some((key, value_str)) = kv_pair.split_once('=') else {
                return Err(CliError::Config(format!(
                    "Invalid --set format: '{}'. Expected KEY=VALUE.",
                    kv_pair
                )));
            };

            match key.trim() {
                "bonding.tolerance" => {
                    self.bonding.get_or_insert_with(Default::default).tolerance =
                        Some(parse_value(key, value_str, "float")?);
                }
                "bonding.radii-table" => {
                    self.bonding.get_or_insert_with(Default::default).radii_table =
                        Some(PathBuf::from(value_str.trim()));
                }
                "depth.min-depth" => {
                    self.depth.get_or_insert_with(Default::default).min_depth =
                        Some(parse_value(key, value_str, "float")?);
                }
                "depth.max-depth" => {
                    self.depth.get_or_insert_with(Default::default).max_depth =
                        Some(parse_value(key, value_str, "float")?);
                }
                "coulomb.alpha" => {
                    self.coulomb.get_or_insert_with(Default::default).alpha =
                        Some(parse_value(key, value_str, "float")?);
                }
                "coulomb.use-decay" => {
                    self.coulomb.get_or_insert_with(Default::default).use_decay =
                        Some(parse_value(key, value_str, "boolean")?);
                }
                "crystal.radius" => {
                    let crystal = self.crystal.get_or_insert_with(Default::default);
                    crystal.radius = Some(parse_value(key, value_str, "float")?);
                    crystal.units = None;
                }
                "crystal.units" => {
                    let crystal = self.crystal.get_or_insert_with(Default::default);
                    crystal.units = Some(parse_units(key, value_str)?);
                    crystal.radius = None;
                }
                _ => {
                    return Err(CliError::Config(format!(
                        "Unsupported configuration key for --set: '{}'",
                        key
                    )));
                }
            }
        }
        Ok(())
    }
}
