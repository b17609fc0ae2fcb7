use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "moldesc - molecular descriptors from element identities, geometry and bond topology.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Set the number of threads for parallel computation.
    /// Defaults to the number of available logical cores.
    #[arg(short = 'j', long, global = true, value_name = "NUM")]
    pub threads: Option<usize>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute bond graphs, hop distances, depth masks and Coulomb matrices for a batch of molecules.
    Featurize(FeaturizeArgs),
    /// Translate element symbols to atomic numbers and atomic numbers to symbols.
    Lookup(LookupArgs),
}

/// Arguments for the `featurize` subcommand.
#[derive(Args, Debug)]
pub struct FeaturizeArgs {
    // --- Core Arguments ---
    /// Path to the TOML file listing the molecules (`[[molecule]]` tables).
    #[arg(short, long, required = true, value_name = "PATH")]
    pub input: PathBuf,

    /// Path for the TOML file receiving the descriptors.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub output: PathBuf,

    /// Path to an optional configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    // --- Bonding Overrides ---
    /// Relative tolerance widening every bond-length cutoff.
    #[arg(short, long, value_name = "FLOAT")]
    pub tolerance: Option<f64>,

    /// CSV table of bonding radii (`symbol,single,aromatic,double,triple`) replacing the built-in one.
    #[arg(long, value_name = "PATH")]
    pub radii_table: Option<PathBuf>,

    // --- Depth Window Overrides ---
    /// Smallest hop distance kept by the depth mask. Use `inf` to keep only pairs in different fragments.
    #[arg(long, value_name = "FLOAT")]
    pub min_depth: Option<f64>,

    /// Largest hop distance kept by the depth mask; 0 keeps the whole molecule.
    #[arg(long, value_name = "FLOAT")]
    pub max_depth: Option<f64>,

    // --- Coulomb Overrides ---
    /// Exponent applied to interatomic distances in the Coulomb matrix.
    #[arg(long, value_name = "FLOAT")]
    pub alpha: Option<f64>,

    /// Override `coulomb.use-decay` from the config file.
    #[command(flatten)]
    pub decay: DecayFlags,

    // --- Crystal Overrides ---
    #[command(flatten)]
    pub crystal: CrystalArgs,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S depth.max-depth=3
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE", num_args(0..))]
    pub set_values: Vec<String>,
}

/// Mutually exclusive switches for distance decay in the Coulomb matrix.
#[derive(Args, Debug, Clone, Copy)]
#[group(required = false, multiple = false)]
pub struct DecayFlags {
    /// Add each atom's distance to the first atom to every Coulomb denominator.
    #[arg(long)]
    pub use_decay: bool,
    /// Use plain interatomic distances in the Coulomb matrix.
    #[arg(long)]
    pub no_decay: bool,
}

/// Mutually exclusive ways of replicating periodic inputs.
#[derive(Args, Debug, Clone)]
#[group(required = false, multiple = false)]
pub struct CrystalArgs {
    /// Replicate unit cells to cover this radius (Angstroms) around every atom.
    #[arg(long, value_name = "FLOAT")]
    pub radius: Option<f64>,

    /// Replicate this many cells on each side, either one value or three comma-separated values.
    #[arg(long, value_name = "N[,N,N]", value_delimiter = ',')]
    pub units: Option<Vec<i64>>,

    /// Disable crystal replication, even if it is defined in the config file.
    #[arg(long)]
    pub no_crystal: bool,
}

/// Arguments for the `lookup` subcommand.
#[derive(Args, Debug)]
pub struct LookupArgs {
    /// Element symbols (e.g. `C`) or atomic numbers (e.g. `6`).
    #[arg(required = true, value_name = "SYMBOL_OR_NUMBER")]
    pub queries: Vec<String>,
}
