use crate::cli::FeaturizeArgs;
use crate::config::PartialFeaturizeConfig;
use crate::error::Result;
use crate::io;
use crate::utils::progress::CliProgressHandler;
use moldesc::{engine::progress::ProgressReporter, workflows};
use tracing::{info, warn};

pub fn run(args: FeaturizeArgs) -> Result<()> {
    let partial_config = match &args.config {
        Some(path) => PartialFeaturizeConfig::from_file(path)?,
        None => PartialFeaturizeConfig::default(),
    };
    info!("Merging configuration from file and CLI arguments...");
    let final_config = partial_config.merge_with_cli(&args)?;

    info!("Loading molecules from {:?}", &args.input);
    let molecules = io::read_molecules(&args.input)?;
    if molecules.is_empty() {
        warn!("Input file {:?} contains no molecules.", &args.input);
    }

    let progress_handler = CliProgressHandler::new();
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    println!("Featurizing {} molecule(s)...", molecules.len());
    let descriptors = workflows::featurize::run(&molecules, &final_config, &reporter)?;

    io::write_descriptors(&args.output, &descriptors)?;
    println!(
        "✓ Descriptors for {} molecule(s) written to: {}",
        descriptors.len(),
        args.output.display()
    );
    Ok(())
}
