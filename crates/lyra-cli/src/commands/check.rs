//! Check command implementation.

use crate::cli::CheckArgs;
use crate::error::Result;
use crate::output::Formatter;
use lyra_model::ModelFile;
use lyra_validator::{RelationshipValidator, ValidationReport, ValidatorConfig};
use tracing::debug;

/// Execute the check command.
///
/// Returns `true` when every relationship in the model is consistent.
pub fn execute_check(args: CheckArgs, formatter: &Formatter) -> Result<bool> {
    let report = run_check(&args)?;

    let output = formatter.format_report(&report)?;
    if !output.is_empty() {
        println!("{}", output);
    }

    Ok(report.is_ok())
}

/// Load the model and configuration named by `args` and validate the model.
pub fn run_check(args: &CheckArgs) -> Result<ValidationReport> {
    let mut config = match &args.config {
        Some(path) => ValidatorConfig::from_file(path)?,
        None => ValidatorConfig::default(),
    };

    // The flag can only tighten a loaded configuration
    if args.fail_fast {
        config.fail_fast = true;
    }
    debug!(model = %args.model.display(), ?config, "Checking model");

    let registry = ModelFile::from_file(&args.model)?.into_registry()?;
    Ok(RelationshipValidator::new(config).validate_model(&registry))
}
