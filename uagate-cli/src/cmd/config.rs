//! Print a gate config

use super::{GateConfigArg, write_json};
use clap::Args;
use std::io::Write;
use uagate::error::BoxError;

#[derive(Debug, Args)]
/// print the built-in gate config, or validate and normalize the given one
pub struct CliCommandConfig {
    #[command(flatten)]
    config: GateConfigArg,
}

/// run the uagate config command
pub fn run(cfg: CliCommandConfig, writer: &mut impl Write) -> Result<(), BoxError> {
    let config = cfg.config.load()?;
    write_json(writer, &config)
}
