//! Parse a user agent into a browser identity

use super::{UserAgentArg, write_json};
use clap::Args;
use std::io::Write;
use uagate::error::BoxError;

#[derive(Debug, Args)]
/// parse a User-Agent into its browser family and version
pub struct CliCommandParse {
    #[command(flatten)]
    user_agent: UserAgentArg,
}

/// run the uagate parse command
pub fn run(cfg: CliCommandParse, writer: &mut impl Write) -> Result<(), BoxError> {
    let identity = cfg.user_agent.identity();
    tracing::debug!(ua = cfg.user_agent.as_str(), %identity, "parsed user agent");
    write_json(writer, &identity)
}
