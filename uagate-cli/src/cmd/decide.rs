//! Run the page bootstrap gate for a user agent, without a real page

use super::{GateConfigArg, UserAgentArg, write_json};
use clap::Args;
use std::io::Write;
use uagate::{
    bootstrap::{Gate, PageEnvironment},
    error::BoxError,
};

#[derive(Debug, Args)]
/// decide whether a User-Agent is supported and which stylesheet it receives
pub struct CliCommandDecide {
    #[command(flatten)]
    user_agent: UserAgentArg,

    #[command(flatten)]
    config: GateConfigArg,
}

/// A [`PageEnvironment`] that only logs the side effects it is asked to perform.
#[derive(Debug)]
struct DryRunPage<'a> {
    user_agent: &'a str,
}

impl PageEnvironment for DryRunPage<'_> {
    fn user_agent(&self) -> Option<&str> {
        Some(self.user_agent)
    }

    fn navigate(&mut self, url: &str) -> Result<(), BoxError> {
        tracing::info!(%url, "dry run: navigate");
        Ok(())
    }

    fn inject_stylesheet(&mut self, href: &str) -> Result<(), BoxError> {
        tracing::info!(%href, "dry run: inject stylesheet");
        Ok(())
    }
}

/// run the uagate decide command
pub fn run(cfg: CliCommandDecide, writer: &mut impl Write) -> Result<(), BoxError> {
    let gate = Gate::new(cfg.config.load()?);
    let mut page = DryRunPage {
        user_agent: cfg.user_agent.as_str(),
    };
    let decision = gate.run(&mut page)?;
    write_json(writer, &decision)
}
