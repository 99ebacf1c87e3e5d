//! uagate cli commands

use clap::Args;
use serde::Serialize;
use std::{io::Write, path::PathBuf};
use uagate::{
    bootstrap::GateConfig,
    error::{BoxError, ErrorContext as _, OpaqueError},
    ua::BrowserIdentity,
};

pub mod check;
pub mod config;
pub mod decide;
pub mod parse;

#[derive(Debug, Args)]
pub struct UserAgentArg {
    #[arg(env = "UAGATE_USER_AGENT", default_value = "", hide_env_values = true)]
    /// the User-Agent string to classify
    user_agent: String,
}

impl UserAgentArg {
    pub fn identity(&self) -> BrowserIdentity {
        BrowserIdentity::parse(&self.user_agent)
    }

    pub fn as_str(&self) -> &str {
        &self.user_agent
    }
}

#[derive(Debug, Args)]
pub struct GateConfigArg {
    #[arg(short = 'c', long)]
    /// path to a json gate config (built-in config is used if not defined)
    config: Option<PathBuf>,
}

impl GateConfigArg {
    pub fn load(&self) -> Result<GateConfig, OpaqueError> {
        match &self.config {
            Some(path) => GateConfig::from_path(path),
            None => Ok(GateConfig::default()),
        }
    }
}

/// Write `value` as pretty json, followed by a newline.
pub fn write_json<W, T>(writer: &mut W, value: &T) -> Result<(), BoxError>
where
    W: Write,
    T: Serialize + ?Sized,
{
    serde_json::to_writer_pretty(&mut *writer, value).context("write json output")?;
    writeln!(writer).context("write json output")?;
    Ok(())
}
