//! Check a user agent against the requirement tables of a gate config

use super::{GateConfigArg, UserAgentArg, write_json};
use clap::{Args, ValueEnum};
use serde::Serialize;
use std::io::Write;
use uagate::{
    error::BoxError,
    ua::{BrowserIdentity, Evaluation},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RequirementTableKind {
    /// browsers failing this table are not supported
    Minimum,
    /// browsers passing this table receive the modern stylesheet
    ModernFont,
}

#[derive(Debug, Args)]
/// check a User-Agent against the minimum supported and/or modern font tables
pub struct CliCommandCheck {
    #[command(flatten)]
    user_agent: UserAgentArg,

    #[command(flatten)]
    config: GateConfigArg,

    #[arg(short = 't', long, value_enum)]
    /// only check against the given table (all tables are checked if not defined)
    table: Option<RequirementTableKind>,
}

#[derive(Debug, Serialize)]
struct CheckReport {
    identity: BrowserIdentity,
    evaluations: Vec<TableReport>,
}

#[derive(Debug, Serialize)]
struct TableReport {
    table: RequirementTableKind,
    passed: bool,
    #[serde(flatten)]
    evaluation: Evaluation,
}

/// run the uagate check command
pub fn run(cfg: CliCommandCheck, writer: &mut impl Write) -> Result<(), BoxError> {
    let config = cfg.config.load()?;
    let identity = cfg.user_agent.identity();

    let tables = match cfg.table {
        Some(kind) => vec![kind],
        None => vec![RequirementTableKind::Minimum, RequirementTableKind::ModernFont],
    };

    let evaluations = tables
        .into_iter()
        .map(|kind| {
            let table = match kind {
                RequirementTableKind::Minimum => &config.minimum_supported,
                RequirementTableKind::ModernFont => &config.modern_font,
            };
            let evaluation = table.evaluate(&identity);
            TableReport {
                table: kind,
                passed: evaluation.passed(),
                evaluation,
            }
        })
        .collect();

    write_json(
        writer,
        &CheckReport {
            identity,
            evaluations,
        },
    )
}
