//! entrypoint for uagate-cli

#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(not(test), warn(clippy::print_stdout, clippy::dbg_macro))]

use clap::{Parser, Subcommand};
use tracing::level_filters::LevelFilter;
use uagate::error::BoxError;

pub mod cmd;
use self::cmd::{check, config, decide, parse};

pub mod trace;

#[derive(Debug, Parser)]
#[command(name = "uagate")]
#[command(bin_name = "uagate")]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    cmds: CliCommands,

    #[arg(long, global = true)]
    /// write logs (to stderr) as json
    json_logs: bool,
}

#[derive(Debug, Subcommand)]
enum CliCommands {
    Parse(parse::CliCommandParse),
    Check(check::CliCommandCheck),
    Decide(decide::CliCommandDecide),
    Config(config::CliCommandConfig),
}

fn main() {
    let cli = Cli::parse();

    #[allow(clippy::exit)]
    if let Err(err) = run(cli) {
        eprintln!("🚩 exit with error: {err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), BoxError> {
    trace::init_tracing(LevelFilter::INFO, cli.json_logs)?;

    let mut stdout = std::io::stdout().lock();
    match cli.cmds {
        CliCommands::Parse(cfg) => parse::run(cfg, &mut stdout),
        CliCommands::Check(cfg) => check::run(cfg, &mut stdout),
        CliCommands::Decide(cfg) => decide::run(cfg, &mut stdout),
        CliCommands::Config(cfg) => config::run(cfg, &mut stdout),
    }
}
