mod commands;
mod context;
mod landscape;
mod output;
#[cfg(test)]
mod test_helpers;
mod traits;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{DetailsCommand, JumpCommand, ListCommand, LoginCommand, TunnelCommand};
use context::Context;
use landscape::DEFAULT_CONFIG_URL;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "cf2go")]
#[command(about = "A command line toolset to manage CF landscapes", long_about = None)]
#[command(version, author)]
struct Cli {
    /// URL from which the landscape configuration is requested
    #[arg(long, global = true, env = "CF2GO_URL", default_value = DEFAULT_CONFIG_URL)]
    url: url::Url,

    /// Increase log verbosity (-d info, -dd debug, -ddd trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    debug: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug, PartialEq)]
enum Commands {
    /// List landscapes configuration
    List,

    /// SSH to a jumpbox system
    Jump {
        /// Call 'cf2go list' to get available landscape ids
        landscape_id: String,
    },

    /// SSH tunnel via jumpbox to target
    Tunnel {
        /// Call 'cf2go list' to get available landscape ids
        landscape_id: String,

        /// Supported targets: [director|concourse], director is default
        target: Option<String>,
    },

    /// Display landscape details
    Details {
        /// Call 'cf2go list' to get available landscape ids
        landscape_id: String,
    },

    /// Login to cf api endpoint
    Login {
        /// Call 'cf2go list' to get available landscape ids
        landscape_id: String,
    },
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version are not failures
            let code = if e.use_stderr() { 1 } else { 0 };
            let _ = e.print();
            std::process::exit(code);
        }
    };

    setup_logging(cli.debug);

    let ctx = Context::new(cli.url.as_str());
    if let Err(e) = run(&cli.command, &ctx) {
        tracing::debug!(error = ?e, "command failed");
        ctx.output.error(&error_report(&e));
        std::process::exit(1);
    }
}

/// Run exactly one command against the given context
fn run(command: &Commands, ctx: &Context) -> Result<()> {
    tracing::debug!(?command, url = ctx.config.url(), "dispatching");

    match command {
        Commands::List => ListCommand::execute(ctx),
        Commands::Jump { landscape_id } => JumpCommand::execute(ctx, landscape_id),
        Commands::Tunnel {
            landscape_id,
            target,
        } => TunnelCommand::execute(ctx, landscape_id, target.as_deref()),
        Commands::Details { landscape_id } => DetailsCommand::execute(ctx, landscape_id),
        Commands::Login { landscape_id } => LoginCommand::execute(ctx, landscape_id),
    }
}

/// Top-level message plus the innermost cause; the intermediate layers of
/// reqwest errors repeat the root cause and are left to `-dd` logging
fn error_report(e: &anyhow::Error) -> String {
    if e.chain().count() == 1 {
        e.to_string()
    } else {
        format!("{}: {}", e, e.root_cause())
    }
}

/// Log to stderr at the `-d` verbosity; RUST_LOG directives take precedence
fn setup_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(true)
        .init();
}
