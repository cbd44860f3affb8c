//! CLI module graph and command dispatch.

pub mod command;
pub mod config;
pub mod diagnostic;
pub mod output;
pub mod paths;
pub mod render;
pub mod run;
pub mod similarity;

use std::path::Path;

use command::{Cli, ColorChoice, Commands, ConfigCommand};
use output::OutputConfig;

impl Commands {
    /// Configuration file the command reads, if any.
    #[must_use]
    pub fn config_path(&self) -> Option<&Path> {
        match self {
            Self::Run(args) => Some(args.config.as_path()),
            Self::Similarity(args) => Some(args.config.as_path()),
            Self::Config(ConfigCommand::Show(arg) | ConfigCommand::Validate(arg)) => {
                Some(arg.config.as_path())
            }
            Self::Config(ConfigCommand::Init(_)) => None,
        }
    }
}

/// Apply global flags and run the selected command.
///
/// # Errors
///
/// Returns a rendered diagnostic for any command failure.
pub async fn dispatch(cli: Cli) -> miette::Result<()> {
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => owo_colors::unset_override(),
    }
    output::configure(OutputConfig::new(cli.json, cli.quiet, cli.verbose));

    let result = match &cli.command {
        Commands::Run(args) => run::execute(args).await,
        Commands::Similarity(args) => similarity::execute(args),
        Commands::Config(ConfigCommand::Init(args)) => config::execute_init(&args.path, args.force),
        Commands::Config(ConfigCommand::Show(arg)) => config::execute_show(&arg.config),
        Commands::Config(ConfigCommand::Validate(arg)) => config::execute_validate(&arg.config),
    };

    result.map_err(|error| {
        let src = cli
            .command
            .config_path()
            .and_then(|path| std::fs::read_to_string(path).ok());
        diagnostic::report(error, src.as_deref())
    })
}
