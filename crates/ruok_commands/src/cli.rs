use crate::{
    add::AddCommand, command::RuokCommand, config::ConfigCommand, executions::ExecutionsCommand,
    instance::InstanceCommand, jobs::JobsCommand,
};
use anyhow::Result;
use clap::{Parser, Subcommand};
use ruok_config::definitions::VERSION;
use tracing_subscriber::filter::LevelFilter;

#[derive(Subcommand)]
enum Commands {
    Jobs(JobsCommand),
    Executions(ExecutionsCommand),
    Instance(InstanceCommand),
    Add(AddCommand),
    Config(ConfigCommand),
}

impl Commands {
    fn verbose(&self) -> bool {
        match self {
            Self::Jobs(jobs) => jobs.verbose(),
            Self::Executions(executions) => executions.verbose(),
            Self::Instance(instance) => instance.verbose(),
            Self::Add(add) => add.verbose(),
            Self::Config(config) => config.verbose(),
        }
    }
}

#[derive(Parser)]
#[command(
    name = "ruok",
    version = VERSION,
    about = "A client for the ruok http job scheduler"
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[arg(short = 'v', long = "verbose", help = "Sets the level of verbosity")]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

impl RuokCommand for Cli {
    fn verbose(&self) -> bool {
        self.verbose || self.command.verbose()
    }

    fn tracing_level(&self) -> LevelFilter {
        match &self.command {
            Commands::Config(config) => config.tracing_level(),
            _ if self.verbose() => LevelFilter::DEBUG,
            _ => LevelFilter::INFO,
        }
    }

    fn exec(self) -> Result<()> {
        match self.command {
            Commands::Jobs(jobs) => jobs.exec(),
            Commands::Executions(executions) => executions.exec(),
            Commands::Instance(instance) => instance.exec(),
            Commands::Add(add) => add.exec(),
            Commands::Config(config) => config.exec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_parses_list_commands() {
        let cli = Cli::try_parse_from(["ruok", "-v", "jobs", "-s", "staging", "-p", "3", "-i"]).unwrap();
        assert!(cli.verbose());
        assert!(matches!(cli.command, Commands::Jobs(_)));

        let cli = Cli::try_parse_from(["ruok", "executions", "42", "-l", "25"]).unwrap();
        assert!(!cli.verbose());
        assert_eq!(cli.tracing_level(), LevelFilter::INFO);
    }

    #[test]
    fn cli_executions_requires_a_numeric_job_id() {
        assert!(Cli::try_parse_from(["ruok", "executions"]).is_err());
        assert!(Cli::try_parse_from(["ruok", "executions", "abc"]).is_err());
    }

    #[test]
    fn cli_config_turns_tracing_off() {
        let cli = Cli::try_parse_from(["ruok", "-v", "config"]).unwrap();
        assert_eq!(cli.tracing_level(), LevelFilter::OFF);
    }

    #[test]
    fn cli_subcommand_verbose_flag_raises_level() {
        let cli = Cli::try_parse_from(["ruok", "instance", "--verbose"]).unwrap();
        assert_eq!(cli.tracing_level(), LevelFilter::DEBUG);
    }
}
