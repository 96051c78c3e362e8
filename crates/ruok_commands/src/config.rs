use crate::{command::RuokCommand, runtime::block_on};
use anyhow::Result;
use clap::Args;
use ruok_config::RuokConfig;
use ruok_utils::term;
use tracing::metadata::LevelFilter;

#[derive(Args)]
#[command(about = "Lists ruok's configuration")]
pub struct ConfigCommand;

impl RuokCommand for ConfigCommand {
    fn verbose(&self) -> bool {
        false
    }

    fn tracing_level(&self) -> LevelFilter {
        LevelFilter::OFF
    }

    fn exec(self) -> Result<()> {
        block_on(async move {
            let config = RuokConfig::load().await?;
            term::print_info(&format!("Configuration ({}):", RuokConfig::path()?.display()))?;
            println!("{}", config.to_yaml()?);
            Ok(())
        })
    }
}
