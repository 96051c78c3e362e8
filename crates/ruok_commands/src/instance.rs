use crate::{command::RuokCommand, runtime::block_on};
use anyhow::Result;
use clap::Args;
use ruok_config::RuokConfig;
use ruok_http::HttpClient;
use ruok_models::dtos::InstanceInfo;
use tabled::{builder::Builder, settings::Style};

#[derive(Args)]
#[command(about = "Shows information about a running ruok instance")]
pub struct InstanceCommand {
    #[arg(long = "verbose", help = "Sets the level of verbosity")]
    verbose: bool,

    #[arg(
        short = 's',
        long = "server",
        help = "The name of the server to inspect"
    )]
    server: Option<String>,
}

impl InstanceCommand {
    fn table(info: &InstanceInfo) -> String {
        let yes_no = |value: bool| if value { "yes" } else { "no" }.to_string();
        let rows = [
            ("App name", InstanceInfo::display_or_unknown(&info.app_name)),
            ("Database connected", yes_no(info.db_connected)),
            ("Database url", InstanceInfo::display_or_unknown(&info.db_url)),
            ("TLS active", yes_no(info.tls_active)),
            ("TLS version", InstanceInfo::display_or_unknown(&info.tls_version)),
            ("Started at", info.started_at().to_string()),
            ("Uptime", info.display_uptime()),
            ("Claimed jobs", info.claimed_jobs.to_string()),
            ("Max jobs", info.max_jobs.to_string()),
        ];

        let mut builder = Builder::default();
        for (name, value) in rows {
            builder.push_record([name.to_string(), value]);
        }
        builder.build().with(Style::modern()).to_string()
    }
}

impl RuokCommand for InstanceCommand {
    fn verbose(&self) -> bool {
        self.verbose
    }

    fn exec(self) -> Result<()> {
        block_on(async move {
            let config = RuokConfig::load().await?;
            let client = HttpClient::new(&config, self.server.as_deref())?;
            let info = client.instance().await?;
            println!("{}", Self::table(&info));
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn instance_table_shows_uptime_and_unknown_values() {
        let info = InstanceInfo {
            app_name: "ruok".to_string(),
            up_time_micro: 90_000_000,
            ..Default::default()
        };
        let table = InstanceCommand::table(&info);
        assert!(table.contains("0 h - 1 m - 30 s"));
        assert!(table.contains("unknown"));
        assert!(table.contains("ruok"));
    }
}
