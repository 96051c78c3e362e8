use crate::{
    command::RuokCommand,
    list::{ListArgs, run_list},
    rows::ExecutionRows,
    runtime::block_on,
};
use anyhow::Result;
use clap::Args;
use ruok_config::RuokConfig;
use ruok_core::{
    cache::{QueryCache, ResourceKey},
    pagination::NextPagePolicy,
    view::ResourceListView,
};
use ruok_http::HttpClient;
use ruok_utils::sync::IntoRc;
use tracing::debug;

#[derive(Args)]
#[command(about = "Lists the executions of a job")]
pub struct ExecutionsCommand {
    #[arg(long = "verbose", help = "Sets the level of verbosity")]
    verbose: bool,

    #[arg(help = "The id of the job")]
    id: i64,

    #[arg(
        short = 's',
        long = "server",
        help = "The name of the server the job is registered to"
    )]
    server: Option<String>,

    #[command(flatten)]
    list: ListArgs,
}

impl RuokCommand for ExecutionsCommand {
    fn verbose(&self) -> bool {
        self.verbose
    }

    fn exec(self) -> Result<()> {
        debug!("listing executions of job {}", self.id);
        block_on(async move {
            let config = RuokConfig::load().await?;
            let client = HttpClient::new(&config, self.server.as_deref())?;
            let view = ResourceListView::new(
                ResourceKey::JobExecutions(self.id),
                NextPagePolicy::FullPage,
                self.list.page_size(&config)?,
                client.into_rc(),
                QueryCache::new(),
                ExecutionRows,
            );
            let title = format!("Executions of job {}", self.id);
            run_list(view, &title, &self.list).await
        })
    }
}
