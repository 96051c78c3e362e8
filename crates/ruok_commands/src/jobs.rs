use crate::{
    command::RuokCommand,
    list::{ListArgs, run_list},
    rows::JobRows,
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

#[derive(Args)]
#[command(about = "Lists the jobs registered in a ruok server")]
pub struct JobsCommand {
    #[arg(long = "verbose", help = "Sets the level of verbosity")]
    verbose: bool,

    #[arg(
        short = 's',
        long = "server",
        help = "The name of the server to list the jobs from"
    )]
    server: Option<String>,

    #[command(flatten)]
    list: ListArgs,
}

impl RuokCommand for JobsCommand {
    fn verbose(&self) -> bool {
        self.verbose
    }

    fn exec(self) -> Result<()> {
        block_on(async move {
            let config = RuokConfig::load().await?;
            let client = HttpClient::new(&config, self.server.as_deref())?;
            let view = ResourceListView::new(
                ResourceKey::Jobs,
                NextPagePolicy::ExactTotal,
                self.list.page_size(&config)?,
                client.into_rc(),
                QueryCache::new(),
                JobRows,
            );
            run_list(view, "Jobs", &self.list).await
        })
    }
}
