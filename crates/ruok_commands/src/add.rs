use crate::{command::RuokCommand, runtime::block_on};
use anyhow::Result;
use clap::Args;
use ruok_config::RuokConfig;
use ruok_http::HttpClient;
use ruok_models::dtos::{
    CreateJobRequest, DEFAULT_MAX_RETRIES, HttpMethod, parse_success_statuses,
};
use ruok_utils::term::print_info;
use tracing::debug;

#[derive(Args)]
#[command(about = "Registers a new job to a ruok server")]
pub struct AddCommand {
    #[arg(long = "verbose", help = "Sets the level of verbosity")]
    verbose: bool,

    #[arg(
        short = 's',
        long = "server",
        help = "The name of the server to register the job to"
    )]
    server: Option<String>,

    #[arg(short = 'n', long = "name", help = "An optional name for the job")]
    name: Option<String>,

    #[arg(
        short = 'c',
        long = "cron",
        help = "The cron expression the job runs on, e.g. \"*/5 * * * *\""
    )]
    cron: String,

    #[arg(short = 'e', long = "endpoint", help = "The url the job calls")]
    endpoint: String,

    #[arg(
        short = 'm',
        long = "method",
        default_value = "GET",
        help = "The http method of the call, one of GET, POST, PUT or DELETE"
    )]
    method: HttpMethod,

    #[arg(
        short = 'S',
        long = "success-statuses",
        default_value = "200",
        help = "Comma separated list of status codes considered successful"
    )]
    success_statuses: String,

    #[arg(
        short = 'r',
        long = "max-retries",
        default_value_t = DEFAULT_MAX_RETRIES,
        help = "How many times a failed call is retried"
    )]
    max_retries: u32,
}

impl AddCommand {
    fn request(&self) -> Result<CreateJobRequest> {
        let statuses = parse_success_statuses(&self.success_statuses)?;
        CreateJobRequest::new(
            self.name.clone(),
            self.cron.clone(),
            self.endpoint.clone(),
            self.method,
            statuses,
            self.max_retries,
        )
        .validated()
    }
}

impl RuokCommand for AddCommand {
    fn verbose(&self) -> bool {
        self.verbose
    }

    fn exec(self) -> Result<()> {
        let request = self.request()?;
        debug!("registering job {request:?}");
        block_on(async move {
            let config = RuokConfig::load().await?;
            let client = HttpClient::new(&config, self.server.as_deref())?;
            let response = client.create_job(&request).await?;
            if response.message.is_empty() {
                print_info("job created")?;
            } else {
                print_info(&response.message)?;
            }
            Ok(())
        })
    }
}
