use crate::{
    interactive::{self, Action},
    render::TextRenderer,
};
use anyhow::Result;
use clap::Args;
use ruok_config::RuokConfig;
use ruok_core::{
    pagination::PageSize,
    query::{PageSource, QueryState},
    table::RowBuilder,
    view::ResourceListView,
};
use ruok_utils::term::print_warning;
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, warn};

#[derive(Args, Debug, Clone)]
pub struct ListArgs {
    #[arg(
        short = 'p',
        long = "page",
        default_value_t = 1,
        value_parser = clap::value_parser!(u64).range(1..),
        help = "The page to show, starting from 1"
    )]
    pub page: u64,

    #[arg(
        short = 'l',
        long = "page-size",
        help = "Items per page, one of 5, 10, 25, 50 or 100. Defaults to the page size of the ui section of the config"
    )]
    pub page_size: Option<u64>,

    #[arg(
        short = 'i',
        long = "interactive",
        help = "Keep the list open and navigate it with commands read from stdin"
    )]
    pub interactive: bool,
}

impl ListArgs {
    pub fn page_size(&self, config: &RuokConfig) -> Result<PageSize> {
        if let Some(size) = self.page_size {
            return Ok(PageSize::try_from(size)?);
        }
        Ok(PageSize::try_from(config.ui.page_size).unwrap_or_else(|e| {
            warn!("{e}, falling back to {}", PageSize::default());
            PageSize::default()
        }))
    }
}

fn print<T, S, R>(view: &ResourceListView<T, S, R>, title: &str)
where
    T: 'static,
    S: PageSource<T>,
    R: RowBuilder<T, Cell = String>,
{
    println!("{}", TextRenderer.render_view(&view.render(title)));
}

/// Shows the requested page of the view and, in interactive mode, keeps
/// applying navigation commands read from stdin until it is closed.
pub async fn run_list<T, S, R>(
    view: ResourceListView<T, S, R>,
    title: &str,
    args: &ListArgs,
) -> Result<()>
where
    T: 'static,
    S: PageSource<T>,
    R: RowBuilder<T, Cell = String>,
{
    view.set_page(i64::try_from(args.page - 1)?)?;
    let state = view.load().await;

    if !args.interactive {
        if let QueryState::Error(e) = state {
            return Err(e.into());
        }
        print(&view, title);
        return Ok(());
    }

    print(&view, title);
    println!("{}", interactive::HELP);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        if line.trim().is_empty() {
            continue;
        }

        let action = match line.parse::<Action>() {
            Ok(action) => action,
            Err(e) => {
                print_warning(&format!("{e}. {}", interactive::HELP))?;
                continue;
            }
        };
        debug!("applying {action:?} to {}", view.key());

        let changed = match action {
            Action::Quit => break,
            Action::Refresh => {
                view.refresh().await;
                print(&view, title);
                continue;
            }
            Action::First => view.first(),
            Action::Previous => view.previous(),
            Action::Next => view.next(),
            Action::Goto(page) => view.set_page(page),
            Action::PageSize(size) => view.set_page_size(size),
        };

        match changed {
            Ok(changed) => {
                if changed {
                    view.load().await;
                }
                print(&view, title);
            }
            Err(e) => print_warning(&e.to_string())?,
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct Harness {
        #[command(flatten)]
        list: ListArgs,
    }

    fn parse(args: &[&str]) -> Result<ListArgs, clap::Error> {
        Harness::try_parse_from(args).map(|h| h.list)
    }

    #[test]
    fn page_defaults_to_the_first_one() {
        let args = parse(&["list"]).unwrap();
        assert_eq!(args.page, 1);
        assert!(!args.interactive);
        assert_eq!(args.page_size, None);
    }

    #[test]
    fn page_zero_is_rejected() {
        assert!(parse(&["list", "--page", "0"]).is_err());
    }

    #[test]
    fn page_size_falls_back_to_config_and_default() {
        let mut config = RuokConfig::default();
        config.ui.page_size = 50;
        assert_eq!(parse(&["list"]).unwrap().page_size(&config).unwrap(), PageSize::Fifty);

        config.ui.page_size = 7;
        assert_eq!(parse(&["list"]).unwrap().page_size(&config).unwrap(), PageSize::Ten);

        let args = parse(&["list", "-l", "25"]).unwrap();
        assert_eq!(args.page_size(&config).unwrap(), PageSize::TwentyFive);
        let args = parse(&["list", "-l", "20"]).unwrap();
        assert!(args.page_size(&config).is_err());
    }
}
