use anyhow::{Result, anyhow, bail};
use std::str::FromStr;

pub const HELP: &str =
    "commands: f(irst), p(revious), n(ext), g <page>, s <page size>, r(efresh), q(uit)";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    First,
    Previous,
    Next,
    Goto(i64),
    PageSize(u64),
    Refresh,
    Quit,
}

impl FromStr for Action {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut parts = s.split_whitespace();
        let command = parts.next().ok_or_else(|| anyhow!("no command given"))?;
        let argument = parts.next();
        if parts.next().is_some() {
            bail!("too many arguments");
        }

        let action = match (command, argument) {
            ("f" | "first", None) => Self::First,
            ("p" | "previous", None) => Self::Previous,
            ("n" | "next", None) => Self::Next,
            ("r" | "refresh", None) => Self::Refresh,
            ("q" | "quit", None) => Self::Quit,
            ("g" | "goto", Some(page)) => {
                let page: i64 = page
                    .parse()
                    .map_err(|_| anyhow!("invalid page number: {page}"))?;
                Self::Goto(
                    page.checked_sub(1)
                        .ok_or_else(|| anyhow!("invalid page number: {page}"))?,
                )
            }
            ("s" | "size", Some(size)) => Self::PageSize(
                size.parse()
                    .map_err(|_| anyhow!("invalid page size: {size}"))?,
            ),
            _ => bail!("unknown command: {}", s.trim()),
        };
        Ok(action)
    }
}
