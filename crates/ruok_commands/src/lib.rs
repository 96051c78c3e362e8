mod add;
mod cli;
mod command;
mod config;
mod executions;
mod instance;
mod interactive;
mod jobs;
mod list;
mod render;
mod rows;
mod runtime;

pub use cli::*;
pub use command::RuokCommand;
