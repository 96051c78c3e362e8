mod common;
mod create;
mod execution;
mod instance;
mod job;
mod list;

pub use common::*;
pub use create::*;
pub use execution::*;
pub use instance::*;
pub use job::*;
pub use list::*;
