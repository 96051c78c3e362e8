mod executions;
mod list;
mod new;
mod rows;

pub use executions::JobExecutions;
pub use list::Jobs;
pub use new::CreateJob;
