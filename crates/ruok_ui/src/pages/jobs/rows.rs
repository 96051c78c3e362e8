use crate::components::{link::Link, status::StatusChip};
use leptos::*;
use ruok_core::{
    status::{EXECUTION_STATUSES, JOB_STATUSES},
    table::{RowBuilder, TableRow},
};
use ruok_models::dtos::{Job, JobExecution, Timestamp};

const ENDPOINT_PREVIEW_CHARS: usize = 20;

/// Shortens long endpoints for the table. The full value is kept in the
/// cell's tooltip.
pub fn endpoint_preview(endpoint: &str) -> String {
    if endpoint.chars().count() <= ENDPOINT_PREVIEW_CHARS {
        return endpoint.to_string();
    }
    let preview: String = endpoint.chars().take(ENDPOINT_PREVIEW_CHARS).collect();
    format!("{preview}...")
}

fn headers(names: &[&str]) -> Vec<String> {
    names.iter().map(|n| n.to_string()).collect()
}

fn endpoint_cell(endpoint: &str) -> View {
    view! { <span title=endpoint.to_string()>{endpoint_preview(endpoint)}</span> }.into_view()
}

pub struct JobRows;

impl RowBuilder<Job> for JobRows {
    type Cell = View;

    fn headers(&self) -> Vec<String> {
        headers(&[
            "Job id",
            "Name",
            "Endpoint",
            "Method",
            "Cron",
            "Last execution",
            "Status",
            "Created at",
            "",
        ])
    }

    fn row(&self, job: &Job) -> TableRow<View> {
        let id = job.id;
        TableRow {
            columns: vec![
                id.into_view(),
                job.display_name().to_string().into_view(),
                endpoint_cell(&job.endpoint),
                job.method.to_string().into_view(),
                job.cron_expression.clone().into_view(),
                Timestamp::display_option(&job.last_execution_at).into_view(),
                view! { <StatusChip status=JOB_STATUSES.classify(&job.last_status)/> }.into_view(),
                Timestamp::display_option(&job.created_at).into_view(),
                view! { <Link href=format!("/jobs/{id}")>"Executions"</Link> }.into_view(),
            ],
        }
    }
}

pub struct ExecutionRows;

impl RowBuilder<JobExecution> for ExecutionRows {
    type Cell = View;

    fn headers(&self) -> Vec<String> {
        headers(&[
            "Execution id",
            "Endpoint",
            "Method",
            "Status code",
            "Status",
            "Response at",
        ])
    }

    fn row(&self, execution: &JobExecution) -> TableRow<View> {
        TableRow {
            columns: vec![
                execution.id.into_view(),
                endpoint_cell(&execution.endpoint),
                execution.method.to_string().into_view(),
                execution.last_status_code.into_view(),
                view! { <StatusChip status=EXECUTION_STATUSES.classify(&execution.succeeded)/> }
                    .into_view(),
                Timestamp::display_option(&execution.last_response_at).into_view(),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_endpoints_are_kept_whole() {
        assert_eq!(endpoint_preview("https://a.example"), "https://a.example");
        assert_eq!(endpoint_preview(""), "");
    }

    #[test]
    fn long_endpoints_are_cut_after_twenty_chars() {
        assert_eq!(
            endpoint_preview("https://status.example.com/health"),
            "https://status.examp..."
        );
    }
}
