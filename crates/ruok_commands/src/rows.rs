use ruok_core::{
    status::{EXECUTION_STATUSES, JOB_STATUSES, StatusClass, StatusIcon},
    table::{RowBuilder, TableRow},
};
use ruok_models::dtos::{Job, JobExecution, Timestamp};

fn status_cell(class: &StatusClass) -> String {
    let symbol = match class.icon {
        StatusIcon::Check => "✔",
        StatusIcon::Block => "✘",
        StatusIcon::Question => "?",
    };
    format!("{symbol} {}", class.label())
}

fn headers(names: &[&str]) -> Vec<String> {
    names.iter().map(|n| n.to_string()).collect()
}

pub struct JobRows;

impl RowBuilder<Job> for JobRows {
    type Cell = String;

    fn headers(&self) -> Vec<String> {
        headers(&[
            "Id",
            "Name",
            "Status",
            "Method",
            "Endpoint",
            "Cron",
            "Success statuses",
            "Max retries",
            "Last execution",
            "Next execution",
        ])
    }

    fn row(&self, job: &Job) -> TableRow<String> {
        TableRow {
            columns: vec![
                job.id.to_string(),
                job.display_name().to_string(),
                status_cell(&JOB_STATUSES.classify(&job.last_status)),
                job.method.to_string(),
                job.endpoint.clone(),
                job.cron_expression.clone(),
                job.display_success_statuses(),
                job.max_retries.to_string(),
                Timestamp::display_option(&job.last_execution_at),
                Timestamp::display_option(&job.next_execution_at),
            ],
        }
    }
}

pub struct ExecutionRows;

impl RowBuilder<JobExecution> for ExecutionRows {
    type Cell = String;

    fn headers(&self) -> Vec<String> {
        headers(&[
            "Id",
            "Status",
            "Status code",
            "Method",
            "Endpoint",
            "Response at",
        ])
    }

    fn row(&self, execution: &JobExecution) -> TableRow<String> {
        TableRow {
            columns: vec![
                execution.id.to_string(),
                status_cell(&EXECUTION_STATUSES.classify(&execution.succeeded)),
                execution.last_status_code.to_string(),
                execution.method.to_string(),
                execution.endpoint.clone(),
                Timestamp::display_option(&execution.last_response_at),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ruok_models::dtos::HttpMethod;

    fn execution(succeeded: &str) -> JobExecution {
        JobExecution {
            id: 3,
            job_id: 1,
            endpoint: "https://a.example".to_string(),
            method: HttpMethod::Get.into(),
            last_status_code: 503,
            succeeded: succeeded.to_string(),
            last_response_at: None,
        }
    }

    #[test]
    fn execution_rows_show_classified_status() {
        let row = ExecutionRows.row(&execution("error"));
        assert_eq!(row.columns[1], "✘ error");
        assert_eq!(row.columns[2], "503");
        assert_eq!(row.columns.len(), ExecutionRows.headers().len());
    }

    #[test]
    fn execution_rows_keep_unknown_statuses_distinct() {
        assert_eq!(ExecutionRows.row(&execution("Success")).columns[1], "? unknown (Success)");
        assert_eq!(ExecutionRows.row(&execution("")).columns[1], "? unknown");
    }
}
