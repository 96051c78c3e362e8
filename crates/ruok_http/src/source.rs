use crate::{HttpClient, RequestError};
use async_trait::async_trait;
use ruok_core::{
    cache::{QueryKey, ResourceKey},
    pagination::TotalCount,
    query::{Page, PageSource, QueryError},
};
use ruok_models::dtos::{Job, JobExecution, PageQueryParams};

fn params(key: &QueryKey) -> PageQueryParams {
    PageQueryParams::new(key.window.limit, key.window.offset)
}

/// Classifies a failed request of [`HttpClient`] into a [`QueryError`].
pub fn query_error(error: anyhow::Error) -> QueryError {
    if let Some(e) = error.downcast_ref::<RequestError>() {
        return QueryError::Status {
            status: e.status.as_u16(),
            body: e.text.clone(),
        };
    }
    if let Some(e) = error.downcast_ref::<serde_json::Error>() {
        return QueryError::Decode(e.to_string());
    }
    match error.downcast_ref::<reqwest::Error>() {
        Some(e) if e.is_decode() => QueryError::Decode(e.to_string()),
        _ => QueryError::Transport(error.to_string()),
    }
}

#[async_trait(?Send)]
impl PageSource<Job> for HttpClient {
    async fn fetch_page(&self, key: &QueryKey) -> Result<Page<Job>, QueryError> {
        let ResourceKey::Jobs = key.resource else {
            return Err(QueryError::UnsupportedResource(key.to_string()));
        };
        let response = self.jobs(&params(key)).await.map_err(query_error)?;
        Ok(Page::new(
            response.jobs,
            TotalCount::from(response.claimed_jobs),
        ))
    }
}

#[async_trait(?Send)]
impl PageSource<JobExecution> for HttpClient {
    async fn fetch_page(&self, key: &QueryKey) -> Result<Page<JobExecution>, QueryError> {
        let ResourceKey::JobExecutions(id) = key.resource else {
            return Err(QueryError::UnsupportedResource(key.to_string()));
        };
        let response = self
            .job_executions(id, &params(key))
            .await
            .map_err(query_error)?;
        Ok(Page::new(response.job_results, TotalCount::Unknown))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;
    use reqwest::StatusCode;
    use ruok_core::pagination::PageWindow;

    #[test]
    fn request_errors_map_to_status_errors() {
        let error = anyhow::Error::from(RequestError::new("bad id", StatusCode::BAD_REQUEST));
        assert_eq!(
            query_error(error),
            QueryError::Status {
                status: 400,
                body: "bad id".to_string()
            }
        );
    }

    #[test]
    fn json_errors_map_to_decode_errors() {
        let json = serde_json::from_str::<Vec<Job>>("{").unwrap_err();
        assert!(matches!(
            query_error(anyhow::Error::from(json)),
            QueryError::Decode(_)
        ));
        assert!(matches!(
            query_error(anyhow!("connection refused")),
            QueryError::Transport(_)
        ));
    }

    #[tokio::test]
    async fn sources_refuse_keys_of_other_resources() {
        let client = HttpClient::with_base_url("http://127.0.0.1:9", None).unwrap();
        let window = PageWindow {
            limit: 10,
            offset: 0,
        };

        let jobs_key = QueryKey::new(ResourceKey::JobExecutions(1), window);
        let result = PageSource::<Job>::fetch_page(&client, &jobs_key).await;
        assert_eq!(
            result.unwrap_err(),
            QueryError::UnsupportedResource("jobs/1/executions?limit=10&offset=0".to_string())
        );

        let executions_key = QueryKey::new(ResourceKey::Jobs, window);
        let result = PageSource::<JobExecution>::fetch_page(&client, &executions_key).await;
        assert!(matches!(result, Err(QueryError::UnsupportedResource(_))));
    }
}
