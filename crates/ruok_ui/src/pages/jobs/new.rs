use crate::{
    components::{
        button::{Button, ButtonMode},
        card::Card,
        input::{Input, Select, SelectItem},
    },
    context::{Api, Cache},
    error::SmallError,
};
use leptos::*;
use leptos_router::{NavigateOptions, use_navigate};
use ruok_core::cache::ResourceKey;
use ruok_models::dtos::{
    CreateJobRequest, DEFAULT_MAX_RETRIES, HttpMethod, parse_success_statuses,
};

#[derive(Debug, Clone, Default)]
struct JobForm {
    name: String,
    cron_expression: String,
    endpoint: String,
    method: String,
    success_statuses: String,
    max_retries: String,
}

impl JobForm {
    /// Collects every problem of the form, both parsing and validation, at once.
    fn request(&self) -> Result<CreateJobRequest, Vec<String>> {
        let mut errors = vec![];

        let method = self
            .method
            .parse::<HttpMethod>()
            .map_err(|e| errors.push(e.to_string()))
            .unwrap_or(HttpMethod::Get);
        let statuses = parse_success_statuses(&self.success_statuses)
            .map_err(|e| errors.push(e.to_string()))
            .unwrap_or_default();
        let max_retries = match self.max_retries.trim() {
            "" => DEFAULT_MAX_RETRIES,
            value => value
                .parse::<u32>()
                .map_err(|_| errors.push(format!("invalid max retries {value:?}")))
                .unwrap_or(DEFAULT_MAX_RETRIES),
        };

        let request = CreateJobRequest::new(
            Some(self.name.clone()),
            self.cron_expression.clone(),
            self.endpoint.clone(),
            method,
            statuses,
            max_retries,
        );
        if let Err(validation) = request.validate() {
            errors.extend(validation);
        }

        if errors.is_empty() {
            Ok(request)
        } else {
            Err(errors)
        }
    }
}

#[component]
fn Field(#[prop(into)] label: String, children: Children) -> impl IntoView {
    view! {
        <label class="flex flex-col gap-2">
            <div class="text-gray-400">{label}</div>
            {children()}
        </label>
    }
}

#[component]
pub fn CreateJob() -> impl IntoView {
    let Api(client) = expect_context::<Api>();
    let Cache(cache) = expect_context::<Cache>();

    let name = create_rw_signal(String::new());
    let cron_expression = create_rw_signal(String::new());
    let endpoint = create_rw_signal(String::new());
    let method = create_rw_signal(HttpMethod::Get.to_string());
    let success_statuses = create_rw_signal("200".to_string());
    let max_retries = create_rw_signal(DEFAULT_MAX_RETRIES.to_string());
    let errors = create_rw_signal(Vec::<String>::new());

    let methods: Vec<SelectItem> = HttpMethod::ALL
        .iter()
        .map(|m| SelectItem {
            value: m.to_string(),
            label: m.to_string(),
        })
        .collect();

    let navigate = use_navigate();
    let save_action = create_action(move |request: &CreateJobRequest| {
        let client = client.clone();
        let cache = cache.clone();
        let navigate = navigate.clone();
        let request = request.clone();
        async move {
            match client.create_job(&request).await {
                Ok(_) => {
                    cache.invalidate(&ResourceKey::Jobs);
                    navigate("/jobs", NavigateOptions::default());
                }
                Err(e) => errors.set(vec![e.to_string()]),
            }
        }
    });

    let save = move |_| {
        let form = JobForm {
            name: name.get_untracked(),
            cron_expression: cron_expression.get_untracked(),
            endpoint: endpoint.get_untracked(),
            method: method.get_untracked(),
            success_statuses: success_statuses.get_untracked(),
            max_retries: max_retries.get_untracked(),
        };
        match form.request() {
            Ok(request) => {
                errors.set(vec![]);
                save_action.dispatch(request);
            }
            Err(e) => errors.set(e),
        }
    };

    view! {
        <Card class="min-h-full">
            <div class="flex flex-col px-8 py-12 gap-4 max-w-[800px]">
                <div class="text-2xl">"Create job"</div>
                <Field label="Name (optional)">
                    <Input placeholder="health check" value=name/>
                </Field>
                <Field label="Cron expression">
                    <Input placeholder="*/5 * * * *" value=cron_expression/>
                </Field>
                <Field label="Endpoint">
                    <Input placeholder="https://example.com/health" value=endpoint/>
                </Field>
                <Field label="Method">
                    <Select
                        items=methods
                        value=method
                        on_change=move |value| method.set(value)/>
                </Field>
                <Field label="Success statuses (comma separated)">
                    <Input placeholder="200, 201" value=success_statuses/>
                </Field>
                <Field label="Max retries">
                    <Input input_type="number" min=0 value=max_retries/>
                </Field>
                <Show when=move || !errors.with(|e| e.is_empty()) fallback=|| view! {}>
                    <SmallError messages=errors/>
                </Show>
                <div class="w-32">
                    <Button
                        mode=ButtonMode::Success
                        disabled=save_action.pending()
                        on:click=save>
                        "Save"
                    </Button>
                </div>
            </div>
        </Card>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> JobForm {
        JobForm {
            name: " ".to_string(),
            cron_expression: "*/5 * * * *".to_string(),
            endpoint: "https://a.example".to_string(),
            method: "PUT".to_string(),
            success_statuses: "200, 204".to_string(),
            max_retries: String::new(),
        }
    }

    #[test]
    fn valid_form_builds_a_request() {
        let request = form().request().unwrap();
        assert_eq!(request.name, None);
        assert_eq!(request.method, HttpMethod::Put);
        assert_eq!(request.success_statuses, vec![200, 204]);
        assert_eq!(request.max_retries, DEFAULT_MAX_RETRIES);
    }

    #[test]
    fn invalid_form_reports_every_problem() {
        let form = JobForm {
            cron_expression: String::new(),
            success_statuses: "200, x".to_string(),
            max_retries: "-1".to_string(),
            ..form()
        };
        let errors = form.request().unwrap_err();
        assert_eq!(errors.len(), 4);
    }
}
