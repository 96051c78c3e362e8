use super::rows::ExecutionRows;
use crate::{
    components::{button::IconButton, card::Card, link::Link},
    error::ErrorCard,
    list::ListHandle,
};
use leptos::*;
use leptos_router::use_params_map;
use ruok_core::{cache::ResourceKey, pagination::NextPagePolicy};

#[component]
fn ExecutionsTable(id: i64) -> impl IntoView {
    let executions = ListHandle::new(
        ResourceKey::JobExecutions(id),
        NextPagePolicy::FullPage,
        ExecutionRows,
    );
    executions.load();
    let title = format!("Executions of job {id}");

    view! {
        <div class="flex items-center gap-x-4">
            <div class="grow flex flex-col">
                <div class="text-2xl">{title.clone()}</div>
                <div class="text-gray-400 mb-8">
                    <Link href="/jobs">"Back to jobs"</Link>
                </div>
            </div>
            <IconButton
                icon="iconoir-refresh-double"
                title="Refresh"
                on_click=move |_| executions.refresh() />
        </div>
        {executions.render(title)}
    }
}

#[component]
pub fn JobExecutions() -> impl IntoView {
    let params = use_params_map();
    let id = move || params.with(|p| p.get("id").and_then(|id| id.parse::<i64>().ok()));

    view! {
        <Card class="min-h-full">
            <div class="flex flex-col px-8 py-12">
                {move || match id() {
                    Some(id) => view! { <ExecutionsTable id=id/> }.into_view(),
                    None => view! {
                        <ErrorCard error=move || "the job id must be a number".to_string()/>
                    }.into_view(),
                }}
            </div>
        </Card>
    }
}
