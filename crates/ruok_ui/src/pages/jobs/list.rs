use super::rows::JobRows;
use crate::{
    components::{button::IconButton, card::Card, link::LinkButton},
    list::ListHandle,
};
use leptos::*;
use ruok_core::{cache::ResourceKey, pagination::NextPagePolicy};

#[component]
pub fn Jobs() -> impl IntoView {
    let jobs = ListHandle::new(ResourceKey::Jobs, NextPagePolicy::ExactTotal, JobRows);
    jobs.load();

    view! {
        <Card class="min-h-full">
            <div class="flex flex-col px-8 py-12">
                <div class="flex items-center gap-x-4">
                    <div class="grow flex flex-col">
                        <div class="text-2xl">"Registered jobs"</div>
                        <div class="text-gray-400 mb-8">
                            "Jobs claimed by this instance and the status of their last execution"
                        </div>
                    </div>
                    <IconButton
                        icon="iconoir-refresh-double"
                        title="Refresh"
                        on_click=move |_| jobs.refresh() />
                    <div class="w-32">
                        <LinkButton href="/jobs/new" icon="iconoir-plus">"New job"</LinkButton>
                    </div>
                </div>
                {jobs.render("Registered jobs".to_string())}
            </div>
        </Card>
    }
}
