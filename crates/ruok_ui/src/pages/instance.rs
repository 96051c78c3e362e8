use crate::{
    components::card::{Card, InfoCard},
    context::Api,
    error::ErrorCard,
};
use leptos::*;
use leptos_use::use_interval_fn;
use ruok_models::dtos::{InstanceInfo, MICROS_PER_SECOND, format_uptime};

#[component]
fn Uptime(micros: i64) -> impl IntoView {
    let elapsed = create_rw_signal(0i64);
    let _ = use_interval_fn(move || elapsed.update(|e| *e += 1), 1000u64);
    let uptime = Signal::derive(move || format_uptime(micros + elapsed.get() * MICROS_PER_SECOND));

    view! { <InfoCard title="Uptime" value=uptime/> }
}

#[component]
fn InstanceDetails(info: InstanceInfo) -> impl IntoView {
    let text = |value: String| Signal::derive(move || value.clone());
    let yes_no = |value: bool| text(if value { "yes" } else { "no" }.to_string());

    view! {
        <div class="grid grid-cols-2 gap-4">
            <div class="flex flex-col gap-4">
                <InfoCard title="Application name" value=text(InstanceInfo::display_or_unknown(&info.app_name))/>
                <InfoCard title="Database connected" value=yes_no(info.db_connected)/>
                <InfoCard title="Database url" value=text(InstanceInfo::display_or_unknown(&info.db_url))/>
                <InfoCard title="TLS active" value=yes_no(info.tls_active)/>
                <InfoCard title="TLS version" value=text(InstanceInfo::display_or_unknown(&info.tls_version))/>
            </div>
            <div class="flex flex-col gap-4">
                <InfoCard title="Started at" value=text(info.started_at().to_string())/>
                <Uptime micros=info.up_time_micro/>
                <InfoCard title="Claimed jobs" value=text(info.claimed_jobs.to_string())/>
                <InfoCard title="Max jobs" value=text(info.max_jobs.to_string())/>
            </div>
        </div>
    }
}

#[component]
pub fn Instance() -> impl IntoView {
    let Api(client) = expect_context::<Api>();
    let data = create_local_resource(
        || (),
        move |_| {
            let client = client.clone();
            async move { client.instance().await.map_err(|e| e.to_string()) }
        },
    );

    view! {
        <Card class="min-h-full">
            <div class="flex flex-col px-8 py-12 gap-8">
                <div class="text-2xl">"Instance info"</div>
                {move || match data.get() {
                    None => view! { <div class="text-xl text-gray-400">"Loading..."</div> }.into_view(),
                    Some(Err(e)) => view! {
                        <ErrorCard
                            error=move || e.clone()
                            on_retry=Callback::new(move |_| data.refetch())/>
                    }
                    .into_view(),
                    Some(Ok(info)) => view! { <InstanceDetails info=info/> }.into_view(),
                }}
            </div>
        </Card>
    }
}
