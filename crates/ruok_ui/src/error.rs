use crate::components::{
    button::{ButtonMode, IconButton},
    card::Card,
};
use leptos::*;

/// Retrieval failure panel. When `on_retry` is given a refresh button is
/// shown next to the message.
#[component]
pub fn ErrorCard(
    #[prop(into)] error: Signal<String>,
    #[prop(optional)] on_retry: Option<Callback<()>>,
) -> impl IntoView {
    view! {
        <div class="flex flex-col items-center">
            <Card class="container px-8 py-12 items-center">
                <div class="text-red-500 text-8xl">
                    <i class="iconoir-cloud-xmark"></i>
                </div>
                <div class="text-center">"Failed to fetch data due to: " {move || error.get()}</div>
                {match on_retry {
                    Some(retry) => view! {
                        <div class="flex items-center gap-x-4 text-gray-400">
                            "Try again"
                            <IconButton
                                mode=ButtonMode::Default
                                icon="iconoir-refresh-double"
                                title="Retry"
                                on_click=retry />
                        </div>
                    }.into_view(),
                    None => view! {
                        <div class="text-gray-400">"Please try again later"</div>
                    }.into_view(),
                }}
            </Card>
        </div>
    }
}

/// Inline list of messages, one per line, used under forms.
#[component]
pub fn SmallError(#[prop(into)] messages: Signal<Vec<String>>) -> impl IntoView {
    view! {
        <div class="flex items-start rounded-lg bg-red-500 p-2 gap-4">
            <div class="text-2xl">
                <i class="iconoir-warning-triangle"></i>
            </div>
            <ul class="flex flex-col list-disc list-inside">
                {move || messages.get().into_iter().map(|m| view! { <li>{m}</li> }).collect_view()}
            </ul>
        </div>
    }
}
