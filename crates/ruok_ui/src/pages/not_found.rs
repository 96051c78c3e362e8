use crate::components::{card::Card, link::Link};
use leptos::*;
use leptos_router::use_location;

#[component]
pub fn NotFound() -> impl IntoView {
    let location = use_location();
    let path = move || location.pathname.get();

    view! {
        <div class="h-screen w-full flex justify-center items-center">
            <Card class="w-96 p-8">
                <div class="flex items-center gap-x-4">
                    <div class="text-6xl text-red-400">
                        <i class="iconoir-warning-circle"></i>
                    </div>
                    <div class="flex flex-col">
                        <div class="text-2xl">"Nothing here"</div>
                        <div class="text-gray-400 break-all">{path}</div>
                    </div>
                </div>
                <div class="flex justify-center text-xl">
                    <Link href="/">"Back to the dashboard"</Link>
                </div>
            </Card>
        </div>
    }
}
