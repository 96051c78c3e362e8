use crate::components::{card::Card, link::LinkButton};
use leptos::*;

#[component]
pub fn Welcome() -> impl IntoView {
    view! {
        <div class="size-full flex justify-center items-center">
            <Card class="max-w-[60ch] px-8 py-12">
                <div class="text-4xl">"Welcome to ruOK?"</div>
                <div class="text-gray-400">
                    "A dashboard for the jobs registered in this instance, their executions "
                    "and the health of the instance itself."
                </div>
                <LinkButton href="/instance">"Start by checking this instance"</LinkButton>
            </Card>
        </div>
    }
}
