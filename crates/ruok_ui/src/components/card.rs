use leptos::*;

#[component]
pub fn Card(#[prop(into, optional)] class: String, children: Children) -> impl IntoView {
    let class =
        format!("bg-slate-700 rounded-xl flex flex-col gap-4 border border-slate-600 {class}");
    view! { <div class=class>{children()}</div> }
}

#[component]
pub fn InfoCard(#[prop(into)] title: String, #[prop(into)] value: Signal<String>) -> impl IntoView {
    view! {
        <Card class="px-8 py-6">
            <div class="text-gray-400">{title}</div>
            <div class="text-2xl">{move || value.get()}</div>
        </Card>
    }
}
