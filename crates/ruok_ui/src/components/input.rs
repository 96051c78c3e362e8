use leptos::*;

#[component]
pub fn Input(
    #[prop(into, optional)] input_type: Option<String>,
    #[prop(optional)] min: Option<i32>,
    #[prop(optional)] max: Option<i32>,
    #[prop(into, optional)] placeholder: Option<String>,
    #[prop(into)] value: RwSignal<String>,
) -> impl IntoView {
    view! {
        <input
            type=input_type
            min=min
            max=max
            class="border border-slate-800 bg-slate-600 rounded p-2 min-h-[45px] w-full"
            placeholder=placeholder
            prop:value=move || value.get()
            on:input=move |ev| value.set(event_target_value(&ev)) />
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SelectItem {
    pub value: String,
    pub label: String,
}

#[component]
pub fn Select(
    #[prop(into)] items: MaybeSignal<Vec<SelectItem>>,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
) -> impl IntoView {
    view! {
        <select
            class="border border-slate-800 bg-slate-600 rounded min-h-[45px] px-2 py-3"
            on:change=move |ev| on_change.call(event_target_value(&ev))>
            <For
                each=move || items.get()
                key=|item| item.value.clone()
                let:child>
                <option
                    value=child.value.clone()
                    selected=move || value.get() == child.value>
                    {child.label}
                </option>
            </For>
        </select>
    }
}
