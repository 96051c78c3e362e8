use leptos::*;

#[derive(Default)]
pub enum ButtonMode {
    #[default]
    Default,
    Success,
}

fn get_mode_classes(mode: ButtonMode) -> &'static str {
    match mode {
        ButtonMode::Default => "bg-indigo-600 hover:bg-indigo-700 focus:bg-indigo-700",
        ButtonMode::Success => "bg-green-600 hover:bg-green-700 focus:bg-green-700",
    }
}

#[component]
pub fn Button(
    #[prop(optional)] mode: ButtonMode,
    #[prop(into, optional)] class: String,
    #[prop(into, optional)] disabled: MaybeSignal<bool>,
    children: Children,
) -> impl IntoView {
    let mode = get_mode_classes(mode);
    let class = format!(
        "h-[40px] w-full flex-none rounded-lg p-2 focus:outline-none disabled:opacity-50 {mode} {class}"
    );
    view! {
        <button class=class disabled=move || disabled.get()>
            {children()}
        </button>
    }
}

#[component]
pub fn IconButton(
    #[prop(optional)] mode: ButtonMode,
    #[prop(into, optional)] class: String,
    #[prop(into)] icon: String,
    #[prop(into, optional)] title: String,
    #[prop(into, optional)] disabled: MaybeSignal<bool>,
    #[prop(into)] on_click: Callback<()>,
) -> impl IntoView {
    let mode = get_mode_classes(mode);
    let class = format!(
        "h-[40px] w-[40px] flex-none text-xl rounded-lg p-2 focus:outline-none disabled:opacity-50 disabled:cursor-not-allowed {mode} {class}"
    );
    view! {
        <button
            class=class
            title=title
            disabled=move || disabled.get()
            on:click=move |_| on_click.call(())>
            <i class=icon />
        </button>
    }
}
