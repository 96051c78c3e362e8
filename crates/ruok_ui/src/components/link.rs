use leptos::*;
use leptos_router::A;

#[component]
pub fn Link(
    #[prop(into)] href: String,
    #[prop(into, optional)] class: String,
    children: Children,
) -> impl IntoView {
    let class = format!("text-blue-400 underline hover:text-blue-300 {class}");
    view! {
        <A href=href>
            <span class=class>{children()}</span>
        </A>
    }
}

/// Navigation styled as a primary button, optionally led by an icon.
#[component]
pub fn LinkButton(
    #[prop(into)] href: String,
    #[prop(into, optional)] icon: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <A href=href>
            <div class="h-[40px] flex items-center justify-center gap-x-2 text-white rounded-lg w-full bg-indigo-600 p-2 hover:bg-indigo-700 focus:bg-indigo-700">
                {icon.map(|icon| view! { <i class=icon></i> })}
                {children()}
            </div>
        </A>
    }
}
