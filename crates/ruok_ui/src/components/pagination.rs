use crate::components::{
    button::IconButton,
    input::{Select, SelectItem},
};
use leptos::*;
use ruok_core::view::FooterModel;

/// Actions the pagination footer can trigger.
#[derive(Clone, Copy)]
pub struct PageControls {
    pub first: Callback<()>,
    pub previous: Callback<()>,
    pub next: Callback<()>,
    pub page_size: Callback<u64>,
}

#[component]
pub fn PaginationFooter(footer: FooterModel, controls: PageControls) -> impl IntoView {
    let items: Vec<SelectItem> = footer
        .page_sizes
        .iter()
        .map(|size| SelectItem {
            value: size.to_string(),
            label: size.to_string(),
        })
        .collect();
    let current = footer.page_size.to_string();
    let navigation = footer.navigation;
    let on_change = move |value: String| {
        if let Ok(size) = value.parse::<u64>() {
            controls.page_size.call(size);
        }
    };

    view! {
        <div class="flex items-center justify-end gap-x-4 mt-4">
            <div class="text-gray-400">"Rows per page"</div>
            <Select items=items value=Signal::derive(move || current.clone()) on_change=on_change />
            <div>{footer.range}</div>
            <div class="text-gray-400">{format!("page {}", footer.page_number + 1)}</div>
            <IconButton
                icon="iconoir-fast-arrow-left"
                title="First page"
                disabled=!navigation.can_go_first
                on_click=controls.first />
            <IconButton
                icon="iconoir-nav-arrow-left"
                title="Previous page"
                disabled=!navigation.can_go_previous
                on_click=controls.previous />
            <IconButton
                icon="iconoir-nav-arrow-right"
                title="Next page"
                disabled=!navigation.can_go_next
                on_click=controls.next />
        </div>
    }
}
