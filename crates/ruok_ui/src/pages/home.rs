use crate::components::sidebar::{NavItem, Sidebar};
use leptos::*;
use leptos_router::Outlet;

const NAVIGATION: &[NavItem] = &[
    NavItem {
        icon: "iconoir-home",
        text: "Home",
        url: "/",
    },
    NavItem {
        icon: "iconoir-clock-rotate-right",
        text: "Jobs",
        url: "/jobs",
    },
    NavItem {
        icon: "iconoir-plus-circle",
        text: "New job",
        url: "/jobs/new",
    },
    NavItem {
        icon: "iconoir-server",
        text: "Instance",
        url: "/instance",
    },
];

#[component]
pub fn Home() -> impl IntoView {
    view! {
        <div class="size-full flex">
            <div class="grow-0 flex self-stretch">
                <Sidebar items=NAVIGATION/>
            </div>
            <div class="grow overflow-auto p-4">
                <Outlet/>
            </div>
        </div>
    }
}
