use leptos::*;
use leptos_router::{A, use_location};

/// An entry of the navigation sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub icon: &'static str,
    pub text: &'static str,
    pub url: &'static str,
}

fn matches(url: &str, path: &str) -> bool {
    if url == "/" {
        path == "/"
    } else {
        path == url || path.starts_with(&format!("{url}/"))
    }
}

/// Url of the entry to highlight for `path`, the longest one that matches.
fn active_url(items: &[NavItem], path: &str) -> Option<&'static str> {
    items
        .iter()
        .filter(|item| matches(item.url, path))
        .max_by_key(|item| item.url.len())
        .map(|item| item.url)
}

#[component]
fn SidebarItem(item: NavItem, #[prop(into)] active: Signal<bool>) -> impl IntoView {
    let class = move || {
        if active.get() {
            "py-4 px-8 bg-slate-600 flex items-center"
        } else {
            "py-4 px-8 hover:bg-slate-600 hover:cursor-pointer flex items-center"
        }
    };

    view! {
        <A href=item.url>
            <div class=class>
                <div class="text-2xl text-indigo-500">
                    <i class=item.icon></i>
                </div>
                <div class="ml-4">{item.text}</div>
            </div>
        </A>
    }
}

#[component]
pub fn Sidebar(items: &'static [NavItem]) -> impl IntoView {
    let location = use_location();
    let active = create_memo(move |_| active_url(items, &location.pathname.get()));
    let entries = items
        .iter()
        .map(|item| {
            let url = item.url;
            view! { <SidebarItem item=*item active=Signal::derive(move || active.get() == Some(url))/> }
        })
        .collect_view();

    view! {
        <div class="bg-slate-700 w-64 shadow-md flex flex-col divide-y divide-slate-600">
            <div class="bg-slate-800 flex flex-col items-center p-8">
                <div class="text-4xl font-bold text-indigo-400">"ruOK?"</div>
                <div class="text-sm text-gray-400">"job scheduler dashboard"</div>
            </div>
            <div class="grow flex flex-col divide-y divide-slate-600">{entries}</div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ITEMS: &[NavItem] = &[
        NavItem {
            icon: "",
            text: "Home",
            url: "/",
        },
        NavItem {
            icon: "",
            text: "Jobs",
            url: "/jobs",
        },
        NavItem {
            icon: "",
            text: "New job",
            url: "/jobs/new",
        },
    ];

    #[test]
    fn root_entry_is_only_active_on_root() {
        assert_eq!(active_url(ITEMS, "/"), Some("/"));
        assert_eq!(active_url(ITEMS, "/instance"), None);
    }

    #[test]
    fn longest_matching_entry_wins() {
        assert_eq!(active_url(ITEMS, "/jobs"), Some("/jobs"));
        assert_eq!(active_url(ITEMS, "/jobs/4"), Some("/jobs"));
        assert_eq!(active_url(ITEMS, "/jobs/new"), Some("/jobs/new"));
        assert_eq!(active_url(ITEMS, "/jobsx"), None);
    }
}
