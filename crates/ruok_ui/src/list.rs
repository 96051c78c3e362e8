use crate::{
    components::{pagination::PageControls, table::HtmlTable},
    context::{Api, Cache},
    error::ErrorCard,
};
use leptos::{leptos_dom::logging, *};
use ruok_core::{
    cache::ResourceKey,
    pagination::{NextPagePolicy, PageSize, PaginationError},
    query::PageSource,
    table::{RowBuilder, TableRenderer},
    view::{ListView, ResourceListView},
};
use ruok_http::HttpClient;

type HttpListView<T, R> = ResourceListView<T, HttpClient, R>;

/// Reactive handle on a resource list view. `version` is bumped every time
/// the underlying query commits a state so closures reading it re-render.
pub struct ListHandle<T: 'static, R: 'static> {
    view: StoredValue<HttpListView<T, R>>,
    version: RwSignal<u64>,
}

impl<T: 'static, R: 'static> Clone for ListHandle<T, R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static, R: 'static> Copy for ListHandle<T, R> {}

impl<T, R> ListHandle<T, R>
where
    T: 'static,
    R: 'static,
    HttpClient: PageSource<T>,
    R: RowBuilder<T, Cell = View>,
{
    pub fn new(resource: ResourceKey, policy: NextPagePolicy, rows: R) -> Self {
        let Api(client) = expect_context::<Api>();
        let Cache(cache) = expect_context::<Cache>();
        let view = ResourceListView::new(resource, policy, PageSize::default(), client, cache, rows);
        let version = create_rw_signal(0u64);
        view.subscribe(move || {
            let _ = version.try_update(|v| *v += 1);
        });
        Self {
            view: store_value(view),
            version,
        }
    }

    pub fn load(&self) {
        let view = self.view.get_value();
        spawn_local(async move {
            view.load().await;
        });
    }

    pub fn refresh(&self) {
        let view = self.view.get_value();
        spawn_local(async move {
            view.refresh().await;
        });
    }

    fn apply(&self, f: impl FnOnce(&HttpListView<T, R>) -> Result<bool, PaginationError>) {
        match self.view.with_value(f) {
            Ok(true) => self.load(),
            Ok(false) => {}
            Err(e) => logging::console_warn(&e.to_string()),
        }
    }

    pub fn controls(&self) -> PageControls {
        let handle = *self;
        PageControls {
            first: Callback::new(move |_| handle.apply(|v| v.first())),
            previous: Callback::new(move |_| handle.apply(|v| v.previous())),
            next: Callback::new(move |_| handle.apply(|v| v.next())),
            page_size: Callback::new(move |size| handle.apply(|v| v.set_page_size(size))),
        }
    }

    pub fn render(&self, title: String) -> impl IntoView {
        let handle = *self;
        let renderer = HtmlTable {
            controls: handle.controls(),
        };
        move || {
            handle.version.get();
            match handle.view.with_value(|v| v.render(&title)) {
                ListView::Loading => {
                    view! { <div class="text-xl text-gray-400">"Loading..."</div> }.into_view()
                }
                ListView::Failed(error) => view! {
                    <ErrorCard
                        error=move || error.clone()
                        on_retry=Callback::new(move |_| handle.refresh())/>
                }
                .into_view(),
                ListView::Table(table) => renderer.render(&table),
            }
        }
    }
}
