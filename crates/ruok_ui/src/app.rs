use crate::{
    context::{Api, Cache},
    error::ErrorCard,
    pages::{
        home::Home,
        instance::Instance,
        jobs::{CreateJob, JobExecutions, Jobs},
        not_found::NotFound,
        welcome::Welcome,
    },
    url,
};
use leptos::{leptos_dom::logging, *};
use leptos_router::{Route, Router, Routes};
use ruok_core::cache::QueryCache;
use ruok_http::HttpClient;
use std::rc::Rc;

#[component]
pub fn App() -> impl IntoView {
    let client = url::origin().and_then(|origin| HttpClient::with_base_url(&origin, None));
    let client = match client {
        Ok(client) => client,
        Err(e) => {
            let error = e.to_string();
            logging::console_error(&error);
            return view! { <ErrorCard error=move || error.clone()/> }.into_view();
        }
    };

    provide_context(Api(Rc::new(client)));
    provide_context(Cache(QueryCache::new()));

    view! {
        <Router>
            <div class="h-screen bg-slate-900">
                <div class="h-screen flex bg-grid">
                    <Routes>
                        <Route path="/" view=Home>
                            <Route path="/" view=Welcome/>
                            <Route path="/jobs" view=Jobs/>
                            <Route path="/jobs/new" view=CreateJob/>
                            <Route path="/jobs/:id" view=JobExecutions/>
                            <Route path="/instance" view=Instance/>
                        </Route>
                        <Route path="/*any" view=NotFound/>
                    </Routes>
                </div>
            </div>
        </Router>
    }
    .into_view()
}
