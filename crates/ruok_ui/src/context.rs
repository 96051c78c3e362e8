use ruok_core::cache::QueryCache;
use ruok_http::HttpClient;
use std::rc::Rc;

/// Client shared by every page.
#[derive(Clone)]
pub struct Api(pub Rc<HttpClient>);

/// Pages fetched during this session. Lives as long as the app.
#[derive(Clone)]
pub struct Cache(pub QueryCache);
