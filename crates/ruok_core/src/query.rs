use crate::{
    cache::{QueryCache, QueryKey},
    pagination::TotalCount,
};
use async_trait::async_trait;
use std::{
    cell::{Cell, RefCell},
    collections::HashSet,
    fmt::{Display, Formatter},
    rc::Rc,
};
use tracing::{debug, warn};

/// One page of a remote list together with the total the server reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: TotalCount,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, total: TotalCount) -> Self {
        Self { items, total }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn truncated(mut self, limit: u64, key: &QueryKey) -> Self {
        let limit = usize::try_from(limit).unwrap_or(usize::MAX);
        if self.items.len() > limit {
            warn!(
                "response for {key} contained {} items, truncating to {limit}",
                self.items.len()
            );
            self.items.truncate(limit);
        }
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    Transport(String),
    Status { status: u16, body: String },
    Decode(String),
    UnsupportedResource(String),
}

impl Display for QueryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Transport(message) => write!(f, "request failed: {message}"),
            Self::Status { status, body } if body.is_empty() => {
                write!(f, "server responded with status {status}")
            }
            Self::Status { status, body } => {
                write!(f, "server responded with status {status}: {body}")
            }
            Self::Decode(message) => write!(f, "invalid response: {message}"),
            Self::UnsupportedResource(key) => write!(f, "{key} cannot be fetched by this source"),
        }
    }
}

impl std::error::Error for QueryError {}

#[derive(Debug)]
pub enum QueryState<T> {
    Idle,
    Loading,
    Success(Rc<Page<T>>),
    Error(QueryError),
}

impl<T> Clone for QueryState<T> {
    fn clone(&self) -> Self {
        match self {
            Self::Idle => Self::Idle,
            Self::Loading => Self::Loading,
            Self::Success(page) => Self::Success(Rc::clone(page)),
            Self::Error(e) => Self::Error(e.clone()),
        }
    }
}

impl<T> QueryState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn page(&self) -> Option<&Rc<Page<T>>> {
        match self {
            Self::Success(page) => Some(page),
            _ => None,
        }
    }
}

/// Anything able to retrieve one page of `T` for a query key.
#[async_trait(?Send)]
pub trait PageSource<T> {
    async fn fetch_page(&self, key: &QueryKey) -> Result<Page<T>, QueryError>;
}

type Listener<T> = Rc<dyn Fn(&QueryState<T>)>;

struct QueryInner<T> {
    current: Option<QueryKey>,
    state: QueryState<T>,
    in_flight: HashSet<QueryKey>,
    listeners: Vec<(usize, Listener<T>)>,
}

enum Begin {
    Issue,
    Joined,
    Cached,
}

/// Remote list query keyed by `(resource, limit, offset)`.
///
/// Successful pages are cached, a key that is already loading is not issued
/// twice and a response whose key is no longer the current one is dropped on
/// arrival. Errors are never cached.
pub struct RemoteListQuery<T, S> {
    source: Rc<S>,
    cache: QueryCache,
    inner: Rc<RefCell<QueryInner<T>>>,
    next_listener_id: Rc<Cell<usize>>,
}

impl<T, S> Clone for RemoteListQuery<T, S> {
    fn clone(&self) -> Self {
        Self {
            source: Rc::clone(&self.source),
            cache: self.cache.clone(),
            inner: Rc::clone(&self.inner),
            next_listener_id: Rc::clone(&self.next_listener_id),
        }
    }
}

impl<T: 'static, S: PageSource<T>> RemoteListQuery<T, S> {
    pub fn new(source: Rc<S>, cache: QueryCache) -> Self {
        Self {
            source,
            cache,
            inner: Rc::new(RefCell::new(QueryInner {
                current: None,
                state: QueryState::Idle,
                in_flight: HashSet::new(),
                listeners: vec![],
            })),
            next_listener_id: Rc::new(Cell::new(0)),
        }
    }

    pub fn state(&self) -> QueryState<T> {
        self.inner.borrow().state.clone()
    }

    pub fn current_key(&self) -> Option<QueryKey> {
        self.inner.borrow().current.clone()
    }

    pub fn cache(&self) -> &QueryCache {
        &self.cache
    }

    /// Registers a listener called after every committed state transition.
    /// Returns an id usable with [`RemoteListQuery::unsubscribe`].
    pub fn subscribe(&self, listener: impl Fn(&QueryState<T>) + 'static) -> usize {
        let id = self.next_listener_id.get();
        self.next_listener_id.set(id + 1);
        self.inner
            .borrow_mut()
            .listeners
            .push((id, Rc::new(listener)));
        id
    }

    pub fn unsubscribe(&self, id: usize) {
        self.inner
            .borrow_mut()
            .listeners
            .retain(|(listener_id, _)| *listener_id != id);
    }

    /// Makes `key` the current key and resolves it from the cache, an already
    /// running request or a new request to the source.
    pub async fn fetch(&self, key: QueryKey) -> QueryState<T> {
        match self.begin(&key) {
            Begin::Cached => debug!("serving {key} from cache"),
            Begin::Joined => debug!("{key} is already loading"),
            Begin::Issue => {
                debug!("fetching {key}");
                let result = self.source.fetch_page(&key).await;
                self.complete(key, result);
            }
        }
        self.state()
    }

    /// Drops the cached page of the current key and fetches it again.
    pub async fn refresh(&self) -> QueryState<T> {
        let Some(key) = self.current_key() else {
            return self.state();
        };
        self.cache.remove(&key);
        self.fetch(key).await
    }

    fn begin(&self, key: &QueryKey) -> Begin {
        let begin = {
            let mut inner = self.inner.borrow_mut();
            inner.current = Some(key.clone());
            if let Some(page) = self.cache.get::<T>(key) {
                inner.state = QueryState::Success(page);
                Begin::Cached
            } else if inner.in_flight.contains(key) {
                inner.state = QueryState::Loading;
                Begin::Joined
            } else {
                inner.in_flight.insert(key.clone());
                inner.state = QueryState::Loading;
                Begin::Issue
            }
        };
        self.notify();
        begin
    }

    fn complete(&self, key: QueryKey, result: Result<Page<T>, QueryError>) {
        let committed = {
            let mut inner = self.inner.borrow_mut();
            inner.in_flight.remove(&key);
            if inner.current.as_ref() != Some(&key) {
                debug!("discarding superseded response for {key}");
                false
            } else {
                inner.state = match result {
                    Ok(page) => {
                        let page = Rc::new(page.truncated(key.window.limit, &key));
                        self.cache.insert(key, Rc::clone(&page));
                        QueryState::Success(page)
                    }
                    Err(e) => {
                        warn!("fetching {key} failed: {e}");
                        QueryState::Error(e)
                    }
                };
                true
            }
        };
        if committed {
            self.notify();
        }
    }

    fn notify(&self) {
        let (state, listeners) = {
            let inner = self.inner.borrow();
            let listeners: Vec<Listener<T>> = inner
                .listeners
                .iter()
                .map(|(_, listener)| Rc::clone(listener))
                .collect();
            (inner.state.clone(), listeners)
        };
        for listener in listeners {
            listener(&state);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        cache::ResourceKey,
        pagination::PageWindow,
        testing::{FakeSource, settle},
    };
    use tokio::sync::oneshot;

    fn key(offset: u64) -> QueryKey {
        QueryKey::new(ResourceKey::Jobs, PageWindow { limit: 10, offset })
    }

    fn query(source: &Rc<FakeSource>) -> RemoteListQuery<u32, FakeSource> {
        RemoteListQuery::new(Rc::clone(source), QueryCache::new())
    }

    fn items(state: &QueryState<u32>) -> Vec<u32> {
        state.page().map(|p| p.items.clone()).unwrap_or_default()
    }

    #[tokio::test]
    async fn successful_pages_are_served_from_cache() {
        let source = Rc::new(FakeSource::new(25));
        let query = query(&source);

        let state = query.fetch(key(10)).await;
        assert_eq!(items(&state), (10..20).collect::<Vec<u32>>());
        assert_eq!(query.fetch(key(10)).await.page().map(|p| p.len()), Some(10));
        assert_eq!(source.calls(), 1);
        assert_eq!(query.cache().len(), 1);
    }

    #[tokio::test]
    async fn errors_are_not_cached() {
        let source = Rc::new(FakeSource::new(25));
        let query = query(&source);

        source.fail(true);
        let state = query.fetch(key(0)).await;
        assert!(matches!(
            state,
            QueryState::Error(QueryError::Status { status: 500, .. })
        ));
        assert!(query.cache().is_empty());

        source.fail(false);
        assert_eq!(items(&query.fetch(key(0)).await).len(), 10);
        assert_eq!(source.calls(), 2);
    }

    #[tokio::test]
    async fn key_already_loading_is_not_requested_twice() {
        let source = Rc::new(FakeSource::new(25));
        let query = query(&source);
        let (tx, rx) = oneshot::channel();
        source.gate(key(0), rx);

        let release = async {
            settle().await;
            let _ = tx.send(());
        };
        let (first, second, _) = tokio::join!(query.fetch(key(0)), query.fetch(key(0)), release);

        assert_eq!(source.calls(), 1);
        assert_eq!(
            [first.is_loading(), second.is_loading()]
                .iter()
                .filter(|loading| **loading)
                .count(),
            1
        );
        assert_eq!(items(&query.state()).len(), 10);
    }

    async fn superseded_fetch(stale_arrives_first: bool) {
        let source = Rc::new(FakeSource::new(25));
        let query = query(&source);
        let (tx_stale, rx_stale) = oneshot::channel();
        let (tx_latest, rx_latest) = oneshot::channel();
        source.gate(key(0), rx_stale);
        source.gate(key(10), rx_latest);

        let stale = query.fetch(key(0));
        let latest = async {
            settle().await;
            query.fetch(key(10)).await
        };
        let release = async {
            settle().await;
            settle().await;
            if stale_arrives_first {
                let _ = tx_stale.send(());
                settle().await;
                let _ = tx_latest.send(());
            } else {
                let _ = tx_latest.send(());
                settle().await;
                let _ = tx_stale.send(());
            }
        };
        tokio::join!(stale, latest, release);

        assert_eq!(source.calls(), 2);
        assert_eq!(query.current_key(), Some(key(10)));
        assert_eq!(items(&query.state()), (10..20).collect::<Vec<u32>>());
        assert!(query.cache().get::<u32>(&key(0)).is_none());
        assert!(query.cache().get::<u32>(&key(10)).is_some());
    }

    #[tokio::test]
    async fn stale_response_arriving_first_is_discarded() {
        superseded_fetch(true).await;
    }

    #[tokio::test]
    async fn stale_response_arriving_last_is_discarded() {
        superseded_fetch(false).await;
    }

    #[tokio::test]
    async fn oversized_pages_are_truncated_to_limit() {
        let source = Rc::new(FakeSource::new(25));
        source.overfill(4);
        let query = query(&source);

        let state = query.fetch(key(0)).await;
        assert_eq!(items(&state), (0..10).collect::<Vec<u32>>());
    }

    #[tokio::test]
    async fn refresh_bypasses_the_cache() {
        let source = Rc::new(FakeSource::new(25));
        let query = query(&source);

        assert!(matches!(query.refresh().await, QueryState::Idle));
        query.fetch(key(0)).await;
        query.refresh().await;
        assert_eq!(source.calls(), 2);
        assert_eq!(items(&query.state()).len(), 10);
    }

    #[tokio::test]
    async fn listeners_see_each_committed_transition() {
        let source = Rc::new(FakeSource::new(25));
        let query = query(&source);
        let seen = Rc::new(RefCell::new(vec![]));
        let id = {
            let seen = Rc::clone(&seen);
            query.subscribe(move |state| {
                let label = match state {
                    QueryState::Idle => "idle",
                    QueryState::Loading => "loading",
                    QueryState::Success(_) => "success",
                    QueryState::Error(_) => "error",
                };
                seen.borrow_mut().push(label);
            })
        };

        query.fetch(key(0)).await;
        query.fetch(key(0)).await;
        query.unsubscribe(id);
        query.fetch(key(10)).await;

        assert_eq!(*seen.borrow(), vec!["loading", "success", "success"]);
    }
}
