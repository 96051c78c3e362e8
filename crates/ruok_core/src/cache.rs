use crate::{pagination::PageWindow, query::Page};
use std::{
    any::Any,
    cell::RefCell,
    collections::HashMap,
    fmt::{Display, Formatter},
    rc::Rc,
};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ResourceKey {
    Jobs,
    JobExecutions(i64),
}

impl Display for ResourceKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Jobs => write!(f, "jobs"),
            Self::JobExecutions(id) => write!(f, "jobs/{id}/executions"),
        }
    }
}

/// Identity of a list request. Two requests with equal keys are the same
/// logical request.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryKey {
    pub resource: ResourceKey,
    pub window: PageWindow,
}

impl QueryKey {
    pub fn new(resource: ResourceKey, window: PageWindow) -> Self {
        Self { resource, window }
    }
}

impl Display for QueryKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}?limit={}&offset={}",
            self.resource, self.window.limit, self.window.offset
        )
    }
}

/// Process local store of successfully fetched pages. Clones share the same
/// storage. Only queries write to it, everyone else may read, invalidate or
/// clear.
#[derive(Clone, Default)]
pub struct QueryCache {
    entries: Rc<RefCell<HashMap<QueryKey, Rc<dyn Any>>>>,
}

impl QueryCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get<T: 'static>(&self, key: &QueryKey) -> Option<Rc<Page<T>>> {
        let entry = self.entries.borrow().get(key).cloned()?;
        entry.downcast::<Page<T>>().ok()
    }

    pub(crate) fn insert<T: 'static>(&self, key: QueryKey, page: Rc<Page<T>>) {
        self.entries.borrow_mut().insert(key, page);
    }

    pub(crate) fn remove(&self, key: &QueryKey) -> bool {
        self.entries.borrow_mut().remove(key).is_some()
    }

    /// Drops every cached page of the resource and returns how many were
    /// removed.
    pub fn invalidate(&self, resource: &ResourceKey) -> usize {
        let mut entries = self.entries.borrow_mut();
        let before = entries.len();
        entries.retain(|key, _| &key.resource != resource);
        let removed = before - entries.len();
        debug!("invalidated {removed} cached page(s) of {resource}");
        removed
    }

    pub fn clear(&self) {
        self.entries.borrow_mut().clear();
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}
