use crate::{
    cache::{QueryKey, ResourceKey},
    pagination::TotalCount,
    query::{Page, PageSource, QueryError},
};
use async_trait::async_trait;
use std::{
    cell::{Cell, RefCell},
    collections::HashMap,
};
use tokio::sync::oneshot;

/// In memory list of `0..len` that reports its length as the total for jobs
/// and no total for executions.
pub(crate) struct FakeSource {
    len: u32,
    calls: Cell<usize>,
    failing: Cell<bool>,
    overfill: Cell<u64>,
    gates: RefCell<HashMap<QueryKey, oneshot::Receiver<()>>>,
}

impl FakeSource {
    pub fn new(len: u32) -> Self {
        Self {
            len,
            calls: Cell::new(0),
            failing: Cell::new(false),
            overfill: Cell::new(0),
            gates: RefCell::new(HashMap::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }

    pub fn fail(&self, failing: bool) {
        self.failing.set(failing);
    }

    pub fn overfill(&self, extra: u64) {
        self.overfill.set(extra);
    }

    /// Holds the response for `key` until the sender fires.
    pub fn gate(&self, key: QueryKey, rx: oneshot::Receiver<()>) {
        self.gates.borrow_mut().insert(key, rx);
    }
}

#[async_trait(?Send)]
impl PageSource<u32> for FakeSource {
    async fn fetch_page(&self, key: &QueryKey) -> Result<Page<u32>, QueryError> {
        self.calls.set(self.calls.get() + 1);
        let gate = self.gates.borrow_mut().remove(key);
        if let Some(rx) = gate {
            let _ = rx.await;
        }
        if self.failing.get() {
            return Err(QueryError::Status {
                status: 500,
                body: "boom".to_string(),
            });
        }
        let take = (key.window.limit + self.overfill.get()) as usize;
        let items = (0..self.len).skip(key.window.offset as usize).take(take).collect();
        let total = match key.resource {
            ResourceKey::Jobs => TotalCount::Known(self.len as u64),
            ResourceKey::JobExecutions(_) => TotalCount::Unknown,
        };
        Ok(Page::new(items, total))
    }
}

/// Gives every other future joined with the caller a few chances to run.
pub(crate) async fn settle() {
    for _ in 0..5 {
        tokio::task::yield_now().await;
    }
}
