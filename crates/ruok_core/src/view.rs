use crate::{
    cache::{QueryCache, QueryKey, ResourceKey},
    pagination::{
        Direction, Navigation, NextPagePolicy, PageSize, Pagination, PaginationError, TotalCount,
    },
    query::{Page, PageSource, QueryState, RemoteListQuery},
    table::{PaginatedTable, RowBuilder},
};
use std::{cell::Cell, rc::Rc};
use tracing::debug;

/// Everything a front end needs to draw the pagination controls under a
/// table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterModel {
    pub page_number: u64,
    pub page_size: PageSize,
    pub page_sizes: Vec<PageSize>,
    pub range: String,
    pub navigation: Navigation,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListView<C> {
    Loading,
    Failed(String),
    Table(PaginatedTable<C, FooterModel>),
}

/// A remote list of one resource combined with its pagination state and the
/// row builder used to display it.
pub struct ResourceListView<T, S, R> {
    resource: ResourceKey,
    policy: NextPagePolicy,
    pagination: Rc<Cell<Pagination>>,
    query: RemoteListQuery<T, S>,
    rows: Rc<R>,
}

impl<T, S, R> Clone for ResourceListView<T, S, R> {
    fn clone(&self) -> Self {
        Self {
            resource: self.resource.clone(),
            policy: self.policy,
            pagination: Rc::clone(&self.pagination),
            query: self.query.clone(),
            rows: Rc::clone(&self.rows),
        }
    }
}

impl<T, S, R> ResourceListView<T, S, R>
where
    T: 'static,
    S: PageSource<T>,
    R: RowBuilder<T>,
{
    pub fn new(
        resource: ResourceKey,
        policy: NextPagePolicy,
        page_size: PageSize,
        source: Rc<S>,
        cache: QueryCache,
        rows: R,
    ) -> Self {
        Self {
            resource,
            policy,
            pagination: Rc::new(Cell::new(Pagination::new(page_size))),
            query: RemoteListQuery::new(source, cache),
            rows: Rc::new(rows),
        }
    }

    pub fn key(&self) -> QueryKey {
        QueryKey::new(self.resource.clone(), self.pagination.get().window())
    }

    pub fn pagination(&self) -> Pagination {
        self.pagination.get()
    }

    pub fn query(&self) -> &RemoteListQuery<T, S> {
        &self.query
    }

    pub fn subscribe(&self, listener: impl Fn() + 'static) -> usize {
        self.query.subscribe(move |_| listener())
    }

    pub async fn load(&self) -> QueryState<T> {
        self.query.fetch(self.key()).await
    }

    pub async fn refresh(&self) -> QueryState<T> {
        if self.query.current_key() == Some(self.key()) {
            self.query.refresh().await
        } else {
            self.load().await
        }
    }

    pub fn set_page(&self, n: i64) -> Result<bool, PaginationError> {
        self.update(|p| p.set_page(n))
    }

    pub fn set_page_size(&self, size: u64) -> Result<bool, PaginationError> {
        self.update(|p| p.set_page_size(size))
    }

    pub fn first(&self) -> Result<bool, PaginationError> {
        self.update(|p| {
            p.first();
            Ok(())
        })
    }

    pub fn previous(&self) -> Result<bool, PaginationError> {
        if !self.navigation().can_go_previous {
            return Err(PaginationError::Unavailable(Direction::Previous));
        }
        self.update(|p| p.previous())
    }

    pub fn next(&self) -> Result<bool, PaginationError> {
        if !self.navigation().can_go_next {
            return Err(PaginationError::Unavailable(Direction::Next));
        }
        self.update(|p| {
            p.next();
            Ok(())
        })
    }

    /// Navigation flags for the current page. Until the page is loaded the
    /// item count is taken as zero and the total as unknown.
    pub fn navigation(&self) -> Navigation {
        let (total, count) = self
            .loaded_page()
            .map(|page| (page.total, page.len()))
            .unwrap_or((TotalCount::Unknown, 0));
        self.pagination.get().navigation(self.policy, total, count)
    }

    pub fn render(&self, title: &str) -> ListView<R::Cell> {
        if self.query.current_key() != Some(self.key()) {
            return ListView::Loading;
        }
        match self.query.state() {
            QueryState::Idle | QueryState::Loading => ListView::Loading,
            QueryState::Error(e) => ListView::Failed(e.to_string()),
            QueryState::Success(page) => {
                let footer = self.footer(&page);
                let table = PaginatedTable::new(
                    title,
                    || self.rows.headers(),
                    self.rows.rows(&page.items),
                );
                ListView::Table(table.with_footer(footer))
            }
        }
    }

    fn footer(&self, page: &Page<T>) -> FooterModel {
        let pagination = self.pagination.get();
        FooterModel {
            page_number: pagination.page_number(),
            page_size: pagination.page_size(),
            page_sizes: PageSize::ALL.to_vec(),
            range: pagination.range_label(page.total, page.len()),
            navigation: pagination.navigation(self.policy, page.total, page.len()),
        }
    }

    fn loaded_page(&self) -> Option<Rc<Page<T>>> {
        if self.query.current_key() != Some(self.key()) {
            return None;
        }
        self.query.state().page().cloned()
    }

    fn update(
        &self,
        f: impl FnOnce(&mut Pagination) -> Result<(), PaginationError>,
    ) -> Result<bool, PaginationError> {
        let before = self.key();
        let mut pagination = self.pagination.get();
        f(&mut pagination)?;
        self.pagination.set(pagination);
        let changed = self.key() != before;
        if changed {
            debug!("{} moved to {}", self.resource, self.key());
        }
        Ok(changed)
    }
}
