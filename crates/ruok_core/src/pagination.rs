use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum PageSize {
    Five,
    #[default]
    Ten,
    TwentyFive,
    Fifty,
    Hundred,
}

impl PageSize {
    pub const ALL: [PageSize; 5] = [
        Self::Five,
        Self::Ten,
        Self::TwentyFive,
        Self::Fifty,
        Self::Hundred,
    ];

    pub fn get(&self) -> u64 {
        match self {
            Self::Five => 5,
            Self::Ten => 10,
            Self::TwentyFive => 25,
            Self::Fifty => 50,
            Self::Hundred => 100,
        }
    }
}

impl TryFrom<u64> for PageSize {
    type Error = PaginationError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|s| s.get() == value)
            .ok_or(PaginationError::InvalidPageSize(value))
    }
}

impl Display for PageSize {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.get())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageWindow {
    pub limit: u64,
    pub offset: u64,
}

/// Number of items the server holds for a resource. The wire encodes an
/// unknown total as `-1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TotalCount {
    Known(u64),
    Unknown,
}

impl From<i64> for TotalCount {
    fn from(value: i64) -> Self {
        u64::try_from(value)
            .map(Self::Known)
            .unwrap_or(Self::Unknown)
    }
}

/// How a list decides whether a next page exists. A view picks one and keeps
/// it for its whole lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NextPagePolicy {
    /// Compare the reported total against the end of the current page. Falls
    /// back to [`NextPagePolicy::FullPage`] when the total is unknown.
    ExactTotal,
    /// Assume more items exist whenever the current page is full. This is a
    /// heuristic: a full last page still enables "next", which then yields an
    /// empty page.
    FullPage,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Navigation {
    pub can_go_first: bool,
    pub can_go_previous: bool,
    pub can_go_next: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    First,
    Previous,
    Next,
}

impl Display for Direction {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::First => write!(f, "first"),
            Self::Previous => write!(f, "previous"),
            Self::Next => write!(f, "next"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaginationError {
    NegativePage(i64),
    InvalidPageSize(u64),
    Unavailable(Direction),
}

impl Display for PaginationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NegativePage(page) => write!(f, "page number {page} must not be negative"),
            Self::InvalidPageSize(size) => write!(
                f,
                "page size {size} is not one of {}",
                PageSize::ALL
                    .iter()
                    .map(|s| s.to_string())
                    .collect::<Vec<String>>()
                    .join(", ")
            ),
            Self::Unavailable(direction) => write!(f, "there is no {direction} page"),
        }
    }
}

impl std::error::Error for PaginationError {}

/// Current page number and page size of a list. The offset is always derived
/// from the two, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Pagination {
    page_number: u64,
    page_size: PageSize,
}

impl Pagination {
    pub fn new(page_size: PageSize) -> Self {
        Self {
            page_number: 0,
            page_size,
        }
    }

    pub fn page_number(&self) -> u64 {
        self.page_number
    }

    pub fn page_size(&self) -> PageSize {
        self.page_size
    }

    pub fn offset(&self) -> u64 {
        self.page_number.saturating_mul(self.page_size.get())
    }

    pub fn window(&self) -> PageWindow {
        PageWindow {
            limit: self.page_size.get(),
            offset: self.offset(),
        }
    }

    /// Moves to page `n`. Negative pages are rejected and leave the state
    /// untouched. The total is not consulted.
    pub fn set_page(&mut self, n: i64) -> Result<(), PaginationError> {
        let page = u64::try_from(n).map_err(|_| PaginationError::NegativePage(n))?;
        self.page_number = page;
        Ok(())
    }

    /// Changes the page size while keeping the page number as is, which may
    /// leave the list past its end.
    pub fn set_page_size(&mut self, size: u64) -> Result<(), PaginationError> {
        self.page_size = PageSize::try_from(size)?;
        Ok(())
    }

    pub fn first(&mut self) {
        self.page_number = 0;
    }

    pub fn previous(&mut self) -> Result<(), PaginationError> {
        let page = i64::try_from(self.page_number).unwrap_or(i64::MAX);
        self.set_page(page - 1)
    }

    pub fn next(&mut self) {
        self.page_number = self.page_number.saturating_add(1);
    }

    pub fn navigation(
        &self,
        policy: NextPagePolicy,
        total: TotalCount,
        current_items: usize,
    ) -> Navigation {
        let can_go_back = self.page_number > 0;
        let full_page = current_items as u64 >= self.page_size.get();
        let can_go_next = match (policy, total) {
            (NextPagePolicy::ExactTotal, TotalCount::Known(total)) => {
                total > self.page_number.saturating_add(1).saturating_mul(self.page_size.get())
            }
            _ => full_page,
        };

        Navigation {
            can_go_first: can_go_back,
            can_go_previous: can_go_back,
            can_go_next,
        }
    }

    /// Describes the displayed slice, e.g. `11 to 20 of 23`.
    pub fn range_label(&self, total: TotalCount, current_items: usize) -> String {
        let offset = self.offset();
        let from = offset.saturating_add(1);
        let to = offset.saturating_add(current_items as u64);
        match (current_items, total) {
            (0, TotalCount::Known(total)) => format!("0 of {total}"),
            (0, TotalCount::Unknown) => "0".to_string(),
            (_, TotalCount::Known(total)) => format!("{from} to {to} of {total}"),
            (_, TotalCount::Unknown) => format!("{from} to {to}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(page: i64, size: u64) -> Pagination {
        let mut pagination = Pagination::default();
        pagination.set_page_size(size).unwrap();
        pagination.set_page(page).unwrap();
        pagination
    }

    #[test]
    fn offset_is_page_number_times_page_size() {
        for size in PageSize::ALL {
            for page in [0, 1, 2, 7, 1000] {
                let pagination = at(page, size.get());
                assert_eq!(pagination.offset(), page as u64 * size.get());
                assert_eq!(
                    pagination.window(),
                    PageWindow {
                        limit: size.get(),
                        offset: page as u64 * size.get()
                    }
                );
            }
        }
    }

    #[test]
    fn first_and_previous_are_available_only_after_first_page() {
        let nav = at(0, 10).navigation(NextPagePolicy::ExactTotal, TotalCount::Known(100), 10);
        assert!(!nav.can_go_first);
        assert!(!nav.can_go_previous);

        let nav = at(3, 10).navigation(NextPagePolicy::ExactTotal, TotalCount::Known(100), 10);
        assert!(nav.can_go_first);
        assert!(nav.can_go_previous);
    }

    #[test]
    fn next_uses_exact_total_when_known() {
        let total = TotalCount::from(23);
        assert!(at(0, 10).navigation(NextPagePolicy::ExactTotal, total, 10).can_go_next);
        assert!(at(1, 10).navigation(NextPagePolicy::ExactTotal, total, 10).can_go_next);
        assert!(!at(2, 10).navigation(NextPagePolicy::ExactTotal, total, 3).can_go_next);
        assert!(
            !at(1, 10)
                .navigation(NextPagePolicy::ExactTotal, TotalCount::Known(20), 10)
                .can_go_next
        );
    }

    #[test]
    fn next_falls_back_to_full_page_heuristic_when_total_unknown() {
        let total = TotalCount::from(-1);
        assert_eq!(total, TotalCount::Unknown);
        assert!(at(0, 10).navigation(NextPagePolicy::ExactTotal, total, 10).can_go_next);
        assert!(!at(0, 10).navigation(NextPagePolicy::ExactTotal, total, 4).can_go_next);
    }

    #[test]
    fn full_page_policy_ignores_reported_total() {
        let total = TotalCount::Known(10);
        assert!(at(0, 10).navigation(NextPagePolicy::FullPage, total, 10).can_go_next);
        assert!(!at(0, 10).navigation(NextPagePolicy::ExactTotal, total, 10).can_go_next);
    }

    #[test]
    fn set_page_rejects_negative_numbers_and_keeps_state() {
        let mut pagination = at(4, 25);
        assert_eq!(pagination.set_page(-1), Err(PaginationError::NegativePage(-1)));
        assert_eq!(pagination, at(4, 25));
    }

    #[test]
    fn set_page_size_rejects_sizes_outside_the_options() {
        let mut pagination = at(2, 10);
        assert_eq!(
            pagination.set_page_size(20),
            Err(PaginationError::InvalidPageSize(20))
        );
        assert_eq!(pagination.set_page_size(0), Err(PaginationError::InvalidPageSize(0)));
        assert_eq!(pagination, at(2, 10));
    }

    #[test]
    fn set_page_size_round_trip_keeps_page_number() {
        let mut pagination = at(3, 10);
        pagination.set_page_size(25).unwrap();
        assert_eq!(pagination.page_number(), 3);
        assert_eq!(pagination.offset(), 75);
        pagination.set_page_size(10).unwrap();
        assert_eq!(pagination.page_size(), PageSize::Ten);
        assert_eq!(pagination.page_number(), 3);
    }

    #[test]
    fn previous_on_first_page_is_rejected() {
        let mut pagination = Pagination::new(PageSize::Five);
        assert_eq!(pagination.previous(), Err(PaginationError::NegativePage(-1)));
        pagination.next();
        pagination.next();
        pagination.previous().unwrap();
        assert_eq!(pagination.page_number(), 1);
        pagination.first();
        assert_eq!(pagination.page_number(), 0);
    }

    #[test]
    fn range_label_describes_the_current_slice() {
        assert_eq!(at(0, 10).range_label(TotalCount::Known(23), 10), "1 to 10 of 23");
        assert_eq!(at(2, 10).range_label(TotalCount::Known(23), 3), "21 to 23 of 23");
        assert_eq!(at(1, 5).range_label(TotalCount::Unknown, 5), "6 to 10");
        assert_eq!(at(0, 10).range_label(TotalCount::Known(0), 0), "0 of 0");
        assert_eq!(at(9, 10).range_label(TotalCount::Unknown, 0), "0");
    }

    #[test]
    fn range_label_saturates_on_huge_pages() {
        let label = at(i64::MAX, 100).range_label(TotalCount::Unknown, 5);
        assert_eq!(label, format!("{} to {}", u64::MAX, u64::MAX));
    }
}
