#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow<C> {
    pub columns: Vec<C>,
}

/// A titled table ready to hand over to a renderer. Rows are already
/// materialized and displayed in order. A `None` footer means the renderer
/// omits the control region entirely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginatedTable<C, F> {
    pub title: String,
    pub headers: Vec<String>,
    pub rows: Vec<TableRow<C>>,
    pub footer: Option<F>,
}

impl<C, F> PaginatedTable<C, F> {
    pub fn new<H>(title: &str, headers: H, rows: Vec<TableRow<C>>) -> Self
    where
        H: FnOnce() -> Vec<String>,
    {
        Self {
            title: title.to_string(),
            headers: headers(),
            rows,
            footer: None,
        }
    }

    pub fn with_footer(mut self, footer: F) -> Self {
        self.footer = Some(footer);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

pub trait TableRenderer<C, F> {
    type Output;

    fn render(&self, table: &PaginatedTable<C, F>) -> Self::Output;
}

/// Turns items of a resource into table cells.
pub trait RowBuilder<T> {
    type Cell;

    fn headers(&self) -> Vec<String>;

    fn row(&self, item: &T) -> TableRow<Self::Cell>;

    fn rows(&self, items: &[T]) -> Vec<TableRow<Self::Cell>> {
        items.iter().map(|item| self.row(item)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Numbers;

    impl RowBuilder<u32> for Numbers {
        type Cell = String;

        fn headers(&self) -> Vec<String> {
            vec!["value".to_string(), "double".to_string()]
        }

        fn row(&self, item: &u32) -> TableRow<String> {
            TableRow {
                columns: vec![item.to_string(), (item * 2).to_string()],
            }
        }
    }

    struct Lines;

    impl TableRenderer<String, String> for Lines {
        type Output = Vec<String>;

        fn render(&self, table: &PaginatedTable<String, String>) -> Vec<String> {
            let mut lines = vec![table.title.clone(), table.headers.join("|")];
            lines.extend(table.rows.iter().map(|r| r.columns.join("|")));
            lines.extend(table.footer.clone());
            lines
        }
    }

    #[test]
    fn empty_rows_render_header_only() {
        let table: PaginatedTable<String, String> =
            PaginatedTable::new("Numbers", || Numbers.headers(), Numbers.rows(&[]));
        assert!(table.is_empty());
        assert_eq!(Lines.render(&table), vec!["Numbers", "value|double"]);
    }

    #[test]
    fn footer_is_appended_when_present() {
        let table = PaginatedTable::new("Numbers", || Numbers.headers(), Numbers.rows(&[1, 2]))
            .with_footer("page 1".to_string());
        assert_eq!(
            Lines.render(&table),
            vec!["Numbers", "value|double", "1|2", "2|4", "page 1"]
        );
    }
}
