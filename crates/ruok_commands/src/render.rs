use ruok_core::{
    table::{PaginatedTable, TableRenderer},
    view::{FooterModel, ListView},
};
use tabled::{builder::Builder, settings::Style};

pub struct TextRenderer;

impl TextRenderer {
    fn footer(footer: &FooterModel) -> String {
        let mut controls = vec![];
        if footer.navigation.can_go_first {
            controls.push("[f]irst");
        }
        if footer.navigation.can_go_previous {
            controls.push("[p]revious");
        }
        if footer.navigation.can_go_next {
            controls.push("[n]ext");
        }

        let sizes = footer
            .page_sizes
            .iter()
            .map(|s| s.to_string())
            .collect::<Vec<String>>()
            .join("/");

        let mut line = format!(
            "page {} | {} | page size {} ({sizes})",
            footer.page_number + 1,
            footer.range,
            footer.page_size,
        );
        if !controls.is_empty() {
            line.push_str(" | ");
            line.push_str(&controls.join(" "));
        }
        line
    }

    pub fn render_view(&self, view: &ListView<String>) -> String {
        match view {
            ListView::Loading => "loading...".to_string(),
            ListView::Failed(message) => format!("failed to fetch data due to: {message}"),
            ListView::Table(table) => self.render(table),
        }
    }
}

impl TableRenderer<String, FooterModel> for TextRenderer {
    type Output = String;

    fn render(&self, table: &PaginatedTable<String, FooterModel>) -> String {
        let mut builder = Builder::default();
        builder.push_record(table.headers.clone());
        for row in &table.rows {
            builder.push_record(row.columns.clone());
        }
        let body = builder.build().with(Style::modern()).to_string();

        let mut output = format!("{}\n{body}", table.title);
        if let Some(footer) = &table.footer {
            output.push('\n');
            output.push_str(&Self::footer(footer));
        }
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ruok_core::{
        pagination::{Navigation, PageSize},
        table::TableRow,
    };

    fn table(rows: Vec<TableRow<String>>) -> PaginatedTable<String, FooterModel> {
        PaginatedTable::new("Jobs", || vec!["Id".to_string(), "Name".to_string()], rows)
    }

    fn footer(navigation: Navigation) -> FooterModel {
        FooterModel {
            page_number: 1,
            page_size: PageSize::Ten,
            page_sizes: PageSize::ALL.to_vec(),
            range: "11 to 20 of 23".to_string(),
            navigation,
        }
    }

    #[test]
    fn empty_table_renders_headers_without_footer() {
        let output = TextRenderer.render(&table(vec![]));
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[0], "Jobs");
        assert!(lines[2].contains("Id"));
        assert!(lines[2].contains("Name"));
        assert!(!output.contains("page"));
    }

    #[test]
    fn footer_lists_available_controls_only() {
        let rows = vec![TableRow {
            columns: vec!["1".to_string(), "api".to_string()],
        }];
        let navigation = Navigation {
            can_go_first: true,
            can_go_previous: true,
            can_go_next: false,
        };
        let output = TextRenderer.render(&table(rows).with_footer(footer(navigation)));
        let last = output.lines().last().unwrap();
        assert_eq!(
            last,
            "page 2 | 11 to 20 of 23 | page size 10 (5/10/25/50/100) | [f]irst [p]revious"
        );
        assert!(output.contains("api"));
    }

    #[test]
    fn list_view_states_render_as_text() {
        assert_eq!(TextRenderer.render_view(&ListView::Loading), "loading...");
        assert_eq!(
            TextRenderer.render_view(&ListView::Failed("boom".to_string())),
            "failed to fetch data due to: boom"
        );
    }
}
