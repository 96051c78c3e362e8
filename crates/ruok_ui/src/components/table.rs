use crate::components::pagination::{PageControls, PaginationFooter};
use leptos::*;
use ruok_core::{
    table::{PaginatedTable, TableRenderer},
    view::FooterModel,
};

#[component]
pub fn DataTable(children: Children) -> impl IntoView {
    view! {
        <div class="overflow-x-auto">
            <table class="min-w-full bg-slate-700 text-sm">
                {children()}
            </table>
        </div>
    }
}

#[component]
pub fn Headers(children: Children) -> impl IntoView {
    view! {
        <thead>
            <tr>
                {children()}
            </tr>
        </thead>
    }
}

#[component]
pub fn Header(children: Children) -> impl IntoView {
    view! {
        <th class="border border-b-4 border-slate-600 whitespace-nowrap p-4 font-bold text-left">
            {children()}
        </th>
    }
}

#[component]
pub fn Body(children: Children) -> impl IntoView {
    view! {
        <tbody>
            {children()}
        </tbody>
    }
}

#[component]
pub fn Row(children: Children) -> impl IntoView {
    view! {
        <tr>
            {children()}
        </tr>
    }
}

#[component]
pub fn Cell(children: Children) -> impl IntoView {
    view! {
        <td class="border border-slate-600 whitespace-nowrap p-4 text-left">
            {children()}
        </td>
    }
}

/// Renders a paginated table as html with its footer wired to `controls`.
pub struct HtmlTable {
    pub controls: PageControls,
}

impl TableRenderer<View, FooterModel> for HtmlTable {
    type Output = View;

    fn render(&self, table: &PaginatedTable<View, FooterModel>) -> View {
        let headers = table
            .headers
            .iter()
            .map(|h| {
                let h = h.clone();
                view! { <Header>{h}</Header> }
            })
            .collect_view();
        let rows = table
            .rows
            .iter()
            .map(|row| {
                let cells = row
                    .columns
                    .iter()
                    .map(|c| {
                        let c = c.clone();
                        view! { <Cell>{c}</Cell> }
                    })
                    .collect_view();
                view! { <Row>{cells}</Row> }
            })
            .collect_view();
        let footer = table
            .footer
            .clone()
            .map(|footer| view! { <PaginationFooter footer=footer controls=self.controls /> });

        view! {
            <div class="flex flex-col">
                <DataTable>
                    <Headers>{headers}</Headers>
                    <Body>{rows}</Body>
                </DataTable>
                {footer}
            </div>
        }
        .into_view()
    }
}
