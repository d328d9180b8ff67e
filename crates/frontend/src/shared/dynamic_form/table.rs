use crate::shared::components::SortableHeaderCell;
use contracts::shared::dynamic_form::TableColumn;
use contracts::shared::list_query::SortDirection;
use leptos::prelude::*;
use thaw::*;

/// One rendered row: cell texts in column order.
#[derive(Debug, Clone, PartialEq)]
pub struct TableRowData {
    pub id: i64,
    pub cells: Vec<String>,
}

/// Table over schema-built columns. Rows are replaced wholesale whenever
/// `rows` changes; a click on a row reports its id.
#[component]
pub fn DynamicTable(
    #[prop(into)] columns: Signal<Vec<TableColumn>>,
    #[prop(into)] rows: Signal<Vec<TableRowData>>,
    #[prop(into)] sort_field: Signal<String>,
    #[prop(into)] direction: Signal<SortDirection>,
    on_sort: Callback<String>,
    on_row_click: Callback<i64>,
) -> impl IntoView {
    view! {
        <div class="table-wrapper">
            <Table attr:style="width: 100%;">
                <TableHeader>
                    <TableRow>
                        {move || {
                            columns
                                .get()
                                .into_iter()
                                .map(|column| {
                                    view! {
                                        <SortableHeaderCell
                                            label=column.label.clone()
                                            sort_field=Some(column.sort_key().to_string())
                                            current_sort_field=sort_field
                                            direction=direction
                                            on_sort=on_sort
                                            min_width=column.width as f64
                                        />
                                    }
                                })
                                .collect_view()
                        }}
                    </TableRow>
                </TableHeader>
                <TableBody>
                    <Show
                        when=move || !rows.with(Vec::is_empty)
                        fallback=move || {
                            view! {
                                <TableRow>
                                    <TableCell attr:colspan=move || columns.with(Vec::len).to_string()>
                                        <span class="table__empty">"Нет данных"</span>
                                    </TableCell>
                                </TableRow>
                            }
                        }
                    >
                        <For
                            each=move || rows.get()
                            key=|row| (row.id, row.cells.clone())
                            children=move |row| {
                                let id = row.id;
                                view! {
                                    <TableRow
                                        attr:class="table__row--clickable"
                                        on:click=move |_| on_row_click.run(id)
                                    >
                                        {row
                                            .cells
                                            .into_iter()
                                            .map(|cell| {
                                                view! {
                                                    <TableCell>
                                                        <TableCellLayout truncate=true>{cell}</TableCellLayout>
                                                    </TableCell>
                                                }
                                            })
                                            .collect_view()}
                                    </TableRow>
                                }
                            }
                        />
                    </Show>
                </TableBody>
            </Table>
        </div>
    }
}
