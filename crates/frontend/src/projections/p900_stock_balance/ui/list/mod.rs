use crate::domain::lookups::spawn_lookup;
use crate::projections::p900_stock_balance::api;
use crate::shared::components::LookupSelect;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::toast::use_toast;
use contracts::domain::a004_product::aggregate::Product;
use contracts::domain::a005_storage::aggregate::Storage;
use contracts::domain::common::{lookup_name, NameLookup};
use contracts::projections::p900_stock_balance::dto::{totals, visible_balances, StockBalance};
use contracts::shared::display::{format_eur, format_number};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// Display rows ordered by warehouse name, then product name.
fn ordered_rows(
    balances: Vec<StockBalance>,
    warehouses: &NameLookup,
    products: &NameLookup,
) -> Vec<(String, String, StockBalance)> {
    let mut rows: Vec<(String, String, StockBalance)> = balances
        .into_iter()
        .map(|b| {
            (
                lookup_name(warehouses, Some(b.warehouse_id)),
                lookup_name(products, Some(b.product_id)),
                b,
            )
        })
        .collect();
    rows.sort_by(|a, b| (&a.0, &a.1).cmp(&(&b.0, &b.1)));
    rows
}

#[component]
pub fn StockBalanceList() -> impl IntoView {
    let toast = use_toast();
    let balances: RwSignal<Vec<StockBalance>> = RwSignal::new(Vec::new());
    let warehouses: RwSignal<NameLookup> = RwSignal::new(NameLookup::new());
    let products: RwSignal<NameLookup> = RwSignal::new(NameLookup::new());
    let warehouse_filter: RwSignal<Option<i64>> = RwSignal::new(None);
    let hide_empty = RwSignal::new(true);
    let (loading, set_loading) = signal(false);

    let load = move || {
        set_loading.set(true);
        spawn_local(async move {
            match api::fetch_balances().await {
                Ok(list) => balances.set(list),
                Err(e) => toast.api_error("Не удалось загрузить остатки", &e),
            }
            set_loading.set(false);
        });
    };

    Effect::new(move |_| {
        load();
        spawn_lookup::<Storage>(warehouses, toast);
        spawn_lookup::<Product>(products, toast);
    });

    let shown = Memo::new(move |_| {
        balances.with(|b| visible_balances(b, warehouse_filter.get(), hide_empty.get()))
    });

    view! {
        <PageFrame page_id="p900_stock_balance--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Остатки на складах"</h1>
                    <Badge>{move || shown.with(Vec::len).to_string()}</Badge>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| load()
                        disabled=Signal::derive(move || loading.get())
                    >
                        {icon("refresh")}
                        {move || if loading.get() { " Загрузка..." } else { " Обновить" }}
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <div class="filter-row">
                    <LookupSelect label="Склад" options=warehouses value=warehouse_filter empty_label="Все склады" />
                    <label class="form__checkbox">
                        <input
                            type="checkbox"
                            prop:checked=move || hide_empty.get()
                            on:change=move |ev| hide_empty.set(event_target_checked(&ev))
                        />
                        " Скрыть нулевые"
                    </label>
                </div>

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell resizable=false min_width=180.0>"Склад"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=220.0>"Товар"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=110.0>"Количество"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=130.0>"Средняя цена"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=130.0>"Стоимость"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {move || {
                                let rows = warehouses.with(|w| {
                                    products.with(|p| ordered_rows(shown.get(), w, p))
                                });
                                rows.into_iter()
                                    .map(|(warehouse, product, b)| view! {
                                        <TableRow>
                                            <TableCell><TableCellLayout truncate=true>{warehouse}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout truncate=true>{product}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{format_number(b.quantity)}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{format_eur(b.average_price_eur)}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{format_eur(b.total_cost_eur)}</TableCellLayout></TableCell>
                                        </TableRow>
                                    })
                                    .collect_view()
                            }}
                            <TableRow attr:class="table__totals">
                                <TableCell><TableCellLayout>"Итого"</TableCellLayout></TableCell>
                                <TableCell></TableCell>
                                <TableCell>
                                    <TableCellLayout>{move || format_number(shown.with(|b| totals(b).quantity))}</TableCellLayout>
                                </TableCell>
                                <TableCell></TableCell>
                                <TableCell>
                                    <TableCellLayout>{move || format_eur(shown.with(|b| totals(b).total_cost_eur))}</TableCellLayout>
                                </TableCell>
                            </TableRow>
                        </TableBody>
                    </Table>
                </div>
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_ordered_by_names() {
        let mut warehouses = NameLookup::new();
        warehouses.insert(1, "Б".to_string());
        warehouses.insert(2, "А".to_string());
        let mut products = NameLookup::new();
        products.insert(10, "Ячмень".to_string());
        products.insert(11, "Пшеница".to_string());
        let balance = |warehouse_id, product_id| StockBalance {
            warehouse_id,
            product_id,
            quantity: 1.0,
            total_cost_eur: 0.0,
            average_price_eur: 0.0,
        };

        let rows = ordered_rows(
            vec![balance(1, 10), balance(2, 10), balance(2, 11)],
            &warehouses,
            &products,
        );
        let names: Vec<(&str, &str)> = rows.iter().map(|r| (r.0.as_str(), r.1.as_str())).collect();
        assert_eq!(names, vec![("А", "Пшеница"), ("А", "Ячмень"), ("Б", "Ячмень")]);
    }
}
