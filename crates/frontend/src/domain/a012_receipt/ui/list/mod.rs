use crate::domain::a012_receipt::api;
use crate::domain::lookups::WarehouseLookups;
use crate::shared::components::LookupSelect;
use crate::shared::icons::icon;
use crate::shared::modal::DetailsModal;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::toast::use_toast;
use contracts::domain::a012_receipt::aggregate::Receipt;
use contracts::domain::common::Resource;
use contracts::shared::display::{format_day, format_datetime, format_eur, format_number};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

fn visible_receipts(items: &[Receipt], warehouse: Option<i64>) -> Vec<Receipt> {
    let mut out: Vec<Receipt> = items
        .iter()
        .filter(|r| warehouse.map_or(true, |id| r.warehouse_id == id))
        .cloned()
        .collect();
    out.sort_by(|a, b| b.entry_date.cmp(&a.entry_date).then(b.id.cmp(&a.id)));
    out
}

/// Sum of known costs; receipts without a cost are skipped.
fn total_cost(items: &[Receipt]) -> f64 {
    items.iter().filter_map(|r| r.total_cost_eur).sum()
}

fn detail_rows(r: &Receipt, lookups: &WarehouseLookups) -> Vec<(String, String)> {
    vec![
        ("Дата".into(), format_day(r.entry_date)),
        ("Склад".into(), lookups.warehouse(r.warehouse_id)),
        ("Товар".into(), lookups.product(r.product_id)),
        ("Количество".into(), format_number(r.quantity)),
        ("Стоимость".into(), r.total_cost_eur.map(format_eur).unwrap_or_default()),
        (
            "Закупка".into(),
            r.purchase_id.map(|id| format!("№{}", id)).unwrap_or_default(),
        ),
        ("Пользователь".into(), lookups.user(r.user_id)),
        (
            "Создано".into(),
            r.created_at.as_deref().map(format_datetime).unwrap_or_default(),
        ),
    ]
}

#[component]
pub fn ReceiptList() -> impl IntoView {
    let toast = use_toast();
    let lookups = WarehouseLookups::load(toast);
    let items: RwSignal<Vec<Receipt>> = RwSignal::new(Vec::new());
    let warehouse_filter: RwSignal<Option<i64>> = RwSignal::new(None);
    let opened: RwSignal<Option<Receipt>> = RwSignal::new(None);
    let (loading, set_loading) = signal(false);

    let load = move || {
        set_loading.set(true);
        spawn_local(async move {
            match api::fetch_receipts().await {
                Ok(list) => items.set(list),
                Err(e) => toast.api_error("Не удалось загрузить поступления", &e),
            }
            set_loading.set(false);
        });
    };

    Effect::new(move |_| load());

    let shown = Memo::new(move |_| items.with(|i| visible_receipts(i, warehouse_filter.get())));

    view! {
        <PageFrame page_id="a012_receipt--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">{Receipt::list_name()}</h1>
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
                    <LookupSelect label="Склад" options=lookups.warehouses value=warehouse_filter empty_label="Все склады" />
                </div>

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell resizable=false min_width=100.0>"Дата"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=160.0>"Склад"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=200.0>"Товар"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=100.0>"Количество"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=120.0>"Стоимость"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=140.0>"Пользователь"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || shown.get()
                                key=|r| r.id
                                children=move |r: Receipt| {
                                    let date = format_day(r.entry_date);
                                    let quantity = format_number(r.quantity);
                                    let cost = r.total_cost_eur.map(format_eur).unwrap_or_default();
                                    let (warehouse_id, product_id, user_id) = (r.warehouse_id, r.product_id, r.user_id);
                                    view! {
                                        <TableRow
                                            attr:class="table__row--clickable"
                                            on:click=move |_| opened.set(Some(r.clone()))
                                        >
                                            <TableCell><TableCellLayout>{date}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout truncate=true>{move || lookups.warehouse(warehouse_id)}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout truncate=true>{move || lookups.product(product_id)}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{quantity}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{cost}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout truncate=true>{move || lookups.user(user_id)}</TableCellLayout></TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                            <TableRow attr:class="table__totals">
                                <TableCell><TableCellLayout>"Итого"</TableCellLayout></TableCell>
                                <TableCell></TableCell>
                                <TableCell></TableCell>
                                <TableCell></TableCell>
                                <TableCell>
                                    <TableCellLayout>{move || format_eur(shown.with(|r| total_cost(r)))}</TableCellLayout>
                                </TableCell>
                                <TableCell></TableCell>
                            </TableRow>
                        </TableBody>
                    </Table>
                </div>

                {move || opened.get().map(|r| view! {
                    <DetailsModal
                        title=r.title()
                        rows=detail_rows(&r, &lookups)
                        on_close=Callback::new(move |_| opened.set(None))
                    />
                })}
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn receipt(id: i64, warehouse_id: i64, cost: Option<f64>) -> Receipt {
        Receipt {
            id,
            warehouse_id,
            product_id: 1,
            user_id: None,
            quantity: 2.0,
            entry_date: NaiveDate::from_ymd_opt(2024, 1, id as u32),
            total_cost_eur: cost,
            purchase_id: None,
            created_at: None,
        }
    }

    #[test]
    fn filtered_sorted_and_totalled() {
        let items = vec![receipt(1, 1, Some(10.0)), receipt(2, 2, None), receipt(3, 1, Some(2.5))];
        let shown = visible_receipts(&items, Some(1));
        assert_eq!(shown.iter().map(|r| r.id).collect::<Vec<_>>(), vec![3, 1]);
        assert_eq!(total_cost(&shown), 12.5);
        assert_eq!(total_cost(&items), 12.5);
    }
}
