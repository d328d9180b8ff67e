use crate::domain::a013_transfer::api;
use crate::domain::a013_transfer::ui::create::TransferForm;
use crate::domain::lookups::WarehouseLookups;
use crate::shared::components::LookupSelect;
use crate::shared::icons::icon;
use crate::shared::modal::DetailsModal;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::toast::use_toast;
use contracts::domain::a013_transfer::aggregate::Transfer;
use contracts::domain::common::Resource;
use contracts::shared::display::{format_day, format_number};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// Newest first. A product filter matches either side of the transfer.
fn visible_transfers(items: &[Transfer], warehouse: Option<i64>, product: Option<i64>) -> Vec<Transfer> {
    let mut out: Vec<Transfer> = items
        .iter()
        .filter(|t| warehouse.map_or(true, |id| t.warehouse_id == id))
        .filter(|t| product.map_or(true, |id| t.from_product_id == id || t.to_product_id == id))
        .cloned()
        .collect();
    out.sort_by(|a, b| b.transfer_date.cmp(&a.transfer_date).then(b.id.cmp(&a.id)));
    out
}

fn detail_rows(t: &Transfer, lookups: &WarehouseLookups) -> Vec<(String, String)> {
    vec![
        ("Дата".into(), format_day(t.transfer_date)),
        ("Склад".into(), lookups.warehouse(t.warehouse_id)),
        ("Из товара".into(), lookups.product(t.from_product_id)),
        ("В товар".into(), lookups.product(t.to_product_id)),
        ("Количество".into(), format_number(t.quantity)),
        ("Причина".into(), lookups.reason(t.reason_id)),
        ("Пользователь".into(), lookups.user(t.user_id)),
        ("Комментарий".into(), t.description.clone().unwrap_or_default()),
    ]
}

#[component]
pub fn TransferList() -> impl IntoView {
    let toast = use_toast();
    let lookups = WarehouseLookups::load(toast);
    let items: RwSignal<Vec<Transfer>> = RwSignal::new(Vec::new());
    let warehouse_filter: RwSignal<Option<i64>> = RwSignal::new(None);
    let product_filter: RwSignal<Option<i64>> = RwSignal::new(None);
    let opened: RwSignal<Option<Transfer>> = RwSignal::new(None);
    let creating = RwSignal::new(false);
    let (loading, set_loading) = signal(false);

    let load = move || {
        set_loading.set(true);
        spawn_local(async move {
            match api::fetch_transfers().await {
                Ok(list) => items.set(list),
                Err(e) => toast.api_error("Не удалось загрузить переводы", &e),
            }
            set_loading.set(false);
        });
    };

    Effect::new(move |_| load());

    let shown = Memo::new(move |_| {
        items.with(|i| visible_transfers(i, warehouse_filter.get(), product_filter.get()))
    });

    view! {
        <PageFrame page_id="a013_transfer--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">{Transfer::list_name()}</h1>
                    <Badge>{move || shown.with(Vec::len).to_string()}</Badge>
                </div>
                <div class="page__header-right">
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| creating.set(true)>
                        {icon("plus")}
                        " Новый перевод"
                    </Button>
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
                    <LookupSelect label="Товар" options=lookups.products value=product_filter empty_label="Все товары" />
                </div>

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell resizable=false min_width=100.0>"Дата"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=160.0>"Склад"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=180.0>"Из товара"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=180.0>"В товар"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=100.0>"Количество"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=160.0>"Причина"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || shown.get()
                                key=|t| t.id
                                children=move |t: Transfer| {
                                    let date = format_day(t.transfer_date);
                                    let quantity = format_number(t.quantity);
                                    let (warehouse_id, reason_id) = (t.warehouse_id, t.reason_id);
                                    let (from_id, to_id) = (t.from_product_id, t.to_product_id);
                                    view! {
                                        <TableRow
                                            attr:class="table__row--clickable"
                                            on:click=move |_| opened.set(Some(t.clone()))
                                        >
                                            <TableCell><TableCellLayout>{date}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout truncate=true>{move || lookups.warehouse(warehouse_id)}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout truncate=true>{move || lookups.product(from_id)}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout truncate=true>{move || lookups.product(to_id)}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{quantity}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout truncate=true>{move || lookups.reason(reason_id)}</TableCellLayout></TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                </div>

                {move || opened.get().map(|t| view! {
                    <DetailsModal
                        title=t.title()
                        rows=detail_rows(&t, &lookups)
                        on_close=Callback::new(move |_| opened.set(None))
                    />
                })}

                <Show when=move || creating.get()>
                    <TransferForm
                        lookups=lookups
                        on_close=Callback::new(move |_| creating.set(false))
                        on_saved=Callback::new(move |_| {
                            creating.set(false);
                            load();
                        })
                    />
                </Show>
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transfer(id: i64, from_product_id: i64, to_product_id: i64) -> Transfer {
        Transfer {
            id,
            warehouse_id: 1,
            from_product_id,
            to_product_id,
            user_id: None,
            quantity: 1.0,
            reason_id: None,
            transfer_date: None,
            description: None,
        }
    }

    #[test]
    fn product_filter_matches_either_side() {
        let items = vec![transfer(1, 10, 11), transfer(2, 12, 10), transfer(3, 12, 13)];
        let ids: Vec<i64> = visible_transfers(&items, None, Some(10)).iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![2, 1]);
        assert!(visible_transfers(&items, Some(2), None).is_empty());
    }
}
