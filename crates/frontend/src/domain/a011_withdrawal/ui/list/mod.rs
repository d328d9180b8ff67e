use crate::domain::a011_withdrawal::api;
use crate::domain::a011_withdrawal::ui::create::WithdrawalForm;
use crate::domain::lookups::WarehouseLookups;
use crate::shared::components::LookupSelect;
use crate::shared::icons::icon;
use crate::shared::modal::DetailsModal;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::toast::use_toast;
use contracts::domain::a011_withdrawal::aggregate::Withdrawal;
use contracts::domain::common::Resource;
use contracts::shared::display::{format_day, format_datetime, format_number};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// Newest first; records of other warehouses are dropped when one is selected.
fn visible_withdrawals(items: &[Withdrawal], warehouse: Option<i64>) -> Vec<Withdrawal> {
    let mut out: Vec<Withdrawal> = items
        .iter()
        .filter(|w| warehouse.map_or(true, |id| w.warehouse_id == id))
        .cloned()
        .collect();
    out.sort_by(|a, b| b.withdrawal_date.cmp(&a.withdrawal_date).then(b.id.cmp(&a.id)));
    out
}

fn detail_rows(w: &Withdrawal, lookups: &WarehouseLookups) -> Vec<(String, String)> {
    vec![
        ("Дата".into(), format_day(w.withdrawal_date)),
        ("Склад".into(), lookups.warehouse(w.warehouse_id)),
        ("Товар".into(), lookups.product(w.product_id)),
        ("Количество".into(), format_number(w.quantity)),
        ("Причина".into(), lookups.reason(w.withdrawal_reason_id)),
        ("Пользователь".into(), lookups.user(w.user_id)),
        ("Комментарий".into(), w.description.clone().unwrap_or_default()),
        (
            "Создано".into(),
            w.created_at.as_deref().map(format_datetime).unwrap_or_default(),
        ),
    ]
}

#[component]
pub fn WithdrawalList() -> impl IntoView {
    let toast = use_toast();
    let lookups = WarehouseLookups::load(toast);
    let items: RwSignal<Vec<Withdrawal>> = RwSignal::new(Vec::new());
    let warehouse_filter: RwSignal<Option<i64>> = RwSignal::new(None);
    let opened: RwSignal<Option<Withdrawal>> = RwSignal::new(None);
    let creating = RwSignal::new(false);
    let (loading, set_loading) = signal(false);

    let load = move || {
        set_loading.set(true);
        spawn_local(async move {
            match api::fetch_withdrawals().await {
                Ok(list) => items.set(list),
                Err(e) => toast.api_error("Не удалось загрузить списания", &e),
            }
            set_loading.set(false);
        });
    };

    Effect::new(move |_| load());

    let shown = Memo::new(move |_| items.with(|i| visible_withdrawals(i, warehouse_filter.get())));

    view! {
        <PageFrame page_id="a011_withdrawal--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">{Withdrawal::list_name()}</h1>
                    <Badge>{move || shown.with(Vec::len).to_string()}</Badge>
                </div>
                <div class="page__header-right">
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| creating.set(true)>
                        {icon("plus")}
                        " Новое списание"
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
                </div>

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell resizable=false min_width=100.0>"Дата"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=160.0>"Склад"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=200.0>"Товар"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=100.0>"Количество"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=160.0>"Причина"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=140.0>"Пользователь"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || shown.get()
                                key=|w| w.id
                                children=move |w: Withdrawal| {
                                    let date = format_day(w.withdrawal_date);
                                    let quantity = format_number(w.quantity);
                                    let (warehouse_id, product_id) = (w.warehouse_id, w.product_id);
                                    let (reason_id, user_id) = (w.withdrawal_reason_id, w.user_id);
                                    view! {
                                        <TableRow
                                            attr:class="table__row--clickable"
                                            on:click=move |_| opened.set(Some(w.clone()))
                                        >
                                            <TableCell><TableCellLayout>{date}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout truncate=true>{move || lookups.warehouse(warehouse_id)}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout truncate=true>{move || lookups.product(product_id)}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{quantity}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout truncate=true>{move || lookups.reason(reason_id)}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout truncate=true>{move || lookups.user(user_id)}</TableCellLayout></TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                </div>

                {move || opened.get().map(|w| view! {
                    <DetailsModal
                        title=w.title()
                        rows=detail_rows(&w, &lookups)
                        on_close=Callback::new(move |_| opened.set(None))
                    />
                })}

                <Show when=move || creating.get()>
                    <WithdrawalForm
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
    use chrono::NaiveDate;

    fn withdrawal(id: i64, warehouse_id: i64, day: u32) -> Withdrawal {
        Withdrawal {
            id,
            warehouse_id,
            product_id: 1,
            user_id: None,
            withdrawal_reason_id: None,
            quantity: 1.0,
            withdrawal_date: NaiveDate::from_ymd_opt(2024, 3, day),
            description: None,
            created_at: None,
        }
    }

    #[test]
    fn newest_first_within_selected_warehouse() {
        let items = vec![withdrawal(1, 1, 1), withdrawal(2, 2, 5), withdrawal(3, 1, 9)];
        let ids: Vec<i64> = visible_withdrawals(&items, Some(1)).iter().map(|w| w.id).collect();
        assert_eq!(ids, vec![3, 1]);
        assert_eq!(visible_withdrawals(&items, None).len(), 3);
    }
}
