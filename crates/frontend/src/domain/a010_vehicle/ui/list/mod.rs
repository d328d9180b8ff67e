use crate::domain::a010_vehicle::api;
use crate::domain::a010_vehicle::ui::create::VehicleForm;
use crate::domain::a010_vehicle::ui::details::VehicleDetails;
use crate::domain::lookups::{spawn_lookup, WarehouseLookups};
use crate::shared::components::date_range_picker::month_bounds;
use crate::shared::components::DateRangePicker;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::toast::use_toast;
use contracts::domain::a007_carrier::aggregate::Carrier;
use contracts::domain::a009_counterparty::aggregate::Counterparty;
use contracts::domain::a010_vehicle::aggregate::Vehicle;
use contracts::domain::common::{lookup_name, NameLookup, Resource};
use contracts::shared::display::{format_day, format_eur, format_number, yes_no};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// Newest shipment first; vehicles without a date go last.
fn ordered(mut vehicles: Vec<Vehicle>) -> Vec<Vehicle> {
    vehicles.sort_by(|a, b| match (a.shipment_date, b.shipment_date) {
        (Some(x), Some(y)) => y.cmp(&x).then(b.id.cmp(&a.id)),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => b.id.cmp(&a.id),
    });
    vehicles
}

fn current_month() -> (String, String) {
    month_bounds(chrono::Local::now().date_naive(), 0)
        .map(|(start, end)| {
            (
                start.format("%Y-%m-%d").to_string(),
                end.format("%Y-%m-%d").to_string(),
            )
        })
        .unwrap_or_default()
}

#[component]
pub fn VehicleList() -> impl IntoView {
    let toast = use_toast();
    let lookups = WarehouseLookups::load(toast);
    let counterparties: RwSignal<NameLookup> = RwSignal::new(NameLookup::new());
    let carriers: RwSignal<NameLookup> = RwSignal::new(NameLookup::new());
    let vehicles: RwSignal<Vec<Vehicle>> = RwSignal::new(Vec::new());
    let (initial_from, initial_to) = current_month();
    let date_from = RwSignal::new(initial_from);
    let date_to = RwSignal::new(initial_to);
    let opened: RwSignal<Option<Vehicle>> = RwSignal::new(None);
    let creating = RwSignal::new(false);
    let (loading, set_loading) = signal(false);

    let load = move || {
        set_loading.set(true);
        let (from, to) = (date_from.get_untracked(), date_to.get_untracked());
        spawn_local(async move {
            match api::fetch_vehicles(&from, &to).await {
                Ok(list) => vehicles.set(ordered(list)),
                Err(e) => toast.api_error("Не удалось загрузить машины", &e),
            }
            set_loading.set(false);
        });
    };

    Effect::new(move |_| {
        spawn_lookup::<Counterparty>(counterparties, toast);
        spawn_lookup::<Carrier>(carriers, toast);
    });

    Effect::new(move |_| {
        date_from.track();
        date_to.track();
        load();
    });

    let on_range = Callback::new(move |(from, to): (String, String)| {
        date_from.set(from);
        date_to.set(to);
    });

    view! {
        <PageFrame page_id="a010_vehicle--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">{Vehicle::list_name()}</h1>
                    <Badge>{move || vehicles.with(Vec::len).to_string()}</Badge>
                </div>
                <div class="page__header-right">
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| creating.set(true)>
                        {icon("plus")}
                        " Новая машина"
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
                    <DateRangePicker
                        date_from=date_from
                        date_to=date_to
                        on_change=on_range
                        label="Дата отгрузки"
                    />
                </div>

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell resizable=false min_width=100.0>"Дата"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=120.0>"Номер"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=160.0>"Отправитель"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=160.0>"Получатель"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=150.0>"Назначение"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=80.0>"Наша"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=100.0>"Количество"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=120.0>"Стоимость"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || vehicles.get()
                                key=|v| (v.id, v.items.len(), v.total_cost().to_bits())
                                children=move |v: Vehicle| {
                                    let date = format_day(v.shipment_date);
                                    let number = v.vehicle_number.clone().unwrap_or_default();
                                    let (sender_id, receiver_id) = (v.sender_id, v.receiver_id);
                                    let destination = v.destination();
                                    let ours = yes_no(v.is_our_vehicle);
                                    let quantity = format_number(v.total_quantity());
                                    let cost = format_eur(v.total_cost());
                                    view! {
                                        <TableRow
                                            attr:class="table__row--clickable"
                                            on:click=move |_| opened.set(Some(v.clone()))
                                        >
                                            <TableCell><TableCellLayout>{date}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout truncate=true>{number}</TableCellLayout></TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {move || counterparties.with(|c| lookup_name(c, sender_id))}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {move || counterparties.with(|c| lookup_name(c, receiver_id))}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell><TableCellLayout truncate=true>{destination}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{ours}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{quantity}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{cost}</TableCellLayout></TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                </div>

                {move || opened.get().map(|v| view! {
                    <VehicleDetails
                        vehicle=v
                        lookups=lookups
                        counterparties=counterparties
                        carriers=carriers
                        on_close=Callback::new(move |_| opened.set(None))
                        on_changed=Callback::new(move |_| load())
                    />
                })}

                <Show when=move || creating.get()>
                    <VehicleForm
                        counterparties=counterparties
                        carriers=carriers
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
    use serde_json::json;

    fn vehicle(id: i64, date: Option<&str>) -> Vehicle {
        serde_json::from_value(json!({"id": id, "shipmentDate": date})).unwrap()
    }

    #[test]
    fn newest_first_undated_last() {
        let list = ordered(vec![
            vehicle(1, Some("2024-05-01")),
            vehicle(2, None),
            vehicle(3, Some("2024-05-20")),
        ]);
        assert_eq!(list.iter().map(|v| v.id).collect::<Vec<_>>(), vec![3, 1, 2]);
    }
}
