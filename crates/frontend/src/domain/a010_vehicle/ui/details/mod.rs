use crate::domain::a010_vehicle::api;
use crate::domain::lookups::WarehouseLookups;
use crate::shared::components::LookupSelect;
use crate::shared::form_utils::parse_quantity;
use crate::shared::icons::icon;
use crate::shared::modal::Modal;
use crate::shared::toast::use_toast;
use contracts::domain::a010_vehicle::aggregate::{CreateVehicleItem, Vehicle};
use contracts::domain::common::{lookup_name, NameLookup, Resource};
use contracts::shared::display::{format_day, format_eur, format_number, yes_no};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

fn header_rows(
    v: &Vehicle,
    counterparties: &NameLookup,
    carriers: &NameLookup,
) -> Vec<(&'static str, String)> {
    let text = |value: &Option<String>| value.clone().unwrap_or_default();
    vec![
        ("Дата отгрузки", format_day(v.shipment_date)),
        ("Номер", text(&v.vehicle_number)),
        ("Наша машина", yes_no(v.is_our_vehicle).to_string()),
        ("Отправитель", lookup_name(counterparties, v.sender_id)),
        ("Получатель", lookup_name(counterparties, v.receiver_id)),
        ("Перевозчик", lookup_name(carriers, v.carrier_id)),
        ("Назначение", v.destination()),
        ("Инвойс UA", text(&v.invoice_ua)),
        ("Инвойс EU", text(&v.invoice_eu)),
        ("Декларация", text(&v.declaration_number)),
        ("Комментарий", text(&v.description)),
        ("Стоимость", format_eur(v.total_cost())),
    ]
}

/// Card of one vehicle with its items. Adding or removing an item reloads
/// the vehicle and reports through `on_changed`.
#[component]
pub fn VehicleDetails(
    vehicle: Vehicle,
    lookups: WarehouseLookups,
    counterparties: RwSignal<NameLookup>,
    carriers: RwSignal<NameLookup>,
    on_close: Callback<()>,
    on_changed: Callback<()>,
) -> impl IntoView {
    let toast = use_toast();
    let vehicle_id = vehicle.id;
    let title = format!("Машина {}", vehicle.title());
    let current = RwSignal::new(vehicle);
    let item_product: RwSignal<Option<i64>> = RwSignal::new(None);
    let item_warehouse: RwSignal<Option<i64>> = RwSignal::new(None);
    let item_quantity = RwSignal::new(String::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (busy, set_busy) = signal(false);

    let reload = move || {
        spawn_local(async move {
            match api::fetch_vehicle(vehicle_id).await {
                Ok(v) => current.set(v),
                Err(e) => toast.api_error("Не удалось обновить машину", &e),
            }
            set_busy.set(false);
            on_changed.run(());
        });
    };

    let on_add = move |_| {
        let (Some(product_id), Some(warehouse_id)) =
            (item_product.get_untracked(), item_warehouse.get_untracked())
        else {
            set_error.set(Some("Выберите товар и склад".to_string()));
            return;
        };
        let quantity = match parse_quantity(&item_quantity.get_untracked()) {
            Ok(q) => q,
            Err(message) => {
                set_error.set(Some(message));
                return;
            }
        };
        let dto = CreateVehicleItem {
            product_id,
            warehouse_id,
            quantity,
        };
        if let Err(message) = dto.validate() {
            set_error.set(Some(message));
            return;
        }
        set_error.set(None);
        set_busy.set(true);
        spawn_local(async move {
            match api::add_item(vehicle_id, &dto).await {
                Ok(()) => {
                    item_quantity.set(String::new());
                    toast.success("Позиция добавлена");
                    reload();
                }
                Err(e) => {
                    set_busy.set(false);
                    set_error.set(Some(e.to_string()));
                }
            }
        });
    };

    let remove = move |item_id: i64| {
        set_busy.set(true);
        spawn_local(async move {
            match api::remove_item(vehicle_id, item_id).await {
                Ok(()) => {
                    toast.success("Позиция удалена");
                    reload();
                }
                Err(e) => {
                    set_busy.set(false);
                    toast.api_error("Не удалось удалить позицию", &e);
                }
            }
        });
    };

    view! {
        <Modal title=title on_close=on_close class="modal--wide">
            <div class="details">
                {move || {
                    let rows = counterparties.with(|cp| {
                        carriers.with(|c| current.with(|v| header_rows(v, cp, c)))
                    });
                    rows.into_iter()
                        .map(|(label, value)| view! {
                            <div class="details__row">
                                <span class="details__label">{label}</span>
                                <span class="details__value">{value}</span>
                            </div>
                        })
                        .collect_view()
                }}
            </div>

            <h3 class="details__section">"Позиции"</h3>
            <Table attr:style="width: 100%;">
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell resizable=false min_width=200.0>"Товар"</TableHeaderCell>
                        <TableHeaderCell resizable=false min_width=160.0>"Склад"</TableHeaderCell>
                        <TableHeaderCell resizable=false min_width=100.0>"Количество"</TableHeaderCell>
                        <TableHeaderCell resizable=false min_width=110.0>"Цена"</TableHeaderCell>
                        <TableHeaderCell resizable=false min_width=110.0>"Сумма"</TableHeaderCell>
                        <TableHeaderCell resizable=false min_width=50.0></TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {move || {
                        current
                            .get()
                            .items
                            .into_iter()
                            .map(|item| {
                                let item_id = item.id;
                                view! {
                                    <TableRow>
                                        <TableCell><TableCellLayout truncate=true>{lookups.product(item.product_id)}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout truncate=true>{lookups.warehouse(item.warehouse_id)}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout>{format_number(item.quantity)}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout>{item.unit_price_eur.map(format_eur).unwrap_or_default()}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout>{item.total_cost_eur.map(format_eur).unwrap_or_default()}</TableCellLayout></TableCell>
                                        <TableCell>
                                            <Button
                                                appearance=ButtonAppearance::Subtle
                                                on_click=move |_| remove(item_id)
                                                disabled=Signal::derive(move || busy.get())
                                                attr:title="Удалить позицию"
                                            >
                                                {icon("trash")}
                                            </Button>
                                        </TableCell>
                                    </TableRow>
                                }
                            })
                            .collect_view()
                    }}
                    <TableRow attr:class="table__totals">
                        <TableCell><TableCellLayout>"Итого"</TableCellLayout></TableCell>
                        <TableCell></TableCell>
                        <TableCell>
                            <TableCellLayout>{move || current.with(|v| format_number(v.total_quantity()))}</TableCellLayout>
                        </TableCell>
                        <TableCell></TableCell>
                        <TableCell>
                            <TableCellLayout>{move || current.with(|v| format_eur(v.total_cost()))}</TableCellLayout>
                        </TableCell>
                        <TableCell></TableCell>
                    </TableRow>
                </TableBody>
            </Table>

            <h3 class="details__section">"Добавить позицию"</h3>
            {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
            <div class="form__row">
                <LookupSelect label="Товар" options=lookups.products value=item_product />
                <LookupSelect label="Склад" options=lookups.warehouses value=item_warehouse />
                <div class="form__group">
                    <Label>"Количество"</Label>
                    <Input value=item_quantity input_type=InputType::Number />
                </div>
            </div>
            <div class="modal-footer">
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=on_add
                    disabled=Signal::derive(move || busy.get())
                >
                    {icon("plus")}
                    " Добавить"
                </Button>
            </div>
        </Modal>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn header_resolves_parties() {
        let vehicle: Vehicle = serde_json::from_value(json!({
            "id": 4,
            "vehicleNumber": "AA1234BB",
            "isOurVehicle": true,
            "senderId": 1,
            "receiverId": 2,
            "carrierId": 9,
            "destinationCountry": "PL",
            "destinationPlace": "Lublin"
        }))
        .unwrap();
        let mut counterparties = NameLookup::new();
        counterparties.insert(1, "Агро".to_string());
        counterparties.insert(2, "Polmarket".to_string());
        let mut carriers = NameLookup::new();
        carriers.insert(9, "Trans".to_string());

        let rows = header_rows(&vehicle, &counterparties, &carriers);
        let value = |label: &str| rows.iter().find(|r| r.0 == label).map(|r| r.1.clone());
        assert_eq!(value("Отправитель").as_deref(), Some("Агро"));
        assert_eq!(value("Получатель").as_deref(), Some("Polmarket"));
        assert_eq!(value("Перевозчик").as_deref(), Some("Trans"));
        assert_eq!(value("Назначение").as_deref(), Some("PL, Lublin"));
        assert_eq!(value("Наша машина").as_deref(), Some(yes_no(true)));
    }
}
