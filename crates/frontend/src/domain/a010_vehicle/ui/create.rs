use crate::domain::a010_vehicle::api;
use crate::shared::components::LookupSelect;
use crate::shared::form_utils::{non_empty, optional_date, today};
use crate::shared::modal::Modal;
use crate::shared::toast::use_toast;
use contracts::domain::a010_vehicle::aggregate::CreateVehicle;
use contracts::domain::common::NameLookup;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

#[component]
pub fn VehicleForm(
    counterparties: RwSignal<NameLookup>,
    carriers: RwSignal<NameLookup>,
    on_close: Callback<()>,
    on_saved: Callback<()>,
) -> impl IntoView {
    let toast = use_toast();
    let shipment_date = RwSignal::new(today());
    let vehicle_number = RwSignal::new(String::new());
    let invoice_ua = RwSignal::new(String::new());
    let invoice_eu = RwSignal::new(String::new());
    let declaration_number = RwSignal::new(String::new());
    let destination_country = RwSignal::new(String::new());
    let destination_place = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let is_our_vehicle = RwSignal::new(false);
    let sender_id: RwSignal<Option<i64>> = RwSignal::new(None);
    let receiver_id: RwSignal<Option<i64>> = RwSignal::new(None);
    let carrier_id: RwSignal<Option<i64>> = RwSignal::new(None);
    let (error, set_error) = signal::<Option<String>>(None);
    let (saving, set_saving) = signal(false);

    let on_save = move |_| {
        let shipment_date = match optional_date(&shipment_date.get_untracked()) {
            Ok(date) => date,
            Err(message) => {
                set_error.set(Some(message));
                return;
            }
        };
        let dto = CreateVehicle {
            shipment_date,
            vehicle_number: non_empty(vehicle_number.get_untracked()),
            invoice_ua: non_empty(invoice_ua.get_untracked()),
            invoice_eu: non_empty(invoice_eu.get_untracked()),
            description: non_empty(description.get_untracked()),
            is_our_vehicle: is_our_vehicle.get_untracked(),
            sender_id: sender_id.get_untracked(),
            receiver_id: receiver_id.get_untracked(),
            destination_country: non_empty(destination_country.get_untracked()),
            destination_place: non_empty(destination_place.get_untracked()),
            carrier_id: carrier_id.get_untracked(),
            declaration_number: non_empty(declaration_number.get_untracked()),
        };
        if let Err(message) = dto.validate() {
            set_error.set(Some(message));
            return;
        }
        set_error.set(None);
        set_saving.set(true);
        spawn_local(async move {
            let response = api::create_vehicle(&dto).await;
            set_saving.set(false);
            match response {
                Ok(()) => {
                    toast.success("Машина добавлена");
                    on_saved.run(());
                }
                Err(e) => set_error.set(Some(e.to_string())),
            }
        });
    };

    view! {
        <Modal title="Новая машина" on_close=on_close class="modal--wide">
            {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

            <div class="form__row">
                <div class="form__group">
                    <Label>"Дата отгрузки"</Label>
                    <Input value=shipment_date input_type=InputType::Date />
                </div>
                <div class="form__group">
                    <Label>"Номер машины"</Label>
                    <Input value=vehicle_number placeholder="AA1234BB" />
                </div>
            </div>

            <div class="form__row">
                <div class="form__group">
                    <Label>"Инвойс UA"</Label>
                    <Input value=invoice_ua />
                </div>
                <div class="form__group">
                    <Label>"Инвойс EU"</Label>
                    <Input value=invoice_eu />
                </div>
                <div class="form__group">
                    <Label>"Декларация"</Label>
                    <Input value=declaration_number />
                </div>
            </div>

            <div class="form__row">
                <LookupSelect label="Отправитель" options=counterparties value=sender_id />
                <LookupSelect label="Получатель" options=counterparties value=receiver_id />
                <LookupSelect label="Перевозчик" options=carriers value=carrier_id />
            </div>

            <div class="form__row">
                <div class="form__group">
                    <Label>"Страна назначения"</Label>
                    <Input value=destination_country />
                </div>
                <div class="form__group">
                    <Label>"Место назначения"</Label>
                    <Input value=destination_place />
                </div>
            </div>

            <div class="form__group">
                <Label>"Комментарий"</Label>
                <Input value=description />
            </div>

            <label class="form__checkbox">
                <input
                    type="checkbox"
                    prop:checked=move || is_our_vehicle.get()
                    on:change=move |ev| is_our_vehicle.set(event_target_checked(&ev))
                />
                " Наша машина"
            </label>

            <div class="modal-footer">
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| on_close.run(())
                    disabled=Signal::derive(move || saving.get())
                >
                    "Отмена"
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=on_save
                    disabled=Signal::derive(move || saving.get())
                >
                    {move || if saving.get() { "Сохранение..." } else { "Сохранить" }}
                </Button>
            </div>
        </Modal>
    }
}
