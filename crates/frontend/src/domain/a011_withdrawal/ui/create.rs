use crate::domain::a011_withdrawal::api;
use crate::domain::lookups::WarehouseLookups;
use crate::shared::components::LookupSelect;
use crate::shared::form_utils::{non_empty, parse_date, parse_quantity, today};
use crate::shared::modal::Modal;
use crate::shared::toast::use_toast;
use contracts::domain::a011_withdrawal::aggregate::CreateWithdrawal;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

#[component]
pub fn WithdrawalForm(
    lookups: WarehouseLookups,
    on_close: Callback<()>,
    on_saved: Callback<()>,
) -> impl IntoView {
    let toast = use_toast();
    let warehouse_id: RwSignal<Option<i64>> = RwSignal::new(None);
    let product_id: RwSignal<Option<i64>> = RwSignal::new(None);
    let reason_id: RwSignal<Option<i64>> = RwSignal::new(None);
    let quantity = RwSignal::new(String::new());
    let date = RwSignal::new(today());
    let description = RwSignal::new(String::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (saving, set_saving) = signal(false);

    let on_save = move |_| {
        let (Some(warehouse_id), Some(product_id), Some(reason_id)) = (
            warehouse_id.get_untracked(),
            product_id.get_untracked(),
            reason_id.get_untracked(),
        ) else {
            set_error.set(Some("Выберите склад, товар и причину".to_string()));
            return;
        };
        let parsed = parse_quantity(&quantity.get_untracked())
            .and_then(|q| parse_date(&date.get_untracked()).map(|d| (q, d)));
        let (quantity, withdrawal_date) = match parsed {
            Ok(parsed) => parsed,
            Err(message) => {
                set_error.set(Some(message));
                return;
            }
        };
        let dto = CreateWithdrawal {
            warehouse_id,
            product_id,
            withdrawal_reason_id: reason_id,
            quantity,
            withdrawal_date,
            description: non_empty(description.get_untracked()),
        };
        if let Err(message) = dto.validate() {
            set_error.set(Some(message));
            return;
        }
        set_error.set(None);
        set_saving.set(true);
        spawn_local(async move {
            let response = api::create_withdrawal(&dto).await;
            set_saving.set(false);
            match response {
                Ok(()) => {
                    toast.success("Списание создано");
                    on_saved.run(());
                }
                Err(e) => set_error.set(Some(e.to_string())),
            }
        });
    };

    view! {
        <Modal title="Новое списание" on_close=on_close>
            {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

            <LookupSelect label="Склад" options=lookups.warehouses value=warehouse_id />
            <LookupSelect label="Товар" options=lookups.products value=product_id />
            <LookupSelect label="Причина" options=lookups.withdrawal_reasons value=reason_id />

            <div class="form__row">
                <div class="form__group">
                    <Label>"Количество"</Label>
                    <Input value=quantity input_type=InputType::Number />
                </div>
                <div class="form__group">
                    <Label>"Дата"</Label>
                    <Input value=date input_type=InputType::Date />
                </div>
            </div>

            <div class="form__group">
                <Label>"Комментарий"</Label>
                <Input value=description />
            </div>

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
