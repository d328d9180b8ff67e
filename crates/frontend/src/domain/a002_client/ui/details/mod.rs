use crate::domain::a002_client::api;
use crate::domain::a002_client::state::use_client_list_store;
use crate::domain::a002_client::ui::form::ClientForm;
use crate::shared::icons::icon;
use crate::shared::modal::Modal;
use crate::shared::toast::use_toast;
use contracts::domain::a002_client::aggregate::Client;
use contracts::domain::a003_source::aggregate::Source;
use contracts::domain::common::{lookup_name, name_lookup};
use contracts::shared::display::{format_datetime, yes_no};
use contracts::shared::dynamic_form::{sorted_fields, ClientTypeField};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// Label/value pairs of every field of the client's type, in display order.
fn field_rows(client: &Client, fields: &[ClientTypeField]) -> Vec<(String, String)> {
    sorted_fields(fields)
        .into_iter()
        .map(|f| (f.field_label.clone(), client.field_text(f.id, Some(f))))
        .collect()
}

/// Read-only card of a client with edit and delete actions.
#[component]
pub fn ClientDetails(
    client: Client,
    #[prop(into)] sources: Signal<Vec<Source>>,
    on_close: Callback<()>,
    /// Called after an update or delete so the list reloads.
    on_changed: Callback<()>,
) -> impl IntoView {
    let toast = use_toast();
    let store = use_client_list_store();
    let id = client.id;
    let current: RwSignal<Client> = RwSignal::new(client);
    let editing = RwSignal::new(false);
    let confirm_delete = RwSignal::new(false);
    let (deleting, set_deleting) = signal(false);

    // The row may be stale; show the stored record once it arrives.
    Effect::new(move |_| {
        spawn_local(async move {
            match api::fetch_client(id).await {
                Ok(fresh) => current.set(fresh),
                Err(e) => log::warn!("client {} not refreshed: {}", id, e),
            }
        });
    });

    let delete = move |_| {
        if !confirm_delete.get_untracked() {
            confirm_delete.set(true);
            return;
        }
        set_deleting.set(true);
        spawn_local(async move {
            let result = api::delete_client(id).await;
            set_deleting.set(false);
            match result {
                Ok(()) => {
                    toast.success("Клиент удалён");
                    on_changed.run(());
                    on_close.run(());
                }
                Err(e) => {
                    confirm_delete.set(false);
                    toast.api_error("Не удалось удалить клиента", &e);
                }
            }
        });
    };

    let company_label = move || {
        store
            .current_type()
            .map(|t| t.company_label().to_string())
            .unwrap_or_else(|| "Компания".to_string())
    };

    let details = move || {
        let client = current.get();
        let source = sources.with(|s| lookup_name(&name_lookup(s), client.source_id));
        let mut rows = vec![
            ("ID".to_string(), client.id.to_string()),
            (company_label(), client.company.clone()),
            ("Источник".to_string(), source),
            ("Активен".to_string(), yes_no(client.is_active).to_string()),
            (
                "Создан".to_string(),
                client.created_at.as_deref().map(format_datetime).unwrap_or_default(),
            ),
            (
                "Изменён".to_string(),
                client.updated_at.as_deref().map(format_datetime).unwrap_or_default(),
            ),
        ];
        rows.extend(store.fields.with(|f| field_rows(&client, f)));
        rows.into_iter()
            .map(|(label, value)| {
                view! {
                    <div class="details__row">
                        <span class="details__label">{label}</span>
                        <span class="details__value">{value}</span>
                    </div>
                }
            })
            .collect_view()
    };

    view! {
        <Show
            when=move || !editing.get()
            fallback=move || view! {
                <ClientForm
                    client=Some(current.get_untracked())
                    sources=sources
                    on_close=Callback::new(move |_| editing.set(false))
                    on_saved=Callback::new(move |_| {
                        on_changed.run(());
                        on_close.run(());
                    })
                />
            }
        >
            <Modal
                title=Signal::derive(move || current.with(|c| c.company.clone()))
                on_close=on_close
                action_buttons=ChildrenFn::to_children(move || view! {
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| editing.set(true)>
                        {icon("edit")}
                        " Изменить"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=delete
                        disabled=Signal::derive(move || deleting.get())
                    >
                        {icon("trash")}
                        {move || if confirm_delete.get() { " Точно удалить?" } else { " Удалить" }}
                    </Button>
                })
            >
                <div class="details">{details}</div>
            </Modal>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::dynamic_form::{FieldType, ListValue};

    #[test]
    fn field_rows_follow_display_order_and_resolve_lists() {
        let mut phone = ClientTypeField::new(1, "phone", "Телефон", FieldType::Phone).multiple();
        phone.display_order = 2;
        let mut region = ClientTypeField::new(2, "region", "Регион", FieldType::List)
            .with_list_values(vec![ListValue::new(3, "Киев")]);
        region.display_order = 1;

        let client: Client = serde_json::from_value(serde_json::json!({
            "id": 10,
            "clientTypeId": 5,
            "company": "Acme",
            "fieldValues": [
                {"fieldId": 1, "valueText": "380671234567", "displayOrder": 1},
                {"fieldId": 1, "valueText": "380501234567", "displayOrder": 0},
                {"fieldId": 2, "valueListId": 3}
            ]
        }))
        .unwrap();

        let rows = field_rows(&client, &[phone, region]);
        assert_eq!(
            rows,
            vec![
                ("Регион".to_string(), "Киев".to_string()),
                ("Телефон".to_string(), "380501234567, 380671234567".to_string()),
            ]
        );
    }
}
