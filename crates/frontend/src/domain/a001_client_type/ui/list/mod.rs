mod form;

use crate::domain::a001_client_type::api;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::detail_tab_key;
use crate::layout::tabs::tab_labels::CLIENT_TYPE_DETAILS_PREFIX;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::toast::use_toast;
use contracts::domain::a001_client_type::aggregate::ClientType;
use form::ClientTypeForm;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

#[component]
pub fn ClientTypeList() -> impl IntoView {
    let toast = use_toast();
    let tabs_store =
        use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");
    let items: RwSignal<Vec<ClientType>> = RwSignal::new(Vec::new());
    let (loading, set_loading) = signal(false);
    // None: closed; Some(None): create; Some(Some(t)): edit.
    let form_type: RwSignal<Option<Option<ClientType>>> = RwSignal::new(None);

    let load = move || {
        set_loading.set(true);
        spawn_local(async move {
            match api::load_client_types().await {
                Ok(mut list) => {
                    list.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
                    items.set(list);
                }
                Err(e) => toast.api_error("Не удалось загрузить типы клиентов", &e),
            }
            set_loading.set(false);
        });
    };

    Effect::new(move |_| load());

    let open_details = move |client_type: &ClientType| {
        let key = detail_tab_key(CLIENT_TYPE_DETAILS_PREFIX, client_type.id);
        tabs_store.open_tab(&key, &format!("Поля: {}", client_type.name));
    };

    let delete = move |client_type: ClientType| {
        spawn_local(async move {
            match api::delete_client_type(client_type.id).await {
                Ok(()) => {
                    toast.success(format!("Тип клиента «{}» удалён", client_type.name));
                    load();
                }
                Err(e) => toast.api_error("Не удалось удалить тип клиента", &e),
            }
        });
    };

    view! {
        <PageFrame page_id="a001_client_type--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Типы клиентов"</h1>
                    <Badge>{move || items.with(Vec::len).to_string()}</Badge>
                </div>
                <div class="page__header-right">
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| form_type.set(Some(None))>
                        {icon("plus")}
                        " Новый"
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
                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell resizable=false min_width=60.0>"ID"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=220.0>"Название"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=180.0>"Подпись компании"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=100.0>"Статус"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=130.0></TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || items.get()
                                key=|t| (t.id, t.name.clone(), t.name_field_label.clone(), t.active)
                                children=move |client_type| {
                                    let for_open = client_type.clone();
                                    let for_edit = client_type.clone();
                                    let for_delete = client_type.clone();
                                    let (status_class, status_label) = if client_type.active {
                                        ("badge badge--success", "Активен")
                                    } else {
                                        ("badge badge--error", "Отключён")
                                    };
                                    let company_label = client_type.company_label().to_string();
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout>{client_type.id.to_string()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    <a href="#" class="table__link" on:click=move |ev| {
                                                        ev.prevent_default();
                                                        open_details(&for_open);
                                                    }>
                                                        {client_type.name.clone()}
                                                    </a>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{company_label}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <span class=status_class>{status_label}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <Button
                                                    appearance=ButtonAppearance::Subtle
                                                    on_click=move |_| form_type.set(Some(Some(for_edit.clone())))
                                                    attr:title="Редактировать"
                                                >
                                                    {icon("edit")}
                                                </Button>
                                                <Button
                                                    appearance=ButtonAppearance::Subtle
                                                    on_click=move |_| delete(for_delete.clone())
                                                    attr:title="Удалить"
                                                >
                                                    {icon("trash")}
                                                </Button>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                </div>

                {move || form_type.get().map(|client_type| view! {
                    <ClientTypeForm
                        client_type=client_type
                        on_close=Callback::new(move |_| form_type.set(None))
                        on_saved=Callback::new(move |_| {
                            form_type.set(None);
                            load();
                        })
                    />
                })}
            </div>
        </PageFrame>
    }
}
