use super::selected_values;
use contracts::shared::dynamic_form::{ControlKind, FormControl, FormInputs, SelectOption};
use leptos::prelude::*;

fn first_value(inputs: RwSignal<FormInputs>, field_id: i64) -> String {
    inputs.with(|m| {
        m.get(&field_id)
            .and_then(|v| v.first().cloned())
            .unwrap_or_default()
    })
}

fn set_value(inputs: RwSignal<FormInputs>, field_id: i64, value: String) {
    inputs.update(|m| {
        m.insert(field_id, vec![value]);
    });
}

/// Create/edit form built from the field schema. Raw inputs are written to
/// `inputs` keyed by field id; conversion happens on submit.
#[component]
pub fn DynamicForm(controls: Vec<FormControl>, inputs: RwSignal<FormInputs>) -> impl IntoView {
    if controls.is_empty() {
        return view! { <div class="form__empty">"Нет полей для заполнения"</div> }.into_any();
    }

    view! {
        <div class="dynamic-form">
            {controls.into_iter().map(|control| render_control(control, inputs)).collect_view()}
        </div>
    }
    .into_any()
}

fn render_control(control: FormControl, inputs: RwSignal<FormInputs>) -> AnyView {
    let field_id = control.field_id;
    let input_id = format!("field-{}", control.name);
    let label = if control.required {
        format!("{} *", control.label)
    } else {
        control.label.clone()
    };

    let widget = match control.kind {
        ControlKind::Text => text_input(field_id, "text", control.pattern.clone(), inputs),
        ControlKind::Number => text_input(field_id, "number", None, inputs),
        ControlKind::Date => text_input(field_id, "date", None, inputs),
        ControlKind::Phone { multiple: false } => {
            text_input(field_id, "tel", None, inputs)
        }
        ControlKind::Phone { multiple: true } => view! {
            <input
                type="tel"
                class="form__input"
                placeholder="+380501234567, +380671234567"
                prop:value=move || inputs.with(|m| m.get(&field_id).map(|v| v.join(", ")).unwrap_or_default())
                on:input=move |ev| set_value(inputs, field_id, event_target_value(&ev))
            />
        }
        .into_any(),
        ControlKind::Checkbox => view! {
            <input
                type="checkbox"
                class="form__checkbox"
                prop:checked=move || first_value(inputs, field_id) == "true"
                on:change=move |ev| {
                    set_value(inputs, field_id, event_target_checked(&ev).to_string())
                }
            />
        }
        .into_any(),
        ControlKind::Select { options, multiple: false } => single_select(field_id, options, inputs),
        ControlKind::Select { options, multiple: true } => multi_select(field_id, options, inputs),
    };

    view! {
        <div class="form__group">
            <label class="form__label" for=input_id.clone()>{label}</label>
            <div id=input_id>{widget}</div>
        </div>
    }
    .into_any()
}

fn text_input(
    field_id: i64,
    input_type: &'static str,
    pattern: Option<String>,
    inputs: RwSignal<FormInputs>,
) -> AnyView {
    view! {
        <input
            type=input_type
            class="form__input"
            pattern=pattern
            prop:value=move || first_value(inputs, field_id)
            on:input=move |ev| set_value(inputs, field_id, event_target_value(&ev))
        />
    }
    .into_any()
}

fn single_select(field_id: i64, options: Vec<SelectOption>, inputs: RwSignal<FormInputs>) -> AnyView {
    view! {
        <select
            class="form__select"
            on:change=move |ev| set_value(inputs, field_id, event_target_value(&ev))
        >
            <option value="" selected=move || first_value(inputs, field_id).is_empty()>"—"</option>
            {options
                .into_iter()
                .map(|opt| {
                    let value = opt.value.clone();
                    view! {
                        <option value=opt.value selected=move || first_value(inputs, field_id) == value>
                            {opt.label}
                        </option>
                    }
                })
                .collect_view()}
        </select>
    }
    .into_any()
}

fn multi_select(field_id: i64, options: Vec<SelectOption>, inputs: RwSignal<FormInputs>) -> AnyView {
    view! {
        <select
            multiple
            class="form__select form__select--multiple"
            on:change=move |ev| {
                let values = selected_values(&ev);
                inputs.update(|m| {
                    m.insert(field_id, values);
                });
            }
        >
            {options
                .into_iter()
                .map(|opt| {
                    let value = opt.value.clone();
                    let is_selected = move || {
                        inputs.with(|m| m.get(&field_id).is_some_and(|v| v.contains(&value)))
                    };
                    view! { <option value=opt.value selected=is_selected>{opt.label}</option> }
                })
                .collect_view()}
        </select>
    }
    .into_any()
}
