use super::selected_values;
use crate::shared::components::FilterTag;
use contracts::shared::dynamic_form::{FilterControl, FilterKind, SelectOption, TRI_STATE_OPTIONS};
use contracts::shared::filters::SelectedFilters;
use leptos::prelude::*;

fn first(filters: RwSignal<SelectedFilters>, key: &str) -> String {
    filters.with(|f| f.first(key).unwrap_or_default().to_string())
}

/// Filter panel body: one control per `FilterControl`. Every change is
/// written to `filters` immediately; text filters apply on `change`.
#[component]
pub fn DynamicFilters(
    #[prop(into)] controls: Signal<Vec<FilterControl>>,
    filters: RwSignal<SelectedFilters>,
) -> impl IntoView {
    view! {
        <div class="filter-grid">
            {move || {
                controls
                    .get()
                    .into_iter()
                    .map(|control| render_filter(control, filters))
                    .collect_view()
            }}
        </div>
    }
}

fn render_filter(control: FilterControl, filters: RwSignal<SelectedFilters>) -> AnyView {
    let label = control.label.clone();
    let key = control.key.clone();

    let widget = match control.kind {
        FilterKind::Range {
            from_key,
            to_key,
            input,
        } => view! {
            <div class="filter-range">
                {range_end(from_key, "от", input.input_type(), filters)}
                {range_end(to_key, "до", input.input_type(), filters)}
            </div>
        }
        .into_any(),
        FilterKind::MultiSelect { options } => multi_select(key, options, filters),
        FilterKind::TriState => {
            let value_key = key.clone();
            view! {
                <select
                    class="form__select"
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        filters.update(|f| f.set_scalar(key.clone(), &value));
                    }
                >
                    {TRI_STATE_OPTIONS
                        .iter()
                        .map(|&(value, text)| {
                            let value_key = value_key.clone();
                            view! {
                                <option value=value selected=move || first(filters, &value_key) == value>
                                    {text}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            }
            .into_any()
        }
        FilterKind::Text => {
            let value_key = key.clone();
            view! {
                <input
                    type="text"
                    class="form__input"
                    prop:value=move || first(filters, &value_key)
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        filters.update(|f| f.set_scalar(key.clone(), &value));
                    }
                />
            }
            .into_any()
        }
    };

    view! {
        <div class="form__group filter-item">
            <label class="form__label">{label}</label>
            {widget}
        </div>
    }
    .into_any()
}

fn range_end(
    key: String,
    placeholder: &'static str,
    input_type: &'static str,
    filters: RwSignal<SelectedFilters>,
) -> impl IntoView {
    let value_key = key.clone();
    view! {
        <input
            type=input_type
            class="form__input"
            placeholder=placeholder
            prop:value=move || first(filters, &value_key)
            on:change=move |ev| {
                let value = event_target_value(&ev);
                filters.update(|f| f.set_scalar(key.clone(), &value));
            }
        />
    }
}

fn multi_select(key: String, options: Vec<SelectOption>, filters: RwSignal<SelectedFilters>) -> AnyView {
    let set_key = key.clone();
    view! {
        <select
            multiple
            class="form__select form__select--multiple"
            on:change=move |ev| {
                let values = selected_values(&ev);
                filters.update(|f| f.set(set_key.clone(), values));
            }
        >
            {options
                .into_iter()
                .map(|opt| {
                    let key = key.clone();
                    let value = opt.value.clone();
                    view! {
                        <option value=opt.value selected=move || filters.with(|f| f.contains(&key, &value))>
                            {opt.label}
                        </option>
                    }
                })
                .collect_view()}
        </select>
    }
    .into_any()
}

/// Chips for every active filter value; removing a chip drops that key.
pub fn filter_tags(controls: Signal<Vec<FilterControl>>, filters: RwSignal<SelectedFilters>) -> impl IntoView {
    move || {
        let controls = controls.get();
        filters
            .get()
            .iter()
            .map(|(key, values)| {
                let label = tag_label(&controls, key, values);
                let key = key.clone();
                view! {
                    <FilterTag
                        label=label
                        on_remove=Callback::new(move |_| filters.update(|f| f.remove(&key)))
                    />
                }
            })
            .collect_view()
    }
}

fn tag_label(controls: &[FilterControl], key: &str, values: &[String]) -> String {
    let Some(control) = controls.iter().find(|c| c.keys().iter().any(|k| k == key)) else {
        return format!("{}: {}", key, values.join(", "));
    };

    let text = match &control.kind {
        FilterKind::Range { from_key, .. } => {
            let bound = if key == from_key { "от" } else { "до" };
            format!("{} {}", bound, values.join(", "))
        }
        FilterKind::MultiSelect { options } => values
            .iter()
            .map(|v| {
                options
                    .iter()
                    .find(|o| &o.value == v)
                    .map(|o| o.label.clone())
                    .unwrap_or_else(|| v.clone())
            })
            .collect::<Vec<_>>()
            .join(", "),
        FilterKind::TriState => TRI_STATE_OPTIONS
            .iter()
            .find(|(v, _)| Some(*v) == values.first().map(String::as_str))
            .map(|(_, t)| t.to_string())
            .unwrap_or_default(),
        FilterKind::Text => values.join(", "),
    };
    format!("{}: {}", control.label, text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::dynamic_form::{build_filter_controls, ClientTypeField, FieldType, ListValue};

    #[test]
    fn tag_labels_use_option_text_and_range_bounds() {
        let fields = vec![
            ClientTypeField::new(1, "region", "Регион", FieldType::List)
                .filterable()
                .with_list_values(vec![ListValue::new(3, "Киев")]),
            ClientTypeField::new(2, "volume", "Объём", FieldType::Number).filterable(),
        ];
        let controls = build_filter_controls(&fields);

        assert_eq!(tag_label(&controls, "region", &["3".to_string()]), "Регион: Киев");
        assert_eq!(tag_label(&controls, "volumeTo", &["10".to_string()]), "Объём: до 10");
        assert_eq!(tag_label(&controls, "other", &["x".to_string()]), "other: x");
    }
}
