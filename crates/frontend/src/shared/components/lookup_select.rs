use contracts::domain::common::NameLookup;
use leptos::prelude::*;

/// `(id, name)` pairs sorted by name for a `<select>`.
pub fn sorted_options(lookup: &NameLookup) -> Vec<(i64, String)> {
    let mut options: Vec<(i64, String)> = lookup.iter().map(|(id, name)| (*id, name.clone())).collect();
    options.sort_by(|a, b| a.1.to_lowercase().cmp(&b.1.to_lowercase()).then(a.0.cmp(&b.0)));
    options
}

/// Select over an id → name lookup. The empty option stands for "none"/"all".
#[component]
pub fn LookupSelect(
    #[prop(into)] label: String,
    #[prop(into)] options: Signal<NameLookup>,
    value: RwSignal<Option<i64>>,
    /// Text of the empty option.
    #[prop(optional, into)]
    empty_label: Option<String>,
) -> impl IntoView {
    let empty_label = empty_label.unwrap_or_else(|| "—".to_string());
    view! {
        <div class="form__group">
            <label class="form__label">{label}</label>
            <select
                class="form__select"
                on:change=move |ev| value.set(event_target_value(&ev).parse().ok())
            >
                <option value="" selected=move || value.get().is_none()>{empty_label}</option>
                {move || {
                    options
                        .with(sorted_options)
                        .into_iter()
                        .map(|(id, name)| {
                            view! {
                                <option value=id.to_string() selected=move || value.get() == Some(id)>
                                    {name}
                                </option>
                            }
                        })
                        .collect_view()
                }}
            </select>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_sorted_by_name() {
        let mut lookup = NameLookup::new();
        lookup.insert(1, "склад Б".to_string());
        lookup.insert(2, "Склад А".to_string());
        assert_eq!(
            sorted_options(&lookup),
            vec![(2, "Склад А".to_string()), (1, "склад Б".to_string())]
        );
    }
}
