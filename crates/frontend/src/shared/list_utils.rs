//! List helpers: in-memory sorting, sort indicators and debounced search.
use contracts::shared::list_query::SortDirection;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::cmp::Ordering;

/// Delay after the last keystroke before a search fires.
pub const SEARCH_DEBOUNCE_MS: u32 = 300;

/// Rows that can be sorted by a named column.
pub trait Sortable {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering;
}

pub fn sort_list<T: Sortable>(items: &mut [T], field: &str, ascending: bool) {
    items.sort_by(|a, b| {
        let cmp = a.compare_by_field(b, field);
        if ascending {
            cmp
        } else {
            cmp.reverse()
        }
    });
}

/// Case-insensitive comparison of optional texts, empty last.
pub fn compare_text(a: Option<&str>, b: Option<&str>) -> Ordering {
    match (a.filter(|s| !s.is_empty()), b.filter(|s| !s.is_empty())) {
        (Some(a), Some(b)) => a.to_lowercase().cmp(&b.to_lowercase()),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Arrow shown next to a column header.
pub fn get_sort_indicator(current_field: &str, field: &str, direction: SortDirection) -> &'static str {
    if current_field == field {
        if direction.is_ascending() {
            " ▲"
        } else {
            " ▼"
        }
    } else {
        " ⇅"
    }
}

pub fn get_sort_class(current_field: &str, field: &str) -> &'static str {
    if current_field == field {
        "table__sort-indicator table__sort-indicator--active"
    } else {
        "table__sort-indicator"
    }
}

/// Search box with debounce and a clear button.
///
/// `on_change` fires once typing pauses for `SEARCH_DEBOUNCE_MS`; clearing
/// fires immediately.
#[component]
pub fn SearchInput(
    /// Starting text, e.g. restored from localStorage.
    #[prop(into)]
    initial: String,
    #[prop(into)]
    on_change: Callback<String>,
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Поиск...".to_string()
    } else {
        placeholder
    };

    let (input_value, set_input_value) = signal(initial);
    let generation = StoredValue::new(0_u64);

    let handle_input_change = move |new_value: String| {
        set_input_value.set(new_value.clone());
        generation.update_value(|g| *g += 1);
        let mine = generation.get_value();

        spawn_local(async move {
            TimeoutFuture::new(SEARCH_DEBOUNCE_MS).await;
            if generation.get_value() == mine {
                on_change.run(new_value);
            }
        });
    };

    let clear = move |_| {
        generation.update_value(|g| *g += 1);
        set_input_value.set(String::new());
        on_change.run(String::new());
    };

    view! {
        <div class="search-input">
            <span class="search-input__icon">{crate::shared::icons::icon("search")}</span>
            <input
                type="text"
                class="search-input__field"
                class:search-input__field--active=move || !input_value.get().trim().is_empty()
                placeholder=placeholder
                prop:value=move || input_value.get()
                on:input=move |ev| handle_input_change(event_target_value(&ev))
            />
            <Show when=move || !input_value.get().is_empty()>
                <button class="search-input__clear" on:click=clear title="Очистить">
                    {crate::shared::icons::icon("x")}
                </button>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_comparison_puts_empty_last() {
        assert_eq!(compare_text(Some("b"), Some("A")), Ordering::Greater);
        assert_eq!(compare_text(Some("a"), None), Ordering::Less);
        assert_eq!(compare_text(Some(""), Some("a")), Ordering::Greater);
    }

    #[test]
    fn indicators() {
        assert_eq!(get_sort_indicator("name", "name", SortDirection::Asc), " ▲");
        assert_eq!(get_sort_indicator("name", "id", SortDirection::Asc), " ⇅");
    }
}
