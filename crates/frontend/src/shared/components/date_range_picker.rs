use chrono::{Datelike, Duration, NaiveDate};
use leptos::prelude::*;
use thaw::*;

/// First and last day of the month `months_back` months before `anchor`.
pub fn month_bounds(anchor: NaiveDate, months_back: u32) -> Option<(NaiveDate, NaiveDate)> {
    let index = anchor.year() * 12 + anchor.month0() as i32 - months_back as i32;
    let (year, month) = (index.div_euclid(12), index.rem_euclid(12) as u32 + 1);
    let start = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    Some((start, next - Duration::days(1)))
}

fn iso(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Two date inputs with quick picks for the current and previous month.
/// Values are `YYYY-MM-DD`; an empty string leaves that end open.
#[component]
pub fn DateRangePicker(
    #[prop(into)] date_from: Signal<String>,
    #[prop(into)] date_to: Signal<String>,
    on_change: Callback<(String, String)>,
    #[prop(optional, into)] label: Option<String>,
) -> impl IntoView {
    let pick_month = move |months_back: u32| {
        let today = chrono::Local::now().date_naive();
        if let Some((start, end)) = month_bounds(today, months_back) {
            on_change.run((iso(start), iso(end)));
        }
    };

    view! {
        <div class="form__group date-range-picker">
            {label.map(|l| view! { <label class="form__label">{l}</label> })}
            <div class="date-range-picker__inputs">
                <input
                    type="date"
                    class="form__input"
                    prop:value=move || date_from.get()
                    on:change=move |ev| on_change.run((event_target_value(&ev), date_to.get_untracked()))
                />
                <span>" — "</span>
                <input
                    type="date"
                    class="form__input"
                    prop:value=move || date_to.get()
                    on:change=move |ev| on_change.run((date_from.get_untracked(), event_target_value(&ev)))
                />
                <Button size=ButtonSize::Small appearance=ButtonAppearance::Subtle on_click=move |_| pick_month(0)>
                    "Этот месяц"
                </Button>
                <Button size=ButtonSize::Small appearance=ButtonAppearance::Subtle on_click=move |_| pick_month(1)>
                    "Прошлый месяц"
                </Button>
                <Button
                    size=ButtonSize::Small
                    appearance=ButtonAppearance::Subtle
                    on_click=move |_| on_change.run((String::new(), String::new()))
                >
                    "Весь период"
                </Button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn current_and_previous_month() {
        assert_eq!(
            month_bounds(date(2024, 2, 15), 0),
            Some((date(2024, 2, 1), date(2024, 2, 29)))
        );
        assert_eq!(
            month_bounds(date(2024, 1, 10), 1),
            Some((date(2023, 12, 1), date(2023, 12, 31)))
        );
    }
}
