mod selected_filters;

pub use selected_filters::{range_keys, SelectedFilters, StaticFilter, STATIC_FILTER_KEYS};
