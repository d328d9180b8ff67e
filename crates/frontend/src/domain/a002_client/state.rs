//! Store of the clients page, shared with its modals through context.
//!
//! The selected client type, search term and filters survive reloads via
//! `localStorage`; everything else starts fresh.

use crate::shared::storage;
use contracts::domain::a001_client_type::aggregate::ClientType;
use contracts::domain::a002_client::aggregate::Client;
use contracts::shared::dynamic_form::ClientTypeField;
use contracts::shared::filters::SelectedFilters;
use contracts::shared::list_query::{ListQuery, SortDirection};
use contracts::shared::page::Page;
use contracts::shared::request_sequence::RequestSequence;
use contracts::system::session::keys;
use leptos::prelude::*;

pub const PAGE_SIZE: usize = 50;

#[derive(Clone, Debug)]
pub struct ClientListState {
    pub client_type_id: Option<i64>,
    pub search: String,
    pub sort_field: String,
    pub direction: SortDirection,
    pub page: usize,
    pub page_size: usize,
    pub total_count: u64,
    pub total_pages: usize,
    pub items: Vec<Client>,
}

impl Default for ClientListState {
    fn default() -> Self {
        Self {
            client_type_id: None,
            search: String::new(),
            sort_field: "id".to_string(),
            direction: SortDirection::Desc,
            page: 0,
            page_size: PAGE_SIZE,
            total_count: 0,
            total_pages: 1,
            items: Vec::new(),
        }
    }
}

impl ClientListState {
    /// State restored from the persisted client type and search term.
    pub fn restored(get: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            client_type_id: get(keys::CURRENT_CLIENT_TYPE_ID).and_then(|v| v.trim().parse().ok()),
            search: get(keys::SEARCH_TERM).unwrap_or_default(),
            ..Self::default()
        }
    }

    pub fn query(&self, filters: &SelectedFilters) -> ListQuery {
        ListQuery::new(self.page, self.page_size)
            .sorted_by(self.sort_field.clone(), self.direction)
            .with_search(self.search.clone())
            .with_filters(filters.clone())
            .with_optional_param("clientTypeId", self.client_type_id)
    }

    pub fn apply_page(&mut self, page: Page<Client>) {
        self.total_count = page.total_elements;
        self.total_pages = page.page_count();
        self.items = page.content;
        if self.page >= self.total_pages {
            self.page = self.total_pages - 1;
        }
    }

    /// Apply a page loaded for `client_type_id`; a page for a type that is no
    /// longer selected is dropped.
    pub fn apply_page_for(&mut self, client_type_id: Option<i64>, page: Page<Client>) -> bool {
        if self.client_type_id != client_type_id {
            return false;
        }
        self.apply_page(page);
        true
    }

    /// Same column: flip direction. New column: ascending.
    pub fn toggle_sort(&mut self, field: String) {
        if self.sort_field == field {
            self.direction = self.direction.toggled();
        } else {
            self.sort_field = field;
            self.direction = SortDirection::Asc;
        }
        self.page = 0;
    }
}

/// Filters as persisted, before the field schema is known.
pub fn stored_filters(get: impl Fn(&str) -> Option<String>) -> SelectedFilters {
    get(keys::SELECTED_FILTERS)
        .map(|raw| SelectedFilters::from_json(&raw))
        .unwrap_or_default()
}

/// Keep static filters and those of fields present in `fields`.
pub fn normalize_for(filters: &SelectedFilters, fields: &[ClientTypeField]) -> SelectedFilters {
    let names: Vec<&str> = fields.iter().map(|f| f.field_name.as_str()).collect();
    filters.normalize(&names)
}

#[derive(Clone, Copy)]
pub struct ClientListStore {
    pub state: RwSignal<ClientListState>,
    pub filters: RwSignal<SelectedFilters>,
    pub client_types: RwSignal<Vec<ClientType>>,
    /// Schema of the selected client type.
    pub fields: RwSignal<Vec<ClientTypeField>>,
    /// Tickets of page loads; only the latest may apply its result.
    pub loads: StoredValue<RequestSequence>,
}

impl ClientListStore {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(ClientListState::restored(storage::get_item)),
            filters: RwSignal::new(stored_filters(storage::get_item)),
            client_types: RwSignal::new(Vec::new()),
            fields: RwSignal::new(Vec::new()),
            loads: StoredValue::new(RequestSequence::new()),
        }
    }

    pub fn current_type(&self) -> Option<ClientType> {
        let id = self.state.with(|s| s.client_type_id)?;
        self.client_types
            .with(|types| types.iter().find(|t| t.id == id).cloned())
    }

    pub fn persist_filters(&self) {
        self.filters
            .with_untracked(|f| storage::set_item(keys::SELECTED_FILTERS, &f.to_json()));
    }

    pub fn persist_search(&self) {
        self.state
            .with_untracked(|s| storage::set_item(keys::SEARCH_TERM, &s.search));
    }

    pub fn persist_client_type(&self) {
        match self.state.with_untracked(|s| s.client_type_id) {
            Some(id) => storage::set_item(keys::CURRENT_CLIENT_TYPE_ID, &id.to_string()),
            None => storage::remove_item(keys::CURRENT_CLIENT_TYPE_ID),
        }
    }
}

pub fn provide_client_list_store() -> ClientListStore {
    let store = ClientListStore::new();
    provide_context(store);
    store
}

pub fn use_client_list_store() -> ClientListStore {
    use_context::<ClientListStore>().expect("ClientListStore context not found")
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::dynamic_form::FieldType;
    use std::collections::HashMap;

    fn storage(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn page_for_previous_type_is_dropped() {
        let page: Page<Client> = serde_json::from_value(serde_json::json!({
            "content": [{"id": 1, "clientTypeId": 5, "company": "Acme"}],
            "totalElements": 1,
            "totalPages": 1
        }))
        .unwrap();

        let mut state = ClientListState {
            client_type_id: Some(6),
            ..ClientListState::default()
        };
        assert!(!state.apply_page_for(Some(5), page.clone()));
        assert!(state.items.is_empty());

        assert!(state.apply_page_for(Some(6), page));
        assert_eq!(state.items.len(), 1);
        assert_eq!(state.total_count, 1);
    }

    #[test]
    fn restores_type_and_search() {
        let stored = storage(&[
            (keys::CURRENT_CLIENT_TYPE_ID, "5"),
            (keys::SEARCH_TERM, "acme"),
        ]);
        let state = ClientListState::restored(|k| stored.get(k).cloned());
        assert_eq!(state.client_type_id, Some(5));
        assert_eq!(state.search, "acme");
        assert_eq!(state.page, 0);
    }

    #[test]
    fn restored_filters_drop_unknown_fields() {
        let stored = storage(&[(
            keys::SELECTED_FILTERS,
            r#"{"source":["2"],"region":["3"],"legacy":["x"],"volumeFrom":["10"]}"#,
        )]);
        let fields = vec![
            ClientTypeField::new(1, "region", "Регион", FieldType::List),
            ClientTypeField::new(2, "volume", "Объём", FieldType::Number),
        ];
        let filters = normalize_for(&stored_filters(|k| stored.get(k).cloned()), &fields);
        let keys: Vec<&str> = filters.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["region", "source", "volumeFrom"]);
    }

    #[test]
    fn query_carries_type_and_search() {
        let state = ClientListState {
            client_type_id: Some(5),
            search: " acme ".into(),
            ..ClientListState::default()
        };
        let qs = state.query(&SelectedFilters::new()).to_query_string();
        assert!(qs.contains("clientTypeId=5"));
        assert!(qs.contains("q=acme"));
        assert!(qs.contains("sort=id"));
        assert!(qs.contains("direction=DESC"));
    }

    #[test]
    fn sort_toggle_and_page_clamp() {
        let mut state = ClientListState {
            page: 4,
            ..ClientListState::default()
        };
        state.toggle_sort("company".into());
        assert_eq!(state.direction, SortDirection::Asc);
        assert_eq!(state.page, 0);
        state.toggle_sort("company".into());
        assert_eq!(state.direction, SortDirection::Desc);

        state.page = 7;
        state.apply_page(Page {
            content: Vec::new(),
            total_elements: 0,
            total_pages: 0,
        });
        assert_eq!(state.total_pages, 1);
        assert_eq!(state.page, 0);
    }
}
