//! Query-string encoding for list endpoints.
//!
//! List endpoints accept `page`, `size`, `sort`, `direction`, an optional
//! free-text `q` and `filters`: a JSON-encoded map of field → string array.

use crate::shared::filters::SelectedFilters;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortDirection {
    #[serde(rename = "ASC")]
    Asc,
    #[default]
    #[serde(rename = "DESC")]
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    pub fn is_ascending(&self) -> bool {
        matches!(self, SortDirection::Asc)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListQuery {
    pub page: usize,
    pub size: usize,
    pub sort: Option<String>,
    pub direction: SortDirection,
    pub q: Option<String>,
    pub filters: SelectedFilters,
    /// Endpoint-specific parameters, e.g. `clientTypeId`.
    pub extra: Vec<(String, String)>,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            page: 0,
            size: 50,
            sort: None,
            direction: SortDirection::Desc,
            q: None,
            filters: SelectedFilters::default(),
            extra: Vec::new(),
        }
    }
}

impl ListQuery {
    pub fn new(page: usize, size: usize) -> Self {
        Self {
            page,
            size,
            ..Self::default()
        }
    }

    pub fn sorted_by(mut self, field: impl Into<String>, direction: SortDirection) -> Self {
        self.sort = Some(field.into());
        self.direction = direction;
        self
    }

    pub fn with_search(mut self, q: impl Into<String>) -> Self {
        let q = q.into();
        self.q = if q.trim().is_empty() {
            None
        } else {
            Some(q.trim().to_string())
        };
        self
    }

    pub fn with_filters(mut self, filters: SelectedFilters) -> Self {
        self.filters = filters;
        self
    }

    pub fn with_param(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.extra.push((key.into(), value.to_string()));
        self
    }

    pub fn with_optional_param(self, key: impl Into<String>, value: Option<impl ToString>) -> Self {
        match value {
            Some(value) => self.with_param(key, value),
            None => self,
        }
    }

    /// Encode as a query string without the leading `?`.
    pub fn to_query_string(&self) -> String {
        let mut parts = vec![
            format!("page={}", self.page),
            format!("size={}", self.size),
        ];

        if let Some(sort) = &self.sort {
            parts.push(format!("sort={}", urlencoding::encode(sort)));
            parts.push(format!("direction={}", self.direction.as_str()));
        }
        if let Some(q) = &self.q {
            parts.push(format!("q={}", urlencoding::encode(q)));
        }
        for (key, value) in &self.extra {
            parts.push(format!(
                "{}={}",
                urlencoding::encode(key),
                urlencoding::encode(value)
            ));
        }
        if !self.filters.is_empty() {
            parts.push(format!(
                "filters={}",
                urlencoding::encode(&self.filters.to_json())
            ));
        }

        parts.join("&")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_paging_sort_and_filters() {
        let mut filters = SelectedFilters::default();
        filters.set("region", vec!["Київ".to_string()]);

        let query = ListQuery::new(2, 25)
            .sorted_by("company", SortDirection::Asc)
            .with_search("  acme ")
            .with_param("clientTypeId", 5)
            .with_filters(filters);

        assert_eq!(
            query.to_query_string(),
            "page=2&size=25&sort=company&direction=ASC&q=acme&clientTypeId=5\
             &filters=%7B%22region%22%3A%5B%22%D0%9A%D0%B8%D1%97%D0%B2%22%5D%7D"
        );
    }

    #[test]
    fn omits_empty_parts() {
        let query = ListQuery::new(0, 50).with_search("   ");
        assert_eq!(query.to_query_string(), "page=0&size=50");
    }
}
