use serde::{Deserialize, Serialize};

/// One page of a paginated list response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", bound(deserialize = "T: Deserialize<'de>"))]
pub struct Page<T> {
    #[serde(default)]
    pub content: Vec<T>,
    #[serde(default)]
    pub total_elements: u64,
    #[serde(default)]
    pub total_pages: u32,
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self {
            content: Vec::new(),
            total_elements: 0,
            total_pages: 0,
        }
    }
}

/// List endpoints answer either with a bare array or with a `Page`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ListResponse<T> {
    Items(Vec<T>),
    Page(Page<T>),
}

impl<T> ListResponse<T> {
    pub fn into_items(self) -> Vec<T> {
        match self {
            ListResponse::Items(items) => items,
            ListResponse::Page(page) => page.content,
        }
    }
}

impl<T> Page<T> {
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Total page count, never below 1 so pagination controls stay stable.
    pub fn page_count(&self) -> usize {
        (self.total_pages as usize).max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_response_accepts_array_and_page() {
        let plain: ListResponse<i64> = serde_json::from_str("[1, 2]").unwrap();
        assert_eq!(plain.into_items(), vec![1, 2]);

        let paged: ListResponse<i64> =
            serde_json::from_str(r#"{"content":[3],"totalElements":1,"totalPages":1}"#).unwrap();
        assert_eq!(paged.into_items(), vec![3]);
    }

    #[derive(Debug, PartialEq, Deserialize)]
    struct Row {
        id: i64,
    }

    #[test]
    fn page_of_rows_without_default_tolerates_missing_keys() {
        let page: Page<Row> = serde_json::from_str(r#"{"content":[{"id":4}]}"#).unwrap();
        assert_eq!(page.content, vec![Row { id: 4 }]);
        assert_eq!(page.total_elements, 0);

        let empty: ListResponse<Row> = serde_json::from_str(r#"{"totalPages":3}"#).unwrap();
        assert!(empty.into_items().is_empty());
    }

    #[test]
    fn page_count_is_at_least_one() {
        let page: Page<i64> = Page::default();
        assert!(page.is_empty());
        assert_eq!(page.page_count(), 1);
    }
}
