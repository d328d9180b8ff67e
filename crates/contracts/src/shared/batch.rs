//! Per-item reporting for multi-request updates.
//!
//! The backend has no batch endpoint for permission grants, so saving a grid
//! issues one request per changed row. Requests run concurrently and every
//! row gets its own outcome; nothing is rolled back.

use crate::shared::api_error::ApiError;
use futures::future::join_all;
use std::future::Future;

#[derive(Debug, Clone, PartialEq)]
pub struct BatchItemResult<K> {
    pub key: K,
    pub label: String,
    pub error: Option<String>,
}

impl<K> BatchItemResult<K> {
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BatchOutcome<K> {
    pub items: Vec<BatchItemResult<K>>,
}

impl<K> Default for BatchOutcome<K> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<K> BatchOutcome<K> {
    pub fn succeeded(&self) -> impl Iterator<Item = &BatchItemResult<K>> {
        self.items.iter().filter(|i| i.is_ok())
    }

    pub fn failed(&self) -> impl Iterator<Item = &BatchItemResult<K>> {
        self.items.iter().filter(|i| !i.is_ok())
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn all_ok(&self) -> bool {
        self.items.iter().all(BatchItemResult::is_ok)
    }

    /// Human readable summary: counts plus the label and error of every failure.
    pub fn summary(&self) -> String {
        let ok = self.succeeded().count();
        let failed: Vec<String> = self
            .failed()
            .map(|i| format!("{}: {}", i.label, i.error.as_deref().unwrap_or_default()))
            .collect();

        if failed.is_empty() {
            format!("Сохранено: {}", ok)
        } else {
            format!(
                "Сохранено: {}, ошибок: {} ({})",
                ok,
                failed.len(),
                failed.join("; ")
            )
        }
    }
}

/// Run `op` for every `(key, label)` concurrently and collect each outcome.
pub async fn run_batch<K, F, Fut>(items: Vec<(K, String)>, mut op: F) -> BatchOutcome<K>
where
    K: Clone,
    F: FnMut(K) -> Fut,
    Fut: Future<Output = Result<(), ApiError>>,
{
    let keys: Vec<(K, String)> = items.clone();
    let results = join_all(items.into_iter().map(|(key, _)| op(key))).await;

    BatchOutcome {
        items: keys
            .into_iter()
            .zip(results)
            .map(|((key, label), result)| BatchItemResult {
                key,
                label,
                error: result.err().map(|e| e.to_string()),
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    #[test]
    fn partial_failure_is_reported_per_item() {
        let items = vec![
            (1_i64, "Киев".to_string()),
            (2, "Львов".to_string()),
            (3, "Одесса".to_string()),
        ];

        let outcome = block_on(run_batch(items, |id| async move {
            if id == 2 {
                Err(ApiError::Http {
                    status: 403,
                    message: "Нет доступа".into(),
                })
            } else {
                Ok(())
            }
        }));

        assert!(!outcome.all_ok());
        assert_eq!(outcome.succeeded().count(), 2);
        let failed: Vec<i64> = outcome.failed().map(|i| i.key).collect();
        assert_eq!(failed, vec![2]);
        assert_eq!(
            outcome.summary(),
            "Сохранено: 2, ошибок: 1 (Львов: Нет доступа)"
        );
    }

    #[test]
    fn all_ok_summary() {
        let outcome = block_on(run_batch(vec![(1, "a".to_string())], |_| async { Ok(()) }));
        assert!(outcome.all_ok());
        assert_eq!(outcome.summary(), "Сохранено: 1");
    }
}
