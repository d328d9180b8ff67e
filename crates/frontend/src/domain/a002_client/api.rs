//! `/client` endpoints.
//!
//! Plain list loads are de-duplicated per query string. Searches go through
//! one channel: a new search aborts the previous request, and a response
//! that resolves after being superseded is dropped.

use crate::shared::http;
use contracts::domain::a002_client::aggregate::{Client, CreateClient, UpdateClient};
use contracts::domain::common::Resource;
use contracts::shared::api_error::ApiError;
use contracts::shared::inflight::InflightCache;
use contracts::shared::list_query::ListQuery;
use contracts::shared::page::Page;
use contracts::shared::request_sequence::RequestSequence;
use std::cell::RefCell;
use web_sys::AbortController;

thread_local! {
    static PENDING: InflightCache<String, Result<Page<Client>, ApiError>> = InflightCache::new();
    static SEARCH: SearchChannel = SearchChannel::default();
}

#[derive(Default)]
struct SearchChannel {
    sequence: RequestSequence,
    controller: RefCell<Option<AbortController>>,
}

impl SearchChannel {
    /// Abort the running search and hand out a fresh abort controller.
    fn restart(&self) -> Result<AbortController, ApiError> {
        if let Some(previous) = self.controller.borrow_mut().take() {
            previous.abort();
        }
        let controller = AbortController::new()
            .map_err(|_| ApiError::Network("AbortController недоступен".into()))?;
        *self.controller.borrow_mut() = Some(controller.clone());
        Ok(controller)
    }
}

fn base() -> &'static str {
    Client::endpoint()
}

/// One page of clients. Concurrent calls with the same query share a request.
pub async fn load_page(query: &ListQuery) -> Result<Page<Client>, ApiError> {
    let path = format!("{}?{}", base(), query.to_query_string());
    let load = PENDING.with(|cache| {
        cache.run(path.clone(), move || async move {
            log::debug!("loading {}", path);
            http::get_json(&path).await
        })
    });
    load.await
}

/// Full-text search over clients.
///
/// `Ok(None)` means a newer search superseded this one; its result must be
/// ignored.
pub async fn search(query: &ListQuery) -> Result<Option<Page<Client>>, ApiError> {
    let (ticket, controller) = SEARCH.with(|channel| {
        let controller = channel.restart();
        (channel.sequence.next(), controller)
    });
    let controller = controller?;
    let path = format!("{}/search?{}", base(), query.to_query_string());

    let result = http::get_json_abortable::<Page<Client>>(&path, &controller.signal()).await;
    if !ticket.is_current() {
        log::debug!("search #{} superseded, result dropped", ticket.id());
        return Ok(None);
    }
    SEARCH.with(|channel| channel.controller.borrow_mut().take());
    match result {
        Err(e) if e.is_aborted() => Ok(None),
        other => other.map(Some),
    }
}

/// Supersede any running search, e.g. when the search box is cleared.
pub fn cancel_search() {
    SEARCH.with(|channel| {
        channel.sequence.invalidate();
        if let Some(controller) = channel.controller.borrow_mut().take() {
            controller.abort();
        }
    });
}

pub async fn fetch_client(id: i64) -> Result<Client, ApiError> {
    http::get_json(&format!("{}/{}", base(), id)).await
}

pub async fn create_client(body: &CreateClient) -> Result<(), ApiError> {
    http::post_json(base(), body).await
}

pub async fn update_client(id: i64, body: &UpdateClient) -> Result<(), ApiError> {
    http::put_json(&format!("{}/{}", base(), id), body).await
}

pub async fn delete_client(id: i64) -> Result<(), ApiError> {
    http::delete(&format!("{}/{}", base(), id)).await
}
