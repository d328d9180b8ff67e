//! Reference lists shared by every page: id → name maps for table cells and
//! full lists for selectors.
//!
//! Loads go through one in-flight cache keyed by endpoint, so pages opened
//! together fetch each list once. Nothing is kept after a load completes.

use crate::shared::http;
use crate::shared::toast::ToastService;
use contracts::domain::a004_product::aggregate::Product;
use contracts::domain::a005_storage::aggregate::Storage;
use contracts::domain::a006_withdrawal_reason::aggregate::WithdrawalReason;
use contracts::domain::common::{lookup_name, name_lookup, NameLookup, Resource};
use contracts::system::users::User;
use contracts::shared::api_error::ApiError;
use contracts::shared::inflight::InflightCache;
use contracts::shared::page::ListResponse;
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde::de::DeserializeOwned;
use serde_json::Value;

thread_local! {
    static PENDING: InflightCache<&'static str, Result<Vec<Value>, ApiError>> = InflightCache::new();
}

/// Raw records of `endpoint`, joined with a load already in flight.
pub async fn load_values(endpoint: &'static str) -> Result<Vec<Value>, ApiError> {
    let load = PENDING.with(|cache| {
        cache.run(endpoint, move || async move {
            log::debug!("loading reference list '{}'", endpoint);
            let response: ListResponse<Value> = http::get_json(endpoint).await?;
            Ok(response.into_items())
        })
    });
    load.await
}

pub async fn load_all<T>() -> Result<Vec<T>, ApiError>
where
    T: Resource + DeserializeOwned,
{
    load_values(T::endpoint())
        .await?
        .into_iter()
        .map(|v| serde_json::from_value(v).map_err(|e| ApiError::Decode(e.to_string())))
        .collect()
}

pub async fn load_lookup<T>() -> Result<NameLookup, ApiError>
where
    T: Resource + DeserializeOwned,
{
    Ok(name_lookup(&load_all::<T>().await?))
}

/// Fill `target` with the lookup of `T`; failures end up in a toast.
pub fn spawn_lookup<T>(target: RwSignal<NameLookup>, toast: ToastService)
where
    T: Resource + DeserializeOwned + 'static,
{
    spawn_local(async move {
        match load_lookup::<T>().await {
            Ok(lookup) => target.set(lookup),
            Err(e) => toast.api_error(&format!("Не удалось загрузить: {}", T::list_name()), &e),
        }
    });
}

/// Lookups shown by the warehouse journals.
#[derive(Clone, Copy)]
pub struct WarehouseLookups {
    pub warehouses: RwSignal<NameLookup>,
    pub products: RwSignal<NameLookup>,
    pub users: RwSignal<NameLookup>,
    pub reasons: RwSignal<NameLookup>,
    /// Reasons offered on the withdrawal form.
    pub withdrawal_reasons: RwSignal<NameLookup>,
    /// Reasons offered on the transfer form.
    pub transfer_reasons: RwSignal<NameLookup>,
}

impl WarehouseLookups {
    /// Start loading every lookup; the signals fill in as responses arrive.
    pub fn load(toast: ToastService) -> Self {
        let lookups = Self {
            warehouses: RwSignal::new(NameLookup::new()),
            products: RwSignal::new(NameLookup::new()),
            users: RwSignal::new(NameLookup::new()),
            reasons: RwSignal::new(NameLookup::new()),
            withdrawal_reasons: RwSignal::new(NameLookup::new()),
            transfer_reasons: RwSignal::new(NameLookup::new()),
        };
        spawn_lookup::<Storage>(lookups.warehouses, toast);
        spawn_lookup::<Product>(lookups.products, toast);
        spawn_lookup::<User>(lookups.users, toast);
        spawn_local(async move {
            match load_all::<WithdrawalReason>().await {
                Ok(reasons) => {
                    let by_purpose = |keep: fn(&WithdrawalReason) -> bool| {
                        let matching: Vec<WithdrawalReason> =
                            reasons.iter().filter(|r| keep(r)).cloned().collect();
                        name_lookup(&matching)
                    };
                    lookups.withdrawal_reasons.set(by_purpose(WithdrawalReason::is_for_removing));
                    lookups.transfer_reasons.set(by_purpose(WithdrawalReason::is_for_adding));
                    lookups.reasons.set(name_lookup(&reasons));
                }
                Err(e) => toast.api_error("Не удалось загрузить причины", &e),
            }
        });
        lookups
    }

    pub fn warehouse(&self, id: i64) -> String {
        self.warehouses.with(|l| lookup_name(l, Some(id)))
    }

    pub fn product(&self, id: i64) -> String {
        self.products.with(|l| lookup_name(l, Some(id)))
    }

    pub fn user(&self, id: Option<i64>) -> String {
        self.users.with(|l| lookup_name(l, id))
    }

    pub fn reason(&self, id: Option<i64>) -> String {
        self.reasons.with(|l| lookup_name(l, id))
    }
}
