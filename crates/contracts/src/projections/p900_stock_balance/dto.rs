//! Stock balances per warehouse. Computed by the backend; the console only shows them.

use crate::domain::common::EntityId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockBalance {
    pub warehouse_id: EntityId,
    pub product_id: EntityId,
    pub quantity: f64,
    #[serde(default)]
    pub total_cost_eur: f64,
    #[serde(default)]
    pub average_price_eur: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BalanceTotals {
    pub quantity: f64,
    pub total_cost_eur: f64,
}

/// Footer totals over the shown rows.
pub fn totals(balances: &[StockBalance]) -> BalanceTotals {
    balances.iter().fold(BalanceTotals::default(), |acc, b| BalanceTotals {
        quantity: acc.quantity + b.quantity,
        total_cost_eur: acc.total_cost_eur + b.total_cost_eur,
    })
}

/// Rows with a non-zero quantity, optionally of one warehouse.
pub fn visible_balances(
    balances: &[StockBalance],
    warehouse_id: Option<EntityId>,
    hide_empty: bool,
) -> Vec<StockBalance> {
    balances
        .iter()
        .filter(|b| warehouse_id.map_or(true, |w| b.warehouse_id == w))
        .filter(|b| !hide_empty || b.quantity != 0.0)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn balance(warehouse_id: EntityId, quantity: f64, cost: f64) -> StockBalance {
        StockBalance {
            warehouse_id,
            product_id: 1,
            quantity,
            total_cost_eur: cost,
            average_price_eur: 0.0,
        }
    }

    #[test]
    fn filters_and_totals() {
        let rows = vec![balance(1, 10.0, 20.0), balance(1, 0.0, 0.0), balance(2, 5.0, 7.5)];
        let shown = visible_balances(&rows, Some(1), true);
        assert_eq!(shown.len(), 1);
        assert_eq!(
            totals(&visible_balances(&rows, None, false)),
            BalanceTotals {
                quantity: 15.0,
                total_cost_eur: 27.5
            }
        );
    }
}
