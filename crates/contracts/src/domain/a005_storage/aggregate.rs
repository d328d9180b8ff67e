use crate::domain::common::{EntityId, Resource};
use serde::{Deserialize, Serialize};

/// Warehouse; documents reference it as `warehouseId`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Storage {
    pub id: EntityId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl Resource for Storage {
    fn resource_index() -> &'static str {
        "a005"
    }

    fn endpoint() -> &'static str {
        "storage"
    }

    fn element_name() -> &'static str {
        "Склад"
    }

    fn list_name() -> &'static str {
        "Склады"
    }

    fn id(&self) -> EntityId {
        self.id
    }

    fn title(&self) -> String {
        self.name.clone()
    }
}
