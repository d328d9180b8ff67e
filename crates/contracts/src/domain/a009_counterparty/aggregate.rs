use crate::domain::common::{EntityId, Resource};
use serde::{Deserialize, Serialize};

/// Counterparty. Vehicles reference it as sender and receiver.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Counterparty {
    pub id: EntityId,
    pub name: String,
    /// CLIENT, SUPPLIER or OTHER
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
}

impl Resource for Counterparty {
    fn resource_index() -> &'static str {
        "a009"
    }

    fn endpoint() -> &'static str {
        "counterparty"
    }

    fn element_name() -> &'static str {
        "Контрагент"
    }

    fn list_name() -> &'static str {
        "Контрагенты"
    }

    fn id(&self) -> EntityId {
        self.id
    }

    fn title(&self) -> String {
        self.name.clone()
    }
}
